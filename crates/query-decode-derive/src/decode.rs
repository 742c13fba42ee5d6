// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! QueryDecode derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! decode.rs (orchestrator)
//! │
//! ├── parse/       → Attribute parsing (RecordDef, FieldDef)
//! │
//! ├── table.rs     → `const FIELDS: &[FieldDescriptor]`
//! └── dispatch.rs  → `fn decode_field(&mut self, index, value)`
//! ```
//!
//! # Generated Code
//!
//! For
//!
//! ```rust,ignore
//! #[derive(QueryDecode)]
//! pub struct Dest {
//!     #[query(alias = "title")]
//!     pub headline: String
//! }
//! ```
//!
//! the macro emits
//!
//! ```rust,ignore
//! impl ::query_decode::QueryDecode for Dest {
//!     const FIELDS: &'static [::query_decode::FieldDescriptor] = &[
//!         ::query_decode::FieldDescriptor { name: "headline", key: "title", .. }
//!     ];
//!
//!     fn decode_field(&mut self, index: usize, value: &str) -> Result<(), ValueError> {
//!         match index {
//!             0usize => (&&Slot::new(&mut self.headline)).coerce_slot(value),
//!             _ => Err(ValueError::UnknownField { index })
//!         }
//!     }
//! }
//! ```

mod dispatch;
pub mod parse;
mod table;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::RecordDef;

/// Main entry point for the QueryDecode derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match RecordDef::from_derive_input(&input) {
        Ok(record) => generate(&record).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(record: &RecordDef) -> TokenStream2 {
    let ident = &record.ident;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();

    let table = table::generate(record);
    let dispatch = dispatch::generate(record);

    quote! {
        #[automatically_derived]
        impl #impl_generics ::query_decode::QueryDecode for #ident #ty_generics #where_clause {
            #table
            #dispatch
        }
    }
}
