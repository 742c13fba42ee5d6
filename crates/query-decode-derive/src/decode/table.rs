// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field table generation.
//!
//! Emits `const FIELDS` with one `FieldDescriptor` per field, in
//! declaration order. Lookup keys are resolved here, at compile time.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{FieldDef, RecordDef};

/// Generate the `FIELDS` associated constant.
pub fn generate(record: &RecordDef) -> TokenStream {
    let entries = record.fields.iter().map(descriptor);

    quote! {
        const FIELDS: &'static [::query_decode::FieldDescriptor] = &[
            #(#entries),*
        ];
    }
}

fn descriptor(field: &FieldDef) -> TokenStream {
    let name = field.name_str();
    let key = field.key();
    let ty = field.ty_str();
    let aliased = field.is_aliased();
    let settable = field.settable;

    quote! {
        ::query_decode::FieldDescriptor {
            name: #name,
            key: #key,
            ty: #ty,
            aliased: #aliased,
            settable: #settable
        }
    }
}
