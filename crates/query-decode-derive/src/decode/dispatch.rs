// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-field dispatcher generation.
//!
//! Emits `decode_field`, a `match` from field index to a coercion into that
//! field. Every field goes through `__private::Slot`, so a field type
//! without a `QueryValue` impl resolves to the unsupported-type fallback
//! instead of failing to compile.
//!
//! Private fields get no arm: the runtime loop rejects them before
//! dispatching.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::RecordDef;

/// Generate the `decode_field` method.
pub fn generate(record: &RecordDef) -> TokenStream {
    let arms = record.settable_fields().map(|(index, field)| {
        let ident = &field.ident;
        quote! {
            #index => (&&::query_decode::__private::Slot::new(&mut self.#ident)).coerce_slot(value),
        }
    });

    quote! {
        #[allow(unused_variables, clippy::needless_borrow)]
        fn decode_field(
            &mut self,
            index: usize,
            value: &str
        ) -> ::core::result::Result<(), ::query_decode::ValueError> {
            #[allow(unused_imports)]
            use ::query_decode::__private::{CoerceUnsupported as _, CoerceValue as _};

            match index {
                #(#arms)*
                _ => ::core::result::Result::Err(::query_decode::ValueError::UnknownField { index })
            }
        }
    }
}
