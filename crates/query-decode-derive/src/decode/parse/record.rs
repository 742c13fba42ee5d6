// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Record-level parsing.
//!
//! A destination must be a struct with named fields. Enums, unions, tuple
//! structs and unit structs are rejected by darling's shape check, before
//! any code is generated.

use darling::{FromDeriveInput, ast::Data, util::Ignored};
use syn::{DeriveInput, GenericParam, Generics, Ident};

use super::field::{FieldAttrs, FieldDef};

/// Record-level input parsed by darling.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(query), supports(struct_named))]
struct RecordAttrs {
    ident:    Ident,
    generics: Generics,
    data:     Data<Ignored, FieldAttrs>
}

/// Complete parsed record definition.
///
/// # Construction
///
/// ```rust,ignore
/// let record = RecordDef::from_derive_input(&input)?;
/// ```
#[derive(Debug)]
pub struct RecordDef {
    /// Struct identifier (e.g., `Dest`).
    pub ident: Ident,

    /// Struct generics. Only lifetime parameters survive parsing.
    pub generics: Generics,

    /// All fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl RecordDef {
    /// Parse a record definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple struct or unit struct
    /// - The struct has type or const parameters
    /// - A field attribute is invalid
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = RecordAttrs::from_derive_input(input)?;

        if let Some(param) = attrs
            .generics
            .params
            .iter()
            .find(|param| !matches!(param, GenericParam::Lifetime(_)))
        {
            return Err(darling::Error::custom(
                "QueryDecode cannot be derived for structs with type or const parameters"
            )
            .with_span(param));
        }

        let fields = attrs
            .data
            .take_struct()
            .ok_or_else(|| {
                darling::Error::custom("QueryDecode can only be derived for structs")
                    .with_span(&attrs.ident)
            })?
            .fields;

        let mut errors = darling::Error::accumulator();
        let fields: Vec<FieldDef> = fields
            .into_iter()
            .filter_map(|field| errors.handle(FieldDef::from_attrs(field)))
            .collect();
        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            fields
        })
    }

    /// Fields the decoder may write, with their index in `FIELDS`.
    pub fn settable_fields(&self) -> impl Iterator<Item = (usize, &FieldDef)> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.settable)
    }
}
