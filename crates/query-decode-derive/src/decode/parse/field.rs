// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! The only field option is the lookup alias:
//!
//! ```rust,ignore
//! #[query(alias = "is_published")]
//! pub published: bool,
//! ```
//!
//! Without an alias the lookup key is the field name folded to ASCII
//! lowercase, with any raw identifier prefix removed (`r#Type` → `type`).

use darling::FromField;
use quote::ToTokens;
use syn::{Ident, Type, Visibility, ext::IdentExt};

/// Field attributes parsed by darling.
#[derive(Debug, FromField)]
#[darling(attributes(query))]
pub struct FieldAttrs {
    /// Field identifier; `None` for tuple fields, rejected upstream.
    pub ident: Option<Ident>,

    /// Declared type.
    pub ty: Type,

    /// Declared visibility.
    pub vis: Visibility,

    /// Lookup key override from `#[query(alias = "...")]`.
    #[darling(default)]
    pub alias: Option<String>
}

/// Field definition with all parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier (e.g., `headline`, `r#type`).
    pub ident: Ident,

    /// Field type (e.g., `String`, `Vec<Name>`, `Option<Name>`).
    pub ty: Type,

    /// Whether the field carries an explicit visibility.
    pub settable: bool,

    /// Lookup key override.
    pub alias: Option<String>
}

impl FieldDef {
    /// Build a field definition from darling's parsed attributes.
    ///
    /// # Errors
    ///
    /// - The field has no identifier
    /// - The alias is empty
    pub fn from_attrs(attrs: FieldAttrs) -> darling::Result<Self> {
        let ident = attrs
            .ident
            .ok_or_else(|| darling::Error::custom("QueryDecode fields must be named"))?;

        if let Some(alias) = &attrs.alias
            && alias.is_empty()
        {
            return Err(darling::Error::custom("query alias must not be empty").with_span(&ident));
        }

        Ok(Self {
            settable: !matches!(attrs.vis, Visibility::Inherited),
            ident,
            ty: attrs.ty,
            alias: attrs.alias
        })
    }

    /// Field name without the raw identifier prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Query key the field is read from.
    #[must_use]
    pub fn key(&self) -> String {
        match &self.alias {
            Some(alias) => alias.clone(),
            None => self.name_str().to_ascii_lowercase()
        }
    }

    /// Whether the key comes from an alias.
    #[must_use]
    pub fn is_aliased(&self) -> bool {
        self.alias.is_some()
    }

    /// Declared type as token text.
    ///
    /// Spacing follows the tokenizer (`Vec < Name >`, `fn ()`), not the
    /// source, so the text identifies the type but is not a verbatim copy.
    #[must_use]
    pub fn ty_str(&self) -> String {
        self.ty.to_token_stream().to_string()
    }
}
