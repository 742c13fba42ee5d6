// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Static description of a decodable field.
//!
//! `#[derive(QueryDecode)]` emits one [`FieldDescriptor`] per struct field,
//! in declaration order:
//!
//! ```rust,ignore
//! #[derive(QueryDecode)]
//! pub struct Search {
//!     #[query(alias = "q")]
//!     pub text: String,   // FieldDescriptor { name: "text", key: "q", aliased: true, .. }
//!     pub Page: u32,      // FieldDescriptor { name: "Page", key: "page", aliased: false, .. }
//!     secret: String      // FieldDescriptor { settable: false, .. }
//! }
//! ```

/// Name, lookup key and type of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field identifier as declared (raw prefix stripped).
    pub name: &'static str,

    /// Query key the field is read from.
    ///
    /// The alias when one is declared, otherwise the ASCII-lowercased
    /// field name.
    pub key: &'static str,

    /// Declared type as token text (`Vec < u32 >`).
    pub ty: &'static str,

    /// Whether `key` comes from `#[query(alias = "...")]`.
    pub aliased: bool,

    /// Whether the decoder may write the field.
    ///
    /// Private fields are not settable; a non-empty value for them fails
    /// the decode.
    pub settable: bool
}

impl FieldDescriptor {
    /// The declared alias, if any.
    #[must_use]
    pub const fn alias(&self) -> Option<&'static str> {
        if self.aliased { Some(self.key) } else { None }
    }
}
