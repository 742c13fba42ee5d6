// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Derive macro for query-decode.
//!
//! This crate is an implementation detail of `query-decode`, which
//! re-exports [`QueryDecode`](macro@QueryDecode). Generated code refers to
//! `::query_decode`, so depend on the facade crate, not on this one.
//!
//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[derive(QueryDecode, Default)]
//! pub struct Search {
//!     #[query(alias = "q")]   // Read from `?q=...` instead of `?text=...`
//!     pub text: String,
//!
//!     pub Page: u32,          // Read from `?page=...` (lowercased name)
//!
//!     pub ids: Vec<i64>,      // `?ids=1,4,6,9`
//!
//!     pub owner: Option<Name> // Custom type behind an indirection
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Item | Description |
//! |------|-------------|
//! | `impl QueryDecode for Search` | Trait implementation |
//! | `const FIELDS` | One `FieldDescriptor` per field, declaration order |
//! | `fn decode_field` | `match` on the field index, coercing into the field |
//!
//! # Compile-Time Guarantees
//!
//! - Only structs with named fields can be destinations
//! - Type and const parameters are rejected; lifetimes are kept
//! - Aliases must be non-empty
//! - Field types without a coercion still compile and fail at decode time
//!   with `ValueError::UnsupportedType`, only when a value is present

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod decode;

use proc_macro::TokenStream;

/// Derive macro that fills a struct from query parameters.
///
/// # Overview
///
/// Implements `query_decode::QueryDecode` for a struct with named fields.
/// Each field is looked up under its lowercased name, or under the alias
/// given with `#[query(alias = "...")]`, and coerced by its type:
///
/// | Field type | Query value |
/// |------------|-------------|
/// | `String` | taken as is |
/// | `i8`..`i128`, `isize` | base-10 signed integer |
/// | `u8`..`u128`, `usize` | base-10 unsigned integer |
/// | `f32`, `f64` | float literal |
/// | `bool` | `1 t T TRUE true True 0 f F FALSE false False` |
/// | `Vec<E>` | comma separated, each element coerced as `E` |
/// | `T: QueryParse` | handed to `T::query_parse` |
/// | `Option<T: QueryParse>` | `T::default()` allocated, then parsed |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[query(alias = "key")]` | Read the field from `key` instead of its lowercased name. |
///
/// # Settable Fields
///
/// Private fields are listed but not settable: a non-empty value for one
/// fails the decode with `ValueError::UnsettableField`. Give the field any
/// `pub` visibility to make it decodable.
///
/// # Example
///
/// ```rust,ignore
/// use query_decode::{QueryDecode, QueryParse};
///
/// #[derive(Debug, Default)]
/// pub struct Name {
///     pub first: String,
///     pub last:  String
/// }
///
/// impl QueryParse for Name {
///     type Error = String;
///
///     fn query_parse(&mut self, input: &str) -> Result<(), Self::Error> {
///         let (first, last) = input.split_once('_').ok_or("invalid input")?;
///         self.first = first.to_string();
///         self.last = last.to_string();
///         Ok(())
///     }
/// }
///
/// #[derive(QueryDecode, Default)]
/// pub struct Dest {
///     #[query(alias = "title")]
///     pub headline: String,
///     pub category: i64,
///     #[query(alias = "is_published")]
///     pub is_published: bool,
///     pub sub: Option<Name>,
///     pub names: Vec<Name>
/// }
///
/// // ?title=golang&names=duc_hoang,toby_han
/// let dest = Dest::from_query(&query)?;
/// ```
#[proc_macro_derive(QueryDecode, attributes(query))]
pub fn derive_query_decode(input: TokenStream) -> TokenStream {
    decode::derive(input)
}
