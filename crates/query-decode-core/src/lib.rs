// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for query-decode.
//!
//! This crate holds the runtime half of `#[derive(QueryDecode)]`: the field
//! loop, the value coercions, the query sources and the error types. It can
//! also be used on its own with a hand-written [`QueryDecode`] impl.
//!
//! # Overview
//!
//! - [`decode`] — Fill a record from a [`QuerySource`]
//! - [`QueryDecode`] — Record with a static field table
//! - [`QueryValue`] — Slot coercion (scalars, `Vec`, `Option`)
//! - [`QueryParse`] — Extension point for custom types
//! - [`DecodeError`] / [`ValueError`] — Failures
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `query-decode` directly, which re-exports this crate
//! together with the derive macro. A manual implementation looks like:
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use query_decode_core::{FieldDescriptor, QueryDecode, QueryValue, ValueError, decode};
//!
//! #[derive(Default)]
//! struct Page {
//!     size: u32
//! }
//!
//! impl QueryDecode for Page {
//!     const FIELDS: &'static [FieldDescriptor] = &[FieldDescriptor {
//!         name:     "size",
//!         key:      "size",
//!         ty:       "u32",
//!         aliased:  false,
//!         settable: true
//!     }];
//!
//!     fn decode_field(&mut self, index: usize, value: &str) -> Result<(), ValueError> {
//!         match index {
//!             0 => self.size.coerce(value),
//!             _ => Err(ValueError::UnknownField { index })
//!         }
//!     }
//! }
//!
//! let query = HashMap::from([("size", "25")]);
//! let mut page = Page::default();
//! decode(&query, &mut page).unwrap();
//! assert_eq!(page.size, 25);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
mod field;
pub mod prelude;
#[doc(hidden)]
pub mod private;
pub mod source;
pub mod value;

pub use error::{BoxError, DecodeError, ValueError};
pub use field::FieldDescriptor;
pub use source::{FnSource, QuerySource, from_fn};
use tracing::{debug, trace};
pub use value::{QueryParse, QueryValue, SEQUENCE_DELIMITER, parse_bool};

/// A record that can be filled from query parameters.
///
/// Usually derived with `#[derive(QueryDecode)]`. The derive lists every
/// named field in [`FIELDS`](Self::FIELDS) and routes
/// [`decode_field`](Self::decode_field) to the field's [`QueryValue`]
/// coercion.
pub trait QueryDecode {
    /// Field table in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Coerce `value` into the field at `index` of [`FIELDS`](Self::FIELDS).
    ///
    /// Called by [`decode`] only for settable fields with a non-empty value.
    ///
    /// # Errors
    ///
    /// Returns the coercion failure for that field, or
    /// [`ValueError::UnknownField`] for an index outside the table.
    fn decode_field(&mut self, index: usize, value: &str) -> Result<(), ValueError>;

    /// Method form of [`decode`].
    ///
    /// # Errors
    ///
    /// See [`decode`].
    fn decode_from<S>(&mut self, source: &S) -> Result<(), DecodeError>
    where
        S: QuerySource + ?Sized,
        Self: Sized
    {
        decode(source, self)
    }

    /// Decode into a fresh `Self::default()`.
    ///
    /// # Errors
    ///
    /// See [`decode`]. The partially filled value is dropped on failure.
    fn from_query<S>(source: &S) -> Result<Self, DecodeError>
    where
        S: QuerySource + ?Sized,
        Self: Default + Sized
    {
        let mut dest = Self::default();
        decode(source, &mut dest)?;
        Ok(dest)
    }
}

/// Fill `dest` from `source`.
///
/// Walks [`QueryDecode::FIELDS`] in declaration order. For each field the
/// value under its lookup key is fetched; an absent or empty value leaves the
/// field untouched. Otherwise the value is coerced into the field.
///
/// # Errors
///
/// Stops at the first field that fails and returns it as a [`DecodeError`]:
///
/// - [`ValueError::UnsettableField`] for a private field that has a value
/// - [`ValueError::Integer`], [`ValueError::Unsigned`], [`ValueError::Float`],
///   [`ValueError::Bool`] for malformed scalar literals
/// - [`ValueError::UnsupportedType`] for a field type with no coercion
/// - [`ValueError::Custom`] for errors returned by [`QueryParse`]
///
/// Fields before the failing one keep their decoded values.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
///
/// use query_decode_core::{FieldDescriptor, QueryDecode, QueryValue, ValueError, decode};
///
/// #[derive(Default)]
/// struct Filter {
///     ids: Vec<i64>
/// }
///
/// impl QueryDecode for Filter {
///     const FIELDS: &'static [FieldDescriptor] = &[FieldDescriptor {
///         name:     "ids",
///         key:      "ids",
///         ty:       "Vec<i64>",
///         aliased:  false,
///         settable: true
///     }];
///
///     fn decode_field(&mut self, index: usize, value: &str) -> Result<(), ValueError> {
///         match index {
///             0 => self.ids.coerce(value),
///             _ => Err(ValueError::UnknownField { index })
///         }
///     }
/// }
///
/// let mut filter = Filter::default();
/// decode(&HashMap::from([("ids", "1,4,6,9")]), &mut filter).unwrap();
/// assert_eq!(filter.ids, [1, 4, 6, 9]);
/// ```
pub fn decode<S, T>(source: &S, dest: &mut T) -> Result<(), DecodeError>
where
    S: QuerySource + ?Sized,
    T: QueryDecode + ?Sized
{
    for (index, field) in T::FIELDS.iter().enumerate() {
        let Some(value) = source.get(field.key).filter(|value| !value.is_empty()) else {
            trace!(field = field.name, key = field.key, "query key absent");
            continue;
        };

        trace!(field = field.name, key = field.key, value = %value, "decoding query field");

        let result = if field.settable {
            dest.decode_field(index, &value)
        } else {
            Err(ValueError::UnsettableField)
        };

        if let Err(err) = result {
            debug!(field = field.name, key = field.key, error = %err, "query field rejected");
            return Err(DecodeError::new(field, err));
        }
    }

    Ok(())
}
