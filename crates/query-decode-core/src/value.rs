// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Coercion of query strings into typed slots.
//!
//! # Dispatch
//!
//! | Slot type | Coercion |
//! |-----------|----------|
//! | `String` | assigned verbatim |
//! | `i8` .. `i128`, `isize` | base-10 signed, declared width |
//! | `f32`, `f64` | decimal or exponent notation |
//! | `u8` .. `u128`, `usize` | base-10 unsigned, declared width, no sign |
//! | `bool` | `1 t T TRUE true True` / `0 f F FALSE false False` |
//! | `Vec<E>` | split on [`SEQUENCE_DELIMITER`], each element coerced |
//! | `Option<T: QueryParse>` | `T::default()` allocated when `None`, then parsed |
//! | `Box<T: QueryParse>` | parsed in place |
//! | `Option<Box<T: QueryParse>>` | `Box::new(T::default())` allocated when `None`, then parsed |
//! | `T: QueryParse` | delegated to [`QueryParse::query_parse`] |
//!
//! Builtin types always win over [`QueryParse`]: the impls live here and the
//! orphan rules keep other crates from implementing `QueryParse` for them.

use crate::error::{BoxError, ValueError};

/// Separator between elements of a sequence value.
pub const SEQUENCE_DELIMITER: char = ',';

/// Custom parsing capability for user-defined types.
///
/// Implement this for any type that should be decodable from a query value
/// but is not one of the builtin scalars. The type then works as a field,
/// as a `Vec` element and behind `Option`.
///
/// # Example
///
/// ```rust
/// use query_decode_core::QueryParse;
///
/// #[derive(Debug, Default)]
/// struct Name {
///     first: String,
///     last:  String
/// }
///
/// impl QueryParse for Name {
///     type Error = String;
///
///     fn query_parse(&mut self, input: &str) -> Result<(), Self::Error> {
///         let (first, last) = input
///             .split_once('_')
///             .ok_or_else(|| format!("expected first_last, got `{input}`"))?;
///         self.first = first.to_string();
///         self.last = last.to_string();
///         Ok(())
///     }
/// }
/// ```
pub trait QueryParse {
    /// Error reported on malformed input.
    ///
    /// Propagated unchanged inside [`ValueError::Custom`].
    type Error: Into<BoxError>;

    /// Parse `input` into `self`.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when `input` is malformed.
    fn query_parse(&mut self, input: &str) -> Result<(), Self::Error>;
}

/// A slot that can be written from a query string.
///
/// Implemented for the builtin scalars, `Vec`, `Option` over custom types and
/// every [`QueryParse`] type. Derived records call this for each field that
/// has a non-empty value.
pub trait QueryValue {
    /// Coerce `input` into `self`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] describing why `input` does not fit.
    fn coerce(&mut self, input: &str) -> Result<(), ValueError>;
}

impl<T: QueryParse> QueryValue for T {
    fn coerce(&mut self, input: &str) -> Result<(), ValueError> {
        self.query_parse(input).map_err(ValueError::custom)
    }
}

impl QueryValue for String {
    fn coerce(&mut self, input: &str) -> Result<(), ValueError> {
        *self = input.to_string();
        Ok(())
    }
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn coerce(&mut self, input: &str) -> Result<(), ValueError> {
                    *self = input.parse::<$ty>().map_err(|source| ValueError::Integer {
                        value: input.to_string(),
                        source
                    })?;
                    Ok(())
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn coerce(&mut self, input: &str) -> Result<(), ValueError> {
                    if input.starts_with('+') {
                        return Err(ValueError::Unsigned {
                            value:  input.to_string(),
                            source: None
                        });
                    }
                    *self = input.parse::<$ty>().map_err(|source| ValueError::Unsigned {
                        value:  input.to_string(),
                        source: Some(source)
                    })?;
                    Ok(())
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn coerce(&mut self, input: &str) -> Result<(), ValueError> {
                    *self = input.parse::<$ty>().map_err(|source| ValueError::Float {
                        value: input.to_string(),
                        source
                    })?;
                    Ok(())
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

/// Parse the relaxed boolean grammar.
///
/// Returns `None` for anything outside the accepted literal set.
#[must_use]
pub fn parse_bool(input: &str) -> Option<bool> {
    match input {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None
    }
}

impl QueryValue for bool {
    fn coerce(&mut self, input: &str) -> Result<(), ValueError> {
        *self = parse_bool(input).ok_or_else(|| ValueError::Bool {
            value: input.to_string()
        })?;
        Ok(())
    }
}

/// Sequences are rebuilt from scratch and only assigned once every element
/// has been coerced. An empty element keeps `E::default()`.
impl<E: QueryValue + Default> QueryValue for Vec<E> {
    fn coerce(&mut self, input: &str) -> Result<(), ValueError> {
        let mut items = Vec::new();
        for part in input.split(SEQUENCE_DELIMITER) {
            let mut item = E::default();
            if !part.is_empty() {
                item.coerce(part)?;
            }
            items.push(item);
        }
        *self = items;
        Ok(())
    }
}

/// An owned pointer parses through to its target.
///
/// Together with the `Option` impl this covers `Box<T>` and `Option<Box<T>>`
/// fields.
impl<T: QueryParse + ?Sized> QueryParse for Box<T> {
    type Error = T::Error;

    fn query_parse(&mut self, input: &str) -> Result<(), Self::Error> {
        (**self).query_parse(input)
    }
}

/// An absent indirection is filled with `T::default()` before delegating.
/// The allocation stays in place even when parsing fails.
impl<T: QueryParse + Default> QueryValue for Option<T> {
    fn coerce(&mut self, input: &str) -> Result<(), ValueError> {
        self.get_or_insert_with(T::default)
            .query_parse(input)
            .map_err(ValueError::custom)
    }
}
