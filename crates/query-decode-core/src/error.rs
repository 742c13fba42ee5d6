// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for query decoding.
//!
//! Two layers:
//!
//! - [`ValueError`] — why a single string could not be written into a single
//!   slot (a field or a sequence element).
//! - [`DecodeError`] — the failure of a whole [`decode`](crate::decode) call.
//!   Carries the field and lookup key that failed and keeps the
//!   [`ValueError`] as its [`source`](std::error::Error::source).
//!
//! # Example
//!
//! ```rust
//! use query_decode_core::{DecodeError, ValueError};
//!
//! fn status(err: &DecodeError) -> u16 {
//!     match err.kind() {
//!         ValueError::UnsupportedType { .. } => 500,
//!         _ => 400
//!     }
//! }
//! ```

use std::{
    error::Error as StdError,
    num::{ParseFloatError, ParseIntError}
};

use thiserror::Error;

use crate::FieldDescriptor;

/// Boxed error returned by custom [`QueryParse`](crate::QueryParse)
/// implementations.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure to coerce one query value into one slot.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The field is present in the query but cannot be written.
    ///
    /// Raised for private fields of a derived record.
    #[error("field cannot be set from the query")]
    UnsettableField,

    /// Value is not a valid signed integer for the declared width.
    #[error("invalid integer `{value}`")]
    Integer {
        /// Rejected input.
        value:  String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError
    },

    /// Value is not a valid unsigned integer for the declared width.
    #[error("invalid unsigned integer `{value}`")]
    Unsigned {
        /// Rejected input.
        value:  String,
        /// Underlying parse failure; `None` when the input carries a sign.
        #[source]
        source: Option<ParseIntError>
    },

    /// Value is not a valid floating point literal.
    #[error("invalid float `{value}`")]
    Float {
        /// Rejected input.
        value:  String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError
    },

    /// Value is not one of the accepted boolean literals.
    #[error("invalid boolean `{value}`")]
    Bool {
        /// Rejected input.
        value: String
    },

    /// The slot type has no builtin coercion and does not implement
    /// [`QueryParse`](crate::QueryParse).
    #[error("type not supported: {type_name}")]
    UnsupportedType {
        /// Fully qualified name of the offending type.
        type_name: &'static str
    },

    /// Error returned by a custom [`QueryParse`](crate::QueryParse)
    /// implementation, kept as is.
    #[error(transparent)]
    Custom(BoxError),

    /// A [`QueryDecode`](crate::QueryDecode) dispatcher was asked for a field
    /// it does not have.
    #[error("no field at index {index}")]
    UnknownField {
        /// Requested index into `FIELDS`.
        index: usize
    }
}

impl ValueError {
    /// Wrap an error produced by a custom parser.
    pub fn custom(err: impl Into<BoxError>) -> Self {
        Self::Custom(err.into())
    }

    /// Build an [`UnsupportedType`](Self::UnsupportedType) error for `T`.
    #[must_use]
    pub fn unsupported<T: ?Sized>() -> Self {
        Self::UnsupportedType {
            type_name: std::any::type_name::<T>()
        }
    }

    /// Check if this error was produced by a custom parser.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Borrow the custom parser error as a concrete type.
    ///
    /// Returns `None` for builtin errors or a different concrete type.
    #[must_use]
    pub fn downcast_custom<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            Self::Custom(err) => err.downcast_ref::<E>(),
            _ => None
        }
    }
}

/// Failure of a [`decode`](crate::decode) call.
///
/// Identifies the first field that could not be decoded. Fields before it
/// in declaration order have already been written.
#[derive(Debug, Error)]
#[error("failed to decode field `{field}` from query key `{key}`")]
pub struct DecodeError {
    field:  &'static str,
    key:    &'static str,
    #[source]
    source: ValueError
}

impl DecodeError {
    /// Attach field context to a coercion failure.
    #[must_use]
    pub fn new(field: &FieldDescriptor, source: ValueError) -> Self {
        Self {
            field: field.name,
            key: field.key,
            source
        }
    }

    /// Name of the field that failed.
    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Query key the value was read from.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The underlying coercion failure.
    #[must_use]
    pub fn kind(&self) -> &ValueError {
        &self.source
    }

    /// Consume the error, returning the underlying coercion failure.
    #[must_use]
    pub fn into_kind(self) -> ValueError {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use super::*;

    #[derive(Debug)]
    struct BadName;

    impl fmt::Display for BadName {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("name must look like first_last")
        }
    }

    impl StdError for BadName {}

    const FIELD: FieldDescriptor = FieldDescriptor {
        name:     "category",
        key:      "category",
        ty:       "i64",
        aliased:  false,
        settable: true
    };

    #[test]
    fn decode_error_carries_field_context() {
        let source = ValueError::Bool {
            value: "yes".to_string()
        };
        let err = DecodeError::new(&FIELD, source);

        assert_eq!(err.field(), "category");
        assert_eq!(err.key(), "category");
        assert_eq!(
            err.to_string(),
            "failed to decode field `category` from query key `category`"
        );
        assert!(matches!(err.kind(), ValueError::Bool { .. }));
    }

    #[test]
    fn decode_error_exposes_source_chain() {
        let parse = "x".parse::<i64>().unwrap_err();
        let err = DecodeError::new(
            &FIELD,
            ValueError::Integer {
                value:  "x".to_string(),
                source: parse
            }
        );

        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "invalid integer `x`");
        assert!(source.source().is_some());
    }

    #[test]
    fn custom_error_is_transparent() {
        let err = ValueError::custom(BadName);

        assert!(err.is_custom());
        assert_eq!(err.to_string(), "name must look like first_last");
        assert!(err.downcast_custom::<BadName>().is_some());
    }

    #[test]
    fn custom_error_from_string() {
        let err = ValueError::custom("invalid input");
        assert_eq!(err.to_string(), "invalid input");
        assert!(err.downcast_custom::<BadName>().is_none());
    }

    #[test]
    fn unsupported_names_type() {
        let err = ValueError::unsupported::<fn()>();
        assert_eq!(err.to_string(), "type not supported: fn()");
    }

    #[test]
    fn builtin_error_is_not_custom() {
        let err = ValueError::UnsettableField;
        assert!(!err.is_custom());
        assert!(err.downcast_custom::<BadName>().is_none());
    }

    #[test]
    fn into_kind_returns_source() {
        let err = DecodeError::new(&FIELD, ValueError::UnknownField { index: 7 });
        assert!(matches!(err.into_kind(), ValueError::UnknownField { index: 7 }));
    }
}
