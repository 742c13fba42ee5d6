// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use query_decode_core::prelude::*;
//! ```

pub use crate::{
    DecodeError, FieldDescriptor, QueryDecode, QueryParse, QuerySource, QueryValue, ValueError,
    decode, from_fn
};
