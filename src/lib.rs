// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # query-decode
//!
//! One crate, all features. Re-exports:
//! - [`QueryDecode`](macro@QueryDecode) derive macro from
//!   `query-decode-derive`
//! - All types from `query-decode-core` ([`decode`], [`QueryParse`],
//!   [`QuerySource`], [`DecodeError`], [`ValueError`])

pub use query_decode_core::*;
pub use query_decode_derive::QueryDecode;

// Paths used by generated code.
#[doc(hidden)]
pub use query_decode_core::private as __private;
