// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Support code for `#[derive(QueryDecode)]`. Not public API.
//!
//! Derived dispatchers write every field through a [`Slot`]:
//!
//! ```rust,ignore
//! use ::query_decode::__private::{CoerceUnsupported as _, CoerceValue as _};
//! (&&::query_decode::__private::Slot::new(&mut self.field)).coerce_slot(value)
//! ```
//!
//! Method resolution tries `&Slot<T>` first, which only has `coerce_slot`
//! when `T: QueryValue`. Otherwise it auto-derefs to `Slot<T>` and picks the
//! fallback that reports [`ValueError::UnsupportedType`]. Field types with no
//! coercion therefore compile, and fail only when a value arrives for them.

use std::cell::RefCell;

use crate::{QueryValue, ValueError};

/// Exclusive handle on one field being decoded.
pub struct Slot<'a, T: ?Sized>(RefCell<&'a mut T>);

impl<'a, T: ?Sized> Slot<'a, T> {
    /// Wrap a field.
    pub fn new(slot: &'a mut T) -> Self {
        Self(RefCell::new(slot))
    }
}

/// Preferred path: the field type has a coercion.
pub trait CoerceValue {
    /// Coerce `input` into the wrapped field.
    fn coerce_slot(&self, input: &str) -> Result<(), ValueError>;
}

impl<T: QueryValue + ?Sized> CoerceValue for &Slot<'_, T> {
    fn coerce_slot(&self, input: &str) -> Result<(), ValueError> {
        let mut slot = self.0.borrow_mut();
        QueryValue::coerce(&mut **slot, input)
    }
}

/// Fallback path: the field type has no coercion.
pub trait CoerceUnsupported {
    /// Always fails with [`ValueError::UnsupportedType`].
    fn coerce_slot(&self, input: &str) -> Result<(), ValueError>;
}

impl<T: ?Sized> CoerceUnsupported for Slot<'_, T> {
    fn coerce_slot(&self, _input: &str) -> Result<(), ValueError> {
        Err(ValueError::unsupported::<T>())
    }
}
