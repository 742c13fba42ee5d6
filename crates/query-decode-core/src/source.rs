// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Read-only lookup of decoded query parameters.
//!
//! The decoder never tokenizes a query string itself. It consumes anything
//! that can answer "what is the value for this key":
//!
//! | Source | Lookup |
//! |--------|--------|
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | by key |
//! | `[(K, V)]`, `Vec<(K, V)>`, `[(K, V); N]` | first pair with a matching key |
//! | [`FnSource`] (via [`from_fn`]) | closure call |
//! | `url::Url` (feature `url`) | first percent-decoded query pair |
//!
//! A missing key and an empty value mean the same thing to the decoder.

use std::{
    borrow::{Borrow, Cow},
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash}
};

/// Key/value lookup consumed by [`decode`](crate::decode).
pub trait QuerySource {
    /// Value for `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<T: QuerySource + ?Sized> QuerySource for &T {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        QuerySource::get(*self, key)
    }
}

impl<K, V, S> QuerySource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher
{
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        HashMap::get(self, key).map(|value| Cow::Borrowed(value.as_ref()))
    }
}

impl<K, V> QuerySource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>
{
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        BTreeMap::get(self, key).map(|value| Cow::Borrowed(value.as_ref()))
    }
}

impl<K, V> QuerySource for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>
{
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(candidate, _)| candidate.as_ref() == key)
            .map(|(_, value)| Cow::Borrowed(value.as_ref()))
    }
}

impl<K, V, const N: usize> QuerySource for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>
{
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        QuerySource::get(self.as_slice(), key)
    }
}

impl<K, V> QuerySource for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>
{
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        QuerySource::get(self.as_slice(), key)
    }
}

/// Query source backed by a closure.
///
/// Built with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnSource<F>(F);

/// Wrap a lookup closure as a [`QuerySource`].
///
/// # Example
///
/// ```rust
/// use query_decode_core::{QuerySource, from_fn};
///
/// let source = from_fn(|key| (key == "page").then(|| "3".to_string()));
/// assert_eq!(source.get("page").as_deref(), Some("3"));
/// assert_eq!(source.get("size"), None);
/// ```
pub fn from_fn<F>(lookup: F) -> FnSource<F>
where
    F: Fn(&str) -> Option<String>
{
    FnSource(lookup)
}

impl<F> QuerySource for FnSource<F>
where
    F: Fn(&str) -> Option<String>
{
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        (self.0)(key).map(Cow::Owned)
    }
}

#[cfg(feature = "url")]
#[cfg_attr(docsrs, doc(cfg(feature = "url")))]
impl QuerySource for url::Url {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.query_pairs()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }
}
