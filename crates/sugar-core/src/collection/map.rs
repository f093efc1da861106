// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Map Helpers
//!
//! Reverse lookup (key by value, or by reference identity), bulk key checks
//! and key/value projections for `HashMap` and `BTreeMap`.
//!
//! Reverse lookups scan the map. For `HashMap` the order of that scan is
//! unspecified, so when several keys map to the same value
//! `key_for_value` may return any of them; `BTreeMap` always returns the
//! smallest.

use crate::collection::identity::Identity;
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    hash::{BuildHasher, Hash},
};

/// Helpers shared by the standard map types.
///
/// # Examples
///
/// ```rust
/// # use std::collections::BTreeMap;
/// # use sugar_core::collection::map::MapExt;
/// let mut m = BTreeMap::from([("a", 1), ("b", 2), ("c", 1)]);
/// assert_eq!(m.key_for_value(&1), Some(&"a"));
/// assert_eq!(m.keys_for_value(&1), vec![&"a", &"c"]);
/// assert!(m.contains_all_keys(&["a", "b"]));
/// assert_eq!(m.remove_all_keys(&["a", "z"]), 1);
/// assert_eq!(m.keys_vec(), vec!["b", "c"]);
/// ```
pub trait MapExt<K, V> {
    /// Returns a key whose value equals `value`.
    fn key_for_value(&self, value: &V) -> Option<&K>
    where
        V: PartialEq;

    /// Returns every key whose value equals `value`.
    fn keys_for_value(&self, value: &V) -> Vec<&K>
    where
        V: PartialEq;

    /// Returns a key whose value is the same object as `value`.
    fn key_for_identical(&self, value: &V) -> Option<&K>
    where
        V: Identity;

    /// Returns `true` if every key in `keys` is present.
    fn contains_all_keys(&self, keys: &[K]) -> bool;

    /// Removes every key in `keys`, returning how many entries were removed.
    fn remove_all_keys(&mut self, keys: &[K]) -> usize;

    /// Returns the keys as an owned vector.
    fn keys_vec(&self) -> Vec<K>
    where
        K: Clone;

    /// Returns the values as an owned vector.
    fn values_vec(&self) -> Vec<V>
    where
        V: Clone;

    /// Returns the keys as an owned set.
    fn keys_set(&self) -> HashSet<K>
    where
        K: Clone + Hash + Eq;
}

fn find_key<'a, K, V, I, F>(mut entries: I, mut matches: F) -> Option<&'a K>
where
    K: 'a,
    V: 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
    F: FnMut(&V) -> bool,
{
    entries.find(|(_, v)| matches(*v)).map(|(k, _)| k)
}

impl<K, V, S> MapExt<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn key_for_value(&self, value: &V) -> Option<&K>
    where
        V: PartialEq,
    {
        find_key(self.iter(), |v| v == value)
    }

    fn keys_for_value(&self, value: &V) -> Vec<&K>
    where
        V: PartialEq,
    {
        self.iter()
            .filter(|(_, v)| *v == value)
            .map(|(k, _)| k)
            .collect()
    }

    fn key_for_identical(&self, value: &V) -> Option<&K>
    where
        V: Identity,
    {
        find_key(self.iter(), |v| v.is_identical(value))
    }

    fn contains_all_keys(&self, keys: &[K]) -> bool {
        keys.iter().all(|k| self.contains_key(k))
    }

    fn remove_all_keys(&mut self, keys: &[K]) -> usize {
        keys.iter().filter(|k| self.remove(*k).is_some()).count()
    }

    fn keys_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    fn values_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }

    fn keys_set(&self) -> HashSet<K>
    where
        K: Clone + Hash + Eq,
    {
        self.keys().cloned().collect()
    }
}

impl<K, V> MapExt<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn key_for_value(&self, value: &V) -> Option<&K>
    where
        V: PartialEq,
    {
        find_key(self.iter(), |v| v == value)
    }

    fn keys_for_value(&self, value: &V) -> Vec<&K>
    where
        V: PartialEq,
    {
        self.iter()
            .filter(|(_, v)| *v == value)
            .map(|(k, _)| k)
            .collect()
    }

    fn key_for_identical(&self, value: &V) -> Option<&K>
    where
        V: Identity,
    {
        find_key(self.iter(), |v| v.is_identical(value))
    }

    fn contains_all_keys(&self, keys: &[K]) -> bool {
        keys.iter().all(|k| self.contains_key(k))
    }

    fn remove_all_keys(&mut self, keys: &[K]) -> usize {
        keys.iter().filter(|k| self.remove(*k).is_some()).count()
    }

    fn keys_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.keys().cloned().collect()
    }

    fn values_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values().cloned().collect()
    }

    fn keys_set(&self) -> HashSet<K>
    where
        K: Clone + Hash + Eq,
    {
        self.keys().cloned().collect()
    }
}
