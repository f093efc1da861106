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

//! # Container Conversions
//!
//! Conversions between sequence-like containers: slice → set, set → vector,
//! string ↔ characters.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

/// Collects a slice into a `HashSet`, dropping duplicates.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::collection::convert::IntoHashSetExt;
/// let set = [3, 1, 3, 2].to_hash_set();
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&1));
/// ```
pub trait IntoHashSetExt<T> {
    /// Returns the distinct elements as a `HashSet`.
    fn to_hash_set(&self) -> HashSet<T>;
}

impl<T> IntoHashSetExt<T> for [T]
where
    T: Hash + Eq + Clone,
{
    #[inline]
    fn to_hash_set(&self) -> HashSet<T> {
        self.iter().cloned().collect()
    }
}

/// Converts a set back into an ordered vector.
///
/// # Examples
///
/// ```rust
/// # use std::collections::HashSet;
/// # use sugar_core::collection::convert::SetToVecExt;
/// let set = HashSet::from([30, 10, 20]);
/// assert_eq!(set.to_sorted_vec(), vec![10, 20, 30]);
/// ```
pub trait SetToVecExt<T> {
    /// Returns the elements in ascending order.
    fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Ord + Clone;
}

impl<T, S> SetToVecExt<T> for HashSet<T, S>
where
    S: BuildHasher,
{
    fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Ord + Clone,
    {
        let mut v: Vec<T> = self.iter().cloned().collect();
        v.sort_unstable();
        v
    }
}

impl<T> SetToVecExt<T> for BTreeSet<T> {
    #[inline]
    fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Ord + Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Splits a string into its characters.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::collection::convert::{CharSliceExt, CharsCollectExt};
/// let chars = "héllo".chars_vec();
/// assert_eq!(chars.len(), 5);
/// assert_eq!(chars.collect_string(), "héllo");
/// ```
pub trait CharsCollectExt {
    /// Returns the characters as a vector.
    fn chars_vec(&self) -> Vec<char>;
}

impl CharsCollectExt for str {
    #[inline]
    fn chars_vec(&self) -> Vec<char> {
        self.chars().collect()
    }
}

/// Joins characters back into a `String`.
pub trait CharSliceExt {
    /// Returns the characters concatenated into a `String`.
    fn collect_string(&self) -> String;
}

impl CharSliceExt for [char] {
    #[inline]
    fn collect_string(&self) -> String {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hash_set_on_vec() {
        let v = vec!["a", "b", "a"];
        let set = v.to_hash_set();
        assert_eq!(set, HashSet::from(["a", "b"]));
    }

    #[test]
    fn test_sorted_vec_from_btree_set() {
        let set = BTreeSet::from(['c', 'a', 'b']);
        assert_eq!(set.to_sorted_vec(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_chars_round_trip() {
        assert!("".chars_vec().is_empty());
        let chars = ['r', 'u', 's', 't'];
        assert_eq!(chars.collect_string(), "rust");
    }
}
