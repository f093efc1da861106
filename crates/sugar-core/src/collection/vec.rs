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

//! # Vector Mutation Helpers
//!
//! In-place rearrangement and removal on `Vec<T>`. Every operation tolerates
//! out-of-range input by doing nothing and reporting it through its return
//! value rather than panicking.

use crate::collection::identity::Identity;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Mutating helpers on `Vec<T>`.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::collection::vec::VecExt;
/// let mut v = vec!['a', 'b', 'c', 'd'];
/// assert!(v.rearrange(3, 1));
/// assert_eq!(v, ['a', 'd', 'b', 'c']);
///
/// let mut v = vec![1, 2, 3, 2, 4, 4, 5, 4];
/// v.remove_duplicates();
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
pub trait VecExt<T> {
    /// Removes the element at `from` and reinserts it at `to`.
    ///
    /// Returns `false` and leaves the vector untouched if either index is out
    /// of bounds.
    fn rearrange(&mut self, from: usize, to: usize) -> bool;

    /// Removes repeated elements, keeping the first occurrence of each.
    fn remove_duplicates(&mut self)
    where
        T: Hash + Eq;

    /// Returns a copy with repeated elements removed, keeping first occurrences.
    fn removing_duplicates(&self) -> Vec<T>
    where
        T: Hash + Eq + Clone;

    /// Removes every element equal to `item`, returning how many were removed.
    fn remove_all(&mut self, item: &T) -> usize
    where
        T: PartialEq;

    /// Removes every element equal to any of `items`, returning how many were removed.
    fn remove_all_in(&mut self, items: &[T]) -> usize
    where
        T: PartialEq;

    /// Removes every element that is the *same object* as `item`, returning
    /// how many were removed. Equal but distinct objects are kept.
    fn remove_identical(&mut self, item: &T) -> usize
    where
        T: Identity;

    /// Inserts `item` at the front.
    fn prepend(&mut self, item: T);

    /// Inserts all of `items` at the front, preserving their order.
    fn prepend_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>;

    /// Appends all of `items` at the back.
    fn append_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>;
}

impl<T> VecExt<T> for Vec<T> {
    fn rearrange(&mut self, from: usize, to: usize) -> bool {
        let len = self.len();
        if from >= len || to >= len {
            tracing::trace!(from, to, len, "rearrange ignored: index out of bounds");
            return false;
        }

        if from != to {
            let item = self.remove(from);
            self.insert(to, item);
        }
        true
    }

    fn remove_duplicates(&mut self)
    where
        T: Hash + Eq,
    {
        let keep: Vec<bool> = {
            let mut seen: FxHashSet<&T> = FxHashSet::default();
            self.iter().map(|item| seen.insert(item)).collect()
        };
        let mut flags = keep.into_iter();
        self.retain(|_| flags.next().unwrap_or(true));
    }

    fn removing_duplicates(&self) -> Vec<T>
    where
        T: Hash + Eq + Clone,
    {
        let mut seen: FxHashSet<&T> = FxHashSet::default();
        self.iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect()
    }

    fn remove_all(&mut self, item: &T) -> usize
    where
        T: PartialEq,
    {
        let before = self.len();
        self.retain(|e| e != item);
        before - self.len()
    }

    fn remove_all_in(&mut self, items: &[T]) -> usize
    where
        T: PartialEq,
    {
        let before = self.len();
        self.retain(|e| !items.contains(e));
        before - self.len()
    }

    fn remove_identical(&mut self, item: &T) -> usize
    where
        T: Identity,
    {
        let before = self.len();
        self.retain(|e| !e.is_identical(item));
        before - self.len()
    }

    #[inline]
    fn prepend(&mut self, item: T) {
        self.insert(0, item);
    }

    fn prepend_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.splice(0..0, items);
    }

    #[inline]
    fn append_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(items);
    }
}
