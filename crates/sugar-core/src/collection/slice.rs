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

use crate::math::span::Span;
use smallvec::SmallVec;
use std::ops::RangeBounds;

/// Positions of matching elements; a few matches stay on the stack.
pub type Indices = SmallVec<[usize; 8]>;

/// Read-only helpers on slices.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::collection::slice::SliceExt;
/// let v = [1, 2, 3, 2, 5];
/// assert_eq!(v.first_n(2), &[1, 2]);
/// assert_eq!(v.last_n(10), &[1, 2, 3, 2, 5]);
/// assert_eq!(v.indices_of(&2).as_slice(), &[1, 3]);
/// assert!(v.contains_all(&[5, 1]));
/// ```
pub trait SliceExt<T> {
    /// Returns the first `min(k, len)` elements.
    fn first_n(&self, k: usize) -> &[T];

    /// Returns the last `min(k, len)` elements, in their original order.
    fn last_n(&self, k: usize) -> &[T];

    /// Returns `true` if every element of `items` occurs in the slice.
    ///
    /// An empty `items` is trivially contained.
    fn contains_all(&self, items: &[T]) -> bool
    where
        T: PartialEq;

    /// Returns the index of every element equal to `item`, ascending.
    fn indices_of(&self, item: &T) -> Indices
    where
        T: PartialEq;

    /// Returns the sub-slice for `range`, with both ends clamped to the
    /// slice bounds. Never panics.
    fn get_clamped<R>(&self, range: R) -> &[T]
    where
        R: RangeBounds<usize>;

    /// Returns the number of elements satisfying `predicate`.
    fn count_where<F>(&self, predicate: F) -> usize
    where
        F: FnMut(&T) -> bool;
}

impl<T> SliceExt<T> for [T] {
    #[inline]
    fn first_n(&self, k: usize) -> &[T] {
        &self[..k.min(self.len())]
    }

    #[inline]
    fn last_n(&self, k: usize) -> &[T] {
        &self[self.len().saturating_sub(k)..]
    }

    fn contains_all(&self, items: &[T]) -> bool
    where
        T: PartialEq,
    {
        items.iter().all(|item| self.contains(item))
    }

    fn indices_of(&self, item: &T) -> Indices
    where
        T: PartialEq,
    {
        self.iter()
            .enumerate()
            .filter_map(|(i, e)| (e == item).then_some(i))
            .collect()
    }

    #[inline]
    fn get_clamped<R>(&self, range: R) -> &[T]
    where
        R: RangeBounds<usize>,
    {
        &self[Span::clamped_from_bounds(range, self.len()).as_range()]
    }

    #[inline]
    fn count_where<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|e| predicate(e)).count()
    }
}
