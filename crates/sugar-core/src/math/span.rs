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

use num_traits::PrimInt;
use std::{
    cmp::{max, min},
    iter::FusedIterator,
    ops::{Bound, Range, RangeBounds},
};

/// A half-open span `[start, end)` over integers.
///
/// Spans are the common currency for "index `k` must be clamped to the
/// collection bounds before slicing": any requested range is first resolved
/// into a `Span<usize>` against the collection length, then used to slice.
///
/// # Invariants
///
/// `start` is always less than or equal to `end`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

/// An iterator over the integers contained in a `Span`.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::math::span::Span;
/// let points: Vec<_> = Span::new(2, 5).iter().collect();
/// assert_eq!(points, vec![2, 3, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct SpanIter<T>
where
    T: PrimInt,
{
    current: T,
    end: T,
}

impl<T> Iterator for SpanIter<T>
where
    T: PrimInt,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current < self.end {
            let value = self.current;
            self.current = self.current + T::one();
            Some(value)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.current).to_usize();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

impl<T> DoubleEndedIterator for SpanIter<T>
where
    T: PrimInt,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.current < self.end {
            self.end = self.end - T::one();
            Some(self.end)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for SpanIter<T> where T: PrimInt {}

impl<T> Span<T>
where
    T: PrimInt,
{
    /// Creates a new `Span`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_core::math::span::Span;
    /// let span = Span::new(0, 10);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid span: start must be less than or equal to end"
        );
        Self { start, end }
    }

    /// Creates a new `Span`, or `None` if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_core::math::span::Span;
    /// assert!(Span::try_new(3, 3).is_some());
    /// assert!(Span::try_new(4, 3).is_none());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Returns the inclusive start.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the exclusive end.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns `end - start`.
    #[inline]
    pub fn len(&self) -> T {
        self.end - self.start
    }

    /// Returns `true` if the span contains no integers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `value` lies in `[start, end)`.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value < self.end
    }

    /// Returns the overlap of two spans, or `None` if they do not overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_core::math::span::Span;
    /// let a = Span::new(0, 10);
    /// assert_eq!(a.intersection(Span::new(5, 15)), Some(Span::new(5, 10)));
    /// assert_eq!(a.intersection(Span::new(10, 15)), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let start = max(self.start, other.start);
        let end = min(self.end, other.end);
        (start < end).then_some(Self { start, end })
    }

    /// Moves `value` to the nearest integer contained in the span.
    ///
    /// Returns `None` for an empty span, which contains nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_core::math::span::Span;
    /// let span = Span::new(0, 5);
    /// assert_eq!(span.clamp_point(7), Some(4));
    /// assert_eq!(span.clamp_point(-2), Some(0));
    /// assert_eq!(Span::new(1, 1).clamp_point(1), None);
    /// ```
    #[inline]
    pub fn clamp_point(&self, value: T) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(max(self.start, min(value, self.end - T::one())))
    }

    /// Shrinks the span so it fits inside `[0, len)`.
    ///
    /// A span lying entirely beyond `len` collapses to the empty span `[len, len)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_core::math::span::Span;
    /// assert_eq!(Span::new(2usize, 9).clamped_to_len(5), Span::new(2, 5));
    /// assert_eq!(Span::new(7usize, 9).clamped_to_len(5), Span::new(5, 5));
    /// ```
    #[inline]
    pub fn clamped_to_len(&self, len: T) -> Self {
        let end = min(self.end, len);
        let start = min(self.start, end);
        Self { start, end }
    }

    /// Creates an iterator over the integers in the span.
    #[inline]
    pub fn iter(&self) -> SpanIter<T> {
        SpanIter {
            current: self.start,
            end: self.end,
        }
    }
}

impl Span<usize> {
    /// Resolves any range expression against a collection of length `len`.
    ///
    /// Returns `None` if the range is inverted or reaches past `len`, which
    /// mirrors what slicing would reject.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_core::math::span::Span;
    /// assert_eq!(Span::checked_from_bounds(1..=2, 4), Some(Span::new(1, 3)));
    /// assert_eq!(Span::checked_from_bounds(.., 4), Some(Span::new(0, 4)));
    /// assert_eq!(Span::checked_from_bounds(2..9, 4), None);
    /// ```
    pub fn checked_from_bounds<R>(range: R, len: usize) -> Option<Self>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.checked_add(1)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.checked_add(1)?,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };

        if end > len {
            return None;
        }
        Self::try_new(start, end)
    }

    /// Resolves any range expression against a collection of length `len`,
    /// clamping both ends into `[0, len]` instead of failing.
    ///
    /// An inverted range yields an empty span at its clamped start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_core::math::span::Span;
    /// assert_eq!(Span::clamped_from_bounds(2..9, 4), Span::new(2, 4));
    /// assert_eq!(Span::clamped_from_bounds(6.., 4), Span::new(4, 4));
    /// assert_eq!(Span::clamped_from_bounds(3..1, 4), Span::new(3, 3));
    /// ```
    pub fn clamped_from_bounds<R>(range: R, len: usize) -> Self
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };

        let start = min(start, len);
        let end = max(start, min(end, len));
        Self { start, end }
    }

    /// Returns the span as a `Range<usize>` ready for slicing.
    #[inline]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl<T> Default for Span<T>
where
    T: PrimInt,
{
    #[inline]
    fn default() -> Self {
        Self {
            start: T::zero(),
            end: T::zero(),
        }
    }
}

impl<T> std::fmt::Debug for Span<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for Span<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl<T> RangeBounds<T> for Span<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Excluded(&self.end)
    }
}

impl<T> IntoIterator for Span<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = SpanIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<Range<T>> for Span<T>
where
    T: PrimInt,
{
    /// # Panics
    ///
    /// Panics if the range is inverted.
    #[inline]
    fn from(range: Range<T>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl<T> From<Span<T>> for Range<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(span: Span<T>) -> Self {
        span.start..span.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let s = Span::new(10, 20);
        assert_eq!(s.start(), 10);
        assert_eq!(s.end(), 20);
        assert_eq!(s.len(), 10);
        assert!(!s.is_empty());
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    #[should_panic(expected = "Invalid span")]
    fn test_new_panics_when_inverted() {
        Span::new(5, 1);
    }

    #[test]
    fn test_default_is_empty() {
        let s: Span<u32> = Default::default();
        assert!(s.is_empty());
        assert_eq!(s.start(), 0);
    }

    #[test]
    fn test_contains() {
        let s = Span::new(0, 3);
        assert!(s.contains(0));
        assert!(s.contains(2));
        assert!(!s.contains(3));
        assert!(!s.contains(-1));
    }

    #[test]
    fn test_intersection() {
        let a = Span::new(0, 10);
        assert_eq!(a.intersection(Span::new(2, 8)), Some(Span::new(2, 8)));
        assert_eq!(a.intersection(Span::new(-5, 3)), Some(Span::new(0, 3)));
        assert_eq!(a.intersection(Span::new(12, 20)), None);
    }

    #[test]
    fn test_clamp_point() {
        let s = Span::new(-3i64, 3);
        assert_eq!(s.clamp_point(0), Some(0));
        assert_eq!(s.clamp_point(100), Some(2));
        assert_eq!(s.clamp_point(-100), Some(-3));
    }

    #[test]
    fn test_clamped_to_len() {
        assert_eq!(Span::new(0usize, 3).clamped_to_len(10), Span::new(0, 3));
        assert_eq!(Span::new(0usize, 30).clamped_to_len(10), Span::new(0, 10));
        assert_eq!(Span::new(15usize, 30).clamped_to_len(10), Span::new(10, 10));
    }

    #[test]
    fn test_checked_from_bounds() {
        assert_eq!(Span::checked_from_bounds(0..0, 0), Some(Span::new(0, 0)));
        assert_eq!(Span::checked_from_bounds(..3, 3), Some(Span::new(0, 3)));
        assert_eq!(Span::checked_from_bounds(..=3, 3), None);
        assert_eq!(Span::checked_from_bounds(2.., 3), Some(Span::new(2, 3)));
        assert_eq!(Span::checked_from_bounds(4.., 3), None);
        assert_eq!(Span::checked_from_bounds(..=usize::MAX, 3), None);
        assert_eq!(
            Span::checked_from_bounds((Bound::Excluded(0), Bound::Included(1)), 3),
            Some(Span::new(1, 2))
        );
    }

    #[test]
    fn test_clamped_from_bounds() {
        assert_eq!(Span::clamped_from_bounds(.., 0), Span::new(0, 0));
        assert_eq!(Span::clamped_from_bounds(..=usize::MAX, 3), Span::new(0, 3));
        assert_eq!(Span::clamped_from_bounds(1..=1, 3), Span::new(1, 2));
        assert_eq!(Span::clamped_from_bounds(5..=1, 3), Span::new(3, 3));
    }

    #[test]
    fn test_iteration() {
        let s = Span::new(1, 4);
        let mut iter = s.iter();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        let collected: Vec<u8> = Span::new(0u8, 3).into_iter().collect();
        assert_eq!(collected, vec![0, 1, 2]);
    }

    #[test]
    fn test_range_conversions() {
        let s: Span<i32> = (2..6).into();
        let r: Range<i32> = s.into();
        assert_eq!(r, 2..6);
        assert_eq!(Span::new(1usize, 3).as_range(), 1..3);
        assert_eq!(s.start_bound(), Bound::Included(&2));
        assert_eq!(s.end_bound(), Bound::Excluded(&6));
    }

    #[test]
    fn test_display_debug() {
        let s = Span::new(10, 20);
        assert_eq!(format!("{}", s), "[10, 20)");
        assert_eq!(format!("{:?}", s), "Span { start: 10, end: 20 }");
    }
}
