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

//! # Range Clamping
//!
//! Constrains a value to lie within a range by replacing out-of-range values
//! with the nearest bound.
//!
//! `ClampExt` covers closed (`lo..=hi`) and one-sided (`lo..`, `..=hi`)
//! ranges for anything `PartialOrd + Copy`, including floats.
//! `HalfOpenClampExt` covers half-open (`lo..hi`) ranges for integers, where
//! the effective upper bound is `hi - 1` and an empty range has no valid
//! result.

use num_traits::PrimInt;
use std::ops::{Range, RangeFrom, RangeInclusive, RangeToInclusive};

/// Clamping to closed and one-sided ranges.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::num::clamp::ClampExt;
/// assert_eq!(12i32.clamped_to(0..=10), 10);
/// assert_eq!((-3i32).clamped_to(0..=10), 0);
/// assert_eq!(4.5f64.clamped_to(0.0..=10.0), 4.5);
/// assert_eq!(3i32.clamped_from(5..), 5);
/// assert_eq!(30i32.clamped_through(..=20), 20);
/// ```
pub trait ClampExt: PartialOrd + Copy {
    /// Returns the value clamped to the closed range `lo..=hi`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted (`lo > hi`).
    #[inline]
    fn clamped_to(self, range: RangeInclusive<Self>) -> Self {
        let (lo, hi) = range.into_inner();
        assert!(
            !(lo > hi),
            "called `clamped_to` with an inverted range: lower bound exceeds upper bound"
        );

        if self < lo {
            lo
        } else if self > hi {
            hi
        } else {
            self
        }
    }

    /// Returns the value raised to at least `range.start`.
    #[inline]
    fn clamped_from(self, range: RangeFrom<Self>) -> Self {
        if self < range.start { range.start } else { self }
    }

    /// Returns the value lowered to at most `range.end`.
    #[inline]
    fn clamped_through(self, range: RangeToInclusive<Self>) -> Self {
        if self > range.end { range.end } else { self }
    }

    /// Clamps the value in place to the closed range `lo..=hi`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted (`lo > hi`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_core::num::clamp::ClampExt;
    /// let mut v = 42u8;
    /// v.clamp_to(0..=10);
    /// assert_eq!(v, 10);
    /// ```
    #[inline]
    fn clamp_to(&mut self, range: RangeInclusive<Self>) {
        *self = (*self).clamped_to(range);
    }
}

impl<T> ClampExt for T where T: PartialOrd + Copy {}

/// Clamping to half-open integer ranges.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::num::clamp::HalfOpenClampExt;
/// assert_eq!(10i32.clamped_to_half_open(0..10), Some(9));
/// assert_eq!((-1i32).clamped_to_half_open(0..10), Some(0));
/// assert_eq!(5i32.clamped_to_half_open(3..3), None);
/// ```
pub trait HalfOpenClampExt: Sized {
    /// Returns the value clamped to `lo..hi`, whose largest member is `hi - 1`.
    ///
    /// Returns `None` if the range is empty (`lo >= hi`).
    fn clamped_to_half_open(self, range: Range<Self>) -> Option<Self>;
}

impl<T> HalfOpenClampExt for T
where
    T: PrimInt,
{
    #[inline]
    fn clamped_to_half_open(self, range: Range<Self>) -> Option<Self> {
        if range.start >= range.end {
            return None;
        }

        let last = range.end - T::one();
        Some(self.clamped_to(range.start..=last))
    }
}
