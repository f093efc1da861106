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

//! # Exponentiation by Repeated Squaring
//!
//! Computes `base^n` in `O(log n)` multiplications for any type with a
//! multiplicative identity, including integers, floats and user-defined
//! numeric types. `CheckedRaisedExt` detects overflow for integers.

use num_traits::{CheckedMul, One};
use std::ops::Mul;

/// Exponentiation by repeated squaring.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::num::pow::RaisedExt;
/// assert_eq!(3u32.raised(4), 81);
/// assert_eq!((-2i64).raised(3), -8);
/// assert_eq!(1.5f64.raised(2), 2.25);
/// assert_eq!(7u8.raised(0), 1);
/// ```
pub trait RaisedExt: Sized {
    /// Returns `self` multiplied by itself `exponent` times.
    ///
    /// `raised(0)` is the multiplicative identity. Integer overflow follows
    /// the usual arithmetic rules (panics in debug builds).
    fn raised(self, exponent: u32) -> Self;
}

impl<T> RaisedExt for T
where
    T: Copy + Mul<Output = T> + One,
{
    #[inline]
    fn raised(self, exponent: u32) -> Self {
        let mut result = T::one();
        let mut base = self;
        let mut remaining = exponent;

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result * base;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base * base;
            }
        }
        result
    }
}

/// Overflow-checked exponentiation by repeated squaring.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::num::pow::CheckedRaisedExt;
/// assert_eq!(2u8.checked_raised(7), Some(128));
/// assert_eq!(2u8.checked_raised(8), None);
/// ```
pub trait CheckedRaisedExt: Sized {
    /// Returns `self^exponent`, or `None` if any intermediate product overflows.
    fn checked_raised(self, exponent: u32) -> Option<Self>;
}

impl<T> CheckedRaisedExt for T
where
    T: Copy + CheckedMul + One,
{
    fn checked_raised(self, exponent: u32) -> Option<Self> {
        let mut result = T::one();
        let mut base = self;
        let mut remaining = exponent;

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.checked_mul(&base)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.checked_mul(&base)?;
            }
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn repeated_multiplication(base: i64, exponent: u32) -> i64 {
        (0..exponent).fold(1, |acc, _| acc * base)
    }

    #[test]
    fn test_raised_small_values() {
        assert_eq!(2i32.raised(10), 1024);
        assert_eq!(10u64.raised(18), 1_000_000_000_000_000_000);
        assert_eq!(0i32.raised(0), 1);
        assert_eq!(0i32.raised(5), 0);
        assert_eq!((-3i32).raised(3), -27);
    }

    #[test]
    fn test_raised_floats() {
        assert_eq!(0.5f64.raised(3), 0.125);
        assert_eq!(2.0f32.raised(10), 1024.0);
    }

    #[test]
    fn test_checked_raised_boundaries() {
        assert_eq!(10u64.checked_raised(19), Some(10_000_000_000_000_000_000));
        assert_eq!(10u64.checked_raised(20), None);
        assert_eq!((-2i8).checked_raised(7), Some(-128));
        assert_eq!(2i8.checked_raised(7), None);
        assert_eq!(1u8.checked_raised(u32::MAX), Some(1));
    }

    quickcheck! {
        fn prop_raised_matches_repeated_multiplication(base: i8, exponent: u8) -> bool {
            let base = i64::from(base % 8);
            let exponent = u32::from(exponent % 16);
            base.raised(exponent) == repeated_multiplication(base, exponent)
        }
    }
}
