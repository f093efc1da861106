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

//! # Decimal Digits
//!
//! Decomposes a number into the decimal digits of its absolute value, most
//! significant digit first. The sign is discarded, and for floats the
//! decimal point is skipped.
//!
//! ```rust
//! use sugar_core::num::digits::DigitsExt;
//!
//! assert_eq!(9041u32.digits().as_slice(), &[9, 0, 4, 1]);
//! assert_eq!((-75i8).digits().as_slice(), &[7, 5]);
//! assert_eq!(12.05f64.digits().as_slice(), &[1, 2, 0, 5]);
//! ```

use smallvec::SmallVec;

/// Inline capacity for digit buffers: enough for any `u64`/`i64`.
pub const INLINE_DIGITS: usize = 20;

/// A digit buffer that stays on the stack for 64-bit integers.
pub type Digits = SmallVec<[u8; INLINE_DIGITS]>;

/// Decimal digit decomposition.
pub trait DigitsExt {
    /// Returns the decimal digits of the absolute value, most significant first.
    ///
    /// Zero yields a single `0` digit.
    fn digits(self) -> Digits;

    /// Returns the number of decimal digits in the absolute value.
    #[inline]
    fn digit_count(self) -> usize
    where
        Self: Sized,
    {
        self.digits().len()
    }
}

#[inline]
fn digits_of_magnitude(mut magnitude: u128) -> Digits {
    if magnitude == 0 {
        return smallvec::smallvec![0];
    }

    let mut digits = Digits::new();
    while magnitude > 0 {
        digits.push((magnitude % 10) as u8);
        magnitude /= 10;
    }
    digits.reverse();
    digits
}

macro_rules! impl_digits_signed {
    ($($t:ty),*) => {
        $(
            impl DigitsExt for $t {
                #[inline]
                fn digits(self) -> Digits {
                    digits_of_magnitude(self.unsigned_abs() as u128)
                }
            }
        )*
    };
}

macro_rules! impl_digits_unsigned {
    ($($t:ty),*) => {
        $(
            impl DigitsExt for $t {
                #[inline]
                fn digits(self) -> Digits {
                    digits_of_magnitude(self as u128)
                }
            }
        )*
    };
}

macro_rules! impl_digits_float {
    ($($t:ty),*) => {
        $(
            impl DigitsExt for $t {
                /// Uses the shortest representation that round-trips, so
                /// `0.1` yields `[0, 1]` rather than its binary expansion.
                /// Non-finite values have no digits.
                fn digits(self) -> Digits {
                    if !self.is_finite() {
                        return Digits::new();
                    }

                    self.abs()
                        .to_string()
                        .bytes()
                        .filter(u8::is_ascii_digit)
                        .map(|b| b - b'0')
                        .collect()
                }
            }
        )*
    };
}

impl_digits_signed!(i8, i16, i32, i64, i128, isize);
impl_digits_unsigned!(u8, u16, u32, u64, u128, usize);
impl_digits_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(0u8.digits().as_slice(), &[0]);
        assert_eq!(0i64.digits().as_slice(), &[0]);
        assert_eq!(0i64.digit_count(), 1);
    }

    #[test]
    fn test_extreme_integers() {
        // |i8::MIN| does not fit in i8, must not overflow
        assert_eq!(i8::MIN.digits().as_slice(), &[1, 2, 8]);
        assert_eq!(u64::MAX.digit_count(), 20);
        assert!(!u64::MAX.digits().spilled());
        assert_eq!(u128::MAX.digit_count(), 39);
    }

    #[test]
    fn test_negative_integers_drop_sign() {
        assert_eq!((-1200i32).digits().as_slice(), &[1, 2, 0, 0]);
    }

    #[test]
    fn test_floats() {
        assert_eq!(3.0f64.digits().as_slice(), &[3]);
        assert_eq!((-0.25f32).digits().as_slice(), &[0, 2, 5]);
        assert_eq!(0.1f64.digits().as_slice(), &[0, 1]);
        assert!(f64::NAN.digits().is_empty());
        assert!(f64::INFINITY.digits().is_empty());
    }
}
