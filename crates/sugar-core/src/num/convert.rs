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

//! # Numeric Conversions
//!
//! Integer↔float↔bool↔string conversions. Narrowing conversions go through
//! `num_traits::NumCast` and return `None` when the value is not
//! representable; string parses return `None` instead of an error.

use num_traits::{NumCast, ToPrimitive};

/// Conversions available on every primitive number.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::num::convert::NumConvertExt;
/// assert_eq!(3i32.as_f64(), 3.0);
/// assert_eq!(300i32.cast::<u8>(), None);
/// assert_eq!(200i32.cast::<u8>(), Some(200));
/// assert!(7u8.as_bool());
/// assert!(!0i64.as_bool());
/// assert_eq!(42u16.as_string(), "42");
/// ```
pub trait NumConvertExt: ToPrimitive + Copy + std::fmt::Display {
    /// Converts the value to `f64`, which is lossy for integers wider than 53 bits.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Converts the value to `f32`, which is lossy for integers wider than 24 bits.
    #[inline]
    fn as_f32(self) -> f32 {
        self.to_f32().unwrap_or(f32::NAN)
    }

    /// Converts the value to `i64`, truncating floats toward zero.
    ///
    /// Returns `None` for NaN, infinities and values outside `i64`.
    #[inline]
    fn as_i64(self) -> Option<i64> {
        self.to_i64()
    }

    /// Converts the value into any other primitive number, returning `None`
    /// if it does not fit.
    #[inline]
    fn cast<U>(self) -> Option<U>
    where
        U: NumCast,
    {
        U::from(self)
    }

    /// Returns `true` for any non-zero value. NaN counts as non-zero.
    #[inline]
    fn as_bool(self) -> bool {
        self.to_f64().is_none_or(|v| v != 0.0)
    }

    /// Formats the value with its `Display` representation.
    #[inline]
    fn as_string(self) -> String {
        self.to_string()
    }
}

macro_rules! impl_num_convert_for {
    ($($t:ty),*) => {
        $(impl NumConvertExt for $t {})*
    };
}

impl_num_convert_for!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Conversions from `bool`.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::num::convert::BoolConvertExt;
/// assert_eq!(true.as_int(), 1);
/// assert_eq!(false.as_int(), 0);
/// assert_eq!(true.as_number::<f64>(), 1.0);
///
/// let mut flag = false;
/// flag.toggle();
/// assert!(flag);
/// ```
pub trait BoolConvertExt {
    /// Returns `1` for `true` and `0` for `false`.
    fn as_int(self) -> i32;

    /// Returns `1` or `0` in any numeric type.
    fn as_number<N>(self) -> N
    where
        N: num_traits::One + num_traits::Zero;

    /// Flips the value in place.
    fn toggle(&mut self);
}

impl BoolConvertExt for bool {
    #[inline]
    fn as_int(self) -> i32 {
        <i32 as From<bool>>::from(self)
    }

    #[inline]
    fn as_number<N>(self) -> N
    where
        N: num_traits::One + num_traits::Zero,
    {
        if self { N::one() } else { N::zero() }
    }

    #[inline]
    fn toggle(&mut self) {
        *self = !*self;
    }
}

/// Parses numbers and booleans out of strings, returning `None` on failure.
///
/// Leading and trailing whitespace is ignored.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::num::convert::ParseNumExt;
/// assert_eq!(" 42 ".to_i64(), Some(42));
/// assert_eq!("4.5".to_f64(), Some(4.5));
/// assert_eq!("abc".to_i64(), None);
/// assert_eq!("Yes".to_bool(), Some(true));
/// assert_eq!("0".to_bool(), Some(false));
/// assert_eq!("maybe".to_bool(), None);
/// ```
pub trait ParseNumExt {
    /// Parses an `i64`.
    fn to_i64(&self) -> Option<i64>;

    /// Parses an `f64`.
    fn to_f64(&self) -> Option<f64>;

    /// Parses any `FromStr` number, e.g. `"7".parse_num::<u8>()`.
    fn parse_num<N>(&self) -> Option<N>
    where
        N: std::str::FromStr;

    /// Parses `true/false`, `yes/no` or `1/0`, case-insensitively.
    fn to_bool(&self) -> Option<bool>;
}

impl ParseNumExt for str {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.parse_num()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        self.parse_num()
    }

    #[inline]
    fn parse_num<N>(&self) -> Option<N>
    where
        N: std::str::FromStr,
    {
        self.trim().parse().ok()
    }

    fn to_bool(&self) -> Option<bool> {
        let trimmed = self.trim();
        if ["true", "yes", "1"]
            .iter()
            .any(|s| trimmed.eq_ignore_ascii_case(s))
        {
            Some(true)
        } else if ["false", "no", "0"]
            .iter()
            .any(|s| trimmed.eq_ignore_ascii_case(s))
        {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_float_round_trip() {
        assert_eq!(12i32.as_f64(), 12.0);
        assert_eq!(12i32.as_f32(), 12.0f32);
        assert_eq!(12.9f64.as_i64(), Some(12));
        assert_eq!((-12.9f64).as_i64(), Some(-12));
        assert_eq!(f64::NAN.as_i64(), None);
        assert_eq!(f64::INFINITY.as_i64(), None);
    }

    #[test]
    fn test_cast_bounds() {
        assert_eq!((-1i32).cast::<u32>(), None);
        assert_eq!(255u32.cast::<u8>(), Some(255u8));
        assert_eq!(256u32.cast::<u8>(), None);
        assert_eq!(2.0f64.cast::<i8>(), Some(2i8));
    }

    #[test]
    fn test_as_bool() {
        assert!(1u8.as_bool());
        assert!((-1i8).as_bool());
        assert!(0.5f32.as_bool());
        assert!(!0.0f64.as_bool());
        assert!(!0usize.as_bool());
    }

    #[test]
    fn test_as_string() {
        assert_eq!((-7i32).as_string(), "-7");
        assert_eq!(1.5f64.as_string(), "1.5");
    }

    #[test]
    fn test_bool_conversions() {
        assert_eq!(true.as_int(), 1);
        assert_eq!(false.as_number::<u8>(), 0);
        let mut b = true;
        b.toggle();
        assert!(!b);
    }

    #[test]
    fn test_string_parses() {
        assert_eq!("-15".to_i64(), Some(-15));
        assert_eq!("1e3".to_f64(), Some(1000.0));
        assert_eq!("".to_i64(), None);
        assert_eq!("12a".to_i64(), None);
        assert_eq!("300".parse_num::<u8>(), None);
        assert_eq!("TRUE".to_bool(), Some(true));
        assert_eq!(" no ".to_bool(), Some(false));
        assert_eq!("".to_bool(), None);
    }
}
