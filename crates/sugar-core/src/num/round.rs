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

//! # Rounding to Decimal Places
//!
//! Rounds a float to `N` decimal places using a selectable `RoundingRule`.
//! The value is scaled by `10^N`, rounded to an integral value with the
//! chosen rule and scaled back, so results carry the usual binary
//! floating-point representation error (e.g. `2.675` is stored just below
//! `2.675` and rounds to `2.67`).

use crate::num::pow::RaisedExt;
use num_traits::{Float, NumCast};

/// The rule used to pick an integral value when rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingRule {
    /// Round to the closest value; ties go away from zero (`2.5 → 3`, `-2.5 → -3`).
    #[default]
    ToNearestOrAwayFromZero,
    /// Round to the closest value; ties go to the even neighbor (`2.5 → 2`, `3.5 → 4`).
    ToNearestOrEven,
    /// Round toward positive infinity.
    Up,
    /// Round toward negative infinity.
    Down,
    /// Round toward zero (truncate).
    TowardZero,
    /// Round away from zero.
    AwayFromZero,
}

impl RoundingRule {
    /// Rounds `value` to an integral value under this rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_core::num::round::RoundingRule;
    /// assert_eq!(RoundingRule::ToNearestOrEven.apply(2.5f64), 2.0);
    /// assert_eq!(RoundingRule::AwayFromZero.apply(-1.1f64), -2.0);
    /// ```
    pub fn apply<F>(self, value: F) -> F
    where
        F: Float,
    {
        match self {
            Self::ToNearestOrAwayFromZero => value.round(),
            Self::ToNearestOrEven => round_half_even(value),
            Self::Up => value.ceil(),
            Self::Down => value.floor(),
            Self::TowardZero => value.trunc(),
            Self::AwayFromZero => {
                if value.is_sign_negative() {
                    value.floor()
                } else {
                    value.ceil()
                }
            }
        }
    }
}

impl std::fmt::Display for RoundingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ToNearestOrAwayFromZero => "to-nearest-or-away-from-zero",
            Self::ToNearestOrEven => "to-nearest-or-even",
            Self::Up => "up",
            Self::Down => "down",
            Self::TowardZero => "toward-zero",
            Self::AwayFromZero => "away-from-zero",
        };
        write!(f, "{name}")
    }
}

#[inline]
fn round_half_even<F>(value: F) -> F
where
    F: Float,
{
    let floor = value.floor();
    let diff = value - floor;
    let half = F::one() / (F::one() + F::one());

    if diff < half {
        floor
    } else if diff > half {
        floor + F::one()
    } else {
        let two = F::one() + F::one();
        if (floor / two).fract() == F::zero() {
            floor
        } else {
            floor + F::one()
        }
    }
}

/// Rounding of floats to a number of decimal places.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::num::round::{RoundExt, RoundingRule};
/// assert_eq!(3.14159f64.rounded_to_places(2, RoundingRule::default()), 3.14);
/// assert_eq!(3.141f64.rounded_to_places(2, RoundingRule::Up), 3.15);
/// assert_eq!(1234.5f64.rounded_to_places(0, RoundingRule::ToNearestOrEven), 1234.0);
/// ```
pub trait RoundExt: Float {
    /// Returns the value rounded to `places` decimal places with `rule`.
    ///
    /// Non-finite values are returned unchanged.
    fn rounded_to_places(self, places: u32, rule: RoundingRule) -> Self {
        if !self.is_finite() {
            return self;
        }

        let ten = <Self as NumCast>::from(10u8).unwrap_or_else(Self::one);
        let factor = ten.raised(places);
        let scaled = self * factor;
        if !scaled.is_finite() {
            return self;
        }
        rule.apply(scaled) / factor
    }

    /// Rounds the value in place to `places` decimal places with `rule`.
    #[inline]
    fn round_to_places(&mut self, places: u32, rule: RoundingRule) {
        *self = self.rounded_to_places(places, rule);
    }
}

impl<T> RoundExt for T where T: Float {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_on_ties() {
        let cases = [
            (RoundingRule::ToNearestOrAwayFromZero, 2.5, 3.0, -2.5, -3.0),
            (RoundingRule::ToNearestOrEven, 2.5, 2.0, -2.5, -2.0),
            (RoundingRule::Up, 2.5, 3.0, -2.5, -2.0),
            (RoundingRule::Down, 2.5, 2.0, -2.5, -3.0),
            (RoundingRule::TowardZero, 2.5, 2.0, -2.5, -2.0),
            (RoundingRule::AwayFromZero, 2.5, 3.0, -2.5, -3.0),
        ];
        for (rule, pos, pos_expected, neg, neg_expected) in cases {
            assert_eq!(rule.apply(pos), pos_expected, "{rule} on {pos}");
            assert_eq!(rule.apply(neg), neg_expected, "{rule} on {neg}");
        }
    }

    #[test]
    fn test_half_even_odd_floor() {
        assert_eq!(RoundingRule::ToNearestOrEven.apply(3.5f64), 4.0);
        assert_eq!(RoundingRule::ToNearestOrEven.apply(-3.5f64), -4.0);
        assert_eq!(RoundingRule::ToNearestOrEven.apply(3.4f64), 3.0);
        assert_eq!(RoundingRule::ToNearestOrEven.apply(3.6f64), 4.0);
    }

    #[test]
    fn test_rounded_to_places() {
        assert_eq!(1.23456f64.rounded_to_places(3, RoundingRule::Down), 1.234);
        assert_eq!((-1.23456f64).rounded_to_places(1, RoundingRule::TowardZero), -1.2);
        assert_eq!(9.99f64.rounded_to_places(1, RoundingRule::default()), 10.0);
        assert_eq!(5.0f32.rounded_to_places(4, RoundingRule::Up), 5.0);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(f64::NAN.rounded_to_places(2, RoundingRule::Up).is_nan());
        assert_eq!(
            f64::INFINITY.rounded_to_places(2, RoundingRule::Down),
            f64::INFINITY
        );
        // Scaling overflows, so the value is returned untouched
        assert_eq!(f64::MAX.rounded_to_places(10, RoundingRule::Down), f64::MAX);
    }

    #[test]
    fn test_round_in_place() {
        let mut v = 2.71828f64;
        v.round_to_places(2, RoundingRule::default());
        assert_eq!(v, 2.72);
    }
}
