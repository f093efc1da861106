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

//! # Numeric Helpers
//!
//! Extension traits for the primitive integer and floating-point types. Each
//! trait is implemented per primitive through small `macro_rules!` generators
//! or as a blanket impl over a `num_traits` bound, so the methods are
//! available on every numeric type without per-call conversions.
//!
//! ## Submodules
//!
//! - `sign`: `is_strictly_positive`/`is_strictly_negative`/`is_zero` for all numbers and
//!   `is_even`/`is_odd` for integers.
//! - `clamp`: Clamping to closed, half-open and one-sided ranges.
//! - `convert`: Integer/float/bool/string conversions; string parses return
//!   `Option` instead of erroring.
//! - `digits`: Decimal digits of the absolute value, most significant first.
//! - `pow`: Exponentiation by repeated squaring, plain and checked.
//! - `angle`: Degree/radian conversion.
//! - `round`: Rounding to `N` decimal places with a `RoundingRule`.

pub mod angle;
pub mod clamp;
pub mod convert;
pub mod digits;
pub mod pow;
pub mod round;
pub mod sign;
