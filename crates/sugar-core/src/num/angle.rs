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

use num_traits::Float;

/// Degree/radian conversion for floats.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::num::angle::AngleExt;
/// let rad = 180.0f64.degrees_to_radians();
/// assert!((rad - std::f64::consts::PI).abs() < 1e-12);
///
/// let deg = std::f32::consts::FRAC_PI_2.radians_to_degrees();
/// assert!((deg - 90.0).abs() < 1e-4);
/// ```
pub trait AngleExt: Float {
    /// Interprets the value as degrees and returns radians.
    #[inline]
    fn degrees_to_radians(self) -> Self {
        self.to_radians()
    }

    /// Interprets the value as radians and returns degrees.
    #[inline]
    fn radians_to_degrees(self) -> Self {
        self.to_degrees()
    }
}

impl<T> AngleExt for T where T: Float {}
