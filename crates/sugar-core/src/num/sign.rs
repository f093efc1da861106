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

/// Sign predicates for every primitive number.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::num::sign::SignExt;
/// assert!(5i32.is_strictly_positive());
/// assert!((-2.5f64).is_strictly_negative());
/// assert!(0u8.is_zero());
/// assert!(!0u8.is_strictly_positive());
/// ```
pub trait SignExt: Copy {
    /// Returns `true` if the value is strictly greater than zero.
    fn is_strictly_positive(self) -> bool;

    /// Returns `true` if the value is strictly less than zero.
    fn is_strictly_negative(self) -> bool;

    /// Returns `true` if the value equals zero. For floats, `-0.0` counts.
    fn is_zero(self) -> bool;
}

/// Parity predicates for the primitive integers.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::num::sign::ParityExt;
/// assert!(4u32.is_even());
/// assert!((-3i64).is_odd());
/// assert!(0i8.is_even());
/// ```
pub trait ParityExt: Copy {
    /// Returns `true` if the value is divisible by two.
    fn is_even(self) -> bool;

    /// Returns `true` if the value is not divisible by two.
    #[inline]
    fn is_odd(self) -> bool {
        !self.is_even()
    }
}

macro_rules! impl_sign_for {
    ($zero:expr; $($t:ty),*) => {
        $(
            impl SignExt for $t {
                #[inline(always)]
                fn is_strictly_positive(self) -> bool {
                    self > $zero
                }

                #[inline(always)]
                fn is_strictly_negative(self) -> bool {
                    self < $zero
                }

                #[inline(always)]
                fn is_zero(self) -> bool {
                    self == $zero
                }
            }
        )*
    };
}

macro_rules! impl_parity_for {
    ($($t:ty),*) => {
        $(
            impl ParityExt for $t {
                #[inline(always)]
                fn is_even(self) -> bool {
                    self % 2 == 0
                }
            }
        )*
    };
}

impl_sign_for!(0; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_sign_for!(0.0; f32, f64);

impl_parity_for!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
