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

//! # Reference Identity
//!
//! Equality by *identity* rather than by value: two shared handles are
//! identical when they point at the same allocation. This is what the
//! identity-based removal and lookup helpers in `vec` and `map` compare with.
//!
//! ```rust
//! use std::rc::Rc;
//! use sugar_core::collection::identity::Identity;
//!
//! let a = Rc::new(String::from("x"));
//! let b = Rc::clone(&a);
//! let c = Rc::new(String::from("x"));
//!
//! assert!(a.is_identical(&b));
//! assert!(!a.is_identical(&c)); // equal value, different allocation
//! ```

use std::{rc::Rc, sync::Arc};

/// Types whose values can be compared by reference identity.
pub trait Identity {
    /// Returns `true` if `self` and `other` refer to the same object.
    fn is_identical(&self, other: &Self) -> bool;
}

impl<T> Identity for Rc<T>
where
    T: ?Sized,
{
    #[inline]
    fn is_identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T> Identity for Arc<T>
where
    T: ?Sized,
{
    #[inline]
    fn is_identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T> Identity for &T
where
    T: ?Sized,
{
    #[inline]
    fn is_identical(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_identity() {
        let a = Arc::new(5);
        let b = Arc::clone(&a);
        assert!(a.is_identical(&b));
        assert!(!a.is_identical(&Arc::new(5)));
    }

    #[test]
    fn test_reference_identity() {
        let values = [1, 1];
        let first = &values[0];
        let second = &values[1];
        assert!(first.is_identical(&&values[0]));
        assert!(!first.is_identical(&second));
    }
}
