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

//! # Option Helpers
//!
//! Readable defaults for `Option<T>` and an emptiness check that treats an
//! absent container and an empty one the same way.
//!
//! ```rust
//! use sugar_core::option::{OptionEmptyExt, OptionExt};
//!
//! let name: Option<&str> = None;
//! assert_eq!(name.value_or("anonymous"), "anonymous");
//! assert!(name.is_none_or_empty());
//! assert!(Some("").is_none_or_empty());
//! assert!(!Some("x").is_none_or_empty());
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Default-value helpers on `Option<T>`.
pub trait OptionExt<T> {
    /// Returns `true` if a value is present.
    fn has_value(&self) -> bool;

    /// Returns the contained value or `default`.
    fn value_or(self, default: T) -> T;

    /// Returns the contained value or computes one with `f`.
    ///
    /// `f` only runs when the option is empty.
    fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T;

    /// Returns the contained value or the result of the fallible `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_core::option::OptionExt;
    /// let cached: Option<u32> = None;
    /// let v: Result<u32, String> = cached.value_or_try(|| "42".parse().map_err(|_| "bad".into()));
    /// assert_eq!(v, Ok(42));
    /// ```
    fn value_or_try<E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>;

    /// Returns the contained value or fails with `err`.
    fn value_or_err<E>(self, err: E) -> Result<T, E>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn has_value(&self) -> bool {
        self.is_some()
    }

    #[inline]
    fn value_or(self, default: T) -> T {
        self.unwrap_or(default)
    }

    #[inline]
    fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.unwrap_or_else(f)
    }

    #[inline]
    fn value_or_try<E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        match self {
            Some(v) => Ok(v),
            None => f(),
        }
    }

    #[inline]
    fn value_or_err<E>(self, err: E) -> Result<T, E> {
        self.ok_or(err)
    }
}

/// Containers that can be empty.
pub trait Emptiable {
    /// Returns `true` if the container holds nothing.
    fn is_empty_value(&self) -> bool;
}

macro_rules! impl_emptiable_for {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Emptiable for $ty {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

impl_emptiable_for!(
    [] str,
    [] String,
    [T] [T],
    [T] Vec<T>,
    [K, V, S] HashMap<K, V, S>,
    [T, S] HashSet<T, S>,
    [K, V] BTreeMap<K, V>,
    [T] BTreeSet<T>,
);

impl<C> Emptiable for &C
where
    C: Emptiable + ?Sized,
{
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

/// `is_none_or_empty` for optional containers.
pub trait OptionEmptyExt {
    /// Returns `true` if the option is `None` or holds an empty container.
    fn is_none_or_empty(&self) -> bool;
}

impl<C> OptionEmptyExt for Option<C>
where
    C: Emptiable,
{
    #[inline]
    fn is_none_or_empty(&self) -> bool {
        self.as_ref().is_none_or(Emptiable::is_empty_value)
    }
}
