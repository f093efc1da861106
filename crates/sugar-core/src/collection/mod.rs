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

//! # Collection Helpers
//!
//! Extension traits for slices, vectors and maps, plus conversions between
//! sequence-like containers.
//!
//! ## Submodules
//!
//! - `slice`: Read-only helpers on `[T]`: first/last `k` with clamping,
//!   containment-of-all, index-of-all-occurrences, clamped sub-slicing.
//! - `vec`: Mutating helpers on `Vec<T>`: rearranging, duplicate removal
//!   preserving first occurrence, value and identity based removal,
//!   prepend/append of elements and sequences.
//! - `map`: Key lookup by value or by reference identity, bulk key checks and
//!   key/value projections for `HashMap` and `BTreeMap`.
//! - `convert`: Array/set/string conversions.
//! - `identity`: The `Identity` trait used for reference-identity comparisons.

pub mod convert;
pub mod identity;
pub mod map;
pub mod slice;
pub mod vec;
