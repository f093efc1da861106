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

//! # Sugar UI
//!
//! Toolkit-independent pieces of user interface code: colors parsed from hex
//! strings, a fixed type scale, a cell reuse queue, attributed text, scroll
//! position math and a navigation stack with completion callbacks.
//!
//! Nothing here draws. These are the values and bookkeeping a view layer
//! reads from, so they can be tested without a window system.
//!
//! ## Submodules
//!
//! - `color`: `Color`, hex parsing and light/dark `DynamicColor`.
//! - `font`: `TextStyle`, `FontWeight`, `Font` and the `TypeScale` config.
//! - `reuse`: The `Reusable` trait and the `ReuseQueue` recycling pool.
//! - `attributed`: `AttributedText` with attributes over character ranges.
//! - `scroll`: `ScrollGeometry` offsets and edge detection.
//! - `navigation`: `NavigationStack` with completion callbacks.
//! - `error`: `UiError`, returned by the fallible operations above.

pub mod attributed;
pub mod color;
pub mod error;
pub mod font;
pub mod navigation;
pub mod reuse;
pub mod scroll;

pub use error::UiError;
