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

//! # Sugar Geometry
//!
//! Plain 2-D value types in `f64` screen coordinates (x grows right, y grows
//! down) with the helpers layout code keeps rewriting: named anchors,
//! centering within a container, insets and rounded-rectangle outlines.
//!
//! ## Submodules
//!
//! - `point`: `Point` with vector arithmetic.
//! - `size`: `Size` with area and scaling.
//! - `insets`: `EdgeInsets` per-edge distances.
//! - `rect`: `Rect`, its nine named anchors and centering.
//! - `path`: `Path` outlines, including rounded rectangles.
//!
//! ```rust
//! use sugar_geometry::{Point, Rect};
//!
//! let card = Rect::new(0.0, 0.0, 100.0, 50.0);
//! let screen = Rect::new(30.0, 60.0, 200.0, 100.0);
//! let centered = card.centered_in(screen);
//! assert_eq!(centered.center(), screen.center());
//! assert_eq!(centered.top_left(), Point::new(80.0, 85.0));
//! ```

pub mod insets;
pub mod path;
pub mod point;
pub mod rect;
pub mod size;

pub use insets::EdgeInsets;
pub use path::{CornerRadii, Path, PathElement};
pub use point::Point;
pub use rect::{Anchor, Rect};
pub use size::Size;
