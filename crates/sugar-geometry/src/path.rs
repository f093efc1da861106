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

//! # Paths
//!
//! A `Path` is a flat list of drawing commands. It is built either command by
//! command or through shape constructors such as [`Path::rounded_rect`], and
//! can be rendered to SVG path data for inspection or export.
//!
//! Quarter circles are approximated with one cubic Bézier each, placing the
//! control points `KAPPA * r` away from the arc endpoints along the tangents.

use crate::{point::Point, rect::Rect};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt::Write;

/// Control point distance, as a fraction of the radius, for a cubic Bézier
/// that approximates a quarter circle.
pub const KAPPA: f64 = 0.5522847498;

/// Per-corner radii for rounded rectangles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Same radius on every corner.
    #[inline]
    pub const fn uniform(radius: f64) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Rounds only the top corners.
    #[inline]
    pub const fn top(radius: f64) -> Self {
        Self::new(radius, radius, 0.0, 0.0)
    }

    /// Rounds only the bottom corners.
    #[inline]
    pub const fn bottom(radius: f64) -> Self {
        Self::new(0.0, 0.0, radius, radius)
    }

    /// Returns the radii clamped into `[0, max]`. NaN becomes zero.
    pub fn clamped(self, max: f64) -> Self {
        let clamp = |r: f64| if r > 0.0 { r.min(max) } else { 0.0 };
        Self::new(
            clamp(self.top_left),
            clamp(self.top_right),
            clamp(self.bottom_right),
            clamp(self.bottom_left),
        )
    }
}

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    CurveTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
    Close,
}

/// An outline made of straight and cubic segments.
///
/// # Examples
///
/// ```rust
/// # use sugar_geometry::{Path, Point};
/// let mut path = Path::new();
/// path.move_to(Point::new(0.0, 0.0));
/// path.line_to(Point::new(10.0, 0.0));
/// path.close();
/// assert_eq!(path.to_svg_data(), "M0 0 L10 0 Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    elements: SmallVec<[PathElement; 10]>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the outline of `rect` with rounded corners.
    ///
    /// Each radius is clamped to `[0, min(width, height) / 2]`. Corners with a
    /// zero radius are drawn as sharp corners. The outline starts at the end
    /// of the top-left arc and runs clockwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_geometry::{CornerRadii, Path, PathElement, Rect};
    /// let path = Path::rounded_rect(Rect::new(0.0, 0.0, 40.0, 20.0), CornerRadii::uniform(100.0));
    /// // Radii are limited to half of the shorter side: a capsule
    /// assert!(matches!(path.elements()[0], PathElement::MoveTo(p) if p.x == 10.0 && p.y == 0.0));
    /// ```
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        let max = (rect.size.width.min(rect.size.height) / 2.0).max(0.0);
        let r = radii.clamped(max);
        let (min_x, min_y, max_x, max_y) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());

        let mut path = Self::new();
        path.move_to(Point::new(min_x + r.top_left, min_y));

        path.line_to(Point::new(max_x - r.top_right, min_y));
        path.quarter_arc(
            Point::new(max_x - r.top_right, min_y),
            Point::new(max_x, min_y + r.top_right),
            Point::new(max_x, min_y),
            r.top_right,
        );

        path.line_to(Point::new(max_x, max_y - r.bottom_right));
        path.quarter_arc(
            Point::new(max_x, max_y - r.bottom_right),
            Point::new(max_x - r.bottom_right, max_y),
            Point::new(max_x, max_y),
            r.bottom_right,
        );

        path.line_to(Point::new(min_x + r.bottom_left, max_y));
        path.quarter_arc(
            Point::new(min_x + r.bottom_left, max_y),
            Point::new(min_x, max_y - r.bottom_left),
            Point::new(min_x, max_y),
            r.bottom_left,
        );

        path.line_to(Point::new(min_x, min_y + r.top_left));
        path.quarter_arc(
            Point::new(min_x, min_y + r.top_left),
            Point::new(min_x + r.top_left, min_y),
            Point::new(min_x, min_y),
            r.top_left,
        );

        path.close();
        path
    }

    /// Appends a cubic from `from` to `to` bending toward `corner`.
    /// Does nothing for a zero radius.
    fn quarter_arc(&mut self, from: Point, to: Point, corner: Point, radius: f64) {
        if radius <= 0.0 {
            return;
        }
        let control1 = from + (corner - from) * KAPPA;
        let control2 = to + (corner - to) * KAPPA;
        self.curve_to(control1, control2, to);
    }

    #[inline]
    pub fn move_to(&mut self, point: Point) {
        self.elements.push(PathElement::MoveTo(point));
    }

    #[inline]
    pub fn line_to(&mut self, point: Point) {
        self.elements.push(PathElement::LineTo(point));
    }

    #[inline]
    pub fn curve_to(&mut self, control1: Point, control2: Point, to: Point) {
        self.elements.push(PathElement::CurveTo {
            control1,
            control2,
            to,
        });
    }

    #[inline]
    pub fn close(&mut self) {
        self.elements.push(PathElement::Close);
    }

    #[inline]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Renders the path as SVG path data (`M`, `L`, `C`, `Z` commands).
    pub fn to_svg_data(&self) -> String {
        let mut out = String::new();
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Writing into a String cannot fail
            let _ = match element {
                PathElement::MoveTo(p) => write!(out, "M{} {}", p.x, p.y),
                PathElement::LineTo(p) => write!(out, "L{} {}", p.x, p.y),
                PathElement::CurveTo {
                    control1,
                    control2,
                    to,
                } => write!(
                    out,
                    "C{} {} {} {} {} {}",
                    control1.x, control1.y, control2.x, control2.y, to.x, to.y
                ),
                PathElement::Close => write!(out, "Z"),
            };
        }
        out
    }
}
