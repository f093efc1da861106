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

//! # Rectangles
//!
//! `Rect` is an origin plus a size. The origin is the top-left corner, so
//! `min_y` is the top edge and `max_y` the bottom edge.
//!
//! ## Anchors
//!
//! Each of the nine named anchors has three forms:
//!
//! - an accessor (`top_right()`) returning the point,
//! - a builder (`with_top_right(p)`) returning a moved copy,
//! - a mutator (`set_top_right(p)`) moving the rectangle in place.
//!
//! Moving a rectangle by an anchor keeps its size and places the origin so the
//! anchor lands on the given point.

use crate::{insets::EdgeInsets, point::Point, size::Size};
use serde::{Deserialize, Serialize};

/// One of the nine reference points of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Every anchor, row by row from the top left.
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::CenterLeft,
        Anchor::Center,
        Anchor::CenterRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    /// Returns the anchor's position as fractions of width and height.
    #[inline]
    pub const fn fraction(self) -> (f64, f64) {
        match self {
            Anchor::TopLeft => (0.0, 0.0),
            Anchor::TopCenter => (0.5, 0.0),
            Anchor::TopRight => (1.0, 0.0),
            Anchor::CenterLeft => (0.0, 0.5),
            Anchor::Center => (0.5, 0.5),
            Anchor::CenterRight => (1.0, 0.5),
            Anchor::BottomLeft => (0.0, 1.0),
            Anchor::BottomCenter => (0.5, 1.0),
            Anchor::BottomRight => (1.0, 1.0),
        }
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopCenter => "top-center",
            Anchor::TopRight => "top-right",
            Anchor::CenterLeft => "center-left",
            Anchor::Center => "center",
            Anchor::CenterRight => "center-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomCenter => "bottom-center",
            Anchor::BottomRight => "bottom-right",
        };
        f.write_str(name)
    }
}

/// An axis-aligned rectangle.
///
/// # Examples
///
/// ```rust
/// # use sugar_geometry::{Point, Rect};
/// let r = Rect::new(10.0, 20.0, 100.0, 50.0);
/// assert_eq!(r.max_x(), 110.0);
/// assert_eq!(r.bottom_center(), Point::new(60.0, 70.0));
///
/// let moved = r.with_bottom_right(Point::new(0.0, 0.0));
/// assert_eq!(moved.origin, Point::new(-100.0, -50.0));
/// assert_eq!(moved.size, r.size);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

macro_rules! anchor_accessors {
    ($($anchor:ident => $get:ident, $with:ident, $set:ident;)*) => {
        $(
            #[doc = concat!("Returns the `", stringify!($anchor), "` anchor point.")]
            #[inline]
            pub fn $get(&self) -> Point {
                self.point_at(Anchor::$anchor)
            }

            #[doc = concat!("Returns a copy moved so its `", stringify!($anchor), "` anchor is at `point`.")]
            #[inline]
            pub fn $with(self, point: Point) -> Self {
                self.with_point_at(Anchor::$anchor, point)
            }

            #[doc = concat!("Moves the rectangle so its `", stringify!($anchor), "` anchor is at `point`.")]
            #[inline]
            pub fn $set(&mut self, point: Point) {
                *self = self.$with(point);
            }
        )*
    };
}

impl Rect {
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width * 0.5
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height * 0.5
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Returns the point at `anchor`.
    #[inline]
    pub fn point_at(&self, anchor: Anchor) -> Point {
        let (fx, fy) = anchor.fraction();
        Point::new(
            self.origin.x + self.size.width * fx,
            self.origin.y + self.size.height * fy,
        )
    }

    /// Returns a copy moved so `anchor` lies at `point`. The size is kept.
    #[inline]
    pub fn with_point_at(self, anchor: Anchor, point: Point) -> Self {
        let (fx, fy) = anchor.fraction();
        let origin = Point::new(
            point.x - self.size.width * fx,
            point.y - self.size.height * fy,
        );
        Self { origin, ..self }
    }

    anchor_accessors! {
        TopLeft => top_left, with_top_left, set_top_left;
        TopCenter => top_center, with_top_center, set_top_center;
        TopRight => top_right, with_top_right, set_top_right;
        CenterLeft => center_left, with_center_left, set_center_left;
        Center => center, with_center, set_center;
        CenterRight => center_right, with_center_right, set_center_right;
        BottomLeft => bottom_left, with_bottom_left, set_bottom_left;
        BottomCenter => bottom_center, with_bottom_center, set_bottom_center;
        BottomRight => bottom_right, with_bottom_right, set_bottom_right;
    }

    /// Returns a copy centered horizontally within `container`; `y` is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_geometry::Rect;
    /// let r = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// let container = Rect::new(30.0, 60.0, 200.0, 100.0);
    /// assert_eq!(r.centered_horizontally_in(container).origin.x, 80.0);
    /// ```
    #[inline]
    pub fn centered_horizontally_in(self, container: Rect) -> Self {
        let x = container.origin.x + (container.size.width - self.size.width) / 2.0;
        self.with_origin(Point::new(x, self.origin.y))
    }

    /// Returns a copy centered vertically within `container`; `x` is kept.
    #[inline]
    pub fn centered_vertically_in(self, container: Rect) -> Self {
        let y = container.origin.y + (container.size.height - self.size.height) / 2.0;
        self.with_origin(Point::new(self.origin.x, y))
    }

    /// Returns a copy centered on both axes within `container`.
    #[inline]
    pub fn centered_in(self, container: Rect) -> Self {
        self.centered_horizontally_in(container)
            .centered_vertically_in(container)
    }

    #[inline]
    pub fn with_width(self, width: f64) -> Self {
        Self {
            size: self.size.with_width(width),
            ..self
        }
    }

    #[inline]
    pub fn with_height(self, height: f64) -> Self {
        Self {
            size: self.size.with_height(height),
            ..self
        }
    }

    #[inline]
    pub fn with_size(self, size: Size) -> Self {
        Self { size, ..self }
    }

    #[inline]
    pub fn with_origin(self, origin: Point) -> Self {
        Self { origin, ..self }
    }

    /// Returns the rectangle shrunk by `insets`.
    ///
    /// Insets larger than the rectangle collapse that dimension to zero at
    /// the midpoint of the two opposing insets.
    pub fn inset_by(self, insets: EdgeInsets) -> Self {
        let x = self.origin.x + insets.left;
        let y = self.origin.y + insets.top;
        let width = self.size.width - insets.horizontal();
        let height = self.size.height - insets.vertical();

        let (x, width) = if width < 0.0 {
            (x + width / 2.0, 0.0)
        } else {
            (x, width)
        };
        let (y, height) = if height < 0.0 {
            (y + height / 2.0, 0.0)
        } else {
            (y, height)
        };
        Self::new(x, y, width, height)
    }

    /// Returns the smallest rectangle with integer edges containing `self`.
    pub fn integral(self) -> Self {
        let min_x = self.min_x().floor();
        let min_y = self.min_y().floor();
        let max_x = self.max_x().ceil();
        let max_y = self.max_y().ceil();
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Returns `true` if `point` is inside. The min edges are inclusive and
    /// the max edges exclusive, so adjacent rectangles never share a point.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Returns `true` if the two rectangles overlap with a non-empty area.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    /// Returns the overlapping area, or `None` if the rectangles do not
    /// intersect.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let min_x = self.min_x().max(other.min_x());
        let min_y = self.min_y().max(other.min_y());
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect {{ x: {}, y: {}, width: {}, height: {} }}",
            self.origin.x, self.origin.y, self.size.width, self.size.height
        )
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.origin, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn sample() -> Rect {
        Rect::new(10.0, 20.0, 100.0, 40.0)
    }

    #[test]
    fn test_edges() {
        let r = sample();
        assert_eq!((r.min_x(), r.mid_x(), r.max_x()), (10.0, 60.0, 110.0));
        assert_eq!((r.min_y(), r.mid_y(), r.max_y()), (20.0, 40.0, 60.0));
    }

    #[test]
    fn test_named_anchors() {
        let r = sample();
        assert_eq!(r.top_left(), Point::new(10.0, 20.0));
        assert_eq!(r.top_center(), Point::new(60.0, 20.0));
        assert_eq!(r.top_right(), Point::new(110.0, 20.0));
        assert_eq!(r.center_left(), Point::new(10.0, 40.0));
        assert_eq!(r.center(), Point::new(60.0, 40.0));
        assert_eq!(r.center_right(), Point::new(110.0, 40.0));
        assert_eq!(r.bottom_left(), Point::new(10.0, 60.0));
        assert_eq!(r.bottom_center(), Point::new(60.0, 60.0));
        assert_eq!(r.bottom_right(), Point::new(110.0, 60.0));
    }

    #[test]
    fn test_set_anchor_keeps_size() {
        let mut r = sample();
        r.set_center(Point::ZERO);
        assert_eq!(r, Rect::new(-50.0, -20.0, 100.0, 40.0));

        r.set_top_right(Point::new(100.0, 0.0));
        assert_eq!(r.origin, Point::ZERO);
        assert_eq!(r.size, Size::new(100.0, 40.0));
    }

    #[test]
    fn test_every_anchor_round_trips() {
        let target = Point::new(7.0, -3.0);
        for anchor in Anchor::ALL {
            let moved = sample().with_point_at(anchor, target);
            assert_eq!(moved.point_at(anchor), target, "anchor {}", anchor);
            assert_eq!(moved.size, sample().size);
        }
    }

    #[test]
    fn test_centering() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let container = Rect::new(30.0, 60.0, 200.0, 100.0);

        let h = r.centered_horizontally_in(container);
        assert_eq!(h.origin, Point::new(80.0, 0.0));

        let v = r.centered_vertically_in(container);
        assert_eq!(v.origin, Point::new(0.0, 85.0));

        let both = r.centered_in(container);
        assert_eq!(both.origin, Point::new(80.0, 85.0));

        // A larger rectangle overhangs the container evenly
        let wide = Rect::new(0.0, 0.0, 300.0, 10.0).centered_horizontally_in(container);
        assert_eq!(wide.min_x(), -20.0);
    }

    #[test]
    fn test_builders() {
        let r = sample()
            .with_width(5.0)
            .with_height(6.0)
            .with_origin(Point::new(1.0, 2.0));
        assert_eq!(r, Rect::new(1.0, 2.0, 5.0, 6.0));
        assert_eq!(r.with_size(Size::square(3.0)).size, Size::square(3.0));
    }

    #[test]
    fn test_inset_by() {
        let r = sample().inset_by(EdgeInsets::new(5.0, 10.0, 5.0, 20.0));
        assert_eq!(r, Rect::new(20.0, 25.0, 70.0, 30.0));

        let collapsed = Rect::new(0.0, 0.0, 10.0, 10.0).inset_by(EdgeInsets::uniform(8.0));
        assert_eq!(collapsed, Rect::new(5.0, 5.0, 0.0, 0.0));

        let grown = Rect::new(0.0, 0.0, 10.0, 10.0).inset_by(EdgeInsets::uniform(-1.0));
        assert_eq!(grown, Rect::new(-1.0, -1.0, 12.0, 12.0));
    }

    #[test]
    fn test_integral() {
        let r = Rect::new(0.5, 1.2, 2.0, 2.5).integral();
        assert_eq!(r, Rect::new(0.0, 1.0, 3.0, 3.0));
    }

    #[test]
    fn test_contains_and_intersects() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::ZERO));
        assert!(r.contains(Point::new(9.9, 9.9)));
        assert!(!r.contains(Point::new(10.0, 5.0)));

        let touching = Rect::new(10.0, 0.0, 5.0, 5.0);
        assert!(!r.intersects(&touching));
        assert_eq!(r.intersection(&touching), None);

        let overlapping = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(r.intersects(&overlapping));
        assert_eq!(
            r.intersection(&overlapping),
            Some(Rect::new(5.0, 5.0, 5.0, 5.0))
        );
    }

    quickcheck! {
        fn prop_centered_in_shares_center(
            w: u8, h: u8, cx: i16, cy: i16, cw: u8, ch: u8
        ) -> bool {
            let r = Rect::new(0.0, 0.0, w as f64, h as f64);
            let container = Rect::new(cx as f64, cy as f64, cw as f64, ch as f64);
            r.centered_in(container).center() == container.center()
        }
    }
}
