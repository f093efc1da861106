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

//! # Scroll Geometry
//!
//! Offset math for a scrollable viewport over larger content. The content
//! offset is the content point shown at the viewport's top-left corner;
//! insets let the content scroll past its edges, so the topmost offset is
//! `-insets.top` rather than zero.

use serde::{Deserialize, Serialize};
use sugar_core::num::clamp::ClampExt;
use sugar_geometry::{EdgeInsets, Point, Size};

/// Viewport, content and current offset of a scrollable area.
///
/// # Examples
///
/// ```rust
/// # use sugar_geometry::{EdgeInsets, Point, Size};
/// # use sugar_ui::scroll::ScrollGeometry;
/// let mut scroll = ScrollGeometry::new(Size::new(320.0, 1000.0), Size::new(320.0, 480.0))
///     .with_insets(EdgeInsets::new(20.0, 0.0, 0.0, 0.0));
/// assert_eq!(scroll.top_offset(), -20.0);
/// assert_eq!(scroll.bottom_offset(), 520.0);
///
/// scroll.scroll_to_bottom();
/// assert!(scroll.is_at_bottom());
/// scroll.set_offset(Point::new(0.0, -300.0));
/// assert!(scroll.is_at_top());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredScrollGeometry")]
pub struct ScrollGeometry {
    content_size: Size,
    viewport_size: Size,
    insets: EdgeInsets,
    // Invariant: always within `clamped_offset`'s range.
    offset: Point,
}

/// Decoded form of [`ScrollGeometry`]; the offset is clamped on conversion.
#[derive(Deserialize)]
struct StoredScrollGeometry {
    content_size: Size,
    viewport_size: Size,
    insets: EdgeInsets,
    offset: Point,
}

impl From<StoredScrollGeometry> for ScrollGeometry {
    fn from(stored: StoredScrollGeometry) -> Self {
        let mut geometry = ScrollGeometry::new(stored.content_size, stored.viewport_size);
        geometry.insets = stored.insets;
        geometry.set_offset(stored.offset);
        geometry
    }
}

impl ScrollGeometry {
    #[inline]
    pub fn new(content_size: Size, viewport_size: Size) -> Self {
        Self {
            content_size,
            viewport_size,
            insets: EdgeInsets::ZERO,
            offset: Point::ZERO,
        }
    }

    /// Returns a copy with `insets`; the offset is re-clamped.
    #[inline]
    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.set_insets(insets);
        self
    }

    #[inline]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    #[inline]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    #[inline]
    pub fn insets(&self) -> EdgeInsets {
        self.insets
    }

    /// Replaces the content size and re-clamps the offset.
    #[inline]
    pub fn set_content_size(&mut self, content_size: Size) {
        self.content_size = content_size;
        self.set_offset(self.offset);
    }

    /// Replaces the viewport size and re-clamps the offset.
    #[inline]
    pub fn set_viewport_size(&mut self, viewport_size: Size) {
        self.viewport_size = viewport_size;
        self.set_offset(self.offset);
    }

    /// Replaces the insets and re-clamps the offset.
    #[inline]
    pub fn set_insets(&mut self, insets: EdgeInsets) {
        self.insets = insets;
        self.set_offset(self.offset);
    }

    #[inline]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Smallest vertical offset.
    #[inline]
    pub fn top_offset(&self) -> f64 {
        -self.insets.top
    }

    /// Largest vertical offset. Equals [`Self::top_offset`] when the content
    /// fits in the viewport.
    #[inline]
    pub fn bottom_offset(&self) -> f64 {
        let bottom = self.content_size.height + self.insets.bottom - self.viewport_size.height;
        bottom.max(self.top_offset())
    }

    /// Smallest horizontal offset.
    #[inline]
    pub fn left_offset(&self) -> f64 {
        -self.insets.left
    }

    /// Largest horizontal offset.
    #[inline]
    pub fn right_offset(&self) -> f64 {
        let right = self.content_size.width + self.insets.right - self.viewport_size.width;
        right.max(self.left_offset())
    }

    #[inline]
    pub fn is_at_top(&self) -> bool {
        self.offset.y <= self.top_offset()
    }

    #[inline]
    pub fn is_at_bottom(&self) -> bool {
        self.offset.y >= self.bottom_offset()
    }

    /// Returns `true` if the content is taller than the inset viewport.
    #[inline]
    pub fn can_scroll_vertically(&self) -> bool {
        self.bottom_offset() > self.top_offset()
    }

    /// Returns `offset` clamped to the scrollable range on both axes.
    pub fn clamped_offset(&self, offset: Point) -> Point {
        Point::new(
            offset.x.clamped_to(self.left_offset()..=self.right_offset()),
            offset.y.clamped_to(self.top_offset()..=self.bottom_offset()),
        )
    }

    /// Moves to `offset`, clamped to the scrollable range.
    #[inline]
    pub fn set_offset(&mut self, offset: Point) {
        self.offset = self.clamped_offset(offset);
    }

    /// Scrolls vertically by `dy`, clamped.
    #[inline]
    pub fn scroll_by(&mut self, dy: f64) {
        self.set_offset(self.offset + Point::new(0.0, dy));
    }

    #[inline]
    pub fn scroll_to_top(&mut self) {
        self.offset.y = self.top_offset();
    }

    #[inline]
    pub fn scroll_to_bottom(&mut self) {
        self.offset.y = self.bottom_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tall() -> ScrollGeometry {
        ScrollGeometry::new(Size::new(100.0, 500.0), Size::new(100.0, 200.0))
    }

    #[test]
    fn test_offsets_without_insets() {
        let s = tall();
        assert_eq!(s.top_offset(), 0.0);
        assert_eq!(s.bottom_offset(), 300.0);
        assert_eq!(s.right_offset(), 0.0);
        assert!(s.is_at_top());
        assert!(!s.is_at_bottom());
        assert!(s.can_scroll_vertically());
    }

    #[test]
    fn test_short_content_is_at_both_ends() {
        let s = ScrollGeometry::new(Size::new(100.0, 50.0), Size::new(100.0, 200.0));
        assert_eq!(s.bottom_offset(), s.top_offset());
        assert!(s.is_at_top());
        assert!(s.is_at_bottom());
        assert!(!s.can_scroll_vertically());
    }

    #[test]
    fn test_offset_is_clamped() {
        let mut s = tall().with_insets(EdgeInsets::new(10.0, 0.0, 30.0, 0.0));
        assert_eq!(s.bottom_offset(), 330.0);

        s.set_offset(Point::new(50.0, 1000.0));
        assert_eq!(s.offset(), Point::new(0.0, 330.0));
        assert!(s.is_at_bottom());

        s.scroll_by(-100.0);
        assert_eq!(s.offset().y, 230.0);
        s.scroll_by(-1000.0);
        assert_eq!(s.offset().y, -10.0);
        assert!(s.is_at_top());
    }

    #[test]
    fn test_scroll_to_edges() {
        let mut s = tall();
        s.scroll_to_bottom();
        assert_eq!(s.offset().y, 300.0);
        s.scroll_to_top();
        assert_eq!(s.offset().y, 0.0);
    }

    #[test]
    fn test_shrinking_content_reclamps_offset() {
        let mut s = tall();
        s.scroll_to_bottom();
        s.set_content_size(Size::new(100.0, 250.0));
        assert_eq!(s.offset().y, 50.0);
        assert!(s.is_at_bottom());

        s.set_viewport_size(Size::new(100.0, 400.0));
        assert_eq!(s.offset().y, 0.0);
        assert!(!s.can_scroll_vertically());

        s.set_insets(EdgeInsets::new(15.0, 0.0, 0.0, 0.0));
        assert_eq!(s.insets().top, 15.0);
        assert_eq!(s.offset().y, -15.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut s = tall().with_insets(EdgeInsets::new(10.0, 0.0, 0.0, 0.0));
        s.set_offset(Point::new(0.0, 120.0));

        let json = serde_json::to_string(&s).unwrap();
        let decoded: ScrollGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, s);
        assert_eq!(decoded.content_size(), Size::new(100.0, 500.0));
    }

    #[test]
    fn test_decoded_offset_is_clamped() {
        let json = serde_json::json!({
            "content_size": { "width": 100.0, "height": 500.0 },
            "viewport_size": { "width": 100.0, "height": 200.0 },
            "insets": { "top": 0.0, "left": 0.0, "bottom": 0.0, "right": 0.0 },
            "offset": { "x": -40.0, "y": 9000.0 },
        });
        let decoded: ScrollGeometry = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.offset(), Point::new(0.0, 300.0));
        assert!(decoded.is_at_bottom());
    }
}
