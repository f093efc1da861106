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

//! # Fonts
//!
//! A fixed type scale. Each `TextStyle` maps to a base point size and weight;
//! a `TypeScale` multiplies those sizes, for example to follow a user's
//! preferred text size.
//!
//! ```rust
//! use sugar_ui::font::{FontWeight, TextStyle, TypeScale};
//!
//! let body = TypeScale::default().font(TextStyle::Body);
//! assert_eq!(body.size, 17.0);
//!
//! let large = TypeScale::default().with_factor(1.5).font(TextStyle::Body);
//! assert_eq!(large.size, 25.5);
//! assert_eq!(large.bold().weight, FontWeight::Bold);
//! ```

use serde::{Deserialize, Serialize};
use sugar_core::num::{
    clamp::ClampExt,
    round::{RoundExt, RoundingRule},
};

/// Stroke weight, ordered from thinnest to heaviest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontWeight {
    /// Returns the CSS/OpenType numeric weight (100 to 900).
    #[inline]
    pub const fn value(self) -> u16 {
        (self as u16 + 1) * 100
    }
}

/// Semantic text roles of the type scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextStyle {
    LargeTitle,
    Title1,
    Title2,
    Title3,
    Headline,
    Body,
    Callout,
    Subheadline,
    Footnote,
    Caption1,
    Caption2,
}

impl TextStyle {
    /// Base point size at a scale factor of `1.0`.
    pub const fn base_size(self) -> f64 {
        match self {
            TextStyle::LargeTitle => 34.0,
            TextStyle::Title1 => 28.0,
            TextStyle::Title2 => 22.0,
            TextStyle::Title3 => 20.0,
            TextStyle::Headline | TextStyle::Body => 17.0,
            TextStyle::Callout => 16.0,
            TextStyle::Subheadline => 15.0,
            TextStyle::Footnote => 13.0,
            TextStyle::Caption1 => 12.0,
            TextStyle::Caption2 => 11.0,
        }
    }

    pub const fn weight(self) -> FontWeight {
        match self {
            TextStyle::Headline => FontWeight::Semibold,
            _ => FontWeight::Regular,
        }
    }
}

/// A concrete font request: point size, weight and slant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: f64,
    pub weight: FontWeight,
    pub italic: bool,
}

impl Font {
    #[inline]
    pub const fn new(size: f64, weight: FontWeight) -> Self {
        Self {
            size,
            weight,
            italic: false,
        }
    }

    /// Returns the unscaled font for `style`.
    #[inline]
    pub const fn of_style(style: TextStyle) -> Self {
        Self::new(style.base_size(), style.weight())
    }

    #[inline]
    pub const fn bold(self) -> Self {
        self.with_weight(FontWeight::Bold)
    }

    #[inline]
    pub const fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }

    #[inline]
    pub const fn with_weight(self, weight: FontWeight) -> Self {
        Self { weight, ..self }
    }

    #[inline]
    pub const fn with_size(self, size: f64) -> Self {
        Self { size, ..self }
    }

    /// Returns the font with its size multiplied by `factor`, rounded to a
    /// tenth of a point.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        let size = (self.size * factor).rounded_to_places(1, RoundingRule::default());
        self.with_size(size)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::of_style(TextStyle::Body)
    }
}

/// Type scale configuration.
///
/// `factor` multiplies every base size; the result is kept within
/// `min_size..=max_size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeScale {
    pub factor: f64,
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for TypeScale {
    fn default() -> Self {
        Self {
            factor: 1.0,
            min_size: 9.0,
            max_size: 96.0,
        }
    }
}

impl TypeScale {
    /// Returns a copy with the scale factor replaced.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is not finite and positive.
    #[inline]
    pub fn with_factor(self, factor: f64) -> Self {
        assert!(
            factor.is_finite() && factor > 0.0,
            "Invalid type scale factor: {factor}"
        );
        Self { factor, ..self }
    }

    /// Returns a copy with the size bounds replaced.
    ///
    /// # Panics
    ///
    /// Panics if `min_size > max_size`.
    #[inline]
    pub fn with_size_limits(self, min_size: f64, max_size: f64) -> Self {
        assert!(
            min_size <= max_size,
            "Invalid type scale limits: {min_size} > {max_size}"
        );
        Self {
            min_size,
            max_size,
            ..self
        }
    }

    /// Returns the font for `style` under this scale.
    pub fn font(&self, style: TextStyle) -> Font {
        let font = Font::of_style(style).scaled(self.factor);
        font.with_size(font.size.clamped_to(self.min_size..=self.max_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_values() {
        assert_eq!(FontWeight::UltraLight.value(), 100);
        assert_eq!(FontWeight::Regular.value(), 400);
        assert_eq!(FontWeight::Black.value(), 900);
        assert!(FontWeight::Bold > FontWeight::Semibold);
    }

    #[test]
    fn test_default_scale_matches_base_sizes() {
        let scale = TypeScale::default();
        assert_eq!(scale.font(TextStyle::LargeTitle).size, 34.0);
        assert_eq!(scale.font(TextStyle::Caption2).size, 11.0);
        assert_eq!(scale.font(TextStyle::Headline).weight, FontWeight::Semibold);
    }

    #[test]
    fn test_scale_is_limited() {
        let tiny = TypeScale::default().with_factor(0.1);
        assert_eq!(tiny.font(TextStyle::Caption2).size, 9.0);

        let huge = TypeScale::default()
            .with_factor(10.0)
            .with_size_limits(9.0, 60.0);
        assert_eq!(huge.font(TextStyle::Body).size, 60.0);
    }

    #[test]
    fn test_scaled_rounds_to_tenths() {
        assert_eq!(Font::of_style(TextStyle::Footnote).scaled(1.13).size, 14.7);
    }

    #[test]
    fn test_builders() {
        let f = Font::default().bold().italic().with_size(20.0);
        assert_eq!(f.size, 20.0);
        assert_eq!(f.weight, FontWeight::Bold);
        assert!(f.italic);
        assert_eq!(
            f.with_weight(FontWeight::Light).weight,
            FontWeight::Light
        );
    }

    #[test]
    #[should_panic(expected = "Invalid type scale factor")]
    fn test_zero_factor_panics() {
        let _ = TypeScale::default().with_factor(0.0);
    }

    #[test]
    fn test_json_round_trip() {
        let font = Font::of_style(TextStyle::Headline).italic();
        let json = serde_json::to_string(&font).unwrap();
        assert_eq!(json, r#"{"size":17.0,"weight":"Semibold","italic":true}"#);
        assert_eq!(serde_json::from_str::<Font>(&json).unwrap(), font);

        let scale = TypeScale::default().with_factor(1.25);
        let json = serde_json::to_string(&scale).unwrap();
        assert_eq!(serde_json::from_str::<TypeScale>(&json).unwrap(), scale);
    }
}
