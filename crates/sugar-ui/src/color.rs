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

//! # Colors
//!
//! 8-bit RGBA colors with hex parsing and formatting, plus `DynamicColor`
//! for values that differ between light and dark appearance.
//!
//! ```rust
//! use sugar_ui::color::{Appearance, Color, DynamicColor};
//!
//! let accent = Color::from_hex_str("#0A84FF").unwrap();
//! assert_eq!(accent, Color::from_hex_int(0x0A84FF));
//! assert_eq!(accent.with_alpha(0x80).to_hex_string(), "#0A84FF80");
//!
//! let label = DynamicColor::new(Color::BLACK, Color::WHITE);
//! assert_eq!(label.resolve(Appearance::Dark), Color::WHITE);
//! ```

use crate::error::UiError;
use serde::{Deserialize, Serialize};
use sugar_core::string::ext::StrExt;

/// A color with 8-bit red, green, blue and alpha channels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[inline]
fn hex_digit(c: char, position: usize) -> Result<u8, UiError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(UiError::InvalidHexDigit { digit: c, position })
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const CLEAR: Self = Self::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a hex color.
    ///
    /// Accepts `RGB`, `RGBA`, `RRGGBB` and `RRGGBBAA`, optionally prefixed by
    /// `#` or `0x`. Surrounding whitespace is ignored. Short forms repeat each
    /// digit, so `F80` is `FF8800`. Error positions count from the first
    /// digit after the prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_ui::{color::Color, UiError};
    /// assert_eq!(Color::from_hex_str("f80"), Ok(Color::rgb(0xFF, 0x88, 0x00)));
    /// assert_eq!(Color::from_hex_str("0x00000080"), Ok(Color::rgba(0, 0, 0, 0x80)));
    /// assert_eq!(Color::from_hex_str("#12345"), Err(UiError::InvalidHexLength(5)));
    /// ```
    pub fn from_hex_str(s: &str) -> Result<Self, UiError> {
        Self::parse_hex(s).inspect_err(|err| {
            tracing::debug!(input = s, error = %err, "rejected hex color");
        })
    }

    fn parse_hex(s: &str) -> Result<Self, UiError> {
        let s = s.trimmed();
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let nibbles = digits
            .chars()
            .enumerate()
            .map(|(i, c)| hex_digit(c, i))
            .collect::<Result<Vec<u8>, _>>()?;

        let byte = |hi: u8, lo: u8| hi << 4 | lo;
        match *nibbles.as_slice() {
            [r, g, b] => Ok(Self::rgb(byte(r, r), byte(g, g), byte(b, b))),
            [r, g, b, a] => Ok(Self::rgba(byte(r, r), byte(g, g), byte(b, b), byte(a, a))),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::rgb(byte(r1, r0), byte(g1, g0), byte(b1, b0))),
            [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Self::rgba(
                byte(r1, r0),
                byte(g1, g0),
                byte(b1, b0),
                byte(a1, a0),
            )),
            _ => Err(UiError::InvalidHexLength(nibbles.len())),
        }
    }

    /// Builds an opaque color from `0xRRGGBB`. Bits above the low 24 are
    /// ignored.
    #[inline]
    pub const fn from_hex_int(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex_string(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Returns the same color with alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns the same color with alpha set from a `0.0..=1.0` opacity.
    /// Values outside the range are clamped.
    #[inline]
    pub fn with_opacity(self, opacity: f64) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.with_alpha(a)
    }

    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.to_hex_string())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl std::str::FromStr for Color {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

/// The interface style colors are resolved against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// A color with separate light and dark variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicColor {
    pub light: Color,
    pub dark: Color,
}

impl DynamicColor {
    #[inline]
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// Same color in both appearances.
    #[inline]
    pub const fn fixed(color: Color) -> Self {
        Self::new(color, color)
    }

    /// Returns the variant for `appearance`.
    #[inline]
    pub const fn resolve(&self, appearance: Appearance) -> Color {
        match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark,
        }
    }
}

impl From<Color> for DynamicColor {
    fn from(color: Color) -> Self {
        Self::fixed(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_hex_lengths() {
        assert_eq!(Color::from_hex_str("abc"), Ok(Color::rgb(0xAA, 0xBB, 0xCC)));
        assert_eq!(
            Color::from_hex_str("abcd"),
            Ok(Color::rgba(0xAA, 0xBB, 0xCC, 0xDD))
        );
        assert_eq!(
            Color::from_hex_str("#1A2b3C"),
            Ok(Color::rgb(0x1A, 0x2B, 0x3C))
        );
        assert_eq!(
            Color::from_hex_str("0X1A2B3C4D"),
            Ok(Color::rgba(0x1A, 0x2B, 0x3C, 0x4D))
        );
    }

    #[test]
    fn test_hex_whitespace_is_ignored() {
        assert_eq!(Color::from_hex_str("  #fff\n"), Ok(Color::WHITE));
    }

    #[test]
    fn test_invalid_hex() {
        assert_eq!(Color::from_hex_str(""), Err(UiError::InvalidHexLength(0)));
        assert_eq!(Color::from_hex_str("#"), Err(UiError::InvalidHexLength(0)));
        assert_eq!(
            Color::from_hex_str("#12g456"),
            Err(UiError::InvalidHexDigit {
                digit: 'g',
                position: 2
            })
        );
        assert_eq!(
            Color::from_hex_str("ff00é0"),
            Err(UiError::InvalidHexDigit {
                digit: 'é',
                position: 4
            })
        );
    }

    #[test]
    fn test_from_hex_int() {
        assert_eq!(Color::from_hex_int(0xFF8000), Color::rgb(255, 128, 0));
        assert_eq!(Color::from_hex_int(0xAB_000000), Color::BLACK);
    }

    #[test]
    fn test_to_hex_string_round_trip() {
        for s in ["#000000", "#FFFFFF", "#0A84FF", "#12345678"] {
            let c: Color = s.parse().unwrap();
            assert_eq!(c.to_hex_string(), s);
        }
    }

    #[test]
    fn test_opacity() {
        assert_eq!(Color::WHITE.with_opacity(0.5).a, 128);
        assert_eq!(Color::WHITE.with_opacity(-1.0).a, 0);
        assert_eq!(Color::WHITE.with_opacity(2.0), Color::WHITE);
        assert!(!Color::CLEAR.is_opaque());
    }

    #[test]
    fn test_dynamic_color() {
        let c = DynamicColor::from(Color::WHITE);
        assert_eq!(c.resolve(Appearance::Light), c.resolve(Appearance::Dark));
        assert_eq!(Appearance::default(), Appearance::Light);
    }

    #[test]
    fn test_json_round_trip() {
        let c = Color::rgba(0x0A, 0x84, 0xFF, 0x80);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"r":10,"g":132,"b":255,"a":128}"#);
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), c);

        let dynamic = DynamicColor::new(Color::BLACK, Color::WHITE);
        let json = serde_json::to_string(&dynamic).unwrap();
        assert_eq!(serde_json::from_str::<DynamicColor>(&json).unwrap(), dynamic);
    }
}
