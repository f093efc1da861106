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

//! # Attributed Text
//!
//! A string plus styling runs. Each run applies one [`Attribute`] to a span of
//! *character* indices. Runs may overlap; later runs are reported after
//! earlier ones by [`AttributedText::attributes_at`], and it is up to the
//! renderer to decide how overlapping attributes combine.
//!
//! Ranges are clamped to the text, so styling past the end never fails.
//!
//! ```rust
//! use sugar_ui::attributed::{Attribute, AttributedText};
//! use sugar_ui::color::Color;
//!
//! let mut text = AttributedText::new("Read the terms and the privacy terms.");
//! let hits = text.apply_to_occurrences("terms", Attribute::Underline);
//! assert_eq!(hits, 2);
//! text.apply(Attribute::ForegroundColor(Color::from_hex_int(0x0A84FF)), 0..4);
//!
//! assert_eq!(text.attributes_at(9), vec![&Attribute::Underline]);
//! assert!(text.attributes_at(5).is_empty());
//! ```

use crate::{color::Color, error::UiError, font::Font};
use serde::{Deserialize, Serialize};
use std::ops::RangeBounds;
use sugar_core::{math::span::Span, string::ext::StrExt};
use sugar_geometry::Size;

/// Drop shadow behind glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset: Size,
    pub blur_radius: f64,
    pub color: Color,
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            offset: Size::new(0.0, 1.0),
            blur_radius: 2.0,
            color: Color::BLACK.with_opacity(0.33),
        }
    }
}

/// A single styling attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Attribute {
    Underline,
    Strikethrough,
    ForegroundColor(Color),
    Shadow(Shadow),
    Font(Font),
}

/// An attribute applied over a span of character indices.
///
/// Runs are only built by [`AttributedText`] or decoded, so `start <= end`
/// always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredRun")]
pub struct AttributeRun {
    start: usize,
    end: usize,
    attribute: Attribute,
}

impl AttributeRun {
    #[inline]
    pub fn span(&self) -> Span<usize> {
        Span::new(self.start, self.end)
    }

    #[inline]
    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }
}

#[derive(Deserialize)]
struct StoredRun {
    start: usize,
    end: usize,
    attribute: Attribute,
}

impl TryFrom<StoredRun> for AttributeRun {
    type Error = UiError;

    fn try_from(run: StoredRun) -> Result<Self, Self::Error> {
        if run.start > run.end {
            return Err(UiError::InvertedAttributeRun {
                start: run.start,
                end: run.end,
            });
        }
        Ok(Self {
            start: run.start,
            end: run.end,
            attribute: run.attribute,
        })
    }
}

/// Text with styling runs.
///
/// The character count is not stored; decoding recounts it and rejects runs
/// that extend past the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredAttributedText")]
pub struct AttributedText {
    text: String,
    #[serde(skip)]
    char_count: usize,
    runs: Vec<AttributeRun>,
}

#[derive(Deserialize)]
struct StoredAttributedText {
    text: String,
    runs: Vec<AttributeRun>,
}

impl TryFrom<StoredAttributedText> for AttributedText {
    type Error = UiError;

    fn try_from(stored: StoredAttributedText) -> Result<Self, Self::Error> {
        let mut text = AttributedText::new(stored.text);
        if let Some(run) = stored.runs.iter().find(|run| run.end > text.char_count) {
            return Err(UiError::AttributeRunOutOfBounds {
                start: run.start,
                end: run.end,
                len: text.char_count,
            });
        }
        text.runs = stored.runs;
        Ok(text)
    }
}

impl AttributedText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            runs: Vec::new(),
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the text in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.char_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.char_count == 0
    }

    #[inline]
    pub fn runs(&self) -> &[AttributeRun] {
        &self.runs
    }

    /// Applies `attribute` to the characters in `range`, clamped to the text.
    ///
    /// Returns `false` and records nothing if the clamped range is empty.
    pub fn apply<R>(&mut self, attribute: Attribute, range: R) -> bool
    where
        R: RangeBounds<usize>,
    {
        let span = Span::clamped_from_bounds(range, self.char_count);
        if span.is_empty() {
            tracing::trace!(%span, len = self.char_count, "attribute range is empty after clamping");
            return false;
        }
        self.push_run(span, attribute);
        true
    }

    /// Applies `attribute` to the whole text.
    #[inline]
    pub fn apply_to_all(&mut self, attribute: Attribute) -> bool {
        self.apply(attribute, ..)
    }

    /// Applies `attribute` to every non-overlapping occurrence of `needle`,
    /// returning how many were found. An empty needle matches nothing.
    pub fn apply_to_occurrences(&mut self, needle: &str, attribute: Attribute) -> usize {
        if needle.is_empty() {
            return 0;
        }
        let needle_chars = needle.chars().count();

        // Walk the matches in order, converting byte offsets to char indices
        // incrementally.
        let mut spans = Vec::new();
        let (mut last_byte, mut last_char) = (0, 0);
        for (byte, _) in self.text.match_indices(needle) {
            last_char += self.text[last_byte..byte].chars().count();
            last_byte = byte;
            spans.push(Span::new(last_char, last_char + needle_chars));
        }

        let found = spans.len();
        for span in spans {
            self.push_run(span, attribute);
        }
        found
    }

    /// Builder form of [`AttributedText::apply`].
    #[inline]
    pub fn with<R>(mut self, attribute: Attribute, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        self.apply(attribute, range);
        self
    }

    /// Returns every attribute covering character `index`, in the order they
    /// were applied.
    pub fn attributes_at(&self, index: usize) -> Vec<&Attribute> {
        self.runs
            .iter()
            .filter(|run| run.span().contains(index))
            .map(|run| &run.attribute)
            .collect()
    }

    /// Returns the text covered by `run`.
    pub fn run_text(&self, run: &AttributeRun) -> &str {
        self.text.substring_clamped(run.span())
    }

    /// Removes every run.
    #[inline]
    pub fn clear_attributes(&mut self) {
        self.runs.clear();
    }

    fn push_run(&mut self, span: Span<usize>, attribute: Attribute) {
        self.runs.push(AttributeRun {
            start: span.start(),
            end: span.end(),
            attribute,
        });
    }
}

impl From<&str> for AttributedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for AttributedText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontWeight, TextStyle};

    #[test]
    fn test_apply_clamps_range() {
        let mut text = AttributedText::new("hello");
        assert!(text.apply(Attribute::Strikethrough, 3..100));
        assert_eq!(text.runs()[0].span(), Span::new(3, 5));
        assert_eq!(text.run_text(&text.runs()[0]), "lo");

        assert!(!text.apply(Attribute::Underline, 7..9));
        assert!(!text.apply(Attribute::Underline, 2..2));
        assert_eq!(text.runs().len(), 1);
    }

    #[test]
    fn test_apply_to_all() {
        let bold = Font::of_style(TextStyle::Body).bold();
        let text = AttributedText::from("abc").with(Attribute::Font(bold), ..);
        for i in 0..3 {
            assert_eq!(text.attributes_at(i), vec![&Attribute::Font(bold)]);
        }
        assert!(text.attributes_at(3).is_empty());

        let mut empty = AttributedText::new("");
        assert!(!empty.apply_to_all(Attribute::Underline));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_occurrences_use_character_indices() {
        let mut text = AttributedText::new("ça va, ça va");
        assert_eq!(text.len(), 12);
        assert_eq!(text.apply_to_occurrences("ça", Attribute::Underline), 2);

        let spans: Vec<_> = text.runs().iter().map(AttributeRun::span).collect();
        assert_eq!(spans, vec![Span::new(0, 2), Span::new(7, 9)]);
        assert_eq!(text.run_text(&text.runs()[1]), "ça");
    }

    #[test]
    fn test_occurrences_do_not_overlap() {
        let mut text = AttributedText::new("aaaa");
        assert_eq!(text.apply_to_occurrences("aa", Attribute::Underline), 2);
        assert_eq!(text.apply_to_occurrences("", Attribute::Underline), 0);
        assert_eq!(text.apply_to_occurrences("b", Attribute::Underline), 0);
    }

    #[test]
    fn test_overlapping_runs_report_in_order() {
        let red = Attribute::ForegroundColor(Color::rgb(255, 0, 0));
        let heavy = Attribute::Font(Font::new(12.0, FontWeight::Heavy));
        let text = AttributedText::new("overlap")
            .with(red, 0..5)
            .with(heavy, 3..)
            .with(Attribute::Shadow(Shadow::default()), 4..=4);

        assert_eq!(text.attributes_at(2), vec![&red]);
        assert_eq!(
            text.attributes_at(4),
            vec![&red, &heavy, &Attribute::Shadow(Shadow::default())]
        );
        assert_eq!(text.attributes_at(6), vec![&heavy]);
    }

    #[test]
    fn test_clear_attributes() {
        let mut text = AttributedText::new("x").with(Attribute::Underline, ..);
        text.clear_attributes();
        assert!(text.runs().is_empty());
        assert_eq!(text.text(), "x");
    }

    #[test]
    fn test_json_round_trip() {
        let text = AttributedText::new("héllo world")
            .with(Attribute::Underline, 0..5)
            .with(Attribute::ForegroundColor(Color::rgba(1, 2, 3, 4)), 6..)
            .with(Attribute::Font(Font::default().italic()), ..);

        let json = serde_json::to_string(&text).unwrap();
        assert!(!json.contains("char_count"));

        let decoded: AttributedText = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, text);
        assert_eq!(decoded.len(), 11);
        assert_eq!(decoded.run_text(&decoded.runs()[1]), "world");
    }

    #[test]
    fn test_decode_rejects_inverted_run() {
        let json = r#"{"text":"ab","runs":[{"start":2,"end":1,"attribute":"Underline"}]}"#;
        let err = serde_json::from_str::<AttributedText>(json).unwrap_err();
        assert!(err.is_data());
        assert!(err.to_string().contains("attribute run 2..1 is inverted"));
    }

    #[test]
    fn test_decode_rejects_run_past_text() {
        let json = r#"{"text":"ab","runs":[{"start":0,"end":3,"attribute":"Underline"}]}"#;
        let err = serde_json::from_str::<AttributedText>(json).unwrap_err();
        assert!(err.to_string().contains("does not fit text of 2 characters"));
    }

    #[test]
    fn test_decode_ignores_stored_char_count() {
        let json = r#"{"text":"ab","char_count":50,"runs":[]}"#;
        let mut decoded: AttributedText = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.len(), 2);

        assert!(decoded.apply(Attribute::Underline, ..));
        assert_eq!(decoded.runs()[0].span(), Span::new(0, 2));
    }
}
