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

use crate::{math::span::Span, string::pattern};
use std::ops::{Range, RangeBounds};

/// Maps a span of character indices to the matching byte range of `s`.
///
/// The span must already lie within `0..=char_count`.
fn byte_range(s: &str, span: Span<usize>) -> Range<usize> {
    let mut offsets = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()));
    let start = offsets.nth(span.start()).unwrap_or(s.len());
    let end = if span.is_empty() {
        start
    } else {
        offsets.nth(span.len() - 1).unwrap_or(s.len())
    };
    start..end
}

/// Uppercases or lowercases only the first character of `s`.
fn map_first<F, I>(s: &str, f: F) -> String
where
    F: FnOnce(char) -> I,
    I: Iterator<Item = char>,
{
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => f(first).chain(chars).collect(),
        None => String::new(),
    }
}

/// Character-aware helpers on string slices.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::string::ext::StrExt;
/// assert_eq!("  hi \n".trimmed(), "hi");
/// assert_eq!("abcde".common_suffix("abde"), "de");
/// assert_eq!("héllo".char_at(1), Some('é'));
/// assert_eq!("héllo".substring(1..3), Some("él"));
/// assert_eq!("hello world".capitalized_words(), "Hello World");
/// ```
pub trait StrExt {
    /// Returns the string without leading and trailing whitespace.
    fn trimmed(&self) -> &str;

    /// Returns `true` if the string is empty or only whitespace.
    fn is_blank(&self) -> bool;

    /// Returns `true` if the string is non-empty and every character is an
    /// ASCII digit.
    fn is_digits(&self) -> bool;

    /// Returns `true` if every character is whitespace. The empty string
    /// qualifies.
    fn is_whitespace_only(&self) -> bool;

    /// Returns a copy with the first character uppercased.
    fn uppercased_first(&self) -> String;

    /// Returns a copy with the first character lowercased.
    fn lowercased_first(&self) -> String;

    /// Returns a copy where every whitespace-separated word starts with an
    /// uppercase character followed by lowercase ones. Separators are kept.
    fn capitalized_words(&self) -> String;

    /// Returns the longest common leading run of characters.
    fn common_prefix<'a>(&'a self, other: &str) -> &'a str;

    /// Returns the longest common trailing run of characters.
    fn common_suffix<'a>(&'a self, other: &str) -> &'a str;

    /// Returns the character at index `i`, or `None` if out of range.
    fn char_at(&self, i: usize) -> Option<char>;

    /// Returns the character at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not less than the number of characters.
    fn char_at_strict(&self, i: usize) -> char;

    /// Returns the characters in `range`, or `None` if the range is inverted
    /// or reaches past the end.
    fn substring<R>(&self, range: R) -> Option<&str>
    where
        R: RangeBounds<usize>;

    /// Returns the characters in `range` with both ends clamped to the string.
    fn substring_clamped<R>(&self, range: R) -> &str
    where
        R: RangeBounds<usize>;

    /// Returns `true` if the regular expression `pattern` matches the whole
    /// string. An invalid pattern never matches.
    fn matches_pattern(&self, pattern: &str) -> bool;

    /// Returns `true` if the string looks like an e-mail address.
    fn is_valid_email(&self) -> bool;

    /// Returns the first `len` characters followed by `trailing`, or the whole
    /// string unchanged if it is not longer than `len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_core::string::ext::StrExt;
    /// assert_eq!("Hello, world".truncated(5, "..."), "Hello...");
    /// assert_eq!("Hi".truncated(5, "..."), "Hi");
    /// ```
    fn truncated(&self, len: usize, trailing: &str) -> String;

    /// Returns the characters in reverse order.
    fn reversed(&self) -> String;

    /// Returns the number of whitespace-separated words.
    fn word_count(&self) -> usize;
}

impl StrExt for str {
    #[inline]
    fn trimmed(&self) -> &str {
        self.trim()
    }

    #[inline]
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }

    #[inline]
    fn is_digits(&self) -> bool {
        !self.is_empty() && self.bytes().all(|b| b.is_ascii_digit())
    }

    #[inline]
    fn is_whitespace_only(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }

    fn uppercased_first(&self) -> String {
        map_first(self, char::to_uppercase)
    }

    fn lowercased_first(&self) -> String {
        map_first(self, char::to_lowercase)
    }

    fn capitalized_words(&self) -> String {
        let mut out = String::with_capacity(self.len());
        let mut at_word_start = true;
        for c in self.chars() {
            if c.is_whitespace() {
                at_word_start = true;
                out.push(c);
            } else if at_word_start {
                at_word_start = false;
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
        }
        out
    }

    fn common_prefix<'a>(&'a self, other: &str) -> &'a str {
        let end = self
            .char_indices()
            .zip(other.chars())
            .find(|((_, a), b)| a != b)
            .map(|((i, _), _)| i)
            .unwrap_or_else(|| {
                // One string ran out; the shorter one is the prefix
                let shared = self.chars().count().min(other.chars().count());
                byte_range(self, Span::new(0, shared)).end
            });
        &self[..end]
    }

    fn common_suffix<'a>(&'a self, other: &str) -> &'a str {
        let mut start = self.len();
        for ((i, a), b) in self.char_indices().rev().zip(other.chars().rev()) {
            if a != b {
                break;
            }
            start = i;
        }
        &self[start..]
    }

    #[inline]
    fn char_at(&self, i: usize) -> Option<char> {
        self.chars().nth(i)
    }

    fn char_at_strict(&self, i: usize) -> char {
        match self.char_at(i) {
            Some(c) => c,
            None => panic!(
                "char index {} out of range for string of {} characters",
                i,
                self.chars().count()
            ),
        }
    }

    fn substring<R>(&self, range: R) -> Option<&str>
    where
        R: RangeBounds<usize>,
    {
        let span = Span::checked_from_bounds(range, self.chars().count())?;
        Some(&self[byte_range(self, span)])
    }

    fn substring_clamped<R>(&self, range: R) -> &str
    where
        R: RangeBounds<usize>,
    {
        let span = Span::clamped_from_bounds(range, self.chars().count());
        &self[byte_range(self, span)]
    }

    #[inline]
    fn matches_pattern(&self, pattern: &str) -> bool {
        pattern::full_match(self, pattern)
    }

    #[inline]
    fn is_valid_email(&self) -> bool {
        pattern::EMAIL.is_match(self)
    }

    fn truncated(&self, len: usize, trailing: &str) -> String {
        match self.char_indices().nth(len) {
            Some((cut, _)) => {
                let mut out = String::with_capacity(cut + trailing.len());
                out.push_str(&self[..cut]);
                out.push_str(trailing);
                out
            }
            None => self.to_owned(),
        }
    }

    #[inline]
    fn reversed(&self) -> String {
        self.chars().rev().collect()
    }

    #[inline]
    fn word_count(&self) -> usize {
        self.split_whitespace().count()
    }
}

/// In-place helpers on owned strings.
pub trait StringExt {
    /// Strips leading and trailing whitespace without reallocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sugar_core::string::ext::StringExt;
    /// let mut s = String::from("\t padded  ");
    /// s.trim_in_place();
    /// assert_eq!(s, "padded");
    /// ```
    fn trim_in_place(&mut self);
}

impl StringExt for String {
    fn trim_in_place(&mut self) {
        let end = self.trim_end().len();
        self.truncate(end);
        let start = self.len() - self.trim_start().len();
        self.drain(..start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_whitespace_digits() {
        assert!("".is_blank());
        assert!(" \t\n".is_blank());
        assert!(!" a ".is_blank());

        assert!("".is_whitespace_only());
        assert!("  ".is_whitespace_only());

        assert!("0123".is_digits());
        assert!(!"".is_digits());
        assert!(!"12a".is_digits());
        assert!(!"١٢".is_digits()); // non-ASCII digits
    }

    #[test]
    fn test_first_character_case() {
        assert_eq!("rust".uppercased_first(), "Rust");
        assert_eq!("Rust".lowercased_first(), "rust");
        assert_eq!("ßtraße".uppercased_first(), "SStraße");
        assert_eq!("".uppercased_first(), "");
    }

    #[test]
    fn test_capitalized_words_keeps_separators() {
        assert_eq!("hELLO  wide\tworld".capitalized_words(), "Hello  Wide\tWorld");
        assert_eq!("".capitalized_words(), "");
    }

    #[test]
    fn test_common_prefix_and_suffix() {
        assert_eq!("interstellar".common_prefix("internet"), "inter");
        assert_eq!("abc".common_prefix("abcdef"), "abc");
        assert_eq!("abc".common_prefix("xyz"), "");
        assert_eq!("abcde".common_suffix("abde"), "de");
        assert_eq!("café".common_suffix("thé"), "é");
        assert_eq!("same".common_suffix("same"), "same");
        assert_eq!("".common_suffix("x"), "");
    }

    #[test]
    fn test_char_at() {
        let s = "añb";
        assert_eq!(s.char_at(1), Some('ñ'));
        assert_eq!(s.char_at(3), None);
        assert_eq!(s.char_at_strict(2), 'b');
    }

    #[test]
    #[should_panic(expected = "char index 3 out of range")]
    fn test_char_at_strict_panics() {
        "abc".char_at_strict(3);
    }

    #[test]
    fn test_substring_by_characters() {
        let s = "naïve café";
        assert_eq!(s.substring(2..5), Some("ïve"));
        assert_eq!(s.substring(6..), Some("café"));
        assert_eq!(s.substring(..=0), Some("n"));
        assert_eq!(s.substring(10..10), Some(""));
        assert_eq!(s.substring(8..11), None);
        assert_eq!(s.substring(4..2), None);
    }

    #[test]
    fn test_substring_clamped() {
        let s = "naïve";
        assert_eq!(s.substring_clamped(3..100), "ve");
        assert_eq!(s.substring_clamped(9..), "");
        assert_eq!(s.substring_clamped(..), "naïve");
    }

    #[test]
    fn test_patterns() {
        assert!("2025-01-31".matches_pattern(r"\d{4}-\d{2}-\d{2}"));
        assert!(!"on 2025-01-31".matches_pattern(r"\d{4}-\d{2}-\d{2}"));
        assert!(!"anything".matches_pattern("(unclosed"));

        assert!("a.b@c.io".is_valid_email());
        assert!(!"a.b@c".is_valid_email());
    }

    #[test]
    fn test_truncated_counts_characters() {
        assert_eq!("héllo".truncated(2, "…"), "hé…");
        assert_eq!("héllo".truncated(5, "…"), "héllo");
        assert_eq!("abc".truncated(0, "-"), "-");
    }

    #[test]
    fn test_reversed_and_word_count() {
        assert_eq!("añb".reversed(), "bña");
        assert_eq!("  one two\nthree ".word_count(), 3);
        assert_eq!("".word_count(), 0);
    }

    #[test]
    fn test_trim_in_place() {
        let mut s = String::from("  keep inner  space \n");
        s.trim_in_place();
        assert_eq!(s, "keep inner  space");

        let mut blank = String::from("   ");
        blank.trim_in_place();
        assert!(blank.is_empty());
    }
}
