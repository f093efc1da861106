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

use thiserror::Error;

/// Errors returned by the fallible UI helpers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UiError {
    /// A hex color had a digit count other than 3, 4, 6 or 8.
    #[error("hex color must have 3, 4, 6 or 8 digits, got {0}")]
    InvalidHexLength(usize),

    /// A hex color contained a character that is not a hex digit.
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidHexDigit { digit: char, position: usize },

    /// No cell type was registered under the identifier.
    #[error("no cell registered for reuse identifier `{0}`")]
    UnregisteredReuseIdentifier(&'static str),

    /// The identifier is registered for a different cell type.
    #[error("reuse identifier `{identifier}` is registered for a different cell type")]
    ReuseTypeMismatch { identifier: &'static str },

    /// A stored attribute run ends before it starts.
    #[error("attribute run {start}..{end} is inverted")]
    InvertedAttributeRun { start: usize, end: usize },

    /// A stored attribute run extends past the end of its text.
    #[error("attribute run {start}..{end} does not fit text of {len} characters")]
    AttributeRunOutOfBounds { start: usize, end: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            UiError::InvalidHexLength(5).to_string(),
            "hex color must have 3, 4, 6 or 8 digits, got 5"
        );
        assert_eq!(
            UiError::InvalidHexDigit {
                digit: 'g',
                position: 2
            }
            .to_string(),
            "invalid hex digit 'g' at position 2"
        );
        assert_eq!(
            UiError::UnregisteredReuseIdentifier("cell").to_string(),
            "no cell registered for reuse identifier `cell`"
        );
        assert_eq!(
            UiError::AttributeRunOutOfBounds {
                start: 0,
                end: 3,
                len: 2
            }
            .to_string(),
            "attribute run 0..3 does not fit text of 2 characters"
        );
        assert_eq!(
            UiError::InvertedAttributeRun { start: 3, end: 1 }.to_string(),
            "attribute run 3..1 is inverted"
        );
    }
}
