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

//! Regular expression support for the string helpers.
//!
//! Patterns handed to [`full_match`] are anchored at both ends, so a pattern
//! must describe the *whole* input, not merely occur somewhere inside it.

use once_cell::sync::Lazy;
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$";

/// Shared e-mail address validator, compiled on first use.
pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("e-mail pattern must compile"));

/// Compiles `pattern` anchored to the whole input.
///
/// Returns `None` for a pattern that does not compile; the failure is logged
/// at debug level.
pub fn compile_anchored(pattern: &str) -> Option<Regex> {
    match Regex::new(&format!("^(?:{pattern})$")) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::debug!(pattern, error = %err, "invalid pattern");
            None
        }
    }
}

/// Returns `true` if `pattern` compiles and matches all of `input`.
///
/// # Examples
///
/// ```rust
/// # use sugar_core::string::pattern::full_match;
/// assert!(full_match("abc123", "[a-z]+[0-9]+"));
/// assert!(!full_match("abc123!", "[a-z]+[0-9]+"));
/// assert!(!full_match("abc", "("));
/// ```
pub fn full_match(input: &str, pattern: &str) -> bool {
    compile_anchored(pattern).is_some_and(|re| re.is_match(input))
}
