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

//! # JSON Shorthands
//!
//! Thin wrappers over `serde_json` so any serializable value can be encoded
//! with a method call, and any owned deserializable type decoded the same way.
//! Errors are the `serde_json::Error` values produced underneath.
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use sugar_core::json::{JsonDecodeExt, JsonEncodeExt};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Berth {
//!     id: u32,
//!     name: String,
//! }
//!
//! let berth = Berth { id: 7, name: "north".into() };
//! let text = berth.to_json_string().unwrap();
//! assert_eq!(text, r#"{"id":7,"name":"north"}"#);
//! assert_eq!(Berth::from_json_str(&text).unwrap(), berth);
//! ```

use serde::{Serialize, de::DeserializeOwned};

/// Encoding helpers for every `Serialize` type.
pub trait JsonEncodeExt: Serialize {
    /// Encodes `self` as compact JSON text.
    #[inline]
    fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Encodes `self` as indented JSON text.
    #[inline]
    fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Encodes `self` as compact JSON bytes.
    #[inline]
    fn to_json_vec(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl<T> JsonEncodeExt for T where T: Serialize + ?Sized {}

/// Decoding helpers for every owned `Deserialize` type.
pub trait JsonDecodeExt: DeserializeOwned + Sized {
    /// Decodes a value from JSON text.
    #[inline]
    fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Decodes a value from JSON bytes.
    #[inline]
    fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

impl<T> JsonDecodeExt for T where T: DeserializeOwned {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    enum Shape {
        Circle { radius: f64 },
        Square(u32),
        Empty,
    }

    #[test]
    fn test_round_trip_through_text_and_bytes() {
        let shapes = vec![Shape::Circle { radius: 1.5 }, Shape::Square(4), Shape::Empty];

        let text = shapes.to_json_string().unwrap();
        assert_eq!(Vec::<Shape>::from_json_str(&text).unwrap(), shapes);

        let bytes = shapes.to_json_vec().unwrap();
        assert_eq!(Vec::<Shape>::from_json_slice(&bytes).unwrap(), shapes);
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let m = BTreeMap::from([("a", 1)]);
        assert_eq!(m.to_json_pretty().unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_encode_unsized_str() {
        assert_eq!("quote\"d".to_json_string().unwrap(), r#""quote\"d""#);
    }

    #[test]
    fn test_decode_error_is_passed_through() {
        let err = u8::from_json_str("300").unwrap_err();
        assert!(err.is_data());

        let err = Shape::from_json_str("{").unwrap_err();
        assert!(err.is_eof());
    }

    quickcheck! {
        fn prop_decode_inverts_encode(values: Vec<(i64, String, bool)>) -> bool {
            let text = values.to_json_string().unwrap();
            Vec::<(i64, String, bool)>::from_json_str(&text).unwrap() == values
        }

        fn prop_bytes_match_text(values: BTreeMap<String, Option<u32>>) -> bool {
            values.to_json_vec().unwrap() == values.to_json_string().unwrap().into_bytes()
        }
    }
}
