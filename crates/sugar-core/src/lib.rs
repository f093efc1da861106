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

//! # Sugar Core
//!
//! Small, independent extension traits for the standard library's numeric,
//! collection, optional and string types, plus thin JSON wrappers. Every
//! helper is stateless: it takes simple inputs and returns a simple output,
//! or mutates its own receiver in place.
//!
//! ## Modules
//!
//! - `num`: Sign and parity predicates, range clamping, conversions, decimal
//!   digit decomposition, exponentiation by repeated squaring, angle
//!   conversion and rounding to decimal places with a selectable rule.
//! - `math`: The half-open `Span<T>` used to clamp requested index windows
//!   against collection bounds.
//! - `collection`: Slice, `Vec` and map helpers (first/last `k`, rearrange,
//!   duplicate removal, identity-based removal, key lookup by value) and
//!   conversions between sequence-like containers.
//! - `option`: Presence predicates and default-supplying accessors.
//! - `string`: Trimming, case changes, common prefix/suffix, char-indexed
//!   slicing and regex predicates.
//! - `json`: Encode/decode wrappers around `serde_json` that surface the
//!   underlying error unchanged.
//!
//! ## Usage
//!
//! Extension traits are brought into scope through the `prelude`:
//!
//! ```rust
//! use sugar_core::prelude::*;
//!
//! assert_eq!(2u64.raised(10), 1024);
//! assert_eq!(15i32.clamped_to(0..=10), 10);
//! assert_eq!("abcde".common_suffix("abde"), "de");
//! assert_eq!([1, 2, 3, 4].last_n(2), &[3, 4]);
//! ```

pub mod collection;
pub mod json;
pub mod math;
pub mod num;
pub mod option;
pub mod string;

/// Re-exports every extension trait so a single glob import enables the
/// whole surface.
pub mod prelude {
    pub use crate::collection::convert::{
        CharSliceExt, CharsCollectExt, IntoHashSetExt, SetToVecExt,
    };
    pub use crate::collection::identity::Identity;
    pub use crate::collection::map::MapExt;
    pub use crate::collection::slice::SliceExt;
    pub use crate::collection::vec::VecExt;
    pub use crate::json::{JsonDecodeExt, JsonEncodeExt};
    pub use crate::math::span::Span;
    pub use crate::num::angle::AngleExt;
    pub use crate::num::clamp::{ClampExt, HalfOpenClampExt};
    pub use crate::num::convert::{BoolConvertExt, NumConvertExt, ParseNumExt};
    pub use crate::num::digits::DigitsExt;
    pub use crate::num::pow::{CheckedRaisedExt, RaisedExt};
    pub use crate::num::round::{RoundExt, RoundingRule};
    pub use crate::num::sign::{ParityExt, SignExt};
    pub use crate::option::{Emptiable, OptionEmptyExt, OptionExt};
    pub use crate::string::ext::{StrExt, StringExt};
}
