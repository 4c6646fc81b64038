// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Value coding: typed field values to and from multimap strings.
//!
//! Each supported Rust type implements [`FieldValue`] once, for exactly one
//! [`Kind`]. The set of impls is the closed set of capability kinds; a field
//! whose type has no impl is rejected when `#[derive(Record)]` expands.
//!
//! | Kind | Types |
//! |------|-------|
//! | text | `String` |
//! | boolean | `bool` |
//! | signed / unsigned integer | `i8`..`i128`, `isize`, `u8`..`u128`, `usize` |
//! | floating point | `f32`, `f64` |
//! | complex number | [`Complex32`], [`Complex64`] |
//! | fixed sequence | `[T; N]` |
//! | growable sequence | `Vec<T>` |
//! | pointer-or-dynamic | `Option<T>`, `Box<T>`, `serde_json::Value` |
//! | composite | [`Json<T>`], `HashMap`, `BTreeMap`, `chrono::DateTime` |
//! | unrepresentable | `PhantomData<T>`, `mpsc` channel ends |

mod complex;
mod composite;
mod indirect;
mod scalar;
mod sequence;
#[cfg(feature = "timestamps")]
mod timestamp;
mod unrepresentable;

pub use complex::{Complex, Complex32, Complex64, ComplexParseError};
pub use composite::Json;

use crate::error::Result;
use crate::kind::Kind;

/// A field value that can be coded to and from multimap strings.
pub trait FieldValue {
    /// Capability kind of this type.
    fn kind() -> Kind;

    /// Whether the value is empty and must be omitted on encode.
    fn is_empty_value(&self) -> bool;

    /// Renders the value. Sequences yield one string per element, scalars
    /// exactly one, unrepresentable values none.
    fn encode_value(&self) -> Result<Vec<String>>;

    /// Populates the value from the strings found under the field's key.
    fn decode_value(&mut self, input: &[String]) -> Result<()>;
}

/// First input string: the only one a single-valued kind looks at.
fn first(input: &[String]) -> Option<&str> {
    input.first().map(String::as_str)
}
