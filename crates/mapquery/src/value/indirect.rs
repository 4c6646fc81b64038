// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Pointer kinds: `Option<T>` (nullable) and `Box<T>` (always allocated).
//!
//! Each impl unwraps exactly one level; chains such as `Option<Box<T>>` are
//! handled one level per impl.

use super::FieldValue;
use crate::error::Result;
use crate::kind::Kind;

impl<T: FieldValue + Default> FieldValue for Option<T> {
    fn kind() -> Kind {
        Kind::indirect(T::kind())
    }

    fn is_empty_value(&self) -> bool {
        self.is_none()
    }

    fn encode_value(&self) -> Result<Vec<String>> {
        match self {
            Some(inner) => inner.encode_value(),
            None => Ok(Vec::new()),
        }
    }

    fn decode_value(&mut self, input: &[String]) -> Result<()> {
        self.get_or_insert_with(T::default).decode_value(input)
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    fn kind() -> Kind {
        Kind::indirect(T::kind())
    }

    /// A box is a non-null pointer, so it is never empty, whatever it holds.
    fn is_empty_value(&self) -> bool {
        false
    }

    fn encode_value(&self) -> Result<Vec<String>> {
        (**self).encode_value()
    }

    fn decode_value(&mut self, input: &[String]) -> Result<()> {
        (**self).decode_value(input)
    }
}
