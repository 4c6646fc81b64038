// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fixed (`[T; N]`) and growable (`Vec<T>`) sequences: one string per element.

use super::FieldValue;
use crate::error::{Error, Result};
use crate::kind::Kind;

/// Elements must code to exactly one string each.
fn check_element<T: FieldValue>() -> Result<()> {
    let kind = T::kind();
    if kind.is_single() {
        Ok(())
    } else {
        Err(Error::UnsupportedKind(kind))
    }
}

/// An element encoding to no string (an absent `Option`, a `Null`) has no
/// literal that decodes back to it and is rejected.
fn encode_elements<'a, T, I>(elements: I) -> Result<Vec<String>>
where
    T: FieldValue + 'a,
    I: IntoIterator<Item = &'a T>,
{
    check_element::<T>()?;
    elements
        .into_iter()
        .map(|element| {
            let mut encoded = element.encode_value()?;
            match encoded.len() {
                1 => Ok(encoded.swap_remove(0)),
                _ => Err(Error::UnsupportedKind(T::kind())),
            }
        })
        .collect()
}

fn decode_element<T: FieldValue>(slot: &mut T, literal: &String) -> Result<()> {
    slot.decode_value(std::slice::from_ref(literal))
}

impl<T: FieldValue + Default> FieldValue for Vec<T> {
    fn kind() -> Kind {
        Kind::growable(T::kind())
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn encode_value(&self) -> Result<Vec<String>> {
        encode_elements(self)
    }

    fn decode_value(&mut self, input: &[String]) -> Result<()> {
        check_element::<T>()?;
        let mut elements = Vec::with_capacity(input.len());
        for literal in input {
            let mut element = T::default();
            decode_element(&mut element, literal)?;
            elements.push(element);
        }
        *self = elements;
        Ok(())
    }
}

impl<T: FieldValue + Default, const N: usize> FieldValue for [T; N] {
    fn kind() -> Kind {
        Kind::fixed(N, T::kind())
    }

    fn is_empty_value(&self) -> bool {
        N == 0
    }

    fn encode_value(&self) -> Result<Vec<String>> {
        encode_elements(self)
    }

    /// Inputs beyond `N` are discarded; slots beyond the input count are
    /// reset to their default.
    fn decode_value(&mut self, input: &[String]) -> Result<()> {
        check_element::<T>()?;
        for slot in self.iter_mut() {
            *slot = T::default();
        }
        for (slot, literal) in self.iter_mut().zip(input) {
            decode_element(slot, literal)?;
        }
        Ok(())
    }
}
