// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Composite values coded as one JSON document, and dynamic JSON values.

use super::{first, FieldValue};
use crate::error::{Error, Result};
use crate::kind::{Composite, Kind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::ops::{Deref, DerefMut};

/// Codes a nested record (or any serde type) as a single JSON document.
///
/// ```
/// use mapquery::{Json, Record};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
/// struct Inner { b: String }
///
/// #[derive(Debug, Default, Record)]
/// struct Outer { pub a: Json<Inner> }
///
/// let out = Outer { a: Json(Inner { b: "foobar".into() }) };
/// let encoded = mapquery::encode(&out).unwrap();
/// assert_eq!(encoded["a"], [r#"{"b":"foobar"}"#]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Json<T> {
    fn from(value: T) -> Self {
        Json(value)
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<String>> {
    Ok(vec![serde_json::to_string(value)?])
}

fn decode_json<T: DeserializeOwned>(slot: &mut T, input: &[String]) -> Result<()> {
    if let Some(s) = first(input) {
        *slot = serde_json::from_str(s)?;
    }
    Ok(())
}

impl<T: Serialize + DeserializeOwned> FieldValue for Json<T> {
    fn kind() -> Kind {
        Kind::Composite(Composite::Structured)
    }

    /// Nested records are never empty.
    fn is_empty_value(&self) -> bool {
        false
    }

    fn encode_value(&self) -> Result<Vec<String>> {
        encode_json(&self.0)
    }

    fn decode_value(&mut self, input: &[String]) -> Result<()> {
        decode_json(&mut self.0, input)
    }
}

impl<K, V, S> FieldValue for HashMap<K, V, S>
where
    K: Serialize + DeserializeOwned + Eq + Hash,
    V: Serialize + DeserializeOwned,
    S: BuildHasher + Default,
{
    fn kind() -> Kind {
        Kind::Composite(Composite::Structured)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn encode_value(&self) -> Result<Vec<String>> {
        encode_json(self)
    }

    fn decode_value(&mut self, input: &[String]) -> Result<()> {
        decode_json(self, input)
    }
}

impl<K, V> FieldValue for BTreeMap<K, V>
where
    K: Serialize + DeserializeOwned + Ord,
    V: Serialize + DeserializeOwned,
{
    fn kind() -> Kind {
        Kind::Composite(Composite::Structured)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn encode_value(&self) -> Result<Vec<String>> {
        encode_json(self)
    }

    fn decode_value(&mut self, input: &[String]) -> Result<()> {
        decode_json(self, input)
    }
}

/// Literal of one dynamic element. Nested arrays have no single-string form.
///
/// A string stays bare unless its text would itself parse as JSON (`"42"`,
/// `"true"`, `"null"`), in which case it is quoted so it decodes as a string.
fn element_literal(value: &serde_json::Value) -> Result<String> {
    use serde_json::Value;

    match value {
        Value::String(s) if serde_json::from_str::<Value>(s).is_err() => Ok(s.clone()),
        Value::Array(_) => Err(Error::UnsupportedKind(Kind::growable(Kind::dynamic()))),
        other => Ok(other.to_string()),
    }
}

/// A literal is taken as JSON when it parses, as a plain string otherwise.
fn parse_literal(literal: &str) -> serde_json::Value {
    serde_json::from_str(literal).unwrap_or_else(|_| serde_json::Value::String(literal.to_owned()))
}

/// Dynamic value: its kind is whatever the current JSON variant holds.
impl FieldValue for serde_json::Value {
    fn kind() -> Kind {
        Kind::dynamic()
    }

    fn is_empty_value(&self) -> bool {
        self.is_null()
    }

    fn encode_value(&self) -> Result<Vec<String>> {
        match self {
            serde_json::Value::Null => Ok(Vec::new()),
            serde_json::Value::Array(items) => {
                let literals = items.iter().map(element_literal).collect::<Result<Vec<_>>>()?;
                // Fewer than two literals would not decode back to an array.
                if literals.len() < 2 {
                    Ok(vec![self.to_string()])
                } else {
                    Ok(literals)
                }
            }
            other => Ok(vec![element_literal(other)?]),
        }
    }

    fn decode_value(&mut self, input: &[String]) -> Result<()> {
        match input {
            [] => {}
            [single] => *self = parse_literal(single),
            many => {
                *self = serde_json::Value::Array(many.iter().map(|s| parse_literal(s)).collect());
            }
        }
        Ok(())
    }
}
