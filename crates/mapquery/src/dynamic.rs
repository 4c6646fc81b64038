// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic records: `serde_json::Value` objects coded without a derived type.
//!
//! Each object member is one field keyed by its member name, coded with the
//! dynamic-value rules of [`FieldValue`] for `serde_json::Value`. Useful when
//! the field set is only known at run time.
//!
//! ```
//! use serde_json::json;
//!
//! let encoded = mapquery::encode_dynamic(&json!({"q": "rust", "tags": ["a", "b"], "page": 0})).unwrap();
//! assert_eq!(encoded["tags"], ["a", "b"]);
//! assert_eq!(encoded["page"], ["0"]);
//!
//! let mut decoded = serde_json::Value::Null;
//! mapquery::decode_dynamic(&encoded, &mut decoded).unwrap();
//! assert_eq!(decoded["q"], "rust");
//! ```

use crate::error::{Error, Result};
use crate::value::FieldValue;
use crate::Multimap;
use serde_json::{Map, Value};

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encodes a JSON object member by member. `Null` encodes to an empty
/// multimap; any other non-object value is rejected.
pub fn encode_dynamic(value: &Value) -> Result<Multimap> {
    let members = match value {
        Value::Null => return Ok(Multimap::new()),
        Value::Object(members) => members,
        other => {
            return Err(Error::InvalidTarget {
                found: json_type(other),
            })
        }
    };

    let mut out = Multimap::new();
    for (key, member) in members {
        if member.is_empty_value() {
            log::trace!("[dynamic] {}: empty, omitted", key);
            continue;
        }
        let encoded = member.encode_value()?;
        if !encoded.is_empty() {
            out.insert(key.clone(), encoded);
        }
    }
    log::debug!("[dynamic] encoded {} member(s)", out.len());
    Ok(out)
}

/// Decodes every key of `input` into a member of `target`. A `Null` target
/// becomes an object; any other non-object target is rejected.
pub fn decode_dynamic(input: &Multimap, target: &mut Value) -> Result<()> {
    if target.is_null() {
        *target = Value::Object(Map::new());
    }
    let members = match target {
        Value::Object(members) => members,
        other => {
            return Err(Error::InvalidTarget {
                found: json_type(other),
            })
        }
    };

    let mut keys: Vec<&String> = input.keys().collect();
    keys.sort();
    for key in keys {
        let member = members.entry(key.clone()).or_insert(Value::Null);
        member
            .decode_value(&input[key])
            .map_err(|e| Error::field(key, e))?;
    }
    log::debug!("[dynamic] decoded {} key(s)", input.len());
    Ok(())
}
