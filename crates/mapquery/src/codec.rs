// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Public entry points for typed records.

use crate::error::Result;
use crate::record::{Record, RecordMut, RecordRef};
use crate::Multimap;

/// Encodes a record, or a chain of `Option` / `Box` / `&` / `&mut` ending in
/// one, into a fresh multimap.
///
/// An absent level anywhere in the chain yields an empty multimap.
///
/// ```
/// use mapquery::Record;
///
/// #[derive(Default, Record)]
/// struct Query {
///     #[query(key = "q")]
///     pub text: String,
///     pub page: u32,
/// }
///
/// let q = Query { text: "rust".into(), page: 0 };
/// let encoded = mapquery::encode(&q).unwrap();
/// assert_eq!(encoded["q"], ["rust"]);
/// assert!(!encoded.contains_key("page"));
/// assert!(mapquery::encode(&None::<Query>).unwrap().is_empty());
/// ```
pub fn encode<T: RecordRef + ?Sized>(value: &T) -> Result<Multimap> {
    let mut out = Multimap::new();
    match value.reach() {
        Some(record) => {
            record.encode_fields(&mut out)?;
            log::debug!(
                "[codec] encoded {} into {} key(s)",
                std::any::type_name::<T::Target>(),
                out.len()
            );
        }
        None => log::debug!("[codec] absent record, nothing to encode"),
    }
    Ok(out)
}

/// Decodes `input` into a record, or a chain of `Option` / `Box` / `&mut`
/// ending in one. Absent levels are allocated with their default value.
///
/// Fields whose keys are absent from `input` keep their current value. On
/// error the target may be partially updated.
pub fn decode<T: RecordMut + ?Sized>(input: &Multimap, target: &mut T) -> Result<()> {
    log::debug!("[codec] decoding {} key(s)", input.len());
    target.reach_mut().decode_fields(input)
}
