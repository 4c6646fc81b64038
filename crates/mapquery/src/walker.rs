// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-field walking, called from `#[derive(Record)]` expansions.
//!
//! Generated `encode_fields` / `decode_fields` bodies are a sequence of calls
//! into this module, one per exported field, in declaration order. Internal
//! fields produce no call at all.

use crate::descriptor::FieldDescriptor;
use crate::error::{Error, Result};
use crate::record::{Record, RecordMut, RecordRef};
use crate::value::FieldValue;
use crate::Multimap;

/// Encodes one leaf field under its canonical key.
///
/// Empty values, and values encoding to no strings, are omitted. A later field
/// with the same canonical key overwrites an earlier one.
pub fn encode_leaf<V: FieldValue>(
    field: &FieldDescriptor,
    value: &V,
    out: &mut Multimap,
) -> Result<()> {
    let key = field.keys().canonical();
    if value.is_empty_value() {
        log::trace!("[walker] {}: empty, omitted", key);
        return Ok(());
    }

    let encoded = value.encode_value()?;
    if encoded.is_empty() {
        log::trace!("[walker] {}: no strings, omitted", key);
        return Ok(());
    }

    log::trace!("[walker] {} <- {} value(s)", key, encoded.len());
    out.insert(key.to_owned(), encoded);
    Ok(())
}

/// Decodes one leaf field from the first candidate key present in `input`.
///
/// Errors are annotated with the matched key.
pub fn decode_leaf<V: FieldValue>(
    field: &FieldDescriptor,
    slot: &mut V,
    input: &Multimap,
) -> Result<()> {
    let Some((key, values)) = field.keys().lookup(input) else {
        log::trace!("[walker] {}: no matching key", field.ident());
        return Ok(());
    };

    log::trace!("[walker] {} -> {}", key, field.ident());
    slot.decode_value(values).map_err(|e| Error::field(key, e))
}

/// Walks an embedded record into the container's namespace.
///
/// The whole subtree is skipped when some level of the pointer chain is absent.
pub fn encode_embedded<E: RecordRef>(
    field: &FieldDescriptor,
    value: &E,
    out: &mut Multimap,
) -> Result<()> {
    match value.reach() {
        Some(record) => record.encode_fields(out),
        None => {
            log::trace!("[walker] {}: absent embedded record, skipped", field.ident());
            Ok(())
        }
    }
}

/// Decodes an embedded record from the container's namespace, allocating
/// absent levels first.
pub fn decode_embedded<E: RecordMut>(
    field: &FieldDescriptor,
    slot: &mut E,
    input: &Multimap,
) -> Result<()> {
    log::trace!("[walker] {}: flattening", field.ident());
    slot.reach_mut().decode_fields(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::RecordDescriptor;
    use crate::kind::Kind;
    use crate::tags::Tags;

    fn field(primary: Option<&'static str>) -> FieldDescriptor {
        FieldDescriptor::leaf(
            "value",
            Tags {
                primary,
                secondary: None,
            },
            Kind::SignedInteger { bits: 32 },
        )
    }

    #[test]
    fn test_encode_leaf_omits_empty() {
        let mut out = Multimap::new();
        encode_leaf(&field(None), &0i32, &mut out).unwrap();
        encode_leaf(&field(None), &None::<i32>, &mut out).unwrap();
        assert!(out.is_empty());

        encode_leaf(&field(None), &-4i32, &mut out).unwrap();
        assert_eq!(out["value"], ["-4"]);
    }

    #[test]
    fn test_decode_leaf_first_alias_wins() {
        let input = Multimap::from([
            ("b".to_string(), vec!["2".to_string()]),
            ("a".to_string(), vec!["1".to_string()]),
        ]);
        let mut slot = 0i32;
        decode_leaf(&field(Some("a,b")), &mut slot, &input).unwrap();
        assert_eq!(slot, 1);

        decode_leaf(&field(Some("c")), &mut slot, &input).unwrap();
        assert_eq!(slot, 1, "missing key leaves the slot untouched");
    }

    #[derive(Debug, Default, PartialEq)]
    struct Inner {
        value: i32,
    }

    impl Record for Inner {
        fn descriptor() -> RecordDescriptor {
            RecordDescriptor::new("Inner", vec![field(None)])
        }

        fn encode_fields(&self, out: &mut Multimap) -> Result<()> {
            encode_leaf(&field(None), &self.value, out)
        }

        fn decode_fields(&mut self, input: &Multimap) -> Result<()> {
            decode_leaf(&field(None), &mut self.value, input)
        }
    }

    impl RecordRef for Inner {
        type Target = Self;

        fn reach(&self) -> Option<&Self> {
            Some(self)
        }
    }

    impl RecordMut for Inner {
        fn reach_mut(&mut self) -> &mut Self {
            self
        }
    }

    #[test]
    fn test_embedded_walks_into_container_namespace() {
        let embedded = FieldDescriptor::embedded("inner", Tags::NONE, Inner::descriptor, None);

        let mut out = Multimap::new();
        encode_embedded(&embedded, &None::<Box<Inner>>, &mut out).unwrap();
        assert!(out.is_empty());

        encode_embedded(&embedded, &Some(Box::new(Inner { value: 7 })), &mut out).unwrap();
        assert_eq!(out["value"], ["7"]);

        let mut slot: Option<Box<Inner>> = None;
        decode_embedded(&embedded, &mut slot, &out).unwrap();
        assert_eq!(slot, Some(Box::new(Inner { value: 7 })));
    }

    #[test]
    fn test_decode_leaf_annotates_errors() {
        let input = Multimap::from([("b".to_string(), vec!["nope".to_string()])]);
        let mut slot = 0i32;
        let err = decode_leaf(&field(Some("a,b")), &mut slot, &input).unwrap_err();
        assert_eq!(err.key(), Some("b"));
        assert!(matches!(err.root(), Error::Parse { .. }));
    }
}
