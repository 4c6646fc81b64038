// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::float_cmp)] // Exact round trip is the property under test

//! Randomized round trips: `decode(encode(x))` restores every non-empty field.

use mapquery::{Complex64, Json, Multimap, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ITERATIONS: usize = 256;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Part {
    name: String,
    id: i64,
    parent_id: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Paging {
    pub page: u32,
    #[query(key = "size,per_page")]
    pub size: Option<u16>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Sample {
    pub names: [String; 2],
    #[serde(rename = "id")]
    pub ident: i64,
    pub ratio: f64,
    pub small: f32,
    pub flag: bool,
    pub tiny: i8,
    pub big: u128,
    pub wave: Complex64,
    pub aliases: Vec<String>,
    pub scores: Vec<u16>,
    pub maybe: Option<Box<i32>>,
    pub parts: Vec<Json<Part>>,
    pub labels: BTreeMap<String, u8>,
    #[query(flatten)]
    pub paging: Option<Paging>,
}

fn word(rng: &mut fastrand::Rng) -> String {
    let len = rng.usize(1..12);
    (0..len).map(|_| rng.alphanumeric()).collect()
}

/// Strings whose bare text is itself valid JSON.
fn json_looking(rng: &mut fastrand::Rng) -> String {
    match rng.u8(0..5) {
        0 => rng.i32(..).to_string(),
        1 => rng.bool().to_string(),
        2 => "null".to_string(),
        3 => format!("[{}]", rng.u8(..)),
        _ => format!("\"{}\"", word(rng)),
    }
}

fn maybe_word(rng: &mut fastrand::Rng) -> String {
    if rng.bool() {
        word(rng)
    } else {
        String::new()
    }
}

fn random_sample(rng: &mut fastrand::Rng) -> Sample {
    Sample {
        names: [maybe_word(rng), maybe_word(rng)],
        ident: rng.i64(..),
        ratio: rng.f64() * 1e6 - 5e5,
        small: rng.f32(),
        flag: rng.bool(),
        tiny: rng.i8(..),
        big: rng.u128(..),
        wave: Complex64::new(rng.f64() - 0.5, rng.f64() * 1e-9),
        aliases: (0..rng.usize(0..4)).map(|_| word(rng)).collect(),
        scores: (0..rng.usize(0..4)).map(|_| rng.u16(..)).collect(),
        maybe: rng.bool().then(|| Box::new(rng.i32(..))),
        parts: (0..rng.usize(0..3))
            .map(|_| {
                Json(Part {
                    name: word(rng),
                    id: rng.i64(..),
                    parent_id: rng.bool().then(|| rng.i64(..)),
                })
            })
            .collect(),
        labels: (0..rng.usize(0..3)).map(|_| (word(rng), rng.u8(..))).collect(),
        paging: rng.bool().then(|| Paging {
            page: rng.u32(1..),
            size: Some(rng.u16(1..)),
        }),
    }
}

#[test]
fn test_random_records_roundtrip() {
    let mut rng = fastrand::Rng::with_seed(0x6d61_7071);

    for _ in 0..ITERATIONS {
        let original = random_sample(&mut rng);
        let encoded = mapquery::encode(&original).unwrap();

        let mut decoded: Option<Box<Sample>> = None;
        mapquery::decode(&encoded, &mut decoded).unwrap();
        let decoded = *decoded.unwrap();

        // a fixed array is always written, so its empty slots come back empty
        assert_eq!(decoded.names, original.names);
        assert_eq!(decoded.ident, original.ident);
        assert_eq!(decoded.ratio, original.ratio);
        assert_eq!(decoded.small, original.small);
        assert_eq!(decoded.flag, original.flag);
        assert_eq!(decoded.tiny, original.tiny);
        assert_eq!(decoded.big, original.big);
        assert_eq!(decoded.wave, original.wave);
        assert_eq!(decoded.aliases, original.aliases);
        assert_eq!(decoded.scores, original.scores);
        assert_eq!(decoded.maybe, original.maybe);
        assert_eq!(decoded.parts, original.parts);
        assert_eq!(decoded.labels, original.labels);
        // decode allocates the embedded record even when no member was written
        assert_eq!(decoded.paging.unwrap_or_default(), original.paging.unwrap_or_default());
    }
}

#[test]
fn test_reencoding_is_stable() {
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..ITERATIONS {
        let original = random_sample(&mut rng);
        let encoded = mapquery::encode(&original).unwrap();

        let mut decoded = Sample::default();
        mapquery::decode(&encoded, &mut decoded).unwrap();
        assert_eq!(mapquery::encode(&decoded).unwrap(), encoded);
    }
}

#[test]
fn test_empty_fields_stay_default() {
    let original = Sample {
        ident: 5,
        ..Sample::default()
    };
    let encoded = mapquery::encode(&original).unwrap();

    let mut keys: Vec<_> = encoded.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["id", "names"]);

    let mut decoded = Sample {
        flag: true,
        ..Sample::default()
    };
    mapquery::decode(&encoded, &mut decoded).unwrap();
    assert!(decoded.flag, "omitted fields are not reset");
    assert_eq!(decoded.ident, 5);
}

#[test]
fn test_dynamic_roundtrip() {
    let mut rng = fastrand::Rng::with_seed(7);

    for _ in 0..ITERATIONS {
        let mut object = serde_json::Map::new();
        for _ in 0..rng.usize(0..6) {
            let member = match rng.u8(0..8) {
                0 => serde_json::json!(rng.i64(..)),
                1 => serde_json::json!(rng.bool()),
                2 => serde_json::json!({ "k": word(&mut rng) }),
                3 => serde_json::json!([rng.u32(..), rng.u32(..)]),
                4 => serde_json::json!(word(&mut rng)),
                5 => serde_json::json!(json_looking(&mut rng)),
                6 => serde_json::json!([json_looking(&mut rng)]),
                _ => serde_json::json!([null, word(&mut rng), rng.bool()]),
            };
            object.insert(word(&mut rng), member);
        }
        let value = serde_json::Value::Object(object);

        let encoded: Multimap = mapquery::encode_dynamic(&value).unwrap();
        let mut decoded = serde_json::Value::Null;
        mapquery::decode_dynamic(&encoded, &mut decoded).unwrap();
        assert_eq!(decoded, value);
    }
}

#[derive(Debug, Default, PartialEq, Record)]
struct Gaps {
    pub values: Vec<Option<u8>>,
    pub fixed: [Option<String>; 2],
}

#[test]
fn test_absent_sequence_element_is_not_encoded() {
    let full = Gaps {
        values: vec![Some(1), Some(2)],
        fixed: [Some("a".to_string()), Some(String::new())],
    };
    let encoded = mapquery::encode(&full).unwrap();
    let mut decoded = Gaps::default();
    mapquery::decode(&encoded, &mut decoded).unwrap();
    assert_eq!(decoded, full);

    let gap = Gaps {
        values: vec![Some(1), None],
        ..Gaps::default()
    };
    let err = mapquery::encode(&gap).unwrap_err();
    assert!(matches!(err, mapquery::Error::UnsupportedKind(_)));
}
