// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # mapquery Sample: Round Trip
//!
//! Encodes a record into a string multimap and decodes it back into an
//! absent (`None`) target.
//!
//! ## What You'll Learn
//!
//! - Deriving `Record` and choosing field keys
//! - Fixed and growable sequences, nested records as JSON
//! - Which fields are skipped (not `pub`, or empty)
//! - Decoding through `Option<Box<T>>`, allocated on demand
//!
//! ## Running the Sample
//!
//! ```bash
//! RUST_LOG=trace cargo run --bin roundtrip
//! ```

use mapquery::{Json, Record};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct CoolPart {
    name: String,
    id: i64,
    parent_id: Option<i64>,
}

#[derive(Debug, Default, Record)]
struct CoolRoot {
    pub names: [String; 2],
    #[allow(dead_code)]
    secret: String,
    #[serde(rename = "id")]
    pub ident: i64,
    #[query(key = "parts,cool_parts")]
    pub cool_parts: Vec<Json<CoolPart>>,
    pub aliases: Vec<String>,
    pub is_cool: bool,
}

fn main() -> mapquery::Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    let cr = CoolRoot {
        names: ["Mr".into(), "Cool".into()],
        secret: "hush".into(),
        ident: 32,
        cool_parts: vec![
            Json(CoolPart {
                name: "Very cool".into(),
                id: 12,
                parent_id: None,
            }),
            Json(CoolPart {
                name: "Not so cool".into(),
                id: 45,
                parent_id: None,
            }),
        ],
        aliases: vec!["Coolus Maximus".into(), "Cool Dude".into()],
        is_cool: true,
    };
    log::info!("Original object: {:?}", cr);

    // Encoding through a reference chain is the same as encoding the record.
    let parameters = mapquery::encode(&&cr)?;
    let mut keys: Vec<_> = parameters.iter().collect();
    keys.sort();
    log::info!("Parameters: {:?}", keys);

    let mut cr2: Option<Box<CoolRoot>> = None;
    mapquery::decode(&parameters, &mut cr2)?;
    log::info!("Decoded object: {:?}", cr2);

    log::info!("Keys: {:?}", CoolRoot::descriptor().canonical_keys());
    Ok(())
}
