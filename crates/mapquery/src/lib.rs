// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # mapquery - typed records to and from string multimaps
//!
//! Bidirectional codec between Rust structs and `HashMap<String, Vec<String>>`,
//! the shape of URL query strings and HTML form submissions.
//!
//! ## Quick Start
//!
//! ```rust
//! use mapquery::{Multimap, Record, Result};
//!
//! #[derive(Debug, Default, PartialEq, Record)]
//! struct Search {
//!     #[query(key = "q,query")]
//!     pub text: String,
//!     pub tags: Vec<String>,
//!     #[serde(rename = "n")]
//!     pub limit: Option<u32>,
//!     cursor: u64, // not `pub`: never coded
//! }
//!
//! fn main() -> Result<()> {
//!     let search = Search { text: "rust".into(), tags: vec!["a".into(), "b".into()], ..Default::default() };
//!     let encoded: Multimap = mapquery::encode(&search)?;
//!     assert_eq!(encoded["q"], ["rust"]);
//!     assert_eq!(encoded["tags"], ["a", "b"]);
//!     assert!(!encoded.contains_key("n"));
//!
//!     let input = Multimap::from([
//!         ("query".to_string(), vec!["wasm".to_string()]),
//!         ("n".to_string(), vec!["20".to_string()]),
//!     ]);
//!     let mut decoded: Option<Box<Search>> = None;
//!     mapquery::decode(&input, &mut decoded)?;
//!     let decoded = decoded.unwrap_or_default();
//!     assert_eq!(decoded.text, "wasm");
//!     assert_eq!(decoded.limit, Some(20));
//!     Ok(())
//! }
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Record`] | Derived for structs; walks exported fields |
//! | [`RecordRef`] / [`RecordMut`] | Pointer chains leading to a record |
//! | [`FieldValue`] | Coder of one field type (closed set of impls) |
//! | [`RecordDescriptor`] | Derived schema: keys and kinds of every field |
//! | [`Error`] | Every failure of encode and decode |
//!
//! ## Field keys
//!
//! `#[query(key = "a,b")]` wins over `#[serde(rename = "c")]`, which wins over
//! the field name. Encode writes the first alias; decode accepts any of them,
//! the first one present winning. `#[query(flatten)]` merges a nested
//! record's fields into the container's namespace.
//!
//! ## Features
//!
//! - `timestamps` (default): `chrono::DateTime<Utc>` and
//!   `DateTime<FixedOffset>` fields, coded as RFC3339.

// Allow the derive macro to work inside this crate's tests
extern crate self as mapquery;

/// Public entry points `encode` / `decode`.
mod codec;
/// Coding constants.
pub mod config;
/// Derived record and field descriptors.
pub mod descriptor;
/// Records as `serde_json::Value` objects.
pub mod dynamic;
/// Error type and `Result` alias.
pub mod error;
/// Capability kinds.
pub mod kind;
/// `Record`, `RecordRef` and `RecordMut` traits.
pub mod record;
/// Field key resolution from tags.
pub mod tags;
/// Per-kind value coders.
pub mod value;
/// Per-field walking used by the derive expansion.
#[doc(hidden)]
pub mod walker;

use std::collections::HashMap;

/// String key to ordered sequence of strings.
pub type Multimap = HashMap<String, Vec<String>>;

pub use codec::{decode, encode};
pub use descriptor::{FieldDescriptor, FieldShape, RecordDescriptor};
pub use dynamic::{decode_dynamic, encode_dynamic};
pub use error::{Error, Result};
pub use kind::{Composite, Kind};
pub use record::{Record, RecordMut, RecordRef};
pub use tags::{Keys, Tags};
pub use value::{Complex, Complex32, Complex64, ComplexParseError, FieldValue, Json};

// Derive macro (for #[derive(mapquery::Record)])
pub use mapquery_codegen::Record;
