// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! mapquery configuration: single source of truth for coding constants.
//!
//! Everything here is a compile-time constant. There is no runtime
//! configuration and no global mutable state: every encode/decode call is
//! fully determined by the record type and the input.

/// Helper attribute carrying the primary tag (`#[query(key = "a,b")]`).
///
/// Must match the attribute name registered by `mapquery-codegen`.
pub const PRIMARY_TAG: &str = "query";

/// Helper attribute carrying the secondary tag (`#[serde(rename = "a")]`).
pub const SECONDARY_TAG: &str = "serde";

/// Separator between aliases inside a tag.
pub const ALIAS_SEPARATOR: char = ',';

/// Nanoseconds per second, used when splitting unix-seconds literals.
pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Fractional digits kept from a unix-seconds literal (nanosecond precision).
pub const FRACTION_DIGITS: usize = 9;

/// Maximum embedding depth followed by descriptor introspection
/// ([`RecordDescriptor::canonical_keys`](crate::RecordDescriptor::canonical_keys)).
///
/// Encode and decode are bounded by the value itself and ignore this limit;
/// introspection works on types alone and needs a bound for self-embedding
/// records such as `struct Node { #[query(flatten)] next: Option<Box<Node>> }`.
pub const MAX_EMBED_DEPTH: usize = 32;
