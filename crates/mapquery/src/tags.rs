// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tag resolution: which multimap key(s) a field reads and writes.
//!
//! Precedence:
//! 1. primary tag (`#[query(key = "c,d")]`): every non-empty alias is a decode
//!    candidate, the first one is the encode key. Nothing else is consulted.
//! 2. secondary tag (`#[serde(rename = "b")]`): its first comma segment, if
//!    non-empty.
//! 3. the declared field identifier.

use crate::config::{ALIAS_SEPARATOR, PRIMARY_TAG, SECONDARY_TAG};
use crate::Multimap;
use std::fmt;

/// Raw tag annotations of one field, as written in the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tags {
    pub primary: Option<&'static str>,
    pub secondary: Option<&'static str>,
}

impl Tags {
    pub const NONE: Tags = Tags {
        primary: None,
        secondary: None,
    };

    /// Whether the field carries any explicit tag.
    pub fn is_explicit(&self) -> bool {
        self.primary.is_some_and(|p| split_aliases(p).next().is_some())
            || self.secondary.and_then(first_segment).is_some()
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(p) = self.primary {
            write!(f, "{}:{:?}", PRIMARY_TAG, p)?;
            sep = " ";
        }
        if let Some(s) = self.secondary {
            write!(f, "{}{}:{:?}", sep, SECONDARY_TAG, s)?;
        }
        Ok(())
    }
}

/// Resolved keys of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keys {
    candidates: Vec<String>,
}

impl Keys {
    /// Key written on encode.
    pub fn canonical(&self) -> &str {
        &self.candidates[0]
    }

    /// Keys accepted on decode, in precedence order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// First candidate present in `input`, with its values.
    pub fn lookup<'a>(&'a self, input: &'a Multimap) -> Option<(&'a str, &'a [String])> {
        self.candidates
            .iter()
            .find_map(|key| input.get(key).map(|values| (key.as_str(), values.as_slice())))
    }
}

/// Resolves the keys of a field named `ident` carrying `tags`.
pub fn resolve(ident: &str, tags: &Tags) -> Keys {
    if let Some(primary) = tags.primary {
        let candidates: Vec<String> = split_aliases(primary).map(str::to_owned).collect();
        if !candidates.is_empty() {
            return Keys { candidates };
        }
    }

    if let Some(segment) = tags.secondary.and_then(first_segment) {
        return Keys {
            candidates: vec![segment.to_owned()],
        };
    }

    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    Keys {
        candidates: vec![ident.to_owned()],
    }
}

fn split_aliases(tag: &str) -> impl Iterator<Item = &str> {
    tag.split(ALIAS_SEPARATOR).filter(|s| !s.is_empty())
}

fn first_segment(tag: &str) -> Option<&str> {
    tag.split(ALIAS_SEPARATOR).next().filter(|s| !s.is_empty())
}
