// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record descriptors: the derived shape of a record type.
//!
//! `#[derive(Record)]` emits a [`RecordDescriptor`] builder for each record
//! type. Descriptors are plain immutable values. Non-generic records keep
//! theirs in a write-once static; generic records rebuild it on each call.

use crate::config::MAX_EMBED_DEPTH;
use crate::kind::Kind;
use crate::tags::{self, Keys, Tags};

/// How a field takes part in coding.
#[derive(Debug, Clone)]
pub enum FieldShape {
    /// Not `pub`: never read or written.
    Internal,
    /// Ordinary field coded by its [`FieldValue`](crate::FieldValue) impl.
    Leaf(Kind),
    /// `#[query(flatten)]` field whose members join the container's namespace.
    Embedded {
        /// Descriptor of the record at the end of the pointer chain. Lazy, so
        /// that self-embedding records stay finite.
        record: fn() -> RecordDescriptor,
        /// Set when the field carries an explicit tag and is also coded as a leaf.
        leaf: Option<Kind>,
    },
}

/// Embedded shapes compare by their leaf kind only; function addresses are
/// not stable across codegen units.
impl PartialEq for FieldShape {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Internal, Self::Internal) => true,
            (Self::Leaf(a), Self::Leaf(b)) => a == b,
            (Self::Embedded { leaf: a, .. }, Self::Embedded { leaf: b, .. }) => a == b,
            _ => false,
        }
    }
}

/// Derived descriptor of one record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    ident: &'static str,
    tags: Tags,
    keys: Keys,
    shape: FieldShape,
}

impl FieldDescriptor {
    pub fn new(ident: &'static str, tags: Tags, shape: FieldShape) -> Self {
        Self {
            ident,
            keys: tags::resolve(ident, &tags),
            tags,
            shape,
        }
    }

    pub fn leaf(ident: &'static str, tags: Tags, kind: Kind) -> Self {
        Self::new(ident, tags, FieldShape::Leaf(kind))
    }

    pub fn internal(ident: &'static str, tags: Tags) -> Self {
        Self::new(ident, tags, FieldShape::Internal)
    }

    pub fn embedded(
        ident: &'static str,
        tags: Tags,
        record: fn() -> RecordDescriptor,
        leaf: Option<Kind>,
    ) -> Self {
        Self::new(ident, tags, FieldShape::Embedded { record, leaf })
    }

    /// Declared identifier.
    pub fn ident(&self) -> &'static str {
        self.ident
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    pub fn shape(&self) -> &FieldShape {
        &self.shape
    }

    pub fn is_exported(&self) -> bool {
        !matches!(self.shape, FieldShape::Internal)
    }

    /// Kind of the field when coded as a leaf.
    pub fn kind(&self) -> Option<&Kind> {
        match &self.shape {
            FieldShape::Leaf(kind) => Some(kind),
            FieldShape::Embedded { leaf, .. } => leaf.as_ref(),
            FieldShape::Internal => None,
        }
    }
}

/// Derived descriptor of a record type.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDescriptor {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All fields in declaration order, internal ones included.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Field by declared identifier.
    pub fn field(&self, ident: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    /// Canonical keys written by encode, in walk order: each embedded field
    /// is followed by its flattened members (and its own key last, when it is
    /// also a tagged leaf).
    ///
    /// Embedding deeper than [`MAX_EMBED_DEPTH`] is not followed.
    pub fn canonical_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_keys(&mut keys, 0);
        keys
    }

    fn collect_keys(&self, keys: &mut Vec<String>, depth: usize) {
        for field in &self.fields {
            match &field.shape {
                FieldShape::Internal => {}
                FieldShape::Leaf(_) => keys.push(field.keys.canonical().to_owned()),
                FieldShape::Embedded { record, leaf } => {
                    if depth < MAX_EMBED_DEPTH {
                        record().collect_keys(keys, depth + 1);
                    } else {
                        log::debug!(
                            "[descriptor] {}.{}: embedding deeper than {} not followed",
                            self.name,
                            field.ident,
                            MAX_EMBED_DEPTH
                        );
                    }
                    if leaf.is_some() {
                        keys.push(field.keys.canonical().to_owned());
                    }
                }
            }
        }
    }
}
