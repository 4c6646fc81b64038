// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record traits and pointer-chain unwrapping.
//!
//! [`Record`] is implemented by `#[derive(Record)]`. [`RecordRef`] and
//! [`RecordMut`] describe values that *lead to* a record: the record itself,
//! or any chain of `Option`, `Box`, `&` and `&mut` ending in one. Each impl
//! unwraps exactly one level, so the depth of a chain is bounded by its type.

use crate::descriptor::RecordDescriptor;
use crate::error::Result;
use crate::Multimap;

/// A struct whose exported fields are coded to and from a multimap.
///
/// Do not implement by hand; use `#[derive(Record)]`.
pub trait Record {
    /// Derived schema of the record type.
    fn descriptor() -> RecordDescriptor;

    /// Writes every exported, non-empty field into `out`.
    fn encode_fields(&self, out: &mut Multimap) -> Result<()>;

    /// Populates exported fields from `input`. Fields without a matching key
    /// are left untouched.
    fn decode_fields(&mut self, input: &Multimap) -> Result<()>;
}

/// Read access to the record at the end of a pointer chain.
pub trait RecordRef {
    type Target: Record;

    /// The record, or `None` when some level of the chain is absent.
    fn reach(&self) -> Option<&Self::Target>;
}

/// Write access to the record at the end of a pointer chain.
pub trait RecordMut: RecordRef {
    /// The record, allocating a default value at every absent level.
    fn reach_mut(&mut self) -> &mut Self::Target;
}

impl<T: RecordRef> RecordRef for Option<T> {
    type Target = T::Target;

    fn reach(&self) -> Option<&Self::Target> {
        self.as_ref().and_then(RecordRef::reach)
    }
}

impl<T: RecordMut + Default> RecordMut for Option<T> {
    fn reach_mut(&mut self) -> &mut Self::Target {
        self.get_or_insert_with(T::default).reach_mut()
    }
}

impl<T: RecordRef + ?Sized> RecordRef for Box<T> {
    type Target = T::Target;

    fn reach(&self) -> Option<&Self::Target> {
        (**self).reach()
    }
}

impl<T: RecordMut + ?Sized> RecordMut for Box<T> {
    fn reach_mut(&mut self) -> &mut Self::Target {
        (**self).reach_mut()
    }
}

impl<T: RecordRef + ?Sized> RecordRef for &T {
    type Target = T::Target;

    fn reach(&self) -> Option<&Self::Target> {
        (**self).reach()
    }
}

impl<T: RecordRef + ?Sized> RecordRef for &mut T {
    type Target = T::Target;

    fn reach(&self) -> Option<&Self::Target> {
        (**self).reach()
    }
}

impl<T: RecordMut + ?Sized> RecordMut for &mut T {
    fn reach_mut(&mut self) -> &mut Self::Target {
        (**self).reach_mut()
    }
}
