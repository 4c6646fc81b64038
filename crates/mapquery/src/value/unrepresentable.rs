// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Kinds with no string form. Always empty, never decoded, never an error.

use super::FieldValue;
use crate::error::Result;
use crate::kind::Kind;
use std::marker::PhantomData;
use std::sync::mpsc::{Receiver, Sender, SyncSender};

macro_rules! impl_unrepresentable {
    ($($ty:ident $(: ?$unsized:ident)?),+) => {
        $(
            impl<T $(: ?$unsized)?> FieldValue for $ty<T> {
                fn kind() -> Kind {
                    Kind::Unrepresentable
                }

                fn is_empty_value(&self) -> bool {
                    true
                }

                fn encode_value(&self) -> Result<Vec<String>> {
                    Ok(Vec::new())
                }

                fn decode_value(&mut self, _input: &[String]) -> Result<()> {
                    Ok(())
                }
            }
        )+
    };
}

impl_unrepresentable!(PhantomData: ?Sized, Sender, SyncSender, Receiver);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_channels_are_skipped() {
        let (mut tx, mut rx) = mpsc::channel::<u8>();
        assert!(tx.is_empty_value());
        assert!(tx.encode_value().unwrap().is_empty());
        tx.decode_value(&["x".to_string()]).unwrap();
        rx.decode_value(&["x".to_string()]).unwrap();

        tx.send(1).unwrap();
        assert_eq!(rx.recv().unwrap(), 1);
    }

    #[test]
    fn test_phantom() {
        let mut p = PhantomData::<str>;
        assert!(p.is_empty_value());
        assert_eq!(<PhantomData<str>>::kind(), Kind::Unrepresentable);
        p.decode_value(&[]).unwrap();
    }
}
