// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Text, boolean, integer and floating-point coders.

use super::{first, FieldValue};
use crate::error::{Error, Result};
use crate::kind::Kind;

impl FieldValue for String {
    fn kind() -> Kind {
        Kind::Text
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn encode_value(&self) -> Result<Vec<String>> {
        Ok(vec![self.clone()])
    }

    fn decode_value(&mut self, input: &[String]) -> Result<()> {
        if let Some(s) = first(input) {
            *self = s.to_owned();
        }
        Ok(())
    }
}

impl FieldValue for bool {
    fn kind() -> Kind {
        Kind::Boolean
    }

    fn is_empty_value(&self) -> bool {
        !*self
    }

    fn encode_value(&self) -> Result<Vec<String>> {
        Ok(vec![self.to_string()])
    }

    fn decode_value(&mut self, input: &[String]) -> Result<()> {
        if let Some(s) = first(input) {
            *self = parse_bool(s)?;
        }
        Ok(())
    }
}

/// Accepts the usual spellings of a boolean literal, not only `true`/`false`.
fn parse_bool(s: &str) -> Result<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => s.parse::<bool>().map_err(|e| Error::parse(Kind::Boolean, s, e)),
    }
}

/// Generates coders for integer types (base-10, width-checked).
macro_rules! impl_integer {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl FieldValue for $ty {
                fn kind() -> Kind {
                    Kind::$variant { bits: <$ty>::BITS }
                }

                fn is_empty_value(&self) -> bool {
                    *self == 0
                }

                fn encode_value(&self) -> Result<Vec<String>> {
                    Ok(vec![self.to_string()])
                }

                fn decode_value(&mut self, input: &[String]) -> Result<()> {
                    if let Some(s) = first(input) {
                        *self = s
                            .parse::<$ty>()
                            .map_err(|e| Error::parse(Self::kind(), s, e))?;
                    }
                    Ok(())
                }
            }
        )+
    };
}

impl_integer!(SignedInteger: i8, i16, i32, i64, i128, isize);
impl_integer!(UnsignedInteger: u8, u16, u32, u64, u128, usize);

/// Generates coders for floating-point types.
///
/// `Display` already yields the shortest decimal that round-trips.
macro_rules! impl_float {
    ($($ty:ty => $bits:expr),+) => {
        $(
            impl FieldValue for $ty {
                fn kind() -> Kind {
                    Kind::FloatingPoint { bits: $bits }
                }

                fn is_empty_value(&self) -> bool {
                    *self == 0.0
                }

                fn encode_value(&self) -> Result<Vec<String>> {
                    Ok(vec![self.to_string()])
                }

                fn decode_value(&mut self, input: &[String]) -> Result<()> {
                    if let Some(s) = first(input) {
                        *self = s
                            .parse::<$ty>()
                            .map_err(|e| Error::parse(Self::kind(), s, e))?;
                    }
                    Ok(())
                }
            }
        )+
    };
}

impl_float!(f32 => 32, f64 => 64);
