// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Complex numbers and their canonical literal form `(re+imi)`.

use super::{first, FieldValue};
use crate::error::{Error, Result};
use crate::kind::Kind;
use std::fmt;
use std::str::FromStr;

/// Complex number with real part `re` and imaginary part `im`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

/// Malformed complex literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexParseError {
    reason: &'static str,
}

impl fmt::Display for ComplexParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid complex literal: {}", self.reason)
    }
}

impl std::error::Error for ComplexParseError {}

impl<T: fmt::Display + PartialOrd + Default> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // NaN compares false either way; it prints its own sign-less text
        let sign = if self.im >= T::default() || self.im != self.im {
            "+"
        } else {
            ""
        };
        write!(f, "({}{}{}i)", self.re, sign, self.im)
    }
}

/// Index of the `+`/`-` separating the real and imaginary parts, skipping a
/// leading sign and exponent signs.
fn split_point(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

impl<T: FromStr + Default> FromStr for Complex<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    type Err = Box<dyn std::error::Error + Send + Sync>;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = match s.strip_prefix('(') {
            Some(inner) => inner.strip_suffix(')').ok_or(ComplexParseError {
                reason: "unbalanced parenthesis",
            })?,
            None => s,
        };
        if s.is_empty() {
            return Err(ComplexParseError { reason: "empty" }.into());
        }

        let Some(body) = s.strip_suffix('i') else {
            return Ok(Self::new(s.parse()?, T::default()));
        };

        match split_point(body) {
            Some(at) => {
                let (re, im) = body.split_at(at);
                if im.len() < 2 {
                    return Err(ComplexParseError {
                        reason: "missing imaginary magnitude",
                    }
                    .into());
                }
                Ok(Self::new(re.parse()?, im.parse()?))
            }
            None => Ok(Self::new(T::default(), body.parse()?)),
        }
    }
}

/// Generates coders for complex types.
macro_rules! impl_complex {
    ($($ty:ty => $bits:expr),+) => {
        $(
            impl FieldValue for Complex<$ty> {
                fn kind() -> Kind {
                    Kind::ComplexNumber { bits: $bits }
                }

                fn is_empty_value(&self) -> bool {
                    self.re == 0.0 && self.im == 0.0
                }

                fn encode_value(&self) -> Result<Vec<String>> {
                    Ok(vec![self.to_string()])
                }

                fn decode_value(&mut self, input: &[String]) -> Result<()> {
                    if let Some(s) = first(input) {
                        *self = s.parse().map_err(|e| Error::parse(Self::kind(), s, e))?;
                    }
                    Ok(())
                }
            }
        )+
    };
}

impl_complex!(f32 => 64, f64 => 128);
