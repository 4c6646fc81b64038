// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Timestamp coding for `chrono::DateTime<Utc>` and `DateTime<FixedOffset>`.
//!
//! Encoded as RFC3339 with automatic fractional seconds. Decoding accepts, in
//! order: RFC3339, decimal unix seconds (`"1136214245.5"`, `"-1.25"`, `"1e9"`),
//! then the JSON form of a timestamp (a quoted RFC3339 string).
//!
//! Timestamps are also zero-field records, so `#[query(flatten, key = "t")]`
//! on a timestamp field codes it as a leaf only.

use super::{first, FieldValue};
use crate::config::{FRACTION_DIGITS, NANOS_PER_SECOND};
use crate::descriptor::RecordDescriptor;
use crate::error::Result;
use crate::kind::{Composite, Kind};
use crate::record::{Record, RecordMut, RecordRef};
use crate::Multimap;
use chrono::{DateTime, Duration, FixedOffset, SecondsFormat, Utc};

fn parse_timestamp(literal: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(literal) {
        return Ok(t);
    }
    if let Some(t) = parse_unix_seconds(literal) {
        return Ok(t.into());
    }
    Ok(serde_json::from_str::<DateTime<FixedOffset>>(literal)?)
}

/// Signed decimal seconds since the epoch. The fraction is kept to nanosecond
/// precision and carries the sign of the whole literal.
fn parse_unix_seconds(literal: &str) -> Option<DateTime<Utc>> {
    let (negative, digits) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal.strip_prefix('+').unwrap_or(literal)),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let is_decimal = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !is_decimal(whole) || !is_decimal(fraction) {
        return parse_float_seconds(literal);
    }
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut secs: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos: i64 = format!("{:0<width$.width$}", fraction, width = FRACTION_DIGITS)
        .parse()
        .ok()?;
    if negative {
        secs = -secs;
        nanos = -nanos;
    }
    DateTime::from_timestamp(secs, 0)?.checked_add_signed(Duration::nanoseconds(nanos))
}

fn parse_float_seconds(literal: &str) -> Option<DateTime<Utc>> {
    let value: f64 = literal.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let secs = value.trunc();
    let nanos = ((value - secs) * NANOS_PER_SECOND as f64).round() as i64;
    DateTime::from_timestamp(secs as i64, 0)?.checked_add_signed(Duration::nanoseconds(nanos))
}

/// Generates timestamp coders and zero-field record impls per time zone.
macro_rules! impl_timestamp {
    ($($tz:ty => $convert:expr),+) => {
        $(
            impl FieldValue for DateTime<$tz> {
                fn kind() -> Kind {
                    Kind::Composite(Composite::Timestamp)
                }

                /// The unix epoch is the zero timestamp.
                fn is_empty_value(&self) -> bool {
                    self.timestamp() == 0 && self.timestamp_subsec_nanos() == 0
                }

                fn encode_value(&self) -> Result<Vec<String>> {
                    Ok(vec![self.to_rfc3339_opts(SecondsFormat::AutoSi, true)])
                }

                fn decode_value(&mut self, input: &[String]) -> Result<()> {
                    if let Some(s) = first(input) {
                        let convert: fn(DateTime<FixedOffset>) -> DateTime<$tz> = $convert;
                        *self = convert(parse_timestamp(s)?);
                    }
                    Ok(())
                }
            }

            impl Record for DateTime<$tz> {
                fn descriptor() -> RecordDescriptor {
                    RecordDescriptor::new("DateTime", Vec::new())
                }

                fn encode_fields(&self, _out: &mut Multimap) -> Result<()> {
                    Ok(())
                }

                fn decode_fields(&mut self, _input: &Multimap) -> Result<()> {
                    Ok(())
                }
            }

            impl RecordRef for DateTime<$tz> {
                type Target = Self;

                fn reach(&self) -> Option<&Self> {
                    Some(self)
                }
            }

            impl RecordMut for DateTime<$tz> {
                fn reach_mut(&mut self) -> &mut Self {
                    self
                }
            }
        )+
    };
}

impl_timestamp!(
    Utc => |t| t.with_timezone(&Utc),
    FixedOffset => |t| t
);
