// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type shared by encode and decode.

use crate::kind::Kind;
use std::fmt;

/// Boxed underlying literal parse failure.
pub type ParseSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`encode`](crate::encode), [`decode`](crate::decode)
/// and their dynamic counterparts.
///
/// The first error aborts the whole call. A failed decode may leave the target
/// partially updated: fields visited before the failing one keep their new
/// values.
#[derive(Debug)]
pub enum Error {
    /// Top-level value is neither a record nor a chain of pointers to one.
    InvalidTarget { found: &'static str },
    /// No coder exists for this kind in this position (e.g. a sequence of
    /// sequences).
    UnsupportedKind(Kind),
    /// Malformed scalar literal.
    Parse {
        kind: Kind,
        literal: String,
        source: ParseSource,
    },
    /// JSON encode/decode failure of a composite value.
    Composite(serde_json::Error),
    /// Decode failure annotated with the input key of the offending field.
    Field { key: String, source: Box<Error> },
}

impl Error {
    pub(crate) fn parse(
        kind: Kind,
        literal: &str,
        source: impl Into<ParseSource>,
    ) -> Self {
        Error::Parse {
            kind,
            literal: literal.to_owned(),
            source: source.into(),
        }
    }

    pub(crate) fn field(key: &str, source: Error) -> Self {
        Error::Field {
            key: key.to_owned(),
            source: Box::new(source),
        }
    }

    /// Innermost key annotation, if the error was raised while decoding a field.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::Field { key, source } => source.key().or(Some(key.as_str())),
            _ => None,
        }
    }

    /// Error with all `Field` annotations stripped.
    pub fn root(&self) -> &Error {
        match self {
            Error::Field { source, .. } => source.root(),
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTarget { found } => {
                write!(f, "Invalid target: expected a record, found {}", found)
            }
            Error::UnsupportedKind(kind) => {
                write!(f, "Unsupported field kind: {} ({})", kind.name(), kind)
            }
            Error::Parse {
                kind,
                literal,
                source,
            } => write!(f, "Cannot parse {:?} as {}: {}", literal, kind, source),
            Error::Composite(e) => write!(f, "JSON coding failed: {}", e),
            Error::Field { key, source } => write!(f, "Field {:?}: {}", key, source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse { source, .. } => Some(source.as_ref()),
            Error::Composite(e) => Some(e),
            Error::Field { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Composite(e)
    }
}

/// Convenient alias for results using the crate `Error` type.
pub type Result<T> = core::result::Result<T, Error>;
