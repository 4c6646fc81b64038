// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Capability kinds: the closed classification that drives value coding.
//!
//! Every [`FieldValue`](crate::FieldValue) impl reports exactly one `Kind`.
//! Sequence and pointer kinds carry the kind of their element/pointee, so a
//! field's `Kind` is a complete description of how it is coded.

use std::fmt;

/// Composite sub-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Composite {
    /// Temporal value, coded as RFC3339 text.
    Timestamp,
    /// Keyed mapping or nested record, coded as a JSON document.
    Structured,
}

/// Capability kind of a field type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Text,
    Boolean,
    SignedInteger { bits: u32 },
    UnsignedInteger { bits: u32 },
    FloatingPoint { bits: u32 },
    /// `bits` is the width of the whole value (both parts).
    ComplexNumber { bits: u32 },
    /// Arity known statically.
    FixedSequence { arity: usize, element: Box<Kind> },
    /// Arity determined by the input.
    GrowableSequence { element: Box<Kind> },
    /// One level of indirection. `pointee` is `None` for dynamic values whose
    /// shape is only known at run time.
    Indirect { pointee: Option<Box<Kind>> },
    Composite(Composite),
    /// Channel-like values: never coded, never an error.
    Unrepresentable,
}

impl Kind {
    /// Shorthand for a growable sequence of `element`.
    pub fn growable(element: Kind) -> Self {
        Self::GrowableSequence {
            element: Box::new(element),
        }
    }

    /// Shorthand for a fixed sequence of `arity` elements.
    pub fn fixed(arity: usize, element: Kind) -> Self {
        Self::FixedSequence {
            arity,
            element: Box::new(element),
        }
    }

    /// Shorthand for a typed pointer.
    pub fn indirect(pointee: Kind) -> Self {
        Self::Indirect {
            pointee: Some(Box::new(pointee)),
        }
    }

    /// Shorthand for a dynamic value.
    pub fn dynamic() -> Self {
        Self::Indirect { pointee: None }
    }

    /// Whether a value of this kind codes to exactly one string, and may
    /// therefore be a sequence element.
    pub fn is_single(&self) -> bool {
        match self {
            Self::FixedSequence { .. } | Self::GrowableSequence { .. } => false,
            Self::Indirect {
                pointee: Some(inner),
            } => inner.is_single(),
            _ => true,
        }
    }

    /// Stable kind name, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::SignedInteger { .. } => "signed-integer",
            Self::UnsignedInteger { .. } => "unsigned-integer",
            Self::FloatingPoint { .. } => "floating-point",
            Self::ComplexNumber { .. } => "complex-number",
            Self::FixedSequence { .. } => "fixed-sequence",
            Self::GrowableSequence { .. } => "growable-sequence",
            Self::Indirect { .. } => "pointer-or-dynamic",
            Self::Composite(_) => "composite",
            Self::Unrepresentable => "unrepresentable",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignedInteger { bits } => write!(f, "i{}", bits),
            Self::UnsignedInteger { bits } => write!(f, "u{}", bits),
            Self::FloatingPoint { bits } => write!(f, "f{}", bits),
            Self::ComplexNumber { bits } => write!(f, "complex{}", bits),
            Self::FixedSequence { arity, element } => write!(f, "[{}; {}]", element, arity),
            Self::GrowableSequence { element } => write!(f, "[{}]", element),
            Self::Indirect { pointee: Some(p) } => write!(f, "*{}", p),
            Self::Indirect { pointee: None } => write!(f, "dynamic"),
            Self::Composite(Composite::Timestamp) => write!(f, "timestamp"),
            Self::Composite(Composite::Structured) => write!(f, "json"),
            other => f.write_str(other.name()),
        }
    }
}
