//! H.245 / PER error types and diagnostics.
//!
//! This module defines the error types used throughout the crate. It separates
//! primitive decoding failures ([`PerError`]), located failures carrying a field path
//! and bit offset ([`DecodeError`]), non-fatal findings attached to a decoded message
//! ([`Diagnostic`]) and crate-level errors ([`H245Error`]). The `thiserror` crate
//! is used for ergonomic error definitions.

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::per::descriptor::{ConstraintRange, SizeConstraint};
use crate::types::BitOffset;

/// Reasons an OBJECT IDENTIFIER's contents octets cannot be parsed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OidFault {
    /// The identifier has no contents octets.
    #[error("no contents octets")]
    Empty,
    /// The final octet still has its continuation bit set.
    #[error("final arc is unterminated")]
    UnterminatedArc,
    /// An arc does not fit in 64 bits.
    #[error("arc exceeds 64 bits")]
    ArcOverflow,
}

/// Errors raised by the PER primitives and the generic evaluator.
///
/// These describe what went wrong, not where; the evaluator wraps them in a
/// [`DecodeError`] carrying the field path and bit offset.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PerError {
    /// Fewer bits remain than a primitive needs.
    #[error("Truncated input: needed {needed} bits, {available} available")]
    TruncatedInput { needed: usize, available: usize },

    /// A decoded integer lies outside its declared range.
    #[error("Constraint violation: value {value} outside {range}")]
    ValueOutOfRange { value: i128, range: ConstraintRange },

    /// A choice index does not select one of the root alternatives.
    #[error("Constraint violation: choice index {index} not below {alternatives} root alternatives")]
    ChoiceIndexOutOfRange { index: u64, alternatives: usize },

    /// A length determinant lies outside its size constraint.
    #[error("Constraint violation: length {length} outside size {size}")]
    LengthOutOfRange { length: usize, size: SizeConstraint },

    /// An integer encoding is wider than 64 bits.
    #[error("Constraint violation: integer of {octets} octets exceeds 64 bits")]
    IntegerTooWide { octets: usize },

    /// A `11mmmmmm` length determinant carried an invalid multiplier.
    #[error("Constraint violation: invalid fragment multiplier {multiplier}")]
    InvalidFragment { multiplier: u8 },

    /// A restricted character string carried a code outside its alphabet.
    #[error("Constraint violation: character code {code} outside alphabet of {alphabet_size}")]
    InvalidCharacter { code: u32, alphabet_size: usize },

    /// OBJECT IDENTIFIER contents could not be parsed.
    #[error("Malformed object identifier: {0}")]
    MalformedObjectIdentifier(OidFault),

    /// A type without a decoding table was reached where it cannot be skipped.
    #[error("Not yet implemented: {0}")]
    NotYetImplemented(&'static str),

    /// Constructed types are nested deeper than the configured limit.
    #[error("Nesting depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },

    /// The message declares more values than the configured budget.
    #[error("Element budget of {limit} values exhausted")]
    ElementBudgetExceeded { limit: usize },

    /// A descriptor table is internally inconsistent.
    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(&'static str),
}

/// Coarse error taxonomy used for reporting and policy decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCategory {
    /// Input ended early; the message boundary is unknown.
    TruncatedInput,
    /// A value, index or length violated its declared constraint.
    ConstraintViolation,
    /// An OBJECT IDENTIFIER was malformed.
    MalformedObjectIdentifier,
    /// A construct the tables do not cover.
    NotYetImplemented,
    /// A hardening limit stopped the decode.
    ResourceLimit,
    /// A descriptor table is broken.
    InvalidDescriptor,
}

impl PerError {
    /// Maps the error onto the coarse [`ErrorCategory`] taxonomy.
    pub fn category(&self) -> ErrorCategory {
        match self {
            PerError::TruncatedInput { .. } => ErrorCategory::TruncatedInput,
            PerError::ValueOutOfRange { .. }
            | PerError::ChoiceIndexOutOfRange { .. }
            | PerError::LengthOutOfRange { .. }
            | PerError::IntegerTooWide { .. }
            | PerError::InvalidFragment { .. }
            | PerError::InvalidCharacter { .. } => ErrorCategory::ConstraintViolation,
            PerError::MalformedObjectIdentifier(_) => ErrorCategory::MalformedObjectIdentifier,
            PerError::NotYetImplemented(_) => ErrorCategory::NotYetImplemented,
            PerError::DepthLimitExceeded { .. } | PerError::ElementBudgetExceeded { .. } => {
                ErrorCategory::ResourceLimit
            }
            PerError::InvalidDescriptor(_) => ErrorCategory::InvalidDescriptor,
        }
    }

    /// Whether the error may be contained inside a known-length envelope.
    ///
    /// Resource limits guard the whole message and always propagate.
    pub fn is_containable(&self) -> bool {
        self.category() != ErrorCategory::ResourceLimit
    }
}

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// A named sequence field or choice alternative.
    Field(&'static str),
    /// An element position inside a SEQUENCE OF / SET OF.
    Index(usize),
}

/// Location of a value inside a message, e.g.
/// `response.openLogicalChannelAck.forwardLogicalChannelNumber`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// Creates an empty path denoting the message root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    /// Removes the last segment.
    pub fn pop(&mut self) {
        self.0.pop();
    }

    /// Segments from the root outward.
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Whether this path denotes the message root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A fatal decoding failure with its location.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{error} at {bit_offset} in {path}")]
pub struct DecodeError {
    /// What went wrong.
    pub error: PerError,
    /// Field path from the message root to the failing field.
    pub path: FieldPath,
    /// Absolute bit offset of the cursor when the failure was detected.
    pub bit_offset: BitOffset,
}

impl DecodeError {
    /// Shorthand for `self.error.category()`.
    pub fn category(&self) -> ErrorCategory {
        self.error.category()
    }
}

/// Non-fatal findings recorded while decoding a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// An extension addition unknown to the local tables was skipped via its envelope.
    UnknownExtensionSkipped { index: usize, octets: usize },
    /// An OBJECT IDENTIFIER was malformed; a placeholder was substituted.
    MalformedObjectIdentifier(OidFault),
    /// A placeholder field was skipped without interpreting its value.
    NotYetImplemented(&'static str),
    /// A known extension addition failed to decode; its envelope was skipped.
    ExtensionUndecodable(PerError),
    /// A vendor decoder rejected a non-standard payload; it was kept opaque.
    VendorPayloadRejected { decoder: String, error: PerError },
}

/// A structured, non-fatal report attached to a decoded message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Index of the message within the decoded buffer.
    pub message_index: usize,
    /// Field path of the affected value.
    pub path: FieldPath,
    /// Absolute bit offset at which the finding was made.
    pub bit_offset: BitOffset,
    /// What was found.
    pub kind: DiagnosticKind,
}

/// Main error type for crate-level operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum H245Error {
    /// A message or value failed to decode.
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A vendor decoder is already registered under this key.
    #[error("Vendor decoder already registered for {0}")]
    DuplicateVendorDecoder(String),

    /// A dotted object identifier literal could not be parsed.
    #[error("Invalid object identifier literal: {0:?}")]
    InvalidObjectIdentifier(String),
}
