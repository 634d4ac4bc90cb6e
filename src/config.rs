//! Decoder configuration.
//!
//! [`DecoderConfig`] selects the PER variant and the hardening limits applied to
//! untrusted input. It is plain data: hosts build it in code with the `with_*`
//! builders or load it from any serde format.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_ELEMENTS, DEFAULT_MAX_MESSAGES};

/// PER variant used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Basic-ALIGNED PER, the variant mandated by H.245.
    #[default]
    Aligned,
    /// Basic-UNALIGNED PER: every field bit-packed, no padding.
    Unaligned,
}

impl Alignment {
    /// Whether padding to octet boundaries is applied.
    #[inline]
    pub const fn is_aligned(self) -> bool {
        matches!(self, Alignment::Aligned)
    }
}

/// How `UserInputIndication` `signalType` characters are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalTypeEncoding {
    /// Apply the 17-character permitted alphabet (`"!#*0123456789ABCD"`).
    #[default]
    FormalAlphabet,
    /// Read one unrestricted 8-bit IA5 character, as some peers send it.
    Ia5Octet,
}

/// Configuration of an [`H245Decoder`](crate::engine::H245Decoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// PER variant.
    pub alignment: Alignment,
    /// Encoding of `signalType` characters.
    pub signal_type: SignalTypeEncoding,
    /// Maximum nesting depth of constructed types within one message.
    pub max_depth: usize,
    /// Maximum number of values decoded within one message.
    pub max_elements: usize,
    /// Maximum number of messages taken from one buffer.
    pub max_messages: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            alignment: Alignment::default(),
            signal_type: SignalTypeEncoding::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_elements: DEFAULT_MAX_ELEMENTS,
            max_messages: DEFAULT_MAX_MESSAGES,
        }
    }
}

impl DecoderConfig {
    /// Creates a configuration with H.245 defaults (ALIGNED, formal signal alphabet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the PER variant.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the `signalType` character encoding.
    pub fn with_signal_type(mut self, signal_type: SignalTypeEncoding) -> Self {
        self.signal_type = signal_type;
        self
    }

    /// Sets the nesting depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the per-message element budget.
    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = max_elements;
        self
    }

    /// Sets the per-buffer message cap.
    pub fn with_max_messages(mut self, max_messages: usize) -> Self {
        self.max_messages = max_messages;
        self
    }
}
