//! Decoded value tree.
//!
//! A decoded message is a [`Value`] mirroring the descriptor it was decoded with.
//! Besides the ASN.1 kinds, outcome variants record what the decoder did with
//! content it did not interpret: vendor payloads, unknown extensions, deferred
//! placeholders and malformed data kept as raw octets. [`Value::Failed`] only
//! appears in the partial tree of a failed decode.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::Serialize;
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::{H245Error, OidFault};

/// An OBJECT IDENTIFIER as a list of arcs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, SerializeDisplay, DeserializeFromStr)]
pub struct ObjectIdentifier(Vec<u64>);

impl ObjectIdentifier {
    /// Builds an identifier from its arcs.
    pub fn new(arcs: Vec<u64>) -> Self {
        Self(arcs)
    }

    /// Arcs from the root outward.
    pub fn arcs(&self) -> &[u64] {
        &self.0
    }

    /// Parses the contents octets of an encoded identifier (X.690 §8.19).
    ///
    /// The first subidentifier carries the first two arcs: values below 40 are
    /// `0.x`, below 80 are `1.(x-40)`, and the rest `2.(x-80)`.
    ///
    /// # Errors
    /// - [`OidFault::Empty`] - No contents octets
    /// - [`OidFault::UnterminatedArc`] - The last octet has its continuation bit set
    /// - [`OidFault::ArcOverflow`] - A subidentifier exceeds 64 bits
    pub fn from_contents(contents: &[u8]) -> Result<Self, OidFault> {
        if contents.is_empty() {
            return Err(OidFault::Empty);
        }
        let mut subidentifiers = Vec::new();
        let mut current: u64 = 0;
        let mut in_arc = false;
        for &octet in contents {
            if current > (u64::MAX >> 7) {
                return Err(OidFault::ArcOverflow);
            }
            current = (current << 7) | u64::from(octet & 0x7F);
            in_arc = octet & 0x80 != 0;
            if !in_arc {
                subidentifiers.push(current);
                current = 0;
            }
        }
        if in_arc {
            return Err(OidFault::UnterminatedArc);
        }

        let first = subidentifiers[0];
        let mut arcs = Vec::with_capacity(subidentifiers.len() + 1);
        match first {
            0..40 => arcs.extend([0, first]),
            40..80 => arcs.extend([1, first - 40]),
            _ => arcs.extend([2, first - 80]),
        }
        arcs.extend_from_slice(&subidentifiers[1..]);
        Ok(Self(arcs))
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{arc}")?;
        }
        Ok(())
    }
}

impl FromStr for ObjectIdentifier {
    type Err = H245Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let arcs = s
            .split('.')
            .map(str::parse::<u64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| H245Error::InvalidObjectIdentifier(s.to_string()))?;
        if arcs.len() < 2 || arcs[0] > 2 || (arcs[0] < 2 && arcs[1] >= 40) {
            return Err(H245Error::InvalidObjectIdentifier(s.to_string()));
        }
        Ok(Self(arcs))
    }
}

/// A BIT STRING: `len` bits packed MSB-first, the last octet zero-padded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitStringValue {
    pub bits: Bytes,
    pub len: usize,
}

impl BitStringValue {
    /// Bit `index`, MSB-first; `None` past the end.
    pub fn bit(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let octet = self.bits.get(index / 8)?;
        Some(octet & (0x80 >> (index % 8)) != 0)
    }
}

/// The selected alternative of a CHOICE.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceValue {
    /// Alternative index; root and extension alternatives are indexed separately.
    pub index: usize,
    /// Whether the alternative came from the extension range.
    pub extension: bool,
    /// Alternative label, `None` if the extension index is unknown locally.
    pub label: Option<&'static str>,
    pub value: Value,
}

/// A decoded sequence component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValue {
    pub label: &'static str,
    pub value: Value,
}

/// Present components of a SEQUENCE, in wire order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SequenceValue {
    pub fields: Vec<FieldValue>,
    /// Extension addition positions present on the wire but unknown locally.
    pub skipped_extensions: Vec<usize>,
}

impl SequenceValue {
    /// Component `label`, if present.
    pub fn get(&self, label: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| &f.value)
    }
}

/// A non-standard payload interpreted by a vendor decoder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorValue {
    pub decoder: String,
    pub raw: Bytes,
    pub decoded: Value,
}

/// A node of the decoded tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    BitString(BitStringValue),
    OctetString(Bytes),
    CharacterString(String),
    ObjectIdentifier(ObjectIdentifier),
    Choice(Box<ChoiceValue>),
    Sequence(SequenceValue),
    SequenceOf(Vec<Value>),
    /// Non-standard payload decoded by a registered vendor decoder.
    Vendor(Box<VendorValue>),
    /// Extension skipped via its length envelope.
    UnknownExtension { index: usize, raw: Bytes },
    /// Placeholder for a construct skipped without interpretation.
    NotDecoded { reason: &'static str },
    /// Raw octets of content that failed to decode but could be stepped over.
    Malformed { raw: Bytes },
    /// Stands in for the value whose decoding failed inside a partial tree.
    Failed,
}

impl Value {
    /// Child named `name`: a present sequence component, or the selected choice
    /// alternative if its label matches.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Sequence(seq) => seq.get(name),
            Value::Choice(choice) if choice.label == Some(name) => Some(&choice.value),
            _ => None,
        }
    }

    /// Follows a dotted path such as
    /// `"response.openLogicalChannelAck.forwardLogicalChannelNumber"`.
    /// Numeric segments index into SEQUENCE OF values.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |value, segment| match value {
                Value::SequenceOf(items) => {
                    segment.parse::<usize>().ok().and_then(|i| items.get(i))
                }
                _ => value.field(segment),
            })
    }

    /// Label of the selected alternative, for known choice alternatives.
    pub fn choice_label(&self) -> Option<&'static str> {
        match self {
            Value::Choice(choice) => choice.label,
            _ => None,
        }
    }

    /// Selected choice, if this is a CHOICE.
    pub fn as_choice(&self) -> Option<&ChoiceValue> {
        match self {
            Value::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    /// Components, if this is a SEQUENCE.
    pub fn as_sequence(&self) -> Option<&SequenceValue> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Octets of an OCTET STRING (or of the raw payload behind a vendor value).
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::OctetString(raw) => Some(raw),
            Value::Vendor(vendor) => Some(&vendor.raw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::CharacterString(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object_identifier(&self) -> Option<&ObjectIdentifier> {
        match self {
            Value::ObjectIdentifier(oid) => Some(oid),
            _ => None,
        }
    }

    pub fn as_bit_string(&self) -> Option<&BitStringValue> {
        match self {
            Value::BitString(bits) => Some(bits),
            _ => None,
        }
    }

    pub fn as_sequence_of(&self) -> Option<&[Value]> {
        match self {
            Value::SequenceOf(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_vendor(&self) -> Option<&VendorValue> {
        match self {
            Value::Vendor(vendor) => Some(vendor),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}
