//! Generic recursive evaluator.
//!
//! [`Decoder`] walks an [`Asn1Type`] descriptor and reads the matching PER
//! encoding from its cursor, producing a [`Value`] tree. It owns the per-message
//! state: the field path used for error locations, the nesting depth and element
//! budget that bound hostile input, and the diagnostics gathered along the way.
//!
//! Extension additions are decoded through a child cursor scoped to their open-type
//! envelope. Whatever happens inside an envelope, the parent cursor resumes exactly at
//! its end; failures other than resource limits are contained there as diagnostics.
//!
//! A fatal failure keeps what was decoded before it: every constructed value on the
//! failing path is rebuilt around a [`Value::Failed`] leaf and left for
//! [`Decoder::take_partial`].

use std::mem;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use bytes::Bytes;
use tracing::{debug, warn};

use crate::config::{Alignment, DecoderConfig, SignalTypeEncoding};
use crate::error::{DecodeError, Diagnostic, DiagnosticKind, FieldPath, PathSegment, PerError};
use crate::per::cursor::BitCursor;
use crate::per::descriptor::{
    Asn1Type, CharacterPolicy, CharacterStringDescriptor, ChoiceDescriptor, Field, FieldRole,
    SequenceDescriptor, SequenceOfDescriptor, StringKind,
};
use crate::per::primitives::{self, CharacterCoding, Length, OpenType};
use crate::per::value::{
    ChoiceValue, FieldValue, ObjectIdentifier, SequenceValue, Value, VendorValue,
};
use crate::traits::{MediaEndpoint, MediaEndpointSink, TransportKind, VendorKey, VendorLookup};
use crate::types::{BitOffset, H221Code};

/// Side-effect hooks consulted while decoding. Both are optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hooks<'h> {
    pub vendors: Option<&'h dyn VendorLookup>,
    pub media: Option<&'h dyn MediaEndpointSink>,
}

/// A value decoded on its own by [`decode_value`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedValue {
    pub value: Value,
    pub diagnostics: Vec<Diagnostic>,
    /// Bits consumed from the start of the buffer.
    pub bit_len: usize,
}

/// Scratch carried between adjacent fields of one sequence.
#[derive(Debug, Default)]
struct FieldScratch {
    vendor: Option<VendorKey>,
}

/// Descriptor-driven PER decoder over one buffer.
#[derive(Debug)]
pub struct Decoder<'a, 'h> {
    cursor: BitCursor<'a>,
    config: &'h DecoderConfig,
    hooks: Hooks<'h>,
    path: FieldPath,
    depth: usize,
    elements: usize,
    message_index: usize,
    diagnostics: Vec<Diagnostic>,
    /// Tree decoded up to the last fatal failure, while that failure propagates.
    partial: Option<Value>,
}

impl<'a, 'h> Decoder<'a, 'h> {
    /// Creates a decoder positioned at the start of `data`.
    pub fn new(data: &'a [u8], config: &'h DecoderConfig) -> Self {
        Self {
            cursor: BitCursor::new(data),
            config,
            hooks: Hooks::default(),
            path: FieldPath::new(),
            depth: 0,
            elements: 0,
            message_index: 0,
            diagnostics: Vec::new(),
            partial: None,
        }
    }

    /// Installs side-effect hooks.
    pub fn with_hooks(mut self, hooks: Hooks<'h>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Absolute bit position of the cursor.
    pub fn position(&self) -> BitOffset {
        self.cursor.position()
    }

    /// Bits left in the buffer.
    pub fn remaining_bits(&self) -> usize {
        self.cursor.remaining_bits()
    }

    /// Skips padding up to the next octet boundary.
    pub fn align_to_octet(&mut self) {
        self.cursor.align_to_octet();
    }

    /// Resets per-message state (path, depth, element budget) before decoding message `index`.
    pub fn begin_message(&mut self, index: usize) {
        self.message_index = index;
        self.path = FieldPath::new();
        self.depth = 0;
        self.elements = 0;
        self.partial = None;
    }

    /// Removes and returns the diagnostics gathered so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        mem::take(&mut self.diagnostics)
    }

    /// After [`decode`](Self::decode) failed, the tree decoded up to the failure,
    /// with [`Value::Failed`] in place of the value that could not be decoded.
    /// `None` if the failure hit before any constructed value was started.
    pub fn take_partial(&mut self) -> Option<Value> {
        self.partial.take()
    }

    /// Decodes one value of type `ty` at the current position.
    ///
    /// # Errors
    /// A [`DecodeError`] locating the first fatal failure. The cursor position after
    /// an error is unspecified.
    pub fn decode(&mut self, ty: &Asn1Type) -> Result<Value, DecodeError> {
        self.decode_type(ty)
    }

    fn alignment(&self) -> Alignment {
        self.config.alignment
    }

    fn locate(&self, error: PerError) -> DecodeError {
        DecodeError {
            error,
            path: self.path.clone(),
            bit_offset: self.cursor.position(),
        }
    }

    fn diagnose(&mut self, kind: DiagnosticKind) {
        self.diagnostics.push(Diagnostic {
            message_index: self.message_index,
            path: self.path.clone(),
            bit_offset: self.cursor.position(),
            kind,
        });
    }

    /// Runs a primitive against the cursor, locating any error.
    fn primitive<T>(
        &mut self,
        read: impl FnOnce(&mut BitCursor<'a>) -> Result<T, PerError>,
    ) -> Result<T, DecodeError> {
        read(&mut self.cursor).map_err(|error| self.locate(error))
    }

    /// The partial value left by a failed child, or [`Value::Failed`] for a leaf.
    fn failed_child(&mut self) -> Value {
        self.partial.take().unwrap_or(Value::Failed)
    }

    /// Records `partial` as the enclosing value of a propagating failure.
    fn fail_with<T>(&mut self, err: DecodeError, partial: Value) -> Result<T, DecodeError> {
        self.partial = Some(partial);
        Err(err)
    }

    /// Appends the outcome of decoding one component. A failed component is kept
    /// as its partial value and the error is passed on.
    fn push_field(
        &mut self,
        sequence: &mut SequenceValue,
        label: &'static str,
        result: Result<Value, DecodeError>,
    ) -> Result<(), DecodeError> {
        let (value, outcome) = match result {
            Ok(value) => (value, Ok(())),
            Err(err) => (self.failed_child(), Err(err)),
        };
        sequence.fields.push(FieldValue { label, value });
        outcome
    }

    fn charge_elements(&mut self, count: usize) -> Result<(), DecodeError> {
        let limit = self.config.max_elements;
        if count > limit.saturating_sub(self.elements) {
            return Err(self.locate(PerError::ElementBudgetExceeded { limit }));
        }
        self.elements += count;
        Ok(())
    }

    fn nested(
        &mut self,
        decode: impl FnOnce(&mut Self) -> Result<Value, DecodeError>,
    ) -> Result<Value, DecodeError> {
        let limit = self.config.max_depth;
        if self.depth >= limit {
            return Err(self.locate(PerError::DepthLimitExceeded { limit }));
        }
        self.depth += 1;
        let result = decode(self);
        self.depth -= 1;
        result
    }

    fn decode_type(&mut self, ty: &Asn1Type) -> Result<Value, DecodeError> {
        self.charge_elements(1)?;
        let alignment = self.alignment();
        match ty {
            Asn1Type::Null => Ok(Value::Null),
            Asn1Type::Boolean => self.primitive(primitives::decode_boolean).map(Value::Boolean),
            Asn1Type::Integer(range) => self
                .primitive(|c| primitives::decode_integer(c, alignment, range))
                .map(Value::Integer),
            Asn1Type::BitString(size) => self
                .primitive(|c| primitives::decode_bit_string(c, alignment, size))
                .map(Value::BitString),
            Asn1Type::OctetString(size) => self
                .primitive(|c| primitives::decode_octet_string(c, alignment, size))
                .map(|octets| Value::OctetString(Bytes::from(octets))),
            Asn1Type::CharacterString(desc) => self.decode_character_string(desc),
            Asn1Type::ObjectIdentifier => self.decode_object_identifier(),
            Asn1Type::Choice(desc) => self.nested(|d| d.decode_choice(desc)),
            Asn1Type::Sequence(desc) => self.nested(|d| d.decode_sequence(desc)),
            Asn1Type::SequenceOf(desc) => self.nested(|d| d.decode_sequence_of(desc)),
            Asn1Type::Deferred { reason, ty } => {
                self.decode_type(ty)?;
                debug!(path = %self.path, reason, "skipped deferred field");
                self.diagnose(DiagnosticKind::NotYetImplemented(reason));
                Ok(Value::NotDecoded { reason })
            }
            Asn1Type::Unsupported(name) => Err(self.locate(PerError::NotYetImplemented(name))),
        }
    }

    fn decode_character_string(
        &mut self,
        desc: &CharacterStringDescriptor,
    ) -> Result<Value, DecodeError> {
        let alignment = self.alignment();
        if desc.kind == StringKind::GeneralString {
            return self
                .primitive(|c| primitives::decode_general_string(c, alignment))
                .map(Value::CharacterString);
        }
        let coding = match (desc.policy, self.config.signal_type) {
            (CharacterPolicy::SignalType, SignalTypeEncoding::Ia5Octet) => CharacterCoding::octet(),
            _ => CharacterCoding::for_descriptor(desc, alignment),
        };
        self.primitive(|c| primitives::decode_character_string(c, alignment, &desc.size, &coding))
            .map(Value::CharacterString)
    }

    fn decode_object_identifier(&mut self) -> Result<Value, DecodeError> {
        let alignment = self.alignment();
        let contents =
            self.primitive(|c| primitives::decode_object_identifier_contents(c, alignment))?;
        match ObjectIdentifier::from_contents(&contents) {
            Ok(oid) => Ok(Value::ObjectIdentifier(oid)),
            Err(fault) => {
                debug!(path = %self.path, %fault, "malformed object identifier");
                self.diagnose(DiagnosticKind::MalformedObjectIdentifier(fault));
                Ok(Value::Malformed {
                    raw: Bytes::from(contents),
                })
            }
        }
    }

    fn decode_choice(&mut self, desc: &'static ChoiceDescriptor) -> Result<Value, DecodeError> {
        let alignment = self.alignment();
        let extended = desc.extensible && self.primitive(|c| c.read_bit())?;

        if !extended {
            let alternatives = desc.root.len();
            if alternatives == 0 {
                return Err(self.locate(PerError::InvalidDescriptor("choice without alternatives")));
            }
            let index = self.primitive(|c| {
                primitives::decode_constrained_offset(c, alignment, alternatives as u128)
            })?;
            let alternative = desc
                .root
                .get(index as usize)
                .ok_or_else(|| {
                    self.locate(PerError::ChoiceIndexOutOfRange {
                        index,
                        alternatives,
                    })
                })?;
            self.path.push(PathSegment::Field(alternative.label));
            let value = self.decode_type(&alternative.ty);
            self.path.pop();
            return self.choice_value(index as usize, false, Some(alternative.label), value);
        }

        let index =
            self.primitive(|c| primitives::decode_normally_small_non_negative(c, alignment))?;
        let index = usize::try_from(index).unwrap_or(usize::MAX);
        let envelope = self.primitive(|c| primitives::decode_open_type(c, alignment))?;
        match desc.additions.get(index) {
            Some(alternative) => {
                self.path.push(PathSegment::Field(alternative.label));
                let value = self.decode_envelope(&alternative.ty, envelope);
                self.path.pop();
                self.choice_value(index, true, Some(alternative.label), value)
            }
            None => {
                let value = self.skip_envelope(index, envelope);
                self.choice_value(index, true, None, Ok(value))
            }
        }
    }

    fn choice_value(
        &mut self,
        index: usize,
        extension: bool,
        label: Option<&'static str>,
        value: Result<Value, DecodeError>,
    ) -> Result<Value, DecodeError> {
        let (value, outcome) = match value {
            Ok(value) => (value, None),
            Err(err) => (self.failed_child(), Some(err)),
        };
        let choice = Value::Choice(Box::new(ChoiceValue {
            index,
            extension,
            label,
            value,
        }));
        match outcome {
            None => Ok(choice),
            Some(err) => self.fail_with(err, choice),
        }
    }

    fn decode_sequence(&mut self, desc: &'static SequenceDescriptor) -> Result<Value, DecodeError> {
        let mut sequence = SequenceValue::default();
        match self.decode_sequence_into(desc, &mut sequence) {
            Ok(()) => Ok(Value::Sequence(sequence)),
            Err(err) => self.fail_with(err, Value::Sequence(sequence)),
        }
    }

    fn decode_sequence_into(
        &mut self,
        desc: &'static SequenceDescriptor,
        sequence: &mut SequenceValue,
    ) -> Result<(), DecodeError> {
        let extended = desc.extensible && self.primitive(|c| c.read_bit())?;

        let mut presence = Vec::with_capacity(desc.optional_root_fields());
        for _ in 0..desc.optional_root_fields() {
            presence.push(self.primitive(|c| c.read_bit())?);
        }
        let mut presence = presence.into_iter();

        let mut scratch = FieldScratch::default();
        for field in desc.root {
            if field.optional && !presence.next().unwrap_or(false) {
                continue;
            }
            let value = self.decode_field(field, &mut scratch, None);
            self.push_field(sequence, field.label, value)?;
        }

        if extended {
            self.decode_sequence_additions(desc, sequence, &mut scratch)?;
        }
        Ok(())
    }

    fn decode_sequence_additions(
        &mut self,
        desc: &'static SequenceDescriptor,
        sequence: &mut SequenceValue,
        scratch: &mut FieldScratch,
    ) -> Result<(), DecodeError> {
        let alignment = self.alignment();
        let count = self.primitive(|c| primitives::decode_normally_small_length(c, alignment))?;
        let mut present = Vec::with_capacity(count.min(self.cursor.remaining_bits()));
        for _ in 0..count {
            present.push(self.primitive(|c| c.read_bit())?);
        }

        for (index, is_present) in present.into_iter().enumerate() {
            if !is_present {
                continue;
            }
            let envelope = self.primitive(|c| primitives::decode_open_type(c, alignment))?;
            match desc.additions.get(index) {
                Some(field) => {
                    let value = self.decode_field(field, scratch, Some(envelope));
                    self.push_field(sequence, field.label, value)?;
                }
                None => {
                    self.skip_envelope(index, envelope);
                    sequence.skipped_extensions.push(index);
                }
            }
        }
        Ok(())
    }

    fn decode_field(
        &mut self,
        field: &Field,
        scratch: &mut FieldScratch,
        envelope: Option<OpenType<'a>>,
    ) -> Result<Value, DecodeError> {
        self.path.push(PathSegment::Field(field.label));
        let result = match envelope {
            None => self.decode_type(&field.ty),
            Some(envelope) => self.decode_envelope(&field.ty, envelope),
        }
        .map(|value| self.apply_role(field.role, value, scratch));
        self.path.pop();
        result
    }

    fn decode_sequence_of(
        &mut self,
        desc: &'static SequenceOfDescriptor,
    ) -> Result<Value, DecodeError> {
        let mut items = Vec::new();
        match self.decode_sequence_of_into(desc, &mut items) {
            Ok(()) => Ok(Value::SequenceOf(items)),
            Err(err) => self.fail_with(err, Value::SequenceOf(items)),
        }
    }

    fn decode_sequence_of_into(
        &mut self,
        desc: &'static SequenceOfDescriptor,
        items: &mut Vec<Value>,
    ) -> Result<(), DecodeError> {
        let alignment = self.alignment();
        let size = self.primitive(|c| primitives::read_size_extension(c, &desc.size))?;
        let mut length =
            self.primitive(|c| primitives::decode_constrained_length(c, alignment, &size))?;

        loop {
            let (count, more) = match length {
                Length::Complete(n) => (n, false),
                Length::Fragment(n) => (n, true),
            };
            // Checked up front so a huge declared count fails before any allocation.
            let limit = self.config.max_elements;
            if count > limit.saturating_sub(self.elements) {
                return Err(self.locate(PerError::ElementBudgetExceeded { limit }));
            }
            items.reserve(count.min(self.cursor.remaining_bits()));
            for _ in 0..count {
                self.path.push(PathSegment::Index(items.len()));
                let item = self.decode_type(&desc.element);
                self.path.pop();
                match item {
                    Ok(item) => items.push(item),
                    Err(err) => {
                        items.push(self.failed_child());
                        return Err(err);
                    }
                }
            }
            if !more {
                break;
            }
            length = self.primitive(|c| primitives::decode_unconstrained_length(c, alignment))?;
        }

        if !size.contains(items.len()) {
            return Err(self.locate(PerError::LengthOutOfRange {
                length: items.len(),
                size,
            }));
        }
        Ok(())
    }

    /// Decodes `ty` from an extension envelope. The parent cursor always resumes at
    /// the end of the envelope; containable failures become diagnostics.
    fn decode_envelope(
        &mut self,
        ty: &Asn1Type,
        envelope: OpenType<'a>,
    ) -> Result<Value, DecodeError> {
        let (child, octets) = match envelope {
            OpenType::Contents { cursor, octets } => (cursor, octets),
            OpenType::Fragmented(raw) => {
                debug!(path = %self.path, octets = raw.len(), "fragmented extension left opaque");
                self.diagnose(DiagnosticKind::NotYetImplemented("fragmented open type"));
                return Ok(Value::Malformed {
                    raw: Bytes::from(raw),
                });
            }
        };
        let raw = child.clone().read_octets(octets).unwrap_or_default();

        let parent = mem::replace(&mut self.cursor, child);
        let result = self.decode_type(ty);
        self.cursor = parent;

        match result {
            Ok(value) => Ok(value),
            Err(err) if !err.error.is_containable() => Err(err),
            Err(err) => {
                self.partial = None;
                debug!(path = %err.path, error = %err.error, "extension contained");
                let (kind, value) = match err.error {
                    PerError::NotYetImplemented(reason) => (
                        DiagnosticKind::NotYetImplemented(reason),
                        Value::NotDecoded { reason },
                    ),
                    other => (
                        DiagnosticKind::ExtensionUndecodable(other),
                        Value::Malformed {
                            raw: Bytes::from(raw),
                        },
                    ),
                };
                self.diagnostics.push(Diagnostic {
                    message_index: self.message_index,
                    path: err.path,
                    bit_offset: err.bit_offset,
                    kind,
                });
                Ok(value)
            }
        }
    }

    /// Steps over an extension unknown to the local tables.
    fn skip_envelope(&mut self, index: usize, envelope: OpenType<'a>) -> Value {
        let raw = match envelope {
            OpenType::Contents { mut cursor, octets } => {
                cursor.read_octets(octets).unwrap_or_default()
            }
            OpenType::Fragmented(raw) => raw,
        };
        debug!(path = %self.path, index, octets = raw.len(), "skipped unknown extension");
        self.diagnose(DiagnosticKind::UnknownExtensionSkipped {
            index,
            octets: raw.len(),
        });
        Value::UnknownExtension {
            index,
            raw: Bytes::from(raw),
        }
    }

    fn apply_role(&mut self, role: FieldRole, value: Value, scratch: &mut FieldScratch) -> Value {
        match role {
            FieldRole::Plain => value,
            FieldRole::VendorIdentifier => {
                scratch.vendor = vendor_key(&value);
                value
            }
            FieldRole::VendorPayload => self.decode_vendor_payload(value, scratch.vendor.take()),
            FieldRole::MediaChannel(kind) => {
                self.announce_media_endpoint(&value, kind);
                value
            }
        }
    }

    fn decode_vendor_payload(&mut self, value: Value, key: Option<VendorKey>) -> Value {
        let (Some(key), Some(vendors)) = (key, self.hooks.vendors) else {
            return value;
        };
        let Value::OctetString(raw) = &value else {
            return value;
        };
        let Some(decoder) = vendors.lookup(&key) else {
            return value;
        };
        match decoder.decode(raw) {
            Ok(decoded) => Value::Vendor(Box::new(VendorValue {
                decoder: decoder.name().to_string(),
                raw: raw.clone(),
                decoded,
            })),
            Err(error) => {
                warn!(
                    vendor = %key,
                    decoder = decoder.name(),
                    %error,
                    "vendor decoder rejected payload"
                );
                self.diagnose(DiagnosticKind::VendorPayloadRejected {
                    decoder: decoder.name().to_string(),
                    error,
                });
                value
            }
        }
    }

    fn announce_media_endpoint(&self, address: &Value, kind: TransportKind) {
        let Some(sink) = self.hooks.media else {
            return;
        };
        if let Some(endpoint) = media_endpoint(address, kind) {
            debug!(address = %endpoint.address, port = endpoint.port, ?kind, "media endpoint");
            sink.register_media_endpoint(&endpoint);
        }
    }
}

/// Extracts the vendor key from a decoded `NonStandardIdentifier`.
fn vendor_key(identifier: &Value) -> Option<VendorKey> {
    let choice = identifier.as_choice()?;
    match choice.label? {
        "object" => choice
            .value
            .as_object_identifier()
            .cloned()
            .map(VendorKey::Object),
        "h221NonStandard" => {
            let part = |name| choice.value.field(name).and_then(Value::as_integer);
            Some(VendorKey::H221(H221Code::from_parts(
                u8::try_from(part("t35CountryCode")?).ok()?,
                u8::try_from(part("t35Extension")?).ok()?,
                u16::try_from(part("manufacturerCode")?).ok()?,
            )))
        }
        _ => None,
    }
}

/// Extracts a unicast IPv4/IPv6 endpoint from a decoded `TransportAddress`.
fn media_endpoint(address: &Value, kind: TransportKind) -> Option<MediaEndpoint> {
    let unicast = address.field("unicastAddress")?;
    let (ip, port) = if let Some(v4) = unicast.field("iPAddress") {
        let octets: [u8; 4] = v4.field("network")?.as_bytes()?.as_ref().try_into().ok()?;
        (IpAddr::V4(Ipv4Addr::from(octets)), v4.field("tsapIdentifier")?)
    } else if let Some(v6) = unicast.field("iP6Address") {
        let octets: [u8; 16] = v6.field("network")?.as_bytes()?.as_ref().try_into().ok()?;
        (IpAddr::V6(Ipv6Addr::from(octets)), v6.field("tsapIdentifier")?)
    } else {
        return None;
    };
    Some(MediaEndpoint {
        address: ip,
        port: u16::try_from(port.as_integer()?).ok()?,
        kind,
    })
}

/// Decodes a single value of type `ty` from the start of `data`, without hooks.
///
/// # Errors
/// A [`DecodeError`] locating the first fatal failure.
pub fn decode_value(
    data: &[u8],
    ty: &Asn1Type,
    config: &DecoderConfig,
) -> Result<DecodedValue, DecodeError> {
    let mut decoder = Decoder::new(data, config);
    let value = decoder.decode(ty)?;
    Ok(DecodedValue {
        value,
        bit_len: decoder.position().value(),
        diagnostics: decoder.take_diagnostics(),
    })
}
