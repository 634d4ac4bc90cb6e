//! The H.245 message dispatcher.
//!
//! This module provides the `H245Decoder`, which splits a buffer of concatenated
//! `MultimediaSystemControlMessage` PDUs into decoded messages. It owns the
//! decoder configuration and the optional vendor and media endpoint hooks, and
//! hands each message to the generic PER evaluator.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::DecoderConfig;
use crate::error::{DecodeError, Diagnostic, H245Error};
use crate::h245::MESSAGE;
use crate::per::descriptor::Asn1Type;
use crate::per::evaluator::{DecodedValue, Decoder, Hooks};
use crate::per::value::Value;
use crate::traits::{MediaEndpointSink, VendorLookup};
use crate::types::BitOffset;

/// Top-level alternative of a `MultimediaSystemControlMessage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MessageCategory {
    Request,
    Response,
    Command,
    Indication,
    /// An extension alternative unknown to the local tables.
    Unrecognized,
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageCategory::Request => "request",
            MessageCategory::Response => "response",
            MessageCategory::Command => "command",
            MessageCategory::Indication => "indication",
            MessageCategory::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

/// One decoded H.245 message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Position of the message within the buffer, starting at 0.
    pub index: usize,
    pub category: MessageCategory,
    /// Label of the message body alternative, e.g. `"openLogicalChannelAck"`.
    pub kind: Option<&'static str>,
    /// The full `MultimediaSystemControlMessage` tree.
    pub body: Value,
    /// Absolute bit offset of the first bit of the message.
    pub bit_offset: BitOffset,
    /// Bits consumed by the message, excluding trailing padding.
    pub bit_len: usize,
    /// Non-fatal findings made while decoding this message.
    pub diagnostics: Vec<Diagnostic>,
}

impl Message {
    fn new(
        index: usize,
        body: Value,
        start: BitOffset,
        end: BitOffset,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let (category, kind) = classify(&body);
        Message {
            index,
            category,
            kind,
            body,
            bit_offset: start,
            bit_len: end.value() - start.value(),
            diagnostics,
        }
    }

    /// Inner message body, i.e. the value of the selected request/response/... alternative.
    pub fn payload(&self) -> Option<&Value> {
        let category = self.body.as_choice()?;
        category.value.as_choice().map(|body| &body.value)
    }
}

/// The message that stopped a [`H245Decoder::decode`] run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageFailure {
    /// Index the failed message would have had.
    pub index: usize,
    pub error: DecodeError,
    /// The message tree decoded before the failure, with [`Value::Failed`] at the
    /// failing value. Siblings decoded ahead of it are kept as they are.
    pub partial: Option<Value>,
    /// Diagnostics gathered before the failure.
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of decoding a buffer of concatenated messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DecodeReport {
    /// Messages decoded in buffer order.
    pub messages: Vec<Message>,
    /// The first fatal failure; decoding stops there.
    pub failure: Option<MessageFailure>,
    /// Bits left undecoded, after a failure or once `max_messages` was reached.
    pub unconsumed_bits: usize,
}

impl DecodeReport {
    /// Whether the whole buffer was decoded without a fatal failure.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none() && self.unconsumed_bits == 0
    }

    /// All diagnostics, decoded messages first, then the failed message.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.messages
            .iter()
            .flat_map(|m| m.diagnostics.iter())
            .chain(self.failure.iter().flat_map(|f| f.diagnostics.iter()))
    }
}

/// The H.245 decoding engine.
///
/// Decodes buffers holding one or more PER-encoded `MultimediaSystemControlMessage`
/// PDUs. The engine itself is stateless between calls and may be shared across
/// threads; side effects go through the optional hooks.
///
/// ## Usage
///
/// 1. Create a decoder with [`H245Decoder::new`]
/// 2. Optionally attach hooks with [`with_vendor_lookup`] and [`with_media_sink`]
/// 3. Call [`decode`] per received buffer, or [`decode_message`] for a single PDU
///
/// [`with_vendor_lookup`]: Self::with_vendor_lookup
/// [`with_media_sink`]: Self::with_media_sink
/// [`decode`]: Self::decode
/// [`decode_message`]: Self::decode_message
#[derive(Debug, Clone, Default)]
pub struct H245Decoder {
    config: DecoderConfig,
    /// Resolves vendor decoders for `NonStandardParameter` payloads.
    vendors: Option<Arc<dyn VendorLookup>>,
    /// Receives media endpoints from logical channel signalling.
    media_sink: Option<Arc<dyn MediaEndpointSink>>,
}

impl H245Decoder {
    /// Creates a decoder with no hooks.
    pub fn new(config: DecoderConfig) -> Self {
        H245Decoder {
            config,
            vendors: None,
            media_sink: None,
        }
    }

    /// Attaches a vendor decoder lookup, e.g. a
    /// [`VendorRegistry`](crate::registry::VendorRegistry).
    pub fn with_vendor_lookup(mut self, vendors: Arc<dyn VendorLookup>) -> Self {
        self.vendors = Some(vendors);
        self
    }

    /// Attaches a media endpoint sink, e.g. an
    /// [`EndpointRegistry`](crate::registry::EndpointRegistry).
    pub fn with_media_sink(mut self, sink: Arc<dyn MediaEndpointSink>) -> Self {
        self.media_sink = Some(sink);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    fn decoder<'a, 'h>(&'h self, data: &'a [u8]) -> Decoder<'a, 'h> {
        Decoder::new(data, &self.config).with_hooks(Hooks {
            vendors: self.vendors.as_deref(),
            media: self.media_sink.as_deref(),
        })
    }

    /// Decodes every message in `data`.
    ///
    /// Messages are read back to back, each starting on an octet boundary. Decoding
    /// stops at the first fatal error; PER carries no delimiter to resynchronise on.
    ///
    /// # Parameters
    /// - `data`: Concatenated PER-encoded messages
    ///
    /// # Returns
    /// A [`DecodeReport`] with the decoded messages and, if one occurred, the failure.
    pub fn decode(&self, data: &[u8]) -> DecodeReport {
        let mut decoder = self.decoder(data);
        let mut report = DecodeReport::default();

        while decoder.remaining_bits() > 0 {
            let index = report.messages.len();
            if index >= self.config.max_messages {
                warn!(
                    limit = self.config.max_messages,
                    remaining_bits = decoder.remaining_bits(),
                    "message limit reached"
                );
                break;
            }

            let start = decoder.position();
            trace!(index, %start, "message start");
            decoder.begin_message(index);
            match decoder.decode(&MESSAGE) {
                Ok(body) => {
                    let end = decoder.position();
                    let message = Message::new(index, body, start, end, decoder.take_diagnostics());
                    debug!(
                        index,
                        category = %message.category,
                        kind = message.kind.unwrap_or("<unknown>"),
                        bits = message.bit_len,
                        diagnostics = message.diagnostics.len(),
                        "decoded message"
                    );
                    report.messages.push(message);
                }
                Err(error) => {
                    warn!(index, %error, "message decode failed");
                    report.failure = Some(MessageFailure {
                        index,
                        error,
                        partial: decoder.take_partial(),
                        diagnostics: decoder.take_diagnostics(),
                    });
                    break;
                }
            }

            decoder.align_to_octet();
            if decoder.position() == start {
                // Every message consumes at least its extension bit.
                break;
            }
        }

        report.unconsumed_bits = decoder.remaining_bits();
        report
    }

    /// Decodes exactly one message from the start of `data`.
    ///
    /// Bits after the message are ignored.
    ///
    /// # Errors
    /// - [`H245Error::Decode`] - The message failed to decode
    pub fn decode_message(&self, data: &[u8]) -> Result<Message, H245Error> {
        let mut decoder = self.decoder(data);
        decoder.begin_message(0);
        let body = decoder.decode(&MESSAGE).inspect_err(|error| {
            warn!(%error, "message decode failed");
        })?;
        let end = decoder.position();
        Ok(Message::new(
            0,
            body,
            BitOffset::new(0),
            end,
            decoder.take_diagnostics(),
        ))
    }

    /// Decodes one value of an arbitrary descriptor from the start of `data`,
    /// with this decoder's configuration and hooks.
    ///
    /// # Errors
    /// - [`H245Error::Decode`] - The value failed to decode
    pub fn decode_type(&self, data: &[u8], ty: &Asn1Type) -> Result<DecodedValue, H245Error> {
        let mut decoder = self.decoder(data);
        let value = decoder.decode(ty)?;
        Ok(DecodedValue {
            value,
            bit_len: decoder.position().value(),
            diagnostics: decoder.take_diagnostics(),
        })
    }
}

fn classify(body: &Value) -> (MessageCategory, Option<&'static str>) {
    let Some(top) = body.as_choice() else {
        return (MessageCategory::Unrecognized, None);
    };
    let category = match (top.extension, top.label) {
        (false, Some("request")) => MessageCategory::Request,
        (false, Some("response")) => MessageCategory::Response,
        (false, Some("command")) => MessageCategory::Command,
        (false, Some("indication")) => MessageCategory::Indication,
        _ => return (MessageCategory::Unrecognized, None),
    };
    (category, top.value.choice_label())
}
