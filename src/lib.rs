//! `h245per`: an ASN.1 PER decoder for H.245 multimedia control messages.
//!
//! This library decodes buffers of PER-encoded `MultimediaSystemControlMessage`
//! PDUs into navigable value trees with structured diagnostics. Malformed input is
//! reported, never panicked on. The primary entry point is the [`H245Decoder`].
//!
//! ## Core Concepts
//!
//! - **[`H245Decoder`]**: Splits a buffer into messages and decodes each one against
//!   the H.245 tables. Holds the [`DecoderConfig`] and the optional hooks.
//! - **Descriptors**: Static [`Asn1Type`] tables describing the H.245 ASN.1 module
//!   (see [`h245`]). A single generic evaluator interprets them.
//! - **Values**: The decoded [`Value`] tree, addressable by dotted path
//!   (`"response.openLogicalChannelAck.forwardLogicalChannelNumber"`) and
//!   serializable with serde.
//! - **Hooks**: A [`VendorLookup`] interprets non-standard payloads and a
//!   [`MediaEndpointSink`] learns RTP/RTCP endpoints from logical channel signalling.
//!   [`VendorRegistry`] and [`EndpointRegistry`] are ready-made implementations.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use h245per::{DecoderConfig, EndpointRegistry, H245Decoder, MessageCategory, Value};
//!
//! let endpoints = Arc::new(EndpointRegistry::new());
//! let decoder = H245Decoder::new(DecoderConfig::default()).with_media_sink(endpoints.clone());
//!
//! // masterSlaveDeterminationAck { decision slave }
//! let report = decoder.decode(&[0x20, 0xA0]);
//! assert!(report.is_complete());
//!
//! let message = &report.messages[0];
//! assert_eq!(message.category, MessageCategory::Response);
//! assert_eq!(message.kind, Some("masterSlaveDeterminationAck"));
//! let decision = message
//!     .body
//!     .get("response.masterSlaveDeterminationAck.decision")
//!     .and_then(Value::choice_label);
//! assert_eq!(decision, Some("slave"));
//! ```
//!
//! ## Logging
//!
//! Decoding events are emitted through `tracing`; the library installs no subscriber.

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod fuzz_harnesses;
pub mod h245;
pub mod per;
pub mod registry;
pub mod traits;
pub mod types;

pub use config::{Alignment, DecoderConfig, SignalTypeEncoding};
pub use engine::{DecodeReport, H245Decoder, Message, MessageCategory, MessageFailure};
pub use error::{
    DecodeError, Diagnostic, DiagnosticKind, ErrorCategory, FieldPath, H245Error, OidFault,
    PathSegment, PerError,
};
pub use per::{Asn1Type, DecodedValue, ObjectIdentifier, Value};
pub use registry::{EndpointRegistry, VendorRegistry};
pub use traits::{
    MediaEndpoint, MediaEndpointSink, TransportKind, VendorDecoder, VendorKey, VendorLookup,
};
pub use types::{BitOffset, H221Code};
