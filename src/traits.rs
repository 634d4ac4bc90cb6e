//! Core H.245 decoder hook traits.
//!
//! This module defines the interfaces through which the otherwise pure decoder
//! reaches the outside world: vendor-specific payload decoders selected by
//! non-standard identifier, and a sink for media transport endpoints announced in
//! logical channel signalling. Hooks never fail a decode.

use std::fmt::{self, Debug};
use std::net::IpAddr;
use std::sync::Arc;

use serde::Serialize;

use crate::error::PerError;
use crate::per::value::{ObjectIdentifier, Value};
use crate::types::H221Code;

/// Media transport carried on an announced endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransportKind {
    /// `mediaChannel`: the RTP stream.
    Rtp,
    /// `mediaControlChannel`: the RTCP stream.
    Rtcp,
}

/// A unicast media endpoint announced in an H.245 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MediaEndpoint {
    pub address: IpAddr,
    pub port: u16,
    pub kind: TransportKind,
}

/// Key under which a vendor decoder is registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VendorKey {
    /// `NonStandardIdentifier.object`.
    Object(ObjectIdentifier),
    /// `NonStandardIdentifier.h221NonStandard`.
    H221(H221Code),
}

impl fmt::Display for VendorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorKey::Object(oid) => write!(f, "oid:{oid}"),
            VendorKey::H221(code) => write!(f, "{code}"),
        }
    }
}

/// Decodes the octets of a non-standard parameter for one vendor.
pub trait VendorDecoder: Send + Sync + Debug {
    /// Name reported alongside decoded values and diagnostics.
    fn name(&self) -> &str;

    /// Interprets a vendor payload.
    ///
    /// # Parameters
    /// - `payload`: The `data` octets of the `NonStandardParameter`.
    ///
    /// # Returns
    /// The decoded payload as a [`Value`] tree.
    ///
    /// # Errors
    /// Any [`PerError`]; the decoder records it as a diagnostic and keeps the payload opaque.
    fn decode(&self, payload: &[u8]) -> Result<Value, PerError>;
}

/// Resolves vendor decoders by non-standard identifier.
pub trait VendorLookup: Send + Sync + Debug {
    /// Decoder registered for an object identifier.
    fn by_object_id(&self, oid: &ObjectIdentifier) -> Option<Arc<dyn VendorDecoder>>;

    /// Decoder registered for a packed H.221 code.
    fn by_h221_code(&self, code: H221Code) -> Option<Arc<dyn VendorDecoder>>;

    /// Dispatches on the key variant.
    fn lookup(&self, key: &VendorKey) -> Option<Arc<dyn VendorDecoder>> {
        match key {
            VendorKey::Object(oid) => self.by_object_id(oid),
            VendorKey::H221(code) => self.by_h221_code(*code),
        }
    }
}

/// Receives media endpoints as their transport addresses are decoded.
pub trait MediaEndpointSink: Send + Sync + Debug {
    /// Called once per decoded unicast IPv4/IPv6 media or media control channel.
    /// Implementations should be idempotent; the same endpoint may be announced repeatedly.
    fn register_media_endpoint(&self, endpoint: &MediaEndpoint);
}
