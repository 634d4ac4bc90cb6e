//! Shared registries backing the decoder hooks.
//!
//! [`VendorRegistry`] maps non-standard identifiers to vendor payload decoders and
//! [`EndpointRegistry`] collects the media endpoints announced while decoding. Both are
//! safe to share across threads decoding concurrently.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::H245Error;
use crate::per::value::ObjectIdentifier;
use crate::traits::{MediaEndpoint, MediaEndpointSink, VendorDecoder, VendorKey, VendorLookup};
use crate::types::H221Code;

/// Vendor payload decoders keyed by non-standard identifier.
///
/// Registration happens during setup; lookups during decoding only take the read lock.
#[derive(Debug, Default)]
pub struct VendorRegistry {
    decoders: RwLock<HashMap<VendorKey, Arc<dyn VendorDecoder>>>,
}

impl VendorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `decoder` for `key`.
    ///
    /// # Errors
    /// - [`H245Error::DuplicateVendorDecoder`] - A decoder is already registered for `key`
    pub fn register(
        &self,
        key: VendorKey,
        decoder: Arc<dyn VendorDecoder>,
    ) -> Result<(), H245Error> {
        let mut decoders = self.decoders.write();
        if decoders.contains_key(&key) {
            return Err(H245Error::DuplicateVendorDecoder(key.to_string()));
        }
        debug!(vendor = %key, decoder = decoder.name(), "registered vendor decoder");
        decoders.insert(key, decoder);
        Ok(())
    }

    /// Registers `decoder` under an object identifier.
    ///
    /// # Errors
    /// - [`H245Error::DuplicateVendorDecoder`] - The identifier is already taken
    pub fn register_object_id(
        &self,
        oid: ObjectIdentifier,
        decoder: Arc<dyn VendorDecoder>,
    ) -> Result<(), H245Error> {
        self.register(VendorKey::Object(oid), decoder)
    }

    /// Registers `decoder` under a packed H.221 code.
    ///
    /// # Errors
    /// - [`H245Error::DuplicateVendorDecoder`] - The code is already taken
    pub fn register_h221_code(
        &self,
        code: H221Code,
        decoder: Arc<dyn VendorDecoder>,
    ) -> Result<(), H245Error> {
        self.register(VendorKey::H221(code), decoder)
    }

    /// Removes the decoder for `key`, returning it if present.
    pub fn unregister(&self, key: &VendorKey) -> Option<Arc<dyn VendorDecoder>> {
        self.decoders.write().remove(key)
    }

    /// Number of registered decoders.
    pub fn len(&self) -> usize {
        self.decoders.read().len()
    }

    /// Whether no decoder is registered.
    pub fn is_empty(&self) -> bool {
        self.decoders.read().is_empty()
    }
}

impl VendorLookup for VendorRegistry {
    fn by_object_id(&self, oid: &ObjectIdentifier) -> Option<Arc<dyn VendorDecoder>> {
        self.decoders
            .read()
            .get(&VendorKey::Object(oid.clone()))
            .cloned()
    }

    fn by_h221_code(&self, code: H221Code) -> Option<Arc<dyn VendorDecoder>> {
        self.decoders.read().get(&VendorKey::H221(code)).cloned()
    }
}

/// Set of media endpoints announced so far. Registration is idempotent.
#[derive(Debug, Default)]
pub struct EndpointRegistry {
    endpoints: RwLock<HashSet<MediaEndpoint>>,
}

impl EndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the registered endpoints, ordered by address, port and kind.
    pub fn endpoints(&self) -> Vec<MediaEndpoint> {
        let mut endpoints: Vec<_> = self.endpoints.read().iter().copied().collect();
        endpoints.sort_by_key(|e| (e.address, e.port, e.kind as u8));
        endpoints
    }

    pub fn contains(&self, endpoint: &MediaEndpoint) -> bool {
        self.endpoints.read().contains(endpoint)
    }

    pub fn len(&self) -> usize {
        self.endpoints.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.read().is_empty()
    }

    /// Forgets every endpoint.
    pub fn clear(&self) {
        self.endpoints.write().clear();
    }
}

impl MediaEndpointSink for EndpointRegistry {
    fn register_media_endpoint(&self, endpoint: &MediaEndpoint) {
        if self.endpoints.write().insert(*endpoint) {
            debug!(
                address = %endpoint.address,
                port = endpoint.port,
                kind = ?endpoint.kind,
                "new media endpoint"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use super::*;
    use crate::error::PerError;
    use crate::per::value::Value;
    use crate::traits::TransportKind;

    #[derive(Debug)]
    struct Named(&'static str);

    impl VendorDecoder for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn decode(&self, payload: &[u8]) -> Result<Value, PerError> {
            Ok(Value::Integer(payload.len() as i64))
        }
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = VendorRegistry::new();
        let code = H221Code::from_parts(181, 0, 0x1234);
        registry
            .register_h221_code(code, Arc::new(Named("first")))
            .unwrap();
        let err = registry
            .register_h221_code(code, Arc::new(Named("second")))
            .unwrap_err();
        assert!(matches!(err, H245Error::DuplicateVendorDecoder(_)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.by_h221_code(code).unwrap().name(), "first");
    }

    #[test]
    fn lookup_dispatches_on_key_kind() {
        let registry = VendorRegistry::new();
        let oid: ObjectIdentifier = "1.2.840.113549".parse().unwrap();
        registry
            .register_object_id(oid.clone(), Arc::new(Named("oid")))
            .unwrap();

        assert_eq!(
            registry.lookup(&VendorKey::Object(oid.clone())).unwrap().name(),
            "oid"
        );
        assert!(
            registry
                .lookup(&VendorKey::H221(H221Code::from_parts(1, 2, 3)))
                .is_none()
        );

        assert!(registry.unregister(&VendorKey::Object(oid)).is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn endpoint_registration_is_idempotent() {
        let registry = EndpointRegistry::new();
        let endpoint = MediaEndpoint {
            address: IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
            port: 5004,
            kind: TransportKind::Rtp,
        };
        registry.register_media_endpoint(&endpoint);
        registry.register_media_endpoint(&endpoint);
        registry.register_media_endpoint(&MediaEndpoint {
            port: 5005,
            kind: TransportKind::Rtcp,
            ..endpoint
        });

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(&endpoint));
        assert_eq!(registry.endpoints()[0], endpoint);

        registry.clear();
        assert!(registry.is_empty());
    }
}
