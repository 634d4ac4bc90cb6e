//! Fuzz testing harnesses for h245per components.
//!
//! This module contains fuzz targets for checking that the decoder survives
//! arbitrary input: every harness feeds the bytes straight into a public entry
//! point and discards the result. A panic is the only failure a fuzzer should see.

use std::sync::Arc;

use crate::config::{Alignment, DecoderConfig};
use crate::engine::H245Decoder;
use crate::error::PerError;
use crate::per::cursor::BitCursor;
use crate::per::descriptor::SizeConstraint;
use crate::per::primitives;
use crate::per::value::Value;
use crate::registry::{EndpointRegistry, VendorRegistry};
use crate::traits::VendorDecoder;
use crate::types::H221Code;

/// Vendor decoder that only checks the payload length, used to exercise the hook path.
#[derive(Debug)]
struct LengthOnlyDecoder;

impl VendorDecoder for LengthOnlyDecoder {
    fn name(&self) -> &str {
        "fuzz-length-only"
    }

    fn decode(&self, payload: &[u8]) -> Result<Value, PerError> {
        if payload.is_empty() {
            return Err(PerError::TruncatedInput {
                needed: 8,
                available: 0,
            });
        }
        Ok(Value::Integer(payload.len() as i64))
    }
}

/// Fuzz tests the full H.245 dispatcher in both PER variants.
///
/// # Setup
/// - Registers a vendor decoder under H.221 code 0xB5000012 and attaches an endpoint registry
/// - Uses tight depth and element limits so deep inputs stay cheap
///
/// # Parameters
/// - `data`: Fuzzer-generated input treated as concatenated H.245 messages
pub fn h245_decode_harness(data: &[u8]) {
    let vendors = Arc::new(VendorRegistry::new());
    let _ = vendors.register_h221_code(
        H221Code::from_parts(0xB5, 0x00, 0x0012),
        Arc::new(LengthOnlyDecoder),
    );
    let endpoints = Arc::new(EndpointRegistry::new());

    for alignment in [Alignment::Aligned, Alignment::Unaligned] {
        let config = DecoderConfig::default()
            .with_alignment(alignment)
            .with_max_depth(32)
            .with_max_elements(4096);
        let decoder = H245Decoder::new(config)
            .with_vendor_lookup(vendors.clone())
            .with_media_sink(endpoints.clone());
        let _ = decoder.decode(data);
    }
}

/// Fuzz tests the PER primitives on their own.
///
/// The first octet selects the primitive and its parameters; the rest is the encoding.
///
/// # Parameters
/// - `data`: Fuzzer-generated selector octet followed by encoded bits
pub fn per_primitives_harness(data: &[u8]) {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let alignment = if selector & 0x80 == 0 {
        Alignment::Aligned
    } else {
        Alignment::Unaligned
    };
    let mut cursor = BitCursor::new(rest);
    match selector & 0x07 {
        0 => {
            let upper = i64::from(selector & 0x78) << 28;
            let _ = primitives::decode_constrained_whole_number(&mut cursor, alignment, 0, upper);
        }
        1 => {
            let _ = primitives::decode_unconstrained_whole_number(&mut cursor, alignment);
        }
        2 => {
            let size = SizeConstraint::UNBOUNDED;
            let _ = primitives::decode_octet_string(&mut cursor, alignment, &size);
        }
        3 => {
            let size = SizeConstraint::extensible(0, usize::from(selector & 0x78));
            let _ = primitives::decode_bit_string(&mut cursor, alignment, &size);
        }
        4 => {
            let _ = primitives::decode_object_identifier_contents(&mut cursor, alignment);
        }
        5 => {
            let _ = primitives::decode_normally_small_length(&mut cursor, alignment);
        }
        6 => {
            let _ = primitives::decode_open_type(&mut cursor, alignment);
        }
        _ => {
            let _ = primitives::decode_general_string(&mut cursor, alignment);
        }
    }
}
