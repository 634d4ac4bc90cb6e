//! Hostile input, resource limits and the serialized report shape.

mod common;

use std::sync::Arc;

use common::{aligned_decoder, unaligned_decoder};
use h245per::{
    Alignment, DecoderConfig, EndpointRegistry, ErrorCategory, H245Decoder, PerError,
    SignalTypeEncoding,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MSD_ACK_SLAVE: [u8; 2] = [0x20, 0xA0];

#[test]
fn seeded_garbage_never_panics() {
    let mut rng = StdRng::seed_from_u64(0x0245);
    let endpoints = Arc::new(EndpointRegistry::new());
    let decoders = [
        aligned_decoder().with_media_sink(endpoints.clone()),
        unaligned_decoder().with_media_sink(endpoints.clone()),
    ];

    for _ in 0..2_000 {
        let len = rng.random_range(0..96);
        let data: Vec<u8> = (0..len).map(|_| rng.random::<u8>()).collect();
        for decoder in &decoders {
            let report = decoder.decode(&data);
            assert!(report.unconsumed_bits <= data.len() * 8);
            if let Some(failure) = &report.failure {
                assert_eq!(failure.index, report.messages.len());
            }
        }
    }
}

#[test]
fn depth_limit_through_dispatcher() {
    let decoder = H245Decoder::new(DecoderConfig::default().with_max_depth(2));
    let report = decoder.decode(&MSD_ACK_SLAVE);
    let failure = report.failure.as_ref().unwrap();
    assert_eq!(failure.error.error, PerError::DepthLimitExceeded { limit: 2 });
    assert_eq!(failure.error.path.to_string(), "response.masterSlaveDeterminationAck");
    assert!(report.messages.is_empty());
}

#[test]
fn element_budget_through_dispatcher() {
    let decoder = H245Decoder::new(DecoderConfig::default().with_max_elements(3));
    let report = decoder.decode(&MSD_ACK_SLAVE);
    let failure = report.failure.as_ref().unwrap();
    assert_eq!(failure.error.category(), ErrorCategory::ResourceLimit);
    assert_eq!(
        failure.error.path.to_string(),
        "response.masterSlaveDeterminationAck.decision"
    );
}

#[test]
fn budget_is_per_message() {
    // Each acknowledgement holds 5 values; a budget of 5 suffices for any number of them.
    let decoder = H245Decoder::new(DecoderConfig::default().with_max_elements(5));
    let data = [MSD_ACK_SLAVE, MSD_ACK_SLAVE, MSD_ACK_SLAVE].concat();
    let report = decoder.decode(&data);
    assert!(report.is_complete());
    assert_eq!(report.messages.len(), 3);
}

#[test]
fn huge_declared_length_fails_fast() {
    // request.nonStandard with an object identifier claiming 16383 octets.
    let data = [0x00, 0x00, 0xBF, 0xFF, 0x01];
    let report = aligned_decoder().decode(&data);
    let failure = report.failure.as_ref().unwrap();
    assert_eq!(failure.error.category(), ErrorCategory::TruncatedInput);
    assert_eq!(
        failure.error.path.to_string(),
        "request.nonStandard.nonStandardData.nonStandardIdentifier.object"
    );
}

#[test]
fn report_serializes_to_json() {
    let report = aligned_decoder().decode(&[0x20, 0xA0, 0x09]);
    let json = serde_json::to_value(&report).unwrap();

    let message = &json["messages"][0];
    assert_eq!(message["index"], 0);
    assert_eq!(message["kind"], "masterSlaveDeterminationAck");
    assert_eq!(message["bit_len"], 11);
    assert!(message["body"]["choice"].is_object());

    let failure = &json["failure"];
    assert_eq!(failure["index"], 1);
    assert_eq!(failure["error"]["path"], "request.roundTripDelayRequest");
    assert!(json["unconsumed_bits"].as_u64().is_some());
}

#[test]
fn config_deserializes_with_defaults() {
    let config: DecoderConfig =
        serde_json::from_str(r#"{"alignment": "unaligned", "signal_type": "ia5_octet"}"#).unwrap();
    assert_eq!(config.alignment, Alignment::Unaligned);
    assert_eq!(config.signal_type, SignalTypeEncoding::Ia5Octet);
    assert_eq!(config.max_depth, DecoderConfig::default().max_depth);

    let round_trip: DecoderConfig =
        serde_json::from_value(serde_json::to_value(config).unwrap()).unwrap();
    assert_eq!(round_trip, config);
}
