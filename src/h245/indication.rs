//! `IndicationMessage` and the indication bodies, including user input.

use super::capability::TERMINAL_CAPABILITY_SET_RELEASE;
use super::channel::{OPEN_LOGICAL_CHANNEL_CONFIRM, REQUEST_CHANNEL_CLOSE_RELEASE};
use super::command::{COMMAND_MESSAGE, FLOW_CONTROL};
use super::common::{
    FLOW_CONTROL_SCOPE, GENERIC_INFORMATION, GENERIC_MESSAGE, LOGICAL_CHANNEL_NUMBER,
    NON_STANDARD_IDENTIFIER, NON_STANDARD_MESSAGE, NON_STANDARD_PARAMETER, TRANSPORT_ADDRESS,
};
use super::request::{MULTIPLEX_TABLE_ENTRY_NUMBERS, REQUEST_MESSAGE, REQUEST_MULTIPLEX_ENTRY};
use super::response::RESPONSE_MESSAGE;
use crate::constants::H245_SIGNAL_TYPE_ALPHABET;
use crate::per::descriptor::{
    Asn1Type, CharacterPolicy, CharacterStringDescriptor, ChoiceDescriptor, SequenceDescriptor,
    SizeConstraint, StringKind, alt, field, opt,
};

pub static INDICATION_MESSAGE: ChoiceDescriptor = ChoiceDescriptor {
    name: "IndicationMessage",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_MESSAGE)),
        alt("functionNotUnderstood", Asn1Type::Choice(&FUNCTION_NOT_UNDERSTOOD)),
        alt(
            "masterSlaveDeterminationRelease",
            Asn1Type::Sequence(&MASTER_SLAVE_DETERMINATION_RELEASE),
        ),
        alt(
            "terminalCapabilitySetRelease",
            Asn1Type::Sequence(&TERMINAL_CAPABILITY_SET_RELEASE),
        ),
        alt("openLogicalChannelConfirm", Asn1Type::Sequence(&OPEN_LOGICAL_CHANNEL_CONFIRM)),
        alt(
            "requestChannelCloseRelease",
            Asn1Type::Sequence(&REQUEST_CHANNEL_CLOSE_RELEASE),
        ),
        alt("multiplexEntrySendRelease", Asn1Type::Sequence(&MULTIPLEX_ENTRY_SEND_RELEASE)),
        alt("requestMultiplexEntryRelease", Asn1Type::Sequence(&REQUEST_MULTIPLEX_ENTRY)),
        alt("requestModeRelease", Asn1Type::Sequence(&REQUEST_MODE_RELEASE)),
        alt("miscellaneousIndication", Asn1Type::Sequence(&MISCELLANEOUS_INDICATION)),
        alt("jitterIndication", Asn1Type::Sequence(&JITTER_INDICATION)),
        alt("h223SkewIndication", Asn1Type::Sequence(&SKEW_INDICATION)),
        alt("newATMVCIndication", Asn1Type::Unsupported("NewATMVCIndication")),
        alt("userInput", Asn1Type::Choice(&USER_INPUT_INDICATION)),
    ],
    additions: &[
        alt("h2250MaximumSkewIndication", Asn1Type::Sequence(&MAXIMUM_SKEW_INDICATION)),
        alt("mcLocationIndication", Asn1Type::Sequence(&MC_LOCATION_INDICATION)),
        alt("conferenceIndication", Asn1Type::Unsupported("ConferenceIndication")),
        alt("vendorIdentification", Asn1Type::Sequence(&VENDOR_IDENTIFICATION)),
        alt("functionNotSupported", Asn1Type::Sequence(&FUNCTION_NOT_SUPPORTED)),
        alt("multilinkIndication", Asn1Type::Unsupported("MultilinkIndication")),
        alt("logicalChannelRateRelease", Asn1Type::Sequence(&LOGICAL_CHANNEL_RATE_RELEASE)),
        alt("flowControlIndication", Asn1Type::Sequence(&FLOW_CONTROL)),
        alt(
            "mobileMultilinkReconfigurationIndication",
            Asn1Type::Unsupported("MobileMultilinkReconfigurationIndication"),
        ),
        alt("genericIndication", Asn1Type::Sequence(&GENERIC_MESSAGE)),
    ],
};

/// Echoes back a message the sender did not understand.
pub static FUNCTION_NOT_UNDERSTOOD: ChoiceDescriptor = ChoiceDescriptor {
    name: "FunctionNotUnderstood",
    extensible: false,
    root: &[
        alt("request", Asn1Type::Choice(&REQUEST_MESSAGE)),
        alt("response", Asn1Type::Choice(&RESPONSE_MESSAGE)),
        alt("command", Asn1Type::Choice(&COMMAND_MESSAGE)),
    ],
    additions: &[],
};

pub static MASTER_SLAVE_DETERMINATION_RELEASE: SequenceDescriptor = SequenceDescriptor {
    name: "MasterSlaveDeterminationRelease",
    extensible: true,
    root: &[],
    additions: &[],
};

pub static MULTIPLEX_ENTRY_SEND_RELEASE: SequenceDescriptor = SequenceDescriptor {
    name: "MultiplexEntrySendRelease",
    extensible: true,
    root: &[field(
        "multiplexTableEntryNumber",
        Asn1Type::SequenceOf(&MULTIPLEX_TABLE_ENTRY_NUMBERS),
    )],
    additions: &[],
};

pub static REQUEST_MODE_RELEASE: SequenceDescriptor = SequenceDescriptor {
    name: "RequestModeRelease",
    extensible: true,
    root: &[],
    additions: &[],
};

pub static LOGICAL_CHANNEL_RATE_RELEASE: SequenceDescriptor = SequenceDescriptor {
    name: "LogicalChannelRateRelease",
    extensible: true,
    root: &[],
    additions: &[],
};

pub static MISCELLANEOUS_INDICATION: SequenceDescriptor = SequenceDescriptor {
    name: "MiscellaneousIndication",
    extensible: true,
    root: &[
        field("logicalChannelNumber", LOGICAL_CHANNEL_NUMBER),
        field("type", Asn1Type::Choice(&MISCELLANEOUS_INDICATION_TYPE)),
    ],
    additions: &[],
};

static MISCELLANEOUS_INDICATION_TYPE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Type",
    extensible: true,
    root: &[
        alt("logicalChannelActive", Asn1Type::Null),
        alt("logicalChannelInactive", Asn1Type::Null),
        alt("multipointConference", Asn1Type::Null),
        alt("cancelMultipointConference", Asn1Type::Null),
        alt("multipointZeroComm", Asn1Type::Null),
        alt("cancelMultipointZeroComm", Asn1Type::Null),
        alt("multipointSecondaryStatus", Asn1Type::Null),
        alt("cancelMultipointSecondaryStatus", Asn1Type::Null),
        alt("videoIndicateReadyToActivate", Asn1Type::Null),
        alt("videoTemporalSpatialTradeOff", Asn1Type::int(0, 31)),
    ],
    additions: &[
        alt("videoNotDecodedMBs", Asn1Type::Sequence(&VIDEO_NOT_DECODED_MBS)),
        alt("transportCapability", Asn1Type::Unsupported("TransportCapability")),
    ],
};

static VIDEO_NOT_DECODED_MBS: SequenceDescriptor = SequenceDescriptor {
    name: "VideoNotDecodedMBs",
    extensible: true,
    root: &[
        field("firstMB", Asn1Type::int(1, 8192)),
        field("numberOfMBs", Asn1Type::int(1, 8192)),
        field("temporalReference", Asn1Type::int(0, 255)),
    ],
    additions: &[],
};

pub static JITTER_INDICATION: SequenceDescriptor = SequenceDescriptor {
    name: "JitterIndication",
    extensible: true,
    root: &[
        field("scope", Asn1Type::Choice(&FLOW_CONTROL_SCOPE)),
        field("estimatedReceivedJitterMantissa", Asn1Type::int(0, 3)),
        field("estimatedReceivedJitterExponent", Asn1Type::int(0, 7)),
        opt("skippedFrameCount", Asn1Type::int(0, 15)),
        opt("additionalDecoderBuffer", Asn1Type::int(0, 262_143)),
    ],
    additions: &[],
};

/// `H223SkewIndication`.
pub static SKEW_INDICATION: SequenceDescriptor = SequenceDescriptor {
    name: "H223SkewIndication",
    extensible: true,
    root: &[
        field("logicalChannelNumber1", LOGICAL_CHANNEL_NUMBER),
        field("logicalChannelNumber2", LOGICAL_CHANNEL_NUMBER),
        field("skew", Asn1Type::int(0, 4095)),
    ],
    additions: &[],
};

pub static MAXIMUM_SKEW_INDICATION: SequenceDescriptor = SequenceDescriptor {
    name: "H2250MaximumSkewIndication",
    extensible: true,
    root: &[
        field("logicalChannelNumber1", LOGICAL_CHANNEL_NUMBER),
        field("logicalChannelNumber2", LOGICAL_CHANNEL_NUMBER),
        field("maximumSkew", Asn1Type::int(0, 4095)),
    ],
    additions: &[],
};

pub static MC_LOCATION_INDICATION: SequenceDescriptor = SequenceDescriptor {
    name: "MCLocationIndication",
    extensible: true,
    root: &[field("signalAddress", Asn1Type::Choice(&TRANSPORT_ADDRESS))],
    additions: &[],
};

pub static VENDOR_IDENTIFICATION: SequenceDescriptor = SequenceDescriptor {
    name: "VendorIdentification",
    extensible: true,
    root: &[
        field("vendor", Asn1Type::Choice(&NON_STANDARD_IDENTIFIER)),
        opt("productNumber", Asn1Type::sized_octets(1, 256)),
        opt("versionNumber", Asn1Type::sized_octets(1, 256)),
    ],
    additions: &[],
};

pub static FUNCTION_NOT_SUPPORTED: SequenceDescriptor = SequenceDescriptor {
    name: "FunctionNotSupported",
    extensible: true,
    root: &[
        field("cause", Asn1Type::Choice(&FUNCTION_NOT_SUPPORTED_CAUSE)),
        opt("returnedFunction", Asn1Type::octets()),
    ],
    additions: &[],
};

static FUNCTION_NOT_SUPPORTED_CAUSE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Cause",
    extensible: true,
    root: &[
        alt("syntaxError", Asn1Type::Null),
        alt("semanticError", Asn1Type::Null),
        alt("unknownFunction", Asn1Type::Null),
    ],
    additions: &[],
};

// User input

pub static USER_INPUT_INDICATION: ChoiceDescriptor = ChoiceDescriptor {
    name: "UserInputIndication",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("alphanumeric", Asn1Type::general_string()),
    ],
    additions: &[
        alt(
            "userInputSupportIndication",
            Asn1Type::Choice(&USER_INPUT_SUPPORT_INDICATION),
        ),
        alt("signal", Asn1Type::Sequence(&SIGNAL)),
        alt("signalUpdate", Asn1Type::Sequence(&SIGNAL_UPDATE)),
        alt("extendedAlphanumeric", Asn1Type::Unsupported("ExtendedAlphanumeric")),
        alt("encryptedAlphanumeric", Asn1Type::Unsupported("EncryptedAlphanumeric")),
        alt("genericInformation", Asn1Type::SequenceOf(&GENERIC_INFORMATION)),
    ],
};

static USER_INPUT_SUPPORT_INDICATION: ChoiceDescriptor = ChoiceDescriptor {
    name: "UserInputSupportIndication",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("basicString", Asn1Type::Null),
        alt("iA5String", Asn1Type::Null),
        alt("generalString", Asn1Type::Null),
    ],
    additions: &[
        alt("encryptedBasicString", Asn1Type::Null),
        alt("encryptedIA5String", Asn1Type::Null),
        alt("encryptedGeneralString", Asn1Type::Null),
    ],
};

/// `signalType IA5String (SIZE (1) ^ FROM ("0123456789#*ABCD!"))`.
pub const SIGNAL_TYPE: Asn1Type = Asn1Type::CharacterString(CharacterStringDescriptor {
    kind: StringKind::Ia5String,
    size: SizeConstraint::fixed(1),
    alphabet: Some(H245_SIGNAL_TYPE_ALPHABET),
    policy: CharacterPolicy::SignalType,
});

pub static SIGNAL: SequenceDescriptor = SequenceDescriptor {
    name: "Signal",
    extensible: true,
    root: &[
        field("signalType", SIGNAL_TYPE),
        opt("duration", Asn1Type::int(1, 65535)),
        opt("rtp", Asn1Type::Sequence(&SIGNAL_RTP)),
    ],
    additions: &[
        opt("rtpPayloadIndication", Asn1Type::Null),
        opt("paramS", Asn1Type::Unsupported("Params")),
        opt("encryptedSignalType", Asn1Type::fixed_octets(1)),
        opt("algorithmOID", Asn1Type::ObjectIdentifier),
    ],
};

static SIGNAL_RTP: SequenceDescriptor = SequenceDescriptor {
    name: "Rtp",
    extensible: true,
    root: &[
        opt("timestamp", Asn1Type::int(0, 4_294_967_295)),
        opt("expirationTime", Asn1Type::int(0, 4_294_967_295)),
        field("logicalChannelNumber", LOGICAL_CHANNEL_NUMBER),
    ],
    additions: &[],
};

pub static SIGNAL_UPDATE: SequenceDescriptor = SequenceDescriptor {
    name: "SignalUpdate",
    extensible: true,
    root: &[
        field("duration", Asn1Type::int(1, 65535)),
        opt("rtp", Asn1Type::Sequence(&SIGNAL_UPDATE_RTP)),
    ],
    additions: &[opt("rtpPayloadIndication", Asn1Type::Null)],
};

static SIGNAL_UPDATE_RTP: SequenceDescriptor = SequenceDescriptor {
    name: "Rtp",
    extensible: true,
    root: &[field("logicalChannelNumber", LOGICAL_CHANNEL_NUMBER)],
    additions: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Alignment, DecoderConfig, SignalTypeEncoding};
    use crate::per::evaluator::decode_value;
    use crate::per::value::Value;

    fn signal_type_of(data: &[u8], config: &DecoderConfig) -> (String, usize) {
        let decoded = decode_value(data, &Asn1Type::Sequence(&SIGNAL), config).unwrap();
        let text = decoded
            .value
            .field("signalType")
            .and_then(Value::as_str)
            .unwrap()
            .to_owned();
        (text, decoded.bit_len)
    }

    // The formal `signalType` alphabet and captured traffic disagree on the
    // character width; both readings are pinned down here.
    #[test]
    fn signal_type_aligned_uses_raw_code() {
        // ext 0, bitmap 00, '5' = 0x35 unpadded.
        let (text, bits) = signal_type_of(&[0b0000_0110, 0b1010_0000], &DecoderConfig::default());
        assert_eq!(text, "5");
        assert_eq!(bits, 11);
    }

    #[test]
    fn signal_type_unaligned_uses_alphabet_index() {
        let config = DecoderConfig::default().with_alignment(Alignment::Unaligned);
        // ext 0, bitmap 00, index 8 in 5 bits.
        let (text, bits) = signal_type_of(&[0b0000_1000], &config);
        assert_eq!(text, "5");
        assert_eq!(bits, 8);
    }

    #[test]
    fn signal_type_octet_mode_ignores_alphabet() {
        let config = DecoderConfig::default()
            .with_alignment(Alignment::Unaligned)
            .with_signal_type(SignalTypeEncoding::Ia5Octet);
        let (text, bits) = signal_type_of(&[0b0000_0110, 0b1010_0000], &config);
        assert_eq!(text, "5");
        assert_eq!(bits, 11);
    }

    #[test]
    fn jitter_indication_with_optional_count() {
        // ext 0, bitmap 10, scope index 2 (wholeMultiplex), mantissa 2,
        // exponent 5, skippedFrameCount 9.
        let data = [0b0101_0101, 0b0110_0100];
        let decoded = decode_value(
            &data,
            &Asn1Type::Sequence(&JITTER_INDICATION),
            &DecoderConfig::default(),
        )
        .unwrap();
        assert_eq!(
            decoded.value.get("scope").and_then(Value::choice_label),
            Some("wholeMultiplex")
        );
        assert_eq!(
            decoded.value.field("estimatedReceivedJitterExponent").and_then(Value::as_integer),
            Some(5)
        );
        assert_eq!(
            decoded.value.field("skippedFrameCount").and_then(Value::as_integer),
            Some(9)
        );
        assert!(decoded.value.field("additionalDecoderBuffer").is_none());
        assert_eq!(decoded.bit_len, 14);
    }
}
