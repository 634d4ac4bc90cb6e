//! Logical channel signalling: open, close and channel-close requests, with the
//! H.225.0 media transport parameters.

use super::capability::{
    AUDIO_CAPABILITY, DATA_APPLICATION_CAPABILITY, RTP_PAYLOAD_TYPE, VIDEO_CAPABILITY,
};
use super::common::{
    GENERIC_INFORMATION, GENERIC_PARAMETERS, LOGICAL_CHANNEL_NUMBER, NON_STANDARD_PARAMETER,
    NON_STANDARD_PARAMETERS, TERMINAL_LABEL, TRANSPORT_ADDRESS,
};
use crate::per::descriptor::{
    Asn1Type, ChoiceDescriptor, FieldRole, SequenceDescriptor, SequenceOfDescriptor, SizeConstraint,
    alt, field, opt,
};
use crate::traits::TransportKind;

const PORT_NUMBER: Asn1Type = Asn1Type::int(0, 65535);
const DYNAMIC_RTP_PAYLOAD_TYPE: Asn1Type = Asn1Type::int(96, 127);

pub static OPEN_LOGICAL_CHANNEL: SequenceDescriptor = SequenceDescriptor {
    name: "OpenLogicalChannel",
    extensible: true,
    root: &[
        field("forwardLogicalChannelNumber", LOGICAL_CHANNEL_NUMBER),
        field(
            "forwardLogicalChannelParameters",
            Asn1Type::Sequence(&FORWARD_LOGICAL_CHANNEL_PARAMETERS),
        ),
        opt(
            "reverseLogicalChannelParameters",
            Asn1Type::Sequence(&REVERSE_LOGICAL_CHANNEL_PARAMETERS),
        ),
    ],
    additions: &[
        opt("separateStack", Asn1Type::Unsupported("NetworkAccessParameters")),
        opt("encryptionSync", Asn1Type::Sequence(&ENCRYPTION_SYNC)),
        opt("genericInformation", Asn1Type::SequenceOf(&GENERIC_INFORMATION)),
    ],
};

static FORWARD_LOGICAL_CHANNEL_PARAMETERS: SequenceDescriptor = SequenceDescriptor {
    name: "ForwardLogicalChannelParameters",
    extensible: true,
    root: &[
        opt("portNumber", PORT_NUMBER),
        field("dataType", Asn1Type::Choice(&DATA_TYPE)),
        field(
            "multiplexParameters",
            Asn1Type::Choice(&FORWARD_MULTIPLEX_PARAMETERS),
        ),
    ],
    additions: &[
        opt("forwardLogicalChannelDependency", LOGICAL_CHANNEL_NUMBER),
        opt("replacementFor", LOGICAL_CHANNEL_NUMBER),
    ],
};

static FORWARD_MULTIPLEX_PARAMETERS: ChoiceDescriptor = ChoiceDescriptor {
    name: "MultiplexParameters",
    extensible: true,
    root: &[
        alt(
            "h222LogicalChannelParameters",
            Asn1Type::Unsupported("H222LogicalChannelParameters"),
        ),
        alt(
            "h223LogicalChannelParameters",
            Asn1Type::Unsupported("H223LogicalChannelParameters"),
        ),
        alt(
            "v76LogicalChannelParameters",
            Asn1Type::Unsupported("V76LogicalChannelParameters"),
        ),
    ],
    additions: &[
        alt(
            "h2250LogicalChannelParameters",
            Asn1Type::Sequence(&H2250_LOGICAL_CHANNEL_PARAMETERS),
        ),
        alt("none", Asn1Type::Null),
    ],
};

static REVERSE_LOGICAL_CHANNEL_PARAMETERS: SequenceDescriptor = SequenceDescriptor {
    name: "ReverseLogicalChannelParameters",
    extensible: true,
    root: &[
        field("dataType", Asn1Type::Choice(&DATA_TYPE)),
        opt(
            "multiplexParameters",
            Asn1Type::Choice(&REVERSE_MULTIPLEX_PARAMETERS),
        ),
    ],
    additions: &[
        opt("reverseLogicalChannelDependency", LOGICAL_CHANNEL_NUMBER),
        opt("replacementFor", LOGICAL_CHANNEL_NUMBER),
    ],
};

static REVERSE_MULTIPLEX_PARAMETERS: ChoiceDescriptor = ChoiceDescriptor {
    name: "MultiplexParameters",
    extensible: true,
    root: &[
        alt(
            "h223LogicalChannelParameters",
            Asn1Type::Unsupported("H223LogicalChannelParameters"),
        ),
        alt(
            "v76LogicalChannelParameters",
            Asn1Type::Unsupported("V76LogicalChannelParameters"),
        ),
    ],
    additions: &[alt(
        "h2250LogicalChannelParameters",
        Asn1Type::Sequence(&H2250_LOGICAL_CHANNEL_PARAMETERS),
    )],
};

pub static DATA_TYPE: ChoiceDescriptor = ChoiceDescriptor {
    name: "DataType",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("nullData", Asn1Type::Null),
        alt("videoData", Asn1Type::Choice(&VIDEO_CAPABILITY)),
        alt("audioData", Asn1Type::Choice(&AUDIO_CAPABILITY)),
        alt("data", Asn1Type::Sequence(&DATA_APPLICATION_CAPABILITY)),
        alt("encryptionData", Asn1Type::Unsupported("EncryptionMode")),
    ],
    additions: &[
        alt("h235Control", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("h235Media", Asn1Type::Unsupported("H235Media")),
        alt("multiplexedStream", Asn1Type::Unsupported("MultiplexedStreamParameter")),
        alt("redundancyEncoding", Asn1Type::Unsupported("RedundancyEncoding")),
        alt("multiplePayloadStream", Asn1Type::Unsupported("MultiplePayloadStream")),
        alt("depFec", Asn1Type::Unsupported("DepFECData")),
        alt("fec", Asn1Type::Unsupported("FECData")),
    ],
};

/// `H2250LogicalChannelParameters`. The media and media control channels are
/// reported to the media endpoint sink.
pub static H2250_LOGICAL_CHANNEL_PARAMETERS: SequenceDescriptor = SequenceDescriptor {
    name: "H2250LogicalChannelParameters",
    extensible: true,
    root: &[
        opt("nonStandard", Asn1Type::SequenceOf(&NON_STANDARD_PARAMETERS)),
        field("sessionID", Asn1Type::int(0, 255)),
        opt("associatedSessionID", Asn1Type::int(1, 255)),
        opt("mediaChannel", Asn1Type::Choice(&TRANSPORT_ADDRESS))
            .with_role(FieldRole::MediaChannel(TransportKind::Rtp)),
        opt("mediaGuaranteedDelivery", Asn1Type::Boolean),
        opt("mediaControlChannel", Asn1Type::Choice(&TRANSPORT_ADDRESS))
            .with_role(FieldRole::MediaChannel(TransportKind::Rtcp)),
        opt("mediaControlGuaranteedDelivery", Asn1Type::Boolean),
        opt("silenceSuppression", Asn1Type::Boolean),
        opt("destination", Asn1Type::Sequence(&TERMINAL_LABEL)),
        opt("dynamicRTPPayloadType", DYNAMIC_RTP_PAYLOAD_TYPE),
        opt("mediaPacketization", Asn1Type::Choice(&MEDIA_PACKETIZATION)),
    ],
    additions: &[
        opt("transportCapability", Asn1Type::Unsupported("TransportCapability")),
        opt("redundancyEncoding", Asn1Type::Unsupported("RedundancyEncoding")),
        opt("source", Asn1Type::Sequence(&TERMINAL_LABEL)),
    ],
};

static MEDIA_PACKETIZATION: ChoiceDescriptor = ChoiceDescriptor {
    name: "MediaPacketization",
    extensible: true,
    root: &[alt("h261aVideoPacketization", Asn1Type::Null)],
    additions: &[alt("rtpPayloadType", Asn1Type::Sequence(&RTP_PAYLOAD_TYPE))],
};

/// `H2250LogicalChannelAckParameters`. The media and media control channels are
/// reported to the media endpoint sink.
pub static H2250_LOGICAL_CHANNEL_ACK_PARAMETERS: SequenceDescriptor = SequenceDescriptor {
    name: "H2250LogicalChannelAckParameters",
    extensible: true,
    root: &[
        opt("nonStandard", Asn1Type::SequenceOf(&NON_STANDARD_PARAMETERS)),
        opt("sessionID", Asn1Type::int(1, 255)),
        opt("mediaChannel", Asn1Type::Choice(&TRANSPORT_ADDRESS))
            .with_role(FieldRole::MediaChannel(TransportKind::Rtp)),
        opt("mediaControlChannel", Asn1Type::Choice(&TRANSPORT_ADDRESS))
            .with_role(FieldRole::MediaChannel(TransportKind::Rtcp)),
        opt("dynamicRTPPayloadType", DYNAMIC_RTP_PAYLOAD_TYPE),
    ],
    additions: &[
        field("flowControlToZero", Asn1Type::Boolean),
        opt("portNumber", PORT_NUMBER),
    ],
};

// Encryption synchronisation

pub static ENCRYPTION_SYNC: SequenceDescriptor = SequenceDescriptor {
    name: "EncryptionSync",
    extensible: true,
    root: &[
        opt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        field("synchFlag", Asn1Type::int(0, 255)),
        field("h235Key", Asn1Type::sized_octets(1, 65535)),
        opt("escrowentry", Asn1Type::SequenceOf(&ESCROW_ENTRIES)),
    ],
    additions: &[opt("genericParameter", Asn1Type::SequenceOf(&GENERIC_PARAMETERS))],
};

static ESCROW_ENTRIES: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::Sequence(&ESCROW_DATA),
    size: SizeConstraint::range(1, 256),
    set_of: false,
};

static ESCROW_DATA: SequenceDescriptor = SequenceDescriptor {
    name: "EscrowData",
    extensible: true,
    root: &[
        field("escrowID", Asn1Type::ObjectIdentifier),
        field(
            "escrowValue",
            Asn1Type::Deferred {
                reason: "EscrowData.escrowValue",
                ty: &ESCROW_VALUE,
            },
        ),
    ],
    additions: &[],
};

static ESCROW_VALUE: Asn1Type = Asn1Type::BitString(SizeConstraint::range(1, 65535));

// Acknowledgement, rejection and confirmation

pub static OPEN_LOGICAL_CHANNEL_ACK: SequenceDescriptor = SequenceDescriptor {
    name: "OpenLogicalChannelAck",
    extensible: true,
    root: &[
        field("forwardLogicalChannelNumber", LOGICAL_CHANNEL_NUMBER),
        opt(
            "reverseLogicalChannelParameters",
            Asn1Type::Sequence(&ACK_REVERSE_LOGICAL_CHANNEL_PARAMETERS),
        ),
    ],
    additions: &[
        opt("separateStack", Asn1Type::Unsupported("NetworkAccessParameters")),
        opt(
            "forwardMultiplexAckParameters",
            Asn1Type::Choice(&FORWARD_MULTIPLEX_ACK_PARAMETERS),
        ),
        opt("encryptionSync", Asn1Type::Sequence(&ENCRYPTION_SYNC)),
        opt("genericInformation", Asn1Type::SequenceOf(&GENERIC_INFORMATION)),
    ],
};

static ACK_REVERSE_LOGICAL_CHANNEL_PARAMETERS: SequenceDescriptor = SequenceDescriptor {
    name: "ReverseLogicalChannelParameters",
    extensible: true,
    root: &[
        field("reverseLogicalChannelNumber", LOGICAL_CHANNEL_NUMBER),
        opt("portNumber", PORT_NUMBER),
        opt(
            "multiplexParameters",
            Asn1Type::Choice(&ACK_REVERSE_MULTIPLEX_PARAMETERS),
        ),
    ],
    additions: &[opt("replacementFor", LOGICAL_CHANNEL_NUMBER)],
};

static ACK_REVERSE_MULTIPLEX_PARAMETERS: ChoiceDescriptor = ChoiceDescriptor {
    name: "MultiplexParameters",
    extensible: true,
    root: &[alt(
        "h222LogicalChannelParameters",
        Asn1Type::Unsupported("H222LogicalChannelParameters"),
    )],
    additions: &[alt(
        "h2250LogicalChannelParameters",
        Asn1Type::Sequence(&H2250_LOGICAL_CHANNEL_PARAMETERS),
    )],
};

static FORWARD_MULTIPLEX_ACK_PARAMETERS: ChoiceDescriptor = ChoiceDescriptor {
    name: "ForwardMultiplexAckParameters",
    extensible: true,
    root: &[alt(
        "h2250LogicalChannelAckParameters",
        Asn1Type::Sequence(&H2250_LOGICAL_CHANNEL_ACK_PARAMETERS),
    )],
    additions: &[],
};

pub static OPEN_LOGICAL_CHANNEL_REJECT: SequenceDescriptor = SequenceDescriptor {
    name: "OpenLogicalChannelReject",
    extensible: true,
    root: &[
        field("forwardLogicalChannelNumber", LOGICAL_CHANNEL_NUMBER),
        field("cause", Asn1Type::Choice(&OPEN_LOGICAL_CHANNEL_REJECT_CAUSE)),
    ],
    additions: &[opt("genericInformation", Asn1Type::SequenceOf(&GENERIC_INFORMATION))],
};

static OPEN_LOGICAL_CHANNEL_REJECT_CAUSE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Cause",
    extensible: true,
    root: &[
        alt("unspecified", Asn1Type::Null),
        alt("unsuitableReverseParameters", Asn1Type::Null),
        alt("dataTypeNotSupported", Asn1Type::Null),
        alt("dataTypeNotAvailable", Asn1Type::Null),
        alt("unknownDataType", Asn1Type::Null),
        alt("dataTypeALCombinationNotSupported", Asn1Type::Null),
    ],
    additions: &[
        alt("multicastChannelNotAllowed", Asn1Type::Null),
        alt("insufficientBandwidth", Asn1Type::Null),
        alt("separateStackEstablishmentFailed", Asn1Type::Null),
        alt("invalidSessionID", Asn1Type::Null),
        alt("masterSlaveConflict", Asn1Type::Null),
        alt("waitForCommunicationMode", Asn1Type::Null),
        alt("invalidDependentChannel", Asn1Type::Null),
        alt("replacementForRejected", Asn1Type::Null),
        alt("securityDenied", Asn1Type::Null),
        alt("qoSControlNotSupported", Asn1Type::Null),
    ],
};

pub static OPEN_LOGICAL_CHANNEL_CONFIRM: SequenceDescriptor = SequenceDescriptor {
    name: "OpenLogicalChannelConfirm",
    extensible: true,
    root: &[field("forwardLogicalChannelNumber", LOGICAL_CHANNEL_NUMBER)],
    additions: &[opt("genericInformation", Asn1Type::SequenceOf(&GENERIC_INFORMATION))],
};

// Closing

pub static CLOSE_LOGICAL_CHANNEL: SequenceDescriptor = SequenceDescriptor {
    name: "CloseLogicalChannel",
    extensible: true,
    root: &[
        field("forwardLogicalChannelNumber", LOGICAL_CHANNEL_NUMBER),
        field("source", Asn1Type::Choice(&CLOSE_SOURCE)),
    ],
    additions: &[field("reason", Asn1Type::Choice(&CLOSE_REASON))],
};

static CLOSE_SOURCE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Source",
    extensible: false,
    root: &[alt("user", Asn1Type::Null), alt("lcse", Asn1Type::Null)],
    additions: &[],
};

static CLOSE_REASON: ChoiceDescriptor = ChoiceDescriptor {
    name: "Reason",
    extensible: true,
    root: &[
        alt("unknown", Asn1Type::Null),
        alt("reopen", Asn1Type::Null),
        alt("reservationFailure", Asn1Type::Null),
    ],
    additions: &[],
};

pub static CLOSE_LOGICAL_CHANNEL_ACK: SequenceDescriptor = SequenceDescriptor {
    name: "CloseLogicalChannelAck",
    extensible: true,
    root: &[field("forwardLogicalChannelNumber", LOGICAL_CHANNEL_NUMBER)],
    additions: &[],
};

pub static REQUEST_CHANNEL_CLOSE: SequenceDescriptor = SequenceDescriptor {
    name: "RequestChannelClose",
    extensible: true,
    root: &[field("forwardLogicalChannelNumber", LOGICAL_CHANNEL_NUMBER)],
    additions: &[
        opt("qosCapability", Asn1Type::Unsupported("QOSCapability")),
        field("reason", Asn1Type::Choice(&REQUEST_CHANNEL_CLOSE_REASON)),
    ],
};

static REQUEST_CHANNEL_CLOSE_REASON: ChoiceDescriptor = ChoiceDescriptor {
    name: "Reason",
    extensible: true,
    root: &[
        alt("unknown", Asn1Type::Null),
        alt("normal", Asn1Type::Null),
        alt("reopen", Asn1Type::Null),
        alt("reservationFailure", Asn1Type::Null),
    ],
    additions: &[],
};

pub static REQUEST_CHANNEL_CLOSE_ACK: SequenceDescriptor = SequenceDescriptor {
    name: "RequestChannelCloseAck",
    extensible: true,
    root: &[field("forwardLogicalChannelNumber", LOGICAL_CHANNEL_NUMBER)],
    additions: &[],
};

pub static REQUEST_CHANNEL_CLOSE_REJECT: SequenceDescriptor = SequenceDescriptor {
    name: "RequestChannelCloseReject",
    extensible: true,
    root: &[
        field("forwardLogicalChannelNumber", LOGICAL_CHANNEL_NUMBER),
        field("cause", Asn1Type::Choice(&UNSPECIFIED_CAUSE)),
    ],
    additions: &[],
};

static UNSPECIFIED_CAUSE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Cause",
    extensible: true,
    root: &[alt("unspecified", Asn1Type::Null)],
    additions: &[],
};

pub static REQUEST_CHANNEL_CLOSE_RELEASE: SequenceDescriptor = SequenceDescriptor {
    name: "RequestChannelCloseRelease",
    extensible: true,
    root: &[field("forwardLogicalChannelNumber", LOGICAL_CHANNEL_NUMBER)],
    additions: &[],
};
