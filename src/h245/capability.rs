//! Terminal capability exchange: `TerminalCapabilitySet` and the capability
//! descriptions it carries.

use super::common::{
    CAPABILITY_DESCRIPTOR_NUMBER, CAPABILITY_TABLE_ENTRY_NUMBER, GENERIC_CAPABILITY,
    GENERIC_INFORMATION, MAXIMUM_BIT_RATE, NON_STANDARD_PARAMETER, SEQUENCE_NUMBER,
};
use crate::per::descriptor::{
    Asn1Type, ChoiceDescriptor, ConstraintRange, SequenceDescriptor, SequenceOfDescriptor,
    SizeConstraint, alt, field, opt,
};

const AUDIO_FRAMES: Asn1Type = Asn1Type::int(1, 256);

pub static TERMINAL_CAPABILITY_SET: SequenceDescriptor = SequenceDescriptor {
    name: "TerminalCapabilitySet",
    extensible: true,
    root: &[
        field("sequenceNumber", SEQUENCE_NUMBER),
        field("protocolIdentifier", Asn1Type::ObjectIdentifier),
        opt("multiplexCapability", Asn1Type::Choice(&MULTIPLEX_CAPABILITY)),
        opt("capabilityTable", Asn1Type::SequenceOf(&CAPABILITY_TABLE)),
        opt("capabilityDescriptors", Asn1Type::SequenceOf(&CAPABILITY_DESCRIPTORS)),
    ],
    additions: &[opt("genericInformation", Asn1Type::SequenceOf(&GENERIC_INFORMATION))],
};

static CAPABILITY_TABLE: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::Sequence(&CAPABILITY_TABLE_ENTRY),
    size: SizeConstraint::range(1, 256),
    set_of: true,
};

static CAPABILITY_TABLE_ENTRY: SequenceDescriptor = SequenceDescriptor {
    name: "CapabilityTableEntry",
    extensible: false,
    root: &[
        field("capabilityTableEntryNumber", CAPABILITY_TABLE_ENTRY_NUMBER),
        opt("capability", Asn1Type::Choice(&CAPABILITY)),
    ],
    additions: &[],
};

static CAPABILITY_DESCRIPTORS: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::Sequence(&CAPABILITY_DESCRIPTOR),
    size: SizeConstraint::range(1, 256),
    set_of: true,
};

static CAPABILITY_DESCRIPTOR: SequenceDescriptor = SequenceDescriptor {
    name: "CapabilityDescriptor",
    extensible: false,
    root: &[
        field("capabilityDescriptorNumber", CAPABILITY_DESCRIPTOR_NUMBER),
        opt(
            "simultaneousCapabilities",
            Asn1Type::SequenceOf(&SIMULTANEOUS_CAPABILITIES),
        ),
    ],
    additions: &[],
};

static SIMULTANEOUS_CAPABILITIES: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::SequenceOf(&ALTERNATIVE_CAPABILITY_SET),
    size: SizeConstraint::range(1, 256),
    set_of: true,
};

static ALTERNATIVE_CAPABILITY_SET: SequenceOfDescriptor = SequenceOfDescriptor {
    element: CAPABILITY_TABLE_ENTRY_NUMBER,
    size: SizeConstraint::range(1, 256),
    set_of: false,
};

pub static TERMINAL_CAPABILITY_SET_ACK: SequenceDescriptor = SequenceDescriptor {
    name: "TerminalCapabilitySetAck",
    extensible: true,
    root: &[field("sequenceNumber", SEQUENCE_NUMBER)],
    additions: &[opt("genericInformation", Asn1Type::SequenceOf(&GENERIC_INFORMATION))],
};

pub static TERMINAL_CAPABILITY_SET_REJECT: SequenceDescriptor = SequenceDescriptor {
    name: "TerminalCapabilitySetReject",
    extensible: true,
    root: &[
        field("sequenceNumber", SEQUENCE_NUMBER),
        field("cause", Asn1Type::Choice(&TCS_REJECT_CAUSE)),
    ],
    additions: &[opt("genericInformation", Asn1Type::SequenceOf(&GENERIC_INFORMATION))],
};

static TCS_REJECT_CAUSE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Cause",
    extensible: true,
    root: &[
        alt("unspecified", Asn1Type::Null),
        alt("undefinedTableEntryUsed", Asn1Type::Null),
        alt("descriptorCapacityExceeded", Asn1Type::Null),
        alt("tableEntryCapacityExceeded", Asn1Type::Choice(&TABLE_ENTRY_CAPACITY_EXCEEDED)),
    ],
    additions: &[],
};

static TABLE_ENTRY_CAPACITY_EXCEEDED: ChoiceDescriptor = ChoiceDescriptor {
    name: "TableEntryCapacityExceeded",
    extensible: false,
    root: &[
        alt("highestEntryNumberProcessed", CAPABILITY_TABLE_ENTRY_NUMBER),
        alt("noneProcessed", Asn1Type::Null),
    ],
    additions: &[],
};

pub static TERMINAL_CAPABILITY_SET_RELEASE: SequenceDescriptor = SequenceDescriptor {
    name: "TerminalCapabilitySetRelease",
    extensible: true,
    root: &[],
    additions: &[opt("genericInformation", Asn1Type::SequenceOf(&GENERIC_INFORMATION))],
};

pub static SEND_TERMINAL_CAPABILITY_SET: ChoiceDescriptor = ChoiceDescriptor {
    name: "SendTerminalCapabilitySet",
    extensible: true,
    root: &[
        alt("specificRequest", Asn1Type::Sequence(&SPECIFIC_REQUEST)),
        alt("genericRequest", Asn1Type::Null),
    ],
    additions: &[],
};

static SPECIFIC_REQUEST: SequenceDescriptor = SequenceDescriptor {
    name: "SpecificRequest",
    extensible: true,
    root: &[
        field("multiplexCapability", Asn1Type::Boolean),
        opt(
            "capabilityTableEntryNumbers",
            Asn1Type::SequenceOf(&CAPABILITY_TABLE_ENTRY_NUMBERS),
        ),
        opt(
            "capabilityDescriptorNumbers",
            Asn1Type::SequenceOf(&CAPABILITY_DESCRIPTOR_NUMBERS),
        ),
    ],
    additions: &[],
};

static CAPABILITY_TABLE_ENTRY_NUMBERS: SequenceOfDescriptor = SequenceOfDescriptor {
    element: CAPABILITY_TABLE_ENTRY_NUMBER,
    size: SizeConstraint::range(1, 65535),
    set_of: true,
};

static CAPABILITY_DESCRIPTOR_NUMBERS: SequenceOfDescriptor = SequenceOfDescriptor {
    element: CAPABILITY_DESCRIPTOR_NUMBER,
    size: SizeConstraint::range(1, 256),
    set_of: true,
};

// Multiplex capabilities

pub static MULTIPLEX_CAPABILITY: ChoiceDescriptor = ChoiceDescriptor {
    name: "MultiplexCapability",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("h222Capability", Asn1Type::Unsupported("H222Capability")),
        alt("h223Capability", Asn1Type::Unsupported("H223Capability")),
        alt("v76Capability", Asn1Type::Unsupported("V76Capability")),
    ],
    additions: &[
        alt("h2250Capability", Asn1Type::Sequence(&H2250_CAPABILITY)),
        alt("genericMultiplexCapability", Asn1Type::Sequence(&GENERIC_CAPABILITY)),
    ],
};

static H2250_CAPABILITY: SequenceDescriptor = SequenceDescriptor {
    name: "H2250Capability",
    extensible: true,
    root: &[
        field("maximumAudioDelayJitter", Asn1Type::int(0, 1023)),
        field("receiveMultipointCapability", Asn1Type::Sequence(&MULTIPOINT_CAPABILITY)),
        field("transmitMultipointCapability", Asn1Type::Sequence(&MULTIPOINT_CAPABILITY)),
        field(
            "receiveAndTransmitMultipointCapability",
            Asn1Type::Sequence(&MULTIPOINT_CAPABILITY),
        ),
        field("mcCapability", Asn1Type::Sequence(&MC_CAPABILITY)),
        field("rtcpVideoControlCapability", Asn1Type::Boolean),
        field(
            "mediaPacketizationCapability",
            Asn1Type::Sequence(&MEDIA_PACKETIZATION_CAPABILITY),
        ),
    ],
    additions: &[
        opt("transportCapability", Asn1Type::Unsupported("TransportCapability")),
        opt(
            "redundancyEncodingCapability",
            Asn1Type::Unsupported("RedundancyEncodingCapability"),
        ),
        field("logicalChannelSwitchingCapability", Asn1Type::Boolean),
        field("t120DynamicPortCapability", Asn1Type::Boolean),
    ],
};

static MC_CAPABILITY: SequenceDescriptor = SequenceDescriptor {
    name: "McCapability",
    extensible: true,
    root: &[
        field("centralizedConferenceMC", Asn1Type::Boolean),
        field("decentralizedConferenceMC", Asn1Type::Boolean),
    ],
    additions: &[],
};

static MULTIPOINT_CAPABILITY: SequenceDescriptor = SequenceDescriptor {
    name: "MultipointCapability",
    extensible: true,
    root: &[
        field("multicastCapability", Asn1Type::Boolean),
        field("multiUniCastConference", Asn1Type::Boolean),
        field(
            "mediaDistributionCapability",
            Asn1Type::SequenceOf(&MEDIA_DISTRIBUTION_CAPABILITIES),
        ),
    ],
    additions: &[],
};

static MEDIA_DISTRIBUTION_CAPABILITIES: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::Sequence(&MEDIA_DISTRIBUTION_CAPABILITY),
    size: SizeConstraint::UNBOUNDED,
    set_of: false,
};

static MEDIA_DISTRIBUTION_CAPABILITY: SequenceDescriptor = SequenceDescriptor {
    name: "MediaDistributionCapability",
    extensible: true,
    root: &[
        field("centralizedControl", Asn1Type::Boolean),
        field("distributedControl", Asn1Type::Boolean),
        field("centralizedAudio", Asn1Type::Boolean),
        field("distributedAudio", Asn1Type::Boolean),
        field("centralizedVideo", Asn1Type::Boolean),
        field("distributedVideo", Asn1Type::Boolean),
        opt("centralizedData", Asn1Type::SequenceOf(&DATA_APPLICATION_CAPABILITIES)),
        opt("distributedData", Asn1Type::SequenceOf(&DATA_APPLICATION_CAPABILITIES)),
    ],
    additions: &[],
};

static DATA_APPLICATION_CAPABILITIES: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::Sequence(&DATA_APPLICATION_CAPABILITY),
    size: SizeConstraint::UNBOUNDED,
    set_of: false,
};

static MEDIA_PACKETIZATION_CAPABILITY: SequenceDescriptor = SequenceDescriptor {
    name: "MediaPacketizationCapability",
    extensible: true,
    root: &[field("h261aVideoPacketization", Asn1Type::Boolean)],
    additions: &[opt("rtpPayloadType", Asn1Type::SequenceOf(&RTP_PAYLOAD_TYPES))],
};

static RTP_PAYLOAD_TYPES: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::Sequence(&RTP_PAYLOAD_TYPE),
    size: SizeConstraint::range(1, 256),
    set_of: false,
};

pub static RTP_PAYLOAD_TYPE: SequenceDescriptor = SequenceDescriptor {
    name: "RTPPayloadType",
    extensible: true,
    root: &[
        field("payloadDescriptor", Asn1Type::Choice(&PAYLOAD_DESCRIPTOR)),
        opt("payloadType", Asn1Type::int(0, 127)),
    ],
    additions: &[],
};

static PAYLOAD_DESCRIPTOR: ChoiceDescriptor = ChoiceDescriptor {
    name: "PayloadDescriptor",
    extensible: true,
    root: &[
        alt("nonStandardIdentifier", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt(
            "rfc-number",
            Asn1Type::Integer(ConstraintRange::extensible(1, 32768)),
        ),
        alt("oid", Asn1Type::ObjectIdentifier),
    ],
    additions: &[],
};

// Capability

pub static CAPABILITY: ChoiceDescriptor = ChoiceDescriptor {
    name: "Capability",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("receiveVideoCapability", Asn1Type::Choice(&VIDEO_CAPABILITY)),
        alt("transmitVideoCapability", Asn1Type::Choice(&VIDEO_CAPABILITY)),
        alt("receiveAndTransmitVideoCapability", Asn1Type::Choice(&VIDEO_CAPABILITY)),
        alt("receiveAudioCapability", Asn1Type::Choice(&AUDIO_CAPABILITY)),
        alt("transmitAudioCapability", Asn1Type::Choice(&AUDIO_CAPABILITY)),
        alt("receiveAndTransmitAudioCapability", Asn1Type::Choice(&AUDIO_CAPABILITY)),
        alt(
            "receiveDataApplicationCapability",
            Asn1Type::Sequence(&DATA_APPLICATION_CAPABILITY),
        ),
        alt(
            "transmitDataApplicationCapability",
            Asn1Type::Sequence(&DATA_APPLICATION_CAPABILITY),
        ),
        alt(
            "receiveAndTransmitDataApplicationCapability",
            Asn1Type::Sequence(&DATA_APPLICATION_CAPABILITY),
        ),
        alt("h233EncryptionTransmitCapability", Asn1Type::Boolean),
        alt(
            "h233EncryptionReceiveCapability",
            Asn1Type::Sequence(&H233_ENCRYPTION_RECEIVE_CAPABILITY),
        ),
    ],
    additions: &[
        alt("conferenceCapability", Asn1Type::Unsupported("ConferenceCapability")),
        alt("h235SecurityCapability", Asn1Type::Unsupported("H235SecurityCapability")),
        alt("maxPendingReplacementFor", Asn1Type::int(0, 255)),
        alt("receiveUserInputCapability", Asn1Type::Unsupported("UserInputCapability")),
        alt("transmitUserInputCapability", Asn1Type::Unsupported("UserInputCapability")),
        alt(
            "receiveAndTransmitUserInputCapability",
            Asn1Type::Unsupported("UserInputCapability"),
        ),
        alt("genericControlCapability", Asn1Type::Sequence(&GENERIC_CAPABILITY)),
        alt(
            "receiveMultiplexedStreamCapability",
            Asn1Type::Unsupported("MultiplexedStreamCapability"),
        ),
        alt(
            "transmitMultiplexedStreamCapability",
            Asn1Type::Unsupported("MultiplexedStreamCapability"),
        ),
        alt(
            "receiveAndTransmitMultiplexedStreamCapability",
            Asn1Type::Unsupported("MultiplexedStreamCapability"),
        ),
        alt(
            "receiveRTPAudioTelephonyEventCapability",
            Asn1Type::Unsupported("AudioTelephonyEventCapability"),
        ),
        alt(
            "receiveRTPAudioToneCapability",
            Asn1Type::Unsupported("AudioToneCapability"),
        ),
        alt("depFecCapability", Asn1Type::Unsupported("DepFECCapability")),
        alt(
            "multiplePayloadStreamCapability",
            Asn1Type::Unsupported("MultiplePayloadStreamCapability"),
        ),
        alt("fecCapability", Asn1Type::Unsupported("FECCapability")),
        alt("redundancyEncodingCap", Asn1Type::Unsupported("RedundancyEncodingCapability")),
        alt("oneOfCapabilities", Asn1Type::Unsupported("AlternativeCapabilitySet")),
    ],
};

static H233_ENCRYPTION_RECEIVE_CAPABILITY: SequenceDescriptor = SequenceDescriptor {
    name: "H233EncryptionReceiveCapability",
    extensible: true,
    root: &[field("h233IVResponseTime", Asn1Type::int(0, 255))],
    additions: &[],
};

// Audio

pub static AUDIO_CAPABILITY: ChoiceDescriptor = ChoiceDescriptor {
    name: "AudioCapability",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("g711Alaw64k", AUDIO_FRAMES),
        alt("g711Alaw56k", AUDIO_FRAMES),
        alt("g711Ulaw64k", AUDIO_FRAMES),
        alt("g711Ulaw56k", AUDIO_FRAMES),
        alt("g722-64k", AUDIO_FRAMES),
        alt("g722-56k", AUDIO_FRAMES),
        alt("g722-48k", AUDIO_FRAMES),
        alt("g7231", Asn1Type::Sequence(&G7231)),
        alt("g728", AUDIO_FRAMES),
        alt("g729", AUDIO_FRAMES),
        alt("g729AnnexA", AUDIO_FRAMES),
        alt("is11172AudioCapability", Asn1Type::Sequence(&IS11172_AUDIO_CAPABILITY)),
        alt("is13818AudioCapability", Asn1Type::Unsupported("IS13818AudioCapability")),
    ],
    additions: &[
        alt("g729wAnnexB", AUDIO_FRAMES),
        alt("g729AnnexAwAnnexB", AUDIO_FRAMES),
        alt("g7231AnnexCCapability", Asn1Type::Unsupported("G7231AnnexCCapability")),
        alt("gsmFullRate", Asn1Type::Sequence(&GSM_AUDIO_CAPABILITY)),
        alt("gsmHalfRate", Asn1Type::Sequence(&GSM_AUDIO_CAPABILITY)),
        alt("gsmEnhancedFullRate", Asn1Type::Sequence(&GSM_AUDIO_CAPABILITY)),
        alt("genericAudioCapability", Asn1Type::Sequence(&GENERIC_CAPABILITY)),
        alt("g729Extensions", Asn1Type::Unsupported("G729Extensions")),
        alt("vbd", Asn1Type::Unsupported("VBDCapability")),
        alt("audioTelephonyEvent", Asn1Type::Unsupported("NoPTAudioTelephonyEventCapability")),
        alt("audioTone", Asn1Type::Unsupported("NoPTAudioToneCapability")),
    ],
};

static G7231: SequenceDescriptor = SequenceDescriptor {
    name: "G7231",
    extensible: false,
    root: &[
        field("maxAl-sduAudioFrames", AUDIO_FRAMES),
        field("silenceSuppression", Asn1Type::Boolean),
    ],
    additions: &[],
};

static IS11172_AUDIO_CAPABILITY: SequenceDescriptor = SequenceDescriptor {
    name: "IS11172AudioCapability",
    extensible: true,
    root: &[
        field("audioLayer1", Asn1Type::Boolean),
        field("audioLayer2", Asn1Type::Boolean),
        field("audioLayer3", Asn1Type::Boolean),
        field("audioSampling32k", Asn1Type::Boolean),
        field("audioSampling44k1", Asn1Type::Boolean),
        field("audioSampling48k", Asn1Type::Boolean),
        field("singleChannel", Asn1Type::Boolean),
        field("twoChannels", Asn1Type::Boolean),
        field("bitRate", Asn1Type::int(1, 448)),
    ],
    additions: &[],
};

static GSM_AUDIO_CAPABILITY: SequenceDescriptor = SequenceDescriptor {
    name: "GSMAudioCapability",
    extensible: true,
    root: &[
        field("audioUnitSize", AUDIO_FRAMES),
        field("comfortNoise", Asn1Type::Boolean),
        field("scrambled", Asn1Type::Boolean),
    ],
    additions: &[],
};

// Video

pub static VIDEO_CAPABILITY: ChoiceDescriptor = ChoiceDescriptor {
    name: "VideoCapability",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("h261VideoCapability", Asn1Type::Sequence(&H261_VIDEO_CAPABILITY)),
        alt("h262VideoCapability", Asn1Type::Unsupported("H262VideoCapability")),
        alt("h263VideoCapability", Asn1Type::Unsupported("H263VideoCapability")),
        alt("is11172VideoCapability", Asn1Type::Sequence(&IS11172_VIDEO_CAPABILITY)),
    ],
    additions: &[
        alt("genericVideoCapability", Asn1Type::Sequence(&GENERIC_CAPABILITY)),
        alt("extendedVideoCapability", Asn1Type::Unsupported("ExtendedVideoCapability")),
    ],
};

static H261_VIDEO_CAPABILITY: SequenceDescriptor = SequenceDescriptor {
    name: "H261VideoCapability",
    extensible: true,
    root: &[
        opt("qcifMPI", Asn1Type::int(1, 4)),
        opt("cifMPI", Asn1Type::int(1, 4)),
        field("temporalSpatialTradeOffCapability", Asn1Type::Boolean),
        field("maxBitRate", Asn1Type::int(1, 19200)),
        field("stillImageTransmission", Asn1Type::Boolean),
    ],
    additions: &[field("videoBadMBsCap", Asn1Type::Boolean)],
};

static IS11172_VIDEO_CAPABILITY: SequenceDescriptor = SequenceDescriptor {
    name: "IS11172VideoCapability",
    extensible: true,
    root: &[
        field("constrainedBitstream", Asn1Type::Boolean),
        opt("videoBitRate", Asn1Type::int(0, 1_073_741_823)),
        opt("vbvBufferSize", Asn1Type::int(0, 262_143)),
        opt("samplesPerLine", Asn1Type::int(0, 16383)),
        opt("linesPerFrame", Asn1Type::int(0, 16383)),
        opt("pictureRate", Asn1Type::int(0, 15)),
        opt("luminanceSampleRate", Asn1Type::int(0, 4_294_967_295)),
    ],
    additions: &[field("videoBadMBsCap", Asn1Type::Boolean)],
};

// Data applications

pub static DATA_APPLICATION_CAPABILITY: SequenceDescriptor = SequenceDescriptor {
    name: "DataApplicationCapability",
    extensible: true,
    root: &[
        field("application", Asn1Type::Choice(&DATA_APPLICATION)),
        field("maxBitRate", MAXIMUM_BIT_RATE),
    ],
    additions: &[],
};

static DATA_APPLICATION: ChoiceDescriptor = ChoiceDescriptor {
    name: "Application",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("t120", Asn1Type::Choice(&DATA_PROTOCOL_CAPABILITY)),
        alt("dsm-cc", Asn1Type::Choice(&DATA_PROTOCOL_CAPABILITY)),
        alt("userData", Asn1Type::Choice(&DATA_PROTOCOL_CAPABILITY)),
        alt("t84", Asn1Type::Unsupported("T84Profile")),
        alt("t434", Asn1Type::Choice(&DATA_PROTOCOL_CAPABILITY)),
        alt("h224", Asn1Type::Choice(&DATA_PROTOCOL_CAPABILITY)),
        alt("nlpid", Asn1Type::Sequence(&NLPID)),
        alt("dsvdControl", Asn1Type::Null),
        alt("h222DataPartitioning", Asn1Type::Choice(&DATA_PROTOCOL_CAPABILITY)),
    ],
    additions: &[
        alt("t30fax", Asn1Type::Choice(&DATA_PROTOCOL_CAPABILITY)),
        alt("t140", Asn1Type::Choice(&DATA_PROTOCOL_CAPABILITY)),
        alt("t38fax", Asn1Type::Unsupported("T38FaxProfile")),
        alt("genericDataCapability", Asn1Type::Sequence(&GENERIC_CAPABILITY)),
    ],
};

static NLPID: SequenceDescriptor = SequenceDescriptor {
    name: "Nlpid",
    extensible: false,
    root: &[
        field("nlpidProtocol", Asn1Type::Choice(&DATA_PROTOCOL_CAPABILITY)),
        field("nlpidData", Asn1Type::octets()),
    ],
    additions: &[],
};

pub static DATA_PROTOCOL_CAPABILITY: ChoiceDescriptor = ChoiceDescriptor {
    name: "DataProtocolCapability",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("v14buffered", Asn1Type::Null),
        alt("v42lapm", Asn1Type::Null),
        alt("hdlcFrameTunnelling", Asn1Type::Null),
        alt("h310SeparateVCStack", Asn1Type::Null),
        alt("h310SingleVCStack", Asn1Type::Null),
        alt("transparent", Asn1Type::Null),
    ],
    additions: &[
        alt("segmentationAndReassembly", Asn1Type::Null),
        alt("hdlcFrameTunnelingwSAR", Asn1Type::Null),
        alt("v120", Asn1Type::Null),
        alt("separateLANStack", Asn1Type::Null),
        alt("v76wCompression", Asn1Type::Unsupported("V76wCompression")),
        alt("tcp", Asn1Type::Null),
        alt("udp", Asn1Type::Null),
    ],
};
