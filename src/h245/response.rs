//! `ResponseMessage` and the response bodies.

use super::capability::{TERMINAL_CAPABILITY_SET_ACK, TERMINAL_CAPABILITY_SET_REJECT};
use super::channel::{
    CLOSE_LOGICAL_CHANNEL_ACK, OPEN_LOGICAL_CHANNEL_ACK, OPEN_LOGICAL_CHANNEL_REJECT,
    REQUEST_CHANNEL_CLOSE_ACK, REQUEST_CHANNEL_CLOSE_REJECT,
};
use super::common::{
    GENERIC_MESSAGE, LOGICAL_CHANNEL_NUMBER, MAXIMUM_BIT_RATE, MULTIPLEX_TABLE_ENTRY_NUMBER,
    NON_STANDARD_MESSAGE, SEQUENCE_NUMBER,
};
use super::request::{
    LOGICAL_CHANNEL_RATE, MAINTENANCE_LOOP, MAINTENANCE_LOOP_TYPE, MULTIPLEX_TABLE_ENTRY_NUMBERS,
    REQUEST_MULTIPLEX_ENTRY, ROUND_TRIP_DELAY,
};
use crate::per::descriptor::{
    Asn1Type, ChoiceDescriptor, SequenceDescriptor, SequenceOfDescriptor, SizeConstraint, alt,
    field, opt,
};

pub static RESPONSE_MESSAGE: ChoiceDescriptor = ChoiceDescriptor {
    name: "ResponseMessage",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_MESSAGE)),
        alt(
            "masterSlaveDeterminationAck",
            Asn1Type::Sequence(&MASTER_SLAVE_DETERMINATION_ACK),
        ),
        alt(
            "masterSlaveDeterminationReject",
            Asn1Type::Sequence(&MASTER_SLAVE_DETERMINATION_REJECT),
        ),
        alt("terminalCapabilitySetAck", Asn1Type::Sequence(&TERMINAL_CAPABILITY_SET_ACK)),
        alt(
            "terminalCapabilitySetReject",
            Asn1Type::Sequence(&TERMINAL_CAPABILITY_SET_REJECT),
        ),
        alt("openLogicalChannelAck", Asn1Type::Sequence(&OPEN_LOGICAL_CHANNEL_ACK)),
        alt("openLogicalChannelReject", Asn1Type::Sequence(&OPEN_LOGICAL_CHANNEL_REJECT)),
        alt("closeLogicalChannelAck", Asn1Type::Sequence(&CLOSE_LOGICAL_CHANNEL_ACK)),
        alt("requestChannelCloseAck", Asn1Type::Sequence(&REQUEST_CHANNEL_CLOSE_ACK)),
        alt("requestChannelCloseReject", Asn1Type::Sequence(&REQUEST_CHANNEL_CLOSE_REJECT)),
        alt("multiplexEntrySendAck", Asn1Type::Sequence(&MULTIPLEX_ENTRY_SEND_ACK)),
        alt("multiplexEntrySendReject", Asn1Type::Sequence(&MULTIPLEX_ENTRY_SEND_REJECT)),
        alt("requestMultiplexEntryAck", Asn1Type::Sequence(&REQUEST_MULTIPLEX_ENTRY)),
        alt(
            "requestMultiplexEntryReject",
            Asn1Type::Sequence(&REQUEST_MULTIPLEX_ENTRY_REJECT),
        ),
        alt("requestModeAck", Asn1Type::Sequence(&REQUEST_MODE_ACK)),
        alt("requestModeReject", Asn1Type::Sequence(&REQUEST_MODE_REJECT)),
        alt("roundTripDelayResponse", Asn1Type::Sequence(&ROUND_TRIP_DELAY)),
        alt("maintenanceLoopAck", Asn1Type::Sequence(&MAINTENANCE_LOOP)),
        alt("maintenanceLoopReject", Asn1Type::Sequence(&MAINTENANCE_LOOP_REJECT)),
    ],
    additions: &[
        alt(
            "communicationModeResponse",
            Asn1Type::Unsupported("CommunicationModeResponse"),
        ),
        alt("conferenceResponse", Asn1Type::Unsupported("ConferenceResponse")),
        alt("multilinkResponse", Asn1Type::Unsupported("MultilinkResponse")),
        alt("logicalChannelRateAcknowledge", Asn1Type::Sequence(&LOGICAL_CHANNEL_RATE)),
        alt("logicalChannelRateReject", Asn1Type::Sequence(&LOGICAL_CHANNEL_RATE_REJECT)),
        alt("genericResponse", Asn1Type::Sequence(&GENERIC_MESSAGE)),
    ],
};

pub static MASTER_SLAVE_DETERMINATION_ACK: SequenceDescriptor = SequenceDescriptor {
    name: "MasterSlaveDeterminationAck",
    extensible: true,
    root: &[field("decision", Asn1Type::Choice(&DECISION))],
    additions: &[],
};

static DECISION: ChoiceDescriptor = ChoiceDescriptor {
    name: "Decision",
    extensible: false,
    root: &[alt("master", Asn1Type::Null), alt("slave", Asn1Type::Null)],
    additions: &[],
};

pub static MASTER_SLAVE_DETERMINATION_REJECT: SequenceDescriptor = SequenceDescriptor {
    name: "MasterSlaveDeterminationReject",
    extensible: true,
    root: &[field("cause", Asn1Type::Choice(&MSD_REJECT_CAUSE))],
    additions: &[],
};

static MSD_REJECT_CAUSE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Cause",
    extensible: true,
    root: &[alt("identicalNumbers", Asn1Type::Null)],
    additions: &[],
};

// Multiplex table

pub static MULTIPLEX_ENTRY_SEND_ACK: SequenceDescriptor = SequenceDescriptor {
    name: "MultiplexEntrySendAck",
    extensible: true,
    root: &[
        field("sequenceNumber", SEQUENCE_NUMBER),
        field(
            "multiplexTableEntryNumber",
            Asn1Type::SequenceOf(&MULTIPLEX_TABLE_ENTRY_NUMBERS),
        ),
    ],
    additions: &[],
};

pub static MULTIPLEX_ENTRY_SEND_REJECT: SequenceDescriptor = SequenceDescriptor {
    name: "MultiplexEntrySendReject",
    extensible: true,
    root: &[
        field("sequenceNumber", SEQUENCE_NUMBER),
        field(
            "rejectionDescriptions",
            Asn1Type::SequenceOf(&MULTIPLEX_ENTRY_REJECTIONS),
        ),
    ],
    additions: &[],
};

static MULTIPLEX_ENTRY_REJECTIONS: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::Sequence(&MULTIPLEX_ENTRY_REJECTION_DESCRIPTIONS),
    size: SizeConstraint::range(1, 15),
    set_of: true,
};

static MULTIPLEX_ENTRY_REJECTION_DESCRIPTIONS: SequenceDescriptor = SequenceDescriptor {
    name: "MultiplexEntryRejectionDescriptions",
    extensible: true,
    root: &[
        field("multiplexTableEntryNumber", MULTIPLEX_TABLE_ENTRY_NUMBER),
        field("cause", Asn1Type::Choice(&MULTIPLEX_ENTRY_REJECT_CAUSE)),
    ],
    additions: &[],
};

static MULTIPLEX_ENTRY_REJECT_CAUSE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Cause",
    extensible: true,
    root: &[
        alt("unspecifiedCause", Asn1Type::Null),
        alt("descriptorTooComplex", Asn1Type::Null),
    ],
    additions: &[],
};

pub static REQUEST_MULTIPLEX_ENTRY_REJECT: SequenceDescriptor = SequenceDescriptor {
    name: "RequestMultiplexEntryReject",
    extensible: true,
    root: &[
        field("entryNumbers", Asn1Type::SequenceOf(&MULTIPLEX_TABLE_ENTRY_NUMBERS)),
        field(
            "rejectionDescriptions",
            Asn1Type::SequenceOf(&REQUEST_MULTIPLEX_ENTRY_REJECTIONS),
        ),
    ],
    additions: &[],
};

static REQUEST_MULTIPLEX_ENTRY_REJECTIONS: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::Sequence(&REQUEST_MULTIPLEX_ENTRY_REJECTION_DESCRIPTIONS),
    size: SizeConstraint::range(1, 15),
    set_of: true,
};

static REQUEST_MULTIPLEX_ENTRY_REJECTION_DESCRIPTIONS: SequenceDescriptor = SequenceDescriptor {
    name: "RequestMultiplexEntryRejectionDescriptions",
    extensible: true,
    root: &[
        field("multiplexTableEntryNumber", MULTIPLEX_TABLE_ENTRY_NUMBER),
        field("cause", Asn1Type::Choice(&UNSPECIFIED_CAUSE)),
    ],
    additions: &[],
};

static UNSPECIFIED_CAUSE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Cause",
    extensible: true,
    root: &[alt("unspecifiedCause", Asn1Type::Null)],
    additions: &[],
};

// Mode requests

pub static REQUEST_MODE_ACK: SequenceDescriptor = SequenceDescriptor {
    name: "RequestModeAck",
    extensible: true,
    root: &[
        field("sequenceNumber", SEQUENCE_NUMBER),
        field("response", Asn1Type::Choice(&REQUEST_MODE_ACK_RESPONSE)),
    ],
    additions: &[],
};

static REQUEST_MODE_ACK_RESPONSE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Response",
    extensible: true,
    root: &[
        alt("willTransmitMostPreferredMode", Asn1Type::Null),
        alt("willTransmitLessPreferredMode", Asn1Type::Null),
    ],
    additions: &[],
};

pub static REQUEST_MODE_REJECT: SequenceDescriptor = SequenceDescriptor {
    name: "RequestModeReject",
    extensible: true,
    root: &[
        field("sequenceNumber", SEQUENCE_NUMBER),
        field("cause", Asn1Type::Choice(&REQUEST_MODE_REJECT_CAUSE)),
    ],
    additions: &[],
};

static REQUEST_MODE_REJECT_CAUSE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Cause",
    extensible: true,
    root: &[
        alt("modeUnavailable", Asn1Type::Null),
        alt("multipointConstraint", Asn1Type::Null),
        alt("requestDenied", Asn1Type::Null),
    ],
    additions: &[],
};

// Maintenance loops and channel rates

pub static MAINTENANCE_LOOP_REJECT: SequenceDescriptor = SequenceDescriptor {
    name: "MaintenanceLoopReject",
    extensible: true,
    root: &[
        field("type", Asn1Type::Choice(&MAINTENANCE_LOOP_TYPE)),
        field("cause", Asn1Type::Choice(&MAINTENANCE_LOOP_REJECT_CAUSE)),
    ],
    additions: &[],
};

static MAINTENANCE_LOOP_REJECT_CAUSE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Cause",
    extensible: true,
    root: &[alt("canNotPerformLoop", Asn1Type::Null)],
    additions: &[],
};

pub static LOGICAL_CHANNEL_RATE_REJECT: SequenceDescriptor = SequenceDescriptor {
    name: "LogicalChannelRateReject",
    extensible: true,
    root: &[
        field("sequenceNumber", SEQUENCE_NUMBER),
        field("logicalChannelNumber", LOGICAL_CHANNEL_NUMBER),
        field("rejectReason", Asn1Type::Choice(&LOGICAL_CHANNEL_RATE_REJECT_REASON)),
        opt("currentMaximumBitRate", MAXIMUM_BIT_RATE),
    ],
    additions: &[],
};

static LOGICAL_CHANNEL_RATE_REJECT_REASON: ChoiceDescriptor = ChoiceDescriptor {
    name: "LogicalChannelRateRejectReason",
    extensible: true,
    root: &[
        alt("undefinedReason", Asn1Type::Null),
        alt("insufficientResources", Asn1Type::Null),
    ],
    additions: &[],
};
