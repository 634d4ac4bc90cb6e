//! `RequestMessage` and the request bodies.

use super::capability::TERMINAL_CAPABILITY_SET;
use super::channel::{CLOSE_LOGICAL_CHANNEL, OPEN_LOGICAL_CHANNEL, REQUEST_CHANNEL_CLOSE};
use super::common::{
    GENERIC_MESSAGE, LOGICAL_CHANNEL_NUMBER, MAXIMUM_BIT_RATE, MULTIPLEX_TABLE_ENTRY_NUMBER,
    NON_STANDARD_MESSAGE, SEQUENCE_NUMBER,
};
use crate::per::descriptor::{
    Asn1Type, ChoiceDescriptor, SequenceDescriptor, SequenceOfDescriptor, SizeConstraint, alt,
    field,
};

pub static REQUEST_MESSAGE: ChoiceDescriptor = ChoiceDescriptor {
    name: "RequestMessage",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_MESSAGE)),
        alt("masterSlaveDetermination", Asn1Type::Sequence(&MASTER_SLAVE_DETERMINATION)),
        alt("terminalCapabilitySet", Asn1Type::Sequence(&TERMINAL_CAPABILITY_SET)),
        alt("openLogicalChannel", Asn1Type::Sequence(&OPEN_LOGICAL_CHANNEL)),
        alt("closeLogicalChannel", Asn1Type::Sequence(&CLOSE_LOGICAL_CHANNEL)),
        alt("requestChannelClose", Asn1Type::Sequence(&REQUEST_CHANNEL_CLOSE)),
        alt("multiplexEntrySend", Asn1Type::Unsupported("MultiplexEntrySend")),
        alt("requestMultiplexEntry", Asn1Type::Sequence(&REQUEST_MULTIPLEX_ENTRY)),
        alt("requestMode", Asn1Type::Unsupported("RequestMode")),
        alt("roundTripDelayRequest", Asn1Type::Sequence(&ROUND_TRIP_DELAY)),
        alt("maintenanceLoopRequest", Asn1Type::Sequence(&MAINTENANCE_LOOP)),
    ],
    additions: &[
        alt("communicationModeRequest", Asn1Type::Unsupported("CommunicationModeRequest")),
        alt("conferenceRequest", Asn1Type::Unsupported("ConferenceRequest")),
        alt("multilinkRequest", Asn1Type::Unsupported("MultilinkRequest")),
        alt("logicalChannelRateRequest", Asn1Type::Sequence(&LOGICAL_CHANNEL_RATE)),
        alt("genericRequest", Asn1Type::Sequence(&GENERIC_MESSAGE)),
    ],
};

pub static MASTER_SLAVE_DETERMINATION: SequenceDescriptor = SequenceDescriptor {
    name: "MasterSlaveDetermination",
    extensible: true,
    root: &[
        field("terminalType", Asn1Type::int(0, 255)),
        field("statusDeterminationNumber", Asn1Type::int(0, 16_777_215)),
    ],
    additions: &[],
};

/// `RoundTripDelayRequest`; `RoundTripDelayResponse` has the same shape.
pub static ROUND_TRIP_DELAY: SequenceDescriptor = SequenceDescriptor {
    name: "RoundTripDelay",
    extensible: true,
    root: &[field("sequenceNumber", SEQUENCE_NUMBER)],
    additions: &[],
};

/// `MaintenanceLoopRequest`; `MaintenanceLoopAck` has the same shape.
pub static MAINTENANCE_LOOP: SequenceDescriptor = SequenceDescriptor {
    name: "MaintenanceLoop",
    extensible: true,
    root: &[field("type", Asn1Type::Choice(&MAINTENANCE_LOOP_TYPE))],
    additions: &[],
};

pub static MAINTENANCE_LOOP_TYPE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Type",
    extensible: true,
    root: &[
        alt("systemLoop", Asn1Type::Null),
        alt("mediaLoop", LOGICAL_CHANNEL_NUMBER),
        alt("logicalChannelLoop", LOGICAL_CHANNEL_NUMBER),
    ],
    additions: &[],
};

/// `RequestMultiplexEntry`, also the shape of its ack and release.
pub static REQUEST_MULTIPLEX_ENTRY: SequenceDescriptor = SequenceDescriptor {
    name: "RequestMultiplexEntry",
    extensible: true,
    root: &[field("entryNumbers", Asn1Type::SequenceOf(&MULTIPLEX_TABLE_ENTRY_NUMBERS))],
    additions: &[],
};

pub static MULTIPLEX_TABLE_ENTRY_NUMBERS: SequenceOfDescriptor = SequenceOfDescriptor {
    element: MULTIPLEX_TABLE_ENTRY_NUMBER,
    size: SizeConstraint::range(1, 15),
    set_of: true,
};

/// `LogicalChannelRateRequest`; `LogicalChannelRateAcknowledge` has the same shape.
pub static LOGICAL_CHANNEL_RATE: SequenceDescriptor = SequenceDescriptor {
    name: "LogicalChannelRate",
    extensible: true,
    root: &[
        field("sequenceNumber", SEQUENCE_NUMBER),
        field("logicalChannelNumber", LOGICAL_CHANNEL_NUMBER),
        field("maximumBitRate", MAXIMUM_BIT_RATE),
    ],
    additions: &[],
};
