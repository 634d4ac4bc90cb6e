//! `CommandMessage` and the command bodies.

use super::capability::SEND_TERMINAL_CAPABILITY_SET;
use super::channel::ENCRYPTION_SYNC;
use super::common::{
    FLOW_CONTROL_RESTRICTION, FLOW_CONTROL_SCOPE, GENERIC_INFORMATION, GENERIC_MESSAGE,
    LOGICAL_CHANNEL_NUMBER, NON_STANDARD_MESSAGE, NON_STANDARD_PARAMETER,
};
use crate::per::descriptor::{Asn1Type, ChoiceDescriptor, SequenceDescriptor, alt, field, opt};

pub static COMMAND_MESSAGE: ChoiceDescriptor = ChoiceDescriptor {
    name: "CommandMessage",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_MESSAGE)),
        alt("maintenanceLoopOffCommand", Asn1Type::Sequence(&MAINTENANCE_LOOP_OFF_COMMAND)),
        alt("sendTerminalCapabilitySet", Asn1Type::Choice(&SEND_TERMINAL_CAPABILITY_SET)),
        alt("encryptionCommand", Asn1Type::Unsupported("EncryptionCommand")),
        alt("flowControlCommand", Asn1Type::Sequence(&FLOW_CONTROL)),
        alt("endSessionCommand", Asn1Type::Choice(&END_SESSION_COMMAND)),
        alt("miscellaneousCommand", Asn1Type::Sequence(&MISCELLANEOUS_COMMAND)),
    ],
    additions: &[
        alt("communicationModeCommand", Asn1Type::Unsupported("CommunicationModeCommand")),
        alt("conferenceCommand", Asn1Type::Unsupported("ConferenceCommand")),
        alt(
            "h223MultiplexReconfiguration",
            Asn1Type::Unsupported("H223MultiplexReconfiguration"),
        ),
        alt("newATMVCCommand", Asn1Type::Unsupported("NewATMVCCommand")),
        alt(
            "mobileMultilinkReconfigurationCommand",
            Asn1Type::Unsupported("MobileMultilinkReconfigurationCommand"),
        ),
        alt("genericCommand", Asn1Type::Sequence(&GENERIC_MESSAGE)),
    ],
};

pub static MAINTENANCE_LOOP_OFF_COMMAND: SequenceDescriptor = SequenceDescriptor {
    name: "MaintenanceLoopOffCommand",
    extensible: true,
    root: &[],
    additions: &[],
};

/// `FlowControlCommand`; `FlowControlIndication` has the same shape.
pub static FLOW_CONTROL: SequenceDescriptor = SequenceDescriptor {
    name: "FlowControl",
    extensible: true,
    root: &[
        field("scope", Asn1Type::Choice(&FLOW_CONTROL_SCOPE)),
        field("restriction", Asn1Type::Choice(&FLOW_CONTROL_RESTRICTION)),
    ],
    additions: &[],
};

pub static END_SESSION_COMMAND: ChoiceDescriptor = ChoiceDescriptor {
    name: "EndSessionCommand",
    extensible: true,
    root: &[
        alt("nonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("disconnect", Asn1Type::Null),
        alt("gstnOptions", Asn1Type::Choice(&GSTN_OPTIONS)),
    ],
    additions: &[
        alt("isdnOptions", Asn1Type::Choice(&ISDN_OPTIONS)),
        alt("genericInformation", Asn1Type::SequenceOf(&GENERIC_INFORMATION)),
    ],
};

static GSTN_OPTIONS: ChoiceDescriptor = ChoiceDescriptor {
    name: "GstnOptions",
    extensible: true,
    root: &[
        alt("telephonyMode", Asn1Type::Null),
        alt("v8bis", Asn1Type::Null),
        alt("v34DSVD", Asn1Type::Null),
        alt("v34DuplexFAX", Asn1Type::Null),
        alt("v34H324", Asn1Type::Null),
    ],
    additions: &[],
};

static ISDN_OPTIONS: ChoiceDescriptor = ChoiceDescriptor {
    name: "IsdnOptions",
    extensible: true,
    root: &[
        alt("telephonyMode", Asn1Type::Null),
        alt("v140", Asn1Type::Null),
        alt("terminalOnHold", Asn1Type::Null),
    ],
    additions: &[],
};

pub static MISCELLANEOUS_COMMAND: SequenceDescriptor = SequenceDescriptor {
    name: "MiscellaneousCommand",
    extensible: true,
    root: &[
        field("logicalChannelNumber", LOGICAL_CHANNEL_NUMBER),
        field("type", Asn1Type::Choice(&MISCELLANEOUS_COMMAND_TYPE)),
    ],
    additions: &[opt("direction", Asn1Type::Unsupported("EncryptionUpdateDirection"))],
};

static MISCELLANEOUS_COMMAND_TYPE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Type",
    extensible: true,
    root: &[
        alt("equaliseDelay", Asn1Type::Null),
        alt("zeroDelay", Asn1Type::Null),
        alt("multipointModeCommand", Asn1Type::Null),
        alt("cancelMultipointModeCommand", Asn1Type::Null),
        alt("videoFreezePicture", Asn1Type::Null),
        alt("videoFastUpdatePicture", Asn1Type::Null),
        alt("videoFastUpdateGOB", Asn1Type::Sequence(&VIDEO_FAST_UPDATE_GOB)),
        alt("videoTemporalSpatialTradeOff", Asn1Type::int(0, 31)),
        alt("videoSendSyncEveryGOB", Asn1Type::Null),
        alt("videoSendSyncEveryGOBCancel", Asn1Type::Null),
    ],
    additions: &[
        alt("videoFastUpdateMB", Asn1Type::Sequence(&VIDEO_FAST_UPDATE_MB)),
        alt("maxH223MUXPDUsize", Asn1Type::int(1, 65535)),
        alt("encryptionUpdate", Asn1Type::Sequence(&ENCRYPTION_SYNC)),
        alt("encryptionUpdateRequest", Asn1Type::Unsupported("EncryptionUpdateRequest")),
        alt("switchReceiveMediaOff", Asn1Type::Null),
        alt("switchReceiveMediaOn", Asn1Type::Null),
        alt(
            "progressiveRefinementStart",
            Asn1Type::Unsupported("ProgressiveRefinementStart"),
        ),
        alt("progressiveRefinementAbortOne", Asn1Type::Null),
        alt("progressiveRefinementAbortContinuous", Asn1Type::Null),
        alt("videoBadMBs", Asn1Type::Unsupported("VideoBadMBs")),
        alt("lostPicture", Asn1Type::Unsupported("PictureReference")),
        alt("lostPartialPicture", Asn1Type::Unsupported("LostPartialPicture")),
        alt("recoveryReferencePicture", Asn1Type::Unsupported("PictureReference")),
        alt("encryptionUpdateCommand", Asn1Type::Unsupported("EncryptionUpdateCommand")),
        alt("encryptionUpdateAck", Asn1Type::Unsupported("EncryptionUpdateAck")),
    ],
};

static VIDEO_FAST_UPDATE_GOB: SequenceDescriptor = SequenceDescriptor {
    name: "VideoFastUpdateGOB",
    extensible: false,
    root: &[
        field("firstGOB", Asn1Type::int(0, 17)),
        field("numberOfGOBs", Asn1Type::int(1, 18)),
    ],
    additions: &[],
};

static VIDEO_FAST_UPDATE_MB: SequenceDescriptor = SequenceDescriptor {
    name: "VideoFastUpdateMB",
    extensible: true,
    root: &[
        opt("firstGOB", Asn1Type::int(0, 255)),
        opt("firstMB", Asn1Type::int(1, 8192)),
        field("numberOfMBs", Asn1Type::int(1, 8192)),
    ],
    additions: &[],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecoderConfig;
    use crate::per::evaluator::decode_value;
    use crate::per::value::Value;

    #[test]
    fn video_fast_update_gob() {
        // seq ext 0, lcn (aligned 2 octets) = 3, type ext 0 + index 6, gob 5 bits, count 5 bits.
        let data = [0x00, 0x00, 0x02, 0b0011_0001, 0b0001_0010];
        let decoded = decode_value(
            &data,
            &Asn1Type::Sequence(&MISCELLANEOUS_COMMAND),
            &DecoderConfig::default(),
        )
        .unwrap();
        assert_eq!(
            decoded.value.field("logicalChannelNumber").and_then(Value::as_integer),
            Some(3)
        );
        let gob = decoded.value.get("type.videoFastUpdateGOB").unwrap();
        assert_eq!(gob.field("firstGOB").and_then(Value::as_integer), Some(4));
        assert_eq!(gob.field("numberOfGOBs").and_then(Value::as_integer), Some(10));
    }
}
