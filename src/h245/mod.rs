//! H.245 message descriptor tables.
//!
//! The tables mirror the `MULTIMEDIA-SYSTEM-CONTROL` module as static descriptors,
//! grouped by message category. Types the tables do not yet cover are marked
//! [`Asn1Type::Unsupported`]; decoding reaches them only through an extension
//! envelope, or fails the message with a located `NotYetImplemented` error.
//!
//! - [`common`]: shared building blocks (non-standard parameters, transport addresses).
//! - [`capability`]: capability exchange.
//! - [`channel`]: logical channel signalling.
//! - [`request`], [`response`], [`command`], [`indication`]: the four message choices.

pub mod capability;
pub mod channel;
pub mod command;
pub mod common;
pub mod indication;
pub mod request;
pub mod response;

pub use command::COMMAND_MESSAGE;
pub use indication::INDICATION_MESSAGE;
pub use request::REQUEST_MESSAGE;
pub use response::RESPONSE_MESSAGE;

use crate::per::descriptor::{Asn1Type, ChoiceDescriptor, alt};

/// `MultimediaSystemControlMessage`, the top-level H.245 PDU.
pub static MULTIMEDIA_SYSTEM_CONTROL_MESSAGE: ChoiceDescriptor = ChoiceDescriptor {
    name: "MultimediaSystemControlMessage",
    extensible: true,
    root: &[
        alt("request", Asn1Type::Choice(&REQUEST_MESSAGE)),
        alt("response", Asn1Type::Choice(&RESPONSE_MESSAGE)),
        alt("command", Asn1Type::Choice(&COMMAND_MESSAGE)),
        alt("indication", Asn1Type::Choice(&INDICATION_MESSAGE)),
    ],
    additions: &[],
};

/// The descriptor every framed H.245 message is decoded against.
pub static MESSAGE: Asn1Type = Asn1Type::Choice(&MULTIMEDIA_SYSTEM_CONTROL_MESSAGE);
