//! Types shared across H.245 messages: numbering, non-standard parameters,
//! transport addresses and the generic parameter family.

use crate::per::descriptor::{
    Asn1Type, ChoiceDescriptor, FieldRole, SequenceDescriptor, SequenceOfDescriptor, SizeConstraint,
    StringKind, alt, field, opt,
};

pub const SEQUENCE_NUMBER: Asn1Type = Asn1Type::int(0, 255);
pub const LOGICAL_CHANNEL_NUMBER: Asn1Type = Asn1Type::int(1, 65535);
pub const CAPABILITY_TABLE_ENTRY_NUMBER: Asn1Type = Asn1Type::int(1, 65535);
pub const CAPABILITY_DESCRIPTOR_NUMBER: Asn1Type = Asn1Type::int(0, 255);
pub const MULTIPLEX_TABLE_ENTRY_NUMBER: Asn1Type = Asn1Type::int(1, 15);
pub const MAXIMUM_BIT_RATE: Asn1Type = Asn1Type::int(0, 4_294_967_295);
pub const TSAP_IDENTIFIER: Asn1Type = Asn1Type::int(0, 65535);

pub static NON_STANDARD_PARAMETER: SequenceDescriptor = SequenceDescriptor {
    name: "NonStandardParameter",
    extensible: false,
    root: &[
        field("nonStandardIdentifier", Asn1Type::Choice(&NON_STANDARD_IDENTIFIER))
            .with_role(FieldRole::VendorIdentifier),
        field("data", Asn1Type::octets()).with_role(FieldRole::VendorPayload),
    ],
    additions: &[],
};

pub static NON_STANDARD_IDENTIFIER: ChoiceDescriptor = ChoiceDescriptor {
    name: "NonStandardIdentifier",
    extensible: false,
    root: &[
        alt("object", Asn1Type::ObjectIdentifier),
        alt("h221NonStandard", Asn1Type::Sequence(&H221_NON_STANDARD)),
    ],
    additions: &[],
};

static H221_NON_STANDARD: SequenceDescriptor = SequenceDescriptor {
    name: "H221NonStandard",
    extensible: false,
    root: &[
        field("t35CountryCode", Asn1Type::int(0, 255)),
        field("t35Extension", Asn1Type::int(0, 255)),
        field("manufacturerCode", Asn1Type::int(0, 65535)),
    ],
    additions: &[],
};

pub static NON_STANDARD_MESSAGE: SequenceDescriptor = SequenceDescriptor {
    name: "NonStandardMessage",
    extensible: true,
    root: &[field("nonStandardData", Asn1Type::Sequence(&NON_STANDARD_PARAMETER))],
    additions: &[],
};

pub static NON_STANDARD_PARAMETERS: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::Sequence(&NON_STANDARD_PARAMETER),
    size: SizeConstraint::UNBOUNDED,
    set_of: false,
};

pub static TERMINAL_LABEL: SequenceDescriptor = SequenceDescriptor {
    name: "TerminalLabel",
    extensible: true,
    root: &[
        field("mcuNumber", Asn1Type::int(0, 192)),
        field("terminalNumber", Asn1Type::int(0, 192)),
    ],
    additions: &[],
};

// Transport addresses

pub static TRANSPORT_ADDRESS: ChoiceDescriptor = ChoiceDescriptor {
    name: "TransportAddress",
    extensible: true,
    root: &[
        alt("unicastAddress", Asn1Type::Choice(&UNICAST_ADDRESS)),
        alt("multicastAddress", Asn1Type::Choice(&MULTICAST_ADDRESS)),
    ],
    additions: &[],
};

pub static UNICAST_ADDRESS: ChoiceDescriptor = ChoiceDescriptor {
    name: "UnicastAddress",
    extensible: true,
    root: &[
        alt("iPAddress", Asn1Type::Sequence(&IP_ADDRESS)),
        alt("iPXAddress", Asn1Type::Sequence(&IPX_ADDRESS)),
        alt("iP6Address", Asn1Type::Sequence(&IP6_ADDRESS)),
        alt("netBios", Asn1Type::fixed_octets(16)),
        alt("iPSourceRouteAddress", Asn1Type::Sequence(&IP_SOURCE_ROUTE_ADDRESS)),
    ],
    additions: &[
        alt("nsap", Asn1Type::sized_octets(1, 20)),
        alt("nonStandardAddress", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
    ],
};

pub static MULTICAST_ADDRESS: ChoiceDescriptor = ChoiceDescriptor {
    name: "MulticastAddress",
    extensible: true,
    root: &[
        alt("iPAddress", Asn1Type::Sequence(&IP_ADDRESS)),
        alt("iP6Address", Asn1Type::Sequence(&IP6_ADDRESS)),
    ],
    additions: &[
        alt("nsap", Asn1Type::sized_octets(1, 20)),
        alt("nonStandardAddress", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
    ],
};

static IP_ADDRESS: SequenceDescriptor = SequenceDescriptor {
    name: "IPAddress",
    extensible: true,
    root: &[
        field("network", Asn1Type::fixed_octets(4)),
        field("tsapIdentifier", TSAP_IDENTIFIER),
    ],
    additions: &[],
};

static IPX_ADDRESS: SequenceDescriptor = SequenceDescriptor {
    name: "IPXAddress",
    extensible: true,
    root: &[
        field("node", Asn1Type::fixed_octets(6)),
        field("netnum", Asn1Type::fixed_octets(4)),
        field("tsapIdentifier", Asn1Type::fixed_octets(2)),
    ],
    additions: &[],
};

static IP6_ADDRESS: SequenceDescriptor = SequenceDescriptor {
    name: "IP6Address",
    extensible: true,
    root: &[
        field("network", Asn1Type::fixed_octets(16)),
        field("tsapIdentifier", TSAP_IDENTIFIER),
    ],
    additions: &[],
};

static IP_SOURCE_ROUTE_ADDRESS: SequenceDescriptor = SequenceDescriptor {
    name: "IPSourceRouteAddress",
    extensible: true,
    root: &[
        field("routing", Asn1Type::Choice(&SOURCE_ROUTING)),
        field("network", Asn1Type::fixed_octets(4)),
        field("tsapIdentifier", TSAP_IDENTIFIER),
        field(
            "route",
            Asn1Type::Deferred {
                reason: "iPSourceRouteAddress.route",
                ty: &SOURCE_ROUTE,
            },
        ),
    ],
    additions: &[],
};

static SOURCE_ROUTING: ChoiceDescriptor = ChoiceDescriptor {
    name: "Routing",
    extensible: false,
    root: &[alt("strict", Asn1Type::Null), alt("loose", Asn1Type::Null)],
    additions: &[],
};

static SOURCE_ROUTE_HOPS: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::fixed_octets(4),
    size: SizeConstraint::UNBOUNDED,
    set_of: false,
};
static SOURCE_ROUTE: Asn1Type = Asn1Type::SequenceOf(&SOURCE_ROUTE_HOPS);

// Flow control scope and restriction, shared by command and indication.

pub static FLOW_CONTROL_SCOPE: ChoiceDescriptor = ChoiceDescriptor {
    name: "Scope",
    extensible: false,
    root: &[
        alt("logicalChannelNumber", LOGICAL_CHANNEL_NUMBER),
        alt("resourceID", Asn1Type::int(0, 65535)),
        alt("wholeMultiplex", Asn1Type::Null),
    ],
    additions: &[],
};

pub static FLOW_CONTROL_RESTRICTION: ChoiceDescriptor = ChoiceDescriptor {
    name: "Restriction",
    extensible: false,
    root: &[
        alt("maximumBitRate", Asn1Type::int(0, 16_777_215)),
        alt("noRestriction", Asn1Type::Null),
    ],
    additions: &[],
};

// Generic parameters. GenericParameter -> ParameterValue -> SEQUENCE OF GenericParameter.

pub static CAPABILITY_IDENTIFIER: ChoiceDescriptor = ChoiceDescriptor {
    name: "CapabilityIdentifier",
    extensible: true,
    root: &[
        alt("standard", Asn1Type::ObjectIdentifier),
        alt("h221NonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("uuid", Asn1Type::fixed_octets(16)),
        alt(
            "domainBased",
            Asn1Type::string(StringKind::Ia5String, SizeConstraint::range(1, 64)),
        ),
    ],
    additions: &[],
};

pub static PARAMETER_IDENTIFIER: ChoiceDescriptor = ChoiceDescriptor {
    name: "ParameterIdentifier",
    extensible: true,
    root: &[
        alt("standard", Asn1Type::int(0, 127)),
        alt("h221NonStandard", Asn1Type::Sequence(&NON_STANDARD_PARAMETER)),
        alt("uuid", Asn1Type::fixed_octets(16)),
        alt(
            "domainBased",
            Asn1Type::string(StringKind::Ia5String, SizeConstraint::range(1, 64)),
        ),
    ],
    additions: &[],
};

pub static GENERIC_PARAMETER: SequenceDescriptor = SequenceDescriptor {
    name: "GenericParameter",
    extensible: true,
    root: &[
        field("parameterIdentifier", Asn1Type::Choice(&PARAMETER_IDENTIFIER)),
        field("parameterValue", Asn1Type::Choice(&PARAMETER_VALUE)),
        opt("supersedes", Asn1Type::SequenceOf(&PARAMETER_IDENTIFIERS)),
    ],
    additions: &[],
};

static PARAMETER_IDENTIFIERS: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::Choice(&PARAMETER_IDENTIFIER),
    size: SizeConstraint::UNBOUNDED,
    set_of: false,
};

pub static GENERIC_PARAMETERS: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::Sequence(&GENERIC_PARAMETER),
    size: SizeConstraint::UNBOUNDED,
    set_of: false,
};

pub static PARAMETER_VALUE: ChoiceDescriptor = ChoiceDescriptor {
    name: "ParameterValue",
    extensible: true,
    root: &[
        alt("logical", Asn1Type::Null),
        alt("booleanArray", Asn1Type::int(0, 255)),
        alt("unsignedMin", Asn1Type::int(0, 65535)),
        alt("unsignedMax", Asn1Type::int(0, 65535)),
        alt("unsigned32Min", Asn1Type::int(0, 4_294_967_295)),
        alt("unsigned32Max", Asn1Type::int(0, 4_294_967_295)),
        alt("octetString", Asn1Type::octets()),
        alt("genericParameter", Asn1Type::SequenceOf(&GENERIC_PARAMETERS)),
    ],
    additions: &[],
};

pub static GENERIC_CAPABILITY: SequenceDescriptor = SequenceDescriptor {
    name: "GenericCapability",
    extensible: true,
    root: &[
        field("capabilityIdentifier", Asn1Type::Choice(&CAPABILITY_IDENTIFIER)),
        opt("maxBitRate", MAXIMUM_BIT_RATE),
        opt("collapsing", Asn1Type::SequenceOf(&GENERIC_PARAMETERS)),
        opt("nonCollapsing", Asn1Type::SequenceOf(&GENERIC_PARAMETERS)),
        opt("nonCollapsingRaw", Asn1Type::octets()),
        opt(
            "transport",
            Asn1Type::Choice(&super::capability::DATA_PROTOCOL_CAPABILITY),
        ),
    ],
    additions: &[],
};

/// `GenericMessage`, also used as `GenericInformation`.
pub static GENERIC_MESSAGE: SequenceDescriptor = SequenceDescriptor {
    name: "GenericMessage",
    extensible: true,
    root: &[
        field("messageIdentifier", Asn1Type::Choice(&CAPABILITY_IDENTIFIER)),
        opt("subMessageIdentifier", Asn1Type::int(0, 127)),
        opt("messageContent", Asn1Type::SequenceOf(&GENERIC_PARAMETERS)),
    ],
    additions: &[],
};

pub static GENERIC_INFORMATION: SequenceOfDescriptor = SequenceOfDescriptor {
    element: Asn1Type::Sequence(&GENERIC_MESSAGE),
    size: SizeConstraint::UNBOUNDED,
    set_of: false,
};
