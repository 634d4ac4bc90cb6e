//! Static type descriptors interpreted by the generic evaluator.
//!
//! Every ASN.1 type the decoder understands is described by an [`Asn1Type`]. Choice,
//! sequence and sequence-of types point at `static` descriptors, so recursive grammars
//! are ordinary cycles of `&'static` references. The `const fn` helpers ([`field`],
//! [`opt`], [`alt`], [`Asn1Type::int`], ...) keep the tables in `crate::h245` terse.

use std::fmt;

use serde::Serialize;

use crate::constants::PER_LENGTH_CONSTRAINT_LIMIT;
use crate::traits::TransportKind;

/// Value range of an INTEGER. `None` marks an unbounded side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConstraintRange {
    pub lower: Option<i64>,
    pub upper: Option<i64>,
    pub extensible: bool,
}

impl ConstraintRange {
    /// No bounds at all.
    pub const UNCONSTRAINED: Self = Self {
        lower: None,
        upper: None,
        extensible: false,
    };

    /// `INTEGER (lower..upper)`.
    pub const fn new(lower: i64, upper: i64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
            extensible: false,
        }
    }

    /// `INTEGER (lower..upper, ...)`.
    pub const fn extensible(lower: i64, upper: i64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
            extensible: true,
        }
    }

    /// `INTEGER (lower..MAX)`.
    pub const fn semi_constrained(lower: i64) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
            extensible: false,
        }
    }

    /// Whether `value` lies inside the root range.
    pub fn contains(&self, value: i128) -> bool {
        self.lower.is_none_or(|lb| value >= lb as i128)
            && self.upper.is_none_or(|ub| value <= ub as i128)
    }
}

impl fmt::Display for ConstraintRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Some(lb) => write!(f, "{lb}")?,
            None => f.write_str("MIN")?,
        }
        f.write_str("..=")?;
        match self.upper {
            Some(ub) => write!(f, "{ub}")?,
            None => f.write_str("MAX")?,
        }
        if self.extensible {
            f.write_str(", ...")?;
        }
        Ok(())
    }
}

/// SIZE constraint of a string or collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SizeConstraint {
    pub min: usize,
    pub max: Option<usize>,
    pub extensible: bool,
}

impl SizeConstraint {
    /// No SIZE constraint.
    pub const UNBOUNDED: Self = Self {
        min: 0,
        max: None,
        extensible: false,
    };

    /// `SIZE (n)`.
    pub const fn fixed(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
            extensible: false,
        }
    }

    /// `SIZE (min..max)`.
    pub const fn range(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
            extensible: false,
        }
    }

    /// `SIZE (min..max, ...)`.
    pub const fn extensible(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
            extensible: true,
        }
    }

    /// Upper bound if it is below the 64K limit that selects constrained lengths.
    pub fn small_upper_bound(&self) -> Option<usize> {
        self.max.filter(|&ub| ub < PER_LENGTH_CONSTRAINT_LIMIT)
    }

    /// The size if it is fixed and encoded without a length determinant.
    pub fn fixed_size(&self) -> Option<usize> {
        self.small_upper_bound().filter(|&ub| ub == self.min)
    }

    /// Whether `length` satisfies the root constraint.
    pub fn contains(&self, length: usize) -> bool {
        length >= self.min && self.max.is_none_or(|ub| length <= ub)
    }
}

impl fmt::Display for SizeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(ub) if ub == self.min => write!(f, "SIZE({ub}")?,
            Some(ub) => write!(f, "SIZE({}..{ub}", self.min)?,
            None => write!(f, "SIZE({}..MAX", self.min)?,
        }
        if self.extensible {
            f.write_str(", ...")?;
        }
        f.write_str(")")
    }
}

/// Restricted character string types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKind {
    Ia5String,
    NumericString,
    PrintableString,
    VisibleString,
    BmpString,
    /// Not a known-multiplier type: octet length plus octets.
    GeneralString,
}

impl StringKind {
    /// ASN.1 name of the type.
    pub const fn name(self) -> &'static str {
        match self {
            StringKind::Ia5String => "IA5String",
            StringKind::NumericString => "NumericString",
            StringKind::PrintableString => "PrintableString",
            StringKind::VisibleString => "VisibleString",
            StringKind::BmpString => "BMPString",
            StringKind::GeneralString => "GeneralString",
        }
    }
}

/// Field-specific character handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterPolicy {
    #[default]
    Standard,
    /// `UserInputIndication.signal.signalType`; read per `DecoderConfig::signal_type`.
    SignalType,
}

/// A restricted character string type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterStringDescriptor {
    pub kind: StringKind,
    pub size: SizeConstraint,
    /// Permitted alphabet (`FROM (...)`), if narrower than the type's own.
    pub alphabet: Option<&'static str>,
    pub policy: CharacterPolicy,
}

/// One alternative of a CHOICE.
#[derive(Debug, Clone, Copy)]
pub struct Alternative {
    pub label: &'static str,
    pub ty: Asn1Type,
}

/// A CHOICE type.
pub struct ChoiceDescriptor {
    pub name: &'static str,
    pub extensible: bool,
    pub root: &'static [Alternative],
    pub additions: &'static [Alternative],
}

/// Side effect attached to a sequence field, run after the field decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldRole {
    #[default]
    Plain,
    /// A `NonStandardIdentifier` remembered for the following payload field.
    VendorIdentifier,
    /// An octet string handed to the vendor lookup together with the identifier.
    VendorPayload,
    /// A `TransportAddress` reported to the media endpoint sink.
    MediaChannel(TransportKind),
}

/// One component of a SEQUENCE.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub label: &'static str,
    pub optional: bool,
    pub ty: Asn1Type,
    pub role: FieldRole,
}

impl Field {
    /// Attaches a [`FieldRole`].
    pub const fn with_role(mut self, role: FieldRole) -> Self {
        self.role = role;
        self
    }
}

/// A SEQUENCE type. Field order is wire order.
pub struct SequenceDescriptor {
    pub name: &'static str,
    pub extensible: bool,
    pub root: &'static [Field],
    pub additions: &'static [Field],
}

impl SequenceDescriptor {
    /// Number of OPTIONAL root fields, i.e. the width of the presence bitmap.
    pub fn optional_root_fields(&self) -> usize {
        self.root.iter().filter(|f| f.optional).count()
    }
}

/// A SEQUENCE OF or SET OF type.
pub struct SequenceOfDescriptor {
    pub element: Asn1Type,
    pub size: SizeConstraint,
    pub set_of: bool,
}

// Descriptors may be cyclic, so Debug prints names only.
impl fmt::Debug for ChoiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceDescriptor")
            .field("name", &self.name)
            .field("root", &self.root.len())
            .field("additions", &self.additions.len())
            .finish()
    }
}

impl fmt::Debug for SequenceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceDescriptor")
            .field("name", &self.name)
            .field("root", &self.root.len())
            .field("additions", &self.additions.len())
            .finish()
    }
}

impl fmt::Debug for SequenceOfDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceOfDescriptor")
            .field("element", &self.element.name())
            .field("size", &self.size)
            .field("set_of", &self.set_of)
            .finish()
    }
}

/// Closed set of ASN.1 types interpreted by the evaluator.
#[derive(Debug, Clone, Copy)]
pub enum Asn1Type {
    Null,
    Boolean,
    Integer(ConstraintRange),
    BitString(SizeConstraint),
    OctetString(SizeConstraint),
    CharacterString(CharacterStringDescriptor),
    ObjectIdentifier,
    Choice(&'static ChoiceDescriptor),
    Sequence(&'static SequenceDescriptor),
    SequenceOf(&'static SequenceOfDescriptor),
    /// Decoded structurally to stay in sync, then reported as not yet implemented.
    Deferred {
        reason: &'static str,
        ty: &'static Asn1Type,
    },
    /// No table exists; the encoding cannot be skipped without an envelope.
    Unsupported(&'static str),
}

impl Asn1Type {
    /// `INTEGER (lower..upper)`.
    pub const fn int(lower: i64, upper: i64) -> Self {
        Asn1Type::Integer(ConstraintRange::new(lower, upper))
    }

    /// `OCTET STRING` with no SIZE constraint.
    pub const fn octets() -> Self {
        Asn1Type::OctetString(SizeConstraint::UNBOUNDED)
    }

    /// `OCTET STRING (SIZE (n))`.
    pub const fn fixed_octets(n: usize) -> Self {
        Asn1Type::OctetString(SizeConstraint::fixed(n))
    }

    /// `OCTET STRING (SIZE (min..max))`.
    pub const fn sized_octets(min: usize, max: usize) -> Self {
        Asn1Type::OctetString(SizeConstraint::range(min, max))
    }

    /// A character string of `kind` with a SIZE constraint.
    pub const fn string(kind: StringKind, size: SizeConstraint) -> Self {
        Asn1Type::CharacterString(CharacterStringDescriptor {
            kind,
            size,
            alphabet: None,
            policy: CharacterPolicy::Standard,
        })
    }

    /// `GeneralString`.
    pub const fn general_string() -> Self {
        Self::string(StringKind::GeneralString, SizeConstraint::UNBOUNDED)
    }

    /// Short human-readable name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Asn1Type::Null => "NULL",
            Asn1Type::Boolean => "BOOLEAN",
            Asn1Type::Integer(_) => "INTEGER",
            Asn1Type::BitString(_) => "BIT STRING",
            Asn1Type::OctetString(_) => "OCTET STRING",
            Asn1Type::CharacterString(desc) => desc.kind.name(),
            Asn1Type::ObjectIdentifier => "OBJECT IDENTIFIER",
            Asn1Type::Choice(desc) => desc.name,
            Asn1Type::Sequence(desc) => desc.name,
            Asn1Type::SequenceOf(desc) if desc.set_of => "SET OF",
            Asn1Type::SequenceOf(_) => "SEQUENCE OF",
            Asn1Type::Deferred { reason, .. } => *reason,
            Asn1Type::Unsupported(name) => *name,
        }
    }
}

/// Mandatory sequence field.
pub const fn field(label: &'static str, ty: Asn1Type) -> Field {
    Field {
        label,
        optional: false,
        ty,
        role: FieldRole::Plain,
    }
}

/// OPTIONAL sequence field.
pub const fn opt(label: &'static str, ty: Asn1Type) -> Field {
    Field {
        label,
        optional: true,
        ty,
        role: FieldRole::Plain,
    }
}

/// Choice alternative.
pub const fn alt(label: &'static str, ty: Asn1Type) -> Alternative {
    Alternative { label, ty }
}
