//! ASN.1 Packed Encoding Rules (X.691) decoding.
//!
//! - [`cursor`]: bit-level reads over a borrowed buffer.
//! - [`primitives`]: the PER encodings of individual types and determinants.
//! - [`descriptor`]: static type descriptors that drive decoding.
//! - [`evaluator`]: the recursive descriptor walker producing [`Value`] trees.
//! - [`value`]: the decoded value model.

pub mod cursor;
pub mod descriptor;
pub mod evaluator;
pub mod primitives;
pub mod value;

pub use cursor::BitCursor;
pub use descriptor::{
    Alternative, Asn1Type, CharacterPolicy, CharacterStringDescriptor, ChoiceDescriptor,
    ConstraintRange, Field, FieldRole, SequenceDescriptor, SequenceOfDescriptor, SizeConstraint,
    StringKind,
};
pub use evaluator::{DecodedValue, Decoder, Hooks, decode_value};
pub use value::{
    BitStringValue, ChoiceValue, FieldValue, ObjectIdentifier, SequenceValue, Value, VendorValue,
};
