//! PER primitive decoders: exact bit consumption and truncation safety.
//!
//! Every primitive is fed its complete encoding, then every strictly shorter bit
//! window of it. The complete encoding must decode and consume exactly its length;
//! every shorter window must fail with `TruncatedInput`.

mod common;

use std::fmt::Debug;

use common::BitWriter;
use h245per::Alignment;
use h245per::PerError;
use h245per::per::BitCursor;
use h245per::per::descriptor::{
    CharacterPolicy, CharacterStringDescriptor, ConstraintRange, SizeConstraint, StringKind,
};
use h245per::per::primitives::{self, CharacterCoding, Length, OpenType};

const ALIGNED: Alignment = Alignment::Aligned;
const UNALIGNED: Alignment = Alignment::Unaligned;

fn assert_truncation_safe<T, F>(data: &[u8], needed: usize, decode: F) -> T
where
    T: Debug,
    F: Fn(&mut BitCursor<'_>) -> Result<T, PerError>,
{
    for cut in 0..needed {
        let mut parent = BitCursor::new(data);
        let mut window = parent.split_off(cut).unwrap();
        match decode(&mut window) {
            Err(PerError::TruncatedInput { .. }) => {}
            other => {
                panic!("window of {cut}/{needed} bits: expected TruncatedInput, got {other:?}")
            }
        }
    }
    let mut parent = BitCursor::new(data);
    let mut window = parent.split_off(needed).unwrap();
    let value = decode(&mut window).unwrap();
    assert_eq!(window.consumed_bits(), needed, "complete encoding not fully consumed");
    value
}

#[test]
fn boolean_needs_one_bit() {
    let value = assert_truncation_safe(&[0x80], 1, primitives::decode_boolean);
    assert!(value);
}

#[test]
fn constrained_integers() {
    // 3 bits for 0..=7.
    let v = assert_truncation_safe(&[0b1010_0000], 3, |c| {
        primitives::decode_constrained_whole_number(c, ALIGNED, 0, 7)
    });
    assert_eq!(v, 5);

    // One aligned octet for a range of 256.
    let v = assert_truncation_safe(&[0xFF], 8, |c| {
        primitives::decode_constrained_whole_number(c, ALIGNED, 0, 255)
    });
    assert_eq!(v, 255);

    // Two octets for 1..=65535.
    let v = assert_truncation_safe(&[0x00, 0x29], 16, |c| {
        primitives::decode_constrained_whole_number(c, ALIGNED, 1, 65535)
    });
    assert_eq!(v, 42);

    // 24 bits unaligned for 0..=16777215.
    let v = assert_truncation_safe(&[0x12, 0x34, 0x56], 24, |c| {
        primitives::decode_constrained_whole_number(c, UNALIGNED, 0, 16_777_215)
    });
    assert_eq!(v, 0x12_3456);
}

#[test]
fn large_range_integer_uses_octet_count() {
    // 0..=4294967295 with value 0x01_0000: count 3 (2 bits: 10), pad, three octets.
    let mut w = BitWriter::aligned();
    w.constrained(0x01_0000, 0, 4_294_967_295);
    let data = w.finish();
    assert_eq!(data, [0b1000_0000, 0x01, 0x00, 0x00]);
    let v = assert_truncation_safe(&data, 32, |c| {
        primitives::decode_constrained_whole_number(c, ALIGNED, 0, 4_294_967_295)
    });
    assert_eq!(v, 0x01_0000);
}

#[test]
fn out_of_range_offset_is_constraint_violation() {
    // 0..=4 takes 3 bits; offset 7 is not a valid value.
    let mut cursor = BitCursor::new(&[0b1110_0000]);
    let err = primitives::decode_constrained_whole_number(&mut cursor, ALIGNED, 0, 4).unwrap_err();
    assert!(matches!(err, PerError::ValueOutOfRange { value: 7, .. }));
}

#[test]
fn semi_and_unconstrained_integers() {
    let v = assert_truncation_safe(&[0x02, 0x01, 0x00], 24, |c| {
        primitives::decode_semi_constrained_whole_number(c, ALIGNED, 10)
    });
    assert_eq!(v, 266);

    let v = assert_truncation_safe(&[0x01, 0xFE], 16, |c| {
        primitives::decode_unconstrained_whole_number(c, ALIGNED)
    });
    assert_eq!(v, -2);

    let range = ConstraintRange::extensible(0, 7);
    // Extension bit set: unconstrained value follows, aligned.
    let v = assert_truncation_safe(&[0x80, 0x01, 0x64], 24, |c| {
        primitives::decode_integer(c, ALIGNED, &range)
    });
    assert_eq!(v, 100);
}

#[test]
fn length_determinant_forms() {
    let mut cursor = BitCursor::new(&[0x7F]);
    assert_eq!(
        primitives::decode_unconstrained_length(&mut cursor, ALIGNED).unwrap(),
        Length::Complete(127)
    );

    let v = assert_truncation_safe(&[0x81, 0x00], 16, |c| {
        primitives::decode_unconstrained_length(c, ALIGNED)
    });
    assert_eq!(v, Length::Complete(256));

    // Largest two-octet length.
    let mut cursor = BitCursor::new(&[0xBF, 0xFF]);
    assert_eq!(
        primitives::decode_unconstrained_length(&mut cursor, ALIGNED).unwrap(),
        Length::Complete(16_383)
    );

    let mut cursor = BitCursor::new(&[0xC2]);
    assert_eq!(
        primitives::decode_unconstrained_length(&mut cursor, ALIGNED).unwrap(),
        Length::Fragment(32_768)
    );

    let mut cursor = BitCursor::new(&[0xC5]);
    assert!(matches!(
        primitives::decode_unconstrained_length(&mut cursor, ALIGNED),
        Err(PerError::InvalidFragment { multiplier: 5 })
    ));

    // SIZE (1..15): 4-bit constrained length.
    let size = SizeConstraint::range(1, 15);
    let v = assert_truncation_safe(&[0b0011_0000], 4, |c| {
        primitives::decode_length_determinant(c, ALIGNED, &size)
    });
    assert_eq!(v, Length::Complete(4));
}

#[test]
fn normally_small_numbers() {
    let v = assert_truncation_safe(&[0b0000_0110], 7, |c| {
        primitives::decode_normally_small_non_negative(c, ALIGNED)
    });
    assert_eq!(v, 3);

    // Large form: 1, then a semi-constrained number (aligned length + octet).
    let v = assert_truncation_safe(&[0x80, 0x01, 0x64], 24, |c| {
        primitives::decode_normally_small_non_negative(c, ALIGNED)
    });
    assert_eq!(v, 100);

    let v = assert_truncation_safe(&[0b0000_0010], 7, |c| {
        primitives::decode_normally_small_length(c, ALIGNED)
    });
    assert_eq!(v, 2);
}

#[test]
fn octet_strings() {
    let fixed = SizeConstraint::fixed(2);
    let v = assert_truncation_safe(&[0xAB, 0xCD], 16, |c| {
        primitives::decode_octet_string(c, ALIGNED, &fixed)
    });
    assert_eq!(v, [0xAB, 0xCD]);

    let v = assert_truncation_safe(&[0x03, 1, 2, 3], 32, |c| {
        primitives::decode_octet_string(c, ALIGNED, &SizeConstraint::UNBOUNDED)
    });
    assert_eq!(v, [1, 2, 3]);

    // SIZE (1..256): 8-bit length offset, then aligned octets.
    let bounded = SizeConstraint::range(1, 256);
    let v = assert_truncation_safe(&[0x01, 0x10, 0x20], 24, |c| {
        primitives::decode_octet_string(c, ALIGNED, &bounded)
    });
    assert_eq!(v, [0x10, 0x20]);
}

#[test]
fn length_beyond_buffer_is_truncated_not_allocated() {
    let mut cursor = BitCursor::new(&[0xBF, 0xFF, 0x00]);
    let err = primitives::decode_octet_string(&mut cursor, ALIGNED, &SizeConstraint::UNBOUNDED)
        .unwrap_err();
    assert!(matches!(err, PerError::TruncatedInput { .. }));
}

#[test]
fn bit_strings() {
    let fixed = SizeConstraint::fixed(12);
    let v = assert_truncation_safe(&[0xFF, 0xF0], 12, |c| {
        primitives::decode_bit_string(c, ALIGNED, &fixed)
    });
    assert_eq!(v.len, 12);
    assert_eq!(v.bit(11), Some(true));
    assert_eq!(v.bit(12), None);

    let v = assert_truncation_safe(&[0x0A, 0xFF, 0xC0], 18, |c| {
        primitives::decode_bit_string(c, ALIGNED, &SizeConstraint::UNBOUNDED)
    });
    assert_eq!(v.len, 10);
}

#[test]
fn character_strings() {
    let numeric = CharacterStringDescriptor {
        kind: StringKind::NumericString,
        size: SizeConstraint::range(1, 16),
        alphabet: None,
        policy: CharacterPolicy::Standard,
    };
    let coding = CharacterCoding::for_descriptor(&numeric, UNALIGNED);
    assert_eq!(coding.bits_per_char(), 4);
    // length 3 in 4 bits (offset 2), then "123" as indices 2, 3, 4.
    let v = assert_truncation_safe(&[0b0010_0010, 0b0011_0100], 16, |c| {
        primitives::decode_character_string(c, UNALIGNED, &numeric.size, &coding)
    });
    assert_eq!(v, "123");

    let ia5 = CharacterStringDescriptor {
        kind: StringKind::Ia5String,
        size: SizeConstraint::UNBOUNDED,
        alphabet: None,
        policy: CharacterPolicy::Standard,
    };
    let coding = CharacterCoding::for_descriptor(&ia5, ALIGNED);
    assert_eq!(coding.bits_per_char(), 8);
    let v = assert_truncation_safe(&[0x02, b'o', b'k'], 24, |c| {
        primitives::decode_character_string(c, ALIGNED, &ia5.size, &coding)
    });
    assert_eq!(v, "ok");

    let v = assert_truncation_safe(&[0x02, b'h', b'i'], 24, |c| {
        primitives::decode_general_string(c, ALIGNED)
    });
    assert_eq!(v, "hi");
}

#[test]
fn character_outside_alphabet_is_rejected() {
    let desc = CharacterStringDescriptor {
        kind: StringKind::Ia5String,
        size: SizeConstraint::fixed(1),
        alphabet: Some("!#*0123456789ABCD"),
        policy: CharacterPolicy::SignalType,
    };
    let coding = CharacterCoding::for_descriptor(&desc, UNALIGNED);
    // Index 20 does not exist in a 17-character alphabet.
    let mut cursor = BitCursor::new(&[0b1010_0000]);
    let err = primitives::decode_character_string(&mut cursor, UNALIGNED, &desc.size, &coding)
        .unwrap_err();
    assert!(matches!(err, PerError::InvalidCharacter { .. }));
}

#[test]
fn object_identifier_contents() {
    let v = assert_truncation_safe(&[0x03, 0x2A, 0x03, 0x04], 32, |c| {
        primitives::decode_object_identifier_contents(c, ALIGNED)
    });
    assert_eq!(v, [0x2A, 0x03, 0x04]);
}

#[test]
fn open_type_carves_child_window() {
    let data = [0x02, 0xAA, 0xBB, 0xCC];
    let mut cursor = BitCursor::new(&data);
    match primitives::decode_open_type(&mut cursor, ALIGNED).unwrap() {
        OpenType::Contents {
            cursor: mut child,
            octets,
        } => {
            assert_eq!(octets, 2);
            assert_eq!(child.position().value(), 8);
            assert_eq!(child.read_bits(16).unwrap(), 0xAABB);
            assert!(child.is_exhausted());
            assert!(child.read_bit().is_err());
        }
        OpenType::Fragmented(_) => panic!("short envelope reported as fragmented"),
    }
    // The parent resumes after the envelope.
    assert_eq!(cursor.read_bits(8).unwrap(), 0xCC);

    assert_truncation_safe(&data[..3], 24, |c| {
        primitives::decode_open_type(c, ALIGNED).map(|_| ())
    });
}

#[test]
fn align_is_idempotent_and_clamped() {
    let data = [0xFF, 0x00];
    let mut cursor = BitCursor::new(&data);
    cursor.read_bits(3).unwrap();
    cursor.align_to_octet();
    let once = cursor.position();
    cursor.align_to_octet();
    assert_eq!(cursor.position(), once);
    assert_eq!(once.value(), 8);

    // A window ending mid-octet aligns to its end, never past it.
    let mut parent = BitCursor::new(&data);
    let mut window = parent.split_off(5).unwrap();
    window.read_bit().unwrap();
    window.align_to_octet();
    assert!(window.is_exhausted());
}
