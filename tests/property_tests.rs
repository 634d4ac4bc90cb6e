//! Property-based tests for the PER primitives and the dispatcher.
//!
//! Uses QuickCheck to check bit accounting of constrained numbers, choice index
//! handling and the dispatcher's robustness against arbitrary input.

mod common;

use common::{BitWriter, bits_for_range};
use h245per::per::descriptor::{Asn1Type, ChoiceDescriptor, SequenceDescriptor, alt, field, opt};
use h245per::per::primitives;
use h245per::per::{BitCursor, decode_value};
use h245per::{Alignment, DecoderConfig, H245Decoder, PerError};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck as qc_quickcheck;

fn alignment(aligned: bool) -> Alignment {
    if aligned {
        Alignment::Aligned
    } else {
        Alignment::Unaligned
    }
}

/// Property: a constrained whole number written per X.691 decodes to itself and
/// consumes exactly the bits the writer produced.
#[qc_quickcheck]
fn constrained_whole_number_bit_exact(
    lower: i32,
    span: u32,
    pick: u32,
    aligned: bool,
) -> TestResult {
    let lower = i64::from(lower);
    let upper = lower + i64::from(span);
    let value = lower + i64::from(pick % span.saturating_add(1).max(1));
    let mode = alignment(aligned);

    let mut w = BitWriter::new(mode);
    w.constrained(value, lower, upper);
    let data = w.finish();
    let mut cursor = BitCursor::new(&data);
    match primitives::decode_constrained_whole_number(&mut cursor, mode, lower, upper) {
        Ok(decoded) => {
            TestResult::from_bool(decoded == value && cursor.consumed_bits() == w.bit_len())
        }
        Err(_) => TestResult::failed(),
    }
}

/// Property: an unaligned constrained number always takes ceil(log2 range) bits.
#[qc_quickcheck]
fn unaligned_constrained_width_is_minimal(span: u16, value: u16) -> TestResult {
    if value > span {
        return TestResult::discard();
    }
    let mut w = BitWriter::unaligned();
    w.constrained(i64::from(value), 0, i64::from(span));
    TestResult::from_bool(w.bit_len() == bits_for_range(u128::from(span) + 1))
}

/// Property: aligning twice is the same as aligning once.
#[qc_quickcheck]
fn align_is_idempotent(data: Vec<u8>, skip: u8) -> TestResult {
    let skip = usize::from(skip);
    if skip > data.len() * 8 {
        return TestResult::discard();
    }
    let mut cursor = BitCursor::new(&data);
    if cursor.skip_bits(skip).is_err() {
        return TestResult::failed();
    }
    cursor.align_to_octet();
    let once = cursor.position();
    cursor.align_to_octet();
    TestResult::from_bool(cursor.position() == once && once.value() % 8 == 0)
}

static SEVEN: ChoiceDescriptor = ChoiceDescriptor {
    name: "Seven",
    extensible: false,
    root: &[
        alt("a", Asn1Type::Null),
        alt("b", Asn1Type::Null),
        alt("c", Asn1Type::Null),
        alt("d", Asn1Type::Null),
        alt("e", Asn1Type::Null),
        alt("f", Asn1Type::Null),
        alt("g", Asn1Type::Null),
    ],
    additions: &[],
};

/// Property: every 3-bit index below 7 selects that alternative; 7 is rejected.
#[qc_quickcheck]
fn choice_index_round_trip(index: u8) -> TestResult {
    let index = index % 8;
    let mut w = BitWriter::aligned();
    w.bits(u64::from(index), 3);
    let result = decode_value(&w.finish(), &Asn1Type::Choice(&SEVEN), &DecoderConfig::default());
    match (index, result) {
        (7, Err(err)) => TestResult::from_bool(matches!(
            err.error,
            PerError::ChoiceIndexOutOfRange {
                index: 7,
                alternatives: 7
            }
        )),
        (i, Ok(decoded)) if i < 7 => TestResult::from_bool(
            decoded.value.as_choice().map(|c| c.index) == Some(usize::from(i))
                && decoded.bit_len == 3,
        ),
        _ => TestResult::failed(),
    }
}

static BITS: SequenceDescriptor = SequenceDescriptor {
    name: "Bits",
    extensible: true,
    root: &[
        opt("a", Asn1Type::int(0, 7)),
        opt("b", Asn1Type::Boolean),
        field("c", Asn1Type::int(0, 15)),
        opt("d", Asn1Type::int(0, 63)),
    ],
    additions: &[field("e", Asn1Type::int(0, 255))],
};

/// Property: an UNALIGNED sequence consumes exactly its preamble, the present root
/// components and, when extended, the addition bitmap and every envelope.
///
/// `tail[i]` is `None` for an absent addition. Addition 0 is the known `e`; the
/// others are unknown and carry `x % 4` octets.
#[qc_quickcheck]
fn sequence_bit_accounting(presence: u8, c: u8, tail: Vec<Option<u8>>) -> TestResult {
    let tail = &tail[..tail.len().min(8)];
    let present = [presence & 1 != 0, presence & 2 != 0, presence & 4 != 0];
    let mut w = BitWriter::unaligned();
    let mut expected = 1 + present.len();
    let mut fields = 1;

    w.bit(!tail.is_empty());
    for &p in &present {
        w.bit(p);
    }
    if present[0] {
        w.bits(u64::from(presence >> 5), 3);
        expected += 3;
        fields += 1;
    }
    if present[1] {
        w.bit(presence & 0x10 != 0);
        expected += 1;
        fields += 1;
    }
    w.bits(u64::from(c & 0x0F), 4);
    expected += 4;
    if present[2] {
        w.bits(u64::from(c >> 2), 6);
        expected += 6;
        fields += 1;
    }

    let mut skipped = Vec::new();
    if !tail.is_empty() {
        let bitmap: Vec<bool> = tail.iter().map(Option::is_some).collect();
        w.extension_bitmap(&bitmap);
        expected += 7 + tail.len();
        for (index, addition) in tail.iter().enumerate() {
            let Some(x) = *addition else {
                continue;
            };
            let contents = if index == 0 {
                fields += 1;
                vec![x]
            } else {
                skipped.push(index);
                vec![x; usize::from(x % 4)]
            };
            w.open_type(&contents);
            expected += 8 + 8 * contents.len();
        }
    }

    let config = DecoderConfig::default().with_alignment(Alignment::Unaligned);
    let ty = Asn1Type::Sequence(&BITS);
    let decoded = match decode_value(&w.finish(), &ty, &config) {
        Ok(decoded) => decoded,
        Err(_) => return TestResult::failed(),
    };
    let Some(sequence) = decoded.value.as_sequence() else {
        return TestResult::failed();
    };
    TestResult::from_bool(
        decoded.bit_len == expected
            && w.bit_len() == expected
            && sequence.fields.len() == fields
            && sequence.skipped_extensions == skipped,
    )
}

/// Property: the dispatcher never panics and its accounting stays inside the buffer.
#[qc_quickcheck]
fn dispatcher_accounts_for_every_bit(data: Vec<u8>, aligned: bool) -> TestResult {
    if data.len() > 512 {
        return TestResult::discard();
    }
    let decoder = H245Decoder::new(DecoderConfig::default().with_alignment(alignment(aligned)));
    let report = decoder.decode(&data);
    let total = data.len() * 8;
    let ordered = report
        .messages
        .windows(2)
        .all(|pair| pair[0].bit_offset.value() + pair[0].bit_len <= pair[1].bit_offset.value());
    let inside = report
        .messages
        .iter()
        .all(|m| m.bit_offset.value() + m.bit_len <= total);
    TestResult::from_bool(ordered && inside && report.unconsumed_bits <= total)
}

/// Property: decoding is deterministic.
#[qc_quickcheck]
fn dispatcher_is_deterministic(data: Vec<u8>) -> TestResult {
    if data.len() > 256 {
        return TestResult::discard();
    }
    let decoder = H245Decoder::default();
    TestResult::from_bool(decoder.decode(&data) == decoder.decode(&data))
}
