//! PER primitive decoders (ITU-T X.691).
//!
//! Stateless functions reading one primitive encoding from a [`BitCursor`]. The
//! [`Alignment`] argument selects between the ALIGNED and UNALIGNED variants; the
//! generic evaluator composes these into choices, sequences and collections.

use bytes::Bytes;

use crate::config::Alignment;
use crate::constants::{
    PER_ALIGNED_BITFIELD_RANGE_MAX, PER_ALIGNED_ONE_OCTET_RANGE, PER_ALIGNED_TWO_OCTET_RANGE_MAX,
    PER_FRAGMENT_UNIT, PER_LENGTH_FORM_MASK, PER_LENGTH_FRAGMENT_PREFIX, PER_LENGTH_LONG_PREFIX,
    PER_LONG_LENGTH_MAX, PER_MAX_FRAGMENT_MULTIPLIER, PER_MAX_INTEGER_OCTETS,
    PER_NORMALLY_SMALL_BITS, PER_SHORT_LENGTH_MAX, PER_UNALIGNED_FIXED_BITS_MAX,
    PER_UNALIGNED_FIXED_OCTETS_MAX,
};
use crate::error::PerError;
use crate::per::cursor::BitCursor;
use crate::per::descriptor::{
    CharacterStringDescriptor, ConstraintRange, SizeConstraint, StringKind,
};
use crate::per::value::BitStringValue;

/// Characters of `PrintableString`, in code order.
const PRINTABLE_ALPHABET: &str =
    " '()+,-./0123456789:=?ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
/// Characters of `NumericString`, in code order.
const NUMERIC_ALPHABET: &str = " 0123456789";

/// Number of bits needed for offsets `0..range`.
fn bits_for_range(range: u128) -> usize {
    if range <= 1 {
        0
    } else {
        (u128::BITS - (range - 1).leading_zeros()) as usize
    }
}

/// Reads a BOOLEAN (one bit).
pub fn decode_boolean(cursor: &mut BitCursor<'_>) -> Result<bool, PerError> {
    cursor.read_bit()
}

/// Reads the raw offset of a constrained whole number spanning `range` values.
///
/// The offset is not checked against `range`; callers decide how to report an
/// out-of-range value.
///
/// # Parameters
/// - `range`: Number of values, `ub - lb + 1`; at most 2^64.
///
/// # Errors
/// - [`PerError::TruncatedInput`] - Input ended inside the encoding
/// - [`PerError::LengthOutOfRange`] - The octet count of a large range is invalid
pub fn decode_constrained_offset(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
    range: u128,
) -> Result<u64, PerError> {
    if range <= 1 {
        return Ok(0);
    }
    let bits = bits_for_range(range);
    if !alignment.is_aligned() || range <= PER_ALIGNED_BITFIELD_RANGE_MAX as u128 {
        return cursor.read_bits(bits);
    }
    if range == PER_ALIGNED_ONE_OCTET_RANGE as u128 {
        cursor.align_to_octet();
        return cursor.read_bits(8);
    }
    if range <= PER_ALIGNED_TWO_OCTET_RANGE_MAX as u128 {
        cursor.align_to_octet();
        return cursor.read_bits(16);
    }

    // Indefinite-length case: octet count in 1..=max_octets, then the octets.
    let max_octets = bits.div_ceil(8);
    let octets = decode_constrained_offset(cursor, alignment, max_octets as u128)? as usize + 1;
    if octets > max_octets {
        return Err(PerError::LengthOutOfRange {
            length: octets,
            size: SizeConstraint::range(1, max_octets),
        });
    }
    cursor.align_to_octet();
    cursor.read_bits(octets * 8)
}

/// Reads a constrained whole number in `lower..=upper` (X.691 §10.5).
///
/// # Errors
/// - [`PerError::TruncatedInput`] - Input ended inside the encoding
/// - [`PerError::ValueOutOfRange`] - The decoded offset exceeds `upper - lower`
/// - [`PerError::InvalidDescriptor`] - `upper < lower`
pub fn decode_constrained_whole_number(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
    lower: i64,
    upper: i64,
) -> Result<i64, PerError> {
    if upper < lower {
        return Err(PerError::InvalidDescriptor("integer upper bound below lower bound"));
    }
    let range = (upper as i128 - lower as i128 + 1) as u128;
    let offset = decode_constrained_offset(cursor, alignment, range)?;
    let value = lower as i128 + offset as i128;
    if offset as u128 >= range {
        return Err(PerError::ValueOutOfRange {
            value,
            range: ConstraintRange::new(lower, upper),
        });
    }
    Ok(value as i64)
}

/// Content octets of a semi-constrained or unconstrained whole number.
fn integer_octets(cursor: &mut BitCursor<'_>, alignment: Alignment) -> Result<Vec<u8>, PerError> {
    let octets = match decode_unconstrained_length(cursor, alignment)? {
        Length::Complete(0) => {
            return Err(PerError::LengthOutOfRange {
                length: 0,
                size: SizeConstraint::range(1, PER_MAX_INTEGER_OCTETS),
            });
        }
        Length::Complete(n) if n <= PER_MAX_INTEGER_OCTETS => n,
        Length::Complete(n) | Length::Fragment(n) => {
            return Err(PerError::IntegerTooWide { octets: n });
        }
    };
    cursor.read_octets(octets)
}

/// Reads a semi-constrained whole number `lower..` (X.691 §10.7).
pub fn decode_semi_constrained_whole_number(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
    lower: i64,
) -> Result<i64, PerError> {
    let octets = integer_octets(cursor, alignment)?;
    let offset = octets.iter().fold(0u64, |acc, &o| (acc << 8) | u64::from(o));
    let value = lower as i128 + offset as i128;
    i64::try_from(value).map_err(|_| PerError::ValueOutOfRange {
        value,
        range: ConstraintRange::semi_constrained(lower),
    })
}

/// Reads an unconstrained two's-complement whole number (X.691 §10.8).
pub fn decode_unconstrained_whole_number(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
) -> Result<i64, PerError> {
    let octets = integer_octets(cursor, alignment)?;
    let sign: i64 = if octets[0] & 0x80 != 0 { -1 } else { 0 };
    Ok(octets
        .iter()
        .fold(sign, |acc, &o| (acc << 8) | i64::from(o)))
}

/// Reads an INTEGER under `range` (X.691 §13).
///
/// A set extension bit means the value lies outside the root range and is encoded
/// as an unconstrained whole number.
pub fn decode_integer(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
    range: &ConstraintRange,
) -> Result<i64, PerError> {
    if range.extensible && cursor.read_bit()? {
        return decode_unconstrained_whole_number(cursor, alignment);
    }
    match (range.lower, range.upper) {
        (Some(lower), Some(upper)) => {
            decode_constrained_whole_number(cursor, alignment, lower, upper)
        }
        (Some(lower), None) => decode_semi_constrained_whole_number(cursor, alignment, lower),
        _ => decode_unconstrained_whole_number(cursor, alignment),
    }
}

/// One decoded length determinant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    /// The final (or only) count.
    Complete(usize),
    /// A fragment of `m x 16K` items; another determinant follows the items.
    Fragment(usize),
}

/// Reads a general (unconstrained) length determinant (X.691 §10.9.3.5-8).
///
/// # Errors
/// - [`PerError::TruncatedInput`] - Input ended inside the determinant
/// - [`PerError::InvalidFragment`] - A `11mmmmmm` octet with `m` outside `1..=4`
pub fn decode_unconstrained_length(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
) -> Result<Length, PerError> {
    if alignment.is_aligned() {
        cursor.align_to_octet();
    }
    let first = cursor.read_bits(8)? as u8;
    if first & PER_LENGTH_LONG_PREFIX == 0 {
        return Ok(Length::Complete(usize::from(first) & PER_SHORT_LENGTH_MAX));
    }
    if first & PER_LENGTH_FORM_MASK != PER_LENGTH_FRAGMENT_PREFIX {
        let low = cursor.read_bits(8)? as usize;
        return Ok(Length::Complete(((usize::from(first) << 8) | low) & PER_LONG_LENGTH_MAX));
    }
    let multiplier = first & !PER_LENGTH_FORM_MASK;
    if multiplier == 0 || multiplier as usize > PER_MAX_FRAGMENT_MULTIPLIER {
        return Err(PerError::InvalidFragment { multiplier });
    }
    Ok(Length::Fragment(multiplier as usize * PER_FRAGMENT_UNIT))
}

/// Consumes the extension bit of an extensible SIZE constraint, if any, and
/// returns the constraint that governs the length that follows.
pub fn read_size_extension(
    cursor: &mut BitCursor<'_>,
    size: &SizeConstraint,
) -> Result<SizeConstraint, PerError> {
    if size.extensible && cursor.read_bit()? {
        return Ok(SizeConstraint::UNBOUNDED);
    }
    Ok(SizeConstraint {
        extensible: false,
        ..*size
    })
}

/// Reads a length determinant under a SIZE constraint whose extension bit, if any,
/// has already been consumed (X.691 §10.9.3.3-4).
pub fn decode_constrained_length(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
    size: &SizeConstraint,
) -> Result<Length, PerError> {
    match size.small_upper_bound() {
        Some(upper) if upper == size.min => Ok(Length::Complete(upper)),
        Some(upper) => {
            let span = upper
                .checked_sub(size.min)
                .ok_or(PerError::InvalidDescriptor("size upper bound below lower bound"))?;
            let range = span as u128 + 1;
            let offset = decode_constrained_offset(cursor, alignment, range)?;
            let length = size.min.saturating_add(offset as usize);
            if offset as u128 >= range {
                return Err(PerError::LengthOutOfRange {
                    length,
                    size: *size,
                });
            }
            Ok(Length::Complete(length))
        }
        None => decode_unconstrained_length(cursor, alignment),
    }
}

/// Reads a complete length determinant, including the SIZE extension bit.
pub fn decode_length_determinant(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
    size: &SizeConstraint,
) -> Result<Length, PerError> {
    let size = read_size_extension(cursor, size)?;
    decode_constrained_length(cursor, alignment, &size)
}

/// Drives a possibly fragmented length-prefixed encoding, calling `read` with the
/// item count of each fragment. Returns the total count.
fn read_fragmented<'a, F>(
    cursor: &mut BitCursor<'a>,
    alignment: Alignment,
    size: &SizeConstraint,
    mut read: F,
) -> Result<usize, PerError>
where
    F: FnMut(&mut BitCursor<'a>, usize) -> Result<(), PerError>,
{
    let mut length = decode_constrained_length(cursor, alignment, size)?;
    let mut total = 0usize;
    loop {
        let (count, more) = match length {
            Length::Complete(n) => (n, false),
            Length::Fragment(n) => (n, true),
        };
        read(cursor, count)?;
        total = total.saturating_add(count);
        if !more {
            break;
        }
        length = decode_unconstrained_length(cursor, alignment)?;
    }
    if !size.contains(total) {
        return Err(PerError::LengthOutOfRange {
            length: total,
            size: *size,
        });
    }
    Ok(total)
}

/// Reads a normally small non-negative whole number (X.691 §10.6).
pub fn decode_normally_small_non_negative(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
) -> Result<u64, PerError> {
    if !cursor.read_bit()? {
        return cursor.read_bits(PER_NORMALLY_SMALL_BITS);
    }
    // Semi-constrained with lower bound 0, so the value is never negative.
    decode_semi_constrained_whole_number(cursor, alignment, 0).map(|v| v as u64)
}

/// Reads a normally small length, as used for the sequence extension bitmap (X.691 §10.9.3.4).
pub fn decode_normally_small_length(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
) -> Result<usize, PerError> {
    if !cursor.read_bit()? {
        return Ok(cursor.read_bits(PER_NORMALLY_SMALL_BITS)? as usize + 1);
    }
    match decode_unconstrained_length(cursor, alignment)? {
        Length::Complete(n) => Ok(n),
        Length::Fragment(_) => Err(PerError::NotYetImplemented("fragmented extension bitmap")),
    }
}

/// Reads an OCTET STRING (X.691 §17).
pub fn decode_octet_string(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
    size: &SizeConstraint,
) -> Result<Vec<u8>, PerError> {
    let size = read_size_extension(cursor, size)?;
    if let Some(n) = size.fixed_size() {
        if alignment.is_aligned() && n > PER_UNALIGNED_FIXED_OCTETS_MAX {
            cursor.align_to_octet();
        }
        return cursor.read_octets(n);
    }

    let mut octets = Vec::new();
    read_fragmented(cursor, alignment, &size, |cursor, count| {
        if alignment.is_aligned() && count > 0 {
            cursor.align_to_octet();
        }
        octets.extend(cursor.read_octets(count)?);
        Ok(())
    })?;
    Ok(octets)
}

/// Appends `count` bits to an MSB-first packed buffer whose length is a multiple of 8.
fn read_packed_bits(
    cursor: &mut BitCursor<'_>,
    count: usize,
    packed: &mut Vec<u8>,
) -> Result<(), PerError> {
    if count > cursor.remaining_bits() {
        return Err(PerError::TruncatedInput {
            needed: count,
            available: cursor.remaining_bits(),
        });
    }
    packed.extend(cursor.read_octets(count / 8)?);
    let tail = count % 8;
    if tail > 0 {
        packed.push((cursor.read_bits(tail)? as u8) << (8 - tail));
    }
    Ok(())
}

/// Reads a BIT STRING (X.691 §16).
pub fn decode_bit_string(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
    size: &SizeConstraint,
) -> Result<BitStringValue, PerError> {
    let size = read_size_extension(cursor, size)?;
    let mut packed = Vec::new();
    let len = match size.fixed_size() {
        Some(n) => {
            if alignment.is_aligned() && n > PER_UNALIGNED_FIXED_BITS_MAX {
                cursor.align_to_octet();
            }
            read_packed_bits(cursor, n, &mut packed)?;
            n
        }
        None => read_fragmented(cursor, alignment, &size, |cursor, count| {
            if alignment.is_aligned() && count > 0 {
                cursor.align_to_octet();
            }
            read_packed_bits(cursor, count, &mut packed)
        })?,
    };
    Ok(BitStringValue {
        bits: Bytes::from(packed),
        len,
    })
}

/// Effective alphabet of a known-multiplier character string.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CharSet {
    /// Contiguous codes `first..=last`.
    Span(u32, u32),
    /// Sorted, deduplicated codes.
    Table(Vec<u32>),
}

impl CharSet {
    fn from_chars(chars: &str) -> Self {
        let mut codes: Vec<u32> = chars.chars().map(u32::from).collect();
        codes.sort_unstable();
        codes.dedup();
        CharSet::Table(codes)
    }

    fn len(&self) -> usize {
        match self {
            CharSet::Span(first, last) => (last - first) as usize + 1,
            CharSet::Table(codes) => codes.len(),
        }
    }

    fn max_code(&self) -> u32 {
        match self {
            CharSet::Span(_, last) => *last,
            CharSet::Table(codes) => codes.last().copied().unwrap_or(0),
        }
    }

    fn code_at(&self, index: u32) -> Option<u32> {
        match self {
            CharSet::Span(first, last) => first.checked_add(index).filter(|code| code <= last),
            CharSet::Table(codes) => codes.get(index as usize).copied(),
        }
    }

    fn contains(&self, code: u32) -> bool {
        match self {
            CharSet::Span(first, last) => (*first..=*last).contains(&code),
            CharSet::Table(codes) => codes.binary_search(&code).is_ok(),
        }
    }
}

/// Wire representation of the characters of one restricted string type (X.691 §30.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterCoding {
    charset: CharSet,
    bits: usize,
    indexed: bool,
}

impl CharacterCoding {
    /// Derives the coding of `desc` under `alignment`.
    ///
    /// With `N` permitted characters, `b = ceil(log2 N)` bits suffice; ALIGNED rounds
    /// `b` up to a power of two. Characters are sent as their codes when the largest
    /// code fits in that width, and as indices into the code-sorted alphabet otherwise.
    pub fn for_descriptor(desc: &CharacterStringDescriptor, alignment: Alignment) -> Self {
        let charset = match (desc.alphabet, desc.kind) {
            (Some(alphabet), _) => CharSet::from_chars(alphabet),
            (None, StringKind::NumericString) => CharSet::from_chars(NUMERIC_ALPHABET),
            (None, StringKind::PrintableString) => CharSet::from_chars(PRINTABLE_ALPHABET),
            (None, StringKind::VisibleString) => CharSet::Span(0x20, 0x7E),
            (None, StringKind::BmpString) => CharSet::Span(0, 0xFFFF),
            (None, StringKind::Ia5String | StringKind::GeneralString) => CharSet::Span(0, 0x7F),
        };
        let minimal = bits_for_range(charset.len() as u128);
        let bits = if alignment.is_aligned() && minimal > 0 {
            minimal.next_power_of_two()
        } else {
            minimal
        };
        let indexed = u64::from(charset.max_code()) > (1u64 << bits) - 1;
        Self {
            charset,
            bits,
            indexed,
        }
    }

    /// One unrestricted octet per character.
    pub fn octet() -> Self {
        Self {
            charset: CharSet::Span(0, 0xFF),
            bits: 8,
            indexed: false,
        }
    }

    /// Bits per character on the wire.
    pub fn bits_per_char(&self) -> usize {
        self.bits
    }

    /// Whether characters are sent as alphabet indices rather than codes.
    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    fn read_chars(
        &self,
        cursor: &mut BitCursor<'_>,
        count: usize,
        out: &mut String,
    ) -> Result<(), PerError> {
        let needed = count.saturating_mul(self.bits);
        if needed > cursor.remaining_bits() {
            return Err(PerError::TruncatedInput {
                needed,
                available: cursor.remaining_bits(),
            });
        }
        for _ in 0..count {
            let raw = cursor.read_bits(self.bits)? as u32;
            let code = if self.indexed {
                self.charset.code_at(raw)
            } else {
                Some(raw).filter(|&code| self.charset.contains(code))
            };
            let ch = code.and_then(char::from_u32).ok_or(PerError::InvalidCharacter {
                code: raw,
                alphabet_size: self.charset.len(),
            })?;
            out.push(ch);
        }
        Ok(())
    }
}

/// Reads a known-multiplier character string (X.691 §30.5).
pub fn decode_character_string(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
    size: &SizeConstraint,
    coding: &CharacterCoding,
) -> Result<String, PerError> {
    let size = read_size_extension(cursor, size)?;
    let mut text = String::new();
    if let Some(n) = size.fixed_size() {
        if alignment.is_aligned() && n.saturating_mul(coding.bits) > PER_UNALIGNED_FIXED_BITS_MAX {
            cursor.align_to_octet();
        }
        coding.read_chars(cursor, n, &mut text)?;
        return Ok(text);
    }

    // Strings of at most one character are never padded.
    let may_align = alignment.is_aligned() && size.small_upper_bound().is_none_or(|ub| ub >= 2);
    read_fragmented(cursor, alignment, &size, |cursor, count| {
        if may_align && count > 0 {
            cursor.align_to_octet();
        }
        coding.read_chars(cursor, count, &mut text)
    })?;
    Ok(text)
}

/// Reads a GeneralString: an unconstrained octet count and octets, as lossy UTF-8.
pub fn decode_general_string(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
) -> Result<String, PerError> {
    let octets = decode_octet_string(cursor, alignment, &SizeConstraint::UNBOUNDED)?;
    Ok(String::from_utf8_lossy(&octets).into_owned())
}

/// Reads the contents octets of an OBJECT IDENTIFIER (X.691 §24).
///
/// Parsing the arcs is left to
/// [`ObjectIdentifier::from_contents`](crate::per::value::ObjectIdentifier::from_contents)
/// so a malformed identifier can be reported without losing the octets.
pub fn decode_object_identifier_contents(
    cursor: &mut BitCursor<'_>,
    alignment: Alignment,
) -> Result<Vec<u8>, PerError> {
    match decode_unconstrained_length(cursor, alignment)? {
        Length::Complete(n) => cursor.read_octets(n),
        Length::Fragment(_) => Err(PerError::NotYetImplemented("fragmented object identifier")),
    }
}

/// An open-type envelope (X.691 §11.2).
#[derive(Debug, Clone)]
pub enum OpenType<'a> {
    /// A complete encoding of `octets` octets, read through its own cursor.
    Contents { cursor: BitCursor<'a>, octets: usize },
    /// A fragmented envelope, consumed as opaque octets.
    Fragmented(Vec<u8>),
}

/// Reads an open-type length and carves its contents out of the parent cursor.
pub fn decode_open_type<'a>(
    cursor: &mut BitCursor<'a>,
    alignment: Alignment,
) -> Result<OpenType<'a>, PerError> {
    let mut length = decode_unconstrained_length(cursor, alignment)?;
    if let Length::Complete(octets) = length {
        let child = cursor.split_off(octets * 8)?;
        return Ok(OpenType::Contents {
            cursor: child,
            octets,
        });
    }
    let mut raw = Vec::new();
    loop {
        match length {
            Length::Fragment(n) => raw.extend(cursor.read_octets(n)?),
            Length::Complete(n) => {
                raw.extend(cursor.read_octets(n)?);
                return Ok(OpenType::Fragmented(raw));
            }
        }
        length = decode_unconstrained_length(cursor, alignment)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::per::descriptor::CharacterPolicy;

    const ALIGNED: Alignment = Alignment::Aligned;
    const UNALIGNED: Alignment = Alignment::Unaligned;

    fn signal_type() -> CharacterStringDescriptor {
        CharacterStringDescriptor {
            kind: StringKind::Ia5String,
            size: SizeConstraint::fixed(1),
            alphabet: Some("0123456789#*ABCD!"),
            policy: CharacterPolicy::SignalType,
        }
    }

    #[test]
    fn bits_for_range_matches_ceil_log2() {
        assert_eq!(bits_for_range(1), 0);
        assert_eq!(bits_for_range(2), 1);
        assert_eq!(bits_for_range(3), 2);
        assert_eq!(bits_for_range(4), 2);
        assert_eq!(bits_for_range(5), 3);
        assert_eq!(bits_for_range(65535), 16);
        assert_eq!(bits_for_range(1u128 << 64), 64);
    }

    #[test]
    fn logical_channel_number_42() {
        let data = [0b0000_0000, 0b0010_1001];
        for alignment in [ALIGNED, UNALIGNED] {
            let mut cursor = BitCursor::new(&data);
            assert_eq!(
                decode_constrained_whole_number(&mut cursor, alignment, 1, 65535).unwrap(),
                42
            );
            assert_eq!(cursor.consumed_bits(), 16);
        }
    }

    #[test]
    fn single_value_range_reads_nothing() {
        let data = [];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            decode_constrained_whole_number(&mut cursor, ALIGNED, 7, 7).unwrap(),
            7
        );
    }

    #[test]
    fn offset_past_range_is_rejected() {
        // Range 1..3 takes 2 bits; offset 3 would be value 4.
        let data = [0b1100_0000];
        let mut cursor = BitCursor::new(&data);
        let err = decode_constrained_whole_number(&mut cursor, UNALIGNED, 1, 3).unwrap_err();
        assert_eq!(
            err,
            PerError::ValueOutOfRange {
                value: 4,
                range: ConstraintRange::new(1, 3)
            }
        );
    }

    #[test]
    fn aligned_one_octet_range_aligns() {
        let data = [0b1000_0000, 0xFE];
        let mut cursor = BitCursor::new(&data);
        assert!(cursor.read_bit().unwrap());
        assert_eq!(
            decode_constrained_whole_number(&mut cursor, ALIGNED, 0, 255).unwrap(),
            254
        );
        assert_eq!(cursor.consumed_bits(), 16);
    }

    #[test]
    fn unaligned_one_octet_range_is_packed() {
        let data = [0b1111_1111, 0b0000_0000];
        let mut cursor = BitCursor::new(&data);
        assert!(cursor.read_bit().unwrap());
        assert_eq!(
            decode_constrained_whole_number(&mut cursor, UNALIGNED, 0, 255).unwrap(),
            254
        );
        assert_eq!(cursor.consumed_bits(), 9);
    }

    #[test]
    fn aligned_large_range_uses_octet_count() {
        // 0..4294967295: count 1..4 in 2 bits, then aligned octets.
        let data = [0b1100_0000, 0x12, 0x34, 0x56, 0x78];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            decode_constrained_whole_number(&mut cursor, ALIGNED, 0, 4_294_967_295).unwrap(),
            0x1234_5678
        );
        assert_eq!(cursor.consumed_bits(), 40);

        let data = [0b0000_0000, 0x05];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            decode_constrained_whole_number(&mut cursor, ALIGNED, 0, 4_294_967_295).unwrap(),
            5
        );
    }

    #[test]
    fn aligned_large_range_rejects_excess_octet_count() {
        // 0..16777215 allows at most 3 octets; count field 0b11 claims 4.
        let data = [0b1100_0000, 0, 0, 0, 0];
        let mut cursor = BitCursor::new(&data);
        assert!(matches!(
            decode_constrained_whole_number(&mut cursor, ALIGNED, 0, 16_777_215),
            Err(PerError::LengthOutOfRange { length: 4, .. })
        ));
    }

    #[test]
    fn semi_and_unconstrained_integers() {
        let data = [0x01, 0xFF];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(decode_unconstrained_whole_number(&mut cursor, ALIGNED).unwrap(), -1);

        let data = [0x02, 0xFF, 0x00];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(decode_unconstrained_whole_number(&mut cursor, ALIGNED).unwrap(), -256);

        let data = [0x01, 0xFF];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            decode_semi_constrained_whole_number(&mut cursor, ALIGNED, 10).unwrap(),
            265
        );

        let data = [0x09, 0, 0, 0, 0, 0, 0, 0, 0, 1];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            decode_unconstrained_whole_number(&mut cursor, ALIGNED),
            Err(PerError::IntegerTooWide { octets: 9 })
        );
    }

    #[test]
    fn extensible_integer_outside_root() {
        // Extension bit set, then an unconstrained number: 3 octets, value 40000.
        let data = [0b1000_0000, 0x03, 0x00, 0x9C, 0x40];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            decode_integer(&mut cursor, ALIGNED, &ConstraintRange::extensible(1, 32768)).unwrap(),
            40000
        );
    }

    #[test]
    fn length_determinant_forms() {
        let mut cursor = BitCursor::new(&[0x05]);
        assert_eq!(
            decode_unconstrained_length(&mut cursor, ALIGNED).unwrap(),
            Length::Complete(5)
        );
        let mut cursor = BitCursor::new(&[0x81, 0x02]);
        assert_eq!(
            decode_unconstrained_length(&mut cursor, ALIGNED).unwrap(),
            Length::Complete(258)
        );
        let mut cursor = BitCursor::new(&[0xC1]);
        assert_eq!(
            decode_unconstrained_length(&mut cursor, ALIGNED).unwrap(),
            Length::Fragment(16_384)
        );
        let mut cursor = BitCursor::new(&[0xC5]);
        assert_eq!(
            decode_unconstrained_length(&mut cursor, ALIGNED),
            Err(PerError::InvalidFragment { multiplier: 5 })
        );
        let mut cursor = BitCursor::new(&[0xC0]);
        assert_eq!(
            decode_unconstrained_length(&mut cursor, ALIGNED),
            Err(PerError::InvalidFragment { multiplier: 0 })
        );
    }

    #[test]
    fn constrained_length_uses_bitfield() {
        // SIZE(1..15): 4 bits holding length - 1.
        let mut cursor = BitCursor::new(&[0b0010_0000]);
        assert_eq!(
            decode_length_determinant(&mut cursor, ALIGNED, &SizeConstraint::range(1, 15)).unwrap(),
            Length::Complete(3)
        );
        assert_eq!(cursor.consumed_bits(), 4);
    }

    #[test]
    fn normally_small_numbers() {
        let mut cursor = BitCursor::new(&[0b0000_1010]);
        assert_eq!(decode_normally_small_non_negative(&mut cursor, ALIGNED).unwrap(), 5);
        assert_eq!(cursor.consumed_bits(), 7);

        let mut cursor = BitCursor::new(&[0b1000_0000, 0x01, 0x64]);
        assert_eq!(decode_normally_small_non_negative(&mut cursor, ALIGNED).unwrap(), 100);

        let mut cursor = BitCursor::new(&[0b0000_0000]);
        assert_eq!(decode_normally_small_length(&mut cursor, ALIGNED).unwrap(), 1);
    }

    #[test]
    fn octet_string_fixed_and_variable() {
        // SIZE(4) after one bit: aligned.
        let data = [0x80, 1, 2, 3, 4];
        let mut cursor = BitCursor::new(&data);
        cursor.read_bit().unwrap();
        assert_eq!(
            decode_octet_string(&mut cursor, ALIGNED, &SizeConstraint::fixed(4)).unwrap(),
            vec![1, 2, 3, 4]
        );

        // SIZE(2) after one bit: not aligned.
        let data = [0b1000_0000, 0b1000_0001, 0b0000_0000];
        let mut cursor = BitCursor::new(&data);
        cursor.read_bit().unwrap();
        assert_eq!(
            decode_octet_string(&mut cursor, ALIGNED, &SizeConstraint::fixed(2)).unwrap(),
            vec![0x01, 0x02]
        );
        assert_eq!(cursor.consumed_bits(), 17);

        // Unconstrained: length 3 then octets.
        let data = [0x03, 0xAA, 0xBB, 0xCC];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            decode_octet_string(&mut cursor, ALIGNED, &SizeConstraint::UNBOUNDED).unwrap(),
            vec![0xAA, 0xBB, 0xCC]
        );
    }

    #[test]
    fn octet_string_length_beyond_buffer_is_truncated() {
        let data = [0x10, 0xAA];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            decode_octet_string(&mut cursor, ALIGNED, &SizeConstraint::UNBOUNDED),
            Err(PerError::TruncatedInput {
                needed: 128,
                available: 8
            })
        );
    }

    #[test]
    fn fragmented_octet_string() {
        let mut data = vec![0xC1];
        data.extend(std::iter::repeat_n(0x5A, 16_384));
        data.push(0x02);
        data.extend([0x01, 0x02]);
        let mut cursor = BitCursor::new(&data);
        let octets =
            decode_octet_string(&mut cursor, ALIGNED, &SizeConstraint::UNBOUNDED).unwrap();
        assert_eq!(octets.len(), 16_386);
        assert_eq!(&octets[16_384..], &[0x01, 0x02]);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn bit_string_fixed_small_is_packed() {
        let data = [0b1101_0000];
        let mut cursor = BitCursor::new(&data);
        cursor.read_bit().unwrap();
        let bits = decode_bit_string(&mut cursor, ALIGNED, &SizeConstraint::fixed(3)).unwrap();
        assert_eq!(bits.len, 3);
        assert_eq!(bits.bits.as_ref(), &[0b1010_0000]);
    }

    #[test]
    fn bit_string_variable() {
        // SIZE(1..65535): 16-bit aligned length - 1, then aligned content.
        let data = [0x00, 0x09, 0xFF, 0x80];
        let mut cursor = BitCursor::new(&data);
        let bits =
            decode_bit_string(&mut cursor, ALIGNED, &SizeConstraint::range(1, 65535)).unwrap();
        assert_eq!(bits.len, 10);
        assert_eq!(bits.bits.as_ref(), &[0xFF, 0x80]);
        assert_eq!(cursor.consumed_bits(), 26);
    }

    #[test]
    fn signal_type_codings() {
        let aligned = CharacterCoding::for_descriptor(&signal_type(), ALIGNED);
        assert_eq!(aligned.bits_per_char(), 8);
        assert!(!aligned.is_indexed());

        let unaligned = CharacterCoding::for_descriptor(&signal_type(), UNALIGNED);
        assert_eq!(unaligned.bits_per_char(), 5);
        assert!(unaligned.is_indexed());

        let size = SizeConstraint::fixed(1);
        let mut cursor = BitCursor::new(&[b'5']);
        assert_eq!(
            decode_character_string(&mut cursor, ALIGNED, &size, &aligned).unwrap(),
            "5"
        );

        // '5' is at index 8 of "!#*0123456789ABCD".
        let mut cursor = BitCursor::new(&[0b0100_0000]);
        assert_eq!(
            decode_character_string(&mut cursor, UNALIGNED, &size, &unaligned).unwrap(),
            "5"
        );
        assert_eq!(cursor.consumed_bits(), 5);

        let mut cursor = BitCursor::new(&[b'x']);
        assert!(matches!(
            decode_character_string(&mut cursor, ALIGNED, &size, &aligned),
            Err(PerError::InvalidCharacter { code: 0x78, .. })
        ));
    }

    #[test]
    fn ia5_string_variable_length() {
        let desc = CharacterStringDescriptor {
            kind: StringKind::Ia5String,
            size: SizeConstraint::range(1, 64),
            alphabet: None,
            policy: CharacterPolicy::Standard,
        };
        let coding = CharacterCoding::for_descriptor(&desc, ALIGNED);
        assert_eq!(coding.bits_per_char(), 8);
        // Length 2 as 6 bits (value 1), aligned content.
        let data = [0b0000_0100, b'h', b'i'];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            decode_character_string(&mut cursor, ALIGNED, &desc.size, &coding).unwrap(),
            "hi"
        );
    }

    #[test]
    fn numeric_string_is_indexed() {
        let desc = CharacterStringDescriptor {
            kind: StringKind::NumericString,
            size: SizeConstraint::fixed(2),
            alphabet: None,
            policy: CharacterPolicy::Standard,
        };
        let coding = CharacterCoding::for_descriptor(&desc, ALIGNED);
        assert_eq!(coding.bits_per_char(), 4);
        assert!(coding.is_indexed());
        // "42": indices 5 and 3.
        let mut cursor = BitCursor::new(&[0x53]);
        assert_eq!(
            decode_character_string(&mut cursor, ALIGNED, &desc.size, &coding).unwrap(),
            "42"
        );
    }

    #[test]
    fn general_string_is_lossy_utf8() {
        let data = [0x03, b'a', 0xFF, b'b'];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            decode_general_string(&mut cursor, ALIGNED).unwrap(),
            "a\u{FFFD}b"
        );
    }

    #[test]
    fn open_type_carves_child_cursor() {
        let data = [0x02, 0xAB, 0xCD, 0xEF];
        let mut cursor = BitCursor::new(&data);
        match decode_open_type(&mut cursor, ALIGNED).unwrap() {
            OpenType::Contents {
                cursor: mut child,
                octets,
            } => {
                assert_eq!(octets, 2);
                assert_eq!(child.position(), 8);
                assert_eq!(child.read_bits(16).unwrap(), 0xABCD);
                assert!(child.is_exhausted());
            }
            OpenType::Fragmented(_) => panic!("expected complete envelope"),
        }
        assert_eq!(cursor.consumed_bits(), 24);
    }

    #[test]
    fn object_identifier_contents() {
        let data = [0x06, 0x00, 0x08, 0x81, 0x75, 0x00, 0x0D];
        let mut cursor = BitCursor::new(&data);
        assert_eq!(
            decode_object_identifier_contents(&mut cursor, ALIGNED).unwrap(),
            vec![0x00, 0x08, 0x81, 0x75, 0x00, 0x0D]
        );
    }
}
