//! PER encoding constants and decoder defaults.
//!
//! Values taken from ITU-T X.691 (Packed Encoding Rules) where a clause governs
//! them; the remaining ones are hardening defaults for untrusted input.

// --- X.691 Length Determinant Constants (Sec 11.9) ---

/// Sizes at or above this bound use the general (unconstrained) length determinant.
pub const PER_LENGTH_CONSTRAINT_LIMIT: usize = 65_536;
/// Largest length expressible in the single-octet determinant form (`0xxxxxxx`).
pub const PER_SHORT_LENGTH_MAX: usize = 127;
/// Largest length expressible in the two-octet determinant form (`10xxxxxx xxxxxxxx`).
pub const PER_LONG_LENGTH_MAX: usize = 16_383;
/// Unit of a fragment in the fragmented determinant form (`11mmmmmm`).
pub const PER_FRAGMENT_UNIT: usize = 16_384;
/// Largest fragment multiplier permitted in a `11mmmmmm` determinant.
pub const PER_MAX_FRAGMENT_MULTIPLIER: usize = 4;

/// Mask selecting the form bits of the first determinant octet.
pub const PER_LENGTH_FORM_MASK: u8 = 0b1100_0000;
/// First-octet prefix of the two-octet determinant form.
pub const PER_LENGTH_LONG_PREFIX: u8 = 0b1000_0000;
/// First-octet prefix of the fragmented determinant form.
pub const PER_LENGTH_FRAGMENT_PREFIX: u8 = 0b1100_0000;

// --- X.691 Constrained Whole Number Thresholds (Sec 11.5.7) ---

/// Ranges up to this size are a bit-field in the ALIGNED variant.
pub const PER_ALIGNED_BITFIELD_RANGE_MAX: u64 = 255;
/// Range encoded as exactly one aligned octet in the ALIGNED variant.
pub const PER_ALIGNED_ONE_OCTET_RANGE: u64 = 256;
/// Ranges up to this size are two aligned octets in the ALIGNED variant.
pub const PER_ALIGNED_TWO_OCTET_RANGE_MAX: u64 = 65_536;

/// Width of the short form of a normally small non-negative whole number.
pub const PER_NORMALLY_SMALL_BITS: usize = 6;

/// Strings and bit strings whose fixed size fits in this many bits are never aligned.
pub const PER_UNALIGNED_FIXED_BITS_MAX: usize = 16;
/// Octet strings whose fixed size fits in this many octets are never aligned.
pub const PER_UNALIGNED_FIXED_OCTETS_MAX: usize = 2;

/// Largest number of content octets an `i64` integer encoding may carry.
pub const PER_MAX_INTEGER_OCTETS: usize = 8;

// --- Decoder Hardening Defaults ---

/// Default maximum nesting depth of constructed types within one message.
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Default maximum number of decoded values (nodes) within one message.
pub const DEFAULT_MAX_ELEMENTS: usize = 65_536;
/// Default maximum number of messages taken from a single buffer.
pub const DEFAULT_MAX_MESSAGES: usize = 4_096;

// --- H.245 Constants ---

/// Permitted alphabet of `UserInputIndication.signal.signalType`, in canonical (code) order.
pub const H245_SIGNAL_TYPE_ALPHABET: &str = "!#*0123456789ABCD";
/// Bit position of the T.35 country code within a packed H.221 non-standard code.
pub const H221_COUNTRY_CODE_SHIFT: u32 = 24;
/// Bit position of the T.35 extension within a packed H.221 non-standard code.
pub const H221_EXTENSION_SHIFT: u32 = 16;
