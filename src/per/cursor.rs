//! Forward-only bit reader over an immutable byte buffer.
//!
//! [`BitCursor`] reads MSB-first and never rewinds. Failed reads leave the
//! position untouched. Child cursors created with [`BitCursor::split_off`] keep
//! reporting absolute offsets into the original buffer, so diagnostics raised while
//! decoding an open-type envelope still point at the right place.

use bitvec::prelude::*;

use crate::error::PerError;
use crate::types::BitOffset;

/// MSB-first bit reader.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    origin: usize,
    position: usize,
}

impl<'a> BitCursor<'a> {
    /// Creates a cursor positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            bits: data.view_bits::<Msb0>(),
            origin: 0,
            position: 0,
        }
    }

    /// Absolute bit offset into the original buffer.
    #[inline]
    pub fn position(&self) -> BitOffset {
        BitOffset::new(self.origin + self.position)
    }

    /// Bits consumed from this cursor's own window.
    #[inline]
    pub fn consumed_bits(&self) -> usize {
        self.position
    }

    /// Bits left in this cursor's window.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        self.bits.len() - self.position
    }

    /// Whether every bit in the window has been consumed.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining_bits() == 0
    }

    fn ensure(&self, needed: usize) -> Result<(), PerError> {
        let available = self.remaining_bits();
        if needed > available {
            return Err(PerError::TruncatedInput { needed, available });
        }
        Ok(())
    }

    /// Reads one bit.
    pub fn read_bit(&mut self) -> Result<bool, PerError> {
        self.ensure(1)?;
        let bit = self.bits[self.position];
        self.position += 1;
        Ok(bit)
    }

    /// Reads `count` bits (at most 64) as an unsigned big-endian value.
    pub fn read_bits(&mut self, count: usize) -> Result<u64, PerError> {
        if count > u64::BITS as usize {
            return Err(PerError::InvalidDescriptor("bit read wider than 64 bits"));
        }
        if count == 0 {
            return Ok(0);
        }
        self.ensure(count)?;
        let value = self.bits[self.position..self.position + count].load_be::<u64>();
        self.position += count;
        Ok(value)
    }

    /// Reads `count` whole octets from the current (possibly unaligned) position.
    pub fn read_octets(&mut self, count: usize) -> Result<Vec<u8>, PerError> {
        let needed = count
            .checked_mul(8)
            .ok_or(PerError::TruncatedInput {
                needed: usize::MAX,
                available: self.remaining_bits(),
            })?;
        self.ensure(needed)?;
        let octets = self.bits[self.position..self.position + needed]
            .chunks(8)
            .map(|chunk| chunk.load_be::<u8>())
            .collect();
        self.position += needed;
        Ok(octets)
    }

    /// Advances past `count` bits without interpreting them.
    pub fn skip_bits(&mut self, count: usize) -> Result<(), PerError> {
        self.ensure(count)?;
        self.position += count;
        Ok(())
    }

    /// Advances to the next octet boundary of the window; a no-op when already aligned.
    pub fn align_to_octet(&mut self) {
        let remainder = self.position % 8;
        if remainder != 0 {
            self.position = (self.position + 8 - remainder).min(self.bits.len());
        }
    }

    /// Carves the next `count` bits into a child cursor and advances past them.
    ///
    /// # Errors
    /// - [`PerError::TruncatedInput`] - Fewer than `count` bits remain; nothing is consumed.
    pub fn split_off(&mut self, count: usize) -> Result<BitCursor<'a>, PerError> {
        self.ensure(count)?;
        let child = BitCursor {
            bits: &self.bits[self.position..self.position + count],
            origin: self.origin + self.position,
            position: 0,
        };
        self.position += count;
        Ok(child)
    }
}
