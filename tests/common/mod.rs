//! Common test utilities for h245per integration tests.
//!
//! This module provides a small PER bit writer for building test encodings field by
//! field, plus shared decoder constructors. The writer follows the same alignment
//! rules as the decoder so a test reads like the ASN.1 it encodes.
#![allow(dead_code)]

use h245per::{Alignment, DecoderConfig, H245Decoder};

/// Creates a decoder with H.245 defaults (ALIGNED PER).
pub fn aligned_decoder() -> H245Decoder {
    H245Decoder::new(DecoderConfig::default())
}

/// Creates a decoder for the bit-packed UNALIGNED variant.
pub fn unaligned_decoder() -> H245Decoder {
    H245Decoder::new(DecoderConfig::default().with_alignment(Alignment::Unaligned))
}

/// Minimal number of bits able to hold `range` distinct values.
pub fn bits_for_range(range: u128) -> usize {
    if range <= 1 {
        0
    } else {
        (128 - (range - 1).leading_zeros()) as usize
    }
}

/// Test-only PER encoder, MSB-first.
#[derive(Debug, Clone)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
    alignment: Alignment,
}

impl BitWriter {
    pub fn new(alignment: Alignment) -> Self {
        Self {
            bytes: Vec::new(),
            bit_len: 0,
            alignment,
        }
    }

    pub fn aligned() -> Self {
        Self::new(Alignment::Aligned)
    }

    pub fn unaligned() -> Self {
        Self::new(Alignment::Unaligned)
    }

    /// Bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn bit(&mut self, value: bool) -> &mut Self {
        if self.bit_len % 8 == 0 {
            self.bytes.push(0);
        }
        if value {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> (self.bit_len % 8);
        }
        self.bit_len += 1;
        self
    }

    /// Writes the low `count` bits of `value`, most significant first.
    pub fn bits(&mut self, value: u64, count: usize) -> &mut Self {
        for i in (0..count).rev() {
            self.bit((value >> i) & 1 == 1);
        }
        self
    }

    /// Pads to the next octet boundary in ALIGNED mode.
    pub fn align(&mut self) -> &mut Self {
        if self.alignment == Alignment::Aligned {
            self.pad();
        }
        self
    }

    /// Pads to the next octet boundary regardless of the variant.
    pub fn pad(&mut self) -> &mut Self {
        while self.bit_len % 8 != 0 {
            self.bit(false);
        }
        self
    }

    /// Raw octets at the current position, unaligned.
    pub fn octets(&mut self, data: &[u8]) -> &mut Self {
        for &octet in data {
            self.bits(u64::from(octet), 8);
        }
        self
    }

    /// Constrained whole number `value` in `lower..=upper` (X.691 §10.5).
    pub fn constrained(&mut self, value: i64, lower: i64, upper: i64) -> &mut Self {
        let range = (upper as i128 - lower as i128 + 1) as u128;
        let offset = (value as i128 - lower as i128) as u64;
        let bits = bits_for_range(range);
        if self.alignment == Alignment::Unaligned || range <= 255 {
            return self.bits(offset, bits);
        }
        if range == 256 {
            return self.align().bits(offset, 8);
        }
        if range <= 65_536 {
            return self.align().bits(offset, 16);
        }
        let max_octets = bits.div_ceil(8);
        let octets = (bits_for_range(u128::from(offset) + 1).max(1)).div_ceil(8);
        self.constrained(octets as i64 - 1, 0, max_octets as i64 - 1);
        self.align().bits(offset, octets * 8)
    }

    /// General length determinant, short or long form (X.691 §10.9.3.6-7).
    pub fn length(&mut self, n: usize) -> &mut Self {
        self.align();
        if n < 128 {
            self.bits(n as u64, 8)
        } else {
            self.bits(0x8000 | n as u64, 16)
        }
    }

    /// Normally small non-negative whole number, small form only.
    pub fn normally_small(&mut self, n: u64) -> &mut Self {
        assert!(n < 64, "large form not needed by the tests");
        self.bit(false).bits(n, 6)
    }

    /// Choice index: extension bit (if extensible) and the root index.
    pub fn choice(&mut self, index: usize, alternatives: usize, extensible: bool) -> &mut Self {
        if extensible {
            self.bit(false);
        }
        self.constrained(index as i64, 0, alternatives as i64 - 1)
    }

    /// Extension choice: extension bit set, then the addition index.
    pub fn extension_choice(&mut self, index: u64) -> &mut Self {
        self.bit(true).normally_small(index)
    }

    /// Sequence extension bitmap: normally small length, then one bit per addition.
    pub fn extension_bitmap(&mut self, present: &[bool]) -> &mut Self {
        self.bit(false).bits(present.len() as u64 - 1, 6);
        for &p in present {
            self.bit(p);
        }
        self
    }

    /// Open-type envelope around an already encoded value.
    pub fn open_type(&mut self, contents: &[u8]) -> &mut Self {
        self.length(contents.len());
        self.align();
        self.octets(contents)
    }

    /// OCTET STRING with a fixed size.
    pub fn fixed_octets(&mut self, data: &[u8]) -> &mut Self {
        if data.len() > 2 {
            self.align();
        }
        self.octets(data)
    }

    /// OCTET STRING without an upper bound.
    pub fn unbounded_octets(&mut self, data: &[u8]) -> &mut Self {
        self.length(data.len());
        if !data.is_empty() {
            self.align();
        }
        self.octets(data)
    }

    /// OBJECT IDENTIFIER from its contents octets.
    pub fn object_identifier(&mut self, contents: &[u8]) -> &mut Self {
        self.length(contents.len()).octets(contents)
    }

    /// Finished encoding, zero padded to whole octets.
    pub fn finish(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// Encodes a unicast IPv4 `TransportAddress`.
pub fn ipv4_transport_address(w: &mut BitWriter, network: [u8; 4], port: u16) {
    w.choice(0, 2, true); // unicastAddress
    w.choice(0, 5, true); // iPAddress
    w.bit(false); // IPAddress extension
    w.fixed_octets(&network);
    w.constrained(i64::from(port), 0, 65535);
}

/// Encodes an IPv6 unicast `TransportAddress`.
pub fn ipv6_transport_address(w: &mut BitWriter, network: [u8; 16], port: u16) {
    w.choice(0, 2, true);
    w.choice(2, 5, true); // iP6Address
    w.bit(false);
    w.fixed_octets(&network);
    w.constrained(i64::from(port), 0, 65535);
}
