//! Core type definitions for the PER decoder.
//!
//! Provides zero-cost newtypes to keep bit offsets and packed H.221 codes apart
//! from the plain integers they wrap. All types use `#[repr(transparent)]`.

use std::fmt;
use std::ops::{Add, Deref, Sub};

use serde::{Deserialize, Serialize};

use crate::constants::{H221_COUNTRY_CODE_SHIFT, H221_EXTENSION_SHIFT};

/// Macro to generate decoder newtype wrappers with common implementations
macro_rules! per_newtype {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty) => $prefix:literal
        $(, custom_methods: { $($custom:tt)* })?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[derive(Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            /// Creates a new instance
            #[inline]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Raw value
            #[inline]
            pub const fn value(self) -> $inner {
                self.0
            }

            $($($custom)*)?
        }

        // Display with custom prefix
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }

        impl Deref for $name {
            type Target = $inner;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$inner> for $name {
            #[inline]
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $inner {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        // Enable direct comparisons with raw values
        impl PartialEq<$inner> for $name {
            #[inline]
            fn eq(&self, other: &$inner) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for $inner {
            #[inline]
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

per_newtype!(
    /// Absolute bit position within the buffer handed to the decoder.
    BitOffset(usize) => "bit ",
    custom_methods: {
        /// Whole octets covered by this offset (rounded down).
        #[inline]
        pub const fn octets(self) -> usize {
            self.0 / 8
        }

        /// Whether the offset falls on an octet boundary.
        #[inline]
        pub const fn is_octet_aligned(self) -> bool {
            self.0 % 8 == 0
        }
    }
);

per_newtype!(
    /// Packed H.221 non-standard code: `country << 24 | extension << 16 | manufacturer`.
    H221Code(u32) => "h221:",
    custom_methods: {
        /// Packs the three T.35 fields of an `h221NonStandard` identifier.
        #[inline]
        pub const fn from_parts(country_code: u8, extension: u8, manufacturer_code: u16) -> Self {
            Self(
                ((country_code as u32) << H221_COUNTRY_CODE_SHIFT)
                    | ((extension as u32) << H221_EXTENSION_SHIFT)
                    | manufacturer_code as u32,
            )
        }

        /// T.35 country code.
        #[inline]
        pub const fn country_code(self) -> u8 {
            (self.0 >> H221_COUNTRY_CODE_SHIFT) as u8
        }

        /// T.35 extension octet.
        #[inline]
        pub const fn extension(self) -> u8 {
            (self.0 >> H221_EXTENSION_SHIFT) as u8
        }

        /// Manufacturer code.
        #[inline]
        pub const fn manufacturer_code(self) -> u16 {
            self.0 as u16
        }
    }
);

impl Add<usize> for BitOffset {
    type Output = Self;

    #[inline]
    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0.saturating_add(rhs))
    }
}

impl Sub<Self> for BitOffset {
    type Output = usize;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0.saturating_sub(rhs.0)
    }
}
