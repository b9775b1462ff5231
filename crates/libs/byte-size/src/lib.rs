#![no_std]

//! Helper crate to _parse and format byte sizes_ for humans.
//!
//! Byte sizes are exact [`u64`] numbers of bytes. This crate converts between them and
//! strings like `15 EiB`, `1.5mb`, or `2gi`, supporting both decimal SI prefixes (`k`,
//! `M`, ..., `Y`) and their binary counterparts (`Ki`, `Mi`, ..., `Yi`).
//!
//! This crate is `no_std`-compatible but requires `alloc`.
//!
//!
//! ## Parsing
//!
//! Byte sizes must follow the following syntax:
//!
//! ```plain
//! ⟨byte-size⟩  ::=  ⟨digits⟩ [ '.' ⟨digits⟩ ] [ ' '* ⟨units⟩ ]
//! ⟨units⟩      ::=  [ ⟨prefix⟩ [ 'i' ] ] [ 'B' ]    (case-insensitive)
//! ⟨prefix⟩     ::=  'k' | 'M' | 'G' | 'T' | 'P' | 'E' | 'Z' | 'Y'
//! ```
//!
//! The digits before or after the decimal point may be omitted, but not both. Results
//! are rounded half to even. Sizes with decimal prefixes are computed exactly, without a
//! floating-point intermediate. Sizes with binary prefixes go through [`f64`] and may not
//! be exactly rounded.
//!
//! ```rust
//! # use byte_size::{parse, ParseErrorKind};
//! assert_eq!(parse("103k").unwrap(), 103_000);
//! assert_eq!(parse("103 KB").unwrap(), 103_000);
//! assert_eq!(parse("2gi").unwrap(), 2_147_483_648);
//! assert_eq!(parse("2.5").unwrap(), 2);
//!
//! let error = parse("18446744073709551616").unwrap_err();
//! assert_eq!(error.kind(), &ParseErrorKind::Range);
//! assert_eq!(error.saturated(), Some(u64::MAX));
//! ```
//!
//!
//! ## Formatting
//!
//! Formatting rounds to three significant digits and uses decimal SI prefixes:
//!
//! ```rust
//! # use byte_size::format;
//! assert_eq!(format(0), "0 B");
//! assert_eq!(format(1000), "1.00 kB");
//! assert_eq!(format(99_950), "100 kB");
//! assert_eq!(format(u64::MAX), "18.4 EB");
//! ```
//!
//! Formatting and parsing are not exact inverses of each other. Reparsing a formatted
//! size yields a value within the rounding error of three significant digits.
//!
//!
//! ## The [`ByteSize`] Type
//!
//! For use in configuration structures and the like, [`ByteSize`] wraps a number of
//! bytes and implements [`FromStr`][core::str::FromStr] and [`Display`][core::fmt::Display]:
//!
//! ```rust
//! # use byte_size::ByteSize;
//! let size: ByteSize = "1.5 MiB".parse().unwrap();
//! assert_eq!(size, 1_572_864);
//! assert_eq!(size.to_string(), "1.57 MB");
//! assert_eq!(format!("{size:#}"), "1572864");
//! ```
//!
//!
//! ## Serialization and Deserialization
//!
//! By enabling the `serde` feature, [`ByteSize`] can be serialized and deserialized. It
//! always serializes as a [`u64`] integer. Deserialization is supported from integers as
//! well as from strings.

extern crate alloc;

pub mod errors;
pub mod prefix;

mod format;
mod parse;

pub use crate::errors::{ParseError, ParseErrorKind};
pub use crate::format::{format, Formatted};
pub use crate::parse::{parse, parse_saturating};
pub use crate::prefix::Prefix;

/// Represents a number of _bytes_.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize {
    /// Raw number of bytes.
    pub raw: u64,
}

impl ByteSize {
    /// Zero bytes.
    pub const ZERO: Self = Self::new(0);

    /// Largest representable number of bytes.
    pub const MAX: Self = Self::new(u64::MAX);

    /// Construct [`ByteSize`] from the provided raw number of bytes.
    pub const fn new(raw: u64) -> Self {
        Self { raw }
    }

    /// Display adapter rounding to three significant digits.
    pub const fn formatted(self) -> Formatted {
        Formatted(self.raw)
    }
}

impl From<u64> for ByteSize {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

impl From<ByteSize> for u64 {
    fn from(value: ByteSize) -> Self {
        value.raw
    }
}

impl PartialEq<u64> for ByteSize {
    fn eq(&self, other: &u64) -> bool {
        self.raw == *other
    }
}

impl PartialEq<ByteSize> for u64 {
    fn eq(&self, other: &ByteSize) -> bool {
        *self == other.raw
    }
}

impl PartialOrd<u64> for ByteSize {
    fn partial_cmp(&self, other: &u64) -> Option<core::cmp::Ordering> {
        self.raw.partial_cmp(other)
    }
}

impl PartialOrd<ByteSize> for u64 {
    fn partial_cmp(&self, other: &ByteSize) -> Option<core::cmp::Ordering> {
        self.partial_cmp(&other.raw)
    }
}

impl core::fmt::Display for ByteSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if f.alternate() {
            return core::fmt::Display::fmt(&self.raw, f);
        }
        core::fmt::Display::fmt(&self.formatted(), f)
    }
}

impl core::str::FromStr for ByteSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self::new)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ByteSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ByteSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = ByteSize;

            fn expecting(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str("byte size")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                parse(v).map(ByteSize::new).map_err(E::custom)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ByteSize::new(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u64::try_from(v)
                    .map(ByteSize::new)
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(v), &self))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}
