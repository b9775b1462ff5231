//! Unit prefixes shared by the parser and the formatter.

/// Auxiliary macro for the definition of unit prefixes.
macro_rules! define_prefixes {
    ($($name:ident, $symbol:literal, $lower:literal, $magnitude:literal;)*) => {
        /// A _unit prefix_ like kilo (`k`) or mega (`M`).
        ///
        /// Depending on the context, a prefix scales by `1000^magnitude` (decimal) or by
        /// `1024^magnitude` (binary, written with a trailing `i` as in `MiB`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Prefix {
            $(
                #[doc = concat!("Prefix `", $symbol, "` with magnitude ", stringify!($magnitude), ".")]
                $name,
            )*
        }

        impl Prefix {
            /// Slice of all prefixes in ascending order.
            pub const PREFIXES: &[Self] = &[$(Self::$name),*];

            /// Look up the prefix for the given letter (case insensitive).
            pub const fn from_ascii(letter: u8) -> Option<Self> {
                match letter.to_ascii_lowercase() {
                    $(
                        $lower => Some(Self::$name),
                    )*
                    _ => None,
                }
            }

            /// Magnitude of the prefix, from `1` for kilo to `8` for yotta.
            pub const fn magnitude(self) -> u32 {
                match self {
                    $(
                        Self::$name => $magnitude,
                    )*
                }
            }

            /// Symbol used when formatting.
            pub const fn symbol(self) -> char {
                match self {
                    $(
                        Self::$name => $symbol,
                    )*
                }
            }
        }
    };
}

define_prefixes! {
    Kilo, 'k', b'k', 1;
    Mega, 'M', b'm', 2;
    Giga, 'G', b'g', 3;
    Tera, 'T', b't', 4;
    Peta, 'P', b'p', 5;
    Exa, 'E', b'e', 6;
    Zetta, 'Z', b'z', 7;
    Yotta, 'Y', b'y', 8;
}

impl Prefix {
    /// The largest supported prefix.
    pub const MAX: Self = Self::Yotta;

    /// Next larger prefix, if any.
    pub const fn next(self) -> Option<Self> {
        let idx = self.magnitude() as usize;
        if idx < Self::PREFIXES.len() {
            Some(Self::PREFIXES[idx])
        } else {
            None
        }
    }

    /// Decimal scale of the prefix, i.e., `1000^magnitude`.
    ///
    /// Yotta exceeds [`u64`], hence the wider type.
    pub const fn decimal_scale(self) -> u128 {
        1000u128.pow(self.magnitude())
    }

    /// Binary exponent of the prefix, i.e., `1024^magnitude == 2^binary_exponent`.
    pub const fn binary_exponent(self) -> i32 {
        10 * self.magnitude() as i32
    }
}

impl core::fmt::Display for Prefix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use core::fmt::Write;
        f.write_char(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn test_prefix_order() {
        for (idx, prefix) in Prefix::PREFIXES.iter().enumerate() {
            assert_eq!(prefix.magnitude() as usize, idx + 1);
        }
        let mut prefix_iter = Prefix::PREFIXES.iter().peekable();
        while let Some(this) = prefix_iter.next() {
            if let Some(next) = prefix_iter.peek() {
                assert!(this.decimal_scale() < next.decimal_scale());
                assert_eq!(this.next(), Some(**next));
            }
        }
        assert_eq!(Prefix::MAX.next(), None);
    }

    #[test]
    pub fn test_from_ascii() {
        for prefix in Prefix::PREFIXES {
            let symbol = prefix.symbol() as u8;
            assert_eq!(Prefix::from_ascii(symbol.to_ascii_lowercase()), Some(*prefix));
            assert_eq!(Prefix::from_ascii(symbol.to_ascii_uppercase()), Some(*prefix));
        }
        for letter in [b'b', b'B', b'i', b'0', b'9', b' ', b'.', b'x', 0xC3] {
            assert_eq!(Prefix::from_ascii(letter), None);
        }
    }

    #[test]
    pub fn test_scales() {
        assert_eq!(Prefix::Kilo.decimal_scale(), 1_000);
        assert_eq!(Prefix::Exa.decimal_scale(), 10u128.pow(18));
        assert_eq!(Prefix::Yotta.decimal_scale(), 10u128.pow(24));
        assert_eq!(Prefix::Kilo.binary_exponent(), 10);
        assert_eq!(Prefix::Yotta.binary_exponent(), 80);
    }
}
