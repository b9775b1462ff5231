//! Formatting of byte sizes.

use alloc::string::{String, ToString};

use crate::prefix::Prefix;

/// Format a byte size for humans.
///
/// The size is rounded to three significant digits, but never beyond integer accuracy,
/// and printed with SI prefixes and the unit `B` for bytes. Rounding is half to even,
/// taking all discarded digits into account.
///
/// ```rust
/// # use byte_size::format;
/// assert_eq!(format(999), "999 B");
/// assert_eq!(format(1000), "1.00 kB");
/// assert_eq!(format(1005), "1.00 kB");
/// assert_eq!(format(1015), "1.02 kB");
/// assert_eq!(format(9995), "10.0 kB");
/// assert_eq!(format(u64::MAX), "18.4 EB");
/// ```
pub fn format(size: u64) -> String {
    Formatted(size).to_string()
}

/// Adapter for displaying a byte size without allocating.
///
/// Produces the same text as [`format`].
///
/// ```rust
/// # use byte_size::Formatted;
/// assert_eq!(format!("wrote {}", Formatted(2_335)), "wrote 2.34 kB");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatted(pub u64);

impl core::fmt::Display for Formatted {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut whole = self.0;
        if whole < 1000 {
            return write!(f, "{whole} B");
        }
        // Whether any digit below `rem` is nonzero.
        let mut sticky = false;
        let mut rem;
        let mut prefix = Prefix::Kilo;
        loop {
            rem = whole % 1000;
            whole /= 1000;
            let Some(next) = prefix.next().filter(|_| whole >= 1000) else {
                break;
            };
            sticky |= rem > 0;
            prefix = next;
        }
        if whole < 10 {
            let mut hundredths = rem / 10;
            if round_up(rem % 10, 5, hundredths, sticky) {
                hundredths += 1;
                if hundredths == 100 {
                    hundredths = 0;
                    whole += 1;
                }
            }
            if whole == 10 {
                return write!(f, "10.0 {prefix}B");
            }
            return write!(f, "{whole}.{hundredths:02} {prefix}B");
        }
        if whole < 100 {
            let mut tenths = rem / 100;
            if round_up(rem % 100, 50, tenths, sticky) {
                tenths += 1;
                if tenths == 10 {
                    tenths = 0;
                    whole += 1;
                }
            }
            if whole == 100 {
                return write!(f, "100 {prefix}B");
            }
            return write!(f, "{whole}.{tenths} {prefix}B");
        }
        if round_up(rem, 500, whole, sticky) {
            whole += 1;
        }
        match prefix.next() {
            Some(next) if whole >= 1000 => write!(f, "1.00 {next}B"),
            _ => write!(f, "{whole} {prefix}B"),
        }
    }
}

/// Decide whether to round up given the `discarded` part, where `half` is the midpoint
/// and `sticky` indicates nonzero digits below the discarded part.
fn round_up(discarded: u64, half: u64, kept: u64, sticky: bool) -> bool {
    discarded > half || (discarded == half && (kept & 1 == 1 || sticky))
}
