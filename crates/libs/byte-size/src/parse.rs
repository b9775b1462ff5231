//! Parsing of byte sizes.

use crate::errors::{ParseError, ParseErrorKind};
use crate::prefix::Prefix;

/// Parse a string as a byte size.
///
/// The string consists of a number, which may use a decimal point, optionally followed
/// by ASCII spaces and units. The units are the SI prefixes (`k`, `M`, `G`, `T`, `P`,
/// `E`, `Z`, `Y`) and their binary counterparts (`Ki`, `Mi`, ...), optionally followed
/// by `B`. Units are case insensitive.
///
/// Results are rounded half to even. Sizes with decimal prefixes are computed exactly,
/// while results for binary prefixes are computed with floating-point arithmetic and may
/// not be exactly rounded. If the size does not fit into [`u64`], the error is of kind
/// [`ParseErrorKind::Range`] and [`ParseError::saturated`] provides [`u64::MAX`].
///
/// ```rust
/// # use byte_size::parse;
/// assert_eq!(parse("1").unwrap(), 1);
/// assert_eq!(parse("555k").unwrap(), 555_000);
/// assert_eq!(parse("15 EiB").unwrap(), 17_293_822_569_102_704_640);
/// assert_eq!(parse("1.5 mb").unwrap(), 1_500_000);
/// assert_eq!(parse("2gi").unwrap(), 2_147_483_648);
/// assert_eq!(parse("0.001 zb").unwrap(), 1_000_000_000_000_000_000);
/// ```
pub fn parse(input: &str) -> Result<u64, ParseError> {
    let fail = |kind| ParseError::new(input, kind);
    let (number, units) = split(input).map_err(fail)?;
    match resolve_units(units).map_err(fail)? {
        None => parse_decimal(number, 0).map_err(fail),
        Some(Units {
            prefix,
            binary: false,
        }) => parse_decimal(number, prefix.magnitude()).map_err(fail),
        Some(Units {
            prefix,
            binary: true,
        }) => parse_binary(number, prefix).map_err(fail),
    }
}

/// Parse a string as a byte size clamping sizes which do not fit into [`u64`].
///
/// Behaves like [`parse`] except that a size which is too large yields [`u64::MAX`]
/// instead of an error.
///
/// ```rust
/// # use byte_size::parse_saturating;
/// assert_eq!(parse_saturating("20 EB").unwrap(), u64::MAX);
/// assert_eq!(parse_saturating("2 kB").unwrap(), 2000);
/// assert!(parse_saturating("2 xB").is_err());
/// ```
pub fn parse_saturating(input: &str) -> Result<u64, ParseError> {
    match parse(input) {
        Err(error) if error.is_range() => {
            tracing::debug!(input, "clamping byte size to maximum");
            Ok(u64::MAX)
        }
        result => result,
    }
}

/// Units of a byte size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Units {
    prefix: Prefix,
    binary: bool,
}

/// Split the input into the number and the units.
fn split(input: &str) -> Result<(&str, &[u8]), ParseErrorKind> {
    let mut has_digit = false;
    let mut has_point = false;
    let mut units_start = input.len();
    for (idx, byte) in input.bytes().enumerate() {
        match byte {
            b'0'..=b'9' => has_digit = true,
            b'.' if has_point => return Err(ParseErrorKind::MultipleDecimalPoint),
            b'.' => has_point = true,
            _ => {
                units_start = idx;
                break;
            }
        }
    }
    if !has_digit {
        return Err(ParseErrorKind::MissingNumber);
    }
    // Everything before `units_start` is ASCII, hence, this is a character boundary.
    let (number, units) = input.split_at(units_start);
    let mut units = units.as_bytes();
    while let Some((b' ', tail)) = units.split_first() {
        units = tail;
    }
    Ok((number, units))
}

/// Resolve the units, [`None`] meaning plain bytes.
fn resolve_units(mut units: &[u8]) -> Result<Option<Units>, ParseErrorKind> {
    if let Some((b'b' | b'B', head)) = units.split_last() {
        units = head;
    }
    let (letter, binary) = match units {
        [] => return Ok(None),
        [letter] => (*letter, false),
        [letter, b'i' | b'I'] => (*letter, true),
        _ => return Err(ParseErrorKind::UnknownUnits),
    };
    match Prefix::from_ascii(letter) {
        Some(prefix) => Ok(Some(Units { prefix, binary })),
        None => Err(ParseErrorKind::UnknownUnits),
    }
}

/// Compute `round(number * 2^(10 * magnitude))` with floating-point arithmetic.
fn parse_binary(number: &str, prefix: Prefix) -> Result<u64, ParseErrorKind> {
    let value = number
        .parse::<f64>()
        .map_err(ParseErrorKind::InvalidNumber)?;
    let value = value * pow2(prefix.binary_exponent());
    // 2^64 is exactly representable as `f64`.
    if value >= pow2(64) {
        return Err(ParseErrorKind::Range);
    }
    Ok(round_ties_even(value))
}

/// Power of two constructed from its bit pattern, such that multiplying with it only
/// changes the exponent of the other operand.
const fn pow2(exponent: i32) -> f64 {
    f64::from_bits(((1023 + exponent) as u64) << 52)
}

/// Round a non-negative value below `2^64` to the nearest integer, ties to even.
fn round_ties_even(value: f64) -> u64 {
    // From `2^52` onwards, all values are integers.
    if value >= pow2(52) {
        return value as u64;
    }
    let truncated = value as u64;
    // Splitting off the fractional part never rounds.
    let fraction = value - truncated as f64;
    if fraction > 0.5 || (fraction == 0.5 && truncated & 1 == 1) {
        truncated + 1
    } else {
        truncated
    }
}

/// Compute `round(number * 1000^magnitude)` exactly, digit by digit.
fn parse_decimal(number: &str, magnitude: u32) -> Result<u64, ParseErrorKind> {
    let integer_digits = number.find('.').unwrap_or(number.len());
    // Number of digits which end up left of the decimal point after scaling.
    let mut places = magnitude as usize * 3 + integer_digits;
    let mut digits = number
        .bytes()
        .filter(|byte| *byte != b'.')
        .map(|byte| (byte - b'0') as u64);
    let mut value = 0u64;
    for digit in digits.by_ref().take(places) {
        value = shift_digit(value, digit)?;
        places -= 1;
    }
    for _ in 0..places {
        value = shift_digit(value, 0)?;
    }
    // Whatever digits remain are the fraction of a byte.
    if let Some(first) = digits.next() {
        let round_up = match first {
            6..=9 => true,
            5 => value & 1 == 1 || digits.any(|digit| digit != 0),
            _ => false,
        };
        if round_up {
            value = value.checked_add(1).ok_or(ParseErrorKind::Range)?;
        }
    }
    Ok(value)
}

/// Append a decimal digit to the value.
fn shift_digit(value: u64, digit: u64) -> Result<u64, ParseErrorKind> {
    value
        .checked_mul(10)
        .and_then(|value| value.checked_add(digit))
        .ok_or(ParseErrorKind::Range)
}
