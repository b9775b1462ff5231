//! Error types.

use alloc::string::String;

use thiserror::Error;

/// Unable to parse a byte size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse {input:?}: {kind}")]
pub struct ParseError {
    /// Offending input.
    input: String,
    /// What went wrong.
    #[source]
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        tracing::trace!(input, %kind, "rejecting byte size");
        Self {
            input: input.into(),
            kind,
        }
    }

    /// Input that could not be parsed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Kind of the error.
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Saturated value to use in place of a size that does not fit into [`u64`].
    ///
    /// Returns [`u64::MAX`] for [`ParseErrorKind::Range`] and [`None`] otherwise.
    pub fn saturated(&self) -> Option<u64> {
        match self.kind {
            ParseErrorKind::Range => Some(u64::MAX),
            _ => None,
        }
    }

    /// Indicates whether the size is too large to fit into [`u64`].
    pub fn is_range(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Range)
    }
}

/// Reason why a byte size could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input does not contain a single digit.
    #[error("missing number")]
    MissingNumber,
    /// The number has more than one decimal point.
    #[error("multiple decimal points")]
    MultipleDecimalPoint,
    /// The units following the number are not recognized.
    #[error("unknown units")]
    UnknownUnits,
    /// The number is not a valid floating-point literal (binary prefixes only).
    #[error("invalid number: {0}")]
    InvalidNumber(#[source] core::num::ParseFloatError),
    /// The byte size does not fit into [`u64`].
    #[error("byte size out of range")]
    Range,
}
