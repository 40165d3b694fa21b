//! Error types for the literal scanner and the symbol tables.

use std::error::Error;
use std::fmt;

use metron_core::CastError;

/// A unit literal could not be parsed.
///
/// Offsets are byte positions into the text handed to the parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// No decimal number starts at `offset`.
    InvalidNumber {
        /// Where the number was expected.
        offset: usize,
    },
    /// The suffix after a number is in neither the fixed table nor the
    /// registry.
    UnknownSymbol {
        /// The unrecognised suffix.
        symbol: String,
        /// Where the suffix starts.
        offset: usize,
    },
    /// A complete literal was read but more text follows it.
    TrailingInput {
        /// Start of the unconsumed text.
        offset: usize,
    },
    /// The input ended while another value was required.
    UnexpectedEnd {
        /// Length of the input.
        offset: usize,
    },
    /// The literal parsed but has the wrong dimension for the requested type.
    Cast(CastError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { offset } => {
                write!(f, "cannot parse unit value at offset {offset}")
            }
            Self::UnknownSymbol { symbol, offset } => {
                write!(f, "unknown unit symbol \"{symbol}\" at offset {offset}")
            }
            Self::TrailingInput { offset } => {
                write!(f, "unexpected trailing input at offset {offset}")
            }
            Self::UnexpectedEnd { offset } => {
                write!(f, "unexpected end of input at offset {offset}")
            }
            Self::Cast(e) => write!(f, "cast failed: {e}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cast(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CastError> for ParseError {
    fn from(e: CastError) -> Self {
        Self::Cast(e)
    }
}
