//! Error types for huekit

use thiserror::Error;

/// Result type for huekit parse operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Reasons a color descriptor could not be turned into a color
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Input was empty or whitespace only
    #[error("empty color string")]
    Empty,

    /// A numeric token failed to parse
    #[error("malformed number: '{token}'")]
    MalformedNumber { token: String },

    /// Wrong number of comma-separated tokens for the grammar
    #[error("expected {expected} comma-separated values, got {found}")]
    WrongArity { expected: &'static str, found: usize },

    /// No stage could resolve the name to a hex value
    #[error("unresolved color name: '{0}'")]
    UnresolvedName(String),

    /// A `#` string with a bad length or digit
    #[error("invalid hex color: '{0}'")]
    InvalidHex(String),

    /// A channel value outside [0, 255]
    #[error("channel value out of range: {value}")]
    OutOfRange { value: String },

    /// Unrecognized grammar name
    #[error("unknown color format: '{0}'")]
    UnknownFormat(String),
}

impl ParseError {
    pub(crate) fn malformed(token: &str) -> Self {
        Self::MalformedNumber {
            token: token.trim().to_string(),
        }
    }

    pub(crate) fn out_of_range(value: impl ToString) -> Self {
        Self::OutOfRange {
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ParseError::Empty.to_string(), "empty color string");
        assert_eq!(
            ParseError::WrongArity {
                expected: "3",
                found: 2
            }
            .to_string(),
            "expected 3 comma-separated values, got 2"
        );
        assert_eq!(
            ParseError::malformed(" 12x ").to_string(),
            "malformed number: '12x'"
        );
    }
}
