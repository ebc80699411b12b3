use thiserror::Error;

/// Errors parsing the text forms of chain types.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// Missing `0x` prefix or a non-hex digit.
    #[error("invalid hex string {0:?}")]
    InvalidHex(String),

    /// Hex string decodes to the wrong number of bytes.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required byte count.
        expected: usize,
        /// Decoded byte count.
        actual: usize,
    },

    /// Name that does not match any enum value.
    #[error("unknown {ty} {value:?}")]
    UnknownName {
        /// Enum being parsed.
        ty: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// Wrapper result type.
pub type ParseResult<T> = Result<T, ParseError>;
