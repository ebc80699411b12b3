use thiserror::Error;

/// Errors from ccc-molecule.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CodecError {
    /// A read ran past the end of the buffer.
    #[error("buffer too short: need {needed} bytes at offset {offset}, have {available}")]
    BufferTooShort {
        /// Where the read started.
        offset: usize,
        /// How many bytes it wanted.
        needed: usize,
        /// How many bytes were left from `offset`.
        available: usize,
    },

    /// A buffer, header or item list did not have the size its layout
    /// requires.
    #[error("{what}: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Layout that was being checked.
        what: &'static str,
        /// Size the layout requires.
        expected: usize,
        /// Size that was found.
        actual: usize,
    },

    /// An offset header slot is misaligned, out of bounds or decreasing.
    #[error("invalid offset {offset} in header slot {index}")]
    InvalidOffset {
        /// Header slot index, `0` being the first item.
        index: usize,
        /// The offending value.
        offset: usize,
    },

    /// A table carries a different number of fields than its schema.
    #[error("expected {expected} fields, found {found}")]
    FieldCountMismatch {
        /// Number of fields in the schema.
        expected: usize,
        /// Number of fields on the wire.
        found: usize,
    },

    /// A union tag or enum byte does not name any known variant.
    #[error("invalid discriminant {value} for {ty}")]
    InvalidDiscriminant {
        /// Type being decoded.
        ty: &'static str,
        /// The value read.
        value: u32,
    },

    /// A value does not fit the target width or is negative.
    #[error("value {value} out of range for {ty}")]
    ValueOutOfRange {
        /// Target type.
        ty: &'static str,
        /// Rendered value.
        value: String,
    },

    /// A field or variant name that the schema does not declare.
    #[error("unknown field or variant `{0}`")]
    UnknownFieldOrVariant(String),

    /// A container grew past what a `u32` size header can describe.
    #[error("container of {0} bytes overflows the u32 size header")]
    OverflowContainer(usize),

    /// Decoded string payload is not valid UTF-8.
    #[error("invalid utf-8 payload")]
    InvalidUtf8,

    /// A hex string could not be parsed.
    #[error("invalid hex string {0:?}")]
    InvalidHex(String),

    /// Error raised while handling a named field, variant or vector item.
    #[error("{field}: {source}")]
    InField {
        /// Field name, variant name or `[index]`.
        field: String,
        /// The underlying error.
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Wraps the error with the name of the field it was raised in.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::InField {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Wraps the error with the index of the vector item it was raised in.
    pub fn at_item(self, index: usize) -> Self {
        self.in_field(format!("[{index}]"))
    }

    /// Returns the innermost error, stripping field context.
    pub fn root(&self) -> &CodecError {
        match self {
            Self::InField { source, .. } => source.root(),
            e => e,
        }
    }

    /// Returns the field path leading to the root error, like
    /// `raw.outputs[0].lock.args`.  Empty if there is no context.
    pub fn path(&self) -> String {
        let mut path = String::new();
        let mut cur = self;
        while let Self::InField { field, source } = cur {
            if !path.is_empty() && !field.starts_with('[') {
                path.push('.');
            }
            path.push_str(field);
            cur = source;
        }
        path
    }
}

/// Converts a buffer size into a `u32` header value.
pub(crate) fn header_u32(len: usize) -> Result<u32, CodecError> {
    u32::try_from(len).map_err(|_| CodecError::OverflowContainer(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_and_root() {
        let e = CodecError::InvalidUtf8
            .in_field("args")
            .in_field("lock")
            .at_item(0)
            .in_field("outputs");
        assert_eq!(e.path(), "outputs[0].lock.args");
        assert_eq!(e.root(), &CodecError::InvalidUtf8);
        assert_eq!(CodecError::InvalidUtf8.path(), "");
    }

    #[test]
    fn test_display_chains_context() {
        let e = CodecError::OverflowContainer(5).in_field("args");
        assert_eq!(
            e.to_string(),
            "args: container of 5 bytes overflows the u32 size header"
        );
    }

    #[test]
    fn test_header_u32() {
        assert_eq!(header_u32(16).unwrap(), 16);
        assert!(matches!(
            header_u32(usize::MAX),
            Err(CodecError::OverflowContainer(_))
        ));
    }
}
