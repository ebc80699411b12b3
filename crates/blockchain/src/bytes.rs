//! Byte newtypes with `0x` hex text forms.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use ccc_molecule::impl_wrapper_molecule;

use crate::error::{ParseError, ParseResult};

/// Decodes a `0x` prefixed hex string.
pub(crate) fn decode_hex(s: &str) -> ParseResult<Vec<u8>> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| ParseError::InvalidHex(s.to_owned()))?;
    hex::decode(digits).map_err(|_| ParseError::InvalidHex(s.to_owned()))
}

macro_rules! impl_fixed_hash {
    ($(#[$attr:meta])* $name:ident, $len:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub [u8; $len]);

        impl $name {
            /// Length in bytes.
            pub const LEN: usize = $len;

            /// Creates a new value from a byte array.
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Returns the bytes.
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Converts to the inner byte array.
            pub const fn into_inner(self) -> [u8; $len] {
                self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $len] {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({self})", stringify!($name))
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let bytes = decode_hex(s)?;
                let arr: [u8; $len] = bytes.as_slice().try_into().map_err(|_| {
                    ParseError::InvalidLength {
                        expected: $len,
                        actual: bytes.len(),
                    }
                })?;
                Ok(Self(arr))
            }
        }

        impl_wrapper_molecule!($name => [u8; $len]);
    };
}

impl_fixed_hash!(
    /// A 32-byte hash: code hashes, tx hashes, header fields.
    H256, 32
);

impl_fixed_hash!(
    /// First 10 bytes of a proposed transaction's hash.
    ProposalShortId, 10
);

/// Variable-length bytes, length prefixed on the wire.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JsonBytes(pub Vec<u8>);

impl JsonBytes {
    /// Returns the bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Converts to the inner vec.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for JsonBytes {
    fn from(v: Vec<u8>) -> Self {
        Self(v)
    }
}

impl From<&[u8]> for JsonBytes {
    fn from(v: &[u8]) -> Self {
        Self(v.to_vec())
    }
}

impl From<JsonBytes> for Vec<u8> {
    fn from(v: JsonBytes) -> Self {
        v.0
    }
}

impl Deref for JsonBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for JsonBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for JsonBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for JsonBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsonBytes({self})")
    }
}

impl FromStr for JsonBytes {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_hex(s).map(Self)
    }
}

impl_wrapper_molecule!(JsonBytes => Vec<u8>);
