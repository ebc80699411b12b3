//! One-byte enums: script hash types and cell dep types.

use std::fmt;
use std::str::FromStr;

use ccc_molecule::{BufDecoder, Codec, CodecError, Encoder, FixedCodec, Molecule};

use crate::error::ParseError;

/// How a script's `code_hash` locates its code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashType {
    /// Match the data hash of a cell, run on the initial VM version.
    #[default]
    Data,
    /// Match the type script hash of a cell.
    Type,
    /// Match the data hash of a cell, run on VM version 1.
    Data1,
    /// Match the data hash of a cell, run on VM version 2.
    Data2,
}

impl HashType {
    /// Wire byte of the hash type.
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Data => 0,
            Self::Type => 1,
            Self::Data1 => 2,
            Self::Data2 => 4,
        }
    }

    /// Hash type for a wire byte.
    pub fn from_byte(b: u8) -> Result<Self, CodecError> {
        match b {
            0 => Ok(Self::Data),
            1 => Ok(Self::Type),
            2 => Ok(Self::Data1),
            4 => Ok(Self::Data2),
            v => Err(CodecError::InvalidDiscriminant {
                ty: "HashType",
                value: u32::from(v),
            }),
        }
    }

    /// Name used in text forms.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Type => "type",
            Self::Data1 => "data1",
            Self::Data2 => "data2",
        }
    }
}

/// How a cell dep's cell is used.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DepType {
    /// The cell itself holds code.
    #[default]
    Code,
    /// The cell holds a list of out points, each of which becomes a dep.
    DepGroup,
}

impl DepType {
    /// Wire byte of the dep type.
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Code => 0,
            Self::DepGroup => 1,
        }
    }

    /// Dep type for a wire byte.
    pub fn from_byte(b: u8) -> Result<Self, CodecError> {
        match b {
            0 => Ok(Self::Code),
            1 => Ok(Self::DepGroup),
            v => Err(CodecError::InvalidDiscriminant {
                ty: "DepType",
                value: u32::from(v),
            }),
        }
    }

    /// Name used in text forms.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::DepGroup => "depGroup",
        }
    }
}

/// Implements display, parsing and a single byte codec for an enum with
/// `to_byte`/`from_byte`/`as_str`.
macro_rules! impl_byte_enum {
    ($ty:ident, $codec:ident, [$($variant:ident),*]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                [$(Self::$variant),*]
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ParseError::UnknownName {
                        ty: stringify!($ty),
                        value: s.to_owned(),
                    })
            }
        }

        #[doc = concat!("Single byte codec for [`", stringify!($ty), "`].")]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
        pub struct $codec;

        impl Codec for $codec {
            type Encodable = $ty;
            type Decoded = $ty;

            fn byte_length(&self) -> Option<usize> {
                Some(1)
            }

            fn encode_to(&self, value: &$ty, enc: &mut impl Encoder) -> Result<(), CodecError> {
                enc.write_buf(&[value.to_byte()])
            }

            fn decode(&self, buf: &[u8]) -> Result<$ty, CodecError> {
                let [b] = BufDecoder::new(buf).exact_arr::<1>(stringify!($ty))?;
                $ty::from_byte(b)
            }
        }

        impl FixedCodec for $codec {
            fn fixed_len(&self) -> usize {
                1
            }
        }

        impl Molecule for $ty {
            type Codec = $codec;
        }
    };
}

impl_byte_enum!(HashType, HashTypeCodec, [Data, Type, Data1, Data2]);
impl_byte_enum!(DepType, DepTypeCodec, [Code, DepGroup]);
