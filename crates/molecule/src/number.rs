//! Fixed-width unsigned integer codecs.

use num_bigint::{BigInt, Sign};

use crate::buf_decoder::BufDecoder;
use crate::{Codec, CodecError, Encoder, FixedCodec};

/// Byte order of a fixed-width integer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Endian {
    /// Least significant byte first.  Molecule's native order.
    #[default]
    Little,

    /// Most significant byte first.
    Big,
}

/// Unsigned integer of `N` bytes over arbitrary precision values.
///
/// Encoding rejects negative values and values of `2^(8N)` or more.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Uint<const N: usize> {
    endian: Endian,
}

impl<const N: usize> Uint<N> {
    /// Constructs an integer codec with the given byte order.
    pub const fn new(endian: Endian) -> Self {
        Self { endian }
    }

    /// Little endian codec.
    pub const fn le() -> Self {
        Self::new(Endian::Little)
    }

    /// Big endian codec.
    pub const fn be() -> Self {
        Self::new(Endian::Big)
    }

    /// Byte order of this codec.
    pub fn endian(&self) -> Endian {
        self.endian
    }
}

impl<const N: usize> Codec for Uint<N> {
    type Encodable = BigInt;
    type Decoded = BigInt;

    fn byte_length(&self) -> Option<usize> {
        Some(N)
    }

    fn encode_to(&self, value: &BigInt, enc: &mut impl Encoder) -> Result<(), CodecError> {
        let (sign, mut bytes) = value.to_bytes_le();
        if sign == Sign::Minus || bytes.len() > N {
            return Err(CodecError::ValueOutOfRange {
                ty: "uint",
                value: format!("{value} (width {N} bytes)"),
            });
        }
        bytes.resize(N, 0);
        if self.endian == Endian::Big {
            bytes.reverse();
        }
        enc.write_buf(&bytes)
    }

    fn decode(&self, buf: &[u8]) -> Result<BigInt, CodecError> {
        BufDecoder::new(buf).expect_len("uint", N)?;
        Ok(match self.endian {
            Endian::Little => BigInt::from_bytes_le(Sign::Plus, buf),
            Endian::Big => BigInt::from_bytes_be(Sign::Plus, buf),
        })
    }
}

impl<const N: usize> FixedCodec for Uint<N> {
    fn fixed_len(&self) -> usize {
        N
    }
}

/// Simple macro to wrap the native unsigned ints, not much to see.
macro_rules! impl_native_uint_codec {
    ( $(#[$attr:meta])* $name:ident, $ity:ident $bytes:literal, $to:ident, $from:ident ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
        pub struct $name;

        impl Codec for $name {
            type Encodable = $ity;
            type Decoded = $ity;

            fn byte_length(&self) -> Option<usize> {
                Some($bytes)
            }

            fn encode_to(&self, value: &$ity, enc: &mut impl Encoder) -> Result<(), CodecError> {
                enc.write_buf(&value.$to())
            }

            fn decode(&self, buf: &[u8]) -> Result<$ity, CodecError> {
                let arr: [u8; $bytes] = BufDecoder::new(buf).exact_arr(stringify!($ity))?;
                Ok(<$ity>::$from(arr))
            }
        }

        impl FixedCodec for $name {
            fn fixed_len(&self) -> usize {
                $bytes
            }
        }
    };
}

impl_native_uint_codec!(
    /// Single byte as `u8`.
    U8, u8 1, to_le_bytes, from_le_bytes
);
impl_native_uint_codec!(
    /// Little endian `u16`.
    U16Le, u16 2, to_le_bytes, from_le_bytes
);
impl_native_uint_codec!(
    /// Big endian `u16`.
    U16Be, u16 2, to_be_bytes, from_be_bytes
);
impl_native_uint_codec!(
    /// Little endian `u32`.
    U32Le, u32 4, to_le_bytes, from_le_bytes
);
impl_native_uint_codec!(
    /// Big endian `u32`.
    U32Be, u32 4, to_be_bytes, from_be_bytes
);
impl_native_uint_codec!(
    /// Little endian `u64`.
    U64Le, u64 8, to_le_bytes, from_le_bytes
);
impl_native_uint_codec!(
    /// Big endian `u64`.
    U64Be, u64 8, to_be_bytes, from_be_bytes
);
impl_native_uint_codec!(
    /// Little endian `u128`.
    U128Le, u128 16, to_le_bytes, from_le_bytes
);
impl_native_uint_codec!(
    /// Big endian `u128`.
    U128Be, u128 16, to_be_bytes, from_be_bytes
);
