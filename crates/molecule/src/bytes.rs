//! Leaf codecs over raw bytes.

use crate::buf_decoder::BufDecoder;
use crate::{Codec, CodecError, Encoder, FixedCodec};

/// Exactly `N` bytes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FixedBytes<const N: usize>;

impl<const N: usize> Codec for FixedBytes<N> {
    type Encodable = [u8; N];
    type Decoded = [u8; N];

    fn byte_length(&self) -> Option<usize> {
        Some(N)
    }

    fn encode_to(&self, value: &[u8; N], enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(value)
    }

    fn decode(&self, buf: &[u8]) -> Result<[u8; N], CodecError> {
        BufDecoder::new(buf).exact_arr("fixed bytes")
    }
}

impl<const N: usize> FixedCodec for FixedBytes<N> {
    fn fixed_len(&self) -> usize {
        N
    }
}

/// One byte.
pub type Byte = FixedBytes<1>;
/// 4 bytes.
pub type Byte4 = FixedBytes<4>;
/// 8 bytes.
pub type Byte8 = FixedBytes<8>;
/// 16 bytes.
pub type Byte16 = FixedBytes<16>;
/// 32 bytes, the size of a hash.
pub type Byte32 = FixedBytes<32>;

/// Passes bytes through unchanged.  Takes the whole buffer on decode, so it
/// only makes sense inside a framing codec such as [`crate::ByteVec`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Raw;

impl Codec for Raw {
    type Encodable = Vec<u8>;
    type Decoded = Vec<u8>;

    fn byte_length(&self) -> Option<usize> {
        None
    }

    fn encode_to(&self, value: &Vec<u8>, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(value)
    }

    fn decode(&self, buf: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(buf.to_vec())
    }
}

/// UTF-8 text without framing.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Utf8;

impl Codec for Utf8 {
    type Encodable = String;
    type Decoded = String;

    fn byte_length(&self) -> Option<usize> {
        None
    }

    fn encode_to(&self, value: &String, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(value.as_bytes())
    }

    fn decode(&self, buf: &[u8]) -> Result<String, CodecError> {
        let s = std::str::from_utf8(buf).map_err(|_| CodecError::InvalidUtf8)?;
        Ok(s.to_owned())
    }
}

/// A single `0` or `1` byte.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Bool;

impl Codec for Bool {
    type Encodable = bool;
    type Decoded = bool;

    fn byte_length(&self) -> Option<usize> {
        Some(1)
    }

    fn encode_to(&self, value: &bool, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&[u8::from(*value)])
    }

    fn decode(&self, buf: &[u8]) -> Result<bool, CodecError> {
        let [b] = BufDecoder::new(buf).exact_arr::<1>("bool")?;
        match b {
            0 => Ok(false),
            1 => Ok(true),
            v => Err(CodecError::InvalidDiscriminant {
                ty: "bool",
                value: u32::from(v),
            }),
        }
    }
}

impl FixedCodec for Bool {
    fn fixed_len(&self) -> usize {
        1
    }
}

/// `N` zero bytes carrying no value.  Decoding only checks the length.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Padding<const N: usize>;

impl<const N: usize> Codec for Padding<N> {
    type Encodable = ();
    type Decoded = ();

    fn byte_length(&self) -> Option<usize> {
        Some(N)
    }

    fn encode_to(&self, _value: &(), enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&[0; N])
    }

    fn decode(&self, buf: &[u8]) -> Result<(), CodecError> {
        BufDecoder::new(buf).expect_len("padding", N)
    }
}

impl<const N: usize> FixedCodec for Padding<N> {
    fn fixed_len(&self) -> usize {
        N
    }
}
