//! Length-prefixed byte payloads.

use crate::buf_decoder::BufDecoder;
use crate::errors::header_u32;
use crate::{Codec, CodecError, Encoder};

/// ByteVec: `u32le payload_len ++ payload`, where the payload is the
/// encoding of the inner codec.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ByteVec<C> {
    inner: C,
}

impl<C: Codec> ByteVec<C> {
    /// Constructs a length-prefixed wrapper of `inner`.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Codec> Codec for ByteVec<C> {
    type Encodable = C::Encodable;
    type Decoded = C::Decoded;

    fn byte_length(&self) -> Option<usize> {
        None
    }

    fn encode_to(&self, value: &C::Encodable, enc: &mut impl Encoder) -> Result<(), CodecError> {
        let start = enc.position();
        enc.write_buf(&[0; 4])?;
        self.inner.encode_to(value, enc)?;
        let len = header_u32(enc.position() - start - 4)?;
        enc.patch_buf(start, &len.to_le_bytes())
    }

    fn decode(&self, buf: &[u8]) -> Result<C::Decoded, CodecError> {
        let dec = BufDecoder::new(buf);
        let len = dec.read_len_at(0)?;
        let payload = dec.rest(4)?;
        if payload.len() != len {
            return Err(CodecError::SizeMismatch {
                what: "bytevec",
                expected: len,
                actual: payload.len(),
            });
        }
        self.inner.decode(payload)
    }
}
