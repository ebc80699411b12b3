//! Homogeneous sequences: fixvec, dynvec and the layout-picking vector.

use tracing::trace;

use crate::buf_decoder::BufDecoder;
use crate::errors::header_u32;
use crate::header::{OffsetHeader, OffsetHeaderWriter};
use crate::{Codec, CodecError, Encoder, FixedCodec};

/// Fixvec: `u32le count ++ item*`, for items of a fixed size.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FixVec<C> {
    item: C,
}

impl<C: FixedCodec> FixVec<C> {
    /// Constructs a fixvec of `item`.
    pub fn new(item: C) -> Self {
        Self { item }
    }
}

impl<C: FixedCodec> Codec for FixVec<C> {
    type Encodable = Vec<C::Encodable>;
    type Decoded = Vec<C::Decoded>;

    fn byte_length(&self) -> Option<usize> {
        None
    }

    fn encode_to(
        &self,
        values: &Vec<C::Encodable>,
        enc: &mut impl Encoder,
    ) -> Result<(), CodecError> {
        encode_fixvec(&self.item, self.item.fixed_len(), values, enc)
    }

    fn decode(&self, buf: &[u8]) -> Result<Vec<C::Decoded>, CodecError> {
        decode_fixvec(&self.item, self.item.fixed_len(), buf)
    }
}

/// Dynvec: offset header followed by item bodies, for items of any size.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct DynVec<C> {
    item: C,
}

impl<C: Codec> DynVec<C> {
    /// Constructs a dynvec of `item`.
    pub fn new(item: C) -> Self {
        Self { item }
    }
}

impl<C: Codec> Codec for DynVec<C> {
    type Encodable = Vec<C::Encodable>;
    type Decoded = Vec<C::Decoded>;

    fn byte_length(&self) -> Option<usize> {
        None
    }

    fn encode_to(
        &self,
        values: &Vec<C::Encodable>,
        enc: &mut impl Encoder,
    ) -> Result<(), CodecError> {
        encode_dynvec(&self.item, values, enc)
    }

    fn decode(&self, buf: &[u8]) -> Result<Vec<C::Decoded>, CodecError> {
        decode_dynvec(&self.item, buf)
    }
}

/// Vector that picks fixvec layout when the item codec has a fixed size and
/// dynvec layout otherwise.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Vector<C> {
    item: C,
    item_len: Option<usize>,
}

impl<C: Codec> Vector<C> {
    /// Constructs a vector of `item`.
    pub fn new(item: C) -> Self {
        let item_len = item.byte_length();
        Self { item, item_len }
    }

    /// Whether this vector uses the fixvec layout.
    pub fn is_fixed(&self) -> bool {
        self.item_len.is_some()
    }
}

impl<C: Codec + Default> Default for Vector<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Codec> Codec for Vector<C> {
    type Encodable = Vec<C::Encodable>;
    type Decoded = Vec<C::Decoded>;

    fn byte_length(&self) -> Option<usize> {
        None
    }

    fn encode_to(
        &self,
        values: &Vec<C::Encodable>,
        enc: &mut impl Encoder,
    ) -> Result<(), CodecError> {
        match self.item_len {
            Some(len) => encode_fixvec(&self.item, len, values, enc),
            None => encode_dynvec(&self.item, values, enc),
        }
    }

    fn decode(&self, buf: &[u8]) -> Result<Vec<C::Decoded>, CodecError> {
        match self.item_len {
            Some(len) => decode_fixvec(&self.item, len, buf),
            None => decode_dynvec(&self.item, buf),
        }
    }
}

fn encode_fixvec<C: Codec>(
    item: &C,
    item_len: usize,
    values: &[C::Encodable],
    enc: &mut impl Encoder,
) -> Result<(), CodecError> {
    let start = enc.position();
    enc.write_buf(&header_u32(values.len())?.to_le_bytes())?;
    for (i, value) in values.iter().enumerate() {
        encode_sized(item, item_len, value, enc).map_err(|e| e.at_item(i))?;
    }
    header_u32(enc.position() - start)?;
    Ok(())
}

/// Encodes one item and checks it came out at the size the layout assumes.
pub(crate) fn encode_sized<C: Codec>(
    codec: &C,
    len: usize,
    value: &C::Encodable,
    enc: &mut impl Encoder,
) -> Result<(), CodecError> {
    let before = enc.position();
    codec.encode_to(value, enc)?;
    let written = enc.position() - before;
    if written != len {
        return Err(CodecError::SizeMismatch {
            what: "fixed item",
            expected: len,
            actual: written,
        });
    }
    Ok(())
}

fn decode_fixvec<C: Codec>(
    item: &C,
    item_len: usize,
    buf: &[u8],
) -> Result<Vec<C::Decoded>, CodecError> {
    let dec = BufDecoder::new(buf);
    let count = dec.read_len_at(0)?;
    let expected = count
        .checked_mul(item_len)
        .and_then(|n| n.checked_add(4))
        .ok_or(CodecError::OverflowContainer(count))?;
    dec.expect_len("fixvec", expected)?;
    trace!(%count, %item_len, "decoding fixvec");

    (0..count)
        .map(|i| {
            let start = 4 + i * item_len;
            let bytes = dec.slice(start, start + item_len)?;
            item.decode(bytes).map_err(|e| e.at_item(i))
        })
        .collect()
}

fn encode_dynvec<C: Codec>(
    item: &C,
    values: &[C::Encodable],
    enc: &mut impl Encoder,
) -> Result<(), CodecError> {
    let mut header = OffsetHeaderWriter::begin(enc, values.len())?;
    for (i, value) in values.iter().enumerate() {
        header.mark(enc)?;
        item.encode_to(value, enc).map_err(|e| e.at_item(i))?;
    }
    header.finish(enc)
}

fn decode_dynvec<C: Codec>(item: &C, buf: &[u8]) -> Result<Vec<C::Decoded>, CodecError> {
    let header = OffsetHeader::parse(buf, "dynvec")?;
    trace!(count = header.count(), "decoding dynvec");
    (0..header.count())
        .map(|i| item.decode(header.item(i)?).map_err(|e| e.at_item(i)))
        .collect()
}
