//! Fixed-count sequences.

use crate::buf_decoder::BufDecoder;
use crate::vector::encode_sized;
use crate::{Codec, CodecError, Encoder, FixedCodec};

/// Array: exactly `count` fixed-size items concatenated, with no header.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Array<C> {
    item: C,
    count: usize,
}

impl<C: FixedCodec> Array<C> {
    /// Constructs an array of `count` items of `item`.
    pub fn new(item: C, count: usize) -> Self {
        Self { item, count }
    }

    /// Number of items.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<C: FixedCodec> Codec for Array<C> {
    type Encodable = Vec<C::Encodable>;
    type Decoded = Vec<C::Decoded>;

    fn byte_length(&self) -> Option<usize> {
        Some(self.fixed_len())
    }

    fn encode_to(
        &self,
        values: &Vec<C::Encodable>,
        enc: &mut impl Encoder,
    ) -> Result<(), CodecError> {
        if values.len() != self.count {
            return Err(CodecError::SizeMismatch {
                what: "array items",
                expected: self.count,
                actual: values.len(),
            });
        }
        let item_len = self.item.fixed_len();
        for (i, value) in values.iter().enumerate() {
            encode_sized(&self.item, item_len, value, enc).map_err(|e| e.at_item(i))?;
        }
        Ok(())
    }

    fn decode(&self, buf: &[u8]) -> Result<Vec<C::Decoded>, CodecError> {
        let dec = BufDecoder::new(buf);
        dec.expect_len("array", self.fixed_len())?;
        let item_len = self.item.fixed_len();
        (0..self.count)
            .map(|i| {
                let bytes = dec.slice(i * item_len, (i + 1) * item_len)?;
                self.item.decode(bytes).map_err(|e| e.at_item(i))
            })
            .collect()
    }
}

impl<C: FixedCodec> FixedCodec for Array<C> {
    fn fixed_len(&self) -> usize {
        self.item.fixed_len() * self.count
    }
}
