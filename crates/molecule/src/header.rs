//! The `total_size ++ offsets` header shared by dynvecs and tables.

use tracing::debug;

use crate::buf_decoder::BufDecoder;
use crate::errors::header_u32;
use crate::{CodecError, Encoder};

const SLOT: usize = 4;

/// Writes an offset header in place.
///
/// The header is reserved up front as zeroes, then each slot is patched with
/// the relative position of its item when the item starts, and the total
/// size is patched last.
#[derive(Debug)]
pub(crate) struct OffsetHeaderWriter {
    start: usize,
    slots: usize,
    marked: usize,
}

impl OffsetHeaderWriter {
    pub(crate) fn begin(enc: &mut impl Encoder, slots: usize) -> Result<Self, CodecError> {
        let start = enc.position();
        for _ in 0..=slots {
            enc.write_buf(&[0; SLOT])?;
        }
        Ok(Self {
            start,
            slots,
            marked: 0,
        })
    }

    /// Number of slots filled so far.
    pub(crate) fn marked(&self) -> usize {
        self.marked
    }

    /// Records that the next item starts at the current position.
    pub(crate) fn mark(&mut self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        if self.marked >= self.slots {
            return Err(CodecError::FieldCountMismatch {
                expected: self.slots,
                found: self.marked + 1,
            });
        }
        let offset = header_u32(enc.position() - self.start)?;
        enc.patch_buf(self.start + SLOT * (self.marked + 1), &offset.to_le_bytes())?;
        self.marked += 1;
        Ok(())
    }

    pub(crate) fn finish(self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        if self.marked != self.slots {
            return Err(CodecError::FieldCountMismatch {
                expected: self.slots,
                found: self.marked,
            });
        }
        let total = header_u32(enc.position() - self.start)?;
        enc.patch_buf(self.start, &total.to_le_bytes())
    }
}

/// A parsed and validated offset header.
#[derive(Debug)]
pub(crate) struct OffsetHeader<'b> {
    dec: BufDecoder<'b>,
    /// Item start offsets followed by the total size.
    bounds: Vec<usize>,
}

impl<'b> OffsetHeader<'b> {
    /// Parses the header of `buf`, checking that the total size matches the
    /// buffer and that offsets are aligned, in bounds and non-decreasing.
    pub(crate) fn parse(buf: &'b [u8], what: &'static str) -> Result<Self, CodecError> {
        let dec = BufDecoder::new(buf);
        let total = dec.read_len_at(0)?;
        dec.expect_len(what, total)?;

        if total == SLOT {
            return Ok(Self {
                dec,
                bounds: vec![total],
            });
        }

        let first = dec.read_len_at(SLOT)?;
        if first % SLOT != 0 || first < 2 * SLOT || first > total {
            debug!(%what, %first, %total, "rejecting first offset");
            return Err(CodecError::InvalidOffset {
                index: 0,
                offset: first,
            });
        }

        let count = first / SLOT - 1;
        let mut bounds = Vec::with_capacity(count + 1);
        bounds.push(first);
        for index in 1..count {
            let offset = dec.read_len_at(SLOT * (index + 1))?;
            if offset < bounds[index - 1] || offset > total {
                debug!(%what, %index, %offset, "rejecting offset");
                return Err(CodecError::InvalidOffset { index, offset });
            }
            bounds.push(offset);
        }
        bounds.push(total);

        Ok(Self { dec, bounds })
    }

    /// Number of items the header describes.
    pub(crate) fn count(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Returns the bytes of item `index`.
    pub(crate) fn item(&self, index: usize) -> Result<&'b [u8], CodecError> {
        match (self.bounds.get(index), self.bounds.get(index + 1)) {
            (Some(&start), Some(&end)) => self.dec.slice(start, end),
            _ => Err(CodecError::FieldCountMismatch {
                expected: index + 1,
                found: self.count(),
            }),
        }
    }
}
