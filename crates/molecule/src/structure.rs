//! Structs: fixed-size fields concatenated in declaration order.

use std::fmt;
use std::marker::PhantomData;

use crate::buf_decoder::BufDecoder;
use crate::vector::encode_sized;
use crate::{Codec, CodecError, Encoder, FixedCodec};

/// Schema of a molecule struct.  Usually derived with
/// `#[derive(Molecule)] #[molecule(struct)]`.
pub trait StructFields: Sized {
    /// Type name, for diagnostics.
    const NAME: &'static str;

    /// Field names in wire order.
    const FIELDS: &'static [&'static str];

    /// Sum of the field sizes.
    fn byte_length() -> usize;

    /// Writes every field, in [`StructFields::FIELDS`] order.
    fn write_fields<E: Encoder>(&self, w: &mut StructWriter<'_, E>) -> Result<(), CodecError>;

    /// Reads every field, in [`StructFields::FIELDS`] order.
    fn read_fields(r: &mut StructReader<'_>) -> Result<Self, CodecError>;
}

/// Writes struct fields one after another.
#[derive(Debug)]
pub struct StructWriter<'e, E> {
    enc: &'e mut E,
    fields: &'static [&'static str],
    next: usize,
}

impl<'e, E: Encoder> StructWriter<'e, E> {
    /// Starts a struct with the given field names.
    pub fn new(enc: &'e mut E, fields: &'static [&'static str]) -> Self {
        Self {
            enc,
            fields,
            next: 0,
        }
    }

    /// Writes the next field, which must be named `name`.
    pub fn write<C: FixedCodec>(
        &mut self,
        name: &'static str,
        codec: &C,
        value: &C::Encodable,
    ) -> Result<(), CodecError> {
        expect_field(self.fields, self.next, name)?;
        self.next += 1;
        encode_sized(codec, codec.fixed_len(), value, &mut *self.enc).map_err(|e| e.in_field(name))
    }

    /// Checks that every field was written.
    pub fn finish(self) -> Result<(), CodecError> {
        check_all_fields(self.fields, self.next)
    }
}

/// Reads struct fields one after another.
#[derive(Debug)]
pub struct StructReader<'b> {
    dec: BufDecoder<'b>,
    fields: &'static [&'static str],
    next: usize,
    at: usize,
}

impl<'b> StructReader<'b> {
    /// Starts reading a struct buffer with the given field names.
    pub fn new(buf: &'b [u8], fields: &'static [&'static str]) -> Self {
        Self {
            dec: BufDecoder::new(buf),
            fields,
            next: 0,
            at: 0,
        }
    }

    /// Reads the next field, which must be named `name`.
    pub fn read<C: FixedCodec>(
        &mut self,
        name: &'static str,
        codec: &C,
    ) -> Result<C::Decoded, CodecError> {
        expect_field(self.fields, self.next, name)?;
        let end = self.at + codec.fixed_len();
        let bytes = self.dec.slice(self.at, end).map_err(|e| e.in_field(name))?;
        self.next += 1;
        self.at = end;
        codec.decode(bytes).map_err(|e| e.in_field(name))
    }

    /// Checks that every field was read.
    pub fn finish(self) -> Result<(), CodecError> {
        check_all_fields(self.fields, self.next)
    }
}

/// Checks that `name` is the field expected at position `next`.
pub(crate) fn expect_field(
    fields: &'static [&'static str],
    next: usize,
    name: &str,
) -> Result<(), CodecError> {
    match fields.get(next) {
        Some(expected) if *expected == name => Ok(()),
        _ => Err(CodecError::UnknownFieldOrVariant(name.to_owned())),
    }
}

pub(crate) fn check_all_fields(fields: &[&str], done: usize) -> Result<(), CodecError> {
    if done != fields.len() {
        return Err(CodecError::FieldCountMismatch {
            expected: fields.len(),
            found: done,
        });
    }
    Ok(())
}

/// Struct codec over a [`StructFields`] schema.
pub struct Struct<R> {
    _pd: PhantomData<fn() -> R>,
}

impl<R> Struct<R> {
    /// Constructs the codec.
    pub fn new() -> Self {
        Self { _pd: PhantomData }
    }
}

impl<R> Default for Struct<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Struct<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Struct<R> {}

impl<R: StructFields> fmt::Debug for Struct<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Struct").field(&R::NAME).finish()
    }
}

impl<R: StructFields> Codec for Struct<R> {
    type Encodable = R;
    type Decoded = R;

    fn byte_length(&self) -> Option<usize> {
        Some(R::byte_length())
    }

    fn encode_to(&self, value: &R, enc: &mut impl Encoder) -> Result<(), CodecError> {
        let mut w = StructWriter::new(enc, R::FIELDS);
        value.write_fields(&mut w)?;
        w.finish()
    }

    fn decode(&self, buf: &[u8]) -> Result<R, CodecError> {
        BufDecoder::new(buf).expect_len(R::NAME, R::byte_length())?;
        let mut r = StructReader::new(buf, R::FIELDS);
        let value = R::read_fields(&mut r)?;
        r.finish()?;
        Ok(value)
    }
}

impl<R: StructFields> FixedCodec for Struct<R> {
    fn fixed_len(&self) -> usize {
        R::byte_length()
    }
}
