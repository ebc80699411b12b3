//! Tables: heterogeneous fields behind an offset header.

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::header::{OffsetHeader, OffsetHeaderWriter};
use crate::structure::{check_all_fields, expect_field};
use crate::{Codec, CodecError, Encoder};

/// Schema of a molecule table.  Usually derived with
/// `#[derive(Molecule)] #[molecule(table)]`.
pub trait TableFields: Sized {
    /// Type name, for diagnostics.
    const NAME: &'static str;

    /// Field names in wire order.
    const FIELDS: &'static [&'static str];

    /// Writes every field, in [`TableFields::FIELDS`] order.
    fn write_fields<E: Encoder>(&self, w: &mut TableWriter<'_, E>) -> Result<(), CodecError>;

    /// Reads every field, in [`TableFields::FIELDS`] order.
    fn read_fields(r: &mut TableReader<'_>) -> Result<Self, CodecError>;
}

/// Streams table fields into an encoder, patching the offset header as each
/// field starts.
#[derive(Debug)]
pub struct TableWriter<'e, E> {
    enc: &'e mut E,
    header: OffsetHeaderWriter,
    fields: &'static [&'static str],
}

impl<'e, E: Encoder> TableWriter<'e, E> {
    /// Reserves the header for a table with the given field names.
    pub fn begin(enc: &'e mut E, fields: &'static [&'static str]) -> Result<Self, CodecError> {
        let header = OffsetHeaderWriter::begin(enc, fields.len())?;
        Ok(Self {
            enc,
            header,
            fields,
        })
    }

    /// Writes the next field, which must be named `name`.
    pub fn write<C: Codec>(
        &mut self,
        name: &'static str,
        codec: &C,
        value: &C::Encodable,
    ) -> Result<(), CodecError> {
        expect_field(self.fields, self.header.marked(), name)?;
        self.header.mark(&mut *self.enc)?;
        codec
            .encode_to(value, &mut *self.enc)
            .map_err(|e| e.in_field(name))
    }

    /// Patches the total size once every field is written.
    pub fn finish(self) -> Result<(), CodecError> {
        check_all_fields(self.fields, self.header.marked())?;
        self.header.finish(self.enc)
    }
}

/// Reads table fields in order from a validated header.
#[derive(Debug)]
pub struct TableReader<'b> {
    header: OffsetHeader<'b>,
    fields: &'static [&'static str],
    next: usize,
}

impl<'b> TableReader<'b> {
    /// Reads the next field, which must be named `name`.
    pub fn read<C: Codec>(&mut self, name: &'static str, codec: &C) -> Result<C::Decoded, CodecError> {
        expect_field(self.fields, self.next, name)?;
        let bytes = self.header.item(self.next)?;
        self.next += 1;
        codec.decode(bytes).map_err(|e| e.in_field(name))
    }
}

/// How strictly a table decoder treats the field count.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TableConfig {
    /// Accept tables carrying more fields than the schema, ignoring the
    /// extra trailing fields.  Lets older readers accept tables from newer
    /// writers that appended fields.
    pub compatible: bool,
}

impl TableConfig {
    /// Field count must match exactly.
    pub const STRICT: Self = Self { compatible: false };

    /// Extra trailing fields are ignored.
    pub const COMPATIBLE: Self = Self { compatible: true };
}

/// Table codec over a [`TableFields`] schema.
pub struct Table<R> {
    config: TableConfig,
    _pd: PhantomData<fn() -> R>,
}

impl<R> Table<R> {
    /// Constructs the codec with the given config.
    pub fn with_config(config: TableConfig) -> Self {
        Self {
            config,
            _pd: PhantomData,
        }
    }

    /// Strict codec, the default.
    pub fn new() -> Self {
        Self::with_config(TableConfig::STRICT)
    }

    /// Codec that ignores extra trailing fields when decoding.
    pub fn compatible() -> Self {
        Self::with_config(TableConfig::COMPATIBLE)
    }

    /// Returns the config.
    pub fn config(&self) -> TableConfig {
        self.config
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Table<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Table<R> {}

impl<R: TableFields> fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("name", &R::NAME)
            .field("config", &self.config)
            .finish()
    }
}

impl<R: TableFields> Codec for Table<R> {
    type Encodable = R;
    type Decoded = R;

    fn byte_length(&self) -> Option<usize> {
        None
    }

    fn encode_to(&self, value: &R, enc: &mut impl Encoder) -> Result<(), CodecError> {
        let mut w = TableWriter::begin(enc, R::FIELDS)?;
        value.write_fields(&mut w)?;
        w.finish()
    }

    fn decode(&self, buf: &[u8]) -> Result<R, CodecError> {
        let header = OffsetHeader::parse(buf, R::NAME)?;
        let expected = R::FIELDS.len();
        let found = header.count();
        trace!(table = R::NAME, %found, "decoding table");

        if found < expected || (found > expected && !self.config.compatible) {
            return Err(CodecError::FieldCountMismatch { expected, found });
        }
        if found > expected {
            debug!(table = R::NAME, %expected, %found, "ignoring extra table fields");
        }

        let mut r = TableReader {
            header,
            fields: R::FIELDS,
            next: 0,
        };
        let value = R::read_fields(&mut r)?;
        check_all_fields(r.fields, r.next)?;
        Ok(value)
    }
}
