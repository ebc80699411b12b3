//! Transactions.
//!
//! On the wire a transaction is `{ raw, witnesses }` with everything but the
//! witnesses nested in `raw`.  [`Transaction`] keeps all seven fields flat
//! and its codec nests and unnests them while encoding and decoding, so it
//! shares the wire bytes of [`TransactionWire`].

use ccc_molecule::{
    Codec, CodecError, Encoder, Molecule, Table, TableFields, TableReader, TableWriter, U32Le,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codecs::{CellDepVec, CellInputVec, CellOutputVec, H256Vec, JsonBytesVec};
use crate::{CellDep, CellInput, CellOutput, H256, JsonBytes};

const RAW_FIELDS: &[&str] = &[
    "version",
    "cellDeps",
    "headerDeps",
    "inputs",
    "outputs",
    "outputsData",
];

/// The signed part of a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RawTransaction {
    /// Transaction format version.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::quantity"))]
    pub version: u32,
    /// Cells providing code and dep groups.
    pub cell_deps: Vec<CellDep>,
    /// Headers the scripts may read.
    pub header_deps: Vec<H256>,
    /// Consumed cells.
    pub inputs: Vec<CellInput>,
    /// Created cells.
    pub outputs: Vec<CellOutput>,
    /// Data of each created cell, index aligned with `outputs`.
    pub outputs_data: Vec<JsonBytes>,
}

/// Borrowed view over the raw fields, shared by the nested and flat records.
struct RawFields<'a> {
    version: &'a u32,
    cell_deps: &'a Vec<CellDep>,
    header_deps: &'a Vec<H256>,
    inputs: &'a Vec<CellInput>,
    outputs: &'a Vec<CellOutput>,
    outputs_data: &'a Vec<JsonBytes>,
}

impl RawFields<'_> {
    fn write<E: Encoder>(&self, w: &mut TableWriter<'_, E>) -> Result<(), CodecError> {
        w.write("version", &U32Le, self.version)?;
        w.write("cellDeps", &CellDepVec::default(), self.cell_deps)?;
        w.write("headerDeps", &H256Vec::default(), self.header_deps)?;
        w.write("inputs", &CellInputVec::default(), self.inputs)?;
        w.write("outputs", &CellOutputVec::default(), self.outputs)?;
        w.write("outputsData", &JsonBytesVec::default(), self.outputs_data)
    }
}

impl<'a> From<&'a RawTransaction> for RawFields<'a> {
    fn from(raw: &'a RawTransaction) -> Self {
        Self {
            version: &raw.version,
            cell_deps: &raw.cell_deps,
            header_deps: &raw.header_deps,
            inputs: &raw.inputs,
            outputs: &raw.outputs,
            outputs_data: &raw.outputs_data,
        }
    }
}

impl<'a> From<&'a Transaction> for RawFields<'a> {
    fn from(tx: &'a Transaction) -> Self {
        Self {
            version: &tx.version,
            cell_deps: &tx.cell_deps,
            header_deps: &tx.header_deps,
            inputs: &tx.inputs,
            outputs: &tx.outputs,
            outputs_data: &tx.outputs_data,
        }
    }
}

impl TableFields for RawTransaction {
    const NAME: &'static str = "RawTransaction";
    const FIELDS: &'static [&'static str] = RAW_FIELDS;

    fn write_fields<E: Encoder>(&self, w: &mut TableWriter<'_, E>) -> Result<(), CodecError> {
        RawFields::from(self).write(w)
    }

    fn read_fields(r: &mut TableReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            version: r.read("version", &U32Le)?,
            cell_deps: r.read("cellDeps", &CellDepVec::default())?,
            header_deps: r.read("headerDeps", &H256Vec::default())?,
            inputs: r.read("inputs", &CellInputVec::default())?,
            outputs: r.read("outputs", &CellOutputVec::default())?,
            outputs_data: r.read("outputsData", &JsonBytesVec::default())?,
        })
    }
}

impl Molecule for RawTransaction {
    type Codec = Table<Self>;
}

/// Transaction in its wire shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[molecule(table)]
pub struct TransactionWire {
    /// The signed part.
    pub raw: RawTransaction,
    /// Unlock data, usually one entry per input.
    #[molecule(codec = JsonBytesVec)]
    pub witnesses: Vec<JsonBytes>,
}

/// A transaction with its raw fields lifted to the top level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Transaction {
    /// Transaction format version.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::quantity"))]
    pub version: u32,
    /// Cells providing code and dep groups.
    pub cell_deps: Vec<CellDep>,
    /// Headers the scripts may read.
    pub header_deps: Vec<H256>,
    /// Consumed cells.
    pub inputs: Vec<CellInput>,
    /// Created cells.
    pub outputs: Vec<CellOutput>,
    /// Data of each created cell, index aligned with `outputs`.
    pub outputs_data: Vec<JsonBytes>,
    /// Unlock data, usually one entry per input.
    pub witnesses: Vec<JsonBytes>,
}

impl Transaction {
    /// Joins a raw transaction and its witnesses.
    pub fn from_parts(raw: RawTransaction, witnesses: Vec<JsonBytes>) -> Self {
        let RawTransaction {
            version,
            cell_deps,
            header_deps,
            inputs,
            outputs,
            outputs_data,
        } = raw;
        Self {
            version,
            cell_deps,
            header_deps,
            inputs,
            outputs,
            outputs_data,
            witnesses,
        }
    }

    /// Flattens the wire shape.
    pub fn from_wire(wire: TransactionWire) -> Self {
        Self::from_parts(wire.raw, wire.witnesses)
    }

    /// Splits into the raw part and the witnesses.
    pub fn into_parts(self) -> (RawTransaction, Vec<JsonBytes>) {
        let Self {
            version,
            cell_deps,
            header_deps,
            inputs,
            outputs,
            outputs_data,
            witnesses,
        } = self;
        let raw = RawTransaction {
            version,
            cell_deps,
            header_deps,
            inputs,
            outputs,
            outputs_data,
        };
        (raw, witnesses)
    }

    /// Nests the raw fields back under `raw`.
    pub fn into_wire(self) -> TransactionWire {
        let (raw, witnesses) = self.into_parts();
        TransactionWire { raw, witnesses }
    }

    /// Clones out the raw part.
    pub fn raw(&self) -> RawTransaction {
        RawTransaction {
            version: self.version,
            cell_deps: self.cell_deps.clone(),
            header_deps: self.header_deps.clone(),
            inputs: self.inputs.clone(),
            outputs: self.outputs.clone(),
            outputs_data: self.outputs_data.clone(),
        }
    }
}

impl From<TransactionWire> for Transaction {
    fn from(wire: TransactionWire) -> Self {
        Self::from_wire(wire)
    }
}

impl From<Transaction> for TransactionWire {
    fn from(tx: Transaction) -> Self {
        tx.into_wire()
    }
}

/// Writes the `raw` table straight from a flat [`Transaction`] and decodes
/// it as a [`RawTransaction`].
#[derive(Copy, Clone, Debug, Default)]
struct FlatRaw;

impl Codec for FlatRaw {
    type Encodable = Transaction;
    type Decoded = RawTransaction;

    fn byte_length(&self) -> Option<usize> {
        None
    }

    fn encode_to(&self, value: &Transaction, enc: &mut impl Encoder) -> Result<(), CodecError> {
        let mut w = TableWriter::begin(enc, RAW_FIELDS)?;
        RawFields::from(value).write(&mut w)?;
        w.finish()
    }

    fn decode(&self, buf: &[u8]) -> Result<RawTransaction, CodecError> {
        Table::<RawTransaction>::new().decode(buf)
    }
}

impl TableFields for Transaction {
    const NAME: &'static str = "Transaction";
    const FIELDS: &'static [&'static str] = &["raw", "witnesses"];

    fn write_fields<E: Encoder>(&self, w: &mut TableWriter<'_, E>) -> Result<(), CodecError> {
        w.write("raw", &FlatRaw, self)?;
        w.write("witnesses", &JsonBytesVec::default(), &self.witnesses)
    }

    fn read_fields(r: &mut TableReader<'_>) -> Result<Self, CodecError> {
        let raw = r.read("raw", &FlatRaw)?;
        let witnesses = r.read("witnesses", &JsonBytesVec::default())?;
        Ok(Self::from_parts(raw, witnesses))
    }
}

impl Molecule for Transaction {
    type Codec = Table<Self>;
}
