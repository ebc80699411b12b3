//! Vector codecs of the chain records, named after their schema types.

use ccc_molecule::{Molecule, Struct, Table, Vector};

use crate::{
    CellDep, CellInput, CellOutput, H256, JsonBytes, ProposalShortId, Transaction, UncleBlock,
};

/// `CellDepVec`: fixvec of 37-byte deps.
pub type CellDepVec = Vector<Struct<CellDep>>;
/// `Byte32Vec` of header hashes.
pub type H256Vec = Vector<<H256 as Molecule>::Codec>;
/// `CellInputVec`: fixvec of 44-byte inputs.
pub type CellInputVec = Vector<Struct<CellInput>>;
/// `CellOutputVec`.
pub type CellOutputVec = Vector<Table<CellOutput>>;
/// `BytesVec`, used for outputs data and witnesses.
pub type JsonBytesVec = Vector<<JsonBytes as Molecule>::Codec>;
/// `ProposalShortIdVec`.
pub type ProposalShortIdVec = Vector<<ProposalShortId as Molecule>::Codec>;
/// `UncleBlockVec`.
pub type UncleBlockVec = Vector<Table<UncleBlock>>;
/// `TransactionVec`.
pub type TransactionVec = Vector<Table<Transaction>>;
