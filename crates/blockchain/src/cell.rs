//! Cells, and the references transactions make to them.

use ccc_molecule::Molecule;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{DepType, H256, Script};

/// Points at an output of a committed transaction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[molecule(struct)]
pub struct OutPoint {
    /// Hash of the transaction holding the output.
    #[molecule(name = "txHash")]
    pub tx_hash: H256,
    /// Index of the output in that transaction.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::quantity"))]
    pub index: u32,
}

impl OutPoint {
    /// Creates an out point.
    pub const fn new(tx_hash: H256, index: u32) -> Self {
        Self { tx_hash, index }
    }
}

/// A cell consumed by a transaction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[molecule(struct)]
pub struct CellInput {
    /// Relative or absolute lock time, in the chain's `since` encoding.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::quantity"))]
    pub since: u64,
    /// The consumed cell.
    #[molecule(name = "previousOutput")]
    pub previous_output: OutPoint,
}

/// A cell created by a transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[molecule(table)]
pub struct CellOutput {
    /// Capacity in shannons.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::quantity"))]
    pub capacity: u64,
    /// Script guarding who can consume the cell.
    pub lock: Script,
    /// Optional script validating how the cell is created and consumed.
    #[molecule(name = "type")]
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_: Option<Script>,
}

/// A cell a transaction reads code or dep groups from without consuming it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[molecule(struct)]
pub struct CellDep {
    /// The referenced cell.
    #[molecule(name = "outPoint")]
    pub out_point: OutPoint,
    /// How the cell is used.
    #[molecule(name = "depType")]
    pub dep_type: DepType,
}
