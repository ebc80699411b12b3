//! Witness layouts.

use ccc_molecule::Molecule;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{JsonBytes, Script};

/// The conventional witness layout: one optional slot for the lock script
/// and one for each side of the type script.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[molecule(table)]
pub struct WitnessArgs {
    /// Data for the lock script, usually a signature.
    pub lock: Option<JsonBytes>,
    /// Data for the type script of the input.
    #[molecule(name = "inputType")]
    pub input_type: Option<JsonBytes>,
    /// Data for the type script of the output.
    #[molecule(name = "outputType")]
    pub output_type: Option<JsonBytes>,
}

/// Witness of a cellbase transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[molecule(table)]
pub struct CellbaseWitness {
    /// Lock of the block reward cell.
    pub lock: Script,
    /// Miner supplied message.
    pub message: JsonBytes,
}
