//! Canonical chain types in molecule encoding: scripts, cells,
//! transactions, headers, blocks and witnesses.
//!
//! Every record implements [`ccc_molecule::Molecule`], so
//! `to_molecule_bytes`/`from_molecule_slice` produce and accept the exact
//! bytes the node does.  With the `serde` feature the records also carry
//! the node's JSON shape.

#[cfg(test)]
mod arbitrary;
mod bytes;
mod cell;
pub mod codecs;
mod enums;
mod error;
mod header;
mod script;
#[cfg(feature = "serde")]
mod serde;
mod transaction;
mod witness;

pub use bytes::{H256, JsonBytes, ProposalShortId};
pub use cell::{CellDep, CellInput, CellOutput, OutPoint};
pub use enums::{DepType, DepTypeCodec, HashType, HashTypeCodec};
pub use error::{ParseError, ParseResult};
pub use header::{Block, BlockV1, Header, RawHeader, UncleBlock};
pub use script::Script;
pub use transaction::{RawTransaction, Transaction, TransactionWire};
pub use witness::{CellbaseWitness, WitnessArgs};

// serde_json is only used by the serde feature's tests.
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;

#[cfg(test)]
mod tests;
