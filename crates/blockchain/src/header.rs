//! Block headers and blocks.

use ccc_molecule::Molecule;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codecs::{ProposalShortIdVec, TransactionVec, UncleBlockVec};
use crate::{H256, JsonBytes, ProposalShortId, Transaction};

/// Header fields covered by proof of work.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[molecule(struct)]
pub struct RawHeader {
    /// Header format version.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::quantity"))]
    pub version: u32,
    /// Difficulty target in compact form.
    #[molecule(name = "compactTarget")]
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::quantity"))]
    pub compact_target: u32,
    /// Milliseconds since the unix epoch.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::quantity"))]
    pub timestamp: u64,
    /// Block height.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::quantity"))]
    pub number: u64,
    /// Epoch number, index and length packed into one integer.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::quantity"))]
    pub epoch: u64,
    /// Hash of the parent header.
    #[molecule(name = "parentHash")]
    pub parent_hash: H256,
    /// Merkle root of the block's transactions and witnesses.
    #[molecule(name = "transactionsRoot")]
    pub transactions_root: H256,
    /// Hash of the proposal ids.
    #[molecule(name = "proposalsHash")]
    pub proposals_hash: H256,
    /// Hash of the uncles and extension.
    #[molecule(name = "extraHash")]
    pub extra_hash: H256,
    /// Packed DAO statistics.
    pub dao: H256,
}

/// A block header: the raw fields and the proof of work nonce.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[molecule(struct)]
pub struct Header {
    /// Fields covered by the nonce.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub raw: RawHeader,
    /// Proof of work nonce.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::quantity"))]
    pub nonce: u128,
}

/// An uncle: a header plus the proposals it carried.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[molecule(table)]
pub struct UncleBlock {
    /// The uncle's header.
    pub header: Header,
    /// Transactions proposed by the uncle.
    #[molecule(codec = ProposalShortIdVec)]
    pub proposals: Vec<ProposalShortId>,
}

/// A block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[molecule(table)]
pub struct Block {
    /// The block header.
    pub header: Header,
    /// Uncles referenced by the block.
    #[molecule(codec = UncleBlockVec)]
    pub uncles: Vec<UncleBlock>,
    /// Committed transactions, the cellbase first.
    #[molecule(codec = TransactionVec)]
    pub transactions: Vec<Transaction>,
    /// Transactions proposed for later commitment.
    #[molecule(codec = ProposalShortIdVec)]
    pub proposals: Vec<ProposalShortId>,
}

/// A block with the trailing `extension` field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[molecule(table)]
pub struct BlockV1 {
    /// The block header.
    pub header: Header,
    /// Uncles referenced by the block.
    #[molecule(codec = UncleBlockVec)]
    pub uncles: Vec<UncleBlock>,
    /// Committed transactions, the cellbase first.
    #[molecule(codec = TransactionVec)]
    pub transactions: Vec<Transaction>,
    /// Transactions proposed for later commitment.
    #[molecule(codec = ProposalShortIdVec)]
    pub proposals: Vec<ProposalShortId>,
    /// Extension data committed to by `extra_hash`.
    pub extension: JsonBytes,
}

impl BlockV1 {
    /// Drops the extension.
    pub fn into_block(self) -> Block {
        Block {
            header: self.header,
            uncles: self.uncles,
            transactions: self.transactions,
            proposals: self.proposals,
        }
    }
}

impl From<BlockV1> for Block {
    fn from(block: BlockV1) -> Self {
        block.into_block()
    }
}
