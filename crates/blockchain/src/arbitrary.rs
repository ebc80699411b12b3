use ccc_molecule_tests::proptest::collection::vec;
use ccc_molecule_tests::proptest::prelude::*;

use crate::{
    Block, CellDep, CellInput, CellOutput, CellbaseWitness, DepType, H256, HashType, Header,
    JsonBytes, OutPoint, ProposalShortId, RawHeader, RawTransaction, Script, Transaction,
    UncleBlock, WitnessArgs,
};

impl Arbitrary for H256 {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        any::<[u8; 32]>().prop_map(H256).boxed()
    }
}

impl Arbitrary for ProposalShortId {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        any::<[u8; 10]>().prop_map(ProposalShortId).boxed()
    }
}

impl Arbitrary for JsonBytes {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        vec(any::<u8>(), 0..24).prop_map(JsonBytes).boxed()
    }
}

impl Arbitrary for HashType {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        prop_oneof![
            Just(Self::Data),
            Just(Self::Type),
            Just(Self::Data1),
            Just(Self::Data2),
        ]
        .boxed()
    }
}

impl Arbitrary for DepType {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        prop_oneof![Just(Self::Code), Just(Self::DepGroup)].boxed()
    }
}

impl Arbitrary for Script {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (any::<H256>(), any::<HashType>(), any::<JsonBytes>())
            .prop_map(|(code_hash, hash_type, args)| Script {
                code_hash,
                hash_type,
                args,
            })
            .boxed()
    }
}

impl Arbitrary for OutPoint {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (any::<H256>(), any::<u32>())
            .prop_map(|(tx_hash, index)| OutPoint { tx_hash, index })
            .boxed()
    }
}

impl Arbitrary for CellInput {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (any::<u64>(), any::<OutPoint>())
            .prop_map(|(since, previous_output)| CellInput {
                since,
                previous_output,
            })
            .boxed()
    }
}

impl Arbitrary for CellOutput {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (any::<u64>(), any::<Script>(), any::<Option<Script>>())
            .prop_map(|(capacity, lock, type_)| CellOutput {
                capacity,
                lock,
                type_,
            })
            .boxed()
    }
}

impl Arbitrary for CellDep {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (any::<OutPoint>(), any::<DepType>())
            .prop_map(|(out_point, dep_type)| CellDep {
                out_point,
                dep_type,
            })
            .boxed()
    }
}

impl Arbitrary for RawTransaction {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (
            any::<u32>(),
            vec(any::<CellDep>(), 0..3),
            vec(any::<H256>(), 0..3),
            vec(any::<CellInput>(), 0..3),
            vec(any::<CellOutput>(), 0..3),
            vec(any::<JsonBytes>(), 0..3),
        )
            .prop_map(
                |(version, cell_deps, header_deps, inputs, outputs, outputs_data)| {
                    RawTransaction {
                        version,
                        cell_deps,
                        header_deps,
                        inputs,
                        outputs,
                        outputs_data,
                    }
                },
            )
            .boxed()
    }
}

impl Arbitrary for Transaction {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (any::<RawTransaction>(), vec(any::<JsonBytes>(), 0..3))
            .prop_map(|(raw, witnesses)| Transaction::from_parts(raw, witnesses))
            .boxed()
    }
}

impl Arbitrary for RawHeader {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (
            (any::<u32>(), any::<u32>(), any::<u64>(), any::<u64>(), any::<u64>()),
            any::<[H256; 5]>(),
        )
            .prop_map(
                |(
                    (version, compact_target, timestamp, number, epoch),
                    [parent_hash, transactions_root, proposals_hash, extra_hash, dao],
                )| RawHeader {
                    version,
                    compact_target,
                    timestamp,
                    number,
                    epoch,
                    parent_hash,
                    transactions_root,
                    proposals_hash,
                    extra_hash,
                    dao,
                },
            )
            .boxed()
    }
}

impl Arbitrary for Header {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (any::<RawHeader>(), any::<u128>())
            .prop_map(|(raw, nonce)| Header { raw, nonce })
            .boxed()
    }
}

impl Arbitrary for UncleBlock {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (any::<Header>(), vec(any::<ProposalShortId>(), 0..3))
            .prop_map(|(header, proposals)| UncleBlock { header, proposals })
            .boxed()
    }
}

impl Arbitrary for Block {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (
            any::<Header>(),
            vec(any::<UncleBlock>(), 0..2),
            vec(any::<Transaction>(), 0..2),
            vec(any::<ProposalShortId>(), 0..3),
        )
            .prop_map(|(header, uncles, transactions, proposals)| Block {
                header,
                uncles,
                transactions,
                proposals,
            })
            .boxed()
    }
}

impl Arbitrary for WitnessArgs {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        any::<[Option<JsonBytes>; 3]>()
            .prop_map(|[lock, input_type, output_type]| WitnessArgs {
                lock,
                input_type,
                output_type,
            })
            .boxed()
    }
}

impl Arbitrary for CellbaseWitness {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (any::<Script>(), any::<JsonBytes>())
            .prop_map(|(lock, message)| CellbaseWitness { lock, message })
            .boxed()
    }
}
