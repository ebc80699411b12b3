use ccc_molecule_tests::generate_codec_tests;

use crate::{
    Block, CellDep, CellInput, CellOutput, CellbaseWitness, Header, OutPoint, RawTransaction,
    Script, Transaction, UncleBlock, WitnessArgs,
};

generate_codec_tests!(Script, "script");
generate_codec_tests!(OutPoint, "out_point");
generate_codec_tests!(CellInput, "cell_input");
generate_codec_tests!(CellOutput, "cell_output");
generate_codec_tests!(CellDep, "cell_dep");
generate_codec_tests!(RawTransaction, "raw_transaction");
generate_codec_tests!(Transaction, "transaction");
generate_codec_tests!(Header, "header");
generate_codec_tests!(UncleBlock, "uncle_block");
generate_codec_tests!(Block, "block");
generate_codec_tests!(WitnessArgs, "witness_args");
generate_codec_tests!(CellbaseWitness, "cellbase_witness");

mod transaction_shape {
    use ccc_molecule::Molecule;
    use ccc_molecule_tests::proptest::prelude::*;

    use crate::Transaction;

    proptest! {
        #[test]
        fn flat_and_wire_encodings_agree(tx in any::<Transaction>()) {
            let wire = tx.clone().into_wire();
            prop_assert_eq!(tx.to_molecule_bytes().unwrap(), wire.to_molecule_bytes().unwrap());
            prop_assert_eq!(Transaction::from_wire(wire), tx);
        }
    }
}
