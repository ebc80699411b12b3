//! Integration tests for the canonical codecs of std types using proptest.

#![expect(missing_docs, reason = "test repo")]
#![expect(unused_crate_dependencies, reason = "macro hacks")]

use ccc_molecule_tests::{ccc_molecule::Molecule, generate_codec_tests, proptest::prelude::*};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Molecule)]
#[molecule(struct)]
pub struct Coordinate {
    x: u32,
    y: u32,
    theta: u16,
}

impl Arbitrary for Coordinate {
    type Parameters = ();
    type Strategy = BoxedStrategy<Coordinate>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (any::<u32>(), any::<u32>(), any::<u16>())
            .prop_map(|(x, y, theta)| Coordinate { x, y, theta })
            .boxed()
    }
}

// Generate property tests for the custom Coordinate struct
generate_codec_tests!(Coordinate, "coordinate");

// Generate property tests for built-in types
generate_codec_tests!(bool, "bool");
generate_codec_tests!(u8, "u8");
generate_codec_tests!(u16, "u16");
generate_codec_tests!(u32, "u32");
generate_codec_tests!(u64, "u64");
generate_codec_tests!(u128, "u128");
generate_codec_tests!([u8; 4], "byte4");
generate_codec_tests!([u8; 32], "byte32");
generate_codec_tests!(Vec<u8>, "bytes");
generate_codec_tests!(String, "string");
generate_codec_tests!(Option<u32>, "option_u32");
generate_codec_tests!(Option<Vec<u8>>, "bytes_opt");

#[test]
fn test_coordinate_layout() {
    let c = Coordinate {
        x: 1,
        y: 2,
        theta: 3,
    };
    assert_eq!(
        c.to_molecule_bytes().unwrap(),
        [1, 0, 0, 0, 2, 0, 0, 0, 3, 0]
    );
}
