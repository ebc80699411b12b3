//! Property testing macros and utilities for ccc-molecule.
//!
//! This crate provides macros to generate property tests for types that
//! implement the `Molecule` trait from ccc-molecule. The main export is the
//! `generate_codec_tests!` macro.

// Re-export dependencies for macro usage
pub use ccc_molecule;
pub use paste;
pub use proptest;

// The num-bigint dev-dependency is used in the integration tests
#[cfg(test)]
use num_bigint as _;

/// Generates property tests for a type that implements `Molecule` using
/// proptest.
///
/// This macro creates property-based tests to verify that:
/// 1. Encoding then decoding produces the original value (round-trip property)
/// 2. The encoding is deterministic (same input always produces same output)
/// 3. Different inputs produce different encodings
/// 4. Fixed-size codecs always produce exactly their declared length
/// 5. Truncating an encoding by one byte never decodes successfully to the
///    same value
///
/// # Requirements
///
/// The type must implement:
/// - `ccc_molecule::Molecule` - for encoding/decoding
/// - `proptest::arbitrary::Arbitrary` - for generating test values
/// - `Debug + PartialEq` - for test assertions
///
/// # Example
/// ```ignore
/// use ccc_molecule::Molecule;
/// use ccc_molecule_tests::generate_codec_tests;
/// use proptest::prelude::*;
///
/// #[derive(Debug, Clone, PartialEq, Molecule)]
/// #[molecule(table)]
/// struct MyType {
///     field: u32,
/// }
///
/// impl Arbitrary for MyType {
///     type Parameters = ();
///     type Strategy = BoxedStrategy<MyType>;
///
///     fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
///         any::<u32>().prop_map(|field| MyType { field }).boxed()
///     }
/// }
///
/// generate_codec_tests!(MyType, "my_type");
/// ```
#[macro_export]
macro_rules! generate_codec_tests {
    ($type:ty, $name:expr) => {
        $crate::paste::paste! {
            mod [<proptest_ $name _codec>] {
                use super::*;
                use $crate::proptest::{prelude::{any, prop_assert, prop_assert_eq, prop_assert_ne, prop_assume}, proptest, strategy::Strategy};
                use $crate::ccc_molecule::{encode_to_vec, decode_buf_exact, Codec as _, Molecule};

                $crate::proptest::proptest! {
                    #[test]
                    fn [<test_codec_roundtrip>](value in any::<$type>()) {
                        let encoded = encode_to_vec(&value).expect("test: encoding should succeed");
                        let decoded = decode_buf_exact::<$type>(&encoded).expect("test: decoding should succeed");
                        prop_assert_eq!(value, decoded);
                    }

                    #[test]
                    fn [<test_codec_deterministic>](value in any::<$type>()) {
                        let encoded1 = encode_to_vec(&value).expect("encoding should succeed");
                        let encoded2 = encode_to_vec(&value).expect("encoding should succeed");
                        prop_assert_eq!(encoded1, encoded2, "test: unexpected inequality");
                    }

                    #[test]
                    fn [<test_codec_different_inputs>](
                        value1 in any::<$type>(),
                        value2 in any::<$type>()
                    ) {
                        prop_assume!(value1 != value2);
                        let encoded1 = encode_to_vec(&value1).expect("test: encoding should succeed");
                        let encoded2 = encode_to_vec(&value2).expect("test: encoding should succeed");
                        prop_assert_ne!(encoded1, encoded2, "test: unexpected equality");
                    }

                    #[test]
                    fn [<test_codec_fixed_length>](value in any::<$type>()) {
                        let codec = <<$type as Molecule>::Codec as ::core::default::Default>::default();
                        let encoded = encode_to_vec(&value).expect("test: encoding should succeed");
                        if let Some(len) = codec.byte_length() {
                            prop_assert_eq!(encoded.len(), len);
                        }
                    }

                    #[test]
                    fn [<test_codec_truncated>](value in any::<$type>()) {
                        let encoded = encode_to_vec(&value).expect("test: encoding should succeed");
                        prop_assume!(!encoded.is_empty());
                        let truncated = &encoded[..encoded.len() - 1];
                        let same = decode_buf_exact::<$type>(truncated).is_ok_and(|v| v == value);
                        prop_assert!(!same, "test: truncated input decoded to the same value");
                    }
                }
            }
        }
    };
}
