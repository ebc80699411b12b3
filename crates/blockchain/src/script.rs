//! Lock and type scripts.

use ccc_molecule::Molecule;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{H256, HashType, JsonBytes};

/// A script: which code to run and the arguments to run it with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Molecule)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[molecule(table)]
pub struct Script {
    /// Hash locating the script code, interpreted per `hash_type`.
    #[molecule(name = "codeHash")]
    pub code_hash: H256,
    /// How `code_hash` is matched against cells.
    #[molecule(name = "hashType")]
    pub hash_type: HashType,
    /// Arguments passed to the script.
    pub args: JsonBytes,
}

impl Script {
    /// Creates a script.
    pub fn new(code_hash: H256, hash_type: HashType, args: impl Into<JsonBytes>) -> Self {
        Self {
            code_hash,
            hash_type,
            args: args.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use ccc_molecule::CodecError;

    use super::*;

    const SCRIPT_HEX: &str = "3d0000001000000030000000310000009bd7e06f3ecf4be0f2fcd2188b23f1b9\
                                         fcc88e5d4b65a8637b17723bbda3cce80108000000aabbccdd44332211";

    fn script() -> Script {
        Script::new(
            "0x9bd7e06f3ecf4be0f2fcd2188b23f1b9fcc88e5d4b65a8637b17723bbda3cce8"
                .parse()
                .unwrap(),
            HashType::Type,
            hex::decode("aabbccdd44332211").unwrap(),
        )
    }

    #[test]
    fn test_script_known_bytes() {
        let encoded = script().to_molecule_bytes().unwrap();
        assert_eq!(hex::encode(&encoded), SCRIPT_HEX);
        assert_eq!(Script::from_molecule_slice(&encoded).unwrap(), script());
    }

    #[test]
    fn test_script_bad_hash_type() {
        let mut encoded = script().to_molecule_bytes().unwrap();
        encoded[48] = 3;
        let err = Script::from_molecule_slice(&encoded).unwrap_err();
        assert_eq!(err.path(), "hashType");
        assert_eq!(
            err.root(),
            &CodecError::InvalidDiscriminant {
                ty: "HashType",
                value: 3
            }
        );
    }
}
