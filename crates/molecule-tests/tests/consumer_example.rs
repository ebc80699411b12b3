//! Example of how consumers would use the generate_codec_tests! macro with a
//! hand-written schema.

#![expect(missing_docs, reason = "test repo")]
#![expect(unused_crate_dependencies, reason = "macro hacks")]

use ccc_molecule_tests::{
    ccc_molecule::{
        Bytes, CodecError, Encoder, Molecule, StringCodec, Table, TableFields, TableReader,
        TableWriter, U8,
    },
    generate_codec_tests,
    proptest::prelude::*,
};

// Example: consumer writes the table schema by hand instead of deriving it,
// storing the version byte but exposing a typed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V1,
    V2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomMessage {
    version: Version,
    topic: String,
    payload: Vec<u8>,
}

impl TableFields for CustomMessage {
    const NAME: &'static str = "CustomMessage";
    const FIELDS: &'static [&'static str] = &["version", "topic", "payload"];

    fn write_fields<E: Encoder>(&self, w: &mut TableWriter<'_, E>) -> Result<(), CodecError> {
        let version = match self.version {
            Version::V1 => 1,
            Version::V2 => 2,
        };
        w.write("version", &U8, &version)?;
        w.write("topic", &StringCodec::default(), &self.topic)?;
        w.write("payload", &Bytes::default(), &self.payload)
    }

    fn read_fields(r: &mut TableReader<'_>) -> Result<Self, CodecError> {
        let version = match r.read("version", &U8)? {
            1 => Version::V1,
            2 => Version::V2,
            v => {
                return Err(CodecError::InvalidDiscriminant {
                    ty: "Version",
                    value: u32::from(v),
                });
            }
        };
        Ok(Self {
            version,
            topic: r.read("topic", &StringCodec::default())?,
            payload: r.read("payload", &Bytes::default())?,
        })
    }
}

impl Molecule for CustomMessage {
    type Codec = Table<Self>;
}

impl Arbitrary for CustomMessage {
    type Parameters = ();
    type Strategy = BoxedStrategy<CustomMessage>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        (
            prop_oneof![Just(Version::V1), Just(Version::V2)],
            "[a-z/]{0,20}",
            prop::collection::vec(any::<u8>(), 0..100),
        )
            .prop_map(|(version, topic, payload)| CustomMessage {
                version,
                topic,
                payload,
            })
            .boxed()
    }
}

// Generate property tests for the consumer's type
generate_codec_tests!(CustomMessage, "custom_message");

#[test]
fn test_custom_message_rejects_unknown_version() {
    let msg = CustomMessage {
        version: Version::V1,
        topic: String::new(),
        payload: Vec::new(),
    };
    let mut encoded = msg.to_molecule_bytes().unwrap();
    // version is the first body byte after the 16 byte header
    encoded[16] = 9;
    let err = CustomMessage::from_molecule_slice(&encoded).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidDiscriminant {
            ty: "Version",
            value: 9
        }
    );
}
