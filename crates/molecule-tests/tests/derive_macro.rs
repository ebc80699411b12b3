//! Tests for the Molecule derive macro functionality.

#![expect(unused_crate_dependencies, reason = "test dependencies")]

use ccc_molecule::{
    Bytes, Codec, CodecError, Molecule, Opt, U8, U16Be, Vector, decode_buf_exact, encode_to_vec,
};

#[test]
fn test_derive_table() {
    #[derive(Debug, Clone, PartialEq, Eq, Molecule)]
    #[molecule(table)]
    struct BasicTable {
        a: u32,
        b: Vec<u8>,
        c: bool,
    }

    let original = BasicTable {
        a: 0xDEADBEEF,
        b: vec![0x42; 3],
        c: true,
    };

    let encoded = encode_to_vec(&original).expect("encoding should work");
    assert_eq!(
        encoded,
        [
            28, 0, 0, 0, 16, 0, 0, 0, 20, 0, 0, 0, 27, 0, 0, 0, // header
            0xef, 0xbe, 0xad, 0xde, // a
            3, 0, 0, 0, 0x42, 0x42, 0x42, // b
            1, // c
        ]
    );
    let decoded: BasicTable = decode_buf_exact(&encoded).expect("decoding should work");
    assert_eq!(original, decoded);
}

#[test]
fn test_derive_macro_reexport() {
    // Verify the derive macro is properly re-exported through ccc_molecule
    #[derive(Debug, Clone, PartialEq, Eq, ccc_molecule::Molecule)]
    #[molecule(struct)]
    struct ReexportTest {
        value: u64,
    }

    let test = ReexportTest { value: 999 };
    let encoded = encode_to_vec(&test).unwrap();
    assert_eq!(encoded.len(), 8);
    let decoded: ReexportTest = decode_buf_exact(&encoded).unwrap();
    assert_eq!(test, decoded);
}

#[test]
fn test_derive_field_codec_override() {
    #[derive(Debug, Clone, PartialEq, Eq, Molecule)]
    #[molecule(table)]
    struct Overrides {
        #[molecule(codec = U16Be)]
        big_endian: u16,
        #[molecule(codec = Vector<U8>)]
        fixvec: Vec<u8>,
        #[molecule(codec = Opt<Bytes>)]
        maybe: Option<Vec<u8>>,
    }

    let original = Overrides {
        big_endian: 0x0102,
        fixvec: vec![9],
        maybe: None,
    };
    let encoded = original.to_molecule_bytes().unwrap();
    assert_eq!(
        encoded,
        [
            23, 0, 0, 0, 16, 0, 0, 0, 18, 0, 0, 0, 23, 0, 0, 0, // header
            1, 2, // big_endian
            1, 0, 0, 0, 9, // fixvec
        ]
    );
    assert_eq!(Overrides::from_molecule_slice(&encoded).unwrap(), original);
}

#[test]
fn test_derive_renamed_field_in_errors() {
    #[derive(Debug, Clone, PartialEq, Eq, Molecule)]
    #[molecule(table)]
    struct Renamed {
        #[molecule(name = "hashType")]
        hash_type: u8,
    }

    // the single field is two bytes long
    let err = Renamed::from_molecule_slice(&[10, 0, 0, 0, 8, 0, 0, 0, 1, 2]).unwrap_err();
    assert_eq!(err.path(), "hashType");
    assert!(matches!(err.root(), CodecError::SizeMismatch { .. }));
}

#[test]
fn test_derive_nested_struct_in_table() {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Molecule)]
    #[molecule(struct)]
    struct Point {
        x: u8,
        y: u8,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Molecule)]
    #[molecule(table)]
    struct Shape {
        origin: Point,
        #[molecule(codec = Vector<<Point as Molecule>::Codec>)]
        points: Vec<Point>,
    }

    let shape = Shape {
        origin: Point { x: 1, y: 2 },
        points: vec![Point { x: 3, y: 4 }, Point { x: 5, y: 6 }],
    };
    let encoded = shape.to_molecule_bytes().unwrap();
    assert_eq!(
        encoded,
        [
            22, 0, 0, 0, 12, 0, 0, 0, 14, 0, 0, 0, // header
            1, 2, // origin
            2, 0, 0, 0, 3, 4, 5, 6, // points as fixvec
        ]
    );
    assert_eq!(Shape::from_molecule_slice(&encoded).unwrap(), shape);
}

#[test]
fn test_derive_union_with_table_variant() {
    #[derive(Debug, Clone, PartialEq, Eq, Molecule)]
    #[molecule(table)]
    struct Payload {
        data: Vec<u8>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Molecule)]
    #[molecule(union)]
    enum Message {
        Ping(u8),
        Data(Payload),
    }

    let msg = Message::Data(Payload { data: vec![0xaa] });
    let encoded = msg.to_molecule_bytes().unwrap();
    assert_eq!(
        encoded,
        [1, 0, 0, 0, 13, 0, 0, 0, 8, 0, 0, 0, 1, 0, 0, 0, 0xaa]
    );
    assert_eq!(Message::from_molecule_slice(&encoded).unwrap(), msg);

    let err = Message::from_molecule_slice(&[1, 0, 0, 0, 4, 0, 0, 0]).unwrap_err();
    assert_eq!(err.path(), "Data");
}

#[test]
fn test_derive_option_of_table() {
    #[derive(Debug, Clone, PartialEq, Eq, Molecule)]
    #[molecule(table)]
    struct Inner {
        v: u8,
    }

    let codec = <Option<Inner> as Molecule>::Codec::default();
    assert_eq!(codec.encode(&None).unwrap(), Vec::<u8>::new());
    assert_eq!(
        codec.encode(&Some(Inner { v: 7 })).unwrap(),
        [9, 0, 0, 0, 8, 0, 0, 0, 7]
    );
}
