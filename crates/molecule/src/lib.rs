//! Molecule binary encoding framework.
//!
//! Codecs are values implementing [`Codec`].  Leaf codecs handle integers
//! and bytes, and container codecs ([`Vector`], [`Opt`], [`ByteVec`],
//! [`Array`], [`Struct`], [`Table`], [`Union`]) compose them into the
//! molecule layouts.  Record types declare their schema with
//! `#[derive(Molecule)]`.

// Lets the derive's `::ccc_molecule` paths resolve inside this crate.
#[allow(unused_extern_crates)]
extern crate self as ccc_molecule;

mod errors;
pub use errors::CodecError;

mod types;
pub use types::{Codec, Encoder, FixedCodec, Molecule, Newtype};

mod buf_decoder;
pub use buf_decoder::BufDecoder;

mod header;

mod number;
pub use number::{Endian, U8, U16Be, U16Le, U32Be, U32Le, U64Be, U64Le, U128Be, U128Le, Uint};

mod bytes;
pub use bytes::{Bool, Byte, Byte4, Byte8, Byte16, Byte32, FixedBytes, Padding, Raw, Utf8};

mod map;
pub use map::{
    CodecExt, HexBytes, HexUint, Map, UintNumber, Wrapped, hex_bytes, hex_uint, uint_number,
};

mod vector;
pub use vector::{DynVec, FixVec, Vector};

mod option;
pub use option::Opt;

mod byte_vec;
pub use byte_vec::ByteVec;

mod array;
pub use array::Array;

mod structure;
pub use structure::{Struct, StructFields, StructReader, StructWriter};

mod table;
pub use table::{Table, TableConfig, TableFields, TableReader, TableWriter};

mod union;
pub use union::{Union, UnionVariants};

mod predefined;
pub use predefined::*;

mod impls;

mod macros;

mod util;
pub use util::{decode_buf_exact, encode_to_vec};

pub use ccc_molecule_derive::Molecule;
