//! High-level util functions.

use crate::{CodecError, Molecule};

/// Decodes a value from a buffer it must span exactly.
pub fn decode_buf_exact<T: Molecule>(buf: &[u8]) -> Result<T, CodecError> {
    T::from_molecule_slice(buf)
}

/// Encodes the value into a newly allocated vec.
pub fn encode_to_vec<T: Molecule>(v: &T) -> Result<Vec<u8>, CodecError> {
    v.to_molecule_bytes()
}
