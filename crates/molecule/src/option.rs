//! Optional values.

use crate::{Codec, CodecError, Encoder};

/// Option: `None` is zero bytes, `Some(v)` is the encoding of `v`.
///
/// There is no framing, so `Some(v)` must encode to at least one byte.
/// Encoding a `Some` whose payload is empty fails with
/// [`CodecError::SizeMismatch`] instead of producing bytes that decode as
/// `None`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Opt<C> {
    inner: C,
}

impl<C: Codec> Opt<C> {
    /// Constructs an option of `inner`.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Codec> Codec for Opt<C> {
    type Encodable = Option<C::Encodable>;
    type Decoded = Option<C::Decoded>;

    fn byte_length(&self) -> Option<usize> {
        None
    }

    fn encode_to(
        &self,
        value: &Option<C::Encodable>,
        enc: &mut impl Encoder,
    ) -> Result<(), CodecError> {
        let Some(v) = value else {
            return Ok(());
        };
        let start = enc.position();
        self.inner.encode_to(v, enc)?;
        if enc.position() == start {
            return Err(CodecError::SizeMismatch {
                what: "option payload",
                expected: 1,
                actual: 0,
            });
        }
        Ok(())
    }

    fn decode(&self, buf: &[u8]) -> Result<Option<C::Decoded>, CodecError> {
        if buf.is_empty() {
            return Ok(None);
        }
        self.inner.decode(buf).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Byte32Opt, Bytes, Molecule, Raw, U8};

    #[test]
    fn test_option_u8() {
        let codec = Opt::new(U8);
        assert_eq!(codec.encode(&None).unwrap(), Vec::<u8>::new());
        assert_eq!(codec.encode(&Some(0x05)).unwrap(), [0x05]);
        assert_eq!(codec.decode(&[]).unwrap(), None);
        assert_eq!(codec.decode(&[0x07]).unwrap(), Some(0x07));
    }

    #[test]
    fn test_option_bytes() {
        let codec = Opt::new(Bytes::default());
        assert_eq!(codec.encode(&Some(vec![])).unwrap(), [0, 0, 0, 0]);
        assert_eq!(codec.decode(&[0, 0, 0, 0]).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_option_byte32() {
        let codec = Byte32Opt::default();
        assert_eq!(codec.encode(&None).unwrap(), Vec::<u8>::new());
        assert_eq!(codec.encode(&Some([0; 32])).unwrap(), vec![0; 32]);
        assert_eq!(codec.decode(&[]).unwrap(), None);
        assert_eq!(codec.decode(&[0; 32]).unwrap(), Some([0; 32]));
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        let empty = CodecError::SizeMismatch {
            what: "option payload",
            expected: 1,
            actual: 0,
        };
        assert_eq!(Opt::new(Raw).encode(&Some(vec![])), Err(empty.clone()));
        assert_eq!(Opt::new(Raw).encode(&Some(vec![1])).unwrap(), [1]);

        assert_eq!(Some(None::<u8>).to_molecule_bytes(), Err(empty));
        assert_eq!(Some(Some(3u8)).to_molecule_bytes().unwrap(), [3]);
        assert_eq!(
            Option::<Option<u8>>::from_molecule_slice(&[3]).unwrap(),
            Some(Some(3))
        );
        assert_eq!(None::<Option<u8>>.to_molecule_bytes().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_option_inner_error() {
        assert!(Opt::new(U8).decode(&[1, 2]).is_err());
    }
}
