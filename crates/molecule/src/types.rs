use crate::CodecError;

/// A codec value: knows how to turn an encodable value into molecule bytes
/// and a buffer back into a decoded value.
///
/// Codecs are plain values so they can be configured at construction
/// (endianness, item codecs, union ids) and composed into larger codecs.
pub trait Codec {
    /// Type accepted by [`Codec::encode_to`].
    type Encodable;

    /// Type produced by [`Codec::decode`].
    type Decoded;

    /// Exact encoded size when it does not depend on the value, `None` if
    /// the layout is dynamic.
    fn byte_length(&self) -> Option<usize>;

    /// Appends the encoding of `value` to the encoder.
    fn encode_to(&self, value: &Self::Encodable, enc: &mut impl Encoder)
    -> Result<(), CodecError>;

    /// Decodes a value that spans exactly `buf`.
    fn decode(&self, buf: &[u8]) -> Result<Self::Decoded, CodecError>;

    /// Encodes `value` into a newly allocated vec.
    fn encode(&self, value: &Self::Encodable) -> Result<Vec<u8>, CodecError> {
        let mut buf = Vec::with_capacity(self.byte_length().unwrap_or(0));
        self.encode_to(value, &mut buf)?;
        Ok(buf)
    }
}

/// A codec whose encoded size never depends on the value.
///
/// Only fixed codecs can be struct fields, array items or fixvec items.
pub trait FixedCodec: Codec {
    /// Encoded size in bytes.
    fn fixed_len(&self) -> usize;
}

/// Generic encoder trait that writes outputs.
pub trait Encoder {
    /// Writes a buf.  This does NOT include length tagging.
    fn write_buf(&mut self, buf: &[u8]) -> Result<(), CodecError>;

    /// Number of bytes written so far.
    fn position(&self) -> usize;

    /// Overwrites bytes previously written starting at `at`.  Used to fill
    /// in size and offset headers once the bodies are known.
    fn patch_buf(&mut self, at: usize, buf: &[u8]) -> Result<(), CodecError>;
}

/// Encoding to a vec buffer.
impl Encoder for Vec<u8> {
    fn write_buf(&mut self, buf: &[u8]) -> Result<(), CodecError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn position(&self) -> usize {
        self.len()
    }

    fn patch_buf(&mut self, at: usize, buf: &[u8]) -> Result<(), CodecError> {
        let len = self.len();
        let dst = at
            .checked_add(buf.len())
            .and_then(|end| self.get_mut(at..end))
            .ok_or(CodecError::BufferTooShort {
                offset: at,
                needed: buf.len(),
                available: len.saturating_sub(at),
            })?;
        dst.copy_from_slice(buf);
        Ok(())
    }
}

/// Rust types with a canonical molecule codec.
///
/// Implemented for the native integers (little endian), `bool`, byte
/// arrays, `Vec<u8>` and `String` (both length prefixed), `Option<T>`, and
/// anything using `#[derive(Molecule)]`.
pub trait Molecule: Sized {
    /// Canonical codec for the type.
    type Codec: Codec<Encodable = Self, Decoded = Self> + Default;

    /// Encodes `self` with its canonical codec.
    fn to_molecule_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Self::Codec::default().encode(self)
    }

    /// Decodes a value spanning exactly `buf` with the canonical codec.
    fn from_molecule_slice(buf: &[u8]) -> Result<Self, CodecError> {
        Self::Codec::default().decode(buf)
    }
}

/// Newtypes that encode exactly like the value they wrap.
///
/// Usually implemented through [`crate::impl_wrapper_molecule`].
pub trait Newtype: Sized {
    /// The wrapped type.
    type Inner;

    /// Borrows the wrapped value.
    fn as_inner(&self) -> &Self::Inner;

    /// Wraps a value.
    fn from_inner(inner: Self::Inner) -> Self;
}
