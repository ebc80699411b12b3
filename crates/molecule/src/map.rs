//! Adapting a codec to different value types.

use std::fmt;
use std::marker::PhantomData;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::{Codec, CodecError, Encoder, Endian, FixedCodec, Newtype, Uint};

/// A codec whose values are converted before encoding and after decoding.
///
/// Layout and byte length are those of the inner codec.
pub struct Map<C, NE, ND, F, G> {
    inner: C,
    in_map: F,
    out_map: G,
    _pd: PhantomData<fn(&NE) -> ND>,
}

impl<C, NE, ND, F, G> Map<C, NE, ND, F, G>
where
    C: Codec,
    F: Fn(&NE) -> Result<C::Encodable, CodecError>,
    G: Fn(C::Decoded) -> Result<ND, CodecError>,
{
    /// Wraps `inner`, converting with `in_map` on encode and `out_map` on
    /// decode.
    pub fn new(inner: C, in_map: F, out_map: G) -> Self {
        Self {
            inner,
            in_map,
            out_map,
            _pd: PhantomData,
        }
    }

    /// Returns the wrapped codec.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: fmt::Debug, NE, ND, F, G> fmt::Debug for Map<C, NE, ND, F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<C: Clone, NE, ND, F: Clone, G: Clone> Clone for Map<C, NE, ND, F, G> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            in_map: self.in_map.clone(),
            out_map: self.out_map.clone(),
            _pd: PhantomData,
        }
    }
}

impl<C, NE, ND, F, G> Codec for Map<C, NE, ND, F, G>
where
    C: Codec,
    F: Fn(&NE) -> Result<C::Encodable, CodecError>,
    G: Fn(C::Decoded) -> Result<ND, CodecError>,
{
    type Encodable = NE;
    type Decoded = ND;

    fn byte_length(&self) -> Option<usize> {
        self.inner.byte_length()
    }

    fn encode_to(&self, value: &NE, enc: &mut impl Encoder) -> Result<(), CodecError> {
        let inner = (self.in_map)(value)?;
        self.inner.encode_to(&inner, enc)
    }

    fn decode(&self, buf: &[u8]) -> Result<ND, CodecError> {
        (self.out_map)(self.inner.decode(buf)?)
    }
}

impl<C, NE, ND, F, G> FixedCodec for Map<C, NE, ND, F, G>
where
    C: FixedCodec,
    F: Fn(&NE) -> Result<C::Encodable, CodecError>,
    G: Fn(C::Decoded) -> Result<ND, CodecError>,
{
    fn fixed_len(&self) -> usize {
        self.inner.fixed_len()
    }
}

/// Combinators available on every codec.
pub trait CodecExt: Codec + Sized {
    /// Adapts the codec to another value type.  Either conversion may fail,
    /// aborting the encode or decode with its error.
    fn map<NE, ND, F, G>(self, in_map: F, out_map: G) -> Map<Self, NE, ND, F, G>
    where
        F: Fn(&NE) -> Result<Self::Encodable, CodecError>,
        G: Fn(Self::Decoded) -> Result<ND, CodecError>,
    {
        Map::new(self, in_map, out_map)
    }
}

impl<C: Codec> CodecExt for C {}

/// Unsigned integer of at most 4 bytes carried as a `u32`.
pub type UintNumber<const N: usize> = Map<
    Uint<N>,
    u32,
    u32,
    fn(&u32) -> Result<BigInt, CodecError>,
    fn(BigInt) -> Result<u32, CodecError>,
>;

/// Builds a [`UintNumber`] codec.  Wider widths are rejected at compile
/// time since the value would not fit a `u32`.
pub fn uint_number<const N: usize>(endian: Endian) -> UintNumber<N> {
    const { assert!(N <= 4, "uint_number supports at most 4 bytes") };
    Map::new(
        Uint::new(endian),
        number_to_big as fn(&u32) -> Result<BigInt, CodecError>,
        big_to_number as fn(BigInt) -> Result<u32, CodecError>,
    )
}

fn number_to_big(v: &u32) -> Result<BigInt, CodecError> {
    Ok(BigInt::from(*v))
}

fn big_to_number(v: BigInt) -> Result<u32, CodecError> {
    v.to_u32().ok_or_else(|| CodecError::ValueOutOfRange {
        ty: "u32",
        value: v.to_string(),
    })
}

/// Integer codec carrying values as `0x` prefixed hex strings.
pub type HexUint<C> = Map<
    C,
    String,
    String,
    fn(&String) -> Result<BigInt, CodecError>,
    fn(BigInt) -> Result<String, CodecError>,
>;

/// Wraps a [`BigInt`] codec so values go in and out as hex strings.
pub fn hex_uint<C>(codec: C) -> HexUint<C>
where
    C: Codec<Encodable = BigInt, Decoded = BigInt>,
{
    Map::new(
        codec,
        parse_hex_uint as fn(&String) -> Result<BigInt, CodecError>,
        format_hex_uint as fn(BigInt) -> Result<String, CodecError>,
    )
}

fn strip_hex_prefix(s: &str) -> Result<&str, CodecError> {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| CodecError::InvalidHex(s.to_owned()))
}

fn parse_hex_uint(s: &String) -> Result<BigInt, CodecError> {
    let digits = strip_hex_prefix(s)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidHex(s.clone()));
    }
    BigInt::parse_bytes(digits.as_bytes(), 16).ok_or_else(|| CodecError::InvalidHex(s.clone()))
}

fn format_hex_uint(v: BigInt) -> Result<String, CodecError> {
    Ok(format!("{v:#x}"))
}

/// Bytes codec carrying values as `0x` prefixed hex strings.
pub type HexBytes<C> = Map<
    C,
    String,
    String,
    fn(&String) -> Result<Vec<u8>, CodecError>,
    fn(Vec<u8>) -> Result<String, CodecError>,
>;

/// Wraps a `Vec<u8>` codec so values go in and out as hex strings.
pub fn hex_bytes<C>(codec: C) -> HexBytes<C>
where
    C: Codec<Encodable = Vec<u8>, Decoded = Vec<u8>>,
{
    Map::new(
        codec,
        parse_hex_bytes as fn(&String) -> Result<Vec<u8>, CodecError>,
        format_hex_bytes as fn(Vec<u8>) -> Result<String, CodecError>,
    )
}

fn parse_hex_bytes(s: &String) -> Result<Vec<u8>, CodecError> {
    hex::decode(strip_hex_prefix(s)?).map_err(|_| CodecError::InvalidHex(s.clone()))
}

fn format_hex_bytes(v: Vec<u8>) -> Result<String, CodecError> {
    Ok(format!("0x{}", hex::encode(v)))
}

/// Codec for a [`Newtype`] that encodes exactly like its inner value.
pub struct Wrapped<W, C> {
    inner: C,
    _pd: PhantomData<fn() -> W>,
}

impl<W, C> Wrapped<W, C> {
    /// Wraps the codec of the inner value.
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            _pd: PhantomData,
        }
    }
}

impl<W, C: Default> Default for Wrapped<W, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<W, C: fmt::Debug> fmt::Debug for Wrapped<W, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Wrapped").field(&self.inner).finish()
    }
}

impl<W, C> Codec for Wrapped<W, C>
where
    W: Newtype,
    C: Codec<Encodable = W::Inner, Decoded = W::Inner>,
{
    type Encodable = W;
    type Decoded = W;

    fn byte_length(&self) -> Option<usize> {
        self.inner.byte_length()
    }

    fn encode_to(&self, value: &W, enc: &mut impl Encoder) -> Result<(), CodecError> {
        self.inner.encode_to(value.as_inner(), enc)
    }

    fn decode(&self, buf: &[u8]) -> Result<W, CodecError> {
        self.inner.decode(buf).map(W::from_inner)
    }
}

impl<W, C> FixedCodec for Wrapped<W, C>
where
    W: Newtype,
    C: FixedCodec<Encodable = W::Inner, Decoded = W::Inner>,
{
    fn fixed_len(&self) -> usize {
        self.inner.fixed_len()
    }
}
