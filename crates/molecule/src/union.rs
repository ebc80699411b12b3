//! Unions: a `u32le` discriminant followed by the variant body.

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::buf_decoder::BufDecoder;
use crate::{Codec, CodecError, Encoder};

/// Schema of a molecule union.  Usually derived with
/// `#[derive(Molecule)] #[molecule(union)]`.
pub trait UnionVariants: Sized {
    /// Type name, for diagnostics.
    const NAME: &'static str;

    /// Variant names in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Custom discriminants per variant.  `None` means each variant is
    /// tagged with its declaration index.
    const IDS: Option<&'static [Option<u32>]> = None;

    /// Declaration index of the active variant.
    fn variant_index(&self) -> usize;

    /// Writes the body of the active variant.
    fn encode_variant<E: Encoder>(&self, enc: &mut E) -> Result<(), CodecError>;

    /// Decodes the body of the variant at `index`.
    fn decode_variant(index: usize, buf: &[u8]) -> Result<Self, CodecError>;
}

/// Union codec over a [`UnionVariants`] schema.
pub struct Union<V> {
    ids: Option<Vec<Option<u32>>>,
    _pd: PhantomData<fn() -> V>,
}

impl<V: UnionVariants> Union<V> {
    /// Codec using the schema's own tagging.
    pub fn new() -> Self {
        Self {
            ids: V::IDS.map(<[Option<u32>]>::to_vec),
            _pd: PhantomData,
        }
    }

    /// Codec tagging variants with custom ids, keyed by variant name.
    /// Variants left out cannot be encoded or decoded.
    pub fn with_ids(ids: &[(&str, u32)]) -> Result<Self, CodecError> {
        let mut table = vec![None; V::VARIANTS.len()];
        for &(name, id) in ids {
            let index = V::VARIANTS
                .iter()
                .position(|v| *v == name)
                .ok_or_else(|| CodecError::UnknownFieldOrVariant(name.to_owned()))?;
            if table.contains(&Some(id)) {
                return Err(CodecError::InvalidDiscriminant {
                    ty: V::NAME,
                    value: id,
                });
            }
            table[index] = Some(id);
        }
        Ok(Self {
            ids: Some(table),
            _pd: PhantomData,
        })
    }

    /// Discriminant written for the variant at `index`.
    pub fn discriminant(&self, index: usize) -> Result<u32, CodecError> {
        let name = V::VARIANTS
            .get(index)
            .ok_or_else(|| CodecError::UnknownFieldOrVariant(format!("#{index}")))?;
        match &self.ids {
            None => u32::try_from(index).map_err(|_| CodecError::OverflowContainer(index)),
            Some(ids) => ids
                .get(index)
                .copied()
                .flatten()
                .ok_or_else(|| CodecError::UnknownFieldOrVariant((*name).to_owned())),
        }
    }

    fn index_of(&self, discriminant: u32) -> Option<usize> {
        match &self.ids {
            None => usize::try_from(discriminant)
                .ok()
                .filter(|i| *i < V::VARIANTS.len()),
            Some(ids) => ids.iter().position(|id| *id == Some(discriminant)),
        }
    }
}

impl<V: UnionVariants> Default for Union<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for Union<V> {
    fn clone(&self) -> Self {
        Self {
            ids: self.ids.clone(),
            _pd: PhantomData,
        }
    }
}

impl<V: UnionVariants> fmt::Debug for Union<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Union")
            .field("name", &V::NAME)
            .field("ids", &self.ids)
            .finish()
    }
}

impl<V: UnionVariants> Codec for Union<V> {
    type Encodable = V;
    type Decoded = V;

    fn byte_length(&self) -> Option<usize> {
        None
    }

    fn encode_to(&self, value: &V, enc: &mut impl Encoder) -> Result<(), CodecError> {
        let index = value.variant_index();
        let discriminant = self.discriminant(index)?;
        enc.write_buf(&discriminant.to_le_bytes())?;
        value
            .encode_variant(enc)
            .map_err(|e| e.in_field(V::VARIANTS[index]))
    }

    fn decode(&self, buf: &[u8]) -> Result<V, CodecError> {
        let dec = BufDecoder::new(buf);
        let discriminant = dec.read_u32_at(0)?;
        let Some(index) = self.index_of(discriminant) else {
            debug!(union = V::NAME, %discriminant, "unknown union discriminant");
            return Err(CodecError::InvalidDiscriminant {
                ty: V::NAME,
                value: discriminant,
            });
        };
        V::decode_variant(index, dec.rest(4)?).map_err(|e| e.in_field(V::VARIANTS[index]))
    }
}
