//! Canonical codecs for std types.

use crate::{
    Bool, Bytes, FixedBytes, Molecule, Opt, StringCodec, U8, U16Le, U32Le, U64Le, U128Le,
};

impl Molecule for u8 {
    type Codec = U8;
}

impl Molecule for u16 {
    type Codec = U16Le;
}

impl Molecule for u32 {
    type Codec = U32Le;
}

impl Molecule for u64 {
    type Codec = U64Le;
}

impl Molecule for u128 {
    type Codec = U128Le;
}

impl Molecule for bool {
    type Codec = Bool;
}

impl<const N: usize> Molecule for [u8; N] {
    type Codec = FixedBytes<N>;
}

/// Byte vectors are `Bytes`, not a fixvec of `byte`.  The wire layout is the
/// same.
impl Molecule for Vec<u8> {
    type Codec = Bytes;
}

impl Molecule for String {
    type Codec = StringCodec;
}

impl<T: Molecule> Molecule for Option<T> {
    type Codec = Opt<T::Codec>;
}

#[cfg(test)]
mod tests {
    use crate::Molecule;

    #[test]
    fn test_std_types() {
        assert_eq!(7u32.to_molecule_bytes().unwrap(), [7, 0, 0, 0]);
        assert_eq!(u64::from_molecule_slice(&[1, 0, 0, 0, 0, 0, 0, 0]).unwrap(), 1);
        assert_eq!(vec![9u8].to_molecule_bytes().unwrap(), [1, 0, 0, 0, 9]);
        assert_eq!(
            String::from_molecule_slice(&[2, 0, 0, 0, b'o', b'k']).unwrap(),
            "ok"
        );
        assert_eq!(Some(true).to_molecule_bytes().unwrap(), [1]);
        assert_eq!(Option::<u16>::from_molecule_slice(&[]).unwrap(), None);
        assert_eq!([1u8, 2].to_molecule_bytes().unwrap(), [1, 2]);
    }
}
