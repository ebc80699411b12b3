//! Named codecs for the common molecule schema types.

use crate::{
    Bool, Byte, Byte4, Byte8, Byte16, Byte32, ByteVec, Opt, Raw, U8, U16Le, U32Le, U64Le, U128Le,
    Uint, Utf8, Vector,
};

/// `byte`.
pub type Uint8 = U8;
/// `Uint16`, little endian.
pub type Uint16 = U16Le;
/// `Uint32`, little endian.
pub type Uint32 = U32Le;
/// `Uint64`, little endian.
pub type Uint64 = U64Le;
/// `Uint128`, little endian.
pub type Uint128 = U128Le;

/// `Bytes`: length-prefixed raw bytes.
pub type Bytes = ByteVec<Raw>;
/// `BytesOpt`.
pub type BytesOpt = Opt<Bytes>;
/// `BytesVec`.
pub type BytesVec = Vector<Bytes>;
/// `BytesOptVec`.
pub type BytesOptVec = Vector<BytesOpt>;

/// `ByteOpt`.
pub type ByteOpt = Opt<Byte>;
/// `Byte4Opt`.
pub type Byte4Opt = Opt<Byte4>;
/// `Byte8Opt`.
pub type Byte8Opt = Opt<Byte8>;
/// `Byte16Opt`.
pub type Byte16Opt = Opt<Byte16>;
/// `Byte32Opt`.
pub type Byte32Opt = Opt<Byte32>;
/// `Byte4Vec`.
pub type Byte4Vec = Vector<Byte4>;
/// `Byte8Vec`.
pub type Byte8Vec = Vector<Byte8>;
/// `Byte16Vec`.
pub type Byte16Vec = Vector<Byte16>;
/// `Byte32Vec`.
pub type Byte32Vec = Vector<Byte32>;

/// `Uint8Opt`.
pub type Uint8Opt = Opt<Uint8>;
/// `Uint16Opt`.
pub type Uint16Opt = Opt<Uint16>;
/// `Uint32Opt`.
pub type Uint32Opt = Opt<Uint32>;
/// `Uint64Opt`.
pub type Uint64Opt = Opt<Uint64>;
/// `Uint128Opt`.
pub type Uint128Opt = Opt<Uint128>;
/// `Uint8Vec`.
pub type Uint8Vec = Vector<Uint8>;
/// `Uint16Vec`.
pub type Uint16Vec = Vector<Uint16>;
/// `Uint32Vec`.
pub type Uint32Vec = Vector<Uint32>;
/// `Uint64Vec`.
pub type Uint64Vec = Vector<Uint64>;
/// `Uint128Vec`.
pub type Uint128Vec = Vector<Uint128>;

/// `Uint256` over big integers.  `Default` is little endian, and
/// `Uint256::be()` gives the big endian form.
pub type Uint256 = Uint<32>;
/// `Uint512` over big integers, little endian by default.
pub type Uint512 = Uint<64>;

/// `BoolOpt`.
pub type BoolOpt = Opt<Bool>;
/// `BoolVec`.
pub type BoolVec = Vector<Bool>;

/// `String`: length-prefixed UTF-8.
pub type StringCodec = ByteVec<Utf8>;
/// `StringOpt`.
pub type StringOpt = Opt<StringCodec>;
/// `StringVec`.
pub type StringVec = Vector<StringCodec>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Codec;

    #[test]
    fn test_bytes_opt_vec() {
        let codec = BytesOptVec::default();
        let items = vec![Some(vec![0xab]), None];
        let encoded = codec.encode(&items).unwrap();
        assert_eq!(
            encoded,
            [17, 0, 0, 0, 12, 0, 0, 0, 17, 0, 0, 0, 1, 0, 0, 0, 0xab]
        );
        assert_eq!(codec.decode(&encoded).unwrap(), items);
    }

    #[test]
    fn test_byte32_vec_is_fixvec() {
        let codec = Byte32Vec::default();
        assert!(codec.is_fixed());
        let encoded = codec.encode(&vec![[7; 32]]).unwrap();
        assert_eq!(encoded.len(), 36);
        assert_eq!(&encoded[..4], &[1, 0, 0, 0]);
    }

    #[test]
    fn test_wide_uints() {
        use num_bigint::BigInt;

        let one = BigInt::from(1u8);
        let le = Uint256::default().encode(&one).unwrap();
        assert_eq!(le.len(), 32);
        assert_eq!(le[0], 1);
        let be = Uint256::be().encode(&one).unwrap();
        assert_eq!(be[31], 1);
        assert_eq!(Uint256::be().decode(&be).unwrap(), one);

        let max = (BigInt::from(1u8) << 512u32) - 1u8;
        let encoded = Uint512::le().encode(&max).unwrap();
        assert_eq!(encoded, vec![0xff; 64]);
        assert_eq!(Uint512::le().decode(&encoded).unwrap(), max);
        assert!(Uint512::le().encode(&(max + 1u8)).is_err());
    }

    #[test]
    fn test_string_vec() {
        let codec = StringVec::default();
        let items = vec!["a".to_owned(), "bc".to_owned()];
        assert_eq!(codec.decode(&codec.encode(&items).unwrap()).unwrap(), items);
    }

    #[test]
    fn test_bool_opt() {
        assert_eq!(BoolOpt::default().encode(&Some(true)).unwrap(), [1]);
        assert_eq!(BoolOpt::default().decode(&[]).unwrap(), None);
    }
}
