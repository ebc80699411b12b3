//! JSON shape of the chain types: `0x` hex strings for bytes and integers,
//! names for the enums.  Binary serializers get raw bytes and numbers.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{DepType, H256, HashType, JsonBytes, ProposalShortId};

/// Deserializes a value from its `FromStr` form.
struct StrVisitor<T>(&'static str, PhantomData<T>);

impl<T> de::Visitor<'_> for StrVisitor<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        v.parse().map_err(E::custom)
    }
}

macro_rules! impl_serde_fixed_hash {
    ($name:ident, $len:literal) => {
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                if s.is_human_readable() {
                    s.serialize_str(&self.to_string())
                } else {
                    s.serialize_bytes(self.as_bytes())
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                if d.is_human_readable() {
                    d.deserialize_str(StrVisitor(
                        concat!("a 0x prefixed ", $len, "-byte hex string"),
                        PhantomData,
                    ))
                } else {
                    struct BytesVisitor;

                    impl de::Visitor<'_> for BytesVisitor {
                        type Value = $name;

                        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                            write!(f, "{} bytes", $len)
                        }

                        fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<$name, E> {
                            let bytes: [u8; $len] = v
                                .try_into()
                                .map_err(|_| E::invalid_length(v.len(), &self))?;
                            Ok($name::new(bytes))
                        }
                    }

                    d.deserialize_bytes(BytesVisitor)
                }
            }
        }
    };
}

impl_serde_fixed_hash!(H256, 32);
impl_serde_fixed_hash!(ProposalShortId, 10);

impl Serialize for JsonBytes {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(&self.to_string())
        } else {
            s.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for JsonBytes {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            d.deserialize_str(StrVisitor("a 0x prefixed hex string", PhantomData))
        } else {
            struct BytesVisitor;

            impl de::Visitor<'_> for BytesVisitor {
                type Value = JsonBytes;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("bytes")
                }

                fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<JsonBytes, E> {
                    Ok(JsonBytes::from(v))
                }

                fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<JsonBytes, E> {
                    Ok(JsonBytes(v))
                }
            }

            d.deserialize_byte_buf(BytesVisitor)
        }
    }
}

macro_rules! impl_serde_byte_enum {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                if s.is_human_readable() {
                    s.serialize_str(self.as_str())
                } else {
                    s.serialize_u8(self.to_byte())
                }
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                if d.is_human_readable() {
                    d.deserialize_str(StrVisitor(
                        concat!("a ", stringify!($ty), " name"),
                        PhantomData,
                    ))
                } else {
                    let b = u8::deserialize(d)?;
                    $ty::from_byte(b).map_err(de::Error::custom)
                }
            }
        }
    };
}

impl_serde_byte_enum!(HashType);
impl_serde_byte_enum!(DepType);

/// `serde(with)` module for integers written as `0x` hex quantities, as
/// the node's RPC does.
pub(crate) mod quantity {
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Unsigned integers with a hex quantity form.
    pub(crate) trait Quantity: Sized {
        fn to_hex(&self) -> String;

        fn from_hex_digits(digits: &str) -> Option<Self>;

        fn serialize_raw<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error>;

        fn deserialize_raw<'de, D: Deserializer<'de>>(d: D) -> Result<Self, D::Error>;
    }

    macro_rules! impl_quantity {
        ($ty:ty, $ser:ident) => {
            impl Quantity for $ty {
                fn to_hex(&self) -> String {
                    format!("{self:#x}")
                }

                fn from_hex_digits(digits: &str) -> Option<Self> {
                    <$ty>::from_str_radix(digits, 16).ok()
                }

                fn serialize_raw<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                    s.$ser(*self)
                }

                fn deserialize_raw<'de, D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                    <$ty>::deserialize(d)
                }
            }
        };
    }

    impl_quantity!(u32, serialize_u32);
    impl_quantity!(u64, serialize_u64);
    impl_quantity!(u128, serialize_u128);

    pub(crate) fn serialize<T: Quantity, S: Serializer>(v: &T, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(&v.to_hex())
        } else {
            v.serialize_raw(s)
        }
    }

    pub(crate) fn deserialize<'de, T: Quantity, D: Deserializer<'de>>(
        d: D,
    ) -> Result<T, D::Error> {
        if !d.is_human_readable() {
            return T::deserialize_raw(d);
        }
        let s = String::deserialize(d)?;
        s.strip_prefix("0x")
            // `from_str_radix` accepts a leading `+`, which is not a hex digit.
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(T::from_hex_digits)
            .ok_or_else(|| de::Error::custom(format!("invalid hex quantity {s:?}")))
    }
}
