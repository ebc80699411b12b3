/// Implements [`Newtype`](crate::Newtype) and [`Molecule`](crate::Molecule)
/// for a single-field tuple struct so it encodes exactly like the value it
/// wraps, as in `impl_wrapper_molecule!(ShortId => [u8; 10])`.
#[macro_export]
macro_rules! impl_wrapper_molecule {
    ($wrapper:ident => $inner:ty) => {
        impl $crate::Newtype for $wrapper {
            type Inner = $inner;

            fn as_inner(&self) -> &$inner {
                &self.0
            }

            fn from_inner(inner: $inner) -> Self {
                Self(inner)
            }
        }

        impl $crate::Molecule for $wrapper {
            type Codec = $crate::Wrapped<$wrapper, <$inner as $crate::Molecule>::Codec>;
        }
    };
}
