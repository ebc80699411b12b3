//! Derive macro for the `Molecule` trait from `ccc-molecule`.
//!
//! The container attribute picks the layout and the field order on the wire
//! is the declaration order.
//!
//! # Examples
//!
//! ## Table
//! ```ignore
//! use ccc_molecule::{Molecule, Vector, U8};
//!
//! #[derive(Molecule)]
//! #[molecule(table)]
//! struct Script {
//!     code_hash: [u8; 32],
//!     hash_type: u8,
//!     args: Vec<u8>,
//! }
//! ```
//!
//! ## Struct
//! Every field codec must have a fixed size, which is checked at compile time.
//! ```ignore
//! #[derive(Molecule)]
//! #[molecule(struct)]
//! struct OutPoint {
//!     tx_hash: [u8; 32],
//!     index: u32,
//! }
//! ```
//!
//! ## Union
//! ```ignore
//! #[derive(Molecule)]
//! #[molecule(union)]
//! enum Value {
//!     #[molecule(id = 0xff00)]
//!     Byte(u8),
//!     #[molecule(id = 0xff01)]
//!     Word(u32),
//! }
//! ```
//!
//! ## Field attributes
//! * `codec = Type` overrides the field codec.  The type must implement
//!   `Default`.  Without it the field type's canonical `Molecule::Codec` is
//!   used.
//! * `name = "..."` sets the name used in errors, defaulting to the field or
//!   variant identifier.
//! * `id = N` (union variants only) sets a custom discriminant.  Either all
//!   or none of the variants carry one.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DataEnum, DataStruct, DeriveInput, Fields, Ident, LitInt, LitStr, Type,
    parse_macro_input,
};

/// Derives `Molecule` plus the schema trait for the chosen layout:
/// `TableFields` for `#[molecule(table)]`, `StructFields` for
/// `#[molecule(struct)]`, `UnionVariants` for `#[molecule(union)]`.
#[proc_macro_derive(Molecule, attributes(molecule))]
pub fn derive_molecule(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Clone, Copy)]
enum Layout {
    Table,
    Struct,
    Union,
}

/// Per-field or per-variant options.
#[derive(Default)]
struct ItemAttrs {
    codec: Option<Type>,
    name: Option<String>,
    id: Option<u32>,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let layout = container_layout(input)?;
    match (&input.data, layout) {
        (Data::Struct(data), Layout::Table) => expand_table(input, data),
        (Data::Struct(data), Layout::Struct) => expand_struct(input, data),
        (Data::Enum(data), Layout::Union) => expand_union(input, data),
        (Data::Enum(_), _) => Err(syn::Error::new_spanned(
            &input.ident,
            "enums can only derive Molecule as #[molecule(union)]",
        )),
        (_, Layout::Union) => Err(syn::Error::new_spanned(
            &input.ident,
            "#[molecule(union)] requires an enum",
        )),
        (Data::Union(_), _) => Err(syn::Error::new_spanned(
            &input.ident,
            "Molecule cannot be derived for Rust unions",
        )),
    }
}

fn container_layout(input: &DeriveInput) -> syn::Result<Layout> {
    let mut layout = None;
    for attr in molecule_attrs(&input.attrs) {
        attr.parse_nested_meta(|meta| {
            let found = if meta.path.is_ident("table") {
                Layout::Table
            } else if meta.path.is_ident("struct") {
                Layout::Struct
            } else if meta.path.is_ident("union") {
                Layout::Union
            } else {
                return Err(meta.error("expected `table`, `struct` or `union`"));
            };
            if layout.replace(found).is_some() {
                return Err(meta.error("layout given more than once"));
            }
            Ok(())
        })?;
    }
    layout.ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "missing #[molecule(table)], #[molecule(struct)] or #[molecule(union)]",
        )
    })
}

fn molecule_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|a| a.path().is_ident("molecule"))
}

fn item_attrs(attrs: &[Attribute]) -> syn::Result<ItemAttrs> {
    let mut out = ItemAttrs::default();
    for attr in molecule_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("codec") {
                out.codec = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("name") {
                out.name = Some(meta.value()?.parse::<LitStr>()?.value());
            } else if meta.path.is_ident("id") {
                out.id = Some(meta.value()?.parse::<LitInt>()?.base10_parse()?);
            } else {
                return Err(meta.error("expected `codec`, `name` or `id`"));
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// A resolved record field: how to reach it, what to call it, how to code it.
struct FieldSpec {
    ident: Ident,
    name: String,
    codec: TokenStream2,
}

fn named_fields(input: &DeriveInput, data: &DataStruct) -> syn::Result<Vec<FieldSpec>> {
    let fields = match &data.fields {
        Fields::Named(fields) => &fields.named,
        Fields::Unit => return Ok(Vec::new()),
        Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Molecule records need named fields",
            ));
        }
    };

    fields
        .iter()
        .map(|field| {
            let attrs = item_attrs(&field.attrs)?;
            if attrs.id.is_some() {
                return Err(syn::Error::new_spanned(field, "`id` only applies to union variants"));
            }
            let ident = field
                .ident
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
            let name = attrs.name.unwrap_or_else(|| ident.to_string());
            let ty = &field.ty;
            let codec = match attrs.codec {
                Some(codec) => quote! { #codec },
                None => quote! { <#ty as ::ccc_molecule::Molecule>::Codec },
            };
            Ok(FieldSpec { ident, name, codec })
        })
        .collect()
}

fn new_codec(codec: &TokenStream2) -> TokenStream2 {
    quote! { <#codec as ::core::default::Default>::default() }
}

fn molecule_impl(input: &DeriveInput, codec: TokenStream2) -> TokenStream2 {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    quote! {
        #[automatically_derived]
        impl #impl_generics ::ccc_molecule::Molecule for #ident #ty_generics #where_clause {
            type Codec = #codec;
        }
    }
}

fn expand_table(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let type_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let fields = named_fields(input, data)?;

    let names = fields.iter().map(|f| &f.name);
    let writes = fields.iter().map(|f| {
        let FieldSpec { ident, name, codec } = f;
        let codec = new_codec(codec);
        quote! { w.write(#name, &#codec, &self.#ident)?; }
    });
    let reads = fields.iter().map(|f| {
        let FieldSpec { ident, name, codec } = f;
        let codec = new_codec(codec);
        quote! { #ident: r.read(#name, &#codec)?, }
    });
    let molecule = molecule_impl(input, quote! { ::ccc_molecule::Table<Self> });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::ccc_molecule::TableFields for #ident #ty_generics #where_clause {
            const NAME: &'static str = #type_name;
            const FIELDS: &'static [&'static str] = &[#(#names),*];

            fn write_fields<__E: ::ccc_molecule::Encoder>(
                &self,
                w: &mut ::ccc_molecule::TableWriter<'_, __E>,
            ) -> ::core::result::Result<(), ::ccc_molecule::CodecError> {
                #(#writes)*
                ::core::result::Result::Ok(())
            }

            fn read_fields(
                r: &mut ::ccc_molecule::TableReader<'_>,
            ) -> ::core::result::Result<Self, ::ccc_molecule::CodecError> {
                ::core::result::Result::Ok(Self { #(#reads)* })
            }
        }

        #molecule
    })
}

fn expand_struct(input: &DeriveInput, data: &DataStruct) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let type_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let fields = named_fields(input, data)?;

    let names = fields.iter().map(|f| &f.name);
    let lens = fields.iter().map(|f| {
        let codec = new_codec(&f.codec);
        quote! { + ::ccc_molecule::FixedCodec::fixed_len(&#codec) }
    });
    let writes = fields.iter().map(|f| {
        let FieldSpec { ident, name, codec } = f;
        let codec = new_codec(codec);
        quote! { w.write(#name, &#codec, &self.#ident)?; }
    });
    let reads = fields.iter().map(|f| {
        let FieldSpec { ident, name, codec } = f;
        let codec = new_codec(codec);
        quote! { #ident: r.read(#name, &#codec)?, }
    });
    let molecule = molecule_impl(input, quote! { ::ccc_molecule::Struct<Self> });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::ccc_molecule::StructFields for #ident #ty_generics #where_clause {
            const NAME: &'static str = #type_name;
            const FIELDS: &'static [&'static str] = &[#(#names),*];

            fn byte_length() -> usize {
                0 #(#lens)*
            }

            fn write_fields<__E: ::ccc_molecule::Encoder>(
                &self,
                w: &mut ::ccc_molecule::StructWriter<'_, __E>,
            ) -> ::core::result::Result<(), ::ccc_molecule::CodecError> {
                #(#writes)*
                ::core::result::Result::Ok(())
            }

            fn read_fields(
                r: &mut ::ccc_molecule::StructReader<'_>,
            ) -> ::core::result::Result<Self, ::ccc_molecule::CodecError> {
                ::core::result::Result::Ok(Self { #(#reads)* })
            }
        }

        #molecule
    })
}

fn expand_union(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let type_name = ident.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(ident, "a union needs at least one variant"));
    }

    let mut names = Vec::new();
    let mut idents = Vec::new();
    let mut codecs = Vec::new();
    let mut ids = Vec::new();
    for variant in &data.variants {
        let attrs = item_attrs(&variant.attrs)?;
        let ty = match &variant.fields {
            Fields::Unnamed(f) if f.unnamed.len() == 1 => &f.unnamed[0].ty,
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "union variants must have exactly one unnamed field",
                ));
            }
        };
        names.push(attrs.name.unwrap_or_else(|| variant.ident.to_string()));
        idents.push(variant.ident.clone());
        codecs.push(match attrs.codec {
            Some(codec) => quote! { #codec },
            None => quote! { <#ty as ::ccc_molecule::Molecule>::Codec },
        });
        ids.push(attrs.id);
    }

    let ids = if ids.iter().all(Option::is_none) {
        quote! { ::core::option::Option::None }
    } else if ids.iter().all(Option::is_some) {
        let ids = ids.iter().flatten();
        quote! { ::core::option::Option::Some(&[#(::core::option::Option::Some(#ids)),*]) }
    } else {
        return Err(syn::Error::new_spanned(
            ident,
            "either every union variant has an `id` or none does",
        ));
    };

    let indices: Vec<_> = (0..idents.len()).collect();
    let value = format_ident!("__value");
    let encodes = idents.iter().zip(&codecs).map(|(v, codec)| {
        let codec = new_codec(codec);
        quote! { Self::#v(#value) => ::ccc_molecule::Codec::encode_to(&#codec, #value, enc), }
    });
    let decodes = idents.iter().zip(&codecs).zip(&indices).map(|((v, codec), i)| {
        let codec = new_codec(codec);
        quote! { #i => ::core::result::Result::Ok(Self::#v(::ccc_molecule::Codec::decode(&#codec, buf)?)), }
    });
    let molecule = molecule_impl(input, quote! { ::ccc_molecule::Union<Self> });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::ccc_molecule::UnionVariants for #ident #ty_generics #where_clause {
            const NAME: &'static str = #type_name;
            const VARIANTS: &'static [&'static str] = &[#(#names),*];
            const IDS: ::core::option::Option<&'static [::core::option::Option<u32>]> = #ids;

            fn variant_index(&self) -> usize {
                match self {
                    #(Self::#idents(..) => #indices,)*
                }
            }

            fn encode_variant<__E: ::ccc_molecule::Encoder>(
                &self,
                enc: &mut __E,
            ) -> ::core::result::Result<(), ::ccc_molecule::CodecError> {
                match self {
                    #(#encodes)*
                }
            }

            fn decode_variant(
                index: usize,
                buf: &[u8],
            ) -> ::core::result::Result<Self, ::ccc_molecule::CodecError> {
                match index {
                    #(#decodes)*
                    _ => ::core::result::Result::Err(::ccc_molecule::CodecError::UnknownFieldOrVariant(
                        ::std::format!("#{}", index),
                    )),
                }
            }
        }

        #molecule
    })
}
