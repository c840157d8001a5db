//! Macros for [`flagrant`](https://docs.rs/flagrant).

#![warn(missing_docs)]
#![allow(clippy::manual_let_else)]

use proc_macro2::{Ident, Span};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{parse_macro_input, parse_quote, DeriveInput, Generics, Token};

use crate::parsed_fields::ParsedFields;
use crate::parsed_variant::ParsedVariants;

mod field_ident;
mod field_opts;
mod parsed_fields;
mod parsed_variant;
mod struct_field;

const ATTR: &str = "flag";
const OPT_SKIP: &str = "skip";
const ARG_FLAGRANT: &str = "flagrant";

/// Derive the `Flags` trait.
///
/// Field attributes:
///
/// | Attribute | Description |
/// |---|---|
/// | `flag(skip)` | Exclude this field |
/// | `flag(name = "new_name")` | Flag name. Defaults to the field name; required on tuple struct fields |
/// | `flag(short = "n")` | Alias tried when the main name isn't given |
/// | `flag(custom = "handler")` | Convert with the custom handler registered under this name |
///
/// Each option may appear once per field, across all of its `flag` attributes.
#[proc_macro_derive(Flags, attributes(flag))]
pub fn derive_flags(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let Runtime {
        ident,
        generics,
        data: fields,
    } = parse_macro_input!(input as Runtime<ParsedFields>);

    let (g1, g2, g3) = generics.split_for_impl();

    (quote! {
        #[automatically_derived]
        impl #g1 ::flagrant::Flags for #ident #g2 #g3 {
            #fields
        }
    })
    .into()
}

/// Derive the `FlagEnum` and `FromFlag` traits on a fieldless enum.
///
/// Variant attributes:
///
/// | Attribute | Description |
/// |---|---|
/// | `flag(rename = "new_name")` | Match this name instead of the variant's |
///
/// Names must stay distinct when ASCII case is ignored.
#[proc_macro_derive(FlagEnum, attributes(flag))]
pub fn derive_flag_enum(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let Runtime {
        ident,
        generics,
        data: variants,
    } = parse_macro_input!(input as Runtime<ParsedVariants>);

    let (g1, g2, g3) = generics.split_for_impl();
    let names = variants.names();
    let idents = variants.idents();
    let target = ident.to_string();

    (quote! {
        #[automatically_derived]
        impl #g1 ::flagrant::FlagEnum for #ident #g2 #g3 {
            const NAMES: &'static [&'static str] = &[#(#names),*];

            fn from_name(name: &str, ignore_case: bool) -> ::core::option::Option<Self> {
                if ignore_case {
                    #(
                        if name.eq_ignore_ascii_case(#names) {
                            return ::core::option::Option::Some(Self::#idents);
                        }
                    )*
                    ::core::option::Option::None
                } else {
                    match name {
                        #(#names => ::core::option::Option::Some(Self::#idents),)*
                        _ => ::core::option::Option::None,
                    }
                }
            }
        }

        #[automatically_derived]
        impl #g1 ::flagrant::FromFlag for #ident #g2 #g3 {
            fn from_flag(raw: &str) -> ::core::result::Result<Self, ::flagrant::FlagError> {
                <Self as ::flagrant::FlagEnum>::from_name(raw, false).ok_or_else(|| {
                    ::flagrant::FlagError::UnknownVariant {
                        value: ::std::borrow::ToOwned::to_owned(raw),
                        target: #target,
                    }
                })
            }
        }
    })
    .into()
}

/// What a derive needs from its input: the type's name, its generics and its parsed body.
struct Runtime<D> {
    ident: Ident,
    generics: Generics,
    data: D,
}

/// A parsed derive body.
trait DeriveData: Sized {
    fn from_input(ident: &Ident, data: syn::Data) -> syn::Result<Self>;

    /// Add whatever bounds the body needs on the type's generics.
    fn extend_generics(&self, _generics: &mut Generics) {}
}

impl<D: DeriveData> Parse for Runtime<D> {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let DeriveInput {
            ident,
            mut generics,
            data,
            ..
        } = input.parse::<DeriveInput>()?;

        let data = D::from_input(&ident, data)?;
        data.extend_generics(&mut generics);

        Ok(Self {
            ident,
            generics,
            data,
        })
    }
}

impl DeriveData for ParsedFields {
    #[inline]
    fn from_input(ident: &Ident, data: syn::Data) -> syn::Result<Self> {
        Self::from_data(ident, data)
    }

    fn extend_generics(&self, generics: &mut Generics) {
        if generics.type_params().next().is_none() {
            return;
        }

        let where_clause = generics.make_where_clause();
        for ty in self.field_types() {
            where_clause
                .predicates
                .push(parse_quote! { #ty: ::flagrant::FromFlag + 'static });
        }
    }
}

impl DeriveData for ParsedVariants {
    #[inline]
    fn from_input(ident: &Ident, data: syn::Data) -> syn::Result<Self> {
        Self::from_data(ident, data)
    }
}

fn new_ident(label: &str) -> Ident {
    Ident::new(label, Span::call_site())
}

fn parse_eq<T: Parse>(stream: ParseStream) -> syn::Result<T> {
    stream.parse::<Token![=]>()?;
    stream.parse()
}
