use std::collections::HashSet;

use proc_macro2::Ident;
use syn::{Data, Fields, LitStr, Variant};

use crate::{parse_eq, ATTR};

pub struct ParsedVariant {
    pub ident: Ident,
    pub name: LitStr,
}

impl TryFrom<Variant> for ParsedVariant {
    type Error = syn::Error;

    fn try_from(variant: Variant) -> Result<Self, Self::Error> {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant.fields,
                "FlagEnum variants can't have fields",
            ));
        }

        let mut rename = None;
        for attr in variant.attrs {
            if !attr.path().is_ident(ATTR) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if !meta.path.is_ident("rename") {
                    return Err(syn::Error::new_spanned(meta.path, "Unrecognised option"));
                }

                rename = Some(parse_eq::<LitStr>(meta.input)?);
                Ok(())
            })?;
        }

        let name = rename
            .unwrap_or_else(|| LitStr::new(&variant.ident.to_string(), variant.ident.span()));

        Ok(Self {
            ident: variant.ident,
            name,
        })
    }
}

pub struct ParsedVariants {
    variants: Vec<ParsedVariant>,
}

impl ParsedVariants {
    pub fn from_data(ident: &Ident, data: Data) -> syn::Result<Self> {
        let data = match data {
            Data::Enum(data) => data,
            Data::Struct(_) | Data::Union(_) => {
                return Err(syn::Error::new(
                    ident.span(),
                    "FlagEnum can only be derived on enums",
                ));
            }
        };

        let variants = data
            .variants
            .into_iter()
            .map(ParsedVariant::try_from)
            .collect::<syn::Result<Vec<_>>>()?;

        let mut seen = HashSet::with_capacity(variants.len());
        for variant in &variants {
            if !seen.insert(variant.name.value().to_ascii_lowercase()) {
                return Err(syn::Error::new(
                    variant.name.span(),
                    "Duplicate variant name (names are compared ignoring ASCII case)",
                ));
            }
        }

        Ok(Self { variants })
    }

    pub fn names(&self) -> Vec<&LitStr> {
        self.variants.iter().map(move |v| &v.name).collect()
    }

    pub fn idents(&self) -> Vec<&Ident> {
        self.variants.iter().map(move |v| &v.ident).collect()
    }
}
