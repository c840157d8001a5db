use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens, TokenStreamExt};
use syn::{Field, Fields, LitStr, Type};

use crate::field_ident::FieldIdent;
use crate::field_opts::FieldOpts;
use crate::{new_ident, ARG_FLAGRANT};

pub struct StructField {
    pub ident: FieldIdent,
    pub ty: Type,
    name: LitStr,
    short: Option<LitStr>,
    custom: Option<LitStr>,
}

impl StructField {
    pub fn collect_from_fields(fields: Fields) -> syn::Result<Vec<Self>> {
        let fields = match fields {
            Fields::Named(f) => f.named,
            Fields::Unnamed(f) => f.unnamed,
            Fields::Unit => return Ok(Vec::new()),
        };

        let mut out = Vec::with_capacity(fields.len());
        for (idx, field) in fields.into_iter().enumerate() {
            if let Some(field) = Self::from_field(idx, field)? {
                out.push(field);
            }
        }

        Ok(out)
    }

    /// `None` for skipped fields.
    fn from_field(idx: usize, field: Field) -> syn::Result<Option<Self>> {
        let opts = FieldOpts::from_attrs(field.attrs)?;

        if opts.skip.is_some() {
            return Ok(None);
        }

        let (ident, span) = match field.ident {
            Some(ident) => {
                let span = ident.span();
                (FieldIdent::Ident(ident), span)
            }
            None => (FieldIdent::Idx(idx), Span::call_site()),
        };

        let name = match (opts.name, ident.default_flag_name()) {
            (Some(name), _) => name,
            (None, Some(default)) => LitStr::new(&default, span),
            (None, None) => {
                return Err(syn::Error::new_spanned(
                    field.ty,
                    "Tuple struct fields need a `name`",
                ));
            }
        };

        Ok(Some(Self {
            ident,
            ty: field.ty,
            name,
            short: opts.short,
            custom: opts.custom,
        }))
    }
}

struct OptionalLit<'a>(&'a Option<LitStr>);

impl ToTokens for OptionalLit<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.append_all(match self.0 {
            Some(lit) => quote! { ::core::option::Option::Some(#lit) },
            None => quote! { ::core::option::Option::None },
        });
    }
}

impl ToTokens for StructField {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self {
            ref ident,
            ref name,
            ref short,
            ref custom,
            ..
        } = *self;

        let flagrant = new_ident(ARG_FLAGRANT);
        let short = OptionalLit(short);
        let custom = OptionalLit(custom);

        tokens.append_all(quote! {
            ::flagrant::Flagrant::bind_field(
                #flagrant,
                &mut self.#ident,
                &::flagrant::FlagSpec {
                    name: #name,
                    short: #short,
                    custom: #custom,
                },
            );
        });
    }
}
