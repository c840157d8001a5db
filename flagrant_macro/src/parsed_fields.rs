use proc_macro2::{Delimiter, Group, Ident, TokenStream};
use quote::{quote, ToTokens, TokenStreamExt};
use syn::{Data, Type};

use crate::struct_field::StructField;
use crate::{new_ident, ARG_FLAGRANT};

pub struct ParsedFields {
    fields: Vec<StructField>,
}

impl ParsedFields {
    pub fn from_data(ident: &Ident, data: Data) -> syn::Result<Self> {
        match data {
            Data::Struct(data) => Ok(Self {
                fields: StructField::collect_from_fields(data.fields)?,
            }),
            Data::Enum(_) | Data::Union(_) => Err(syn::Error::new(
                ident.span(),
                "Flags can only be derived on structs",
            )),
        }
    }

    pub fn field_types(&self) -> impl Iterator<Item = &Type> {
        self.fields.iter().map(move |f| &f.ty)
    }
}

impl ToTokens for ParsedFields {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        if self.fields.is_empty() {
            FunctionSignature::without_flagrant(true).to_tokens(tokens);
            Group::new(Delimiter::Brace, TokenStream::new()).to_tokens(tokens);
            return;
        }

        FunctionSignature::with_flagrant(false).to_tokens(tokens);

        let mut body = TokenStream::new();
        body.append_all(&self.fields);
        Group::new(Delimiter::Brace, body).to_tokens(tokens);
    }
}

pub struct FunctionSignature<'a> {
    inline: bool,
    flagrant_arg: &'a str,
}

impl<'a> FunctionSignature<'a> {
    #[inline]
    pub fn with_flagrant(inline: bool) -> Self {
        Self {
            inline,
            flagrant_arg: ARG_FLAGRANT,
        }
    }

    #[inline]
    pub fn without_flagrant(inline: bool) -> Self {
        Self {
            inline,
            flagrant_arg: "_",
        }
    }
}

impl ToTokens for FunctionSignature<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        if self.inline {
            tokens.append_all(quote! { #[inline] });
        }

        let flagrant = new_ident(self.flagrant_arg);
        tokens.append_all(quote! {
            fn bind_flags(&mut self, #flagrant: &::flagrant::Flagrant)
        });
    }
}
