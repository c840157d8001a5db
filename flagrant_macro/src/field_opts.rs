use proc_macro2::Ident;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::{parse_eq, ATTR, OPT_SKIP};

#[derive(Default)]
pub struct FieldOpts {
    pub skip: Option<Ident>,
    pub name: Option<LitStr>,
    pub short: Option<LitStr>,
    pub custom: Option<LitStr>,
}

impl FieldOpts {
    /// Fold every `#[flag(...)]` attribute into one set of options. Each option may be given
    /// once per field, whether in one attribute or spread over several.
    pub fn from_attrs(attrs: impl IntoIterator<Item = Attribute>) -> syn::Result<Self> {
        let mut opts = Self::default();
        for attr in attrs {
            if attr.path().is_ident(ATTR) {
                opts.parse_attr(&attr)?;
            }
        }

        Ok(opts)
    }

    fn parse_attr(&mut self, attr: &Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            let ident = match meta.path.get_ident() {
                Some(ident) => ident,
                None => {
                    return Err(syn::Error::new(meta.path.span(), "Expected `Ident`"));
                }
            };

            match ident.to_string().as_str() {
                v if v == OPT_SKIP => set_once(&mut self.skip, ident.clone(), ident),
                "name" => set_once(&mut self.name, flag_name(meta.input)?, ident),
                "short" => set_once(&mut self.short, flag_name(meta.input)?, ident),
                "custom" => {
                    let custom: LitStr = parse_eq(meta.input)?;
                    if custom.value().is_empty() {
                        return Err(syn::Error::new(custom.span(), "Handler name can't be empty"));
                    }
                    set_once(&mut self.custom, custom, ident)
                }
                _ => Err(syn::Error::new(ident.span(), "Unknown option")),
            }
        })
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, ident: &Ident) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            ident.span(),
            format!("Duplicate `{ident}` option"),
        ));
    }

    *slot = Some(value);
    Ok(())
}

/// Parse `= "name"`, rejecting names the tokenizer would never produce.
fn flag_name(input: syn::parse::ParseStream) -> syn::Result<LitStr> {
    let name: LitStr = parse_eq(input)?;
    let value = name.value();

    if value.is_empty() {
        Err(syn::Error::new(name.span(), "Flag name can't be empty"))
    } else if value.contains(|c: char| c == '-' || c == '=') {
        Err(syn::Error::new(
            name.span(),
            "Flag name can't contain `-` or `=`",
        ))
    } else {
        Ok(name)
    }
}
