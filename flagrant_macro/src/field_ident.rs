use delegate_display::DelegateDisplay;
use proc_macro2::{Ident, Literal, TokenStream};
use quote::ToTokens;

#[derive(DelegateDisplay)]
pub enum FieldIdent {
    Ident(Ident),
    Idx(usize),
}

impl FieldIdent {
    /// Default flag name: the field name without any `r#` prefix. Tuple fields have none.
    pub fn default_flag_name(&self) -> Option<String> {
        match self {
            Self::Ident(_) => {
                let name = self.to_string();
                Some(match name.strip_prefix("r#") {
                    Some(stripped) => stripped.to_owned(),
                    None => name,
                })
            }
            Self::Idx(_) => None,
        }
    }
}

impl ToTokens for FieldIdent {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Ident(i) => i.to_tokens(tokens),
            Self::Idx(i) => Literal::usize_unsuffixed(*i).to_tokens(tokens),
        }
    }
}
