//! Parse implementation for converting a TokenStream to the macro AST.

use replies_semantics::screaming_snake_case;
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Fields, ItemEnum};

use crate::input::{KindDefinition, MacroInput};

impl Parse for MacroInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let item: ItemEnum = input.parse()?;

        if !item.generics.params.is_empty() {
            return Err(syn::Error::new(
                item.generics.span(),
                "reply kind enums cannot be generic",
            ));
        }

        let kinds = item
            .variants
            .into_iter()
            .map(|variant| {
                let invalid_shape = match (&variant.fields, &variant.discriminant) {
                    (Fields::Unit, None) => None,
                    (Fields::Unit, Some((_, expr))) => Some(expr.span()),
                    (fields, _) => Some(fields.span()),
                };
                KindDefinition {
                    name: screaming_snake_case(&variant.ident.to_string()),
                    attrs: variant.attrs,
                    ident: variant.ident,
                    invalid_shape,
                }
            })
            .collect();

        Ok(MacroInput {
            attrs: item.attrs,
            vis: item.vis,
            ident: item.ident,
            kinds,
        })
    }
}
