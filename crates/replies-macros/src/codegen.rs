//! Code generation for the reply_kinds! macro.
//!
//! Transforms validated MacroInput into:
//! - The enum declaration with the derives a lookup key needs
//! - `ALL` / `NAMES` tables and `index()` / `name()` / `from_name()`
//! - A `Display` impl printing the declared name

use proc_macro2::TokenStream;
use quote::quote;

use crate::input::MacroInput;

/// Main code generation entry point.
pub fn codegen(input: &MacroInput) -> TokenStream {
    let declaration = generate_enum(input);
    let lookup = generate_lookup(input);
    let display = generate_display(input);

    quote! {
        #declaration
        #lookup
        #display
    }
}

fn generate_enum(input: &MacroInput) -> TokenStream {
    let attrs = &input.attrs;
    let vis = &input.vis;
    let ident = &input.ident;
    let variants = input.kinds.iter().map(|kind| {
        let variant_attrs = &kind.attrs;
        let variant = &kind.ident;
        let doc = format!("`{}`", kind.name);
        quote! {
            #(#variant_attrs)*
            #[doc = ""]
            #[doc = #doc]
            #variant
        }
    });

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #vis enum #ident {
            #(#variants,)*
        }
    }
}

fn generate_lookup(input: &MacroInput) -> TokenStream {
    let ident = &input.ident;
    let variants: Vec<_> = input.kinds.iter().map(|kind| &kind.ident).collect();
    let names: Vec<&str> = input.kinds.iter().map(|kind| kind.name.as_str()).collect();

    quote! {
        impl #ident {
            /// Every kind, in declaration order.
            pub const ALL: &'static [#ident] = &[#(#ident::#variants),*];

            /// Declared names, indexed by [`Self::index`].
            pub const NAMES: &'static [&'static str] = &[#(#names),*];

            /// Zero-based declaration index.
            ///
            /// Stable for the lifetime of the process; compare kinds directly
            /// rather than relying on the numeric value.
            pub const fn index(self) -> usize {
                self as usize
            }

            /// The declared SCREAMING_SNAKE_CASE name.
            pub const fn name(self) -> &'static str {
                Self::NAMES[self as usize]
            }

            /// Looks up a kind by its declared name.
            pub fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#names => ::core::option::Option::Some(#ident::#variants),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

fn generate_display(input: &MacroInput) -> TokenStream {
    let ident = &input.ident;
    quote! {
        impl ::core::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }
    }
}
