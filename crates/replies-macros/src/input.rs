//! Internal AST types for the reply_kinds! macro.
//!
//! These types keep span information so validation errors point at the
//! offending variant.

use proc_macro2::Span;
use syn::{Attribute, Ident, Visibility};

/// Top-level macro input: a single fieldless enum declaration.
pub struct MacroInput {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub ident: Ident,
    pub kinds: Vec<KindDefinition>,
}

/// A single reply kind: one enum variant.
pub struct KindDefinition {
    pub attrs: Vec<Attribute>,
    pub ident: Ident,
    /// SCREAMING_SNAKE_CASE name used as the lookup key.
    pub name: String,
    /// Set when the variant carries fields or a discriminant.
    pub invalid_shape: Option<Span>,
}
