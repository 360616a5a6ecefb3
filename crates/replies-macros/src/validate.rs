//! Compile-time validation for the reply_kinds! macro.
//!
//! Checks:
//! 1. Every variant is a plain unit variant (no fields, no discriminant)
//! 2. The enum declares at least one kind
//! 3. Names are unique and do not collide with reserved override keys

use replies_semantics::{NameTable, NameTableError};

use crate::input::MacroInput;

/// Main validation entry point.
///
/// On failure, returns an error spanning the problematic variant.
pub fn validate(input: &MacroInput) -> syn::Result<()> {
    for kind in &input.kinds {
        if let Some(span) = kind.invalid_shape {
            return Err(syn::Error::new(
                span,
                format!(
                    "reply kind '{}' must be a unit variant without a discriminant\nnote: identities are assigned in declaration order",
                    kind.ident
                ),
            ));
        }
    }

    if input.kinds.is_empty() {
        return Err(syn::Error::new(
            input.ident.span(),
            "reply kind enum must declare at least one kind",
        ));
    }

    if let Err(e) = NameTable::new(input.kinds.iter().map(|k| k.name.clone())) {
        let index = match &e {
            NameTableError::Duplicate { second, .. } => *second,
            NameTableError::Reserved { index, .. } => *index,
        };
        return Err(syn::Error::new(input.kinds[index].ident.span(), e.to_string()));
    }

    Ok(())
}
