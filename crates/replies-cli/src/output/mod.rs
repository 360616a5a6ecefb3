//! Terminal output helpers: miette diagnostics and coverage tables.

pub mod diagnostic;
pub mod table;

pub use diagnostic::OverrideDiagnostic;
