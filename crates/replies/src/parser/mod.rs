//! Template and override file parser.
//!
//! This module provides parsing for reply template strings and localization
//! override files. The parser produces an AST that can be used for
//! formatting, load-time validation, or external tooling.

pub mod ast;
pub mod error;
mod file;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use file::parse_file;
pub use template::parse_template;
