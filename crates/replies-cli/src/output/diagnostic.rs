//! Miette diagnostic wrapper for override file errors.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use replies::LoadError;
use replies::parser::ParseError;
use thiserror::Error;

/// A miette-compatible diagnostic pointing into an override file.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(replies::overrides))]
pub struct OverrideDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl OverrideDiagnostic {
    /// Create a diagnostic from a syntax error.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let message = match err {
            ParseError::Syntax { message, .. } => format!("syntax error: {message}"),
            ParseError::UnexpectedEof { .. } => "unexpected end of file".into(),
        };
        Self::at(path, content, line, column, message, None)
    }

    /// Create a diagnostic from a load error that carries a position.
    ///
    /// Returns `None` for errors with no location in the file.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Option<Self> {
        let (line, column) = err.position()?;
        let help = match err {
            LoadError::UnknownKind { suggestions, .. }
            | LoadError::UnknownFormatter { suggestions, .. }
                if !suggestions.is_empty() =>
            {
                Some(format!("did you mean: {}?", suggestions.join(", ")))
            }
            LoadError::DuplicateKey { .. } => {
                Some("each reply kind may be overridden once per file".into())
            }
            _ => None,
        };
        Some(Self::at(path, content, line, column, short_message(err), help))
    }

    fn at(
        path: &Path,
        content: &str,
        line: usize,
        column: usize,
        message: String,
        help: Option<String>,
    ) -> Self {
        OverrideDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (byte_offset(content, line, column), 1).into(),
            message,
            help,
        }
    }
}

/// The error text without the `path:line:column:` prefix, which the
/// rendered source snippet already shows.
fn short_message(err: &LoadError) -> String {
    match err {
        LoadError::Parse { message, .. } => message.clone(),
        LoadError::UnknownKind { name, .. } => format!("unknown reply kind '{name}'"),
        LoadError::DuplicateKey { key, .. } => format!("duplicate override for '{key}'"),
        LoadError::UnknownFormatter { name, .. } => format!("unknown formatter '{name}'"),
        LoadError::InvalidTemplate { key, message, .. } => {
            format!("invalid override for '{key}': {message}")
        }
        LoadError::Io { .. } | LoadError::NoPathForReload => err.to_string(),
    }
}

/// Convert a 1-based line and character column to a byte offset, clamped to
/// the content length so miette never sees an out-of-bounds span.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let rest = content.get(line_start..).unwrap_or_default();
    let within = rest
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(rest.len(), |(offset, _)| offset);
    (line_start + within).min(content.len())
}
