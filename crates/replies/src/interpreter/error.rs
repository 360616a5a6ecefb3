//! Error types for rendering and localization loading.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;
use crate::types::ReplyKind;

/// Errors that make a template table unusable. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reply kinds with no template entry.
    #[error("no template for reply kinds: {}", join_kinds(kinds))]
    MissingTemplates { kinds: Vec<ReplyKind> },

    /// A static template that does not parse.
    #[error("template for {kind} is invalid: {source}")]
    InvalidTemplate {
        kind: ReplyKind,
        #[source]
        source: ParseError,
    },
}

/// An error that occurred while rendering a reply.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Neither the overrides nor the template table have an entry.
    #[error("no template configured for reply kind {kind}")]
    MissingTemplate { kind: ReplyKind },

    /// A template references a field the reply does not carry.
    #[error("field '{name}' missing from reply{}", did_you_mean(suggestions))]
    FieldMissing {
        name: String,
        suggestions: Vec<String>,
    },

    /// A computed template needs a field of a different type.
    #[error("field '{name}' must be a {expected}, got {found}")]
    FieldType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A resolved template has invalid placeholder syntax.
    #[error("invalid template: {0}")]
    Template(#[from] ParseError),
}

/// Errors that occur while loading localization overrides.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading an override file.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Parse error with file location context.
    #[error("{}:{line}:{column}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A key that names no reply kind.
    #[error("{}:{line}:{column}: unknown reply kind '{name}'{}", path.display(), did_you_mean(suggestions))]
    UnknownKind {
        path: PathBuf,
        line: usize,
        column: usize,
        name: String,
        suggestions: Vec<String>,
    },

    /// The same key appears twice in one file.
    #[error("{}:{line}:{column}: duplicate override for '{key}'", path.display())]
    DuplicateKey {
        path: PathBuf,
        line: usize,
        column: usize,
        key: String,
    },

    /// The formatter sentinel names no registered formatter.
    #[error("{}:{line}:{column}: unknown formatter '{name}'{}", path.display(), did_you_mean(suggestions))]
    UnknownFormatter {
        path: PathBuf,
        line: usize,
        column: usize,
        name: String,
        suggestions: Vec<String>,
    },

    /// An override body that cannot be used as a template.
    #[error("{}:{line}:{column}: invalid override for '{key}': {message}", path.display())]
    InvalidTemplate {
        path: PathBuf,
        line: usize,
        column: usize,
        key: String,
        message: String,
    },

    /// Attempted to reload overrides that were not loaded from a file.
    #[error("cannot reload localization: it was not loaded from a file")]
    NoPathForReload,
}

impl LoadError {
    /// 1-based line and column in the override file, when the error has one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            LoadError::Parse { line, column, .. }
            | LoadError::UnknownKind { line, column, .. }
            | LoadError::DuplicateKey { line, column, .. }
            | LoadError::UnknownFormatter { line, column, .. }
            | LoadError::InvalidTemplate { line, column, .. } => Some((*line, *column)),
            LoadError::Io { .. } | LoadError::NoPathForReload => None,
        }
    }
}

/// Non-fatal findings about a localization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The override reads a field the default template never references.
    UnknownField { kind: ReplyKind, field: String },
    /// The override drops a field the default template references.
    DroppedField { kind: ReplyKind, field: String },
}

impl Display for LoadWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LoadWarning::UnknownField { kind, field } => write!(
                f,
                "override for {kind} references field '{field}' that the default template does not use"
            ),
            LoadWarning::DroppedField { kind, field } => write!(
                f,
                "override for {kind} does not reference field '{field}' used by the default template"
            ),
        }
    }
}

/// Compute "did you mean" suggestions for a misspelled name.
///
/// Returns up to three candidates ordered by edit distance. Names of three
/// characters or fewer allow a distance of 1, longer names a distance of 2.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

fn join_kinds(kinds: &[ReplyKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(", ")
}
