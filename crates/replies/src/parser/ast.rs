//! Public AST types for reply templates and override files.
//!
//! These types are public to enable external tooling (checkers, coverage
//! reports).

use std::collections::BTreeSet;

/// A parsed template string containing segments.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTemplate {
    pub segments: Vec<Segment>,
}

impl ParsedTemplate {
    /// Names of every field the template references, deduplicated.
    pub fn field_names(&self) -> BTreeSet<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Field(field) => Some(field.name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, with `{{` / `}}` already unescaped.
    Literal(String),
    /// A placeholder: `{name}` or `{name!c}`.
    Field(Field),
}

/// A placeholder referencing a reply field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    /// Conversion code after `!`, if any.
    pub conversion: Option<char>,
}

/// One `KEY = body;` entry in an override file.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideEntry {
    /// Reply kind name or the formatter sentinel.
    pub key: String,
    /// 1-based line of the key.
    pub line: usize,
    /// 1-based column of the key.
    pub column: usize,
    pub body: OverrideBody,
}

/// The right-hand side of an override entry.
#[derive(Debug, Clone, PartialEq)]
pub enum OverrideBody {
    /// A plain string.
    Text(String),
    /// `:match(field) { key: "...", *other: "..." }`
    Match { field: String, arms: Vec<MatchArm> },
}

/// One arm of a `:match` block.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchArm {
    /// Keys sharing this template (`a, b: "..."`).
    pub keys: Vec<String>,
    pub template: String,
    /// Marked with `*`: used when no other arm matches.
    pub is_default: bool,
}
