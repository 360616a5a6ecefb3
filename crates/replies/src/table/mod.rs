//! Templates and the per-kind template table.

mod english;
pub mod markup;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter as FmtFormatter, Result as FmtResult};
use std::sync::Arc;

use crate::interpreter::{ConfigError, RenderError};
use crate::parser::parse_template;
use crate::types::{Fields, ReplyKind};

/// A function computing a template string from a reply's fields.
pub type TemplateFn = dyn Fn(&Fields) -> Result<String, RenderError> + Send + Sync;

/// A reply template: a fixed string, or a function choosing the wording
/// from the reply's fields.
///
/// Both forms produce a string in the placeholder syntax consumed by
/// [`Formatter`](crate::Formatter).
///
/// # Example
///
/// ```
/// use replies::{Template, fields};
///
/// let template = Template::computed(|fields| {
///     Ok(if fields.flag("enabled")? { "on" } else { "off" }.to_string())
/// });
/// assert_eq!(template.resolve(&fields! { "enabled" => true }).unwrap(), "on");
/// ```
#[derive(Clone)]
pub enum Template {
    Static(String),
    Computed(Arc<TemplateFn>),
}

impl Template {
    pub fn text(text: impl Into<String>) -> Self {
        Template::Static(text.into())
    }

    pub fn computed(
        f: impl Fn(&Fields) -> Result<String, RenderError> + Send + Sync + 'static,
    ) -> Self {
        Template::Computed(Arc::new(f))
    }

    /// Produce the concrete template string for `fields`.
    pub fn resolve(&self, fields: &Fields) -> Result<Cow<'_, str>, RenderError> {
        match self {
            Template::Static(text) => Ok(Cow::Borrowed(text)),
            Template::Computed(f) => f(fields).map(Cow::Owned),
        }
    }

    /// The template text, if it is static.
    pub fn as_static(&self) -> Option<&str> {
        match self {
            Template::Static(text) => Some(text),
            Template::Computed(_) => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Template::Computed(_))
    }
}

impl Debug for Template {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> FmtResult {
        match self {
            Template::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Template::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Template::text(text)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Template::Static(text)
    }
}

/// The default template for every reply kind.
///
/// Built once at startup and read-only afterwards. [`TemplateTable::english`]
/// covers every kind; tables assembled by hand should be checked with
/// [`TemplateTable::validate`] before use.
#[derive(Debug, Clone, Default)]
pub struct TemplateTable {
    templates: BTreeMap<ReplyKind, Template>,
}

impl TemplateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English table.
    pub fn english() -> Self {
        ReplyKind::ALL
            .iter()
            .map(|&kind| (kind, english::template(kind)))
            .collect()
    }

    /// Insert a template, returning the previous one for `kind`.
    pub fn insert(&mut self, kind: ReplyKind, template: impl Into<Template>) -> Option<Template> {
        self.templates.insert(kind, template.into())
    }

    pub fn get(&self, kind: ReplyKind) -> Option<&Template> {
        self.templates.get(&kind)
    }

    /// Look up the template for `kind`.
    pub fn lookup(&self, kind: ReplyKind) -> Result<&Template, RenderError> {
        self.templates
            .get(&kind)
            .ok_or(RenderError::MissingTemplate { kind })
    }

    /// Check that every kind has an entry and every static entry parses.
    ///
    /// ```
    /// use replies::{ConfigError, ReplyKind, TemplateTable};
    ///
    /// assert!(TemplateTable::english().validate().is_ok());
    ///
    /// let mut partial = TemplateTable::new();
    /// partial.insert(ReplyKind::Success, "ok");
    /// assert!(matches!(partial.validate(), Err(ConfigError::MissingTemplates { .. })));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing: Vec<ReplyKind> = ReplyKind::ALL
            .iter()
            .copied()
            .filter(|kind| !self.templates.contains_key(kind))
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingTemplates { kinds: missing });
        }
        for (&kind, template) in &self.templates {
            if let Some(text) = template.as_static() {
                parse_template(text)
                    .map_err(|source| ConfigError::InvalidTemplate { kind, source })?;
            }
        }
        Ok(())
    }

    /// Kinds with an entry, in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = ReplyKind> + '_ {
        self.templates.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<(ReplyKind, Template)> for TemplateTable {
    fn from_iter<I: IntoIterator<Item = (ReplyKind, Template)>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}
