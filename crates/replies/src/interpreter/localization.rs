//! Localization overrides and the store the renderer reads them from.
//!
//! A [`Localization`] is an immutable set of per-kind template overrides plus
//! an optional formatter override. The [`LocalizationStore`] holds the active
//! one behind an `Arc` so a hot reload swaps the whole mapping at once: every
//! render sees either the old overrides or the new ones, never a mix.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::mem;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use bon::Builder;
use replies_semantics::FORMATTER_KEY;

use crate::interpreter::error::{LoadError, compute_suggestions};
use crate::interpreter::formatter::Formatter;
use crate::interpreter::plural::plural_category;
use crate::interpreter::registry::FormatterRegistry;
use crate::parser::{MatchArm, OverrideBody, OverrideEntry, ParseError, parse_file, parse_template};
use crate::table::Template;
use crate::types::{ReplyKind, Value};

/// Key into a [`Localization`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideKey {
    /// Overrides the template for one reply kind.
    Kind(ReplyKind),
    /// Overrides the formatter used for every render.
    Formatter,
}

impl OverrideKey {
    /// Resolve an override file key: a reply kind name or `_FORMATTER_`.
    pub fn from_name(name: &str) -> Option<Self> {
        if name == FORMATTER_KEY {
            Some(OverrideKey::Formatter)
        } else {
            ReplyKind::from_name(name).map(OverrideKey::Kind)
        }
    }
}

impl From<ReplyKind> for OverrideKey {
    fn from(kind: ReplyKind) -> Self {
        OverrideKey::Kind(kind)
    }
}

/// The value stored under an [`OverrideKey`].
#[derive(Debug, Clone, Copy)]
pub enum Override<'a> {
    Template(&'a Template),
    Formatter(&'a Arc<dyn Formatter>),
}

/// A set of localization overrides.
///
/// Absence of a key means "use the default"; it is never an error.
///
/// # Example
///
/// ```
/// use replies::{FormatterRegistry, Localization, OverrideKey, ReplyKind};
///
/// let localization = Localization::parse(
///     "es",
///     r#"CHAT_JOIN = "¡Te uniste al chat!";"#,
///     &FormatterRegistry::new(),
/// ).unwrap();
///
/// assert_eq!(localization.language(), "es");
/// assert!(localization.get(OverrideKey::Kind(ReplyKind::ChatJoin)).is_some());
/// assert!(localization.get(OverrideKey::Kind(ReplyKind::ChatLeave)).is_none());
/// assert!(localization.get(OverrideKey::Formatter).is_none());
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Localization {
    /// Language code used for plural categories in `:match` overrides.
    #[builder(default = "en".to_string())]
    language: String,

    /// Per-kind template overrides.
    #[builder(default)]
    templates: BTreeMap<ReplyKind, Template>,

    /// Formatter used instead of the renderer's default.
    formatter: Option<Arc<dyn Formatter>>,

    /// File the overrides were loaded from, for [`LocalizationStore::reload`].
    #[builder(skip)]
    path: Option<PathBuf>,
}

impl Default for Localization {
    fn default() -> Self {
        Localization::builder().build()
    }
}

impl Localization {
    /// A localization with no overrides.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The file this localization was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Look up an override.
    pub fn get(&self, key: OverrideKey) -> Option<Override<'_>> {
        match key {
            OverrideKey::Kind(kind) => self.templates.get(&kind).map(Override::Template),
            OverrideKey::Formatter => self.formatter.as_ref().map(Override::Formatter),
        }
    }

    /// The template override for `kind`, if any.
    pub fn template(&self, kind: ReplyKind) -> Option<&Template> {
        self.templates.get(&kind)
    }

    /// The formatter override, if any.
    pub fn formatter(&self) -> Option<&Arc<dyn Formatter>> {
        self.formatter.as_ref()
    }

    /// Builder-style insertion of a template override.
    pub fn with_template(mut self, kind: ReplyKind, template: impl Into<Template>) -> Self {
        self.templates.insert(kind, template.into());
        self
    }

    /// Builder-style formatter override.
    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Overridden kinds, in declaration order.
    pub fn overridden_kinds(&self) -> impl Iterator<Item = ReplyKind> + '_ {
        self.templates.keys().copied()
    }

    /// Number of overridden kinds, not counting the formatter.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty() && self.formatter.is_none()
    }

    /// Load overrides from a file.
    ///
    /// ```ignore
    /// let es = Localization::load("es", "config/es.replies", &FormatterRegistry::new())?;
    /// ```
    pub fn load(
        language: &str,
        path: impl AsRef<Path>,
        formatters: &FormatterRegistry,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut localization = Self::parse_internal(language, &content, path, formatters)?;
        localization.path = Some(path.to_path_buf());
        Ok(localization)
    }

    /// Load overrides from a string.
    ///
    /// Localizations loaded this way cannot be reloaded.
    pub fn parse(
        language: &str,
        content: &str,
        formatters: &FormatterRegistry,
    ) -> Result<Self, LoadError> {
        let display_path = PathBuf::from(format!("<{language}>"));
        Self::parse_internal(language, content, &display_path, formatters)
    }

    fn parse_internal(
        language: &str,
        content: &str,
        path: &Path,
        formatters: &FormatterRegistry,
    ) -> Result<Self, LoadError> {
        let entries = parse_file(content).map_err(|e| parse_error(path, &e))?;

        let mut templates = BTreeMap::new();
        let mut formatter = None;

        for entry in entries {
            match OverrideKey::from_name(&entry.key) {
                Some(OverrideKey::Kind(kind)) => {
                    let template = build_template(&entry, language, path)?;
                    match templates.entry(kind) {
                        Entry::Occupied(_) => return Err(duplicate_key(&entry, path)),
                        Entry::Vacant(slot) => {
                            slot.insert(template);
                        }
                    }
                }
                Some(OverrideKey::Formatter) => {
                    if formatter.is_some() {
                        return Err(duplicate_key(&entry, path));
                    }
                    formatter = Some(resolve_formatter(&entry, formatters, path)?);
                }
                None => {
                    let mut known: Vec<String> =
                        ReplyKind::NAMES.iter().map(ToString::to_string).collect();
                    known.push(FORMATTER_KEY.to_string());
                    return Err(LoadError::UnknownKind {
                        path: path.to_path_buf(),
                        line: entry.line,
                        column: entry.column,
                        suggestions: compute_suggestions(&entry.key, &known),
                        name: entry.key,
                    });
                }
            }
        }

        tracing::debug!(
            language,
            path = %path.display(),
            overrides = templates.len(),
            formatter = formatter.is_some(),
            "parsed localization"
        );

        Ok(Self {
            language: language.to_string(),
            templates,
            formatter,
            path: None,
        })
    }
}

fn parse_error(path: &Path, error: &ParseError) -> LoadError {
    let (line, column) = error.position();
    let message = match error {
        ParseError::Syntax { message, .. } => message.clone(),
        ParseError::UnexpectedEof { .. } => "unexpected end of file".to_string(),
    };
    LoadError::Parse {
        path: path.to_path_buf(),
        line,
        column,
        message,
    }
}

fn duplicate_key(entry: &OverrideEntry, path: &Path) -> LoadError {
    LoadError::DuplicateKey {
        path: path.to_path_buf(),
        line: entry.line,
        column: entry.column,
        key: entry.key.clone(),
    }
}

fn invalid_template(entry: &OverrideEntry, path: &Path, message: impl Into<String>) -> LoadError {
    LoadError::InvalidTemplate {
        path: path.to_path_buf(),
        line: entry.line,
        column: entry.column,
        key: entry.key.clone(),
        message: message.into(),
    }
}

fn check_syntax(entry: &OverrideEntry, path: &Path, text: &str) -> Result<(), LoadError> {
    parse_template(text)
        .map(drop)
        .map_err(|e| invalid_template(entry, path, e.to_string()))
}

fn resolve_formatter(
    entry: &OverrideEntry,
    formatters: &FormatterRegistry,
    path: &Path,
) -> Result<Arc<dyn Formatter>, LoadError> {
    let OverrideBody::Text(name) = &entry.body else {
        return Err(invalid_template(
            entry,
            path,
            "the formatter override must be a formatter name",
        ));
    };
    formatters.get(name).ok_or_else(|| {
        let known: Vec<String> = formatters.names().map(str::to_string).collect();
        LoadError::UnknownFormatter {
            path: path.to_path_buf(),
            line: entry.line,
            column: entry.column,
            name: name.clone(),
            suggestions: compute_suggestions(name, &known),
        }
    })
}

fn build_template(
    entry: &OverrideEntry,
    language: &str,
    path: &Path,
) -> Result<Template, LoadError> {
    match &entry.body {
        OverrideBody::Text(text) => {
            check_syntax(entry, path, text)?;
            Ok(Template::text(text.clone()))
        }
        OverrideBody::Match { field, arms } => {
            let selector = MatchSelector::new(entry, field, arms, language, path)?;
            Ok(Template::computed(move |fields| {
                let value = fields.require(&selector.field)?;
                Ok(selector.select(value).to_string())
            }))
        }
    }
}

/// A compiled `:match` block.
#[derive(Debug)]
struct MatchSelector {
    field: String,
    language: String,
    arms: Vec<(Vec<String>, String)>,
    default: String,
}

impl MatchSelector {
    fn new(
        entry: &OverrideEntry,
        field: &str,
        arms: &[MatchArm],
        language: &str,
        path: &Path,
    ) -> Result<Self, LoadError> {
        let mut default = None;
        let mut keyed = Vec::with_capacity(arms.len());
        for arm in arms {
            check_syntax(entry, path, &arm.template)?;
            if arm.is_default {
                if default.is_some() {
                    return Err(invalid_template(
                        entry,
                        path,
                        "a :match block has exactly one '*' default arm",
                    ));
                }
                default = Some(arm.template.clone());
            }
            keyed.push((arm.keys.clone(), arm.template.clone()));
        }
        let Some(default) = default else {
            return Err(invalid_template(
                entry,
                path,
                format!("missing '*' default arm in :match({field})"),
            ));
        };
        Ok(Self {
            field: field.to_string(),
            language: language.to_string(),
            arms: keyed,
            default,
        })
    }

    /// Choose the arm for `value`.
    ///
    /// Exact keys win over plural categories, so `1: ..` beats `one: ..` for a
    /// count of one. Values with no matching arm use the default.
    fn select(&self, value: &Value) -> &str {
        let exact = self
            .arms
            .iter()
            .find(|(keys, _)| keys.iter().any(|key| matches_exactly(key, value)));
        if let Some((_, template)) = exact {
            return template;
        }
        if let Value::Number(n) = value {
            let category = plural_category(&self.language, *n);
            let plural = self
                .arms
                .iter()
                .find(|(keys, _)| keys.iter().any(|key| key == category));
            if let Some((_, template)) = plural {
                return template;
            }
        }
        &self.default
    }
}

fn matches_exactly(key: &str, value: &Value) -> bool {
    match value {
        Value::Null => key == "none" || key == "null",
        Value::Bool(b) => key.parse::<bool>().is_ok_and(|k| k == *b),
        Value::Number(n) => key.parse::<i64>().is_ok_and(|k| k == *n),
        Value::Float(f) => key.parse::<f64>().is_ok_and(|k| k == *f),
        Value::String(s) => key == s,
        Value::Timestamp(_) | Value::Duration(_) => false,
    }
}

/// Holds the active [`Localization`] and swaps it atomically.
///
/// Readers take a cheap [`snapshot`](Self::snapshot) per render. Writers
/// build a complete replacement first, so a failed load leaves the active
/// overrides untouched.
///
/// # Example
///
/// ```
/// use replies::{FormatterRegistry, LocalizationStore, ReplyKind};
///
/// let store = LocalizationStore::new();
/// assert!(store.snapshot().is_empty());
///
/// store.load_str("es", r#"SUCCESS = "hecho";"#).unwrap();
/// assert!(store.snapshot().template(ReplyKind::Success).is_some());
///
/// store.clear();
/// assert!(store.snapshot().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct LocalizationStore {
    current: RwLock<Arc<Localization>>,
    formatters: RwLock<FormatterRegistry>,
}

impl LocalizationStore {
    /// Create an empty store resolving `_FORMATTER_` against the built-in
    /// formatters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a custom formatter registry.
    pub fn with_formatters(formatters: FormatterRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(Localization::empty())),
            formatters: RwLock::new(formatters),
        }
    }

    /// A copy of the registry `_FORMATTER_` entries are resolved against.
    pub fn formatters(&self) -> FormatterRegistry {
        self.formatters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register a formatter for overrides loaded from now on, returning the
    /// one previously under `name`.
    pub fn register_formatter(
        &self,
        name: impl Into<String>,
        formatter: Arc<dyn Formatter>,
    ) -> Option<Arc<dyn Formatter>> {
        let mut formatters = self.formatters.write().unwrap_or_else(PoisonError::into_inner);
        formatters.register(name, formatter)
    }

    /// The active localization.
    pub fn snapshot(&self) -> Arc<Localization> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in a new localization, returning the previous one.
    pub fn replace(&self, localization: Localization) -> Arc<Localization> {
        let next = Arc::new(localization);
        tracing::debug!(
            language = next.language(),
            overrides = next.len(),
            "replacing localization"
        );
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        mem::replace(&mut *guard, next)
    }

    /// Drop every override.
    pub fn clear(&self) {
        self.replace(Localization::empty());
    }

    /// Load overrides from a file and make them active.
    ///
    /// Returns the number of overridden kinds.
    pub fn load_file(&self, language: &str, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let localization = Localization::load(language, path, &self.formatters())?;
        let count = localization.len();
        self.replace(localization);
        Ok(count)
    }

    /// Load overrides from a string and make them active.
    pub fn load_str(&self, language: &str, content: &str) -> Result<usize, LoadError> {
        let localization = Localization::parse(language, content, &self.formatters())?;
        let count = localization.len();
        self.replace(localization);
        Ok(count)
    }

    /// Re-read the file the active localization was loaded from.
    ///
    /// On failure the active overrides stay in place.
    pub fn reload(&self) -> Result<usize, LoadError> {
        let current = self.snapshot();
        let path = current.path().ok_or(LoadError::NoPathForReload)?;
        self.load_file(current.language(), path)
    }
}
