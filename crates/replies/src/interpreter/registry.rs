//! Formatter registry for resolving the `_FORMATTER_` override by name.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter as FmtFormatter, Result as FmtResult};
use std::sync::Arc;

use crate::interpreter::formatter::{ChatFormatter, Formatter, PlainFormatter};

/// A registry of named formatter implementations.
///
/// Override files select a formatter with `_FORMATTER_ = "name";`. The
/// registry starts with the built-in `chat` and `plain` formatters; custom
/// implementations are registered under new names.
#[derive(Clone)]
pub struct FormatterRegistry {
    formatters: BTreeMap<String, Arc<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Create a registry holding the built-in formatters.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("chat", Arc::new(ChatFormatter::default()));
        registry.register("plain", Arc::new(PlainFormatter));
        registry
    }

    /// Create a registry with no formatters.
    pub fn empty() -> Self {
        Self {
            formatters: BTreeMap::new(),
        }
    }

    /// Register a formatter, returning the one previously under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        formatter: Arc<dyn Formatter>,
    ) -> Option<Arc<dyn Formatter>> {
        self.formatters.insert(name.into(), formatter)
    }

    /// Get a formatter by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Formatter>> {
        self.formatters.get(name).cloned()
    }

    /// Check if a formatter is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formatters.keys().map(String::as_str)
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for FormatterRegistry {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> FmtResult {
        f.debug_set().entries(self.names()).finish()
    }
}
