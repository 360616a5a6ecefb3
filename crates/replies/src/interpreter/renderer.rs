//! The reply renderer.

use std::sync::Arc;

use bon::bon;

use crate::interpreter::error::{ConfigError, RenderError};
use crate::interpreter::formatter::{ChatFormatter, Formatter};
use crate::interpreter::localization::{Localization, LocalizationStore};
use crate::table::TemplateTable;
use crate::types::Reply;

/// Renders replies into chat text.
///
/// For each reply the renderer takes the localization override for the
/// reply's kind, or the default from the template table. Computed templates
/// are evaluated with the reply's fields, and the result is passed to the
/// override formatter or the default one.
///
/// # Example
///
/// ```
/// use chrono::TimeDelta;
/// use replies::{Renderer, Reply, ReplyKind, fields};
///
/// let renderer = Renderer::builder().build().unwrap();
/// let text = renderer.render(&Reply::new(
///     ReplyKind::GivenCooldown,
///     fields! { "duration" => TimeDelta::hours(1), "deleted" => true },
/// )).unwrap();
/// assert_eq!(
///     text,
///     "<em>You've been handed a cooldown of 1 hour for this message (message also deleted)</em>"
/// );
/// ```
#[derive(Debug)]
pub struct Renderer {
    table: TemplateTable,
    localization: Arc<LocalizationStore>,
    formatter: Arc<dyn Formatter>,
}

#[bon]
impl Renderer {
    /// Build a renderer, validating the template table.
    ///
    /// A default formatter with a [registered name](Formatter::registered_name)
    /// replaces that name in the store's registry, so `_FORMATTER_ = "chat";`
    /// in an override file keeps the configured offset and layout. This
    /// applies to overrides loaded after the renderer is built.
    ///
    /// Fails with [`ConfigError`] if any reply kind lacks a template or a
    /// static template has invalid syntax.
    #[builder]
    pub fn new(
        #[builder(default = TemplateTable::english())] table: TemplateTable,
        #[builder(default)] localization: Arc<LocalizationStore>,
        #[builder(default = default_formatter())] formatter: Arc<dyn Formatter>,
    ) -> Result<Self, ConfigError> {
        table.validate()?;
        if let Some(name) = formatter.registered_name() {
            tracing::debug!(name, "publishing default formatter to the localization store");
            localization.register_formatter(name, Arc::clone(&formatter));
        }
        Ok(Self {
            table,
            localization,
            formatter,
        })
    }
}

impl Renderer {
    /// Render a reply.
    ///
    /// Either the whole message is produced or an error is returned.
    pub fn render(&self, reply: &Reply) -> Result<String, RenderError> {
        let localization = self.localization.snapshot();
        self.render_with(&localization, reply)
    }

    /// Render a reply against a specific localization instead of the store's
    /// active one.
    pub fn render_with(
        &self,
        localization: &Localization,
        reply: &Reply,
    ) -> Result<String, RenderError> {
        let kind = reply.kind();
        let template = match localization.template(kind) {
            Some(template) => {
                tracing::debug!(%kind, language = localization.language(), "using override template");
                template
            }
            None => self.table.lookup(kind)?,
        };
        let text = template.resolve(reply.fields())?;

        let formatter = match localization.formatter() {
            Some(formatter) => {
                tracing::debug!(%kind, ?formatter, "using override formatter");
                formatter
            }
            None => &self.formatter,
        };
        formatter.format(&text, reply.fields())
    }

    pub fn table(&self) -> &TemplateTable {
        &self.table
    }

    /// The store this renderer reads overrides from.
    pub fn localization(&self) -> &Arc<LocalizationStore> {
        &self.localization
    }

    /// The formatter used when no override is set.
    pub fn formatter(&self) -> &Arc<dyn Formatter> {
        &self.formatter
    }
}

fn default_formatter() -> Arc<dyn Formatter> {
    Arc::new(ChatFormatter::default())
}
