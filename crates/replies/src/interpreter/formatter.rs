//! Template formatters: placeholder substitution over reply fields.

use std::fmt::Debug;

use bon::Builder;
use chrono::{FixedOffset, Offset, Utc};
use replies_semantics::{ConversionId, resolve_conversion};

use crate::interpreter::conversions::{
    DEFAULT_TIMESTAMP_FORMAT, convert_with, default_timestamp_format,
};
use crate::interpreter::error::RenderError;
use crate::parser::{ParsedTemplate, Segment, parse_template};
use crate::types::{Fields, Value};

/// Turns a template string and a reply's fields into the final text.
///
/// Implementations may override either step: [`Formatter::format`] for a
/// different placeholder language, or [`Formatter::convert_field`] to change
/// how individual values are rendered. A formatter registered under the
/// `_FORMATTER_` override replaces the default for every render.
pub trait Formatter: Debug + Send + Sync {
    /// Parse `template` and substitute every placeholder from `fields`.
    fn format(&self, template: &str, fields: &Fields) -> Result<String, RenderError> {
        let parsed = parse_template(template)?;
        substitute(self, &parsed, fields)
    }

    /// Render one field value with an optional conversion code.
    fn convert_field(&self, value: &Value, code: Option<char>) -> String {
        convert_with(value, code, &Utc.fix(), DEFAULT_TIMESTAMP_FORMAT)
    }

    /// The [`FormatterRegistry`](crate::FormatterRegistry) name this
    /// formatter is a configured instance of.
    ///
    /// A renderer publishes its default formatter under this name, so an
    /// override selecting it by name keeps the deployment's configuration.
    fn registered_name(&self) -> Option<&str> {
        None
    }
}

/// Substitute a parsed template's placeholders using `formatter` for each
/// field conversion.
///
/// Fails on the first placeholder whose field is absent; no partial output
/// is returned.
pub fn substitute<F: Formatter + ?Sized>(
    formatter: &F,
    template: &ParsedTemplate,
    fields: &Fields,
) -> Result<String, RenderError> {
    let mut out = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Field(field) => {
                let value = fields.require(&field.name)?;
                out.push_str(&formatter.convert_field(value, field.conversion));
            }
        }
    }
    Ok(out)
}

/// The default formatter for HTML-formatted chat messages.
///
/// `x` escapes HTML, `t` renders timestamps at `offset` using
/// `timestamp_format`, `d` renders durations in their largest whole unit.
/// Without an explicit `timestamp_format`, UTC timestamps are labelled `UTC`
/// and any other offset is printed as `+hh:mm`.
///
/// # Example
///
/// ```
/// use chrono::FixedOffset;
/// use replies::{ChatFormatter, Formatter, fields};
///
/// let formatter = ChatFormatter::builder()
///     .offset(FixedOffset::east_opt(3600).unwrap())
///     .timestamp_format("%H:%M")
///     .build();
/// let text = formatter.format("<b>{name!x}</b>", &fields! { "name" => "a<b" }).unwrap();
/// assert_eq!(text, "<b>a&lt;b</b>");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ChatFormatter {
    /// Offset applied to timestamps before formatting.
    #[builder(default = Utc.fix())]
    offset: FixedOffset,

    /// strftime layout for timestamps; defaults to one matching `offset`.
    #[builder(into)]
    timestamp_format: Option<String>,
}

impl Default for ChatFormatter {
    fn default() -> Self {
        ChatFormatter::builder().build()
    }
}

impl ChatFormatter {
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The layout timestamps are rendered with.
    pub fn timestamp_format(&self) -> &str {
        self.timestamp_format
            .as_deref()
            .unwrap_or_else(|| default_timestamp_format(&self.offset))
    }
}

impl Formatter for ChatFormatter {
    fn convert_field(&self, value: &Value, code: Option<char>) -> String {
        convert_with(value, code, &self.offset, self.timestamp_format())
    }

    fn registered_name(&self) -> Option<&str> {
        Some("chat")
    }
}

/// A formatter for plain-text destinations: `x` leaves text unescaped, all
/// other conversions behave like [`ChatFormatter`]'s defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn convert_field(&self, value: &Value, code: Option<char>) -> String {
        let code = code.filter(|&c| resolve_conversion(c) != Some(ConversionId::Escape));
        convert_with(value, code, &Utc.fix(), DEFAULT_TIMESTAMP_FORMAT)
    }

    fn registered_name(&self) -> Option<&str> {
        Some("plain")
    }
}
