//! Reply rendering: conversions, formatters, localization and the renderer.
//!
//! The renderer resolves a reply's template (localization override first,
//! then the template table), evaluates computed templates against the reply's
//! fields and hands the result to a [`Formatter`] that substitutes
//! placeholders through the conversion engine.

mod conversions;
mod error;
mod formatter;
mod lint;
mod localization;
mod plural;
mod registry;
mod renderer;

pub use conversions::{
    DEFAULT_TIMESTAMP_FORMAT, OFFSET_TIMESTAMP_FORMAT, convert, convert_with,
    default_timestamp_format, escape_html, format_duration, format_timestamp,
};
pub use error::{ConfigError, LoadError, LoadWarning, RenderError, compute_suggestions};
pub use formatter::{ChatFormatter, Formatter, PlainFormatter, substitute};
pub use lint::{lint_entries, lint_localization};
pub use localization::{Localization, LocalizationStore, Override, OverrideKey};
pub use plural::plural_category;
pub use registry::FormatterRegistry;
pub use renderer::Renderer;
