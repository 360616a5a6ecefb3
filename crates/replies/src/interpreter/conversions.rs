//! Field conversions applied by `{name!c}` placeholders.
//!
//! - `x` escapes HTML-significant characters
//! - `t` renders a timestamp as an absolute date and time
//! - `d` renders a duration as its largest whole unit
//!
//! Any other code falls back to the value's default string form.

use chrono::{DateTime, FixedOffset, Offset, TimeDelta, Utc};
use replies_semantics::{ConversionId, resolve_conversion};

use crate::types::Value;

/// Default timestamp layout for UTC, in `chrono` strftime syntax.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Default timestamp layout for any other offset. The offset is printed so
/// the shifted wall-clock time stays unambiguous.
pub const OFFSET_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M %:z";

/// Units used for duration rendering, largest first.
const DURATION_UNITS: &[(i64, &str, &str)] = &[
    (7 * 24 * 60 * 60, "week", "weeks"),
    (24 * 60 * 60, "day", "days"),
    (60 * 60, "hour", "hours"),
    (60, "minute", "minutes"),
    (1, "second", "seconds"),
];

/// The default timestamp layout for timestamps shown at `offset`.
///
/// ```
/// use chrono::FixedOffset;
/// use replies::interpreter::default_timestamp_format;
///
/// assert_eq!(default_timestamp_format(&FixedOffset::east_opt(0).unwrap()), "%Y-%m-%d %H:%M UTC");
/// assert_eq!(default_timestamp_format(&FixedOffset::east_opt(3600).unwrap()), "%Y-%m-%d %H:%M %:z");
/// ```
pub fn default_timestamp_format(offset: &FixedOffset) -> &'static str {
    if offset.local_minus_utc() == 0 {
        DEFAULT_TIMESTAMP_FORMAT
    } else {
        OFFSET_TIMESTAMP_FORMAT
    }
}

/// Convert a value with the given conversion code using the default
/// timestamp settings.
///
/// # Example
///
/// ```
/// use chrono::TimeDelta;
/// use replies::{Value, interpreter::convert};
///
/// assert_eq!(convert(&Value::from("<b>"), Some('x')), "&lt;b&gt;");
/// assert_eq!(convert(&Value::from(TimeDelta::hours(1)), Some('d')), "1 hour");
/// assert_eq!(convert(&Value::from(TimeDelta::hours(1)), None), "1 hour");
/// assert_eq!(convert(&Value::from(5), Some('z')), "5");
/// ```
pub fn convert(value: &Value, code: Option<char>) -> String {
    convert_with(value, code, &Utc.fix(), DEFAULT_TIMESTAMP_FORMAT)
}

/// Convert a value, rendering timestamps at `offset` with `timestamp_format`.
///
/// Timestamps and durations render the same way with no code as with `t`
/// and `d`; every other value falls back to its `Display` form.
pub fn convert_with(
    value: &Value,
    code: Option<char>,
    offset: &FixedOffset,
    timestamp_format: &str,
) -> String {
    let conversion = code.and_then(|code| {
        let conversion = resolve_conversion(code);
        if conversion.is_none() {
            tracing::trace!(code = %code, "unknown conversion code, using default string form");
        }
        conversion
    });
    match (conversion, value) {
        (Some(ConversionId::Escape), value) => {
            escape_html(&default_form(value, offset, timestamp_format))
        }
        (Some(ConversionId::DateTime), Value::Timestamp(t)) => {
            format_timestamp(t, offset, timestamp_format)
        }
        (Some(ConversionId::Duration), Value::Duration(d)) => format_duration(*d),
        (_, value) => default_form(value, offset, timestamp_format),
    }
}

fn default_form(value: &Value, offset: &FixedOffset, timestamp_format: &str) -> String {
    match value {
        Value::Timestamp(t) => format_timestamp(t, offset, timestamp_format),
        Value::Duration(d) => format_duration(*d),
        other => other.to_string(),
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for embedding in HTML-formatted messages.
///
/// ```
/// use replies::interpreter::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Render a timestamp in the given offset and strftime layout.
pub fn format_timestamp(t: &DateTime<Utc>, offset: &FixedOffset, layout: &str) -> String {
    t.with_timezone(offset).format(layout).to_string()
}

/// Render a duration as its largest whole unit: `"1 hour"`, `"3 days"`.
///
/// Negative durations render as `"0 seconds"`.
///
/// ```
/// use chrono::TimeDelta;
/// use replies::interpreter::format_duration;
///
/// assert_eq!(format_duration(TimeDelta::seconds(3600)), "1 hour");
/// assert_eq!(format_duration(TimeDelta::minutes(90)), "1 hour");
/// assert_eq!(format_duration(TimeDelta::days(14)), "2 weeks");
/// assert_eq!(format_duration(TimeDelta::seconds(45)), "45 seconds");
/// ```
pub fn format_duration(duration: TimeDelta) -> String {
    let seconds = duration.num_seconds().max(0);
    for &(unit, one, other) in DURATION_UNITS {
        if seconds >= unit {
            let count = seconds.div_euclid(unit);
            let word = if count == 1 { one } else { other };
            return format!("{count} {word}");
        }
    }
    "0 seconds".to_string()
}
