//! Integration tests for field conversions

use chrono::{FixedOffset, TimeDelta, TimeZone, Utc};
use replies::Value;
use replies::interpreter::{
    DEFAULT_TIMESTAMP_FORMAT, convert, convert_with, default_timestamp_format, escape_html,
    format_duration,
};

#[test]
fn escape_conversion_escapes_markup() {
    assert_eq!(convert(&Value::from("<b>"), Some('x')), "&lt;b&gt;");
}

#[test]
fn escape_conversion_escapes_quotes_and_ampersands() {
    assert_eq!(escape_html(r#"a & "b" 'c'"#), "a &amp; &quot;b&quot; &#x27;c&#x27;");
}

#[test]
fn escape_conversion_applies_to_non_strings() {
    assert_eq!(convert(&Value::from(42), Some('x')), "42");
}

#[test]
fn duration_of_one_hour() {
    assert_eq!(convert(&Value::from(TimeDelta::seconds(3600)), Some('d')), "1 hour");
}

#[test]
fn duration_uses_largest_whole_unit() {
    assert_eq!(format_duration(TimeDelta::seconds(59)), "59 seconds");
    assert_eq!(format_duration(TimeDelta::seconds(60)), "1 minute");
    assert_eq!(format_duration(TimeDelta::hours(47)), "1 day");
    assert_eq!(format_duration(TimeDelta::days(6)), "6 days");
    assert_eq!(format_duration(TimeDelta::weeks(3)), "3 weeks");
}

#[test]
fn zero_and_negative_durations() {
    assert_eq!(format_duration(TimeDelta::zero()), "0 seconds");
    assert_eq!(format_duration(TimeDelta::seconds(-5)), "0 seconds");
}

#[test]
fn timestamp_uses_fixed_format() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    assert_eq!(convert(&Value::from(at), Some('t')), "2024-03-01 12:30 UTC");
}

#[test]
fn timestamp_with_custom_offset_and_layout() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
    let offset = FixedOffset::east_opt(3600).unwrap();
    assert_eq!(
        convert_with(&Value::from(at), Some('t'), &offset, "%d.%m.%Y %H:%M"),
        "02.03.2024 00:30"
    );
}

#[test]
fn unknown_code_falls_back_to_default_form() {
    assert_eq!(convert(&Value::from(5), Some('z')), "5");
}

#[test]
fn no_code_uses_default_form() {
    assert_eq!(convert(&Value::from("plain <b>"), None), "plain <b>");
    assert_eq!(convert(&Value::from(true), None), "true");
    assert_eq!(convert(&Value::Null, None), "");
}

#[test]
fn mismatched_type_falls_back_to_default_form() {
    assert_eq!(convert(&Value::from("soon"), Some('t')), "soon");
    assert_eq!(convert(&Value::from(3), Some('d')), "3");
}

#[test]
fn no_code_renders_durations_and_timestamps_readably() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    assert_eq!(convert(&Value::from(TimeDelta::hours(1)), None), "1 hour");
    assert_eq!(convert(&Value::from(at), None), "2024-03-01 12:30 UTC");
}

#[test]
fn escape_of_timestamp_uses_readable_form() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    assert_eq!(convert(&Value::from(at), Some('x')), "2024-03-01 12:30 UTC");
}

#[test]
fn default_layout_labels_offset() {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    let utc = FixedOffset::east_opt(0).unwrap();
    let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
    assert_eq!(default_timestamp_format(&utc), DEFAULT_TIMESTAMP_FORMAT);
    assert_eq!(
        convert_with(&Value::from(at), Some('t'), &moscow, default_timestamp_format(&moscow)),
        "2024-03-01 15:30 +03:00"
    );
}
