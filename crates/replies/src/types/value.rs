use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Offset, TimeDelta, Utc};

use crate::interpreter::{DEFAULT_TIMESTAMP_FORMAT, format_duration, format_timestamp};

/// A runtime value carried in a reply's field mapping.
///
/// The `Value` enum provides a dynamic type system for reply fields, allowing
/// numbers, strings, flags, timestamps and durations to be passed
/// interchangeably.
///
/// # Example
///
/// ```
/// use chrono::TimeDelta;
/// use replies::Value;
///
/// // Numbers become Value::Number
/// let count: Value = 42.into();
///
/// // Strings become Value::String
/// let name: Value = "Alice".into();
///
/// // Durations become Value::Duration
/// let cooldown: Value = TimeDelta::hours(3).into();
///
/// // Absent optionals become Value::Null
/// let contact: Value = Option::<String>::None.into();
/// assert!(contact.is_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An explicitly absent value.
    Null,

    /// A boolean flag.
    Bool(bool),

    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A string value.
    String(String),

    /// An absolute point in time.
    Timestamp(DateTime<Utc>),

    /// An elapsed span of time.
    Duration(TimeDelta),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a flag, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get this value as a timestamp, if it is one.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Get this value as a duration, if it is one.
    pub fn as_duration(&self) -> Option<TimeDelta> {
        match self {
            Value::Duration(d) => Some(*d),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Truthiness used for conditional wording.
    ///
    /// `Null`, `false`, zero, empty strings and zero durations are falsy;
    /// everything else, including every timestamp, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Timestamp(_) => true,
            Value::Duration(d) => !d.is_zero(),
        }
    }

    /// Short name of the value's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Timestamp(_) => "timestamp",
            Value::Duration(_) => "duration",
        }
    }
}

/// The default string form used when a placeholder has no conversion.
///
/// Timestamps use the UTC default layout and durations their largest whole
/// unit, matching the `t` and `d` conversions.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Timestamp(t) => {
                f.write_str(&format_timestamp(t, &Utc.fix(), DEFAULT_TIMESTAMP_FORMAT))
            }
            Value::Duration(d) => f.write_str(&format_duration(*d)),
        }
    }
}

// From implementations for common types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

/// Values above `i64::MAX` become [`Value::Float`] instead of wrapping.
impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

/// Values above `i64::MAX` become [`Value::Float`] instead of wrapping.
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Value::Float(n as f64), Value::Number)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Timestamp(t)
    }
}

impl From<TimeDelta> for Value {
    fn from(d: TimeDelta) -> Self {
        Value::Duration(d)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn unsigned_values_above_i64_max_do_not_wrap() {
        let too_big = u64::MAX;
        assert!(matches!(Value::from(too_big), Value::Float(f) if f > 0.0));
        assert_eq!(Value::from(7_u64), Value::Number(7));
        assert_eq!(Value::from(7_usize), Value::Number(7));
    }

    #[test]
    fn timestamps_and_durations_display_for_humans() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(Value::from(at).to_string(), "2024-03-01 12:30 UTC");
        assert_eq!(Value::from(TimeDelta::hours(1)).to_string(), "1 hour");
    }
}
