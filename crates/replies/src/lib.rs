pub mod interpreter;
pub mod parser;
pub mod table;
pub mod types;

pub use interpreter::{
    ChatFormatter, ConfigError, Formatter, FormatterRegistry, LoadError, LoadWarning,
    Localization, LocalizationStore, Override, OverrideKey, PlainFormatter, RenderError,
    Renderer, compute_suggestions,
};
pub use table::{Template, TemplateTable};
pub use types::{Fields, Reply, ReplyKind, Value};

// Re-export the reply_kinds! macro
pub use replies_macros::reply_kinds;

/// Creates a [`Fields`] mapping from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, strings, booleans, timestamps, durations or options directly.
///
/// # Example
///
/// ```
/// use replies::{Value, fields};
///
/// let f = fields! { "count" => 3, "name" => "Alice", "contact" => None::<String> };
/// assert_eq!(f.len(), 3);
/// assert_eq!(f.get("count").and_then(Value::as_number), Some(3));
/// assert_eq!(f.get("name").and_then(Value::as_string), Some("Alice"));
/// assert!(f.get("contact").is_some_and(Value::is_null));
/// ```
#[macro_export]
macro_rules! fields {
    {} => {
        $crate::Fields::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut fields = $crate::Fields::new();
            $(
                fields.insert($key, ::std::convert::Into::<$crate::Value>::into($value));
            )+
            fields
        }
    };
}
