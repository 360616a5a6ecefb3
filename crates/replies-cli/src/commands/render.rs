//! Implementation of the `replies render` command.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use miette::{IntoDiagnostic, miette};
use replies::{
    Fields, FormatterRegistry, LocalizationStore, Renderer, Reply, ReplyKind, Value,
    compute_suggestions,
};
use serde::Serialize;

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Reply kind to render (e.g. GIVEN_COOLDOWN)
    #[arg(long, required = true)]
    pub kind: String,

    /// Fields in name=value format (repeatable)
    #[arg(short = 'p', long = "field", value_parser = parse_key_val)]
    pub fields: Vec<(String, String)>,

    /// Override file to apply
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// Language of the override file
    #[arg(long, default_value = "en", env = "REPLIES_LANG")]
    pub lang: String,

    /// Default formatter
    #[arg(long, default_value = "chat")]
    pub formatter: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
struct RenderJson {
    kind: &'static str,
    text: String,
}

/// Parse a key=value field string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid field format '{s}': expected name=value"))?;
    Ok((name.to_string(), value.to_string()))
}

/// Interpret a command-line field value.
///
/// Tries, in order: `true`/`false`, `null`, an integer, a float, an RFC 3339
/// timestamp and a duration such as `90s` or `2d`. Anything else is a string.
fn parse_value(raw: &str) -> Value {
    if let Ok(b) = raw.parse::<bool>() {
        return Value::Bool(b);
    }
    if raw == "null" {
        return Value::Null;
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Value::Number(n);
    }
    if let Some(f) = raw.parse::<f64>().ok().filter(|f| f.is_finite()) {
        return Value::Float(f);
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Value::Timestamp(t.with_timezone(&Utc));
    }
    if let Some(d) = parse_duration(raw) {
        return Value::Duration(d);
    }
    Value::String(raw.to_string())
}

fn parse_duration(raw: &str) -> Option<TimeDelta> {
    let unit = raw.chars().last()?;
    let amount: i64 = raw.strip_suffix(unit)?.parse().ok()?;
    match unit {
        's' => TimeDelta::try_seconds(amount),
        'm' => TimeDelta::try_minutes(amount),
        'h' => TimeDelta::try_hours(amount),
        'd' => TimeDelta::try_days(amount),
        'w' => TimeDelta::try_weeks(amount),
        _ => None,
    }
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let kind = ReplyKind::from_name(&args.kind).ok_or_else(|| {
        let names: Vec<String> = ReplyKind::NAMES.iter().map(ToString::to_string).collect();
        let suggestions = compute_suggestions(&args.kind, &names);
        if suggestions.is_empty() {
            miette!("unknown reply kind '{}'", args.kind)
        } else {
            miette!(
                "unknown reply kind '{}'; did you mean: {}?",
                args.kind,
                suggestions.join(", ")
            )
        }
    })?;

    let registry = FormatterRegistry::new();
    let formatter = registry.get(&args.formatter).ok_or_else(|| {
        miette!(
            "unknown formatter '{}'; available: {}",
            args.formatter,
            registry.names().collect::<Vec<_>>().join(", ")
        )
    })?;

    let store = LocalizationStore::with_formatters(registry);
    if let Some(path) = &args.overrides {
        let count = store.load_file(&args.lang, path).into_diagnostic()?;
        tracing::debug!(count, path = %path.display(), "loaded overrides");
    }

    let renderer = Renderer::builder()
        .localization(Arc::new(store))
        .formatter(formatter)
        .build()
        .into_diagnostic()?;

    let fields: Fields = args
        .fields
        .iter()
        .map(|(name, raw)| (name.clone(), parse_value(raw)))
        .collect();

    match renderer.render(&Reply::new(kind, fields)) {
        Ok(text) => {
            if args.json {
                let output = RenderJson {
                    kind: kind.name(),
                    text,
                };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{text}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({ "error": e.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Render error: {e}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}
