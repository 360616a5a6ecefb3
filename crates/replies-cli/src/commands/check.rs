//! Implementation of the `replies check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Report};
use owo_colors::OwoColorize;
use replies::interpreter::lint_entries;
use replies::parser::parse_file;
use replies::{FormatterRegistry, LoadWarning, Localization, TemplateTable};
use serde::Serialize;

use crate::output::OverrideDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Override files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Language the files are written in, used for plural rules
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Treat lint warnings as errors
    #[arg(long)]
    pub deny_warnings: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    ok: bool,
    error: Option<String>,
    warnings: Vec<String>,
}

/// Outcome of checking one file.
enum Outcome {
    Valid(Vec<LoadWarning>),
    Invalid(Report),
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let formatters = FormatterRegistry::new();
    let table = TemplateTable::english();
    let mut results = Vec::new();

    for path in &args.files {
        let content = read_to_string(path).into_diagnostic()?;
        let outcome = check_file(path, &content, &args.lang, &formatters, &table);
        results.push((path, outcome));
    }

    let errors = results
        .iter()
        .filter(|(_, outcome)| matches!(outcome, Outcome::Invalid(_)))
        .count();
    let warnings: usize = results
        .iter()
        .map(|(_, outcome)| match outcome {
            Outcome::Valid(warnings) => warnings.len(),
            Outcome::Invalid(_) => 0,
        })
        .sum();

    if args.json {
        let json: Vec<CheckJson> = results
            .iter()
            .map(|(path, outcome)| match outcome {
                Outcome::Valid(warnings) => CheckJson {
                    file: path.display().to_string(),
                    ok: true,
                    error: None,
                    warnings: warnings.iter().map(ToString::to_string).collect(),
                },
                Outcome::Invalid(report) => CheckJson {
                    file: path.display().to_string(),
                    ok: false,
                    error: Some(report.to_string()),
                    warnings: Vec::new(),
                },
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        for (path, outcome) in &results {
            match outcome {
                Outcome::Valid(warnings) => {
                    for warning in warnings {
                        eprintln!("{}: {}: {warning}", "warning".yellow().bold(), path.display());
                    }
                    println!("{} {}", "ok".green().bold(), path.display());
                }
                Outcome::Invalid(report) => eprintln!("{report:?}"),
            }
        }
        if errors > 0 {
            eprintln!(
                "{}: {errors} of {} files failed to load",
                "error".red().bold(),
                results.len()
            );
        }
    }

    if errors > 0 || (args.deny_warnings && warnings > 0) {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn check_file(
    path: &Path,
    content: &str,
    language: &str,
    formatters: &FormatterRegistry,
    table: &TemplateTable,
) -> Outcome {
    let entries = match parse_file(content) {
        Ok(entries) => entries,
        Err(e) => {
            return Outcome::Invalid(
                OverrideDiagnostic::from_parse_error(path, content, &e).into(),
            );
        }
    };

    if let Err(e) = Localization::parse(language, content, formatters) {
        tracing::debug!(path = %path.display(), error = %e, "override file rejected");
        return Outcome::Invalid(match OverrideDiagnostic::from_load_error(path, content, &e) {
            Some(diagnostic) => diagnostic.into(),
            None => Report::msg(e.to_string()),
        });
    }

    Outcome::Valid(lint_entries(&entries, table))
}
