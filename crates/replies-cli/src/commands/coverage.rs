//! Coverage command implementation.

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result, miette};
use replies::{FormatterRegistry, Localization, OverrideKey, ReplyKind};
use serde::Serialize;

use crate::output::OverrideDiagnostic;
use crate::output::table::{FileCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Override files to report on.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Language the files are written in.
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Exit with non-zero code if any file leaves a reply kind to its default.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    file: String,
    language: String,
    overridden: usize,
    total: usize,
    formatter: bool,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let formatters = FormatterRegistry::new();
    let total = ReplyKind::ALL.len();
    let mut coverage_data = Vec::new();

    for path in &args.files {
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read override file {}: {e}", path.display()))?;

        let localization = match Localization::parse(&args.lang, &content, &formatters) {
            Ok(localization) => localization,
            Err(e) => {
                return Err(match OverrideDiagnostic::from_load_error(path, &content, &e) {
                    Some(diagnostic) => diagnostic.into(),
                    None => miette!("{e}"),
                });
            }
        };

        let missing = ReplyKind::ALL
            .iter()
            .filter(|kind| localization.template(**kind).is_none())
            .map(|kind| kind.name().to_string())
            .collect();

        coverage_data.push(FileCoverage {
            file: path.display().to_string(),
            language: localization.language().to_string(),
            overridden: localization.overridden_kinds().count(),
            formatter: localization.get(OverrideKey::Formatter).is_some(),
            missing,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                file: c.file.clone(),
                language: c.language.clone(),
                overridden: c.overridden,
                total,
                formatter: c.formatter,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        let table = format_coverage_table(total, &coverage_data);
        println!("{table}");

        for file in &coverage_data {
            if !file.missing.is_empty() {
                println!("\nDefaults used by {}:", file.file);
                for name in &file.missing {
                    println!("  - {name}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
