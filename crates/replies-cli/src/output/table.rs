//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};

/// Coverage data for a single override file.
pub struct FileCoverage {
    /// Path of the override file as given on the command line.
    pub file: String,
    /// Language the file was loaded as.
    pub language: String,
    /// Number of reply kinds the file overrides.
    pub overridden: usize,
    /// Whether the file selects a formatter.
    pub formatter: bool,
    /// Names of reply kinds left to their defaults.
    pub missing: Vec<String>,
}

/// Format coverage data as a table.
pub fn format_coverage_table(total: usize, coverage: &[FileCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Language", "Coverage", "Formatter", "Missing"]);

    for file in coverage {
        table.add_row(vec![
            file.file.clone(),
            file.language.clone(),
            format!("{}/{}", file.overridden, total),
            if file.formatter { "yes" } else { "-" }.to_string(),
            file.missing.len().to_string(),
        ]);
    }

    table
}
