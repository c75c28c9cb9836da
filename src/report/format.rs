//! Format a run report as text or JSON.

use crate::error::IndexError;
use crate::report::{Outcome, RunReport, RunSummary};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Human-readable report: one table row per directory, then totals.
pub fn format_report_text(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Indexes")));
    if report.is_empty() {
        out.push_str("No directories processed.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Directory", "Index"]);
    for row in &report.directories {
        table.add_row(vec![
            row.path.display().to_string(),
            row.outcome.as_str().to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!(
        "Total: {} directories, {} written, {} unchanged, {} skipped.\n",
        report.len(),
        report.count(Outcome::Written),
        report.count(Outcome::Unchanged),
        report.count(Outcome::Skipped)
    ));
    out
}

/// Pretty JSON report with totals.
pub fn format_report_json(report: &RunReport) -> Result<String, IndexError> {
    serde_json::to_string_pretty(&RunSummary::from(report))
        .map_err(|e| IndexError::ConfigError(format!("Failed to serialize report: {}", e)))
}
