//! Run report: what happened to each visited directory.

mod format;

pub use format::{format_report_json, format_report_text, format_section_heading};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of processing one directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Index file created or replaced.
    Written,
    /// Existing generated page already matched byte for byte.
    Unchanged,
    /// Existing index lacks the marker and was left alone.
    Skipped,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Written => "written",
            Outcome::Unchanged => "unchanged",
            Outcome::Skipped => "skipped",
        }
    }
}

/// One row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryOutcome {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Outcomes in visiting order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub directories: Vec<DirectoryOutcome>,
}

impl RunReport {
    pub fn record(&mut self, path: PathBuf, outcome: Outcome) {
        self.directories.push(DirectoryOutcome { path, outcome });
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.directories
            .iter()
            .filter(|d| d.outcome == outcome)
            .count()
    }

    /// Outcome recorded for `path`, if it was visited.
    pub fn outcome_for(&self, path: &std::path::Path) -> Option<Outcome> {
        self.directories
            .iter()
            .find(|d| d.path == path)
            .map(|d| d.outcome)
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}

/// JSON shape of the report, with totals.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary<'a> {
    pub directories: &'a [DirectoryOutcome],
    pub total: usize,
    pub written: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl<'a> From<&'a RunReport> for RunSummary<'a> {
    fn from(report: &'a RunReport) -> Self {
        Self {
            directories: &report.directories,
            total: report.len(),
            written: report.count(Outcome::Written),
            unchanged: report.count(Outcome::Unchanged),
            skipped: report.count(Outcome::Skipped),
        }
    }
}
