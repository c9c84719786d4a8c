//! Shared data models for per-file outcomes and run summaries.

use serde::Serialize;

#[derive(Serialize)]
/// Result of processing one solution file.
pub struct Outcome {
    pub file: String,
    pub changed: bool,
    pub wrote: bool,
    pub error: Option<String>,
}

#[derive(Serialize)]
/// Aggregated run summary used by printers.
pub struct Summary {
    pub changed: usize,
    pub wrote: usize,
    pub failed: usize,
    pub files: usize,
}

/// Fold outcomes into a summary.
pub fn summarize(outcomes: &[Outcome]) -> Summary {
    Summary {
        changed: outcomes.iter().filter(|o| o.changed).count(),
        wrote: outcomes.iter().filter(|o| o.wrote).count(),
        failed: outcomes.iter().filter(|o| o.error.is_some()).count(),
        files: outcomes.len(),
    }
}
