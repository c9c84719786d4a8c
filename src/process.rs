//! Change application over one or many solution files.
//!
//! `process_file` is the write side of the sorter: read lines, reorder,
//! compare element-wise against the original, and persist only when the
//! sequences differ. Directory runs enumerate `**/*.sln`, filter through
//! the ignore list, and process files in parallel; one file's failure is
//! captured in its own outcome and never aborts siblings.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;

use crate::ignore::IgnoreList;
use crate::models::Outcome;
use crate::sorter::{self, SortError};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("`{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{path}` is malformed: {source}")]
    Malformed {
        path: String,
        #[source]
        source: SortError,
    },
}

/// Sort a single solution file.
///
/// Returns whether the file's line sequence changed. When `write` is true
/// and a change was detected, the file is rewritten with one line
/// terminator per line, using whichever convention (`\r\n` or `\n`) the
/// file was read with.
pub fn process_file(path: &Path, write: bool) -> Result<bool, ProcessError> {
    let display = path.to_string_lossy().to_string();
    let text = fs::read_to_string(path).map_err(|source| ProcessError::Io {
        path: display.clone(),
        source,
    })?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let sorted = sorter::sort_solution(&lines).map_err(|source| ProcessError::Malformed {
        path: display.clone(),
        source,
    })?;

    let changed = sorted != lines;
    if write && changed {
        let eol = if text.contains("\r\n") { "\r\n" } else { "\n" };
        let mut out = String::with_capacity(text.len());
        for line in &sorted {
            out.push_str(line);
            out.push_str(eol);
        }
        fs::write(path, out).map_err(|source| ProcessError::Io {
            path: display,
            source,
        })?;
    }
    Ok(changed)
}

/// Process one file into an outcome record, capturing any failure.
pub fn process_one(path: &Path, write: bool) -> Outcome {
    let file = path.to_string_lossy().to_string();
    match process_file(path, write) {
        Ok(changed) => Outcome {
            file,
            changed,
            wrote: write && changed,
            error: None,
        },
        Err(e) => Outcome {
            file,
            changed: false,
            wrote: false,
            error: Some(e.to_string()),
        },
    }
}

/// Enumerate every `.sln` under `dir` recursively, minus ignored paths.
pub fn collect_targets(dir: &Path, ignore: &IgnoreList) -> Vec<PathBuf> {
    let pattern = dir.join("**/*.sln").to_string_lossy().to_string();
    let mut targets: Vec<PathBuf> = glob::glob(&pattern)
        .expect("bad glob pattern")
        .flatten()
        .filter(|p| !ignore.is_ignored(&p.to_string_lossy()))
        .collect();
    targets.sort();
    targets
}

/// Run the sorter across a directory tree in parallel.
///
/// Outcomes come back sorted by path so reports are deterministic.
pub fn run_directory(dir: &Path, ignore: &IgnoreList, write: bool) -> Vec<Outcome> {
    let targets = collect_targets(dir, ignore);
    let mut outcomes: Vec<Outcome> = targets
        .par_iter()
        .map(|path| process_one(path, write))
        .collect();
    outcomes.sort_by(|a, b| a.file.cmp(&b.file));
    outcomes
}
