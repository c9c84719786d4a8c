//! Ignore-pattern file loading and matching for directory runs.
//!
//! The pattern file holds one regex per line. Lines starting with `#` are
//! comments; blank lines are skipped. Patterns match anywhere in a
//! candidate's full path string.

use std::fs;
use std::path::Path;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IgnoreError {
    #[error("cannot read ignore file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid ignore pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Compiled ignore patterns.
#[derive(Debug, Default)]
pub struct IgnoreList {
    patterns: Vec<Regex>,
}

impl IgnoreList {
    pub fn empty() -> Self {
        IgnoreList::default()
    }

    /// Load and compile every pattern in the given file.
    pub fn load(path: &Path) -> Result<Self, IgnoreError> {
        let text = fs::read_to_string(path).map_err(|source| IgnoreError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
        let mut patterns = Vec::new();
        for line in text.lines() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            let re = Regex::new(line).map_err(|source| IgnoreError::Pattern {
                pattern: line.to_string(),
                source,
            })?;
            patterns.push(re);
        }
        Ok(IgnoreList { patterns })
    }

    /// Whether the given path string matches any ignore pattern.
    pub fn is_ignored(&self, candidate: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(candidate))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Original pattern texts, for preamble reporting.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|re| re.as_str())
    }
}
