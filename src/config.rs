//! Configuration discovery and effective settings resolution.
//!
//! slnsort reads `slnsort.toml|yaml|yml` from the current directory (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `output`: `human`
//! - `validate`: false
//! - `ignore`: none
//!
//! Overrides precedence: CLI > config file > defaults. An `ignore` path
//! taken from the config file resolves relative to the directory that
//! config file lives in.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `slnsort.toml|yaml`.
pub struct SlnsortConfig {
    pub output: Option<String>,
    pub validate: Option<bool>,
    pub ignore: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run after applying precedence.
pub struct Effective {
    pub output: String,
    pub validate: bool,
    pub ignore: Option<PathBuf>,
}

/// Walk upward from `start` to find the directory holding a config file.
///
/// Stops when a `slnsort.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_config_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("slnsort.toml").exists()
            || cur.join("slnsort.yaml").exists()
            || cur.join("slnsort.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `SlnsortConfig` from `slnsort.toml` or `slnsort.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<SlnsortConfig> {
    let toml_path = root.join("slnsort.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: SlnsortConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["slnsort.yaml", "slnsort.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: SlnsortConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    start_dir: Option<&str>,
    cli_output: Option<&str>,
    cli_validate: Option<bool>,
    cli_ignore: Option<&str>,
) -> Effective {
    let start = PathBuf::from(start_dir.unwrap_or("."));
    let root = detect_config_root(&start);
    let cfg = load_config(&root).unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let validate = cli_validate.or(cfg.validate).unwrap_or(false);

    // CLI ignore paths are taken as given; config ones anchor at the config root.
    let ignore = match cli_ignore {
        Some(p) => Some(PathBuf::from(p)),
        None => cfg.ignore.map(|p| root.join(p)),
    };

    Effective {
        output,
        validate,
        ignore,
    }
}
