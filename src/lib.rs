//! slnsort core library.
//!
//! This crate exposes programmatic APIs for sorting Visual Studio solution
//! (`.sln`) files into a canonical entry order, so that two semantically
//! identical solutions are byte-identical regardless of when entries were
//! added.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `sorter`: The line reorderer; the algorithmic core.
//! - `process`: Change application per file and parallel directory runs.
//! - `ignore`: Ignore-pattern file loading and matching.
//! - `models`: Outcome and summary structs.
//! - `output`: Human/JSON printers.
//! - `utils`: Supporting helpers.

pub mod cli;
pub mod config;
pub mod ignore;
pub mod models;
pub mod output;
pub mod process;
pub mod sorter;
pub mod utils;
