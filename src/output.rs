//! Output rendering for sort/validate runs.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-file fields and a top-level summary with a stable shape.

use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

use crate::models::{summarize, Outcome};

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print per-file outcomes and a summary in the requested format.
pub fn print_outcomes(outcomes: &[Outcome], output: &str, write: bool) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_run_json(outcomes)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for o in outcomes {
                if let Some(err) = &o.error {
                    if color {
                        println!("{} {} — {}", "✖ failed:".red().bold(), o.file.bold(), err);
                    } else {
                        println!("✖ failed: {} — {}", o.file, err);
                    }
                } else if o.wrote {
                    if color {
                        println!("{} {}", "✏️  sorted:".green().bold(), o.file.bold());
                    } else {
                        println!("✏️  sorted: {}", o.file);
                    }
                } else if o.changed {
                    if color {
                        println!("{} {}", "needs sorting:".yellow().bold(), o.file.bold());
                    } else {
                        println!("needs sorting: {}", o.file);
                    }
                } else if color {
                    println!("{} {}", "no changes:".bright_black().to_string(), o.file);
                } else {
                    println!("no changes: {}", o.file);
                }
            }
            let s = summarize(outcomes);
            let summary = if write {
                format!(
                    "— Summary — sorted={} failed={} files={}",
                    s.wrote, s.failed, s.files
                )
            } else {
                format!(
                    "— Summary — needs-sorting={} failed={} files={}",
                    s.changed, s.failed, s.files
                )
            };
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose the run JSON object (pure) for testing/snapshot purposes.
pub fn compose_run_json(outcomes: &[Outcome]) -> JsonVal {
    let items: Vec<_> = outcomes
        .iter()
        .map(|o| {
            json!({
                "file": o.file,
                "changed": o.changed,
                "wrote": o.wrote,
                "error": o.error,
            })
        })
        .collect();
    let summary = serde_json::to_value(summarize(outcomes)).unwrap();
    json!({"results": items, "summary": summary})
}
