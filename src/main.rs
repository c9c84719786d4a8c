//! slnsort CLI binary entry point.
//! Resolves configuration, runs the sorter over the target, prints results.

use std::path::Path;

use clap::Parser;

use slnsort::cli::Cli;
use slnsort::ignore::IgnoreList;
use slnsort::{config, output, process, utils};

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(
        None,
        cli.output.as_deref(),
        if cli.validate { Some(true) } else { None },
        cli.ignore.as_deref(),
    );

    let target = Path::new(&cli.target);
    if !target.exists() {
        eprintln!(
            "{} {}",
            utils::error_prefix(),
            format!("target `{}` is not a file or directory", cli.target)
        );
        std::process::exit(2);
    }

    let ignore = match eff.ignore.as_deref() {
        Some(path) if !path.exists() => {
            eprintln!(
                "{} {}",
                utils::error_prefix(),
                format!("ignore file `{}` does not exist", path.to_string_lossy())
            );
            std::process::exit(2);
        }
        Some(path) => match IgnoreList::load(path) {
            Ok(list) => list,
            Err(e) => {
                eprintln!("{} {}", utils::error_prefix(), e);
                std::process::exit(2);
            }
        },
        None => IgnoreList::empty(),
    };

    // Fix mode is the default; --validate (or config) disables writing.
    let write = !eff.validate;
    let verb = if write { "Sorting" } else { "Validating" };

    let outcomes = if target.is_dir() {
        if eff.output != "json" {
            eprintln!(
                "{} {} all Visual Studio solutions (*.sln) in `{}`",
                utils::note_prefix(),
                verb,
                cli.target
            );
            if !ignore.is_empty() {
                eprintln!("{} Ignored patterns:", utils::note_prefix());
                for pat in ignore.patterns() {
                    eprintln!("  {}", pat);
                }
            }
        }
        process::run_directory(target, &ignore, write)
    } else {
        if eff.output != "json" {
            eprintln!(
                "{} {} solution `{}`",
                utils::note_prefix(),
                verb,
                cli.target
            );
        }
        vec![process::process_one(target, write)]
    };

    output::print_outcomes(&outcomes, &eff.output, write);

    // Fix mode always exits 0: version control is the change detector.
    // Validate mode fails when any file needs sorting or could not be read.
    if !write && outcomes.iter().any(|o| o.changed || o.error.is_some()) {
        std::process::exit(1);
    }
}
