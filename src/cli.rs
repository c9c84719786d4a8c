//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "slnsort",
    version,
    about = "Sort Visual Studio solution (.sln) files deterministically",
    long_about = "slnsort — normalize the entry order of Visual Studio solution files so that \
semantically identical solutions are byte-identical.\n\nConfiguration precedence: CLI > slnsort.toml > defaults.",
    after_help = "Examples:\n  slnsort MySolution.sln\n  slnsort src/ --validate\n  slnsort src/ --ignore .slnsortignore --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Solution file, or directory to scan recursively for *.sln")]
    pub target: String,
    #[arg(
        long,
        action = clap::ArgAction::SetTrue,
        help = "Report whether sorting would be needed, without writing"
    )]
    pub validate: bool,
    #[arg(long, help = "File of ignore patterns, one regex per line (`#` comments)")]
    pub ignore: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}
