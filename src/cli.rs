use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "comment-checker")]
#[command(author, version, about = "Count comment lines, block comments and TODOs in a source file")]
#[command(long_about = "Classify the lines of a source file by comment category using \
    the comment markers a syntax table declares for its extension.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Syntax table or input file not found, or table empty\n  \
    2 - Syntax table in wrong format\n  \
    3 - File extension not declared in the syntax table")]
pub struct Cli {
    /// Comment syntax table (comma separated records, or a .toml table)
    pub table: PathBuf,

    /// Source file to classify
    pub file: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the report on stdout
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
