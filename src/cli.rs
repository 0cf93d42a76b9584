use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "comment-census")]
#[command(author, version, about = "Measure comment density across a codebase")]
#[command(long_about = "Classifies every non-blank line of source text as commented or \
    uncommented and reports run-wide totals.\n\n\
    Exit codes:\n  \
    0 - Scan completed\n  \
    1 - Runtime error\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Paths to scan (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File extensions to include (comma-separated, e.g., rs,go,py)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a per-line classification trace to stderr
    #[arg(long)]
    pub debug: bool,

    /// Suppress per-file rows in text output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
