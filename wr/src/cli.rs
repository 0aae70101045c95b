//! CLI argument parsing for the report generator

use clap::Parser;
use std::path::PathBuf;

/// Generate reports from templates, reusing previous answers
#[derive(Parser, Debug)]
#[command(name = "wr", version, about = "Generate reports from text templates, reusing previous answers")]
pub struct Cli {
    /// Template file to use (skips interactive selection)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Output file path (skips default naming; parent directories are created)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export a PDF for this run
    #[arg(long)]
    pub pdf: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}
