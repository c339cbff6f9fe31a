//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Parse a page size, rejecting zero.
pub fn parse_page_size(s: &str) -> Result<usize, String> {
    let size = s
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("Invalid page size '{s}': {e}"))?;
    if size == 0 {
        return Err("Page size must be at least 1".to_string());
    }
    Ok(size)
}

/// Explore CSV and JSON datasets from the terminal.
#[derive(Parser, Debug)]
#[command(name = "datalens")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data file to load (.csv, .json, .jsonl or .ndjson)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Rows per page (overrides the settings file)
    #[arg(
        short = 'p',
        long = "page-size",
        value_name = "N",
        env = "DATALENS_PAGE_SIZE",
        value_parser = parse_page_size
    )]
    pub page_size: Option<usize>,

    /// Settings file to use instead of the default location
    #[arg(long = "settings", value_name = "PATH", env = "DATALENS_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Execute a command and exit (repeatable, run in order)
    #[arg(short = 'e', long = "execute", value_name = "COMMAND")]
    pub execute: Vec<String>,

    /// Read commands from a file, one per line, and exit
    #[arg(short = 's', long = "script", value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Whether commands were given on the command line or in a script
    pub fn is_batch(&self) -> bool {
        !self.execute.is_empty() || self.script.is_some()
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Convert a dataset between formats (output format follows its extension)
    Convert {
        /// File to read
        #[arg(value_name = "INPUT")]
        input: PathBuf,
        /// File to write; `.json` writes JSON, anything else CSV
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}
