//! CLI argument definitions
//!
//! clap derive structs for the mangashelf commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mangashelf CLI
#[derive(Parser)]
#[command(name = "mangashelf")]
#[command(about = "Fuzzy search and ranking over a manga library", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single search against the library
    Search(SearchArgs),
    /// Read queries from stdin, debounced, and print results per query
    Interactive(InteractiveArgs),
}

/// Search command arguments
#[derive(Parser, Clone, Debug)]
pub struct SearchArgs {
    /// Search terms
    #[arg(short = 'q', long)]
    pub query: String,

    /// Path to the library JSON file
    #[arg(short = 'l', long)]
    pub library: PathBuf,

    /// Near-exact matching (0.7 score cutoff instead of 0.3)
    #[arg(long)]
    pub strict: bool,

    /// Compare without lowercasing
    #[arg(long)]
    pub case_sensitive: bool,

    /// Minimum query length before any filtering happens
    #[arg(short = 'm', long, default_value_t = 1)]
    pub min_chars: usize,

    /// Maximum number of results to print
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Emit results as JSON instead of a text listing
    #[arg(long)]
    pub json: bool,
}

/// Interactive command arguments
#[derive(Parser, Clone, Debug)]
pub struct InteractiveArgs {
    /// Path to the library JSON file
    #[arg(short = 'l', long)]
    pub library: PathBuf,

    /// Near-exact matching (0.7 score cutoff instead of 0.3)
    #[arg(long)]
    pub strict: bool,

    /// Minimum query length before any filtering happens
    #[arg(short = 'm', long, default_value_t = 1)]
    pub min_chars: usize,

    /// Debounce settle time in milliseconds
    #[arg(short = 'w', long, default_value_t = 300)]
    pub wait_ms: u64,
}
