//! CLI argument definitions using clap
//!
//! Commands:
//! - studentdb serve [--config <path>]
//! - studentdb query [--config <path>]
//! - studentdb validate [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// studentdb - an in-memory student record manager
#[derive(Parser, Debug)]
#[command(name = "studentdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load records and answer JSON requests from stdin, one per line
    Serve {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Answer a single JSON request and exit
    Query {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate one raw record from stdin and print the report
    Validate {
        /// Path to configuration file; defaults apply when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
