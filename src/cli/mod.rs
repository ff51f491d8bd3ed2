//! CLI module for studentdb
//!
//! Provides command-line interface for:
//! - serve: Load records and answer requests line by line
//! - query: One-shot request execution
//! - validate: One-shot field validation

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    query, query_once, run, run_command, run_session, serve, serve_session, validate, validate_once,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request_from, request_lines, write_line};
