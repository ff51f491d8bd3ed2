//! CLI command implementations
//!
//! Every command follows the same startup sequence:
//! 1. Load configuration (defaults when no path is given)
//! 2. Apply the configured log level
//! 3. Load records through the record source
//! 4. Handle requests

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::api::{ApiError, ApiHandler, Response};
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::record::{RawRecord, RecordSource};
use crate::store::RecordStore;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::CliResult;
use super::io::{read_request_from, request_lines, write_line};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(config.as_deref()),
        Command::Query { config } => query(config.as_deref()),
        Command::Validate { config } => validate(config.as_deref()),
    }
}

/// Answer requests from stdin until it closes
pub fn serve(config_path: Option<&Path>) -> CliResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    serve_session(config_path, stdin.lock(), &mut stdout)
}

/// Answer a single request from stdin
pub fn query(config_path: Option<&Path>) -> CliResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    query_once(config_path, &mut stdin.lock(), &mut stdout)
}

/// Validate a single raw record from stdin
pub fn validate(config_path: Option<&Path>) -> CliResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    validate_once(config_path, &mut stdin.lock(), &mut stdout)
}

/// Serving loop over arbitrary input and output.
///
/// Request errors become error responses and the loop continues. Only
/// I/O failures end the session early.
pub fn serve_session<R: BufRead, W: Write>(
    config_path: Option<&Path>,
    reader: R,
    writer: &mut W,
) -> CliResult<()> {
    let config = boot(config_path)?;
    let mut source = config.source();
    run_session(&config, &mut source, reader, writer)
}

/// Loads from `source`, answers every request line, then saves the
/// collection back to `source`.
pub fn run_session<R: BufRead, W: Write>(
    config: &Config,
    source: &mut dyn RecordSource,
    reader: R,
    writer: &mut W,
) -> CliResult<()> {
    let mut handler = open_handler(config, source)?;

    log_event(Event::Serving);

    for line in request_lines(reader) {
        let line = line?;
        let response = handler.handle(&line);
        write_line(writer, &response)?;
    }

    handler.store().persist(source)?;

    let metrics = handler.metrics();
    let records = metrics.records.to_string();
    let rejected = metrics.rejected.to_string();
    log_event_with_fields(
        Event::SessionEnd,
        &[("records", records.as_str()), ("rejected", rejected.as_str())],
    );

    Ok(())
}

/// One request, one response
pub fn query_once<R: BufRead, W: Write>(
    config_path: Option<&Path>,
    reader: &mut R,
    writer: &mut W,
) -> CliResult<()> {
    let config = boot(config_path)?;
    let mut handler = open_handler(&config, &mut config.source())?;

    let request = read_request_from(reader)?;
    let response = handler.handle_value(request);
    write_line(writer, &response)?;

    log_event(Event::SessionEnd);
    Ok(())
}

/// Validate one raw record and write the per-field outcome
pub fn validate_once<R: BufRead, W: Write>(
    config_path: Option<&Path>,
    reader: &mut R,
    writer: &mut W,
) -> CliResult<()> {
    let config = boot(config_path)?;
    let validator = config.validator();

    let value = read_request_from(reader)?;
    let response = match serde_json::from_value::<RawRecord>(value) {
        Ok(candidate) => {
            let report = validator.validate(&candidate);
            Response::success(json!({
                "valid": report.is_valid(),
                "errors": report.violation_map(),
            }))
        }
        Err(e) => Response::error(&ApiError::invalid_request(format!(
            "Invalid record: {}",
            e
        ))),
    };
    write_line(writer, &response)?;

    log_event(Event::SessionEnd);
    Ok(())
}

fn boot(config_path: Option<&Path>) -> CliResult<Config> {
    log_event(Event::SessionStart);

    let config = Config::load_or_default(config_path)?;
    Logger::set_min_severity(config.severity()?);

    let source = config_path
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<defaults>".to_string());
    let courses = config.courses.len().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("courses", courses.as_str()),
            ("log_level", config.log_level.as_str()),
            ("path", source.as_str()),
        ],
    );

    Ok(config)
}

fn open_handler(config: &Config, source: &mut dyn RecordSource) -> CliResult<ApiHandler> {
    let store = RecordStore::open(config.validator(), source)?;

    let count = store.len().to_string();
    log_event_with_fields(Event::RecordsLoaded, &[("count", count.as_str())]);

    Ok(ApiHandler::new(store))
}
