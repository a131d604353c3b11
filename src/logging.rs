//! Log sink shared by all connections.
//!
//! Everything goes through `tracing`. The subscriber writes to stdout and,
//! optionally, appends to `log.txt` in the document root. Each [`log`] call
//! is a single event, so the lines of one call are never interleaved with
//! lines from another connection.

use std::fs::{File, OpenOptions};
use std::io;
use std::sync::Mutex;

use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use crate::config::Config;

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init(cfg: &Config) {
    let (file_output, file_error) = if cfg.log_to_file {
        match open_log_file(&cfg.log_file()) {
            Ok(file) => (Some(file_layer(file)), None),
            Err(e) => (None, Some(e)),
        }
    } else {
        (None, None)
    };

    let _ = tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(fmt::layer().with_target(false).with_level(true))
        .with(file_output)
        .try_init();

    if let Some(e) = file_error {
        tracing::warn!(path = %cfg.log_file(), error = %e, "Log file unavailable, logging to stdout only");
    }
}

fn open_log_file(path: &str) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Plain-text layer appending to `file`; the mutex serializes writers.
fn file_layer<S>(file: File) -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
}

/// Write each message as its own line, in order.
pub fn log(messages: &[&str]) {
    tracing::info!("{}", join_lines(messages));
}

fn join_lines(messages: &[&str]) -> String {
    messages
        .iter()
        .map(|m| m.trim_end_matches(['\r', '\n']))
        .collect::<Vec<_>>()
        .join("\n")
}
