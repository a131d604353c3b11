//! Server configuration
//!
//! Built once at startup, either from the `<port> <basePath>` command line
//! or from a YAML file, and shared read-only between connections.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Name of the log file created inside the document root.
pub const LOG_FILE_NAME: &str = "log.txt";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TCP port to listen on
    pub port: u16,

    /// Document root; request targets are appended to it verbatim
    pub base_path: String,

    /// Address to bind (all interfaces by default)
    #[serde(default = "default_host")]
    pub host: String,

    /// Upper bound on concurrently served connections. Unbounded when absent.
    #[serde(default)]
    pub max_connections: Option<usize>,

    /// Read timeout for request headers and POST bodies. No timeout when absent.
    #[serde(default)]
    pub read_timeout_secs: Option<u64>,

    /// Write the error message and backtrace into 500 response bodies
    #[serde(default = "default_true")]
    pub expose_error_details: bool,

    /// Append log output to `<base_path>/log.txt` as well as stdout
    #[serde(default = "default_true")]
    pub log_to_file: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn new(port: u16, base_path: impl Into<String>) -> Self {
        Self {
            port,
            base_path: base_path.into(),
            host: default_host(),
            max_connections: None,
            read_timeout_secs: None,
            expose_error_details: true,
            log_to_file: true,
        }
    }

    /// Build the configuration from command line arguments (program name
    /// already skipped).
    ///
    /// Two arguments are `<port> <basePath>`; a single argument is the path
    /// of a YAML configuration file.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        match args.as_slice() {
            [file] => Self::from_file(file),
            [port, base_path] => {
                let port = port
                    .parse::<u16>()
                    .with_context(|| format!("invalid port: {}", port))?;
                Ok(Self::new(port, base_path.clone()))
            }
            _ => anyhow::bail!("usage: tinyhttpd <port> <basePath> | tinyhttpd <config.yaml>"),
        }
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml::from_str(source).context("Invalid configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&source)
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_secs.map(Duration::from_secs)
    }

    /// Absolute filesystem path for a request target: the target is
    /// concatenated onto the document root without any normalization.
    pub fn document_path(&self, target: &str) -> String {
        format!("{}{}", self.base_path, target)
    }

    pub fn log_file(&self) -> String {
        format!("{}/{}", self.base_path, LOG_FILE_NAME)
    }
}
