use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::future::Future;
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Failures that abort a request and send it down the 500 path.
///
/// A missing target file is not one of them: that is an ordinary 404.
#[derive(Debug, Error)]
pub enum ServeError {
    /// The stream ended before the blank line closing the headers.
    #[error("connection closed before the end of the request headers")]
    MalformedRequest,

    /// `404.htm` or `500.htm` could not be opened.
    #[error("error page {path} could not be opened: {source}")]
    MissingErrorPage {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("read error: {0}")]
    Read(#[source] io::Error),

    #[error("write error: {0}")]
    Write(#[source] io::Error),

    #[error("timed out waiting for the client")]
    TimedOut,
}

/// Await `fut`, failing with [`ServeError::TimedOut`] once `limit` elapses.
pub async fn within<T, F>(limit: Option<Duration>, fut: F) -> Result<T, ServeError>
where
    F: Future<Output = Result<T, ServeError>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, fut)
            .await
            .map_err(|_| ServeError::TimedOut)?,
        None => fut.await,
    }
}

/// A request failure on its way to the 500 path, with a stack trace.
///
/// The trace is the error's own when one was captured, otherwise one is
/// taken here, whatever `RUST_BACKTRACE` says.
#[derive(Debug)]
pub struct Failure {
    pub error: anyhow::Error,
    pub backtrace: String,
}

impl Failure {
    pub fn new(error: anyhow::Error) -> Self {
        let backtrace = match error.backtrace().status() {
            BacktraceStatus::Captured => error.backtrace().to_string(),
            _ => Backtrace::force_capture().to_string(),
        };
        Self { error, backtrace }
    }
}

impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        Self::new(error)
    }
}

impl From<ServeError> for Failure {
    fn from(error: ServeError) -> Self {
        Self::new(error.into())
    }
}

/// Error message on the first line, backtrace lines after it.
impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}\n{}\n", self.error, self.backtrace)
    }
}
