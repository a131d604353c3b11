use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::http::error::{within, Failure};
use crate::http::handler::RequestHandler;
use crate::http::parser::read_request;
use crate::http::request::{Method, Request};
use crate::logging::log;

/// One accepted client. Serves a single request, then closes.
pub struct Connection<S> {
    stream: BufReader<S>,
    handler: RequestHandler,
    state: ConnectionState,
}

pub enum ConnectionState {
    Parsing,
    Dispatching(Request),
    ErrorReporting(Failure),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handler: RequestHandler) -> Self {
        Self {
            stream: BufReader::new(stream),
            handler,
            state: ConnectionState::Parsing,
        }
    }

    /// Drives the connection to `Closed`.
    ///
    /// Methods other than GET, HEAD and POST get no response; the stream is
    /// closed right away rather than left open.
    ///
    /// Request failures are answered with a 500 and do not surface here; an
    /// error is only returned when that 500 could not be sent either.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut outcome = Ok(());

        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Parsing => {
                    let timeout = self.handler.read_timeout();
                    self.state = match within(timeout, read_request(&mut self.stream)).await {
                        Ok(request) => ConnectionState::Dispatching(request),
                        Err(e) => ConnectionState::ErrorReporting(e.into()),
                    };
                }

                ConnectionState::Dispatching(request) => {
                    match self.handler.handle(&request, &mut self.stream).await {
                        Ok(Some(header)) => {
                            let header = header.to_string();
                            if request.method == Method::POST {
                                log(&["===RESPONSE===", header.as_str()]);
                            } else {
                                log(&["===REQUEST===", request.raw.as_str(), "===RESPONSE===", header.as_str()]);
                            }
                        }
                        Ok(None) => {
                            tracing::warn!(
                                request_line = %request.request_line(),
                                "Unsupported request, closing without a response"
                            );
                        }
                        Err(e) => self.state = ConnectionState::ErrorReporting(e.into()),
                    }
                }

                ConnectionState::ErrorReporting(failure) => {
                    log(&[failure.to_string().as_str()]);
                    match self.handler.report_error(&failure, &mut self.stream).await {
                        Ok(header) => log(&["===RESPONSE===", header.to_string().as_str()]),
                        Err(e) => outcome = Err(e.context(format!("failed to report: {:#}", failure.error))),
                    }
                }

                ConnectionState::Closed => {
                    // The peer may already be gone; nothing left to report.
                    let _ = self.stream.get_mut().shutdown().await;
                    break;
                }
            }
        }

        outcome
    }
}
