//! Per-method response construction.
//!
//! Every handler writes its response straight to the connection and returns
//! the header it sent, so the caller can log it.

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncRead, AsyncReadExt, AsyncWrite};

use crate::config::Config;
use crate::http::error::{within, Failure, ServeError};
use crate::http::form::{parse_form, render_fields};
use crate::http::mime::content_type_for;
use crate::http::request::{Method, Request};
use crate::http::response::ResponseHeader;
use crate::http::writer::{stream_error_page, stream_file, write_header, write_text};

pub const INDEX_PAGE: &str = "/index.htm";
pub const NOT_FOUND_PAGE: &str = "/404.htm";
pub const ERROR_PAGE: &str = "/500.htm";

/// Shared by all connections; holds nothing but the configuration.
#[derive(Clone)]
pub struct RequestHandler {
    config: Arc<Config>,
}

impl RequestHandler {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.config.read_timeout()
    }

    /// Filesystem path for a GET/HEAD target. `/` maps to the index page.
    pub fn resolve_path(&self, target: &str) -> String {
        if target == "/" {
            self.config.document_path(INDEX_PAGE)
        } else {
            self.config.document_path(target)
        }
    }

    /// Writes the response for `request`.
    ///
    /// Returns `None` for methods that get no response.
    pub async fn handle<S>(&self, request: &Request, stream: &mut S) -> Result<Option<ResponseHeader>>
    where
        S: AsyncBufRead + AsyncWrite + Unpin,
    {
        let header = match request.method {
            Method::GET => self.serve_file(request, stream, true).await?,
            Method::HEAD => self.serve_file(request, stream, false).await?,
            Method::POST => self.echo_form(request, stream).await?,
            Method::UNKNOWN => return Ok(None),
        };
        Ok(Some(header))
    }

    /// GET and HEAD. HEAD skips the file body but, on a miss, still sends
    /// the 404 page like GET does.
    async fn serve_file<S>(&self, request: &Request, stream: &mut S, with_body: bool) -> Result<ResponseHeader>
    where
        S: AsyncWrite + Unpin,
    {
        let path = self.resolve_path(&request.target);

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {
                let modified = meta
                    .modified()
                    .with_context(|| format!("no modification time for {}", path))?;
                let header = ResponseHeader::file(modified, content_type_for(Path::new(&path)), meta.len());

                write_header(stream, &header).await?;
                if with_body {
                    stream_file(stream, &path).await?;
                }
                Ok(header)
            }
            _ => {
                tracing::debug!(path = %path, "Target not found");
                let header = ResponseHeader::not_found();
                write_header(stream, &header).await?;
                stream_error_page(stream, &self.config.document_path(NOT_FOUND_PAGE)).await?;
                Ok(header)
            }
        }
    }

    async fn echo_form<S>(&self, request: &Request, stream: &mut S) -> Result<ResponseHeader>
    where
        S: AsyncBufRead + AsyncWrite + Unpin,
    {
        let body = within(self.config.read_timeout(), read_body(&mut *stream, request.body_length())).await?;

        let fields = parse_form(&body);
        let header = ResponseHeader::form_echo();

        write_header(stream, &header).await?;
        write_text(stream, &render_fields(&fields)).await?;
        Ok(header)
    }

    /// The 500 path: header, `500.htm`, then the error and its backtrace as
    /// plain text when details are exposed.
    pub async fn report_error<S>(&self, failure: &Failure, stream: &mut S) -> Result<ResponseHeader>
    where
        S: AsyncWrite + Unpin,
    {
        let header = ResponseHeader::internal_error();
        write_header(stream, &header).await?;
        stream_error_page(stream, &self.config.document_path(ERROR_PAGE)).await?;

        if self.config.expose_error_details {
            write_text(stream, &failure.to_string()).await?;
        }
        Ok(header)
    }
}

/// Reads exactly `length` body bytes, growing the buffer only as bytes
/// arrive, so a bogus Content-Length costs nothing up front.
async fn read_body<R>(reader: &mut R, length: usize) -> Result<Vec<u8>, ServeError>
where
    R: AsyncRead + Unpin,
{
    let mut body = Vec::new();
    (&mut *reader)
        .take(length as u64)
        .read_to_end(&mut body)
        .await
        .map_err(ServeError::Read)?;

    if body.len() < length {
        return Err(ServeError::Read(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("request body ended after {} of {} bytes", body.len(), length),
        )));
    }
    Ok(body)
}
