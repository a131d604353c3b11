use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::http::error::ServeError;
use crate::http::request::Request;

/// The blank line that closes the header block.
pub const TERMINATOR: &[u8] = b"\r\n";

/// Reads lines until the blank-line terminator and returns the parsed request.
///
/// Every line read, terminator included, ends up in [`Request::raw`]. Only the
/// header block is consumed; a POST body stays in the reader.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, ServeError>
where
    R: AsyncBufRead + Unpin,
{
    let mut raw = Vec::with_capacity(1024);
    let mut line = Vec::with_capacity(256);

    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .await
            .map_err(ServeError::Read)?;

        if n == 0 {
            return Err(ServeError::MalformedRequest);
        }

        raw.extend_from_slice(&line);

        if line == TERMINATOR {
            break;
        }
    }

    Ok(Request::from_raw(String::from_utf8_lossy(&raw).into_owned()))
}
