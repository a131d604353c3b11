use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::error::ServeError;
use crate::http::response::ResponseHeader;

/// Size of each read/write when streaming a file.
pub const CHUNK_SIZE: usize = 256;

pub async fn write_header<W>(stream: &mut W, header: &ResponseHeader) -> Result<(), ServeError>
where
    W: AsyncWrite + Unpin,
{
    write_text(stream, &header.to_string()).await
}

pub async fn write_text<W>(stream: &mut W, text: &str) -> Result<(), ServeError>
where
    W: AsyncWrite + Unpin,
{
    stream
        .write_all(text.as_bytes())
        .await
        .map_err(ServeError::Write)
}

/// Copies the file at `path` to `stream` in [`CHUNK_SIZE`] pieces.
///
/// Returns the number of bytes written.
pub async fn stream_file<W>(stream: &mut W, path: &str) -> Result<u64, ServeError>
where
    W: AsyncWrite + Unpin,
{
    let mut file = File::open(path).await.map_err(|source| ServeError::Open {
        path: path.to_string(),
        source,
    })?;

    let mut chunk = [0u8; CHUNK_SIZE];
    let mut written = 0u64;

    loop {
        let n = file.read(&mut chunk).await.map_err(ServeError::Read)?;
        if n == 0 {
            break;
        }

        stream
            .write_all(&chunk[..n])
            .await
            .map_err(ServeError::Write)?;
        written += n as u64;
    }

    Ok(written)
}

/// Like [`stream_file`], but a file that cannot be opened is reported as a
/// missing error page.
pub async fn stream_error_page<W>(stream: &mut W, path: &str) -> Result<u64, ServeError>
where
    W: AsyncWrite + Unpin,
{
    match stream_file(stream, path).await {
        Err(ServeError::Open { path, source }) => {
            Err(ServeError::MissingErrorPage { path, source })
        }
        other => other,
    }
}
