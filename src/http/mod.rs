//! HTTP/1.0 request handling.
//!
//! One request per connection, no keep-alive.
//!
//! # Architecture
//!
//! - **`connection`**: per-connection state machine, owns the stream
//! - **`parser`**: reads the header block up to the blank line
//! - **`request`**: method, target and Content-Length extraction
//! - **`handler`**: GET/HEAD/POST dispatch and the 500 path
//! - **`response`**: status lines and header serialization
//! - **`writer`**: header writes and 256-byte file streaming
//! - **`form`**: URL-encoded POST body decoding
//! - **`mime`**: Content-Type by file extension
//! - **`error`**: failures that end in a 500
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Parsing   │ ← Read request line and headers
//!        └──────┬──────┘
//!               │ Blank line received
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Resolve file / read form, write response
//!        └──────┬───────────┘
//!               │ Response sent (or method unsupported)
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//!
//!   Any failure in Parsing or Dispatching → ErrorReporting (500) → Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tinyhttpd::config::Config;
//! use tinyhttpd::http::connection::Connection;
//! use tinyhttpd::http::handler::RequestHandler;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let handler = RequestHandler::new(Arc::new(Config::new(8080, "/var/www")));
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let handler = handler.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, handler);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod error;
pub mod form;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
