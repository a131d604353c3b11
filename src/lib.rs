//! tinyhttpd - minimal HTTP/1.0 document server
//!
//! Serves static files from a document root and echoes POST form data.

pub mod config;
pub mod http;
pub mod logging;
pub mod server;
