//! Content-Type lookup by file extension.

use std::path::Path;

/// Fallback for every extension not listed below, `.htm`/`.html` included.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Returns the MIME type for `path`, matching the extension case-sensitively.
pub fn content_type_for(path: impl AsRef<Path>) -> &'static str {
    match path.as_ref().extension().and_then(|ext| ext.to_str()) {
        Some("css") => "text/css",
        Some("jpeg") | Some("jpg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
