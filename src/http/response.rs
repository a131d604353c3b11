use std::fmt;
use std::time::SystemTime;

/// Value of the `Server` header on every response.
pub const SERVER_NAME: &str = "My Server";

const HTTP_VERSION: &str = "HTTP/1.0";

/// HTTP status codes the server produces.
///
/// - `Ok` (200): file served or form echoed
/// - `NotFound` (404): target file does not exist
/// - `InternalServerError` (500): request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Object Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Object Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// Status line as sent on the wire. Code and reason are separated by `/`,
    /// which existing clients of this server expect.
    ///
    /// ```
    /// # use tinyhttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::NotFound.status_line(), "HTTP/1.0 404/Object Not Found");
    /// ```
    pub fn status_line(&self) -> String {
        format!("{} {}/{}", HTTP_VERSION, self.as_u16(), self.reason_phrase())
    }
}

/// Header block of one response.
///
/// Optional fields are left out of the serialized form when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeader {
    pub status: StatusCode,
    pub date: Option<SystemTime>,
    pub last_modified: Option<SystemTime>,
    pub content_type: Option<&'static str>,
    pub content_length: Option<u64>,
}

/// Builder for [`ResponseHeader`] in a fluent style.
///
/// # Example
///
/// ```ignore
/// let header = ResponseBuilder::new(StatusCode::Ok)
///     .date(SystemTime::now())
///     .content_type("text/css")
///     .content_length(42)
///     .build();
/// ```
pub struct ResponseBuilder {
    header: ResponseHeader,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            header: ResponseHeader {
                status,
                date: None,
                last_modified: None,
                content_type: None,
                content_length: None,
            },
        }
    }

    pub fn date(mut self, date: SystemTime) -> Self {
        self.header.date = Some(date);
        self
    }

    pub fn last_modified(mut self, modified: SystemTime) -> Self {
        self.header.last_modified = Some(modified);
        self
    }

    pub fn content_type(mut self, content_type: &'static str) -> Self {
        self.header.content_type = Some(content_type);
        self
    }

    pub fn content_length(mut self, length: u64) -> Self {
        self.header.content_length = Some(length);
        self
    }

    pub fn build(self) -> ResponseHeader {
        self.header
    }
}

impl ResponseHeader {
    /// 200 header for a served file.
    pub fn file(
        modified: SystemTime,
        content_type: &'static str,
        length: u64,
    ) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .date(SystemTime::now())
            .last_modified(modified)
            .content_type(content_type)
            .content_length(length)
            .build()
    }

    /// 200 header for a POST echo: status, Date and Server only.
    pub fn form_echo() -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .date(SystemTime::now())
            .build()
    }

    /// 404 header: status and Server only.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound).build()
    }

    /// 500 header: status and Server only.
    pub fn internal_error() -> Self {
        ResponseBuilder::new(StatusCode::InternalServerError).build()
    }
}

/// CRLF-joined header lines followed by the blank line.
impl fmt::Display for ResponseHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\r\n", self.status.status_line())?;
        if let Some(date) = self.date {
            write!(f, "Date: {}\r\n", httpdate::fmt_http_date(date))?;
        }
        write!(f, "Server: {}\r\n", SERVER_NAME)?;
        if let Some(modified) = self.last_modified {
            write!(f, "Last-Modified: {}\r\n", httpdate::fmt_http_date(modified))?;
        }
        if let Some(content_type) = self.content_type {
            write!(f, "Content-Type: {}\r\n", content_type)?;
        }
        if let Some(length) = self.content_length {
            write!(f, "Content-Length: {}\r\n", length)?;
        }
        f.write_str("\r\n")
    }
}
