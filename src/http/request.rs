/// HTTP request methods.
///
/// Only GET, HEAD and POST are served. Anything else is `UNKNOWN` and gets
/// no response at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a file
    GET,
    /// HEAD - Like GET but without the file body
    HEAD,
    /// POST - Submit form data to be echoed back
    POST,
    /// Any other request line
    UNKNOWN,
}

impl Method {
    /// Parses an HTTP method token.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttpd::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Method::GET);
    /// assert_eq!(Method::from_str("get"), Method::UNKNOWN);
    /// ```
    pub fn from_str(s: &str) -> Self {
        match s {
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "GET" => Method::GET,
            _ => Method::UNKNOWN,
        }
    }
}

/// A request as read off the wire: the raw header block plus the few
/// fields the handlers need.
///
/// Built once per connection and never modified.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, HEAD, POST or UNKNOWN)
    pub method: Method,
    /// Request line and headers exactly as received, blank line included
    pub raw: String,
    /// Path between the method and ` HTTP`, verbatim (empty for UNKNOWN)
    pub target: String,
    /// Value of the Content-Length header, if present and numeric
    pub content_length: Option<usize>,
}

impl Request {
    /// Extracts method, target and Content-Length from a raw header block.
    ///
    /// The method must be the first token of the request line and the rest of
    /// the line must contain ` HTTP`; the target is everything in between.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();

        let (method, target) = split_request_line(request_line(&raw))
            .map(|(m, t)| (m, t.to_string()))
            .unwrap_or((Method::UNKNOWN, String::new()));

        let content_length = header_value(&raw, "Content-Length").and_then(leading_number);

        Self {
            method,
            raw,
            target,
            content_length,
        }
    }

    /// The first line of the request, without its line terminator.
    pub fn request_line(&self) -> &str {
        request_line(&self.raw)
    }

    /// Retrieves a header value by exact (case-sensitive) name.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the trimmed header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        header_value(&self.raw, key)
    }

    /// Number of body bytes to read for a POST.
    ///
    /// Returns 0 if the header is missing or not a valid number.
    pub fn body_length(&self) -> usize {
        self.content_length.unwrap_or(0)
    }
}

fn request_line(raw: &str) -> &str {
    raw.split('\n')
        .next()
        .unwrap_or("")
        .trim_end_matches('\r')
}

fn split_request_line(line: &str) -> Option<(Method, &str)> {
    let (token, rest) = line.split_once(' ')?;
    let method = Method::from_str(token);
    if method == Method::UNKNOWN {
        return None;
    }
    let end = rest.find(" HTTP")?;
    Some((method, &rest[..end]))
}

fn header_value<'a>(raw: &'a str, key: &str) -> Option<&'a str> {
    raw.split("\r\n").skip(1).find_map(|line| {
        let (name, value) = line.split_once(':')?;
        (name == key).then(|| value.trim())
    })
}

/// Integer made of the leading ASCII digits of `value`, like `"12abc"` → 12.
fn leading_number(value: &str) -> Option<usize> {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
