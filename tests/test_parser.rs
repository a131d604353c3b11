use tinyhttpd::http::error::ServeError;
use tinyhttpd::http::parser::read_request;
use tinyhttpd::http::request::Method;

#[tokio::test]
async fn test_parse_simple_get_request() {
    let raw = b"GET / HTTP/1.0\r\nHost: example.com\r\n\r\n";
    let mut input: &[u8] = raw;
    let parsed = read_request(&mut input).await.unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.target, "/");
    assert_eq!(parsed.raw.as_bytes(), raw);
}

#[tokio::test]
async fn test_parse_leaves_post_body_unread() {
    let mut input: &[u8] = b"POST /form HTTP/1.0\r\nContent-Length: 7\r\n\r\na=1&b=2";
    let parsed = read_request(&mut input).await.unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.content_length, Some(7));
    assert_eq!(input, b"a=1&b=2");
}

#[tokio::test]
async fn test_parse_multiple_headers() {
    let mut input: &[u8] =
        b"GET /path HTTP/1.0\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = read_request(&mut input).await.unwrap();

    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(parsed.header("User-Agent"), Some("test-client"));
    assert_eq!(parsed.header("Accept"), Some("*/*"));
}

#[tokio::test]
async fn test_parse_incomplete_request_missing_blank_line() {
    let mut input: &[u8] = b"GET / HTTP/1.0\r\nHost: example.com\r\n";
    let result = read_request(&mut input).await;

    assert!(matches!(result, Err(ServeError::MalformedRequest)));
}

#[tokio::test]
async fn test_parse_empty_stream() {
    let mut input: &[u8] = b"";
    let result = read_request(&mut input).await;

    assert!(matches!(result, Err(ServeError::MalformedRequest)));
}

#[tokio::test]
async fn test_parse_bare_newline_is_not_terminator() {
    let mut input: &[u8] = b"GET / HTTP/1.0\n\n";
    let result = read_request(&mut input).await;

    assert!(matches!(result, Err(ServeError::MalformedRequest)));
}

#[tokio::test]
async fn test_parse_unknown_method_still_reads_headers() {
    let mut input: &[u8] = b"OPTIONS * HTTP/1.0\r\n\r\n";
    let parsed = read_request(&mut input).await.unwrap();

    assert_eq!(parsed.method, Method::UNKNOWN);
}

#[tokio::test]
async fn test_parse_from_split_writes() {
    let (mut client, server) = tokio::io::duplex(64);
    let mut reader = tokio::io::BufReader::new(server);

    let writer = tokio::spawn(async move {
        use tokio::io::AsyncWriteExt;
        client.write_all(b"HEAD /a.png HT").await.unwrap();
        client.write_all(b"TP/1.0\r\nHost: x\r").await.unwrap();
        client.write_all(b"\n\r\n").await.unwrap();
        client
    });

    let parsed = read_request(&mut reader).await.unwrap();
    let _client = writer.await.unwrap();

    assert_eq!(parsed.method, Method::HEAD);
    assert_eq!(parsed.target, "/a.png");
}
