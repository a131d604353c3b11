use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tinyhttpd::http::response::{ResponseBuilder, ResponseHeader, StatusCode, SERVER_NAME};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_lines_use_slash_separator() {
    assert_eq!(StatusCode::Ok.status_line(), "HTTP/1.0 200/OK");
    assert_eq!(StatusCode::NotFound.status_line(), "HTTP/1.0 404/Object Not Found");
    assert_eq!(
        StatusCode::InternalServerError.status_line(),
        "HTTP/1.0 500/Internal Server Error"
    );
}

#[test]
fn test_not_found_header_wire_format() {
    let header = ResponseHeader::not_found();

    assert_eq!(
        header.to_string(),
        format!("HTTP/1.0 404/Object Not Found\r\nServer: {}\r\n\r\n", SERVER_NAME)
    );
}

#[test]
fn test_internal_error_header_wire_format() {
    let header = ResponseHeader::internal_error();

    assert_eq!(
        header.to_string(),
        "HTTP/1.0 500/Internal Server Error\r\nServer: My Server\r\n\r\n"
    );
}

#[test]
fn test_file_header_wire_format() {
    let when = UNIX_EPOCH + Duration::from_secs(784_111_777);
    let header = ResponseBuilder::new(StatusCode::Ok)
        .date(when)
        .last_modified(when)
        .content_type("image/png")
        .content_length(1234)
        .build();

    assert_eq!(
        header.to_string(),
        "HTTP/1.0 200/OK\r\n\
         Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n\
         Server: My Server\r\n\
         Last-Modified: Sun, 06 Nov 1994 08:49:37 GMT\r\n\
         Content-Type: image/png\r\n\
         Content-Length: 1234\r\n\
         \r\n"
    );
}

#[test]
fn test_form_echo_header_has_no_entity_fields() {
    let header = ResponseHeader::form_echo();
    let wire = header.to_string();

    assert_eq!(header.status, StatusCode::Ok);
    assert!(wire.starts_with("HTTP/1.0 200/OK\r\nDate: "));
    assert!(wire.ends_with("Server: My Server\r\n\r\n"));
    assert!(!wire.contains("Content-Type"));
    assert!(!wire.contains("Content-Length"));
}

#[test]
fn test_file_helper_sets_every_field() {
    let modified = SystemTime::now();
    let header = ResponseHeader::file(modified, "text/css", 10);

    assert_eq!(header.status, StatusCode::Ok);
    assert!(header.date.is_some());
    assert_eq!(header.last_modified, Some(modified));
    assert_eq!(header.content_type, Some("text/css"));
    assert_eq!(header.content_length, Some(10));
}

#[test]
fn test_response_builder_empty() {
    let header = ResponseBuilder::new(StatusCode::NotFound).build();

    assert_eq!(header, ResponseHeader::not_found());
}
