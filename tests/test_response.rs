use fileserve::http::response::{Response, ResponseBuilder, StatusCode};
use fileserve::http::writer::ResponseWriter;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
}

#[test]
fn test_response_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(body.clone())
        .build();

    let content_length = response.headers.get("Content-Length").unwrap();
    assert_eq!(content_length, &body.len().to_string());
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.headers.get("Content-Length").unwrap(), "999");
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();

    assert!(response.body.is_empty());
    assert_eq!(response.headers.get("Content-Length").unwrap(), "0");
}

#[test]
fn test_response_html_helper() {
    let response = Response::html(b"<h1>Hi</h1>".to_vec());

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type(), Some("text/html"));
    assert_eq!(response.body, b"<h1>Hi</h1>".to_vec());
}

#[test]
fn test_response_text_helper() {
    let response = Response::text("File does not exist /x");

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type(), Some("text/plain"));
    assert_eq!(response.headers.get("Content-Length").unwrap(), "22");
}

#[test]
fn test_response_bad_request_helper() {
    let response = Response::bad_request();

    assert_eq!(response.status, StatusCode::BadRequest);
    assert_eq!(response.body, b"400 Bad Request".to_vec());
}

#[test]
fn test_writer_serializes_status_headers_and_body() {
    let writer = ResponseWriter::new(&Response::text("hello"), true);
    let wire = String::from_utf8(writer.as_bytes().to_vec()).unwrap();

    assert_eq!(
        wire,
        "HTTP/1.1 200 OK\r\n\
         Content-Length: 5\r\n\
         Content-Type: text/plain\r\n\
         Connection: keep-alive\r\n\
         \r\n\
         hello"
    );
}

#[test]
fn test_writer_announces_close() {
    let writer = ResponseWriter::new(&Response::bad_request(), false);
    let wire = String::from_utf8(writer.as_bytes().to_vec()).unwrap();

    assert!(wire.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    assert!(wire.contains("Connection: close\r\n"));
    assert!(wire.ends_with("\r\n\r\n400 Bad Request"));
}

#[test]
fn test_head_writer_keeps_length_drops_body() {
    let writer = ResponseWriter::head(&Response::html(b"<h1>Hi</h1>".to_vec()), true);
    let wire = String::from_utf8(writer.as_bytes().to_vec()).unwrap();

    assert!(wire.contains("Content-Length: 11\r\n"));
    assert!(wire.ends_with("Connection: keep-alive\r\n\r\n"));
    assert!(!wire.contains("<h1>"));
}

#[tokio::test]
async fn test_writer_writes_binary_body_to_stream() {
    let body = vec![0u8, 159, 146, 150, 255];
    let mut writer = ResponseWriter::new(&Response::html(body.clone()), true);

    let mut out: Vec<u8> = Vec::new();
    writer.write_to_stream(&mut out).await.unwrap();

    assert!(out.ends_with(&body));
    assert_eq!(out, writer.as_bytes());
}
