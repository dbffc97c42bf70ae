use fileserve::http::request::{Method, Request};
use std::collections::HashMap;

fn request(version: &str, headers: &[(&str, &str)]) -> Request {
    Request {
        method: Method::GET,
        path: "/".to_string(),
        version: version.to_string(),
        headers: headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    }
}

#[test]
fn test_request_header_lookup_ignores_case() {
    let req = request(
        "HTTP/1.1",
        &[("Host", "localhost:3000"), ("content-type", "text/plain")],
    );

    assert_eq!(req.header("host"), Some("localhost:3000"));
    assert_eq!(req.header("Content-Type"), Some("text/plain"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_keep_alive_http11_default() {
    assert!(request("HTTP/1.1", &[]).keep_alive());
}

#[test]
fn test_request_keep_alive_http10_default_closes() {
    assert!(!request("HTTP/1.0", &[]).keep_alive());
}

#[test]
fn test_request_keep_alive_http10_explicit() {
    assert!(request("HTTP/1.0", &[("Connection", "Keep-Alive")]).keep_alive());
}

#[test]
fn test_request_connection_close() {
    assert!(!request("HTTP/1.1", &[("connection", "Close")]).keep_alive());
}

#[test]
fn test_request_method_from_string() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("HEAD"), Some(Method::HEAD));
    assert_eq!(Method::from_str("BREW"), None);
    assert_eq!(Method::from_str("get"), None); // Case-sensitive
}
