use crate::http::request::{Method, Request};
use std::collections::HashMap;
use std::fmt;

/// Upper bound on the request line plus headers.
pub const MAX_HEADER_BYTES: usize = 64 * 1024;

/// Upper bound on a declared request body. Bodies are skipped, never served.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    InvalidContentLength,
    UnsupportedTransferEncoding,
    HeadersTooLarge,
    BodyTooLarge,
    Incomplete,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::InvalidRequest => "malformed request line",
            ParseError::InvalidMethod => "unknown method",
            ParseError::InvalidHeader => "malformed header",
            ParseError::InvalidContentLength => "invalid Content-Length",
            ParseError::UnsupportedTransferEncoding => "Transfer-Encoding not supported",
            ParseError::HeadersTooLarge => "request headers too large",
            ParseError::BodyTooLarge => "request body too large",
            ParseError::Incomplete => "incomplete request",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ParseError {}

/// Parses one request from the front of `buf`.
///
/// Returns the request and the number of bytes it occupied (body included),
/// or `ParseError::Incomplete` if more data is needed. The body is framed by
/// a single `Content-Length`; any `Transfer-Encoding` is rejected.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for header/body separator
    let Some(headers_end) = find_headers_end(buf) else {
        if buf.len() > MAX_HEADER_BYTES {
            return Err(ParseError::HeadersTooLarge);
        }
        return Err(ParseError::Incomplete);
    };
    if headers_end > MAX_HEADER_BYTES {
        return Err(ParseError::HeadersTooLarge);
    }

    let header_bytes = &buf[..headers_end];
    let body_len = buf.len() - (headers_end + 4);

    let headers_str = std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = headers_str.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    if parts.next().is_some() || !version.starts_with("HTTP/") {
        return Err(ParseError::InvalidRequest);
    }

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = HashMap::new();
    let mut content_length: Option<usize> = None;

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
        let (key, value) = (key.trim(), value.trim());

        if key.eq_ignore_ascii_case("Transfer-Encoding") {
            return Err(ParseError::UnsupportedTransferEncoding);
        }

        if key.eq_ignore_ascii_case("Content-Length") {
            // Repeats would make the request boundary ambiguous
            if content_length.is_some() {
                return Err(ParseError::InvalidContentLength);
            }
            let len = value
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength)?;
            content_length = Some(len);
        }

        headers.insert(key.to_string(), value.to_string());
    }

    // Body
    let content_length = content_length.unwrap_or(0);

    if content_length > MAX_BODY_BYTES {
        return Err(ParseError::BodyTooLarge);
    }

    if body_len < content_length {
        return Err(ParseError::Incomplete);
    }

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n";

        let (parsed, consumed) = parse_http_request(req).unwrap();

        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.headers.get("Host").unwrap(), "localhost");
        assert_eq!(consumed, req.len());
    }

    #[test]
    fn oversized_headers_rejected() {
        let mut req = b"GET / HTTP/1.1\r\nX-Fill: ".to_vec();
        req.resize(MAX_HEADER_BYTES + 1, b'a');

        assert_eq!(
            parse_http_request(&req).unwrap_err(),
            ParseError::HeadersTooLarge
        );
    }
}
