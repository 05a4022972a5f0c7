use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace was received
    Empty,
    /// The first line did not split into exactly method, path and version
    InvalidRequestLine,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty request"),
            ParseError::InvalidRequestLine => f.write_str("malformed request line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses the request head from `buf`.
///
/// Only bytes before the first blank line are looked at. When no blank line
/// is present (the read was truncated or the client stopped early) the whole
/// buffer is treated as the head.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let head_bytes = match find_headers_end(buf) {
        Some(end) => &buf[..end],
        None => buf,
    };

    let head = String::from_utf8_lossy(head_bytes);
    if head.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut lines = head.lines();

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let parts: Vec<&str> = request_line.split_whitespace().collect();
    let [method, raw_path, version] = parts[..] else {
        return Err(ParseError::InvalidRequestLine);
    };

    // Headers are kept but never rejected
    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect();

    Ok(Request {
        method: Method::parse(method),
        path: decode_path(raw_path),
        version: version.to_string(),
        headers,
    })
}

/// Percent-decodes the raw path, then cuts the query string.
///
/// Decoding comes first, so an encoded `%3F` also starts the query.
pub fn decode_path(raw: &str) -> String {
    let decoded = urlencoding::decode_binary(raw.as_bytes());
    let decoded = String::from_utf8_lossy(&decoded);

    match decoded.split_once('?') {
        Some((path, _query)) => path.to_string(),
        None => decoded.into_owned(),
    }
}

/// True once `buf` holds enough to answer: a complete request line, or a
/// blank line ending the head.
///
/// Both CRLF and bare LF count as line ends, so clients that only send the
/// request line (or terminate it with `\n`) are served without waiting for
/// more bytes.
pub fn head_ready(buf: &[u8]) -> bool {
    if find_headers_end(buf).is_some() {
        return true;
    }

    let mut line_start = 0;
    for (i, &b) in buf.iter().enumerate() {
        if b == b'\n' {
            if buf[line_start..i].iter().any(|c| !c.is_ascii_whitespace()) {
                return true;
            }
            line_start = i + 1;
        }
    }
    false
}

/// Offset of the blank line ending the head, CRLF or bare LF.
fn find_headers_end(buf: &[u8]) -> Option<usize> {
    let crlf = buf.windows(4).position(|w| w == b"\r\n\r\n");
    let lf = buf.windows(2).position(|w| w == b"\n\n");

    match (crlf, lf) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
