use std::collections::HashMap;

/// HTTP request methods.
///
/// Only GET and HEAD are served; every other method is carried as `Other`
/// and answered with 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a file
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// Any other token from the request line, kept verbatim for logging
    Other(String),
}

impl Method {
    /// Parses an HTTP method from its request-line token.
    ///
    /// Matching is case-sensitive, so `get` is `Other("get")`.
    ///
    /// # Example
    ///
    /// ```
    /// # use wimwsop::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("POST"), Method::Other("POST".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::Other(s) => s,
        }
    }
}

/// Represents a parsed HTTP request head.
///
/// `path` is already percent-decoded with any query string removed.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// Decoded request path (e.g., "/a b.txt")
    pub path: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
    /// Request headers as key-value pairs, not interpreted by the server
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Retrieves a header value by name, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
