use std::time::SystemTime;

/// Value of the `Server` header on every response.
pub const SERVER_NAME: &str = "WIMWSOP";

/// Content type sent with every error response.
pub const ERROR_CONTENT_TYPE: &str = "text/html; charset=UTF-8";

/// HTTP status codes the server can emit.
///
/// Besides `Ok` the set is closed to the three errors the server knows how
/// to produce:
/// - `Ok` (200): File served
/// - `Forbidden` (403): Directory without an index file
/// - `NotFound` (404): Missing file or traversal attempt
/// - `MethodNotAllowed` (405): Anything but GET or HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use wimwsop::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the fixed reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, StatusCode::Ok)
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers keep insertion order so the wire output is deterministic.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in the order they will be written
    pub headers: Vec<(String, String)>,
    /// Response body as bytes (empty for HEAD and errors)
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .common_headers()
///     .header("Content-Type", "text/html")
///     .body(b"<h1>hi</h1>".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds or replaces a header.
    ///
    /// Names compare case-insensitively; a replaced header keeps its
    /// original position.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();

        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
            Some(entry) => entry.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Adds the headers carried by every response: `Server`,
    /// `Connection: close` and an RFC 1123 `Date`.
    pub fn common_headers(self) -> Self {
        self.header("Server", SERVER_NAME)
            .header("Connection", "close")
            .header("Date", httpdate::fmt_http_date(SystemTime::now()))
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// Automatically adds the Content-Length header based on body size if not already present.
    pub fn build(self) -> Response {
        let builder = if self.headers.iter().any(|(k, _)| k.eq_ignore_ascii_case("Content-Length")) {
            self
        } else {
            let len = self.body.len().to_string();
            self.header("Content-Length", len)
        };

        Response {
            status: builder.status,
            headers: builder.headers,
            body: builder.body,
        }
    }
}

impl Response {
    /// Creates a 200 OK response for a file's contents.
    ///
    /// `Content-Length` is always the file's length; for HEAD the body is
    /// dropped after the length has been recorded.
    pub fn file(content_type: &str, contents: Vec<u8>, head_only: bool) -> Self {
        let builder = ResponseBuilder::new(StatusCode::Ok)
            .common_headers()
            .header("Content-Type", content_type)
            .header("Content-Length", contents.len().to_string());

        if head_only {
            builder.build()
        } else {
            builder.body(contents).build()
        }
    }

    /// Creates one of the fixed error responses, with no body.
    ///
    /// # Panics
    ///
    /// Panics when given `StatusCode::Ok`; only the error statuses have a
    /// canned response.
    pub fn error(status: StatusCode) -> Self {
        assert!(status.is_error(), "unallowed error code: {}", status.as_u16());

        ResponseBuilder::new(status)
            .common_headers()
            .header("Content-Type", ERROR_CONTENT_TYPE)
            .build()
    }

    /// Looks up a header value by name, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
