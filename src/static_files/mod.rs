//! Static file serving
//!
//! Turns a parsed request into a response: resolve the path, dispatch on the
//! method, locate the file and read it.

pub mod resolver;

pub use resolver::{PathResolver, ResolvedPath};

use std::path::PathBuf;

use crate::http::mime;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};

/// Serves files from one document root.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    resolver: PathResolver,
}

impl StaticFiles {
    pub fn new(document_root: impl Into<PathBuf>) -> Self {
        Self {
            resolver: PathResolver::new(document_root),
        }
    }

    /// Produces the response for `request`.
    ///
    /// Order matters: traversal attempts are 404 whatever the method, then
    /// unsupported methods are 405 before the filesystem is consulted.
    pub async fn respond(&self, request: &Request) -> Response {
        let resolved = match self.resolver.resolve(&request.path) {
            Ok(resolved) => resolved,
            Err(status) => return Response::error(status),
        };

        let head_only = match request.method {
            Method::GET => false,
            Method::HEAD => true,
            Method::Other(_) => return Response::error(StatusCode::MethodNotAllowed),
        };

        let path = match self.resolver.locate(&resolved).await {
            Ok(path) => path,
            Err(status) => return Response::error(status),
        };

        match tokio::fs::read(&path).await {
            Ok(contents) => Response::file(mime::content_type(&resolved.path), contents, head_only),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Could not read file");
                Response::error(StatusCode::NotFound)
            }
        }
    }
}
