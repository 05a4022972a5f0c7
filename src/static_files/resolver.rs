//! Maps request paths onto files under the document root.

use std::path::PathBuf;

use crate::http::response::StatusCode;

/// File served when a request path ends in `/`.
pub const INDEX_FILE: &str = "index.html";

/// A request path joined onto the document root, not yet checked against
/// the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub path: PathBuf,
    /// The path ended in `/` and `index.html` was appended
    pub implicit_index: bool,
}

#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    canonical_root: PathBuf,
}

impl PathResolver {
    /// Creates a resolver for `root`.
    ///
    /// The root is canonicalized once so containment checks compare like
    /// with like. A root that cannot be canonicalized (usually because it
    /// does not exist) is kept as given; every lookup under it then fails.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let canonical_root = match root.canonicalize() {
            Ok(canonical) => canonical,
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "Document root is not accessible");
                root.clone()
            }
        };

        Self { root, canonical_root }
    }

    /// Joins a decoded request path onto the document root.
    ///
    /// Any path containing `/..` is rejected with 404 before touching the
    /// filesystem.
    pub fn resolve(&self, request_path: &str) -> Result<ResolvedPath, StatusCode> {
        if is_traversal(request_path) {
            return Err(StatusCode::NotFound);
        }

        let implicit_index = request_path.ends_with('/');
        let relative = request_path.trim_start_matches('/');

        let path = if implicit_index {
            self.root.join(relative).join(INDEX_FILE)
        } else {
            self.root.join(relative)
        };

        Ok(ResolvedPath { path, implicit_index })
    }

    /// Finds the file a resolved path points at.
    ///
    /// The path is canonicalized and must stay inside the canonical document
    /// root, which also catches symlinks pointing elsewhere. A missing
    /// implicit index is 403, any other missing file 404.
    pub async fn locate(&self, resolved: &ResolvedPath) -> Result<PathBuf, StatusCode> {
        match tokio::fs::canonicalize(&resolved.path).await {
            Ok(canonical) if canonical.starts_with(&self.canonical_root) => Ok(canonical),
            Ok(canonical) => {
                tracing::warn!(
                    requested = %resolved.path.display(),
                    resolved = %canonical.display(),
                    "Path escapes document root"
                );
                Err(StatusCode::NotFound)
            }
            Err(_) if resolved.implicit_index => Err(StatusCode::Forbidden),
            Err(_) => Err(StatusCode::NotFound),
        }
    }
}

/// Lexical traversal guard: true for any path containing `/..`.
pub fn is_traversal(request_path: &str) -> bool {
    request_path.contains("/..")
}
