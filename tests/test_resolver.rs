use std::collections::HashMap;
use std::path::PathBuf;

use wimwsop::http::request::{Method, Request};
use wimwsop::http::response::StatusCode;
use wimwsop::static_files::resolver::{PathResolver, is_traversal};
use wimwsop::static_files::StaticFiles;

/// Creates a fresh document root under the system temp dir.
fn scratch_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("wimwsop-resolver-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(root.join("sub")).unwrap();
    std::fs::create_dir_all(root.join("docs")).unwrap();
    std::fs::write(root.join("index.html"), "<h1>home</h1>").unwrap();
    std::fs::write(root.join("docs/index.html"), "<h1>docs</h1>").unwrap();
    std::fs::write(root.join("a b.txt"), "spaced").unwrap();
    root
}

fn request(method: Method, path: &str) -> Request {
    Request {
        method,
        path: path.to_string(),
        version: "HTTP/1.1".to_string(),
        headers: HashMap::new(),
    }
}

#[test]
fn test_traversal_guard_is_a_substring_check() {
    assert!(is_traversal("/../../etc/passwd"));
    assert!(is_traversal("/a/../b"));
    assert!(is_traversal("/a/..b"));
    assert!(!is_traversal("/a..b/c"));
    assert!(!is_traversal("/index.html"));
}

#[test]
fn test_resolve_appends_index_for_trailing_slash() {
    let resolver = PathResolver::new("/srv/www");

    let resolved = resolver.resolve("/docs/").unwrap();
    assert_eq!(resolved.path, PathBuf::from("/srv/www/docs/index.html"));
    assert!(resolved.implicit_index);

    let resolved = resolver.resolve("/").unwrap();
    assert_eq!(resolved.path, PathBuf::from("/srv/www/index.html"));
}

#[test]
fn test_resolve_plain_file() {
    let resolver = PathResolver::new("/srv/www");

    let resolved = resolver.resolve("/css/site.css").unwrap();
    assert_eq!(resolved.path, PathBuf::from("/srv/www/css/site.css"));
    assert!(!resolved.implicit_index);
}

#[test]
fn test_resolve_rejects_traversal() {
    let resolver = PathResolver::new("/srv/www");

    assert_eq!(resolver.resolve("/../../etc/passwd"), Err(StatusCode::NotFound));
    assert_eq!(resolver.resolve("/a/../b"), Err(StatusCode::NotFound));
}

#[tokio::test]
async fn test_locate_existing_and_missing() {
    let root = scratch_root("locate");
    let resolver = PathResolver::new(&root);

    let found = resolver.locate(&resolver.resolve("/a b.txt").unwrap()).await.unwrap();
    assert!(found.ends_with("a b.txt"));

    let missing = resolver.resolve("/missing.txt").unwrap();
    assert_eq!(resolver.locate(&missing).await, Err(StatusCode::NotFound));

    let no_index = resolver.resolve("/sub/").unwrap();
    assert_eq!(resolver.locate(&no_index).await, Err(StatusCode::Forbidden));

    let with_index = resolver.resolve("/docs/").unwrap();
    assert!(resolver.locate(&with_index).await.is_ok());
}

#[cfg(unix)]
#[tokio::test]
async fn test_locate_rejects_symlink_escape() {
    let root = scratch_root("symlink");
    let outside = std::env::temp_dir().join(format!("wimwsop-outside-{}.txt", std::process::id()));
    std::fs::write(&outside, "secret").unwrap();
    std::os::unix::fs::symlink(&outside, root.join("leak.txt")).unwrap();

    let resolver = PathResolver::new(&root);
    let resolved = resolver.resolve("/leak.txt").unwrap();
    assert_eq!(resolver.locate(&resolved).await, Err(StatusCode::NotFound));
}

#[tokio::test]
async fn test_respond_orders_checks() {
    let root = scratch_root("respond");
    let files = StaticFiles::new(&root);

    // traversal wins over the method check
    let res = files.respond(&request(Method::Other("POST".into()), "/../etc/passwd")).await;
    assert_eq!(res.status, StatusCode::NotFound);

    // method check comes before the filesystem
    let res = files.respond(&request(Method::Other("POST".into()), "/sub/")).await;
    assert_eq!(res.status, StatusCode::MethodNotAllowed);

    let res = files.respond(&request(Method::GET, "/sub/")).await;
    assert_eq!(res.status, StatusCode::Forbidden);

    let res = files.respond(&request(Method::GET, "/sub")).await;
    assert_eq!(res.status, StatusCode::NotFound);

    let res = files.respond(&request(Method::GET, "/")).await;
    assert_eq!(res.status, StatusCode::Ok);
    assert_eq!(res.body, b"<h1>home</h1>".to_vec());
    assert_eq!(res.header("Content-Type"), Some("text/html"));
}
