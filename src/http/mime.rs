use std::path::Path;

/// Content type used for unknown or missing extensions.
pub const DEFAULT_CONTENT_TYPE: &str = "text/txt";

/// Maps a file's extension to the MIME type sent in `Content-Type`.
pub fn content_type(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return DEFAULT_CONTENT_TYPE;
    };

    match ext.to_ascii_lowercase().as_str() {
        "txt" => "text/txt",
        "html" => "text/html",
        "css" => "text/css",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "js" => "application/javascript",
        "swf" => "application/x-shockwave-flash",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
