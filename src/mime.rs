use std::ffi::OsStr;
use std::path::Path;

/// Content type for a file, chosen by its extension.
///
/// Anything outside this table is served as `application/octet-stream`.
/// Matching is on the literal suffix, so `.HTML` is not `.html`.
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(OsStr::to_str) {
        Some("html") => "text/html",
        Some("js") => "text/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") => "image/jpg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("wav") => "audio/wav",
        Some("mp4") => "video/mp4",
        Some("woff") => "application/font-woff",
        Some("ttf") => "application/font-ttf",
        Some("eot") => "application/vnd.ms-fontobject",
        Some("otf") => "application/font-otf",
        Some("wasm") => "application/wasm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(content_type(Path::new("index.html")), "text/html");
        assert_eq!(content_type(Path::new("app.js")), "text/javascript");
        assert_eq!(content_type(Path::new("site.css")), "text/css");
        assert_eq!(content_type(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(content_type(Path::new("photo.jpg")), "image/jpg");
        assert_eq!(content_type(Path::new("module.wasm")), "application/wasm");
    }

    #[test]
    fn unknown_or_missing_extension() {
        assert_eq!(content_type(Path::new("archive.xyz")), "application/octet-stream");
        assert_eq!(content_type(Path::new("README")), "application/octet-stream");
        assert_eq!(content_type(Path::new(".gitignore")), "application/octet-stream");
    }

    #[test]
    fn extension_of_nested_path() {
        assert_eq!(
            content_type(Path::new("assets/fonts/site.woff")),
            "application/font-woff"
        );
    }
}
