//! Content-type resolution for resource names.
//!
//! Maps a file-name extension to a MIME type. Extensions not in the explicit
//! table fall back to `mime_guess`, and anything still unknown resolves to
//! `text/html` — the historical default of this server, kept for
//! compatibility with existing pod clients.

/// Resolve the `Content-Type` for a resource name from its extension.
pub fn resolve(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        // Text
        Some("html" | "htm") => "text/html",
        Some("txt") => "text/plain",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",

        // Linked data and notes
        Some("ttl") => "text/turtle",
        Some("jsonld") => "application/ld+json",
        Some("md") => "text/markdown",
        // Mind-map documents are stored as JSON
        Some("mm") => "application/json",

        // Images
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Audio
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg") => "audio/ogg",
        Some("m4a") => "audio/mp4",
        Some("flac") => "audio/flac",

        // Video
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("ogv") => "video/ogg",
        Some("mov") => "video/quicktime",
        Some("avi") => "video/x-msvideo",

        _ => mime_guess::from_path(name).first_raw().unwrap_or("text/html"),
    }
}
