//! Presentation category of a file, guessed from its name.
//!
//! This is purely cosmetic: the renderer never consults it, only sinks that
//! color their output do.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// image/*, audio/* and video/* types
    Media,
    /// application/* types: binaries, archives, documents, scripts
    Executable,
    /// text/* types
    Text,
    Unknown,
}

const MEDIA: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "svg", "webp", "ico", "tif", "tiff", "heic", "avif",
    "mp3", "wav", "flac", "ogg", "oga", "aac", "m4a", "opus", "mid", "midi", "mp4", "mkv", "avi",
    "mov", "webm", "mpeg", "mpg", "wmv", "m4v", "3gp",
];

const EXECUTABLE: &[&str] = &[
    "exe", "dll", "so", "dylib", "bin", "msi", "deb", "rpm", "apk", "jar", "wasm", "o", "a",
    "zip", "gz", "tgz", "bz2", "xz", "zst", "tar", "7z", "rar", "pdf", "doc", "docx", "xls",
    "xlsx", "ppt", "pptx", "odt", "rtf", "json", "js", "mjs", "sh", "bat", "ps1", "xhtml", "wsdl",
    "sqlite", "db", "iso", "dmg",
];

const TEXT: &[&str] = &[
    "txt", "md", "markdown", "rst", "csv", "tsv", "html", "htm", "css", "xml", "ini", "cfg",
    "conf", "log", "toml", "yaml", "yml", "py", "rs", "c", "h", "cc", "cpp", "hpp", "cxx", "java",
    "kt", "go", "rb", "pl", "lua", "ts", "tsx", "jsx", "sql", "tex", "vcf", "ics", "srt", "vtt",
];

/// Guess the presentation category of a file from its name
pub fn classify(name: &str) -> FileCategory {
    let extension = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => return FileCategory::Unknown,
    };
    let extension = extension.as_str();

    if MEDIA.contains(&extension) {
        FileCategory::Media
    } else if EXECUTABLE.contains(&extension) {
        FileCategory::Executable
    } else if TEXT.contains(&extension) {
        FileCategory::Text
    } else {
        FileCategory::Unknown
    }
}
