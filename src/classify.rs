//! Name-based text detection.
//!
//! A file counts as text when its extension is on a fixed allow-list, or when
//! the content type guessed from its name is a `text/*` type. File contents are
//! never inspected.

use std::path::Path;

/// Extensions (lowercase, with the leading dot) that are always treated as text.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".java", ".cpp", ".c", ".h", ".cs", ".php", ".rb", ".swift", ".kt", ".go", ".rs",
    ".ts", ".html", ".css", ".sql", ".sh", ".bat", ".ps1", ".txt", ".md", ".json", ".xml",
    ".yaml", ".yml", ".ini", ".conf", ".cfg", ".tsx",
];

/// Why a path was accepted or rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The extension is on [`ALLOWED_EXTENSIONS`].
    AllowListed,
    /// The guessed content type is a `text/*` type; holds the guessed type.
    TextMime(String),
    Rejected,
}

impl Classification {
    pub fn is_text(&self) -> bool {
        !matches!(self, Classification::Rejected)
    }
}

/// Returns the lowercase extension of the file name, dot included.
///
/// Returns an empty string when the name has no extension. A name that only
/// starts with a dot (`.bashrc`) has none.
pub fn extension_of(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

pub fn classify(path: impl AsRef<Path>) -> Classification {
    let path = path.as_ref();
    let ext = extension_of(path);
    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Classification::AllowListed;
    }
    match mime_guess::from_path(path).first_raw() {
        Some(mime) if mime.starts_with("text/") => Classification::TextMime(mime.to_string()),
        _ => Classification::Rejected,
    }
}

/// Returns `true` if the file should be bundled as text.
pub fn is_text_file(path: impl AsRef<Path>) -> bool {
    classify(path).is_text()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased_with_dot() {
        assert_eq!(extension_of("src/Main.RS"), ".rs");
        assert_eq!(extension_of("./a/b.tar.GZ"), ".gz");
        assert_eq!(extension_of("Makefile"), "");
        assert_eq!(extension_of(".bashrc"), "");
    }

    #[test]
    fn allow_list_wins_over_mime_guess() {
        assert_eq!(classify("index.ts"), Classification::AllowListed);
        assert_eq!(classify("SCRIPT.PY"), Classification::AllowListed);
    }

    #[test]
    fn falls_back_to_text_mime() {
        match classify("data.csv") {
            Classification::TextMime(mime) => assert_eq!(mime, "text/csv"),
            other => panic!("expected text mime, got {other:?}"),
        }
    }

    #[test]
    fn rejects_binary_and_unknown() {
        assert_eq!(classify("logo.png"), Classification::Rejected);
        assert_eq!(classify("setup.exe"), Classification::Rejected);
        assert_eq!(classify("LICENSE"), Classification::Rejected);
    }
}
