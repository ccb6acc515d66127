//! Storage types and file name rules

use serde::Serialize;
use thiserror::Error;

/// Extension accepted for uploads, compared exactly
pub const SOURCE_EXTENSION: &str = "txt";

/// Extension given to converted artifacts
pub const OUTPUT_EXTENSION: &str = "pdf";

/// Which directory an artifact lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    /// Uploaded sources waiting for conversion
    Incoming,
    /// Converted PDFs waiting for download
    Outgoing,
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Area::Incoming => f.write_str("incoming"),
            Area::Outgoing => f.write_str("outgoing"),
        }
    }
}

/// Storage-specific errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid file name: {0:?}")]
    InvalidFileName(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Check that a client-supplied name addresses a file directly inside an area
///
/// Rejects empty names, `.` and `..`, and anything carrying a path separator
/// or NUL byte.
pub fn validate_file_name(name: &str) -> Result<&str, StorageError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);

    if invalid {
        return Err(StorageError::InvalidFileName(name.to_string()));
    }
    Ok(name)
}

/// Split a name at its last dot: `("notes", Some("txt"))`
///
/// A leading dot counts, so `.txt` is an empty stem with extension `txt`.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(dot) => (&name[..dot], Some(&name[dot + 1..])),
        None => (name, None),
    }
}

/// Whether the name carries exactly the accepted source extension
pub fn has_source_extension(name: &str) -> bool {
    split_extension(name).1 == Some(SOURCE_EXTENSION)
}

/// Derive the converted artifact name: `notes.txt` -> `notes.pdf`
pub fn output_file_name(source_name: &str) -> String {
    let (stem, _) = split_extension(source_name);
    format!("{}.{}", stem, OUTPUT_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("notes.txt").is_ok());
        assert!(validate_file_name("my notes (1).txt").is_ok());
        assert!(validate_file_name("..hidden.txt").is_ok());

        for bad in ["", ".", "..", "../etc/passwd", "a/b.txt", "a\\b.txt", "nul\0.txt"] {
            assert!(
                matches!(validate_file_name(bad), Err(StorageError::InvalidFileName(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_extension_is_exact() {
        assert!(has_source_extension("notes.txt"));
        assert!(has_source_extension(".txt"));
        assert!(!has_source_extension("notes.TXT"));
        assert!(!has_source_extension("notes.txt.bak"));
        assert!(!has_source_extension("notes"));
        assert!(!has_source_extension("notes."));
        assert!(!has_source_extension("image.png"));
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("notes.txt"), "notes.pdf");
        assert_eq!(output_file_name("archive.tar.txt"), "archive.tar.pdf");
        assert_eq!(output_file_name(".txt"), ".pdf");
    }
}
