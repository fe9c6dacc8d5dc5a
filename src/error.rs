//! Error taxonomy for font ingestion and export.
//!
//! None of these escape the library store: ingestion errors are folded into
//! notifications and batch counts, export errors are surfaced as toasts.

use std::io;

use thiserror::Error;

/// Why a single file (or archive) did not make it into the library.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Neither a recognized font nor a zip archive.
    #[error("\"{name}\" is not a .ttf or .otf font")]
    InvalidFileType { name: String },

    /// Derived font name collides with a font already in the library.
    #[error("a font named \"{name}\" already exists")]
    DuplicateFontName { name: String },

    /// Zip archive could not be opened.
    #[error("failed to open archive \"{name}\": {source}")]
    ArchiveParse {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// File contents could not be read from disk or from an archive entry.
    #[error("failed to read \"{name}\": {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl IngestError {
    /// Whether this error is tallied in the aggregated "invalid files" count.
    ///
    /// Duplicates are reported individually and archive failures get their
    /// own notification, but both still resolve the input unit.
    pub fn counts_as_invalid(&self) -> bool {
        !matches!(self, IngestError::DuplicateFontName { .. })
    }
}

/// Failure while writing a font payload to its download destination.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("destination {0} has no parent directory")]
    NoParent(String),

    #[error("failed to stage download: {0}")]
    Io(#[from] io::Error),

    #[error("failed to save download: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_is_not_invalid() {
        let dup = IngestError::DuplicateFontName { name: "Foo".into() };
        assert!(!dup.counts_as_invalid());

        let bad = IngestError::InvalidFileType { name: "notes.txt".into() };
        assert!(bad.counts_as_invalid());
    }

    #[test]
    fn test_error_messages_name_the_file() {
        let err = IngestError::Read {
            name: "Foo.ttf".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("Foo.ttf"));
    }
}
