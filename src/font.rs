//! Font data model: ingested fonts, their payloads, and incoming source files.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

use base64::Engine;
use chrono::{DateTime, Utc};

use crate::validation;

/// Original binary payload of a font, kept around for downloads.
#[derive(Debug, Clone, PartialEq)]
pub struct FontFile {
    pub name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

/// One ingested, usable font.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// `"{file name}-{last modified ms}"`, unique within the library.
    pub id: String,
    /// File name without its font extension; doubles as the font-family name.
    pub name: String,
    pub file: FontFile,
    /// Self-contained `data:` URI of the payload, usable as a stylesheet `src`.
    pub source_data: String,
}

impl Font {
    /// Build a font from a validated payload, encoding its data URI.
    pub fn new(name: String, file: FontFile, last_modified: i64) -> Self {
        let id = font_id(&file.name, last_modified);
        let source_data = data_uri(&file.mime, &file.bytes);
        Self {
            id,
            name,
            file,
            source_data,
        }
    }
}

/// Where the bytes of an incoming file live.
#[derive(Debug, Clone)]
pub enum SourceContent {
    /// Bytes already in memory (e.g. dropped with contents).
    Bytes(Arc<[u8]>),
    /// A path to read asynchronously when the batch runs.
    Path(PathBuf),
}

/// One raw file handed to [`crate::library::FontLibrary::add_fonts`].
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    /// Milliseconds since the Unix epoch.
    pub last_modified: i64,
    /// Declared mime type; may be empty.
    pub mime: String,
    pub content: SourceContent,
}

impl SourceFile {
    pub fn from_bytes(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            last_modified: Utc::now().timestamp_millis(),
            mime: mime.into(),
            content: SourceContent::Bytes(bytes.into()),
        }
    }

    /// Describe a file on disk; contents are read later by the backend.
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let last_modified = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .map(epoch_millis)
            .unwrap_or_else(|_| Utc::now().timestamp_millis());
        Self {
            name,
            last_modified,
            mime: String::new(),
            content: SourceContent::Path(path),
        }
    }

    pub fn with_last_modified(mut self, last_modified: i64) -> Self {
        self.last_modified = last_modified;
        self
    }

    /// Load the payload, reading from disk if needed.
    pub async fn read(&self) -> std::io::Result<Arc<[u8]>> {
        match &self.content {
            SourceContent::Bytes(bytes) => Ok(Arc::clone(bytes)),
            SourceContent::Path(path) => Ok(tokio::fs::read(path).await?.into()),
        }
    }
}

pub fn font_id(file_name: &str, last_modified: i64) -> String {
    format!("{}-{}", file_name, last_modified)
}

/// Encode a payload as a `data:` URI.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    let engine = base64::engine::general_purpose::STANDARD;
    format!("data:{};base64,{}", mime, engine.encode(bytes))
}

pub fn epoch_millis(time: SystemTime) -> i64 {
    DateTime::<Utc>::from(time).timestamp_millis()
}

/// Build the [`FontFile`] for an accepted candidate.
pub(crate) fn font_file(name: &str, declared_mime: &str, bytes: Arc<[u8]>) -> FontFile {
    FontFile {
        name: name.to_string(),
        mime: validation::mime_for_font(name, declared_mime),
        bytes,
    }
}
