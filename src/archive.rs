//! Zip archive expansion.

use std::io::{self, Cursor, Read};
use std::sync::Arc;

use zip::ZipArchive;

use crate::error::IngestError;
use crate::validation;

/// A font-named file pulled out of an archive.
#[derive(Debug, Clone)]
pub struct ExtractedFile {
    /// Final path component of the entry. Folders inside the archive are
    /// dropped: `Family/Bold.ttf` arrives as `Bold.ttf`, so the font is
    /// named `Bold`, not `Family/Bold`.
    pub name: String,
    pub bytes: Arc<[u8]>,
}

/// Result of walking one archive.
#[derive(Debug, Default)]
pub struct Expansion {
    pub fonts: Vec<ExtractedFile>,
    /// Entries that are neither fonts nor directories, or failed to read.
    pub rejected: Vec<IngestError>,
}

/// Largest decompressed entry accepted. Sizes declared by the archive are
/// never trusted; reads stop at this bound.
pub const MAX_ENTRY_BYTES: u64 = 32 * 1024 * 1024;

/// Open `bytes` as a zip archive and pull out every `.ttf`/`.otf` entry.
///
/// Returns `Err` only when the archive itself cannot be opened; per-entry
/// problems land in [`Expansion::rejected`].
pub fn expand(archive_name: &str, bytes: &[u8]) -> Result<Expansion, IngestError> {
    expand_with_limit(archive_name, bytes, MAX_ENTRY_BYTES)
}

fn expand_with_limit(
    archive_name: &str,
    bytes: &[u8],
    entry_limit: u64,
) -> Result<Expansion, IngestError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|source| IngestError::ArchiveParse {
            name: archive_name.to_string(),
            source,
        })?;

    let mut expansion = Expansion::default();
    for i in 0..archive.len() {
        let mut entry = match archive.by_index(i) {
            Ok(entry) => entry,
            Err(e) => {
                expansion.rejected.push(IngestError::Read {
                    name: format!("{}#{}", archive_name, i),
                    source: e.into(),
                });
                continue;
            }
        };
        if entry.is_dir() {
            continue;
        }
        let entry_path = entry.name().to_string();
        // AppleDouble resource forks; not real files.
        if entry_path.starts_with("__MACOSX/") {
            continue;
        }
        let name = base_name(&entry_path).to_string();

        if !validation::has_font_extension(&name) {
            expansion
                .rejected
                .push(IngestError::InvalidFileType { name: entry_path });
            continue;
        }

        match read_entry(&mut entry, entry_limit) {
            Ok(buf) => expansion.fonts.push(ExtractedFile {
                name,
                bytes: buf.into(),
            }),
            Err(source) => expansion.rejected.push(IngestError::Read {
                name: entry_path,
                source,
            }),
        }
    }
    Ok(expansion)
}

/// Read a whole entry, failing once it grows past `limit` bytes.
fn read_entry<R: Read>(entry: &mut R, limit: u64) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    entry.by_ref().take(limit + 1).read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("entry is larger than {} bytes", limit),
        ));
    }
    Ok(buf)
}

fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
