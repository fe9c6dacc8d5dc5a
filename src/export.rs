//! Font downloads.
//!
//! A download stages the payload in a temporary file beside the destination
//! and persists it in one rename. The staged file is owned by a
//! `NamedTempFile`, so it is removed on any early return.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::ExportError;
use crate::font::FontFile;

/// Write a font payload to `dest`, replacing any existing file.
pub fn export_font(file: &FontFile, dest: &Path) -> Result<PathBuf, ExportError> {
    let dir = dest
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| ExportError::NoParent(dest.display().to_string()))?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(&file.bytes)?;
    staged.flush()?;
    staged.persist(dest)?;

    info!(font = %file.name, path = %dest.display(), "Font exported");
    Ok(dest.to_path_buf())
}

/// Default directory offered by the save dialog.
pub fn default_download_dir() -> Option<PathBuf> {
    directories::UserDirs::new().and_then(|dirs| {
        dirs.download_dir()
            .map(Path::to_path_buf)
            .or_else(|| Some(dirs.home_dir().to_path_buf()))
    })
}

/// Ask the user where to save `file` and write it there.
///
/// Returns `Ok(None)` when the dialog is cancelled.
pub fn save_with_dialog(file: &FontFile) -> Result<Option<PathBuf>, ExportError> {
    let mut dialog = rfd::FileDialog::new().set_file_name(&file.name);
    if let Some(dir) = default_download_dir() {
        dialog = dialog.set_directory(dir);
    }
    match dialog.save_file() {
        Some(dest) => export_font(file, &dest).map(Some),
        None => Ok(None),
    }
}
