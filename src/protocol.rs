use crate::font::{Font, SourceFile};
use crate::notify::Notification;

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Ingest a batch of dropped or picked files
    AddFonts(Vec<SourceFile>),
    /// Remove a font from the library
    DeleteFont(String),
    /// Stop the backend loop
    Shutdown,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Snapshot of the library after a change
    FontsChanged(Vec<Font>),
    /// Regenerated `@font-face` stylesheet
    StylesheetChanged(String),
    /// Toast to show the user
    Notification(Notification),
    /// Backend failure outside of ingestion
    Error(String),
}
