//! Page rendering. Pages never talk to the backend directly; they return
//! [`PageAction`]s for the app to carry out.

mod library;
mod try_page;
mod upload;
mod view;

pub use library::render_library_page;
pub use try_page::render_try_page;
pub use upload::{dropped_files_action, render_upload_page, source_from_dropped};
pub use view::render_view_page;

use eframe::egui;

use crate::font::SourceFile;
use crate::state::Page;
use crate::ui::theme::TypesetTheme;

/// Actions that pages can request
#[derive(Debug, Clone)]
pub enum PageAction {
    /// Ingest dropped files
    AddFiles(Vec<SourceFile>),
    /// Files were dropped while a batch was still running
    DroppedWhileBusy(usize),
    /// Open the native file picker
    BrowseFiles,
    /// Remove a font by id
    DeleteFont(String),
    /// Save a font's payload to disk
    Download(String),
    /// Open the try page focused on a font
    TryFont(String),
    /// Switch page
    GoTo(Page),
}

const CARD_WIDTH: f32 = 280.0;

/// Frame used for font cards on the library and view pages.
fn card_frame(theme: &TypesetTheme) -> egui::Frame {
    egui::Frame::new()
        .fill(theme.surface[2])
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(12))
}

/// Placeholder shown when the library is empty.
fn render_empty_library(ui: &mut egui::Ui, title: &str, actions: &mut Vec<PageAction>) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.heading(title);
        ui.label("You don't have any fonts yet. Start by adding some.");
        ui.add_space(12.0);
        if ui.button("➕ Add fonts").clicked() {
            actions.push(PageAction::GoTo(Page::Upload));
        }
    });
}
