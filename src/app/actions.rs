//! Page action handling

use tracing::{error, info};

use super::TypesetApp;
use crate::export;
use crate::font::SourceFile;
use crate::notify::Notification;
use crate::protocol::BackendAction;
use crate::state::Page;
use crate::ui::PageAction;

impl TypesetApp {
    /// Carry out an action requested by a page
    pub fn handle_page_action(&mut self, action: PageAction) {
        match action {
            PageAction::AddFiles(files) => self.submit_files(files),
            PageAction::DroppedWhileBusy(count) => {
                info!(files = count, "Drop ignored while busy");
                self.state.push_toast(Notification::still_processing(count));
            }
            PageAction::BrowseFiles => {
                if let Some(paths) = rfd::FileDialog::new()
                    .add_filter("Fonts", &["ttf", "otf", "zip"])
                    .pick_files()
                {
                    let files = paths.into_iter().map(SourceFile::from_path).collect();
                    self.submit_files(files);
                }
            }
            PageAction::DeleteFont(id) => {
                let _ = self.action_tx.send(BackendAction::DeleteFont(id));
            }
            PageAction::Download(id) => self.download_font(&id),
            PageAction::TryFont(name) => {
                if self.state.try_state.compare_mode {
                    self.state.try_state.selected.insert(name);
                }
                self.state.page = Page::Try;
            }
            PageAction::GoTo(page) => self.state.page = page,
        }
    }

    fn submit_files(&mut self, files: Vec<SourceFile>) {
        if files.is_empty() {
            return;
        }
        info!(files = files.len(), "Submitting files");
        self.state
            .log_activity(format!("Submitted {} file(s)", files.len()));
        let _ = self.action_tx.send(BackendAction::AddFonts(files));
    }

    fn download_font(&mut self, id: &str) {
        let Some(font) = self.state.fonts.iter().find(|f| f.id == id) else {
            return;
        };
        let file = font.file.clone();
        match export::save_with_dialog(&file) {
            Ok(Some(path)) => {
                self.state.push_toast(Notification::success(
                    "Font saved",
                    format!("Saved to {}", path.display()),
                ));
            }
            Ok(None) => {}
            Err(e) => {
                error!(error = %e, font = %file.name, "Download failed");
                self.state
                    .push_toast(Notification::destructive("Download failed", e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_navigation_actions() {
        let mut app = TypesetApp::with_settings(Settings::default(), true);

        app.handle_page_action(PageAction::GoTo(Page::Upload));
        assert_eq!(app.state.page, Page::Upload);

        app.state.try_state.compare_mode = true;
        app.handle_page_action(PageAction::TryFont("Foo".into()));
        assert_eq!(app.state.page, Page::Try);
        assert!(app.state.try_state.selected.contains("Foo"));
    }

    #[test]
    fn test_download_unknown_font_is_ignored() {
        let mut app = TypesetApp::with_settings(Settings::default(), true);
        app.handle_page_action(PageAction::Download("missing-0".into()));
        assert!(app.state.toasts.is_empty());
    }

    #[test]
    fn test_drop_while_busy_shows_toast() {
        let mut app = TypesetApp::with_settings(Settings::default(), true);
        app.handle_page_action(PageAction::DroppedWhileBusy(2));
        assert_eq!(app.state.toasts.len(), 1);
        assert_eq!(app.state.toasts[0].0.title, "Still processing");
    }

    #[test]
    fn test_empty_submission_is_dropped() {
        let mut app = TypesetApp::with_settings(Settings::default(), true);
        app.handle_page_action(PageAction::AddFiles(Vec::new()));
        assert!(app.state.activity_log.is_empty());
    }
}
