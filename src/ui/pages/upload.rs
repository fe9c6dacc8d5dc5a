//! Upload page: drop zone and file picker.

use eframe::egui::{self, RichText, Stroke};

use super::PageAction;
use crate::font::{self, SourceContent, SourceFile};
use crate::ui::theme::TypesetTheme;

pub fn render_upload_page(ui: &mut egui::Ui, busy: bool) -> Vec<PageAction> {
    let mut actions = Vec::new();
    let theme = TypesetTheme::for_ctx(ui.ctx());
    let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        let (fill, stroke) = if hovering {
            (theme.accent.gamma_multiply(0.15), theme.accent)
        } else {
            (theme.surface[2], theme.border)
        };
        egui::Frame::new()
            .fill(fill)
            .stroke(Stroke::new(2.0, stroke))
            .corner_radius(12.0)
            .inner_margin(egui::Margin::symmetric(48, 40))
            .show(ui, |ui| {
                ui.set_max_width(520.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("☁").size(48.0).color(theme.accent));
                    ui.label(
                        RichText::new("Drop your files here or pick them from your computer")
                            .size(18.0)
                            .strong(),
                    );
                    ui.label(
                        RichText::new("A single font, several fonts, or a zip archive")
                            .color(theme.text_muted),
                    );
                    ui.add_space(12.0);
                    if ui
                        .add_enabled(!busy, egui::Button::new("Browse files"))
                        .clicked()
                    {
                        actions.push(PageAction::BrowseFiles);
                    }
                    if busy {
                        ui.add_space(12.0);
                        ui.add(egui::Spinner::new());
                        ui.label(RichText::new("Processing fonts...").color(theme.text_muted));
                    }
                });
            });
        ui.add_space(12.0);
        ui.label(RichText::new("Supports .ttf / .otf / .zip").color(theme.text_muted));
    });

    let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
    actions.extend(dropped_files_action(&dropped, busy));

    actions
}

/// Turn this frame's dropped files into an action.
///
/// While busy the drop zone is closed, but the user still hears about it.
pub fn dropped_files_action(dropped: &[egui::DroppedFile], busy: bool) -> Option<PageAction> {
    if dropped.is_empty() {
        return None;
    }
    if busy {
        return Some(PageAction::DroppedWhileBusy(dropped.len()));
    }
    let sources: Vec<SourceFile> = dropped.iter().filter_map(source_from_dropped).collect();
    (!sources.is_empty()).then_some(PageAction::AddFiles(sources))
}

/// Convert an egui dropped file into a batch entry.
///
/// Web builds and some platforms deliver bytes, desktop usually a path.
pub fn source_from_dropped(file: &egui::DroppedFile) -> Option<SourceFile> {
    let last_modified = file
        .last_modified
        .map(font::epoch_millis)
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

    if let Some(bytes) = &file.bytes {
        let name = if file.name.is_empty() {
            file.path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())?
        } else {
            file.name.clone()
        };
        return Some(SourceFile {
            name,
            last_modified,
            mime: file.mime.clone(),
            content: SourceContent::Bytes(bytes.clone()),
        });
    }

    let path = file.path.clone()?;
    let mut source = SourceFile::from_path(path);
    source.mime = file.mime.clone();
    if file.last_modified.is_some() {
        source.last_modified = last_modified;
    }
    Some(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::{Duration, SystemTime};

    #[test]
    fn test_dropped_bytes() {
        let file = egui::DroppedFile {
            name: "Foo.ttf".into(),
            mime: "font/ttf".into(),
            last_modified: Some(SystemTime::UNIX_EPOCH + Duration::from_millis(5)),
            bytes: Some(Arc::from(&b"abc"[..])),
            ..Default::default()
        };
        let source = source_from_dropped(&file).unwrap();
        assert_eq!(source.name, "Foo.ttf");
        assert_eq!(source.mime, "font/ttf");
        assert_eq!(source.last_modified, 5);
        assert!(matches!(source.content, SourceContent::Bytes(ref b) if &b[..] == b"abc"));
    }

    #[test]
    fn test_dropped_path() {
        let file = egui::DroppedFile {
            path: Some(PathBuf::from("/tmp/fonts/Bar.otf")),
            ..Default::default()
        };
        let source = source_from_dropped(&file).unwrap();
        assert_eq!(source.name, "Bar.otf");
        assert!(matches!(source.content, SourceContent::Path(_)));
    }

    #[test]
    fn test_drop_while_busy_is_reported() {
        let dropped = vec![
            egui::DroppedFile {
                path: Some(PathBuf::from("/tmp/A.ttf")),
                ..Default::default()
            },
            egui::DroppedFile {
                path: Some(PathBuf::from("/tmp/B.zip")),
                ..Default::default()
            },
        ];

        assert!(matches!(
            dropped_files_action(&dropped, true),
            Some(PageAction::DroppedWhileBusy(2))
        ));
        assert!(matches!(
            dropped_files_action(&dropped, false),
            Some(PageAction::AddFiles(ref files)) if files.len() == 2
        ));
        assert!(dropped_files_action(&[], true).is_none());
    }

    #[test]
    fn test_dropped_nothing() {
        assert!(source_from_dropped(&egui::DroppedFile::default()).is_none());
    }
}
