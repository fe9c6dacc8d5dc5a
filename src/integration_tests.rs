//! Integration tests for typeset
//!
//! These tests exercise full workflows across the store, the backend event
//! stream and the UI-side state.

#[cfg(test)]
mod integration_tests {
    use crate::archive::tests::build_zip;
    use crate::config::Settings;
    use crate::events;
    use crate::font::SourceFile;
    use crate::library::tests::{RecordingNotifier, RecordingStyles};
    use crate::library::FontLibrary;
    use crate::notify::NotificationKind;
    use crate::protocol::GuiEvent;
    use crate::state::LibraryState;
    use crate::stylesheet;
    use crossbeam_channel::unbounded;
    use std::sync::Arc;

    /// A mixed drop: loose fonts, a good archive, a corrupt archive, junk.
    #[tokio::test]
    async fn test_mixed_batch() {
        let notifier = Arc::new(RecordingNotifier::default());
        let styles = Arc::new(RecordingStyles::default());
        let mut library = FontLibrary::new(notifier.clone(), styles.clone());

        let family = build_zip(&[
            ("Family/Regular.ttf", b"r"),
            ("Family/Bold.ttf", b"b"),
            ("Family/OFL.txt", b"license"),
        ]);
        let report = library
            .add_fonts(vec![
                SourceFile::from_bytes("Loose.otf", "", b"l".to_vec()),
                SourceFile::from_bytes("family.zip", "application/zip", family),
                SourceFile::from_bytes("broken.zip", "application/zip", b"PK?".to_vec()),
                SourceFile::from_bytes("photo.jpg", "image/jpeg", b"j".to_vec()),
                SourceFile::from_bytes("Loose.ttf", "font/ttf", b"l2".to_vec()),
            ])
            .await;

        let names: Vec<_> = library.fonts().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Loose", "Regular", "Bold"]);
        assert_eq!(report.added, 3);
        assert_eq!(report.duplicates, vec!["Loose"]);
        // OFL.txt, broken.zip, photo.jpg
        assert_eq!(report.invalid, 3);
        assert_eq!(report.archive_errors, vec!["broken.zip"]);
        assert!(!library.is_busy());

        let notes = notifier.notifications();
        let destructive = notes
            .iter()
            .filter(|n| n.kind == NotificationKind::Destructive)
            .count();
        // archive error + duplicate + aggregated invalid
        assert_eq!(destructive, 3);
        assert_eq!(
            notes.iter().filter(|n| n.kind == NotificationKind::Success).count(),
            1
        );
        assert_eq!(styles.0.lock().unwrap().len(), 1);
        assert_eq!(stylesheet::rule_count(library.stylesheet()), 3);
    }

    /// Store changes flow into the UI state through the event stream.
    #[tokio::test]
    async fn test_store_to_ui_state() {
        let (event_tx, event_rx) = unbounded();
        let notifier = Arc::new(crate::backend::ChannelNotifier::new(event_tx.clone()));
        let styles = Arc::new(crate::backend::ChannelStyles::new(event_tx.clone()));
        let mut library = FontLibrary::new(notifier, styles);
        let mut state = LibraryState::new(&Settings::default());

        library
            .add_fonts(vec![
                SourceFile::from_bytes("Amiri.ttf", "", b"a".to_vec()),
                SourceFile::from_bytes("Noto Sans.ttf", "", b"n".to_vec()),
            ])
            .await;
        event_tx
            .send(GuiEvent::FontsChanged(library.fonts().to_vec()))
            .unwrap();

        assert!(events::process_events(&event_rx, &mut state));
        assert_eq!(state.fonts.len(), 2);
        assert_eq!(stylesheet::rule_count(&state.stylesheet), 2);
        assert_eq!(state.toasts.len(), 1);

        state.search = "noto".into();
        assert_eq!(state.visible_fonts().count(), 1);

        let id = state.fonts[0].id.clone();
        library.delete_font(&id);
        event_tx
            .send(GuiEvent::FontsChanged(library.fonts().to_vec()))
            .unwrap();
        assert!(events::process_events(&event_rx, &mut state));
        assert_eq!(state.fonts.len(), 1);
        assert_eq!(stylesheet::rule_count(&state.stylesheet), 1);
        assert_eq!(state.toasts.len(), 2);
    }
}
