//! Backend event processing (library snapshots, stylesheets, toasts).

use crossbeam_channel::Receiver;
use tracing::error;

use crate::protocol::GuiEvent;
use crate::state::LibraryState;

/// Process all pending events from the backend.
///
/// Returns `true` when the font list changed and the UI font registry must be
/// rebuilt.
pub fn process_events(event_rx: &Receiver<GuiEvent>, state: &mut LibraryState) -> bool {
    let mut fonts_changed = false;
    // Drain all pending events from the backend
    while let Ok(event) = event_rx.try_recv() {
        fonts_changed |= process_single_event(state, event);
    }
    fonts_changed
}

pub fn process_single_event(state: &mut LibraryState, event: GuiEvent) -> bool {
    match event {
        GuiEvent::FontsChanged(fonts) => {
            let changed = fonts != state.fonts;
            state.set_fonts(fonts);
            changed
        }
        GuiEvent::StylesheetChanged(css) => {
            state.stylesheet = css;
            false
        }
        GuiEvent::Notification(notification) => {
            state.push_toast(notification);
            false
        }
        GuiEvent::Error(msg) => {
            error!(error = %msg, "Backend error");
            state.log_activity(format!("Error: {}", msg));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::notify::Notification;
    use crate::state::tests::font;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_process_events_drains_queue() {
        let (tx, rx) = unbounded();
        let mut state = LibraryState::new(&Settings::default());

        tx.send(GuiEvent::StylesheetChanged("@font-face {}".into())).unwrap();
        tx.send(GuiEvent::Notification(Notification::fonts_added(1))).unwrap();
        tx.send(GuiEvent::FontsChanged(vec![font("A")])).unwrap();

        assert!(process_events(&rx, &mut state));
        assert_eq!(state.fonts.len(), 1);
        assert_eq!(state.stylesheet, "@font-face {}");
        assert_eq!(state.toasts.len(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_identical_snapshot_is_not_a_change() {
        let mut state = LibraryState::new(&Settings::default());
        assert!(process_single_event(&mut state, GuiEvent::FontsChanged(vec![font("A")])));
        assert!(!process_single_event(&mut state, GuiEvent::FontsChanged(vec![font("A")])));
    }

    #[test]
    fn test_error_goes_to_activity_log() {
        let mut state = LibraryState::new(&Settings::default());
        process_single_event(&mut state, GuiEvent::Error("boom".into()));
        assert!(state.activity_log[0].contains("Error: boom"));
        assert!(state.toasts.is_empty());
    }
}
