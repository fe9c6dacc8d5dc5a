//! Backend action dispatch and channel-backed sinks for the library store.

use crossbeam_channel::Sender;
use tracing::debug;

use crate::library::FontLibrary;
use crate::notify::{Notification, Notifier, StyleRegistry};
use crate::protocol::{BackendAction, GuiEvent};

/// Forwards store notifications to the UI as toasts.
pub struct ChannelNotifier {
    event_tx: Sender<GuiEvent>,
}

impl ChannelNotifier {
    pub fn new(event_tx: Sender<GuiEvent>) -> Self {
        Self { event_tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        // UI gone means nobody is left to read it
        let _ = self.event_tx.send(GuiEvent::Notification(notification));
    }
}

/// Forwards regenerated stylesheets to the UI.
pub struct ChannelStyles {
    event_tx: Sender<GuiEvent>,
}

impl ChannelStyles {
    pub fn new(event_tx: Sender<GuiEvent>) -> Self {
        Self { event_tx }
    }
}

impl StyleRegistry for ChannelStyles {
    fn register_style(&self, css_text: &str) {
        let _ = self
            .event_tx
            .send(GuiEvent::StylesheetChanged(css_text.to_string()));
    }
}

/// Handle one action from the UI.
///
/// Returns `false` when the loop should stop.
pub async fn handle_backend_action(
    action: BackendAction,
    library: &mut FontLibrary,
    event_tx: &Sender<GuiEvent>,
) -> bool {
    match action {
        BackendAction::AddFonts(batch) => {
            let report = library.add_fonts(batch).await;
            debug!(?report, "Batch handled");
        }
        BackendAction::DeleteFont(id) => {
            library.delete_font(&id);
        }
        BackendAction::Shutdown => return false,
    }
    let _ = event_tx.send(GuiEvent::FontsChanged(library.fonts().to_vec()));
    true
}
