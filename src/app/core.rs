//! Core TypesetApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use std::thread;
use tracing::info;

use crate::backend::run_backend;
use crate::config::{load_settings, Settings};
use crate::fonts::FontRegistry;
use crate::library::BusyFlag;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::LibraryState;
use crate::ui;

pub struct TypesetApp {
    // Library snapshot, page selection and page controls
    pub state: LibraryState,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    // Shared with the library store; true while a batch is in flight
    pub busy: BusyFlag,

    // egui-side font registration
    pub registry: FontRegistry,

    pub dark_mode: bool,
}

impl TypesetApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings();
        let dark_mode = settings.theme != "light";
        ui::theme::apply_app_style(&cc.egui_ctx, dark_mode);
        Self::with_settings(settings, dark_mode)
    }

    /// Spawn the backend and build the app without an egui context.
    pub fn with_settings(settings: Settings, dark_mode: bool) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();
        let busy = BusyFlag::default();

        // Spawn the backend thread
        let backend_busy = busy.clone();
        let options = settings.ingest_options();
        thread::spawn(move || {
            run_backend(action_rx, event_tx, backend_busy, options);
        });
        info!("Backend started");

        Self {
            state: LibraryState::new(&settings),
            action_tx,
            event_rx,
            busy,
            registry: FontRegistry::default(),
            dark_mode,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.dark_mode = !self.dark_mode;
        ui::theme::apply_app_style(ctx, self.dark_mode);
        self.state.try_state.apply_theme(self.dark_mode);
    }
}

impl Drop for TypesetApp {
    fn drop(&mut self) {
        let _ = self.action_tx.send(BackendAction::Shutdown);
    }
}
