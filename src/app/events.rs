//! Event processing from backend

use eframe::egui;

use super::TypesetApp;
use crate::events;

impl TypesetApp {
    pub fn process_events(&mut self, ctx: &egui::Context) {
        if events::process_events(&self.event_rx, &mut self.state) {
            // New faces become usable next frame
            self.registry.rebuild(ctx, &self.state.fonts);
            ctx.request_repaint();
        }
    }
}
