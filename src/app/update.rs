//! Main update loop

use eframe::egui;
use std::time::Duration;

use super::TypesetApp;
use crate::state::Page;
use crate::ui;
use crate::ui::nav::HeaderAction;

impl eframe::App for TypesetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Activate fonts registered last frame before anything renders
        self.registry.begin_frame();

        // Process backend events
        self.process_events(ctx);

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));
        // Purge toasts older than 4 seconds
        self.state.purge_old_toasts(4);

        let busy = self.is_busy();
        match ui::nav::render_header(ctx, self.state.page, busy) {
            Some(HeaderAction::ToggleTheme) => self.toggle_theme(ctx),
            Some(HeaderAction::ToggleStylesheet) => {
                self.state.show_stylesheet = !self.state.show_stylesheet
            }
            None => {}
        }
        ui::nav::render_nav_panel(ctx, &mut self.state.page, self.state.fonts.len());

        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| match self.state.page {
                Page::Library => {
                    ui::pages::render_library_page(ui, &mut self.state, &self.registry)
                }
                Page::Upload => ui::pages::render_upload_page(ui, busy),
                Page::Try => ui::pages::render_try_page(ui, &mut self.state, &self.registry),
                Page::View => ui::pages::render_view_page(ui, &self.state, &self.registry),
            })
            .inner;
        for action in actions {
            self.handle_page_action(action);
        }

        ui::stylesheet::render_stylesheet_window(
            ctx,
            &mut self.state.show_stylesheet,
            &self.state.stylesheet,
        );
        ui::toasts::render_toasts(ctx, &self.state.toasts);
    }
}
