//! Navigation side panel and header bar.

use eframe::egui::{self, RichText, Stroke};

use crate::state::Page;
use crate::ui::theme::TypesetTheme;

/// Requests from the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    ToggleTheme,
    ToggleStylesheet,
}

/// Render the left navigation panel.
pub fn render_nav_panel(ctx: &egui::Context, page: &mut Page, font_count: usize) {
    let theme = TypesetTheme::for_ctx(ctx);

    egui::SidePanel::left("nav_panel")
        .resizable(false)
        .exact_width(200.0)
        .frame(
            egui::Frame::new()
                .fill(theme.surface[1])
                .inner_margin(egui::Margin::symmetric(12, 16))
                .stroke(Stroke::new(1.0, theme.border)),
        )
        .show(ctx, |ui| {
            ui.label(RichText::new("TypeSet").size(20.0).strong().color(theme.accent));
            ui.add_space(16.0);

            for candidate in Page::ALL {
                let label = if candidate == Page::Library {
                    format!("{} ({})", candidate.label(), font_count)
                } else {
                    candidate.label().to_string()
                };
                let response = ui.add_sized(
                    [ui.available_width(), 28.0],
                    egui::SelectableLabel::new(*page == candidate, label),
                );
                if response.clicked() {
                    *page = candidate;
                }
            }
        });
}

/// Render the top header with the page title, busy indicator and toggles.
pub fn render_header(ctx: &egui::Context, page: Page, busy: bool) -> Option<HeaderAction> {
    let mut action = None;
    let dark_mode = ctx.style().visuals.dark_mode;

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.heading(page.label());
            if busy {
                ui.add(egui::Spinner::new());
                ui.label("Processing fonts...");
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme_label = if dark_mode { "☀ Light" } else { "🌙 Dark" };
                if ui.button(theme_label).clicked() {
                    action = Some(HeaderAction::ToggleTheme);
                }
                if ui.button("{ } Stylesheet").clicked() {
                    action = Some(HeaderAction::ToggleStylesheet);
                }
            });
        });
    });

    action
}
