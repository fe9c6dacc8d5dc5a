//! Library page: searchable grid of font cards.

use eframe::egui::{self, RichText};

use super::{card_frame, render_empty_library, PageAction, CARD_WIDTH};
use crate::fonts::FontRegistry;
use crate::font::Font;
use crate::state::LibraryState;
use crate::ui::theme::TypesetTheme;

const SAMPLE_TEXT: &str = "Sample text";

pub fn render_library_page(
    ui: &mut egui::Ui,
    state: &mut LibraryState,
    registry: &FontRegistry,
) -> Vec<PageAction> {
    let mut actions = Vec::new();
    let theme = TypesetTheme::for_ctx(ui.ctx());

    if state.fonts.is_empty() {
        render_empty_library(ui, "Your library is empty", &mut actions);
        return actions;
    }

    ui.horizontal(|ui| {
        ui.label("🔍");
        ui.add(
            egui::TextEdit::singleline(&mut state.search)
                .hint_text("Search fonts...")
                .desired_width(260.0),
        );
    });
    ui.add_space(8.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for font in state.visible_fonts() {
                    render_font_card(ui, font, registry, &theme, &mut actions);
                }
            });
        });

    actions
}

fn render_font_card(
    ui: &mut egui::Ui,
    font: &Font,
    registry: &FontRegistry,
    theme: &TypesetTheme,
    actions: &mut Vec<PageAction>,
) {
    ui.allocate_ui(egui::vec2(CARD_WIDTH, 180.0), |ui| {
        card_frame(theme).show(ui, |ui| {
            ui.set_width(CARD_WIDTH - 24.0);
            ui.add(
                egui::Label::new(
                    RichText::new(&font.name).text_style(egui::TextStyle::Name("card_title".into())),
                )
                .truncate(),
            );
            ui.add_space(6.0);

            egui::Frame::new()
                .fill(theme.surface[3])
                .corner_radius(6.0)
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.add(
                        egui::Label::new(
                            RichText::new(SAMPLE_TEXT).font(registry.font_id(&font.name, 28.0)),
                        )
                        .wrap(),
                    );
                });
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                if ui.button("✏ Try").on_hover_text("Try this font").clicked() {
                    actions.push(PageAction::TryFont(font.name.clone()));
                }
                if ui.button("⬇ Download").on_hover_text(&font.file.name).clicked() {
                    actions.push(PageAction::Download(font.id.clone()));
                }
                if ui
                    .button(RichText::new("🗑 Delete").color(theme.error))
                    .clicked()
                {
                    actions.push(PageAction::DeleteFont(font.id.clone()));
                }
            });
        });
    });
}
