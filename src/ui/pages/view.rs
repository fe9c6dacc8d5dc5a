//! View page: gallery of every font with a large specimen.

use eframe::egui::{self, RichText};

use super::{card_frame, render_empty_library, PageAction, CARD_WIDTH};
use crate::fonts::FontRegistry;
use crate::state::LibraryState;
use crate::ui::theme::TypesetTheme;

const SPECIMEN: &str = "Aa Bb Cc";
const PARAGRAPH: &str = "Typography has always been a mirror of a culture and its ambitions.";

pub fn render_view_page(
    ui: &mut egui::Ui,
    state: &LibraryState,
    registry: &FontRegistry,
) -> Vec<PageAction> {
    let mut actions = Vec::new();
    if state.fonts.is_empty() {
        render_empty_library(ui, "No fonts to show", &mut actions);
        return actions;
    }
    let theme = TypesetTheme::for_ctx(ui.ctx());

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for font in &state.fonts {
                    ui.allocate_ui(egui::vec2(CARD_WIDTH + 60.0, 260.0), |ui| {
                        card_frame(&theme).show(ui, |ui| {
                            ui.set_width(CARD_WIDTH + 36.0);
                            ui.label(RichText::new(&font.name).size(20.0).strong());
                            ui.label(RichText::new("Font specimen").small().color(theme.text_muted));
                            ui.add_space(8.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new(SPECIMEN).font(registry.font_id(&font.name, 48.0)),
                                );
                                ui.add(
                                    egui::Label::new(
                                        RichText::new(PARAGRAPH)
                                            .font(registry.font_id(&font.name, 18.0))
                                            .color(theme.text_muted),
                                    )
                                    .wrap(),
                                );
                            });
                            ui.add_space(8.0);
                            ui.horizontal(|ui| {
                                if ui.button("✏ Try").clicked() {
                                    actions.push(PageAction::TryFont(font.name.clone()));
                                }
                                if ui.button("⬇ Download").clicked() {
                                    actions.push(PageAction::Download(font.id.clone()));
                                }
                            });
                        });
                    });
                }
            });
        });

    actions
}
