//! Try page: preview text in every font with adjustable size and colors,
//! optionally restricted to a compared selection.

use eframe::egui::{self, RichText};

use super::{render_empty_library, PageAction};
use crate::config::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::fonts::FontRegistry;
use crate::state::LibraryState;
use crate::ui::theme::TypesetTheme;

pub fn render_try_page(
    ui: &mut egui::Ui,
    state: &mut LibraryState,
    registry: &FontRegistry,
) -> Vec<PageAction> {
    let mut actions = Vec::new();
    if state.fonts.is_empty() {
        render_empty_library(ui, "No fonts to try", &mut actions);
        return actions;
    }
    let theme = TypesetTheme::for_ctx(ui.ctx());

    egui::SidePanel::right("try_controls")
        .resizable(false)
        .exact_width(240.0)
        .show_inside(ui, |ui| render_controls(ui, state));

    egui::CentralPanel::default().show_inside(ui, |ui| {
        ui.label(RichText::new("Preview text").strong());
        ui.add(
            egui::TextEdit::multiline(&mut state.try_state.preview_text)
                .hint_text("Type anything to preview your fonts...")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let compare_mode = state.try_state.compare_mode;
        let mut toggled: Option<String> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let try_state = &state.try_state;
                let mut shown = 0;
                for font in state.fonts_to_try() {
                    shown += 1;
                    egui::Frame::new()
                        .fill(try_state.bg_color)
                        .stroke(egui::Stroke::new(1.0, theme.border))
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::same(12))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(&font.name)
                                        .small()
                                        .strong()
                                        .color(try_state.text_color),
                                );
                                if compare_mode {
                                    let mut checked = try_state.selected.contains(&font.name);
                                    if ui.checkbox(&mut checked, "").changed() {
                                        toggled = Some(font.name.clone());
                                    }
                                }
                            });
                            ui.add(
                                egui::Label::new(
                                    RichText::new(&try_state.preview_text)
                                        .font(registry.font_id(&font.name, try_state.font_size))
                                        .color(try_state.text_color),
                                )
                                .wrap(),
                            );
                        });
                    ui.add_space(8.0);
                }
                if shown == 0 && compare_mode {
                    ui.label(
                        RichText::new("Pick fonts on the right to compare them side by side.")
                            .color(theme.text_muted),
                    );
                }
            });
        if let Some(name) = toggled {
            state.try_state.toggle_selection(&name);
        }
    });

    actions
}

fn render_controls(ui: &mut egui::Ui, state: &mut LibraryState) {
    let try_state = &mut state.try_state;
    ui.add_space(8.0);
    ui.label(RichText::new("Controls").strong());
    ui.add_space(4.0);

    ui.label(format!("Font size: {}px", try_state.font_size.round()));
    ui.add(egui::Slider::new(&mut try_state.font_size, MIN_FONT_SIZE..=MAX_FONT_SIZE).step_by(1.0));

    ui.horizontal(|ui| {
        ui.label("Text color");
        ui.color_edit_button_srgba(&mut try_state.text_color);
    });
    ui.horizontal(|ui| {
        ui.label("Background");
        ui.color_edit_button_srgba(&mut try_state.bg_color);
    });

    ui.separator();
    ui.checkbox(&mut try_state.compare_mode, "Compare mode");
    ui.label(RichText::new("Pick several fonts to show side by side.").small());

    if try_state.compare_mode {
        ui.add_space(4.0);
        let mut toggled: Option<String> = None;
        egui::ScrollArea::vertical().id_salt("compare_picks").show(ui, |ui| {
            for font in &state.fonts {
                let mut checked = state.try_state.selected.contains(&font.name);
                if ui.checkbox(&mut checked, &font.name).changed() {
                    toggled = Some(font.name.clone());
                }
            }
        });
        if let Some(name) = toggled {
            state.try_state.toggle_selection(&name);
        }
    }
}
