//! Window showing the generated `@font-face` stylesheet.

use eframe::egui;

use crate::stylesheet;

pub fn render_stylesheet_window(ctx: &egui::Context, open: &mut bool, css: &str) {
    let mut copy = false;
    egui::Window::new("Stylesheet")
        .open(open)
        .default_size([560.0, 380.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} @font-face rules", stylesheet::rule_count(css)));
                copy = ui.button("Copy CSS").clicked();
            });
            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                // Data URIs are long; show them shortened
                for line in css.lines() {
                    ui.monospace(abbreviate(line, 96));
                }
            });
        });
    if copy {
        ctx.copy_text(css.to_string());
    }
}

fn abbreviate(line: &str, max_chars: usize) -> String {
    if line.chars().count() <= max_chars {
        return line.to_string();
    }
    let head: String = line.chars().take(max_chars).collect();
    format!("{}…", head)
}
