//! Toast notifications - floating messages in the top-right corner.

use eframe::egui;

use crate::notify::{Notification, NotificationKind};
use crate::ui::theme::TypesetTheme;

/// Render floating toasts, newest at the bottom.
pub fn render_toasts(ctx: &egui::Context, toasts: &[(Notification, std::time::Instant)]) {
    if toasts.is_empty() {
        return;
    }
    let theme = TypesetTheme::for_ctx(ctx);

    egui::Area::new(egui::Id::new("toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 56.0]) // Below header bar
        .show(ctx, |ui| {
            ui.set_max_width(320.0);
            for (notification, _created) in toasts {
                let accent = match notification.kind {
                    NotificationKind::Success => theme.success,
                    NotificationKind::Destructive => theme.error,
                };
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(30, 30, 30, 235))
                    .stroke(egui::Stroke::new(1.0, accent))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(&notification.title).strong().color(accent));
                        ui.label(
                            egui::RichText::new(&notification.description)
                                .color(egui::Color32::LIGHT_GRAY),
                        );
                    });
                ui.add_space(6.0);
            }
        });
}
