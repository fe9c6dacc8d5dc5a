//! Color themes and styling utilities for the font manager.
//!
//! # Surface Hierarchy
//!
//! - `surface[0]`: App background
//! - `surface[1]`: Navigation panel background
//! - `surface[2]`: Card background
//! - `surface[3]`: Hover state / sample area behind previews
//!
//! # Semantic Colors
//!
//! - **Accent**: Primary buttons, active navigation entry, drop-zone highlight
//! - **Success**: Success toasts
//! - **Error**: Destructive toasts, delete buttons

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

/// Theme with a small semantic color system
#[derive(Clone, Debug)]
pub struct TypesetTheme {
    pub name: &'static str,
    pub surface: [Color32; 4],
    pub accent: Color32,
    pub success: Color32,
    pub error: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub border: Color32,
}

impl TypesetTheme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            surface: [
                Color32::from_rgb(10, 10, 15),  // surface_0: App background
                Color32::from_rgb(19, 19, 26),  // surface_1: Navigation
                Color32::from_rgb(28, 28, 38),  // surface_2: Cards
                Color32::from_rgb(37, 37, 50),  // surface_3: Hover / samples
            ],
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(67, 181, 129),
            error: Color32::from_rgb(240, 71, 71),
            text_primary: Color32::WHITE,
            text_muted: Color32::from_rgb(114, 118, 125),
            border: Color32::from_rgb(47, 49, 54),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(246, 246, 247),
                Color32::from_rgb(242, 243, 245),
                Color32::from_rgb(227, 229, 232),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(39, 174, 96),
            error: Color32::from_rgb(220, 53, 69),
            text_primary: Color32::from_rgb(6, 6, 7),
            text_muted: Color32::from_rgb(116, 127, 141),
            border: Color32::from_rgb(210, 213, 219),
        }
    }

    /// Theme matching the context's current visuals.
    pub fn for_ctx(ctx: &egui::Context) -> Self {
        if ctx.style().visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Text hierarchy: 14px body, headings for page titles, small for metadata.
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(11.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(22.0, Proportional)),
        (TextStyle::Monospace, FontId::new(12.0, Monospace)),
        (TextStyle::Name("card_title".into()), FontId::new(17.0, Proportional)),
    ]
    .into()
}

/// Apply visuals and spacing for the given theme.
pub fn apply_app_style(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    let theme = if dark_mode {
        TypesetTheme::dark()
    } else {
        TypesetTheme::light()
    };

    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();

    // 8px grid
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    for widget in [
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.corner_radius = egui::CornerRadius::same(6);
    }
    style.visuals.widgets.active.bg_fill = theme.accent;
    style.visuals.widgets.active.weak_bg_fill = theme.accent;
    style.visuals.selection.bg_fill = theme.accent.gamma_multiply(0.4);
    style.visuals.panel_fill = theme.surface[0];

    ctx.set_style(style);
}
