//! TypeSet - a font manager built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime owning the font library store
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;
use typeset::app::TypesetApp;

fn main() -> eframe::Result<()> {
    if let Err(e) = typeset::logging::init_logging() {
        eprintln!("{}", e);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 420.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "TypeSet",
        options,
        Box::new(|cc| Ok(Box::new(TypesetApp::new(cc)))),
    )
}
