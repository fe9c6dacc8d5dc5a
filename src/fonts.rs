//! Registers library fonts with egui so previews render in their own face.
//!
//! This is the desktop counterpart of the `@font-face` stylesheet: every
//! library font gets a `FontFamily::Name` bound to its payload, with egui's
//! proportional fonts as fallback.

use std::collections::HashSet;
use std::sync::Arc;

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::warn;

use crate::font::Font;

/// Whether egui's font loader will accept `bytes` as face 0.
///
/// egui parses every registered face when the next pass starts and panics on
/// the first one it cannot read, so this has to be the same parser.
pub fn is_loadable_face(bytes: &[u8]) -> bool {
    ab_glyph::FontRef::try_from_slice_and_index(bytes, 0).is_ok()
}

/// Build font definitions for the current library.
///
/// Every font gets a family so lookups never miss. Payloads egui cannot load
/// are left out of `font_data`; their family just resolves to the default
/// fonts.
pub fn setup_fonts(library: &[Font]) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    let fallback = fonts
        .families
        .get(&FontFamily::Proportional)
        .cloned()
        .unwrap_or_default();

    for font in library {
        let family = FontFamily::Name(font.name.as_str().into());
        if is_loadable_face(&font.file.bytes) {
            fonts.font_data.insert(
                font.id.clone(),
                Arc::new(FontData::from_owned(font.file.bytes.to_vec())),
            );
            let mut chain = vec![font.id.clone()];
            chain.extend(fallback.iter().cloned());
            fonts.families.insert(family, chain);
        } else {
            warn!(font = %font.name, "Unreadable font face, previewing with default font");
            fonts.families.insert(family, fallback.clone());
        }
    }

    fonts
}

/// Tracks which families egui has actually activated.
///
/// `Context::set_fonts` only takes effect at the start of the next pass, so a
/// freshly added font must not be referenced until then.
#[derive(Default)]
pub struct FontRegistry {
    active: HashSet<String>,
    pending: Option<HashSet<String>>,
}

impl FontRegistry {
    /// Install fonts for `library`; they become usable next frame.
    pub fn rebuild(&mut self, ctx: &egui::Context, library: &[Font]) {
        ctx.set_fonts(setup_fonts(library));
        self.pending = Some(library.iter().map(|f| f.name.clone()).collect());
    }

    /// Call at the start of every frame.
    pub fn begin_frame(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.active = pending;
        }
    }

    /// Family to render `font_name` with this frame.
    pub fn family(&self, font_name: &str) -> FontFamily {
        if self.active.contains(font_name) {
            FontFamily::Name(font_name.into())
        } else {
            FontFamily::Proportional
        }
    }

    pub fn font_id(&self, font_name: &str, size: f32) -> egui::FontId {
        egui::FontId::new(size, self.family(font_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontFile;

    fn font(name: &str, bytes: &[u8]) -> Font {
        Font::new(
            name.to_string(),
            FontFile {
                name: format!("{}.ttf", name),
                mime: "font/ttf".into(),
                bytes: bytes.to_vec().into(),
            },
            7,
        )
    }

    /// A face egui ships with, so the tests have a real font to load.
    fn bundled_face() -> Vec<u8> {
        FontDefinitions::default().font_data["Ubuntu-Light"]
            .font
            .to_vec()
    }

    #[test]
    fn test_is_loadable_face() {
        assert!(is_loadable_face(&bundled_face()));
        assert!(!is_loadable_face(b"\x00\x01\x00\x00font"));
        assert!(!is_loadable_face(b"OTTO"));
        assert!(!is_loadable_face(b""));
    }

    #[test]
    fn test_setup_fonts_binds_every_family() {
        let defs = setup_fonts(&[
            font("Real", &bundled_face()),
            font("Bogus", b"nope"),
            font("HeaderOnly", b"\x00\x01\x00\x00font"),
        ]);

        let real = defs.families.get(&FontFamily::Name("Real".into())).unwrap();
        assert_eq!(real[0], "Real.ttf-7");
        assert!(defs.font_data.contains_key("Real.ttf-7"));

        assert!(defs.families.contains_key(&FontFamily::Name("Bogus".into())));
        assert!(!defs.font_data.contains_key("Bogus.ttf-7"));
        assert!(!defs.font_data.contains_key("HeaderOnly.ttf-7"));
    }

    fn run_frame(ctx: &egui::Context, registry: &mut FontRegistry, font_name: &str) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            registry.begin_frame();
            let font_id = registry.font_id(font_name, 24.0);
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label(egui::RichText::new("Sphinx of black quartz").font(font_id));
            });
        });
    }

    #[test]
    fn test_truncated_face_renders_with_fallback() {
        let ctx = egui::Context::default();
        let mut registry = FontRegistry::default();
        registry.rebuild(&ctx, &[font("Corrupt", b"\x00\x01\x00\x00font")]);

        run_frame(&ctx, &mut registry, "Corrupt");
        run_frame(&ctx, &mut registry, "Corrupt");
        assert_eq!(
            registry.family("Corrupt"),
            FontFamily::Name("Corrupt".into())
        );
    }

    #[test]
    fn test_real_face_renders() {
        let ctx = egui::Context::default();
        let mut registry = FontRegistry::default();
        registry.rebuild(&ctx, &[font("Ubuntu", &bundled_face())]);

        run_frame(&ctx, &mut registry, "Ubuntu");
        run_frame(&ctx, &mut registry, "Ubuntu");
    }

    #[test]
    fn test_registry_activates_next_frame() {
        let mut registry = FontRegistry::default();
        registry.pending = Some(["A".to_string()].into_iter().collect());

        assert_eq!(registry.family("A"), FontFamily::Proportional);
        registry.begin_frame();
        assert_eq!(registry.family("A"), FontFamily::Name("A".into()));
        assert_eq!(registry.family("B"), FontFamily::Proportional);
    }
}
