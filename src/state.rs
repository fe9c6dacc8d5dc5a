//! UI-side session state, separated from rendering.
//!
//! `LibraryState` holds the latest font snapshot from the backend plus page
//! selection, search, try-page controls and toasts. Pages receive it as a
//! parameter rather than owning it.

use std::collections::HashSet;
use std::time::Instant;

use chrono::Local;
use eframe::egui::Color32;

use crate::config::Settings;
use crate::font::Font;
use crate::notify::Notification;
use crate::validation;

const MAX_ACTIVITY_LINES: usize = 500;

/// Top-level pages reachable from the navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    Upload,
    #[default]
    Library,
    Try,
    View,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Upload, Page::Library, Page::Try, Page::View];

    pub fn label(self) -> &'static str {
        match self {
            Page::Upload => "Add fonts",
            Page::Library => "My library",
            Page::Try => "Try fonts",
            Page::View => "View fonts",
        }
    }
}

/// Controls of the try page.
#[derive(Debug, Clone)]
pub struct TryState {
    pub preview_text: String,
    pub font_size: f32,
    pub text_color: Color32,
    pub bg_color: Color32,
    pub compare_mode: bool,
    /// Font names picked for comparison.
    pub selected: HashSet<String>,
}

impl TryState {
    pub fn new(settings: &Settings, dark_mode: bool) -> Self {
        let mut state = Self {
            preview_text: settings.preview_text.clone(),
            font_size: settings.font_size,
            text_color: Color32::BLACK,
            bg_color: Color32::WHITE,
            compare_mode: false,
            selected: HashSet::new(),
        };
        state.apply_theme(dark_mode);
        state
    }

    /// Reset preview colors to the defaults of the given theme.
    pub fn apply_theme(&mut self, dark_mode: bool) {
        if dark_mode {
            self.bg_color = Color32::from_rgb(0x11, 0x18, 0x27);
            self.text_color = Color32::from_rgb(0xf9, 0xfa, 0xfb);
        } else {
            self.bg_color = Color32::WHITE;
            self.text_color = Color32::from_rgb(0x11, 0x18, 0x27);
        }
    }

    pub fn toggle_selection(&mut self, font_name: &str) {
        if !self.selected.remove(font_name) {
            self.selected.insert(font_name.to_string());
        }
    }
}

pub struct LibraryState {
    /// Latest library snapshot, in insertion order.
    pub fonts: Vec<Font>,

    /// Latest `@font-face` stylesheet.
    pub stylesheet: String,

    pub page: Page,

    /// Library page search box.
    pub search: String,

    pub try_state: TryState,

    /// Whether the stylesheet window is open.
    pub show_stylesheet: bool,

    /// Toasts with creation time (auto-expire).
    pub toasts: Vec<(Notification, Instant)>,

    /// Timestamped session activity, newest last.
    pub activity_log: Vec<String>,
}

impl LibraryState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            fonts: Vec::new(),
            stylesheet: String::new(),
            page: Page::default(),
            search: String::new(),
            try_state: TryState::new(settings, settings.theme != "light"),
            show_stylesheet: false,
            toasts: Vec::new(),
            activity_log: Vec::new(),
        }
    }

    /// Replace the font snapshot and forget comparison picks that are gone.
    pub fn set_fonts(&mut self, fonts: Vec<Font>) {
        self.fonts = fonts;
        let names: HashSet<&str> = self.fonts.iter().map(|f| f.name.as_str()).collect();
        self.try_state
            .selected
            .retain(|name| names.contains(name.as_str()));
    }

    /// Fonts matching the library search box.
    pub fn visible_fonts(&self) -> impl Iterator<Item = &Font> {
        let query = self.search.as_str();
        self.fonts
            .iter()
            .filter(move |f| validation::matches_search(&f.name, query))
    }

    /// Fonts shown on the try page: all of them, or only the picks in compare mode.
    pub fn fonts_to_try(&self) -> impl Iterator<Item = &Font> {
        let try_state = &self.try_state;
        self.fonts
            .iter()
            .filter(move |f| !try_state.compare_mode || try_state.selected.contains(&f.name))
    }

    pub fn push_toast(&mut self, notification: Notification) {
        self.log_activity(format!("{}: {}", notification.title, notification.description));
        self.toasts.push((notification, Instant::now()));
    }

    pub fn log_activity(&mut self, line: String) {
        let ts = Local::now().format("%H:%M:%S");
        self.activity_log.push(format!("[{}] {}", ts, line));
        if self.activity_log.len() > MAX_ACTIVITY_LINES {
            self.activity_log.remove(0);
        }
    }

    /// Purge toasts older than the given duration.
    pub fn purge_old_toasts(&mut self, max_age_secs: u64) {
        self.toasts
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}
