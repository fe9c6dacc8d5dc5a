//! User-facing notifications emitted by the library store.

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Destructive,
}

/// A short title + description message for the toast area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn fonts_added(count: usize) -> Self {
        Self::success(
            format!("Added {} {}", count, plural(count, "font", "fonts")),
            "The new fonts are ready to preview.",
        )
    }

    pub fn duplicate_font(name: &str) -> Self {
        Self::destructive(
            "Font already exists",
            format!("The font \"{}\" is already in your library.", name),
        )
    }

    pub fn archive_unreadable(name: &str) -> Self {
        Self::destructive(
            "Could not process archive",
            format!("\"{}\" could not be read. It may be corrupt.", name),
        )
    }

    pub fn invalid_files(count: usize) -> Self {
        Self::destructive(
            "Invalid files",
            format!(
                "Skipped {} {}. Only .ttf, .otf and .zip are supported.",
                count,
                plural(count, "file", "files")
            ),
        )
    }

    pub fn still_processing(count: usize) -> Self {
        Self::destructive(
            "Still processing",
            format!(
                "{} {} not added. Drop {} again once the current fonts are in.",
                count,
                plural(count, "file was", "files were"),
                plural(count, "it", "them")
            ),
        )
    }

    pub fn font_removed() -> Self {
        Self::success("Font removed", "The font was removed from your library.")
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// Capability to surface a notification to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Capability to install stylesheet text into the rendering environment.
pub trait StyleRegistry: Send + Sync {
    fn register_style(&self, css_text: &str);
}
