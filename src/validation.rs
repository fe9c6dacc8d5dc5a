//! File type checks and font name derivation for ingestion

use once_cell::sync::Lazy;
use regex::Regex;

/// Mime types accepted as fonts regardless of the file name.
pub const FONT_MIME_TYPES: [&str; 2] = ["font/ttf", "font/otf"];

static FONT_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(ttf|otf)$").expect("font extension pattern is valid"));

/// Whether the file name ends in `.ttf` or `.otf` (case-insensitive).
pub fn has_font_extension(name: &str) -> bool {
    FONT_EXTENSION.is_match(name)
}

/// Whether the file name ends in `.zip` (case-insensitive).
pub fn is_zip_name(name: &str) -> bool {
    name.len() >= 4
        && name.is_char_boundary(name.len() - 4)
        && name[name.len() - 4..].eq_ignore_ascii_case(".zip")
}

/// Decide whether a candidate file is a font.
///
/// Either the declared mime type or the extension is enough; dropped files and
/// archive entries often arrive with an empty or generic mime type.
pub fn is_font_candidate(name: &str, mime: &str, extra_mime_types: &[String]) -> bool {
    FONT_MIME_TYPES.contains(&mime)
        || (!mime.is_empty() && extra_mime_types.iter().any(|m| m == mime))
        || has_font_extension(name)
}

/// Strip a trailing `.ttf`/`.otf` to get the font-family name.
pub fn font_name_from_file(name: &str) -> String {
    FONT_EXTENSION.replace(name, "").into_owned()
}

/// Mime type to use for a payload whose declared type is missing or generic.
pub fn mime_for_font(name: &str, declared: &str) -> String {
    if !declared.is_empty() && declared != "application/octet-stream" {
        return declared.to_string();
    }
    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".otf") {
        "font/otf".to_string()
    } else if lower.ends_with(".ttf") {
        "font/ttf".to_string()
    } else {
        "application/octet-stream".to_string()
    }
}

/// Case-insensitive substring match used by the library search box.
pub fn matches_search(font_name: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || font_name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_font_extension() {
        assert!(has_font_extension("Inter.ttf"));
        assert!(has_font_extension("Inter.OTF"));
        assert!(has_font_extension("dir/Inter.Ttf"));

        assert!(!has_font_extension("Inter.woff2"));
        assert!(!has_font_extension("ttf"));
        assert!(!has_font_extension("Inter.ttf.bak"));
    }

    #[test]
    fn test_is_zip_name() {
        assert!(is_zip_name("fonts.zip"));
        assert!(is_zip_name("FONTS.ZIP"));
        assert!(!is_zip_name("zip"));
        assert!(!is_zip_name("fonts.zip.txt"));
        assert!(!is_zip_name("خط.ttf"));
    }

    #[test]
    fn test_is_font_candidate() {
        assert!(is_font_candidate("Foo.ttf", "", &[]));
        assert!(is_font_candidate("blob", "font/otf", &[]));
        assert!(is_font_candidate("Foo.OTF", "application/octet-stream", &[]));

        assert!(!is_font_candidate("notes.txt", "text/plain", &[]));
        assert!(!is_font_candidate("Foo.woff", "font/woff", &[]));
        assert!(is_font_candidate("Foo.woff", "font/woff", &["font/woff".to_string()]));
        assert!(!is_font_candidate("blob", "", &["".to_string()]));
    }

    #[test]
    fn test_font_name_from_file() {
        assert_eq!(font_name_from_file("Foo.ttf"), "Foo");
        assert_eq!(font_name_from_file("Foo.OTF"), "Foo");
        assert_eq!(font_name_from_file("Foo Bold.ttf"), "Foo Bold");
        assert_eq!(font_name_from_file("Foo.ttf.otf"), "Foo.ttf");
        assert_eq!(font_name_from_file("blob"), "blob");
    }

    #[test]
    fn test_mime_for_font() {
        assert_eq!(mime_for_font("Foo.ttf", ""), "font/ttf");
        assert_eq!(mime_for_font("Foo.OTF", "application/octet-stream"), "font/otf");
        assert_eq!(mime_for_font("Foo.ttf", "font/sfnt"), "font/sfnt");
        assert_eq!(mime_for_font("blob", ""), "application/octet-stream");
    }

    #[test]
    fn test_matches_search() {
        assert!(matches_search("Noto Sans Arabic", "sans"));
        assert!(matches_search("Noto Sans Arabic", ""));
        assert!(matches_search("Noto Sans Arabic", "  ARABIC "));
        assert!(!matches_search("Noto Sans Arabic", "serif"));
    }
}
