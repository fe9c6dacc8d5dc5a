//! `@font-face` stylesheet generation.

use crate::font::Font;

/// Render one `@font-face` rule per font, in library order.
///
/// Always regenerated from the full list; there is no incremental patching.
pub fn render(fonts: &[Font]) -> String {
    fonts
        .iter()
        .map(font_face_rule)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn font_face_rule(font: &Font) -> String {
    format!(
        "@font-face {{\n  font-family: '{}';\n  src: url('{}');\n}}\n",
        escape_css_string(&font.name),
        escape_css_string(&font.source_data),
    )
}

/// Escape a value for use inside a single-quoted CSS string.
fn escape_css_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\a "),
            _ => out.push(c),
        }
    }
    out
}

/// Number of `@font-face` rules in a stylesheet.
pub fn rule_count(css: &str) -> usize {
    css.matches("@font-face").count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontFile;

    fn font(name: &str) -> Font {
        Font::new(
            name.to_string(),
            FontFile {
                name: format!("{}.ttf", name),
                mime: "font/ttf".into(),
                bytes: b"abc".to_vec().into(),
            },
            1,
        )
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_render_one_rule_per_font() {
        let css = render(&[font("Alpha"), font("Beta")]);
        assert_eq!(rule_count(&css), 2);
        assert!(css.contains("font-family: 'Alpha';"));
        assert!(css.contains("font-family: 'Beta';"));
        assert!(css.contains("src: url('data:font/ttf;base64,YWJj');"));
        assert!(css.find("Alpha").unwrap() < css.find("Beta").unwrap());
    }

    #[test]
    fn test_escape_quotes() {
        let css = font_face_rule(&font("It's"));
        assert!(css.contains(r"font-family: 'It\'s';"));
        assert_eq!(escape_css_string(r"a\b"), r"a\\b");
    }
}
