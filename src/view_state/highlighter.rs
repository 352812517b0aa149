//! Syntax coloring of raw body text using syntect + two-face.
//!
//! Colors become [`StyleTag::Base`] annotations on [`StyledLine`]s, so they
//! persist when search highlights are cleared.

use crate::model::{StyleTag, StyledLine};
use ratatui::style::Color;
use std::sync::LazyLock;
use syntect::easy::HighlightLines;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;
use two_face::theme::{EmbeddedLazyThemeSet, EmbeddedThemeName};

/// All valid theme names that can be used in configuration.
pub const VALID_THEMES: &[&str] = &[
    "base16-ocean-dark",
    "base16-ocean-light",
    "dracula",
    "github",
    "gruvbox-dark",
    "gruvbox-light",
    "monokai",
    "nord",
    "one-half-dark",
    "one-half-light",
    "solarized-dark",
    "solarized-light",
    "zenburn",
];

/// Default theme name.
pub const DEFAULT_THEME: &str = "base16-ocean-dark";

/// Lazy-loaded theme set containing all two-face themes.
static THEME_SET: LazyLock<EmbeddedLazyThemeSet> = LazyLock::new(two_face::theme::extra);

/// Syntax definitions, newline-terminated variant.
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(two_face::syntax::extra_newlines);

/// Map a theme name string to the corresponding EmbeddedThemeName.
fn theme_name_to_embedded(name: &str) -> Option<EmbeddedThemeName> {
    match name {
        "base16-ocean-dark" | "base16-ocean" => Some(EmbeddedThemeName::Base16OceanDark),
        "base16-ocean-light" => Some(EmbeddedThemeName::Base16OceanLight),
        "dracula" => Some(EmbeddedThemeName::Dracula),
        "github" => Some(EmbeddedThemeName::Github),
        "gruvbox-dark" => Some(EmbeddedThemeName::GruvboxDark),
        "gruvbox-light" => Some(EmbeddedThemeName::GruvboxLight),
        "monokai" => Some(EmbeddedThemeName::MonokaiExtended),
        "nord" => Some(EmbeddedThemeName::Nord),
        "one-half-dark" => Some(EmbeddedThemeName::OneHalfDark),
        "one-half-light" => Some(EmbeddedThemeName::OneHalfLight),
        "solarized-dark" => Some(EmbeddedThemeName::SolarizedDark),
        "solarized-light" => Some(EmbeddedThemeName::SolarizedLight),
        "zenburn" => Some(EmbeddedThemeName::Zenburn),
        _ => None,
    }
}

/// Check if a theme name is valid.
pub fn is_valid_theme(name: &str) -> bool {
    theme_name_to_embedded(name).is_some()
}

/// Syntax highlighter with configurable theme.
pub struct SyntaxHighlighter {
    theme_name: EmbeddedThemeName,
}

impl SyntaxHighlighter {
    /// Create a new highlighter with the specified theme.
    ///
    /// If the theme name is invalid, falls back to the default theme.
    pub fn new(theme_name: &str) -> Self {
        Self {
            theme_name: theme_name_to_embedded(theme_name)
                .unwrap_or(EmbeddedThemeName::Base16OceanDark),
        }
    }

    /// Split `code` into lines, each carrying base color annotations.
    ///
    /// `language` is a syntect token such as `"json"`; unknown or absent
    /// languages yield plain lines.
    pub fn highlight_lines(&self, code: &str, language: Option<&str>) -> Vec<StyledLine> {
        let theme = THEME_SET.get(self.theme_name);
        let syntax = language
            .and_then(|lang| SYNTAX_SET.find_syntax_by_token(lang))
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
        let mut highlighter = HighlightLines::new(syntax, theme);

        LinesWithEndings::from(code)
            .map(|raw| {
                let text = raw.trim_end_matches(['\n', '\r']);
                let mut line = StyledLine::new(text);
                let Ok(regions) = highlighter.highlight_line(raw, &SYNTAX_SET) else {
                    return line;
                };

                let mut offset = 0;
                for (style, piece) in regions {
                    let end = (offset + piece.len()).min(text.len());
                    if offset < end {
                        let fg = style.foreground;
                        line.annotate(offset..end, StyleTag::Base(Color::Rgb(fg.r, fg.g, fg.b)));
                    }
                    offset += piece.len();
                }
                line
            })
            .collect()
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}
