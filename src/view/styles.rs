//! Color handling for rendered output.
//!
//! Colors can be turned off with `--no-color` or the `NO_COLOR` environment
//! variable. Search highlights then fall back to reverse video so matches
//! stay visible.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }

    /// Style unchanged with colors on; otherwise reduced to its modifiers.
    pub fn style(self, style: Style) -> Style {
        if self.enabled {
            return style;
        }
        let mut plain = Style::default()
            .add_modifier(style.add_modifier)
            .remove_modifier(style.sub_modifier);
        if style.bg.is_some_and(|bg| bg != Color::Reset) {
            plain = plain.add_modifier(Modifier::REVERSED);
        }
        plain
    }

    /// Apply [`ColorConfig::style`] to every span of `line`.
    pub fn line(self, line: &Line<'static>) -> Line<'static> {
        if self.enabled {
            return line.clone();
        }
        let spans: Vec<Span<'static>> = line
            .spans
            .iter()
            .map(|span| Span::styled(span.content.clone(), self.style(span.style)))
            .collect();
        Line::from(spans).style(self.style(line.style))
    }
}

// ===== Pane styles =====

/// Title bar.
pub const TITLE_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Status bar.
pub const STATUS_STYLE: Style = Style::new().fg(Color::Gray);

/// Line under the cursor.
pub const CURSOR_STYLE: Style = Style::new().bg(Color::DarkGray);

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial(env)]
    fn no_color_flag_disables_colors() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled());
    }

    #[test]
    #[serial(env)]
    fn no_color_env_disables_colors() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");

        assert!(!config.colors_enabled());
    }

    #[test]
    fn enabled_config_keeps_styles() {
        let style = Style::new().fg(Color::Red).bg(Color::Blue);
        assert_eq!(ColorConfig::enabled().style(style), style);
    }

    #[test]
    fn disabled_config_turns_highlight_into_reverse_video() {
        let config = ColorConfig::from_env_and_args(true);
        let style = Style::new().fg(Color::Black).bg(Color::Yellow);

        assert_eq!(config.style(style), Style::new().add_modifier(Modifier::REVERSED));
    }

    #[test]
    fn disabled_config_keeps_modifiers_and_text() {
        let config = ColorConfig::from_env_and_args(true);
        let line = Line::from(vec![
            Span::styled("Host:", Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" x"),
        ]);

        let plain = config.line(&line);

        assert_eq!(plain.spans[0].content, "Host:");
        assert_eq!(plain.spans[0].style, Style::new().add_modifier(Modifier::BOLD));
        assert_eq!(plain.spans[1].style, Style::default());
    }
}
