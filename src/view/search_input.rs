//! Search input widget for rendering the search bar.

use crate::state::SearchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Search input widget.
/// Renders the search bar while typing, and the submitted query once active.
pub struct SearchInput<'a> {
    search_state: &'a SearchState,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(search_state: &'a SearchState) -> Self {
        Self { search_state }
    }
}

/// Drop leading chars of `text` until it fits in `max_width` columns.
///
/// Keeps the end of the input, where the cursor is, in view.
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut start = 0;
    for (offset, ch) in text.char_indices() {
        if text[offset..].width() <= max_width {
            return &text[offset..];
        }
        start = offset + ch.len_utf8();
    }
    &text[start..]
}

/// Title with the match counter, e.g. `Search (2/5)`.
fn title(label: &str, state: &SearchState) -> String {
    let total = state.matches().len();
    match state.current_match() {
        Some((index, _)) => format!("{label} ({}/{total})", index + 1),
        None if total == 0 => format!("{label} (no matches)"),
        None => format!("{label} ({total})"),
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.search_state {
            SearchState::Typing { input, cursor, .. } => {
                let before: String = input.chars().take(*cursor).collect();
                // Borders take two columns, the cursor cell one more.
                let room = usize::from(area.width.saturating_sub(3));
                let before = visible_tail(&before, room).to_string();
                let mut after = input.chars().skip(*cursor);
                let cursor_char = after.next().map_or(" ".to_string(), String::from);
                let after_text: String = after.collect();

                let line = Line::from(vec![
                    Span::raw(before),
                    Span::styled(
                        cursor_char,
                        Style::default()
                            .bg(Color::White)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(after_text),
                ]);
                let paragraph = Paragraph::new(line).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(title("Search", self.search_state))
                        .style(Style::default().bg(Color::DarkGray)),
                );

                paragraph.render(area, buf);
            }
            SearchState::Active { query, .. } => {
                let paragraph = Paragraph::new(Line::from(query.as_str().to_string())).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(title("Search", self.search_state))
                        .style(Style::default().bg(Color::Blue)),
                );

                paragraph.render(area, buf);
            }
            SearchState::Inactive => {}
        }
    }
}
