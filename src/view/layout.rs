//! Screen layout rendering.
//!
//! Title bar on top, the body pane in the middle, the search bar (while a
//! search is open) and the status bar at the bottom.

use crate::model::ItemSection;
use crate::state::{AppState, SearchState};
use crate::view::constants::{SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT, TITLE_BAR_HEIGHT};
use crate::view::image::ImageRow;
use crate::view::search_input::SearchInput;
use crate::view::styles::{ColorConfig, CURSOR_STYLE, STATUS_STYLE, TITLE_STYLE};
use crate::view_state::{Cell, LineKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title bar.
    pub title: Rect,
    /// Payload lines.
    pub body: Rect,
    /// Search bar, present while a search is open.
    pub search: Option<Rect>,
    /// Status bar.
    pub status: Rect,
}

/// Split `area` for the current state.
pub fn calculate_areas(area: Rect, state: &AppState) -> ScreenAreas {
    let search_height = match state.search {
        SearchState::Inactive => 0,
        _ => SEARCH_INPUT_HEIGHT,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(search_height),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        title: chunks[0],
        body: chunks[1],
        search: (search_height > 0).then_some(chunks[2]),
        status: chunks[3],
    }
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &AppState, colors: ColorConfig) {
    let areas = calculate_areas(frame.area(), state);

    render_title(frame, areas.title, state, colors);
    render_body(frame, areas.body, state, colors);
    if let Some(search_area) = areas.search {
        frame.render_widget(SearchInput::new(&state.search), search_area);
    }
    render_status_bar(frame, areas.status, state, colors);
}

fn render_title(frame: &mut Frame, area: Rect, state: &AppState, colors: ColorConfig) {
    let text = format!(
        "payview | {} | {} lines",
        state.mode.label(),
        state.lines().len()
    );
    let paragraph = Paragraph::new(Line::from(text)).style(colors.style(TITLE_STYLE));
    frame.render_widget(paragraph, area);
}

/// Render the visible slice of display lines, starting at the scroll offset.
fn render_body(frame: &mut Frame, area: Rect, state: &AppState, colors: ColorConfig) {
    let visible = state
        .lines()
        .iter()
        .enumerate()
        .skip(state.scroll_offset)
        .take(usize::from(area.height));

    for (row, (index, line)) in (0u16..).zip(visible) {
        let line_area = Rect::new(area.x, area.y + row, area.width, 1);

        if let LineKind::Image { row: image_row } = line.kind {
            if let (Some(ItemSection::Image(image)), Some(Cell::Image(cell))) = (
                state.list().item(line.position),
                state.list().cell(line.position),
            ) {
                frame.render_widget(ImageRow::new(image, cell.background(), image_row), line_area);
            }
            continue;
        }

        let mut paragraph = Paragraph::new(colors.line(&line.line));
        if index == state.cursor {
            paragraph = paragraph.style(colors.style(CURSOR_STYLE));
        }
        frame.render_widget(paragraph, line_area);
    }
}

/// Keyboard hints for the current search state.
pub fn keyboard_hints(search: &SearchState) -> &'static str {
    match search {
        SearchState::Typing { .. } => "Enter: submit | Esc: cancel",
        SearchState::Active { .. } => "n/N: next/prev | /: new search | Esc: clear | q: quit",
        SearchState::Inactive => "j/k: move | Enter: toggle | /: search | r: raw/tree | q: quit",
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, colors: ColorConfig) {
    let position = if state.lines().is_empty() {
        "0/0".to_string()
    } else {
        format!("{}/{}", state.cursor + 1, state.lines().len())
    };

    let matches = match (state.search.current_match(), state.search.matches().len()) {
        (Some((index, _)), total) => format!(" | match {}/{total}", index + 1),
        (None, 0) => String::new(),
        (None, total) => format!(" | {total} matches"),
    };

    let text = format!(
        "[{}] {position}{matches} | {}",
        state.mode.label(),
        keyboard_hints(&state.search)
    );
    let paragraph = Paragraph::new(Line::from(text)).style(colors.style(STATUS_STYLE));
    frame.render_widget(paragraph, area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
