//! Mouse event handler.
//!
//! Pure functions that transform AppState in response to mouse events
//! inside the body pane.

use crate::state::expand_handler::toggle_line;
use crate::state::scroll_handler::scroll_viewport;
use crate::state::AppState;
use ratatui::layout::Rect;

/// Lines moved per wheel notch.
pub const WHEEL_STEP: isize = 3;

/// Display line under a click at (`column`, `row`), if it hits the body pane.
pub fn line_at(state: &AppState, body_area: Rect, column: u16, row: u16) -> Option<usize> {
    let inside = column >= body_area.x
        && column < body_area.x + body_area.width
        && row >= body_area.y
        && row < body_area.y + body_area.height;
    if !inside {
        return None;
    }

    let line = state.scroll_offset + usize::from(row - body_area.y);
    (line < state.lines().len()).then_some(line)
}

/// Handle a left click: select the clicked line and toggle it if expandable.
pub fn handle_mouse_click(mut state: AppState, body_area: Rect, column: u16, row: u16) -> AppState {
    let Some(line) = line_at(&state, body_area, column, row) else {
        return state;
    };
    state.cursor = line;
    toggle_line(state, line)
}

/// Handle a wheel notch; `up` scrolls towards the top.
pub fn handle_mouse_scroll(state: AppState, up: bool) -> AppState {
    let delta = if up { -WHEEL_STEP } else { WHEEL_STEP };
    scroll_viewport(state, delta)
}

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
