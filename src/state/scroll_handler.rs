//! Cursor and viewport movement.
//!
//! Pure functions that transform AppState in response to scroll actions.
//! Keyboard actions move the cursor and the viewport follows it; the mouse
//! wheel moves the viewport and drags the cursor along only when it would
//! leave the screen.

use crate::model::KeyAction;
use crate::state::AppState;

/// Handle a scroll keyboard action.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The scroll action to handle
/// * `viewport_height` - Height of the visible body pane (for paging)
///
/// Non-scroll actions leave the state unchanged.
pub fn handle_scroll_action(
    mut state: AppState,
    action: KeyAction,
    viewport_height: usize,
) -> AppState {
    let last = state.lines().len().saturating_sub(1);
    let page = viewport_height.max(1);

    state.cursor = match action {
        KeyAction::ScrollUp => state.cursor.saturating_sub(1),
        KeyAction::ScrollDown => (state.cursor + 1).min(last),
        KeyAction::PageUp => state.cursor.saturating_sub(page),
        KeyAction::PageDown => (state.cursor + page).min(last),
        KeyAction::ScrollToTop => 0,
        KeyAction::ScrollToBottom => last,
        _ => return state,
    };

    state.viewport_height = viewport_height;
    state.ensure_cursor_visible();
    state
}

/// Scroll the viewport by `delta` lines (negative is up).
///
/// The cursor is clamped into the new viewport.
pub fn scroll_viewport(mut state: AppState, delta: isize) -> AppState {
    let max = state.max_scroll_offset();
    state.scroll_offset = state.scroll_offset.saturating_add_signed(delta).min(max);

    let height = state.viewport_height.max(1);
    let bottom = state.scroll_offset + height - 1;
    state.cursor = state.cursor.clamp(state.scroll_offset, bottom);
    state.cursor = state.cursor.min(state.lines().len().saturating_sub(1));
    state
}

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
