//! Expand/collapse handling.
//!
//! Pure functions that transform AppState by toggling the expandable JSON
//! row behind a display line.

use crate::state::AppState;
use tracing::debug;

/// Toggle the row under the cursor.
///
/// No-op if the cursor line is not expandable.
pub fn handle_expand_action(state: AppState) -> AppState {
    let line = state.cursor;
    toggle_line(state, line)
}

/// Toggle the row behind display line `line` and move the cursor onto it.
///
/// Lines without an expand affordance (primitives, closing brackets, text,
/// headers, images) are ignored.
pub fn toggle_line(mut state: AppState, line: usize) -> AppState {
    let Some(path) = state.lines().get(line).and_then(|l| l.toggle.clone()) else {
        return state;
    };

    if state.list_mut().toggle(&path) {
        debug!(?path, line, "toggled row");
        state.cursor = line;
        state.relayout();
    }
    state
}

#[cfg(test)]
#[path = "expand_handler_tests.rs"]
mod tests;
