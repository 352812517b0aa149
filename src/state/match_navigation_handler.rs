//! Match navigation handler.
//!
//! Pure functions for moving between search matches. The current match gets
//! its own highlight colors on top of the regular match highlights, and the
//! cursor follows it.

use crate::state::search::{next_index, prev_index};
use crate::state::{AppState, SearchState};
use tracing::debug;

// ===== Public API =====

/// Navigate to the next search match, wrapping from last to first.
///
/// No-op unless a search is Active with at least one match.
pub fn next_match(state: AppState) -> AppState {
    navigate(state, next_index)
}

/// Navigate to the previous search match, wrapping from first to last.
///
/// No-op unless a search is Active with at least one match.
pub fn prev_match(state: AppState) -> AppState {
    navigate(state, prev_index)
}

// ===== Helper Functions =====

fn navigate(mut state: AppState, step: fn(Option<usize>, usize) -> Option<usize>) -> AppState {
    let SearchState::Active {
        matches, current, ..
    } = &mut state.search
    else {
        return state;
    };
    let Some(index) = step(*current, matches.len()) else {
        return state;
    };
    *current = Some(index);

    focus_current_match(state)
}

/// Re-highlight so only the current match carries the current-match colors,
/// then move the cursor onto its line.
fn focus_current_match(mut state: AppState) -> AppState {
    let (query, target) = match &state.search {
        SearchState::Active {
            query,
            matches,
            current: Some(index),
        } => match matches.get(*index) {
            Some(found) => (query.clone(), *found),
            None => return state,
        },
        _ => return state,
    };

    let colors = state.colors;
    let list = state.list_mut();
    list.highlight_query(&query, colors.matches);
    let Some(position) = list.body_line_position(target.body_line) else {
        return state;
    };
    list.highlight_at(position, target.char_offset, &query, colors.current);
    state.relayout();

    if let Some(line) = state.text_line_index(position) {
        debug!(body_line = target.body_line, line, "moved to match");
        state.cursor = line;
        state.ensure_cursor_visible();
    }
    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "match_navigation_handler_tests.rs"]
mod tests;
