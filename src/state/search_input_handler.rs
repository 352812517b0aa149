//! Search input handling.
//!
//! Transitions of [`SearchState`] driven by the search bar. While typing,
//! every edit re-runs the query over the body lines so highlights follow
//! the input incrementally.

use crate::model::SearchQuery;
use crate::state::match_navigation_handler::next_match;
use crate::state::{AppState, SearchState};
use tracing::info;

/// Open the search bar with an empty input.
///
/// Any previous search and its highlights are discarded.
pub fn activate_search_input(mut state: AppState) -> AppState {
    state.list_mut().reset_highlight();
    state.search = SearchState::Typing {
        input: String::new(),
        cursor: 0,
        matches: Vec::new(),
    };
    state.relayout();
    state
}

/// Insert `ch` at the cursor and re-highlight.
///
/// No-op if not in Typing state.
pub fn handle_char_input(mut state: AppState, ch: char) -> AppState {
    let SearchState::Typing { input, cursor, .. } = &mut state.search else {
        return state;
    };
    let at = byte_index(input, *cursor);
    input.insert(at, ch);
    *cursor += 1;
    refresh_highlights(state)
}

/// Delete the character before the cursor and re-highlight.
///
/// No-op if not in Typing state or the cursor is at the start.
pub fn handle_backspace(mut state: AppState) -> AppState {
    let SearchState::Typing { input, cursor, .. } = &mut state.search else {
        return state;
    };
    if *cursor == 0 {
        return state;
    }
    *cursor -= 1;
    let at = byte_index(input, *cursor);
    input.remove(at);
    refresh_highlights(state)
}

/// Move the input cursor one character left, saturating at 0.
pub fn handle_cursor_left(mut state: AppState) -> AppState {
    if let SearchState::Typing { cursor, .. } = &mut state.search {
        *cursor = cursor.saturating_sub(1);
    }
    state
}

/// Move the input cursor one character right, saturating at the end.
pub fn handle_cursor_right(mut state: AppState) -> AppState {
    if let SearchState::Typing { input, cursor, .. } = &mut state.search {
        *cursor = (*cursor + 1).min(input.chars().count());
    }
    state
}

/// Submit the typed query.
///
/// A non-empty query becomes Active and the cursor jumps to the first
/// match. An empty one closes the search.
pub fn submit_search(mut state: AppState) -> AppState {
    let SearchState::Typing { input, .. } = &state.search else {
        return state;
    };

    match SearchQuery::new(input.clone(), state.case) {
        Some(query) => {
            let colors = state.colors.matches;
            let matches = state.list_mut().highlight_query(&query, colors);
            info!(query = query.as_str(), matches = matches.len(), "search submitted");
            state.search = SearchState::Active {
                query,
                matches,
                current: None,
            };
            state.relayout();
            next_match(state)
        }
        None => cancel_search(state),
    }
}

/// Close the search and remove all highlights.
pub fn cancel_search(mut state: AppState) -> AppState {
    state.search = SearchState::Inactive;
    state.list_mut().reset_highlight();
    state.relayout();
    state
}

/// Re-run the typed input over the list.
fn refresh_highlights(mut state: AppState) -> AppState {
    let SearchState::Typing { input, .. } = &state.search else {
        return state;
    };

    let found = match SearchQuery::new(input.clone(), state.case) {
        Some(query) => {
            let colors = state.colors.matches;
            state.list_mut().highlight_query(&query, colors)
        }
        None => {
            state.list_mut().reset_highlight();
            Vec::new()
        }
    };

    if let SearchState::Typing { matches, .. } = &mut state.search {
        *matches = found;
    }
    state.relayout();
    state
}

fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map_or(text.len(), |(index, _)| index)
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
