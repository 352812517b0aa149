//! Tree/raw mode toggle.
//!
//! Switching mode replaces the root item sequence wholesale, so any running
//! search is re-applied to the new body lines.

use crate::model::SearchQuery;
use crate::state::{AppState, SearchState};
use tracing::info;

/// Switch between tree and raw presentation.
///
/// The cursor returns to the top. An Active search keeps its query but
/// loses its current match, since match positions refer to the old lines.
pub fn handle_toggle_raw(mut state: AppState) -> AppState {
    let mode = state.mode.toggled();
    info!(mode = mode.label(), "switching body mode");

    state.rebuild_items(mode);
    state.cursor = 0;
    state.scroll_offset = 0;

    let query = match &state.search {
        SearchState::Inactive => None,
        SearchState::Typing { input, .. } => SearchQuery::new(input.clone(), state.case),
        SearchState::Active { query, .. } => Some(query.clone()),
    };

    if let Some(query) = query {
        let colors = state.colors.matches;
        let found = state.list_mut().highlight_query(&query, colors);
        match &mut state.search {
            SearchState::Typing { matches, .. } => *matches = found,
            SearchState::Active {
                matches, current, ..
            } => {
                *matches = found;
                *current = None;
            }
            SearchState::Inactive => {}
        }
    }

    state.relayout();
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BodyMode, SearchMatch};
    use crate::state::app_state::tests::json_state;
    use crate::state::search_input_handler::{
        activate_search_input, handle_char_input, submit_search,
    };
    use crate::view_state::FlatLine;
    use serde_json::json;

    #[test]
    fn toggle_switches_to_raw_lines_and_back() {
        let state = json_state(json!({"a": 1}));

        let state = handle_toggle_raw(state);
        assert_eq!(state.mode, BodyMode::Raw);
        let texts: Vec<String> = state.lines().iter().map(FlatLine::text).collect();
        assert_eq!(texts, vec!["{", "  \"a\": 1", "}"]);

        let state = handle_toggle_raw(state);
        assert_eq!(state.mode, BodyMode::Tree);
        let texts: Vec<String> = state.lines().iter().map(FlatLine::text).collect();
        assert_eq!(texts, vec!["\"a\": \"1\","]);
    }

    #[test]
    fn toggle_resets_cursor() {
        let mut state = json_state(json!({"a": 1, "b": 2, "c": 3}));
        state.cursor = 2;

        let state = handle_toggle_raw(state);

        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn active_search_is_reapplied_to_raw_lines() {
        let mut state = activate_search_input(json_state(json!({"name": "x"})));
        for ch in "name".chars() {
            state = handle_char_input(state, ch);
        }
        let state = submit_search(state);
        assert!(state.search.matches().is_empty(), "tree rows are not searchable");

        let state = handle_toggle_raw(state);

        assert_eq!(state.search.matches(), &[SearchMatch::new(2, 3)]);
        assert_eq!(state.search.current_match(), None);
    }
}
