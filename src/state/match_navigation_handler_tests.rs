//! Tests for match navigation.

use super::*;
use crate::config::SearchColors;
use crate::model::{SearchMatch, StyleTag};
use crate::state::app_state::tests::text_state;
use crate::state::search_input_handler::{activate_search_input, handle_char_input, submit_search};

fn searched(text: &str, query: &str) -> AppState {
    let mut state = activate_search_input(text_state(text));
    for ch in query.chars() {
        state = handle_char_input(state, ch);
    }
    submit_search(state)
}

fn current_highlights(state: &AppState) -> Vec<(usize, std::ops::Range<usize>)> {
    let current = SearchColors::default().current;
    state
        .list()
        .rows()
        .filter_map(|(item, _)| item.as_body_line())
        .enumerate()
        .flat_map(|(index, line)| {
            line.annotations()
                .iter()
                .filter(|a| a.tag() == StyleTag::Highlight(current))
                .map(move |a| (index + 1, a.range()))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn next_match_advances_and_wraps() {
    let state = searched("foo bar foo\nbaz foo", "foo");
    assert_eq!(state.search.current_match(), Some((0, SearchMatch::new(1, 0))));

    let state = next_match(state);
    assert_eq!(state.search.current_match(), Some((1, SearchMatch::new(1, 8))));

    let state = next_match(state);
    assert_eq!(state.search.current_match(), Some((2, SearchMatch::new(2, 4))));
    assert_eq!(state.cursor, 1);

    let state = next_match(state);
    assert_eq!(state.search.current_match(), Some((0, SearchMatch::new(1, 0))));
    assert_eq!(state.cursor, 0);
}

#[test]
fn prev_match_wraps_to_last() {
    let state = prev_match(searched("foo\nfoo\nfoo", "foo"));
    assert_eq!(state.search.current_match(), Some((2, SearchMatch::new(3, 0))));
    assert_eq!(state.cursor, 2);
}

#[test]
fn only_the_current_match_has_current_colors() {
    let state = next_match(searched("foo bar foo", "foo"));

    assert_eq!(current_highlights(&state), vec![(1, 8..11)]);
}

#[test]
fn navigation_without_matches_is_noop() {
    let state = searched("abc", "zzz");
    let state = next_match(state);

    assert_eq!(state.search.current_match(), None);
    assert_eq!(state.cursor, 0);
}

#[test]
fn navigation_while_inactive_is_noop() {
    let state = next_match(text_state("foo"));
    assert_eq!(state.search, SearchState::Inactive);
}

#[test]
fn navigation_scrolls_match_into_view() {
    let text: Vec<String> = (0..20).map(|i| format!("row {i}")).collect();
    let mut state = text_state(&text.join("\n"));
    state.viewport_height = 5;

    let mut state = activate_search_input(state);
    for ch in "row 17".chars() {
        state = handle_char_input(state, ch);
    }
    let state = submit_search(state);

    assert_eq!(state.cursor, 17);
    assert_eq!(state.scroll_offset, 13);
}
