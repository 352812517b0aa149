//! Tests for screen layout rendering.

use super::*;
use crate::state::app_state::tests::{json_state, text_state};
use crate::state::search_input_handler::{activate_search_input, handle_char_input};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::json;

// ===== Test Helpers =====

fn render(state: &AppState, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_layout(frame, state, ColorConfig::enabled()))
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

// ===== calculate_areas =====

#[test]
fn areas_without_search_have_no_search_bar() {
    let state = text_state("a");
    let areas = calculate_areas(Rect::new(0, 0, 40, 10), &state);

    assert_eq!(areas.title, Rect::new(0, 0, 40, 1));
    assert_eq!(areas.body, Rect::new(0, 1, 40, 8));
    assert_eq!(areas.search, None);
    assert_eq!(areas.status, Rect::new(0, 9, 40, 1));
}

#[test]
fn areas_with_search_reserve_search_bar() {
    let state = activate_search_input(text_state("a"));
    let areas = calculate_areas(Rect::new(0, 0, 40, 10), &state);

    assert_eq!(areas.body, Rect::new(0, 1, 40, 5));
    assert_eq!(areas.search, Some(Rect::new(0, 6, 40, 3)));
}

// ===== render_layout =====

#[test]
fn renders_title_body_and_status() {
    let state = json_state(json!({"k": {"a": 1}}));

    let screen = render(&state, 50, 5);

    assert_eq!(screen[0], "payview | tree | 1 lines");
    assert_eq!(screen[1], "▼ \"k\": {...}");
    assert!(screen[4].starts_with("[tree] 1/1 |"), "got: {}", screen[4]);
}

#[test]
fn body_respects_scroll_offset() {
    let mut state = text_state("zero\none\ntwo\nthree");
    state.scroll_offset = 2;
    state.cursor = 2;

    let screen = render(&state, 30, 4);

    assert_eq!(screen[1], "two");
    assert_eq!(screen[2], "three");
}

#[test]
fn status_bar_counts_matches_while_typing() {
    let mut state = activate_search_input(text_state("foo\nfoo"));
    state = handle_char_input(state, 'f');

    let screen = render(&state, 60, 8);

    assert!(screen[7].contains("2 matches"), "got: {}", screen[7]);
    assert!(screen[4].contains("Search (2)"), "got: {}", screen[4]);
}

#[test]
fn hints_follow_search_state() {
    assert!(keyboard_hints(&SearchState::Inactive).contains("/: search"));
    assert!(keyboard_hints(&SearchState::Typing {
        input: String::new(),
        cursor: 0,
        matches: vec![],
    })
    .contains("Enter: submit"));
}
