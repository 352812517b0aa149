//! Tests for mouse handling.

use super::*;
use crate::state::app_state::tests::{json_state, text_state};
use crate::view_state::FlatLine;
use serde_json::json;

const BODY: Rect = Rect {
    x: 0,
    y: 1,
    width: 40,
    height: 5,
};

#[test]
fn click_outside_body_is_ignored() {
    let state = text_state("a\nb");
    assert_eq!(line_at(&state, BODY, 0, 0), None);
    assert_eq!(line_at(&state, BODY, 40, 1), None);
}

#[test]
fn click_below_last_line_is_ignored() {
    let state = text_state("a\nb");
    assert_eq!(line_at(&state, BODY, 3, 3), None);
}

#[test]
fn click_maps_rows_through_scroll_offset() {
    let mut state = text_state("0\n1\n2\n3\n4\n5\n6\n7");
    state.scroll_offset = 2;
    assert_eq!(line_at(&state, BODY, 5, 2), Some(3));
}

#[test]
fn click_on_placeholder_toggles_it() {
    let state = json_state(json!({"k": [true]}));

    let state = handle_mouse_click(state, BODY, 4, 1);

    let texts: Vec<String> = state.lines().iter().map(FlatLine::text).collect();
    assert_eq!(texts, vec!["▲ \"k\": [", "  true,", "]"]);
}

#[test]
fn click_on_plain_line_moves_cursor() {
    let state = text_state("a\nb\nc");
    let state = handle_mouse_click(state, BODY, 0, 3);
    assert_eq!(state.cursor, 2);
}

#[test]
fn wheel_scrolls_by_step() {
    let text: Vec<String> = (0..20).map(|i| i.to_string()).collect();
    let mut state = text_state(&text.join("\n"));
    state.viewport_height = 5;

    let state = handle_mouse_scroll(state, false);
    assert_eq!(state.scroll_offset, 3);

    let state = handle_mouse_scroll(state, true);
    assert_eq!(state.scroll_offset, 0);
}
