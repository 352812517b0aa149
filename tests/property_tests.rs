//! Property-based tests for the payload list model.
//!
//! Tests validate:
//! 1. `set_items` keeps count and row kinds in order
//! 2. Every reported search match points at the query text
//! 3. Toggling a placeholder twice restores the original display lines

use payview::model::{
    CaseSensitivity, HighlightColors, ItemSection, SearchQuery, ViewType,
};
use payview::view_state::{flatten, FlatLine, PayloadList};
use proptest::prelude::*;
use ratatui::style::Color;
use serde_json::{json, Value};

fn item_strategy() -> impl Strategy<Value = ItemSection> {
    prop_oneof![
        "[a-z ]{0,12}".prop_map(|s| ItemSection::line(s)),
        (any::<i64>(), "[a-z]{1,6}").prop_map(|(n, k)| ItemSection::json(json!({ k: n }))),
    ]
}

fn colors() -> HighlightColors {
    HighlightColors::new(Color::Yellow, Color::Black)
}

// ===== Property 1: Item Count and Kinds =====

proptest! {
    #[test]
    fn set_items_preserves_count_and_kinds(items in prop::collection::vec(item_strategy(), 0..20)) {
        let mut list = PayloadList::new();
        list.set_items(items.clone());

        prop_assert_eq!(list.item_count(), items.len());
        for (position, item) in items.iter().enumerate() {
            prop_assert_eq!(list.view_type(position), Some(item.view_type()));
            prop_assert_eq!(list.item(position), Some(item));
        }
        prop_assert_eq!(list.view_type(items.len()), None::<ViewType>);
    }
}

// ===== Property 2: Matches Point At Query =====

proptest! {
    #[test]
    fn matches_point_at_query_text(
        lines in prop::collection::vec("[abc ]{0,16}", 1..8),
        needle in "[abc]{1,3}",
    ) {
        let mut list = PayloadList::with_items(
            lines.iter().map(|l| ItemSection::line(l.as_str())).collect(),
        );
        let query = SearchQuery::new(needle.clone(), CaseSensitivity::Sensitive).unwrap();

        let matches = list.highlight_query(&query, colors());

        for m in &matches {
            let line = &lines[m.body_line - 1];
            let found: String = line.chars().skip(m.char_offset).take(needle.len()).collect();
            prop_assert_eq!(found, needle.clone());
        }

        let expected: usize = lines.iter().map(|l| query.occurrences(l).len()).sum();
        prop_assert_eq!(matches.len(), expected);
    }
}

// ===== Property 3: Double Toggle Restores Lines =====

proptest! {
    #[test]
    fn double_toggle_restores_lines(values in prop::collection::vec(any::<u8>(), 1..6), key in "[a-z]{1,5}") {
        let value = json!({ key: Value::from(values) });
        let mut list = PayloadList::with_items(vec![ItemSection::json(value)]);
        let before: Vec<String> = flatten(&list).iter().map(FlatLine::text).collect();

        prop_assert!(list.toggle(&[0]));
        prop_assert!(list.toggle(&[0]));

        let after: Vec<String> = flatten(&list).iter().map(FlatLine::text).collect();
        prop_assert_eq!(before, after);
    }
}
