//! Builds the root item sequence for a payload.

use crate::model::{BodyMode, HeaderItem, ItemSection, Payload, PayloadBody, StyledLine};
use crate::view_state::highlighter::SyntaxHighlighter;

/// Item sequence for `payload` in the given mode.
///
/// The headers block (if any) comes first. In tree mode a JSON body is a
/// single expandable section; in raw mode it is pretty-printed into
/// syntax-colored text lines. Text bodies are always split into lines.
pub fn build_items(
    payload: &Payload,
    mode: BodyMode,
    highlighter: &SyntaxHighlighter,
) -> Vec<ItemSection> {
    let mut items = Vec::new();

    if let Some(headers) = payload.headers() {
        items.push(ItemSection::Header(HeaderItem::new(headers.clone())));
    }

    match (payload.body(), mode) {
        (PayloadBody::Json(value), BodyMode::Tree) => {
            items.push(ItemSection::json(value.clone()));
        }
        (PayloadBody::Json(value), BodyMode::Raw) => {
            // Value serialization cannot fail: keys are always strings.
            let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            items.extend(
                highlighter
                    .highlight_lines(&pretty, Some("json"))
                    .into_iter()
                    .map(ItemSection::line),
            );
        }
        (PayloadBody::Text(text), _) => {
            items.extend(text.lines().map(StyledLine::new).map(ItemSection::line));
        }
        (PayloadBody::Image(image), _) => {
            items.push(ItemSection::Image(image.clone()));
        }
    }

    items
}
