//! Transaction payload as supplied by the input source.

use crate::model::item::ImageItem;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use serde_json::Value;

/// A loaded payload: optional headers plus one body.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    headers: Option<Text<'static>>,
    body: PayloadBody,
}

impl Payload {
    /// Create a payload.
    pub fn new(headers: Option<Text<'static>>, body: PayloadBody) -> Self {
        Self { headers, body }
    }

    /// Styled headers block, if one was supplied.
    pub fn headers(&self) -> Option<&Text<'static>> {
        self.headers.as_ref()
    }

    /// The body.
    pub fn body(&self) -> &PayloadBody {
        &self.body
    }
}

/// Decoded body content.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadBody {
    /// Parsed JSON document.
    Json(Value),
    /// Anything that is neither JSON nor an image.
    Text(String),
    /// Decoded image.
    Image(ImageItem),
}

/// How body content is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyMode {
    /// Expandable JSON tree.
    #[default]
    Tree,
    /// Pretty-printed text lines, searchable.
    Raw,
}

impl BodyMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            BodyMode::Tree => BodyMode::Raw,
            BodyMode::Raw => BodyMode::Tree,
        }
    }

    /// Short label for status display.
    pub fn label(self) -> &'static str {
        match self {
            BodyMode::Tree => "tree",
            BodyMode::Raw => "raw",
        }
    }
}

/// Style raw `Name: value` header lines into a headers block.
///
/// Header names are bold. Lines without a colon are kept verbatim.
pub fn style_headers(raw: &str) -> Text<'static> {
    let lines: Vec<Line<'static>> = raw
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .map(|l| match l.split_once(':') {
            Some((name, value)) => Line::from(vec![
                Span::styled(
                    format!("{}:", name.trim()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {}", value.trim())),
            ]),
            None => Line::from(l.to_string()),
        })
        .collect();
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_headers_bolds_names() {
        let text = style_headers("Content-Type: application/json\nX-Id:42\n");
        assert_eq!(text.lines.len(), 2);
        assert_eq!(text.lines[0].spans[0].content, "Content-Type:");
        assert!(text.lines[0].spans[0]
            .style
            .add_modifier
            .contains(Modifier::BOLD));
        assert_eq!(text.lines[1].spans[1].content, " 42");
    }

    #[test]
    fn style_headers_skips_blank_lines() {
        let text = style_headers("\n\nHost: example.com\n\n");
        assert_eq!(text.lines.len(), 1);
    }

    #[test]
    fn style_headers_keeps_lines_without_colon() {
        let text = style_headers("HTTP/1.1 200 OK");
        assert_eq!(text.lines[0].spans[0].content, "HTTP/1.1 200 OK");
    }

    #[test]
    fn body_mode_toggles_back_and_forth() {
        assert_eq!(BodyMode::Tree.toggled(), BodyMode::Raw);
        assert_eq!(BodyMode::Raw.toggled(), BodyMode::Tree);
    }
}
