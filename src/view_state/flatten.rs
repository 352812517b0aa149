//! Flattening of a payload list tree into display lines.
//!
//! Each bound cell contributes zero or more lines. Nested lists under an
//! expanded placeholder are indented one level; nested lists of multi-key
//! objects and arrays (which have no inline text of their own) are not.

use crate::model::{BodyItem, ItemSection};
use crate::view_state::image::display_rows;
use crate::view_state::payload_list::{Cell, JsonCell, PayloadList};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Columns per nesting level.
pub const INDENT: usize = 2;

const KEY_STYLE: Style = Style::new().fg(Color::Cyan);
const VALUE_STYLE: Style = Style::new().fg(Color::Green);
const INDICATOR_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// What produced a display line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// One line of the headers block.
    Header,
    /// Part of a JSON row (inline row or closing bracket).
    Json,
    /// A body text line.
    Text,
    /// One terminal row of an image.
    Image {
        /// Row index within the image.
        row: u16,
    },
}

/// One display line.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatLine {
    /// Styled content.
    pub line: Line<'static>,
    /// Position of the root-list row this line belongs to.
    pub position: usize,
    /// Path to pass to [`PayloadList::toggle`] when this line is clicked.
    pub toggle: Option<Vec<usize>>,
    /// Origin of the line.
    pub kind: LineKind,
}

impl FlatLine {
    fn new(line: Line<'static>, position: usize, kind: LineKind) -> Self {
        Self {
            line,
            position,
            toggle: None,
            kind,
        }
    }

    /// Plain text of the line, without styling.
    pub fn text(&self) -> String {
        self.line.spans.iter().map(|s| s.content.as_ref()).collect()
    }
}

/// Flatten `list` into display lines, in row order.
pub fn flatten(list: &PayloadList) -> Vec<FlatLine> {
    let mut out = Vec::new();

    for (position, (item, cell)) in list.rows().enumerate() {
        match (item, cell) {
            (ItemSection::Header(header), _) => {
                out.extend(
                    header
                        .headers()
                        .lines
                        .iter()
                        .map(|line| FlatLine::new(line.clone(), position, LineKind::Header)),
                );
            }
            (ItemSection::Body(BodyItem::Line(line)), _) => {
                out.push(FlatLine::new(line.to_line(), position, LineKind::Text));
            }
            (ItemSection::Body(BodyItem::Json(_)), Cell::Json(json)) => {
                let mut path = vec![position];
                flatten_json(json, &mut path, 0, position, &mut out);
            }
            (ItemSection::Image(image), _) => {
                out.extend((0..display_rows(image.image())).map(|row| {
                    FlatLine::new(Line::default(), position, LineKind::Image { row })
                }));
            }
            // Cells are bound from their items, so a JSON item always has a JSON cell.
            (ItemSection::Body(BodyItem::Json(_)), _) => {}
        }
    }

    out
}

fn flatten_json(
    cell: &JsonCell,
    path: &mut Vec<usize>,
    depth: usize,
    root: usize,
    out: &mut Vec<FlatLine>,
) {
    let pad = " ".repeat(depth * INDENT);
    let inline = cell.key().is_some() || cell.start_value().is_some();

    if inline {
        let mut spans = vec![Span::raw(pad.clone())];
        if let Some(expander) = cell.expander() {
            spans.push(Span::styled(format!("{} ", expander.glyph()), INDICATOR_STYLE));
        }
        if let Some(key) = cell.key() {
            spans.push(Span::styled(key.to_string(), KEY_STYLE));
            spans.push(Span::raw(": "));
        }
        if let Some(start) = cell.start_value() {
            let style = if cell.expander().is_some() {
                Style::default()
            } else {
                VALUE_STYLE
            };
            spans.push(Span::styled(start.to_string(), style));
        }

        out.push(FlatLine {
            line: Line::from(spans),
            position: root,
            toggle: cell.expander().map(|_| path.clone()),
            kind: LineKind::Json,
        });
    }

    if let Some(nested) = cell.nested() {
        let child_depth = if inline { depth + 1 } else { depth };
        for (index, (_, child)) in nested.rows().enumerate() {
            if let Cell::Json(child) = child {
                path.push(index);
                flatten_json(child, path, child_depth, root, out);
                path.pop();
            }
        }
    }

    if let Some(end) = cell.end_value() {
        out.push(FlatLine::new(
            Line::from(format!("{pad}{end}")),
            root,
            LineKind::Json,
        ));
    }
}
