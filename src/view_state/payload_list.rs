//! Payload list: the item sequence backing one list view, plus its bound cells.
//!
//! A [`PayloadList`] owns exactly one ordered sequence of [`ItemSection`]s.
//! Binding turns each section into a [`Cell`] holding presentation state
//! (inline texts, expand state, nested list). Nested lists are independent
//! `PayloadList`s owned by their parent cell; nothing is shared between levels.
//!
//! Mutations record [`ListChange`]s so the caller can redraw only what moved.

use crate::model::{
    BodyItem, HighlightColors, ItemSection, SearchMatch, SearchQuery, StyleTag, ViewType,
};
use crate::view_state::body::{self, BodyPresentation, ContainerKind};
use crate::view_state::image::{contrasting_background, Checkerboard};
use serde_json::Value;
use tracing::debug;

/// Change notification, mirroring a recyclable list's notify contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// Rows `start..start + count` were removed.
    RangeRemoved {
        /// First removed position.
        start: usize,
        /// Number of rows removed.
        count: usize,
    },
    /// Rows `start..start + count` were inserted.
    RangeInserted {
        /// First inserted position.
        start: usize,
        /// Number of rows inserted.
        count: usize,
    },
    /// The row at this position must be redrawn.
    ItemChanged(usize),
}

/// Ordered item sequence plus the cells bound from it.
#[derive(Debug, Default)]
pub struct PayloadList {
    items: Vec<ItemSection>,
    cells: Vec<Cell>,
    changes: Vec<ListChange>,
}

impl PayloadList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list already populated with `items`.
    pub fn with_items(items: Vec<ItemSection>) -> Self {
        let mut list = Self::new();
        list.set_items(items);
        list
    }

    /// A freshly bound child list. Its initial notifications are dropped:
    /// the parent row's own change covers them.
    fn nested(items: Vec<ItemSection>) -> Self {
        let mut list = Self::with_items(items);
        list.changes.clear();
        list
    }

    /// Replace the whole sequence.
    ///
    /// Previous items and cells are discarded, never merged. Records a
    /// full-range removal followed by a full-range insertion.
    pub fn set_items(&mut self, items: Vec<ItemSection>) {
        let previous = self.items.len();
        self.items = items;
        self.cells = self.items.iter().map(Cell::bind).collect();
        self.changes.push(ListChange::RangeRemoved {
            start: 0,
            count: previous,
        });
        self.changes.push(ListChange::RangeInserted {
            start: 0,
            count: self.items.len(),
        });
        debug!(previous, count = self.items.len(), "payload items replaced");
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The item at `position`.
    pub fn item(&self, position: usize) -> Option<&ItemSection> {
        self.items.get(position)
    }

    /// Row kind at `position`, `None` past the end.
    pub fn view_type(&self, position: usize) -> Option<ViewType> {
        self.items.get(position).map(ItemSection::view_type)
    }

    /// The cell bound at `position`.
    pub fn cell(&self, position: usize) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Items paired with their bound cells, in order.
    pub fn rows(&self) -> impl Iterator<Item = (&ItemSection, &Cell)> {
        self.items.iter().zip(self.cells.iter())
    }

    /// Drain pending change notifications.
    pub fn take_changes(&mut self) -> Vec<ListChange> {
        std::mem::take(&mut self.changes)
    }

    /// Whether any change notification is pending.
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Toggle the expandable row addressed by `path`.
    ///
    /// `path[0]` is a position in this list, `path[1]` a position in that
    /// row's nested list, and so on. Returns `false` (and changes nothing)
    /// if the path does not end on an expandable row.
    pub fn toggle(&mut self, path: &[usize]) -> bool {
        let Some((&position, rest)) = path.split_first() else {
            return false;
        };
        let Some(Cell::Json(cell)) = self.cells.get_mut(position) else {
            return false;
        };

        let toggled = if rest.is_empty() {
            cell.toggle()
        } else {
            match cell.nested.as_mut() {
                Some(nested) => {
                    let toggled = nested.toggle(rest);
                    nested.changes.clear();
                    toggled
                }
                None => false,
            }
        };

        if toggled {
            self.changes.push(ListChange::ItemChanged(position));
        }
        toggled
    }

    /// Highlight every occurrence of `query` in body-line rows.
    ///
    /// Only body lines are visited; they are numbered from 1 among
    /// themselves. Each visited line loses its previous highlights. A line
    /// is reported changed when it gains highlights or actually lost some.
    ///
    /// Returns all matches in row order.
    pub fn highlight_query(
        &mut self,
        query: &SearchQuery,
        colors: HighlightColors,
    ) -> Vec<SearchMatch> {
        let mut matches = Vec::new();
        let body_lines = self
            .items
            .iter_mut()
            .enumerate()
            .filter_map(|(position, item)| item.as_body_line_mut().map(|line| (position, line)));

        for (index, (position, line)) in body_lines.enumerate() {
            let occurrences = query.occurrences(line.text());
            let removed = line.clear_highlights();

            if occurrences.is_empty() {
                if removed > 0 {
                    self.changes.push(ListChange::ItemChanged(position));
                }
                continue;
            }

            for occurrence in occurrences {
                matches.push(SearchMatch::new(index + 1, occurrence.char_offset));
                line.annotate(occurrence.byte_range, StyleTag::Highlight(colors));
            }
            self.changes.push(ListChange::ItemChanged(position));
        }

        debug!(query = query.as_str(), matches = matches.len(), "search highlighted");
        matches
    }

    /// Override the highlight of one known occurrence, e.g. the current match.
    ///
    /// No-op unless the row at `position` is a body line and the range
    /// `char_offset..char_offset + query length` lies inside it.
    pub fn highlight_at(
        &mut self,
        position: usize,
        char_offset: usize,
        query: &SearchQuery,
        colors: HighlightColors,
    ) {
        let Some(line) = self
            .items
            .get_mut(position)
            .and_then(ItemSection::as_body_line_mut)
        else {
            return;
        };
        let (Some(start), Some(end)) = (
            line.byte_offset(char_offset),
            line.byte_offset(char_offset + query.char_len()),
        ) else {
            return;
        };
        if line.annotate(start..end, StyleTag::Highlight(colors)) {
            self.changes.push(ListChange::ItemChanged(position));
        }
    }

    /// Clear highlights from every body line, keeping base colors.
    pub fn reset_highlight(&mut self) {
        for (position, item) in self.items.iter_mut().enumerate() {
            let Some(line) = item.as_body_line_mut() else {
                continue;
            };
            if line.clear_highlights() > 0 {
                self.changes.push(ListChange::ItemChanged(position));
            }
        }
    }

    /// Row position of the `body_line`-th body line (1-based).
    pub fn body_line_position(&self, body_line: usize) -> Option<usize> {
        let nth = body_line.checked_sub(1)?;
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.as_body_line().is_some())
            .nth(nth)
            .map(|(position, _)| position)
    }
}

/// Presentation state bound from one item.
#[derive(Debug)]
pub enum Cell {
    /// Headers block; rendered straight from the item.
    Header,
    /// JSON node row.
    Json(JsonCell),
    /// Body text line; rendered straight from the item.
    Line,
    /// Image row.
    Image(ImageCell),
}

impl Cell {
    /// Bind an item, dispatching on its kind.
    pub fn bind(item: &ItemSection) -> Self {
        match item {
            ItemSection::Header(_) => Cell::Header,
            ItemSection::Body(BodyItem::Json(value)) => Cell::Json(JsonCell::bind(value)),
            ItemSection::Body(BodyItem::Line(_)) => Cell::Line,
            ItemSection::Image(image) => Cell::Image(ImageCell {
                background: contrasting_background(image.luminance()),
            }),
        }
    }
}

/// Bound state of a JSON row.
///
/// Visible pieces, in layout order: expand indicator, key, start value,
/// nested list, end value. Any of them may be hidden.
#[derive(Debug, Default)]
pub struct JsonCell {
    key: Option<String>,
    start_value: Option<String>,
    end_value: Option<String>,
    expander: Option<Expander>,
    nested: Option<PayloadList>,
}

impl JsonCell {
    fn bind(value: &Value) -> Self {
        match body::classify(value) {
            BodyPresentation::Empty => Self::default(),
            BodyPresentation::Primitive { text } => Self {
                start_value: Some(text),
                ..Self::default()
            },
            BodyPresentation::Field { key, value } => Self {
                key: Some(key),
                start_value: Some(value),
                ..Self::default()
            },
            BodyPresentation::Expandable { key, kind, value } => Self {
                key: Some(key),
                start_value: Some(kind.placeholder().to_string()),
                expander: Some(Expander::new(kind, value)),
                ..Self::default()
            },
            BodyPresentation::Nested { children } => Self {
                nested: Some(PayloadList::nested(children)),
                ..Self::default()
            },
        }
    }

    fn toggle(&mut self) -> bool {
        let Some(expander) = self.expander.as_mut() else {
            return false;
        };
        expander.toggle();

        // The nested list is rebuilt from scratch on every toggle.
        match expander.state {
            ExpandState::Expanded => {
                self.start_value = Some(expander.kind.open().to_string());
                self.end_value = Some(expander.kind.close().to_string());
                self.nested = Some(PayloadList::nested(body::expanded_items(&expander.value)));
            }
            ExpandState::Collapsed => {
                self.start_value = Some(expander.kind.placeholder().to_string());
                self.end_value = None;
                self.nested = None;
            }
        }
        debug!(state = ?expander.state, rotation = expander.rotation, "row toggled");
        true
    }

    /// Quoted key, if shown.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Inline value or opening bracket, if shown.
    pub fn start_value(&self) -> Option<&str> {
        self.start_value.as_deref()
    }

    /// Closing bracket, shown only while expanded.
    pub fn end_value(&self) -> Option<&str> {
        self.end_value.as_deref()
    }

    /// Expand affordance, present only for collapsible placeholders.
    pub fn expander(&self) -> Option<&Expander> {
        self.expander.as_ref()
    }

    /// Visible nested list.
    pub fn nested(&self) -> Option<&PayloadList> {
        self.nested.as_ref()
    }

    /// Whether the row has no visible content at all.
    pub fn is_blank(&self) -> bool {
        self.key.is_none() && self.start_value.is_none() && self.nested.is_none()
    }
}

/// Display state of a collapsible placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandState {
    /// Placeholder shown, nested list hidden.
    Collapsed,
    /// Brackets shown around the nested list.
    Expanded,
}

/// Expand affordance of a single-key object whose value is a container.
#[derive(Debug)]
pub struct Expander {
    kind: ContainerKind,
    value: Value,
    state: ExpandState,
    rotation: i32,
}

impl Expander {
    fn new(kind: ContainerKind, value: Value) -> Self {
        Self {
            kind,
            value,
            state: ExpandState::Collapsed,
            rotation: 0,
        }
    }

    fn toggle(&mut self) {
        self.state = match self.state {
            ExpandState::Collapsed => ExpandState::Expanded,
            ExpandState::Expanded => ExpandState::Collapsed,
        };
        self.rotation -= 180;
    }

    /// Current state.
    pub fn state(&self) -> ExpandState {
        self.state
    }

    /// Object or array.
    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    /// Accumulated indicator rotation in degrees.
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// Indicator glyph for the accumulated rotation.
    pub fn glyph(&self) -> char {
        if self.rotation.rem_euclid(360) == 0 {
            '▼'
        } else {
            '▲'
        }
    }
}

/// Bound state of an image row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCell {
    background: Option<Checkerboard>,
}

impl ImageCell {
    /// Checkerboard drawn behind transparent pixels, if any.
    pub fn background(&self) -> Option<Checkerboard> {
        self.background
    }
}

#[cfg(test)]
#[path = "payload_list_tests.rs"]
mod tests;
