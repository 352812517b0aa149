//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Handlers in the
//! sibling modules take it by value and return the transformed state.

use crate::config::{ResolvedConfig, SearchColors};
use crate::model::{BodyMode, CaseSensitivity, Payload, PayloadBody};
use crate::state::SearchState;
use crate::view_state::{build_items, flatten, FlatLine, LineKind, PayloadList, SyntaxHighlighter};
use tracing::debug;

// ===== AppState =====

/// Application state.
///
/// The payload list is the single source of truth for what is shown; the
/// flattened display lines are recomputed from it whenever it reports
/// changes.
///
/// # State Machine
///
/// - **Mode**: Tree ⇄ Raw (items rebuilt wholesale on every switch)
/// - **Search**: Inactive → Typing → Active → Inactive
/// - **Cursor**: one display line, always inside `lines` unless empty
pub struct AppState {
    payload: Payload,
    highlighter: SyntaxHighlighter,
    list: PayloadList,
    lines: Vec<FlatLine>,

    /// Tree or raw presentation of the body.
    pub mode: BodyMode,

    /// Index of the selected display line.
    pub cursor: usize,

    /// First display line shown in the viewport.
    pub scroll_offset: usize,

    /// Rows available to the body pane, updated on every draw.
    pub viewport_height: usize,

    /// Current search state.
    pub search: SearchState,

    /// Case handling for new queries.
    pub case: CaseSensitivity,

    /// Highlight colors.
    pub colors: SearchColors,
}

impl AppState {
    /// Build state for `payload` using resolved settings.
    pub fn new(payload: Payload, config: &ResolvedConfig) -> Self {
        let highlighter = SyntaxHighlighter::new(&config.theme);
        let mode = if config.raw {
            BodyMode::Raw
        } else {
            BodyMode::Tree
        };
        let list = PayloadList::with_items(build_items(&payload, mode, &highlighter));

        let mut state = Self {
            payload,
            highlighter,
            list,
            lines: Vec::new(),
            mode,
            cursor: 0,
            scroll_offset: 0,
            viewport_height: 0,
            search: SearchState::Inactive,
            case: config.case,
            colors: config.colors,
        };
        state.relayout();
        state
    }

    /// The loaded payload.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The root payload list.
    pub fn list(&self) -> &PayloadList {
        &self.list
    }

    /// Mutable access to the root list. Call [`AppState::relayout`] afterwards.
    pub fn list_mut(&mut self) -> &mut PayloadList {
        &mut self.list
    }

    /// Display lines derived from the list.
    pub fn lines(&self) -> &[FlatLine] {
        &self.lines
    }

    /// The line under the cursor.
    pub fn cursor_line(&self) -> Option<&FlatLine> {
        self.lines.get(self.cursor)
    }

    /// Rebuild display lines if the list reported changes.
    ///
    /// Returns whether anything was rebuilt.
    pub fn relayout(&mut self) -> bool {
        let changes = self.list.take_changes();
        if changes.is_empty() {
            return false;
        }
        debug!(changes = changes.len(), "relayout");

        self.lines = flatten(&self.list);
        self.cursor = self.cursor.min(self.lines.len().saturating_sub(1));
        self.ensure_cursor_visible();
        true
    }

    /// Replace every item with a fresh build for `mode`.
    pub fn rebuild_items(&mut self, mode: BodyMode) {
        self.mode = mode;
        let items = build_items(&self.payload, mode, &self.highlighter);
        self.list.set_items(items);
    }

    /// Scroll so that the cursor line is inside the viewport.
    pub fn ensure_cursor_visible(&mut self) {
        let height = self.viewport_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
        self.scroll_offset = self.scroll_offset.min(self.max_scroll_offset());
    }

    /// Largest offset that still fills the viewport.
    pub fn max_scroll_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_height.max(1))
    }

    /// Display line index of the body line at root `position`.
    pub fn text_line_index(&self, position: usize) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.position == position && line.kind == LineKind::Text)
    }
}

impl Default for AppState {
    /// An empty viewer with default settings.
    fn default() -> Self {
        Self {
            payload: Payload::new(None, PayloadBody::Text(String::new())),
            highlighter: SyntaxHighlighter::default(),
            list: PayloadList::new(),
            lines: Vec::new(),
            mode: BodyMode::default(),
            cursor: 0,
            scroll_offset: 0,
            viewport_height: 0,
            search: SearchState::Inactive,
            case: CaseSensitivity::default(),
            colors: SearchColors::default(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("mode", &self.mode)
            .field("lines", &self.lines.len())
            .field("cursor", &self.cursor)
            .field("scroll_offset", &self.scroll_offset)
            .field("search", &self.search)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
pub(crate) mod tests;
