//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Move the cursor up one line. Default: k/↑
    ScrollUp,
    /// Move the cursor down one line. Default: j/↓
    ScrollDown,
    /// Move up by one page height. Default: Ctrl+u/Page Up
    PageUp,
    /// Move down by one page height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to the first line. Default: g/Home
    ScrollToTop,
    /// Jump to the last line. Default: G/End
    ScrollToBottom,

    // Tree interaction
    /// Expand or collapse the placeholder under the cursor. Default: Enter/Space
    ToggleExpand,
    /// Switch between tree and raw text presentation. Default: r
    ToggleRaw,

    // Search
    /// Start typing a search query. Default: /
    StartSearch,
    /// Jump to the next match. Default: n
    NextMatch,
    /// Jump to the previous match. Default: N
    PrevMatch,
    /// Clear the search and its highlights. Default: Esc
    ClearSearch,

    // Application
    /// Quit. Default: q
    Quit,
}
