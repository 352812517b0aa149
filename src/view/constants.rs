//! Layout dimension constants for TUI rendering.

/// Height of the title bar in lines.
pub const TITLE_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for mode, match counter and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
///
/// Used while a search is being typed or is active.
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Event poll interval of the main loop.
pub const POLL_INTERVAL_MS: u64 = 250;
