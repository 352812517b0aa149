//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod app_state;
pub mod expand_handler;
pub mod match_navigation_handler;
pub mod mode_handler;
pub mod mouse_handler;
pub mod scroll_handler;
pub mod search;
pub mod search_input_handler;

// Re-export for convenience
pub use app_state::AppState;
pub use expand_handler::{handle_expand_action, toggle_line};
pub use match_navigation_handler::{next_match, prev_match};
pub use mode_handler::handle_toggle_raw;
pub use mouse_handler::{handle_mouse_click, handle_mouse_scroll};
pub use scroll_handler::{handle_scroll_action, scroll_viewport};
pub use search::SearchState;
