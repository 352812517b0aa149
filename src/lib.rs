//! payview
//!
//! TUI viewer for a single HTTP transaction payload: an optional headers
//! block followed by a body rendered as a collapsible JSON tree, plain
//! text, or an image, with incremental search highlighting.
//!
//! Follows a Pure Core / Impure Shell split: `model`, `view_state` and
//! `state` are pure; `source`, `logging` and `view` do the I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
pub mod view_state;
