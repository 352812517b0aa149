//! Error types for payview.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose
//! via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`InputError`] - Payload/headers reading and decoding failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! Nothing in the list model itself fails: rows that cannot be toggled or
//! highlighted are silent no-ops. Only I/O errors reach `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the payload or headers input.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading payload input from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified file does not exist at the given path.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Full path that was attempted.
        path: PathBuf,
    },

    /// No file argument was given and stdin is a terminal.
    #[error("No input: provide a payload file or pipe data to stdin")]
    NoInput,

    /// The bytes looked like an image but could not be decoded.
    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// Generic I/O failure while reading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
