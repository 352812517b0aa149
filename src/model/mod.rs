//! Domain model (pure types, no terminal I/O).

pub mod error;
pub mod item;
pub mod key_action;
pub mod payload;
pub mod search;
pub mod styled_line;

pub use error::{AppError, InputError};
pub use item::{BodyItem, HeaderItem, ImageItem, ItemSection, ViewType};
pub use key_action::KeyAction;
pub use payload::{style_headers, BodyMode, Payload, PayloadBody};
pub use search::{CaseSensitivity, Occurrence, SearchMatch, SearchQuery};
pub use styled_line::{Annotation, HighlightColors, StyleTag, StyledLine};
