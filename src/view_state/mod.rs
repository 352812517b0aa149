//! View-state layer: the payload list model and everything derived from it.
//!
//! Pure data transformations between the domain model and the terminal.
//! No terminal I/O happens here; the `view` module renders what this layer
//! produces.

pub mod body;
pub mod builder;
pub mod flatten;
pub mod highlighter;
pub mod image;
pub mod payload_list;

pub use body::{classify, BodyPresentation, ContainerKind};
pub use builder::build_items;
pub use flatten::{flatten, FlatLine, LineKind};
pub use highlighter::SyntaxHighlighter;
pub use self::image::{compute_luminance, contrasting_background, Checkerboard};
pub use payload_list::{Cell, ExpandState, Expander, ImageCell, JsonCell, ListChange, PayloadList};
