//! Item sections: one row's worth of payload content.
//!
//! An [`ItemSection`] is a closed sum type. Every render and classification
//! site matches it exhaustively, so there is no "unknown" row kind.

use crate::model::styled_line::StyledLine;
use image::RgbaImage;
use ratatui::text::Text;
use serde_json::Value;

/// One row of a payload list.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemSection {
    /// Pre-rendered headers block.
    Header(HeaderItem),
    /// Body content: a JSON node or a plain text line.
    Body(BodyItem),
    /// Decoded image.
    Image(ImageItem),
}

impl ItemSection {
    /// Wrap a JSON value as a body section.
    pub fn json(value: Value) -> Self {
        ItemSection::Body(BodyItem::Json(value))
    }

    /// Wrap a text line as a body section.
    pub fn line(line: impl Into<StyledLine>) -> Self {
        ItemSection::Body(BodyItem::Line(line.into()))
    }

    /// Row kind used to pick bind logic.
    pub fn view_type(&self) -> ViewType {
        match self {
            ItemSection::Header(_) => ViewType::Header,
            ItemSection::Body(_) => ViewType::Body,
            ItemSection::Image(_) => ViewType::Image,
        }
    }

    /// The body text line, if this row is one.
    pub fn as_body_line(&self) -> Option<&StyledLine> {
        match self {
            ItemSection::Body(BodyItem::Line(line)) => Some(line),
            _ => None,
        }
    }

    /// Mutable access to the body text line, if this row is one.
    pub fn as_body_line_mut(&mut self) -> Option<&mut StyledLine> {
        match self {
            ItemSection::Body(BodyItem::Line(line)) => Some(line),
            _ => None,
        }
    }
}

/// Row kind, in classification precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    /// Headers block.
    Header,
    /// JSON node or text line.
    Body,
    /// Image.
    Image,
}

/// Immutable styled header text.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderItem {
    headers: Text<'static>,
}

impl HeaderItem {
    /// Wrap already-styled header text.
    pub fn new(headers: Text<'static>) -> Self {
        Self { headers }
    }

    /// The styled header text.
    pub fn headers(&self) -> &Text<'static> {
        &self.headers
    }
}

/// Body content of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyItem {
    /// A JSON node, presented by the body renderer.
    Json(Value),
    /// A searchable line of text.
    Line(StyledLine),
}

/// Decoded image plus optional precomputed luminance.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageItem {
    image: RgbaImage,
    luminance: Option<f64>,
}

impl ImageItem {
    /// Create an image item. Luminance is clamped to `0.0..=1.0`.
    pub fn new(image: RgbaImage, luminance: Option<f64>) -> Self {
        Self {
            image,
            luminance: luminance.map(|l| l.clamp(0.0, 1.0)),
        }
    }

    /// The decoded pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Perceptual brightness, absent for fully opaque images.
    pub fn luminance(&self) -> Option<f64> {
        self.luminance
    }
}
