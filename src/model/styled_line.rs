//! Annotated text lines.
//!
//! A [`StyledLine`] is plain text plus an ordered list of style annotations,
//! each covering a byte range of the text. Rendering replays the annotations
//! in order, so later annotations win where they overlap.
//!
//! Two kinds of annotation exist:
//! - [`StyleTag::Base`] - persistent foreground coloring (syntax colors).
//!   Never removed by [`StyledLine::clear_highlights`].
//! - [`StyleTag::Highlight`] - search highlighting. Removed on clear.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use std::ops::Range;

/// Background/foreground pair used to paint a search highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightColors {
    /// Background color of the highlighted range.
    pub background: Color,
    /// Foreground color of the highlighted range.
    pub foreground: Color,
}

impl HighlightColors {
    /// Create a new color pair.
    pub fn new(background: Color, foreground: Color) -> Self {
        Self {
            background,
            foreground,
        }
    }
}

/// Kind of style annotation attached to a range of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    /// Persistent foreground color. Survives highlight clearing.
    Base(Color),
    /// Search highlight.
    Highlight(HighlightColors),
}

impl StyleTag {
    fn apply(self, style: Style) -> Style {
        match self {
            StyleTag::Base(color) => style.fg(color),
            StyleTag::Highlight(colors) => style.bg(colors.background).fg(colors.foreground),
        }
    }
}

/// A style tag bound to a byte range of the line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    range: Range<usize>,
    tag: StyleTag,
}

impl Annotation {
    /// Byte range covered by this annotation.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Style carried by this annotation.
    pub fn tag(&self) -> StyleTag {
        self.tag
    }
}

/// A single mutable line of body text with its style annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    text: String,
    annotations: Vec<Annotation>,
}

impl StyledLine {
    /// Create an unstyled line.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    /// The raw text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Annotations in application order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Number of highlight annotations currently attached.
    pub fn highlight_count(&self) -> usize {
        self.annotations
            .iter()
            .filter(|a| matches!(a.tag, StyleTag::Highlight(_)))
            .count()
    }

    /// Attach an annotation.
    ///
    /// Returns `false` and leaves the line untouched if the range is empty,
    /// out of bounds, or does not fall on char boundaries.
    pub fn annotate(&mut self, range: Range<usize>, tag: StyleTag) -> bool {
        if range.start >= range.end
            || range.end > self.text.len()
            || !self.text.is_char_boundary(range.start)
            || !self.text.is_char_boundary(range.end)
        {
            return false;
        }
        self.annotations.push(Annotation { range, tag });
        true
    }

    /// Remove every annotation except [`StyleTag::Base`] ones.
    ///
    /// Returns the number of annotations removed.
    pub fn clear_highlights(&mut self) -> usize {
        let before = self.annotations.len();
        self.annotations
            .retain(|a| matches!(a.tag, StyleTag::Base(_)));
        before - self.annotations.len()
    }

    /// Convert a char offset into a byte offset, if it lies within the text.
    pub fn byte_offset(&self, char_offset: usize) -> Option<usize> {
        if char_offset == self.text.chars().count() {
            return Some(self.text.len());
        }
        self.text.char_indices().nth(char_offset).map(|(b, _)| b)
    }

    /// Compose the annotations into a renderable line.
    ///
    /// The text is split at every annotation boundary. Each segment's style
    /// is built by replaying, in order, the annotations that cover it.
    pub fn to_line(&self) -> Line<'static> {
        if self.annotations.is_empty() {
            return Line::from(self.text.clone());
        }

        let mut cuts: Vec<usize> = self
            .annotations
            .iter()
            .flat_map(|a| [a.range.start, a.range.end])
            .chain([0, self.text.len()])
            .collect();
        cuts.sort_unstable();
        cuts.dedup();

        let spans: Vec<Span<'static>> = cuts
            .windows(2)
            .map(|w| {
                let (start, end) = (w[0], w[1]);
                let style = self
                    .annotations
                    .iter()
                    .filter(|a| a.range.start <= start && end <= a.range.end)
                    .fold(Style::default(), |style, a| a.tag.apply(style));
                Span::styled(self.text[start..end].to_string(), style)
            })
            .collect();

        Line::from(spans)
    }
}

impl From<&str> for StyledLine {
    fn from(text: &str) -> Self {
        StyledLine::new(text)
    }
}

impl From<String> for StyledLine {
    fn from(text: String) -> Self {
        StyledLine::new(text)
    }
}
