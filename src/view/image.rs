//! Image rendering with upper-half-block cells.

use crate::model::ImageItem;
use crate::view_state::image::ImageScale;
use crate::view_state::Checkerboard;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

const UPPER_HALF: &str = "▀";

/// One terminal row of an image: two pixel rows per cell, top in the
/// foreground and bottom in the background.
pub struct ImageRow<'a> {
    image: &'a ImageItem,
    background: Option<Checkerboard>,
    row: u16,
}

impl<'a> ImageRow<'a> {
    /// Widget for terminal row `row` of `image`.
    pub fn new(image: &'a ImageItem, background: Option<Checkerboard>, row: u16) -> Self {
        Self {
            image,
            background,
            row,
        }
    }
}

impl Widget for ImageRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let pixels = self.image.image();
        let scale = ImageScale::fit(pixels, area.width);
        let top_y = u32::from(self.row) * 2;

        for x in 0..scale.columns().min(area.width) {
            let Some(top) = scale.sample(pixels, self.background, x, top_y) else {
                continue;
            };
            let bottom = scale
                .sample(pixels, self.background, x, top_y + 1)
                .unwrap_or(Color::Reset);

            if let Some(cell) = buf.cell_mut((area.x + x, area.y)) {
                cell.set_symbol(UPPER_HALF).set_fg(top).set_bg(bottom);
            }
        }
    }
}
