//! Image presentation: contrasting backgrounds and cell sampling.

use image::{Rgba, RgbaImage};
use ratatui::style::Color;

/// Images darker than this get the light checkerboard.
pub const LUMINANCE_THRESHOLD: f64 = 0.25;

/// Maximum terminal rows an image may occupy.
pub const MAX_IMAGE_ROWS: u16 = 24;

/// Side of one checkerboard square, in image-space half cells.
const HALF_GRID: u32 = 2;

/// Two-color checkerboard drawn behind transparent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkerboard {
    /// Color of squares where `(x + y)` is even.
    pub even: Color,
    /// Color of squares where `(x + y)` is odd.
    pub odd: Color,
}

impl Checkerboard {
    /// Palette for dark images.
    pub const LIGHT: Checkerboard = Checkerboard {
        even: Color::Rgb(0xEE, 0xEE, 0xEE),
        odd: Color::Rgb(0xCC, 0xCC, 0xCC),
    };

    /// Palette for bright images.
    pub const DARK: Checkerboard = Checkerboard {
        even: Color::Rgb(0x33, 0x33, 0x33),
        odd: Color::Rgb(0x22, 0x22, 0x22),
    };

    /// Square color under the pixel at `(x, y)`.
    pub fn color_at(self, x: u32, y: u32) -> Color {
        if (x / HALF_GRID + y / HALF_GRID) % 2 == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

/// Pick a background contrasting with an image of the given luminance.
///
/// Absent luminance means the image needs no background.
pub fn contrasting_background(luminance: Option<f64>) -> Option<Checkerboard> {
    let luminance = luminance?;
    if luminance < LUMINANCE_THRESHOLD {
        Some(Checkerboard::LIGHT)
    } else {
        Some(Checkerboard::DARK)
    }
}

/// Mean relative luminance (Rec. 709) of the visible pixels.
///
/// Returns `None` when every pixel is fully opaque, since nothing shows
/// through and no background is needed, and also when every pixel is fully
/// transparent.
pub fn compute_luminance(image: &RgbaImage) -> Option<f64> {
    if image.pixels().all(|p| p.0[3] == u8::MAX) {
        return None;
    }

    let (sum, count) = image
        .pixels()
        .filter(|p| p.0[3] > 0)
        .fold((0.0, 0usize), |(sum, count), p| (sum + relative_luminance(p), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

fn relative_luminance(pixel: &Rgba<u8>) -> f64 {
    let [r, g, b, _] = pixel.0;
    (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) / 255.0
}

/// Terminal rows used to show `image`. Each row carries two pixel rows.
pub fn display_rows(image: &RgbaImage) -> u16 {
    let rows = image.height().div_ceil(2);
    u16::try_from(rows).unwrap_or(u16::MAX).clamp(1, MAX_IMAGE_ROWS)
}

/// Maps terminal half-cells onto image pixels.
#[derive(Debug, Clone, Copy)]
pub struct ImageScale {
    scale: f64,
    columns: u16,
}

impl ImageScale {
    /// Scale `image` so its height fits [`display_rows`], and its width at
    /// most `max_columns`.
    pub fn fit(image: &RgbaImage, max_columns: u16) -> Self {
        let pixel_rows = f64::from(display_rows(image)) * 2.0;
        let mut scale = (f64::from(image.height()) / pixel_rows).max(f64::MIN_POSITIVE);
        let mut columns = (f64::from(image.width()) / scale).ceil();
        if columns > f64::from(max_columns) {
            scale = f64::from(image.width()) / f64::from(max_columns.max(1));
            columns = f64::from(max_columns);
        }
        Self {
            scale,
            columns: columns as u16,
        }
    }

    /// Columns used on screen.
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Color of the half-cell at column `x`, half-row `y`, blended onto the
    /// checkerboard (or black when there is none). `None` past the image.
    pub fn sample(
        &self,
        image: &RgbaImage,
        background: Option<Checkerboard>,
        x: u16,
        y: u32,
    ) -> Option<Color> {
        let px = (f64::from(x) * self.scale) as u32;
        let py = (f64::from(y) * self.scale) as u32;
        if px >= image.width() || py >= image.height() {
            return None;
        }

        let [r, g, b, a] = image.get_pixel(px, py).0;
        let under = background
            .map(|board| board.color_at(u32::from(x), y))
            .unwrap_or(Color::Black);
        Some(blend((r, g, b), a, under))
    }
}

fn blend(pixel: (u8, u8, u8), alpha: u8, under: Color) -> Color {
    let (ur, ug, ub) = match under {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    };
    let a = f64::from(alpha) / 255.0;
    let mix = |top: u8, bottom: u8| (f64::from(top) * a + f64::from(bottom) * (1.0 - a)).round() as u8;
    Color::Rgb(mix(pixel.0, ur), mix(pixel.1, ug), mix(pixel.2, ub))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_image_gets_light_background() {
        assert_eq!(contrasting_background(Some(0.1)), Some(Checkerboard::LIGHT));
    }

    #[test]
    fn bright_image_gets_dark_background() {
        assert_eq!(contrasting_background(Some(0.5)), Some(Checkerboard::DARK));
    }

    #[test]
    fn threshold_itself_selects_dark() {
        assert_eq!(
            contrasting_background(Some(LUMINANCE_THRESHOLD)),
            Some(Checkerboard::DARK)
        );
    }

    #[test]
    fn absent_luminance_selects_no_background() {
        assert_eq!(contrasting_background(None), None);
    }

    #[test]
    fn opaque_image_has_no_luminance() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([10, 10, 10, 255]));
        assert_eq!(compute_luminance(&image), None);
    }

    #[test]
    fn transparent_black_image_is_dark() {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        assert_eq!(compute_luminance(&image), Some(0.0));
    }

    #[test]
    fn translucent_white_image_is_bright() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 128]));
        let luminance = compute_luminance(&image).expect("translucent image");
        assert!((luminance - 1.0).abs() < 1e-9);
    }

    #[test]
    fn display_rows_halves_height_and_caps() {
        assert_eq!(display_rows(&RgbaImage::new(4, 5)), 3);
        assert_eq!(display_rows(&RgbaImage::new(4, 1000)), MAX_IMAGE_ROWS);
    }

    #[test]
    fn checkerboard_alternates_by_square() {
        let board = Checkerboard::LIGHT;
        assert_eq!(board.color_at(0, 0), board.even);
        assert_eq!(board.color_at(HALF_GRID, 0), board.odd);
        assert_eq!(board.color_at(HALF_GRID, HALF_GRID), board.even);
    }

    #[test]
    fn transparent_pixel_shows_background() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 0]));
        let scale = ImageScale::fit(&image, 80);
        let color = scale.sample(&image, Some(Checkerboard::DARK), 0, 0);
        assert_eq!(color, Some(Checkerboard::DARK.even));
    }

    #[test]
    fn opaque_pixel_hides_background() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        let scale = ImageScale::fit(&image, 80);
        assert_eq!(
            scale.sample(&image, Some(Checkerboard::DARK), 1, 1),
            Some(Color::Rgb(255, 0, 0))
        );
        assert_eq!(scale.sample(&image, None, 2, 0), None);
    }

    #[test]
    fn wide_image_is_narrowed_to_max_columns() {
        let image = RgbaImage::new(200, 2);
        let scale = ImageScale::fit(&image, 50);
        assert_eq!(scale.columns(), 50);
    }
}
