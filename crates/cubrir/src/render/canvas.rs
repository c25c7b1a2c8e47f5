//! Raster Canvas Primitives
//!
//! The drawing surface both renderers paint: an RGBA pixel buffer with
//! filled-rectangle and bitmap-text primitives plus PNG encoding. All
//! drawing is clipped to the canvas bounds; painting outside the canvas
//! is a no-op, never a panic.

use crate::render::font;
use crate::result::{CubrirError, CubrirResult};
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create color from hex value
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    const fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

/// In-memory RGBA drawing surface
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Allocate a canvas filled with the background color
    #[must_use]
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, background.to_rgba()),
        }
    }

    /// Canvas width in pixels
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Canvas height in pixels
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Read one pixel, `None` outside the canvas
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.pixels.width() && y < self.pixels.height() {
            let p = self.pixels.get_pixel(x, y);
            Some(Rgb::new(p[0], p[1], p[2]))
        } else {
            None
        }
    }

    /// Fill a `w` x `h` rectangle with its top-left corner at (`x`, `y`)
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        let (canvas_w, canvas_h) = self.pixels.dimensions();
        let x_end = x.saturating_add(w).min(canvas_w);
        let y_end = y.saturating_add(h).min(canvas_h);
        let rgba = color.to_rgba();

        for py in y.min(canvas_h)..y_end {
            for px in x.min(canvas_w)..x_end {
                self.pixels.put_pixel(px, py, rgba);
            }
        }
    }

    /// Draw a line of text with its top-left corner at (`x`, `y`)
    ///
    /// Glyphs come from the embedded 5x7 font, magnified by the integer
    /// `scale`; characters outside the printable ASCII range advance the
    /// pen but draw nothing.
    pub fn draw_text(&mut self, x: u32, y: u32, text: &str, color: Rgb, scale: u32) {
        let mut pen_x = x;
        for ch in text.chars() {
            self.draw_glyph(pen_x, y, ch, color, scale);
            pen_x = pen_x.saturating_add(font::ADVANCE * scale);
        }
    }

    fn draw_glyph(&mut self, x: u32, y: u32, ch: char, color: Rgb, scale: u32) {
        let Some(columns) = font::glyph(ch) else {
            return;
        };
        for (col, bits) in columns.iter().enumerate() {
            for row in 0..font::GLYPH_HEIGHT {
                if bits >> row & 1 == 1 {
                    self.fill_rect(
                        x.saturating_add(col as u32 * scale),
                        y.saturating_add(row * scale),
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
    }

    /// Encode the canvas as a PNG byte vector
    ///
    /// # Errors
    ///
    /// Returns [`CubrirError::ImageProcessing`] if encoding fails.
    pub fn encode(&self) -> CubrirResult<Vec<u8>> {
        let (width, height) = self.pixels.dimensions();
        let mut output = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut output, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder
                .write_header()
                .map_err(|e| CubrirError::ImageProcessing {
                    message: format!("failed to write PNG header: {e}"),
                })?;

            writer
                .write_image_data(self.pixels.as_raw())
                .map_err(|e| CubrirError::ImageProcessing {
                    message: format!("failed to write PNG data: {e}"),
                })?;
        }

        Ok(output)
    }
}

/// PNG signature, useful for asserting on encoded output
pub(crate) const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb::new(255, 255, 255);
    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const RED: Rgb = Rgb::new(255, 0, 0);

    mod color_tests {
        use super::*;

        #[test]
        fn test_rgb_from_hex() {
            let red = Rgb::from_hex(0xFF0000);
            assert_eq!(red, Rgb::new(255, 0, 0));

            let white = Rgb::from_hex(0xFFFFFF);
            assert_eq!(white, Rgb::new(255, 255, 255));
        }
    }

    mod rect_tests {
        use super::*;

        #[test]
        fn test_new_canvas_is_background() {
            let canvas = Canvas::new(10, 10, WHITE);
            assert_eq!(canvas.pixel(0, 0), Some(WHITE));
            assert_eq!(canvas.pixel(9, 9), Some(WHITE));
        }

        #[test]
        fn test_fill_rect_paints_inside() {
            let mut canvas = Canvas::new(10, 10, WHITE);
            canvas.fill_rect(2, 3, 4, 2, RED);
            assert_eq!(canvas.pixel(2, 3), Some(RED));
            assert_eq!(canvas.pixel(5, 4), Some(RED));
            assert_eq!(canvas.pixel(6, 3), Some(WHITE));
            assert_eq!(canvas.pixel(2, 5), Some(WHITE));
        }

        #[test]
        fn test_fill_rect_clips_at_bounds() {
            let mut canvas = Canvas::new(10, 10, WHITE);
            canvas.fill_rect(8, 8, 50, 50, RED);
            assert_eq!(canvas.pixel(9, 9), Some(RED));
        }

        #[test]
        fn test_fill_rect_fully_outside_is_noop() {
            let mut canvas = Canvas::new(10, 10, WHITE);
            canvas.fill_rect(100, 100, 5, 5, RED);
            assert_eq!(canvas.pixel(9, 9), Some(WHITE));
        }

        #[test]
        fn test_zero_size_rect_is_noop() {
            let mut canvas = Canvas::new(10, 10, WHITE);
            canvas.fill_rect(5, 5, 0, 0, RED);
            assert_eq!(canvas.pixel(5, 5), Some(WHITE));
        }
    }

    mod text_tests {
        use super::*;

        fn painted_pixels(canvas: &Canvas, color: Rgb) -> usize {
            let mut count = 0;
            for y in 0..canvas.height() {
                for x in 0..canvas.width() {
                    if canvas.pixel(x, y) == Some(color) {
                        count += 1;
                    }
                }
            }
            count
        }

        #[test]
        fn test_draw_text_paints_pixels() {
            let mut canvas = Canvas::new(60, 12, WHITE);
            canvas.draw_text(1, 1, "100%", BLACK, 1);
            assert!(painted_pixels(&canvas, BLACK) > 0);
        }

        #[test]
        fn test_scale_two_paints_more_pixels() {
            let mut small = Canvas::new(120, 24, WHITE);
            small.draw_text(1, 1, "8", BLACK, 1);
            let mut big = Canvas::new(120, 24, WHITE);
            big.draw_text(1, 1, "8", BLACK, 2);
            assert_eq!(
                painted_pixels(&big, BLACK),
                painted_pixels(&small, BLACK) * 4
            );
        }

        #[test]
        fn test_unprintable_chars_draw_nothing() {
            let mut canvas = Canvas::new(40, 12, WHITE);
            canvas.draw_text(1, 1, "\u{7F}\u{1F600}", BLACK, 1);
            assert_eq!(painted_pixels(&canvas, BLACK), 0);
        }

        #[test]
        fn test_text_off_canvas_is_clipped() {
            let mut canvas = Canvas::new(20, 10, WHITE);
            canvas.draw_text(18, 8, "wide text running off", BLACK, 1);
            // Just checking no panic and bounds hold
            assert!(canvas.pixel(19, 9).is_some());
        }
    }

    mod encode_tests {
        use super::*;

        #[test]
        fn test_encode_produces_png_magic() {
            let canvas = Canvas::new(16, 16, WHITE);
            let data = canvas.encode().unwrap();
            assert_eq!(&data[0..8], &PNG_MAGIC);
        }

        #[test]
        fn test_encode_roundtrip_dimensions() {
            let canvas = Canvas::new(33, 21, RED);
            let data = canvas.encode().unwrap();
            let decoded = image::load_from_memory(&data).unwrap().to_rgba8();
            assert_eq!(decoded.dimensions(), (33, 21));
            assert_eq!(decoded.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_fill_rect_never_panics(
                x in 0u32..200,
                y in 0u32..200,
                w in 0u32..200,
                h in 0u32..200
            ) {
                let mut canvas = Canvas::new(64, 64, WHITE);
                canvas.fill_rect(x, y, w, h, RED);
            }

            #[test]
            fn prop_encode_is_valid_png(
                width in 1u32..64,
                height in 1u32..64
            ) {
                let canvas = Canvas::new(width, height, BLACK);
                let data = canvas.encode().unwrap();
                prop_assert_eq!(&data[0..8], &PNG_MAGIC);
            }
        }
    }
}
