//! CPU framebuffer for the G2 glasses display
//!
//! A 4-bit grayscale pixel buffer that implements [`DrawTarget`], so every
//! screen renderer can draw into it with `embedded-graphics` primitives, and
//! that encodes itself as an 8-bit grayscale PNG for upload to the glasses.
//!
//! The G2 draws light on black: a cleared framebuffer is black (luma 0) and
//! white (luma 15) is the brightest lit pixel.

#![warn(clippy::all)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]

use std::io::Cursor;
use std::path::Path;

use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::{DrawTarget, GrayColor, OriginDimensions, Pixel, Size},
};
use image::{GrayImage, ImageFormat, Luma};
use platform::display::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Scale from 4-bit luma (0–15) to 8-bit (0–255).
const LUMA_SCALE: u8 = 17;

/// PNG encoding errors
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// The image encoder failed
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// The framebuffer does not hold width × height pixels
    #[error("Framebuffer holds {actual} pixels, expected {expected}")]
    SizeMismatch {
        /// width × height
        expected: usize,
        /// pixels actually held
        actual: usize,
    },
}

/// CPU-side Gray4 framebuffer
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pixels: Vec<Gray4>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a black framebuffer of the given size
    // SAFETY: width * height is a pixel count bounded by display dimensions,
    // so it fits in u32; cast to usize is always safe on 32-bit+ targets.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Gray4::BLACK; (width * height) as usize],
            width,
            height,
        }
    }

    /// Create a framebuffer matching the 576×288 glasses display
    pub fn for_display() -> Self {
        Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set pixel at coordinates; out-of-bounds writes are dropped
    // SAFETY: x < width and y < height are checked before use.
    #[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Gray4) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) as usize;
            self.pixels[idx] = color;
        }
    }

    /// Get pixel at coordinates
    #[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Gray4> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Fill entire framebuffer with color
    pub fn fill(&mut self, color: Gray4) {
        self.pixels.fill(color);
    }

    /// Clear framebuffer to black
    pub fn clear_black(&mut self) {
        self.fill(Gray4::BLACK);
    }

    /// Number of pixels brighter than black
    pub fn lit_pixel_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.luma() > 0).count()
    }

    /// Convert to an 8-bit grayscale image
    #[allow(clippy::arithmetic_side_effects)] // luma <= 15, 15 * 17 = 255
    pub fn to_gray_image(&self) -> Result<GrayImage, CanvasError> {
        let raw = self
            .pixels
            .iter()
            .map(|p| p.luma() * LUMA_SCALE)
            .collect::<Vec<u8>>();
        let expected = raw.len();
        GrayImage::from_raw(self.width, self.height, raw).ok_or(CanvasError::SizeMismatch {
            expected: (self.width as usize).saturating_mul(self.height as usize),
            actual: expected,
        })
    }

    /// Encode as PNG bytes
    pub fn to_png(&self) -> Result<Vec<u8>, CanvasError> {
        let img = self.to_gray_image()?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Save as a PNG file
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        self.to_gray_image()?.save(path)?;
        Ok(())
    }

    /// Rebuild a framebuffer from an 8-bit grayscale image
    pub fn from_gray_image(img: &GrayImage) -> Self {
        let mut fb = Self::new(img.width(), img.height());
        for (x, y, Luma([v])) in img.enumerate_pixels() {
            fb.set_pixel(x, y, Gray4::new(v / LUMA_SCALE));
        }
        fb
    }
}

impl DrawTarget for Framebuffer {
    type Color = Gray4;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };

    #[test]
    fn test_new_framebuffer_is_black() {
        let fb = Framebuffer::new(10, 10);
        assert_eq!(fb.get_pixel(0, 0), Some(Gray4::BLACK));
        assert_eq!(fb.get_pixel(9, 9), Some(Gray4::BLACK));
        assert_eq!(fb.lit_pixel_count(), 0);
    }

    #[test]
    fn test_display_framebuffer_size() {
        let fb = Framebuffer::for_display();
        assert_eq!(fb.size(), Size::new(576, 288));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut fb = Framebuffer::new(4, 4);
        fb.set_pixel(4, 0, Gray4::WHITE);
        assert_eq!(fb.get_pixel(4, 0), None);
        assert_eq!(fb.lit_pixel_count(), 0);
    }

    #[test]
    fn test_draw_clips_negative_coordinates() {
        let mut fb = Framebuffer::new(8, 8);
        Rectangle::new(Point::new(-4, -4), Size::new(6, 6))
            .into_styled(PrimitiveStyle::with_fill(Gray4::WHITE))
            .draw(&mut fb)
            .unwrap();
        assert_eq!(fb.lit_pixel_count(), 4);
    }

    #[test]
    fn test_png_round_trip_keeps_levels() {
        let mut fb = Framebuffer::new(16, 2);
        for x in 0..16u8 {
            fb.set_pixel(u32::from(x), 0, Gray4::new(x));
        }
        let png = fb.to_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
        let decoded = image::load_from_memory(&png).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), (16, 2));
        assert_eq!(decoded.get_pixel(15, 0).0[0], 255);
        assert_eq!(Framebuffer::from_gray_image(&decoded), fb);
    }
}
