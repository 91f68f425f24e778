//! Bitmap screen renderer: draw into a framebuffer, encode as PNG.

use g2_canvas::{CanvasError, Framebuffer};
use ui::{Screen, WeatherSnapshot};
use weather_screens::{render_screen_to, ScreenRenderer};

/// Renders screens to PNG bytes sized for the image container.
pub struct PngRenderer {
    canvas: Framebuffer,
}

impl PngRenderer {
    pub fn new() -> Self {
        Self {
            canvas: Framebuffer::for_display(),
        }
    }

    /// The last rendered frame.
    pub fn canvas(&self) -> &Framebuffer {
        &self.canvas
    }
}

impl Default for PngRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenRenderer for PngRenderer {
    type Image = Vec<u8>;
    type Error = CanvasError;

    fn render(&mut self, screen: Screen, weather: &WeatherSnapshot) -> Result<Vec<u8>, CanvasError> {
        match render_screen_to(&mut self.canvas, screen, weather, |_, _, _, _| {}) {
            Ok(()) => {}
            Err(never) => match never {},
        }
        self.canvas.to_png()
    }
}
