//! Label component for displaying text
//!
//! Positions are text baselines, matching how the screens are laid out.
//! Fonts come from the ISO 8859-1 set so that `°` renders.

use embedded_graphics::{
    mono_font::{
        iso_8859_1::{
            FONT_10X20, FONT_5X8, FONT_6X10, FONT_6X12, FONT_6X13_BOLD, FONT_7X13,
            FONT_7X13_BOLD, FONT_9X15, FONT_9X15_BOLD, FONT_9X18, FONT_9X18_BOLD,
        },
        MonoFont, MonoTextStyle,
    },
    pixelcolor::Gray4,
    prelude::*,
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::palette;

/// Text size variants
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextSize {
    Tiny,   // 5x8 font, axis ticks
    Small,  // 6x12 font, list rows
    Normal, // 7x13 font, body text
    Large,  // 9x15 font, headers
    XLarge, // 9x18 font, headline values
    Huge,   // 10x20 font, current temperature
}

impl TextSize {
    pub fn line_height(&self) -> u32 {
        self.font(false).character_size.height
    }

    pub fn char_width(&self) -> u32 {
        self.font(false).character_size.width
    }

    /// Font for this size, bold where a bold cut exists
    pub fn font(&self, bold: bool) -> &'static MonoFont<'static> {
        match (self, bold) {
            (TextSize::Tiny, false) => &FONT_5X8,
            (TextSize::Tiny, true) => &FONT_6X10,
            (TextSize::Small, false) => &FONT_6X12,
            (TextSize::Small, true) => &FONT_6X13_BOLD,
            (TextSize::Normal, false) => &FONT_7X13,
            (TextSize::Normal, true) => &FONT_7X13_BOLD,
            (TextSize::Large, false) => &FONT_9X15,
            (TextSize::Large, true) => &FONT_9X15_BOLD,
            (TextSize::XLarge, false) => &FONT_9X18,
            (TextSize::XLarge, true) => &FONT_9X18_BOLD,
            (TextSize::Huge, _) => &FONT_10X20,
        }
    }
}

/// Horizontal anchor of the label position
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl From<TextAlign> for Alignment {
    fn from(a: TextAlign) -> Self {
        match a {
            TextAlign::Left => Alignment::Left,
            TextAlign::Center => Alignment::Center,
            TextAlign::Right => Alignment::Right,
        }
    }
}

/// Label component for text display
pub struct Label<'a> {
    text: &'a str,
    color: Gray4,
    size: TextSize,
    bold: bool,
    align: TextAlign,
}

impl<'a> Label<'a> {
    /// Create a new label with the given text
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            color: palette::TEXT,
            size: TextSize::Normal,
            bold: false,
            align: TextAlign::Left,
        }
    }

    /// Set text color
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = color;
        self
    }

    /// Set text size
    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// Use the bold cut of the font
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set which edge (or the center) sits on the render position
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Get text dimensions
    pub fn dimensions(&self) -> Size {
        let font = self.size.font(self.bold);
        Size::new(
            self.text.chars().count() as u32 * font.character_size.width,
            font.character_size.height,
        )
    }

    /// Render label with its baseline at `position`; returns the drawn bounds
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<Rectangle, D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let character_style = MonoTextStyle::new(self.size.font(self.bold), self.color);
        let text_style = TextStyleBuilder::new()
            .alignment(self.align.into())
            .baseline(Baseline::Alphabetic)
            .build();

        let text = Text::with_text_style(self.text, position, character_style, text_style);
        let bounds = text.bounding_box();
        text.draw(display)?;

        Ok(bounds)
    }
}

/// Helper for creating labels with the recurring screen styles
pub struct LabelBuilder;

impl LabelBuilder {
    /// Screen title in the header row
    pub fn heading(text: &str) -> Label<'_> {
        Label::new(text).color(palette::TEXT).size(TextSize::Large)
    }

    /// Dim caption naming the value below it
    pub fn caption(text: &str) -> Label<'_> {
        Label::new(text).color(palette::TEXT_DIM).size(TextSize::Small)
    }

    /// Prominent bold value
    pub fn value(text: &str) -> Label<'_> {
        Label::new(text)
            .color(palette::TEXT)
            .size(TextSize::XLarge)
            .bold(true)
    }
}
