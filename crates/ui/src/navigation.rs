//! Navigation state machine: a cyclic index over [`Screen::ALL`].
//!
//! There is no terminal state and every transition is legal from every
//! state. The navigator also remembers whether the first full page layout
//! has reached the display, since the host distinguishes page creation from
//! page rebuilds.

use crate::screen::Screen;

/// Current screen plus the start-up page flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    rendered_once: bool,
}

impl Navigator {
    /// Start on the forecast screen with no page sent yet.
    pub fn new() -> Self {
        Navigator {
            index: 0,
            rendered_once: false,
        }
    }

    /// Screen currently shown.
    #[must_use]
    pub fn current(&self) -> Screen {
        match Screen::from_index(self.index) {
            Some(s) => s,
            None => Screen::Forecast, // unreachable: index stays below COUNT
        }
    }

    /// Current index, always `< Screen::COUNT`.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next screen, wrapping after the last.
    // index < COUNT, so neither the add nor the remainder can overflow.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % Screen::COUNT;
    }

    /// Move to the previous screen, wrapping before the first.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn retreat(&mut self) {
        self.index = (self.index + Screen::COUNT - 1) % Screen::COUNT;
    }

    /// Jump back to the first screen.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Whether the start-up page has been created.
    #[must_use]
    pub fn has_rendered_once(&self) -> bool {
        self.rendered_once
    }

    /// Record that the start-up page exists. One-way.
    pub fn mark_rendered(&mut self) {
        self.rendered_once = true;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
