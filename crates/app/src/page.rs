//! The two page layouts the app shows.
//!
//! The screen page pairs a full-display image with a 1x1 single-item list
//! that captures input. With one item the list always sits at both scroll
//! boundaries, so every swipe arrives as a top or bottom boundary event.

use platform::{
    text::truncated, Container, ContainerFrame, ImageContainer, ListContainer, ListItem,
    PageLayout, TextContainer,
};

/// Image container receiving the rendered screen.
pub const SCREEN_IMAGE_ID: u8 = 1;
pub const SCREEN_IMAGE_NAME: &str = "screen";

/// Hidden list that captures gestures.
pub const EVENT_LIST_ID: u8 = 2;
pub const EVENT_LIST_NAME: &str = "evt";

/// Text container of the loading page.
pub const LOADING_TEXT_ID: u8 = 1;
pub const LOADING_TEXT_NAME: &str = "loading";
pub const LOADING_TEXT: &str = "Loading weather...";

/// Full-display image plus the 1x1 event-capture list.
pub fn screen_layout() -> PageLayout {
    let mut items = heapless::Vec::new();
    // One item always fits.
    items
        .push(ListItem {
            name: truncated(" "),
            width: 1,
            select_border: false,
        })
        .ok();

    PageLayout::new()
        .with(Container::Image(ImageContainer {
            frame: ContainerFrame::new(SCREEN_IMAGE_ID, SCREEN_IMAGE_NAME).full_display(),
        }))
        .with(Container::List(ListContainer {
            frame: ContainerFrame::new(EVENT_LIST_ID, EVENT_LIST_NAME)
                .size(1, 1)
                .capture_events(true),
            border_width: 0,
            items,
        }))
}

/// Single full-display text region shown until the first snapshot arrives.
pub fn loading_layout() -> PageLayout {
    PageLayout::new().with(Container::Text(TextContainer {
        frame: ContainerFrame::new(LOADING_TEXT_ID, LOADING_TEXT_NAME).full_display(),
        content: truncated(LOADING_TEXT),
        padding: 4,
    }))
}
