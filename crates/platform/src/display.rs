//! Display bridge abstraction
//!
//! The glasses host exposes a page made of a few containers (image, list,
//! text). The first page request creates the start-up page; every later one
//! rebuilds it. Pixel data reaches an image container as encoded PNG bytes.

use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};
use heapless::{String, Vec};

use crate::text::truncated;

/// Display width in pixels.
pub const DISPLAY_WIDTH: u32 = 576;
/// Display height in pixels.
pub const DISPLAY_HEIGHT: u32 = 288;
/// Full display size.
pub const DISPLAY_SIZE: Size = Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);

/// Width of the full-screen image container.
pub const IMAGE_WIDTH: u32 = DISPLAY_WIDTH;
/// Height of the full-screen image container.
pub const IMAGE_HEIGHT: u32 = DISPLAY_HEIGHT;

/// Most containers a single page can hold.
pub const MAX_CONTAINERS: usize = 4;

/// Glasses display host: page layout and image upload.
pub trait DisplayBridge {
    /// Error type for page requests
    type Error: core::fmt::Debug + core::fmt::Display;

    /// Create the start-up page. Only valid once per session.
    fn create_startup_page(
        &mut self,
        layout: &PageLayout,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Replace the containers of the existing page.
    fn rebuild_page(
        &mut self,
        layout: &PageLayout,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Upload encoded image data into an image container.
    ///
    /// Upload failures are reported through the result code, never as an error.
    fn update_image(
        &mut self,
        update: &ImageUpdate<'_>,
    ) -> impl core::future::Future<Output = ImageUploadResult>;
}

/// Position, size and identity shared by every container kind.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ContainerFrame {
    /// Container id, unique within the page.
    pub id: u8,
    /// Semantic name (`"screen"`, `"evt"`, ...).
    pub name: String<16>,
    /// Left edge in display pixels.
    pub x: u16,
    /// Top edge in display pixels.
    pub y: u16,
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// Whether input gestures on this container are reported to the app.
    pub event_capture: bool,
}

impl ContainerFrame {
    /// A zero-sized frame at the origin.
    pub fn new(id: u8, name: &str) -> Self {
        Self {
            id,
            name: truncated(name),
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            event_capture: false,
        }
    }

    /// Set the top-left corner.
    #[must_use]
    pub fn at(mut self, x: u16, y: u16) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the size.
    #[must_use]
    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Cover the whole display.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // display dimensions fit in u16
    pub fn full_display(self) -> Self {
        self.at(0, 0)
            .size(DISPLAY_WIDTH as u16, DISPLAY_HEIGHT as u16)
    }

    /// Mark the container as the page's input-capturing region.
    #[must_use]
    pub fn capture_events(mut self, capture: bool) -> Self {
        self.event_capture = capture;
        self
    }

    /// Bounds as an `embedded-graphics` [`Rectangle`].
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(i32::from(self.x), i32::from(self.y)),
            Size::new(u32::from(self.width), u32::from(self.height)),
        )
    }
}

/// Image region that receives PNG uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageContainer {
    /// Placement.
    pub frame: ContainerFrame,
}

/// One entry of a list container.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ListItem {
    /// Item caption.
    pub name: String<16>,
    /// Item width in pixels.
    pub width: u16,
    /// Draw a border around the selected item.
    pub select_border: bool,
}

/// Scrollable list region.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ListContainer {
    /// Placement.
    pub frame: ContainerFrame,
    /// Border width in pixels.
    pub border_width: u8,
    /// Items, top to bottom.
    pub items: Vec<ListItem, 4>,
}

/// Text region rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextContainer {
    /// Placement.
    pub frame: ContainerFrame,
    /// Text shown in the region.
    pub content: String<64>,
    /// Inner padding in pixels.
    pub padding: u8,
}

/// A single page container.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Container {
    /// Image region.
    Image(ImageContainer),
    /// List region.
    List(ListContainer),
    /// Text region.
    Text(TextContainer),
}

impl Container {
    /// Placement of the container, whatever its kind.
    pub fn frame(&self) -> &ContainerFrame {
        match self {
            Self::Image(c) => &c.frame,
            Self::List(c) => &c.frame,
            Self::Text(c) => &c.frame,
        }
    }
}

/// A full page description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageLayout {
    /// Containers in id order.
    pub containers: Vec<Container, MAX_CONTAINERS>,
}

impl PageLayout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a container. Silently dropped when the page is full.
    #[must_use]
    pub fn with(mut self, container: Container) -> Self {
        // Bounded page: extra containers are a layout bug, not a runtime error.
        self.containers.push(container).ok();
        self
    }

    /// Container count announced to the host.
    #[allow(clippy::cast_possible_truncation)] // bounded by MAX_CONTAINERS
    pub fn container_total(&self) -> u8 {
        self.containers.len() as u8
    }

    /// Look up a container by id.
    pub fn container(&self, id: u8) -> Option<&Container> {
        self.containers.iter().find(|c| c.frame().id == id)
    }

    /// Number of containers that capture input.
    pub fn capture_count(&self) -> usize {
        self.containers
            .iter()
            .filter(|c| c.frame().event_capture)
            .count()
    }
}

/// Encoded pixels destined for one image container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageUpdate<'a> {
    /// Target container id.
    pub container_id: u8,
    /// Target container name.
    pub container_name: &'a str,
    /// PNG-encoded image bytes.
    pub data: &'a [u8],
}

/// Outcome code of an image upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImageUploadResult {
    /// Image accepted.
    Success,
    /// Host could not decode the image.
    ImageException,
    /// Image dimensions do not match the container.
    SizeInvalid,
    /// Transport to the glasses failed.
    SendFailed,
}

impl ImageUploadResult {
    /// Stable lowercase name used in the diagnostic log.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::ImageException => "imageException",
            Self::SizeInvalid => "imageSizeInvalid",
            Self::SendFailed => "sendFailed",
        }
    }

    /// Whether the upload succeeded.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl core::fmt::Display for ImageUploadResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page request errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeError {
    /// The host is not connected
    Disconnected,
    /// The host rejected the layout
    Rejected,
    /// Writing the request failed
    Io,
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for BridgeError {}

impl core::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "Display host not connected"),
            Self::Rejected => write!(f, "Display host rejected the page layout"),
            Self::Io => write!(f, "Display request could not be written"),
        }
    }
}
