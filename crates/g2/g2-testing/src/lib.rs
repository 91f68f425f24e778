//! Headless canvas for screen tests.
//!
//! [`TestCanvas`] wraps a display-sized [`Framebuffer`] and remembers the
//! regions a renderer tags while it draws (`"rain-bar-3"` of kind `"Bar"`,
//! and so on), so tests can ask where a thing landed and what colors are
//! inside it instead of hard-coding pixel coordinates.
//!
//! ```no_run
//! use g2_testing::TestCanvas;
//! use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut t = TestCanvas::display();
//! t.draw(|fb, tag| {
//!     Rectangle::new(Point::new(10, 10), Size::new(40, 20))
//!         .into_styled(PrimitiveStyle::with_fill(Gray4::WHITE))
//!         .draw(fb)?;
//!     tag("header", "Panel", (10, 10), (40, 20));
//!     Ok::<_, core::convert::Infallible>(())
//! })
//! .unwrap();
//!
//! let header = t.get("header").unwrap();
//! t.expect_only(header.area, Gray4::WHITE).unwrap();
//! ```
//!
//! Golden images are compared in 4-bit gray levels. A missing golden is an
//! error; `UPDATE_GOLDEN=1` writes new goldens and rewrites existing ones.

#![warn(clippy::all)]
#![warn(clippy::print_stdout)]
// Test support: pixel loops over display-sized canvases.
#![allow(clippy::arithmetic_side_effects, clippy::cast_sign_loss)]

use std::ops::{Deref, DerefMut};
use std::path::Path;

use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::Rectangle};

pub use g2_canvas::Framebuffer;

/// Signature of the tagging callback renderers accept.
pub type TagFn<'a> = dyn FnMut(&str, &str, (i32, i32), (u32, u32)) + 'a;

/// A region a renderer tagged while drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged {
    pub id: String,
    /// Broad category such as `"Bar"`, `"Card"` or `"ActiveDot"`.
    pub kind: String,
    pub area: Rectangle,
}

impl Tagged {
    pub fn center(&self) -> Point {
        self.area.center()
    }

    pub fn left(&self) -> i32 {
        self.area.top_left.x
    }

    pub fn top(&self) -> i32 {
        self.area.top_left.y
    }

    /// First column past the right edge.
    pub fn right(&self) -> i32 {
        self.area.top_left.x + self.area.size.width as i32
    }

    /// First row past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.area.top_left.y + self.area.size.height as i32
    }

    pub fn width(&self) -> u32 {
        self.area.size.width
    }

    pub fn height(&self) -> u32 {
        self.area.size.height
    }
}

fn upsert(tags: &mut Vec<Tagged>, id: &str, kind: &str, top_left: (i32, i32), size: (u32, u32)) {
    let area = Rectangle::new(
        Point::new(top_left.0, top_left.1),
        Size::new(size.0, size.1),
    );
    match tags.iter_mut().find(|t| t.id == id) {
        Some(tag) => {
            kind.clone_into(&mut tag.kind);
            tag.area = area;
        }
        None => tags.push(Tagged {
            id: id.to_owned(),
            kind: kind.to_owned(),
            area,
        }),
    }
}

/// Framebuffer plus the regions tagged on it.
///
/// Derefs to [`Framebuffer`] for direct drawing and pixel access.
pub struct TestCanvas {
    frame: Framebuffer,
    tags: Vec<Tagged>,
}

impl TestCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            frame: Framebuffer::new(width, height),
            tags: Vec::new(),
        }
    }

    /// Canvas the size of the 576x288 glasses display.
    pub fn display() -> Self {
        Self {
            frame: Framebuffer::for_display(),
            tags: Vec::new(),
        }
    }

    /// Run a renderer against the framebuffer, recording every region it tags.
    ///
    /// Re-tagging an id replaces the earlier region.
    pub fn draw<E>(
        &mut self,
        paint: impl FnOnce(&mut Framebuffer, &mut TagFn<'_>) -> Result<(), E>,
    ) -> Result<(), E> {
        let Self { frame, tags } = self;
        let mut tag = |id: &str, kind: &str, top_left: (i32, i32), size: (u32, u32)| {
            upsert(tags, id, kind, top_left, size);
        };
        paint(frame, &mut tag)
    }

    /// Tag a region by hand.
    pub fn tag(&mut self, id: &str, kind: &str, top_left: (i32, i32), size: (u32, u32)) {
        upsert(&mut self.tags, id, kind, top_left, size);
    }

    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }

    /// The region tagged `id`. The error lists what was tagged instead.
    pub fn get(&self, id: &str) -> Result<&Tagged, String> {
        self.tags.iter().find(|t| t.id == id).ok_or_else(|| {
            let known: Vec<&str> = self.tags.iter().map(|t| t.id.as_str()).collect();
            format!("nothing tagged '{id}' (tagged: {})", known.join(", "))
        })
    }

    pub fn has(&self, id: &str) -> bool {
        self.tags.iter().any(|t| t.id == id)
    }

    /// Tagged regions of one kind, in drawing order.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Tagged> + 'a {
        self.tags.iter().filter(move |t| t.kind == kind)
    }

    pub fn tags(&self) -> &[Tagged] {
        &self.tags
    }

    // ── Pixels ──────────────────────────────────────────────────────────────

    /// Color at `p`, `None` outside the canvas.
    pub fn color_at(&self, p: Point) -> Option<Gray4> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.frame.get_pixel(p.x as u32, p.y as u32)
    }

    /// Pixels of exactly `color` inside `area`.
    pub fn count(&self, area: Rectangle, color: Gray4) -> usize {
        area.points()
            .filter(|&p| self.color_at(p) == Some(color))
            .count()
    }

    /// Pixels brighter than the background inside `area`.
    pub fn lit(&self, area: Rectangle) -> usize {
        area.points()
            .filter(|&p| self.color_at(p).is_some_and(|c| c.luma() > 0))
            .count()
    }

    pub fn expect_color(&self, p: Point, color: Gray4) -> Result<(), String> {
        match self.color_at(p) {
            Some(actual) if actual == color => Ok(()),
            Some(actual) => Err(format!(
                "({}, {}) is level {}, expected {}",
                p.x,
                p.y,
                actual.luma(),
                color.luma()
            )),
            None => Err(format!("({}, {}) is off the canvas", p.x, p.y)),
        }
    }

    /// Every pixel of `area` is `color`.
    pub fn expect_only(&self, area: Rectangle, color: Gray4) -> Result<(), String> {
        let total = area.points().count();
        let matching = self.count(area, color);
        if matching == total {
            Ok(())
        } else {
            Err(format!(
                "{} of {total} pixels in {area:?} are not level {}",
                total - matching,
                color.luma()
            ))
        }
    }

    /// At least one pixel of `area` is `color`.
    pub fn expect_some(&self, area: Rectangle, color: Gray4) -> Result<(), String> {
        if self.count(area, color) > 0 {
            Ok(())
        } else {
            Err(format!("no level {} pixel in {area:?}", color.luma()))
        }
    }

    /// Whether `area` here and `other_area` on `other` hold identical pixels.
    pub fn same_pixels(&self, area: Rectangle, other: &TestCanvas, other_area: Rectangle) -> bool {
        area.size == other_area.size
            && area
                .points()
                .zip(other_area.points())
                .all(|(a, b)| self.color_at(a) == other.color_at(b))
    }

    // ── Golden images ───────────────────────────────────────────────────────

    /// Compare against the golden PNG at `path`, allowing each pixel to differ
    /// by up to `tolerance` gray levels. Fails when the golden does not exist
    /// unless `UPDATE_GOLDEN` is set, in which case the canvas is written out.
    ///
    /// ```bash
    /// UPDATE_GOLDEN=1 cargo test -p weather-screens --test screens_visual
    /// ```
    pub fn check_golden(&self, path: impl AsRef<Path>, tolerance: u8) -> Result<(), String> {
        let path = path.as_ref();
        if std::env::var_os("UPDATE_GOLDEN").is_some() {
            return self.write_golden(path);
        }
        if !path.exists() {
            return Err(format!(
                "golden {} does not exist; run with UPDATE_GOLDEN=1 to create it",
                path.display()
            ));
        }

        let golden = image::open(path)
            .map_err(|e| format!("cannot read golden {}: {e}", path.display()))?
            .to_luma8();
        let golden = Framebuffer::from_gray_image(&golden);

        if (golden.width(), golden.height()) != (self.frame.width(), self.frame.height()) {
            return Err(format!(
                "golden {} is {}x{}, canvas is {}x{}",
                path.display(),
                golden.width(),
                golden.height(),
                self.frame.width(),
                self.frame.height()
            ));
        }

        let changed = self
            .frame
            .bounding_box()
            .points()
            .filter(|p| {
                let (x, y) = (p.x as u32, p.y as u32);
                match (self.frame.get_pixel(x, y), golden.get_pixel(x, y)) {
                    (Some(a), Some(b)) => a.luma().abs_diff(b.luma()) > tolerance,
                    _ => true,
                }
            })
            .count();

        if changed == 0 {
            Ok(())
        } else {
            Err(format!(
                "{changed} pixels differ from {} by more than {tolerance} levels; \
                 rerun with UPDATE_GOLDEN=1 if the change is intended",
                path.display()
            ))
        }
    }

    fn write_golden(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("cannot create {}: {e}", dir.display()))?;
        }
        self.frame
            .save_png(path)
            .map_err(|e| format!("cannot write golden {}: {e}", path.display()))
    }

    pub fn frame(&self) -> &Framebuffer {
        &self.frame
    }
}

impl Deref for TestCanvas {
    type Target = Framebuffer;

    fn deref(&self) -> &Framebuffer {
        &self.frame
    }
}

impl DerefMut for TestCanvas {
    fn deref_mut(&mut self) -> &mut Framebuffer {
        &mut self.frame
    }
}
