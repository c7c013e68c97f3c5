//! Persistent per-window state.

use uuid::Uuid;

use crate::geom::{Point, Rect};

/// Everything the core remembers about one window between frames.
///
/// Descriptors are created the first time a surface declares a slot and live
/// until the surface declares fewer windows in a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowDescriptor {
    /// Declared name. In ordinal identity mode this reflects the name used
    /// when the slot was first filled.
    pub(crate) name: String,
    /// Unique identifier, assigned at creation.
    pub(crate) guid: Uuid,
    /// Creation order across the whole context, used to break depth ties.
    pub(crate) serial: u64,
    /// Window rectangle in screen coordinates, header included.
    pub(crate) rect: Rect,
    /// Header band.
    pub(crate) header: Rect,
    /// Body below the header. Zero height while collapsed.
    pub(crate) content: Rect,
    /// Resize handle.
    pub(crate) resize: Rect,
    /// Stacking depth. 0 is topmost.
    pub(crate) depth: u32,
    /// True when the body is expanded.
    pub(crate) content_active: bool,
    /// False once a closable window has been closed. Closed windows keep
    /// their slot but are not drawn or hit-tested.
    pub(crate) open: bool,
}

impl WindowDescriptor {
    /// Build a descriptor with derived rectangles computed from `rect`.
    pub(crate) fn new(
        name: &str,
        serial: u64,
        rect: Rect,
        header_height: f32,
        depth: u32,
        content_active: bool,
        open: bool,
    ) -> Self {
        let mut w = Self {
            name: name.to_string(),
            guid: Uuid::new_v4(),
            serial,
            rect,
            header: Rect::default(),
            content: Rect::default(),
            resize: Rect::default(),
            depth,
            content_active,
            open,
        };
        w.header = rect.top_band(header_height);
        w
    }

    /// Update the rectangle and everything derived from it.
    pub(crate) fn place(&mut self, rect: Rect, header_height: f32, handle: f32) {
        self.rect = rect;
        self.header = rect.top_band(header_height);
        self.content = body_rect(rect, header_height, self.content_active);
        self.resize = rect.bottom_right_square(handle, 1.0);
    }

    /// Declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unique identifier.
    pub fn guid(&self) -> Uuid {
        self.guid
    }

    /// Window rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Header band.
    pub fn header(&self) -> Rect {
        self.header
    }

    /// Body rectangle.
    pub fn content(&self) -> Rect {
        self.content
    }

    /// Resize handle rectangle.
    pub fn resize_handle(&self) -> Rect {
        self.resize
    }

    /// Stacking depth.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Is the body expanded?
    pub fn is_content_active(&self) -> bool {
        self.content_active
    }

    /// Is the window open?
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The rectangle used for hit-testing: the whole window when expanded,
    /// the header only when collapsed.
    pub fn hit_rect(&self) -> Rect {
        if self.content_active {
            self.rect
        } else {
            self.header
        }
    }

    /// Does a pointer at `p` land on this window?
    pub fn hit(&self, p: Point) -> bool {
        self.open && self.hit_rect().contains_point(p)
    }
}

/// The body of a window: everything under the header when expanded, a zero
/// height band when collapsed.
pub(crate) fn body_rect(rect: Rect, header_height: f32, content_active: bool) -> Rect {
    let h = if content_active {
        (rect.h - header_height).max(0.0)
    } else {
        0.0
    };
    Rect::new(rect.x(), rect.y() + header_height, rect.w, h)
}
