use super::{Expanse, Point};
use crate::{Error, Result};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// Construct a rectangle.
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            tl: Point::new(x, y),
            w,
            h,
        }
    }

    /// Construct a rectangle, rejecting non-finite values and negative sizes.
    pub fn try_new(x: f32, y: f32, w: f32, h: f32) -> Result<Self> {
        if ![x, y, w, h].iter().all(|v| v.is_finite()) {
            return Err(Error::Geometry(format!(
                "non-finite rect: ({x}, {y}, {w}, {h})"
            )));
        }
        if w < 0.0 || h < 0.0 {
            return Err(Error::Geometry(format!("negative rect size: {w}x{h}")));
        }
        Ok(Self::new(x, y, w, h))
    }

    /// Left edge.
    pub fn x(&self) -> f32 {
        self.tl.x
    }

    /// Top edge.
    pub fn y(&self) -> f32 {
        self.tl.y
    }

    /// Right edge (exclusive).
    pub fn right(&self) -> f32 {
        self.tl.x + self.w
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> f32 {
        self.tl.y + self.h
    }

    /// Size of the rectangle.
    pub fn expanse(&self) -> Expanse {
        Expanse::new(self.w, self.h)
    }

    /// Does the rectangle contain the point? The top and left edges are
    /// inclusive, the bottom and right edges exclusive.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.tl.x && p.x < self.right() && p.y >= self.tl.y && p.y < self.bottom()
    }

    /// The same rectangle moved so its top-left corner is at `tl`.
    pub fn at(&self, tl: Point) -> Self {
        Self { tl, ..*self }
    }

    /// The same rectangle with a new height.
    pub fn with_height(&self, h: f32) -> Self {
        Self { h, ..*self }
    }

    /// The same rectangle with a new size.
    pub fn with_expanse(&self, e: Expanse) -> Self {
        Self {
            tl: self.tl,
            w: e.w,
            h: e.h,
        }
    }

    /// The band of height `h` along the top of this rectangle.
    pub fn top_band(&self, h: f32) -> Self {
        Self::new(self.tl.x, self.tl.y, self.w, h)
    }

    /// A square of side `size` tucked into the bottom-right corner, inset by
    /// `inset` on both axes.
    pub fn bottom_right_square(&self, size: f32, inset: f32) -> Self {
        Self::new(
            self.right() - size - inset,
            self.bottom() - size - inset,
            size,
            size,
        )
    }

    /// Move the rectangle so that it lies within `bounds` on all sides. The
    /// top-left edges take precedence when the rectangle is larger than the
    /// bounds.
    pub fn clamp_within(&self, bounds: &Self) -> Self {
        let mut x = self.tl.x;
        let mut y = self.tl.y;
        if x + self.w > bounds.right() {
            x = bounds.right() - self.w;
        }
        if y + self.h > bounds.bottom() {
            y = bounds.bottom() - self.h;
        }
        if x < bounds.tl.x {
            x = bounds.tl.x;
        }
        if y < bounds.tl.y {
            y = bounds.tl.y;
        }
        self.at(Point::new(x, y))
    }
}

impl From<Expanse> for Rect {
    fn from(e: Expanse) -> Self {
        e.rect()
    }
}
