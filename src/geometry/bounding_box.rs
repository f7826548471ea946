use std::fmt;

use crate::math::{align_to, TOLERANCE};

/// Token geometry as reported by the host.
///
/// `left`/`top` locate the token's center, not its corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl RawGeometry {
    /// Creates unrotated geometry centered at (`left`, `top`).
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Returns the same geometry with the given rotation.
    #[must_use]
    pub fn rotated(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }

    fn is_quarter_turned(&self) -> bool {
        let rotation = self.rotation.rem_euclid(360.0);
        (rotation - 90.0).abs() < TOLERANCE || (rotation - 270.0).abs() < TOLERANCE
    }
}

/// An axis-aligned rectangle in page coordinates.
///
/// Boxes produced by [`BoundingBox::aligned`] lie on tile boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Creates a box from its top-left corner and size.
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Aligns raw token geometry to the tile grid.
    ///
    /// Width and height are aligned independently and swapped for quarter
    /// turns, then the corner is derived from the center and aligned. The
    /// rotation is normalised into `[0, 360)` first, so -90 and 450 count as
    /// quarter turns too.
    #[must_use]
    pub fn aligned(raw: &RawGeometry, tile_size: f64) -> Self {
        let mut width = align_to(raw.width, tile_size);
        let mut height = align_to(raw.height, tile_size);
        if raw.is_quarter_turned() {
            std::mem::swap(&mut width, &mut height);
        }

        let left = align_to(raw.left - width / 2.0, tile_size);
        let top = align_to(raw.top - height / 2.0, tile_size);
        Self::new(left, top, width, height)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Grows all four edges outward by `margin`.
    #[must_use]
    pub fn expanded(&self, margin: f64) -> Self {
        Self::new(
            self.left - margin,
            self.top - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Returns `true` if the boxes share positive area. Touching edges do not count.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    /// Returns `true` if the boxes share any point, edges included.
    ///
    /// Unlike [`BoundingBox::overlaps`] this accepts degenerate boxes, such as
    /// the extent of an axis-aligned segment.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.left <= other.right()
            && other.left <= self.right()
            && self.top <= other.bottom()
            && other.top <= self.bottom()
    }

    /// Smallest box covering both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right - left, bottom - top)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingBox(left={}, top={}, width={}, height={})",
            self.left, self.top, self.width, self.height
        )
    }
}
