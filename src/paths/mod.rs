mod reconcile;
pub mod rules;
mod set;
mod synthesize;

pub use reconcile::{Reconcile, Reconciliation};
pub use set::PathsSet;
pub use synthesize::SynthesizePaths;

use crate::geometry::BoundingBox;
use crate::host::Layer;
use crate::math::Point2;
use crate::params::SegmentStyle;

/// Classification of a wall segment, selecting its stroke and layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentClass {
    /// Separates a static tile from open floor.
    Static,
    /// Separates a dynamic tile from open floor.
    Dynamic,
    /// Separates a static tile from a dynamic one.
    Transition,
}

/// A straight wall segment in page coordinates.
///
/// Endpoints are ordered leftmost first, topmost on ties, so equal segments
/// compare equal regardless of how they were traced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
    pub class: SegmentClass,
}

impl Segment {
    #[must_use]
    pub fn new(a: Point2, b: Point2, class: SegmentClass) -> Self {
        let (start, end) = if (a.x, a.y) <= (b.x, b.y) { (a, b) } else { (b, a) };
        Self { start, end, class }
    }

    /// Axis-aligned extent of the segment. Orthogonal segments give a box
    /// with zero width or height.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        let left = self.start.x.min(self.end.x);
        let top = self.start.y.min(self.end.y);
        BoundingBox::new(
            left,
            top,
            (self.end.x - self.start.x).abs(),
            (self.end.y - self.start.y).abs(),
        )
    }
}

/// Canonical description of a persisted path object.
///
/// `points` are relative to the top-left of the segment's bounding box and
/// `left`/`top` locate that box's center, as the host stores paths.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSpec {
    pub page_id: String,
    pub layer: Layer,
    pub points: [Point2; 2],
    pub fill: String,
    pub stroke: String,
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
    pub rotation: f64,
}

impl PathSpec {
    /// Describes `segment` as a two-point path on `page_id`.
    #[must_use]
    pub fn from_segment(
        page_id: &str,
        segment: &Segment,
        style: &SegmentStyle,
        fill: &str,
    ) -> Self {
        let extent = segment.bounding_box();
        let (min_x, min_y) = (extent.left, extent.top);

        Self {
            page_id: page_id.to_owned(),
            layer: style.layer,
            points: [
                Point2::new(segment.start.x - min_x, segment.start.y - min_y),
                Point2::new(segment.end.x - min_x, segment.end.y - min_y),
            ],
            fill: fill.to_owned(),
            stroke: style.stroke.clone(),
            width: extent.width,
            height: extent.height,
            left: min_x + extent.width / 2.0,
            top: min_y + extent.height / 2.0,
            rotation: 0.0,
        }
    }

    /// Host polyline encoding: a move to the first point and a line to the second.
    #[must_use]
    pub fn polyline(&self) -> String {
        let [a, b] = self.points;
        format!("[[\"M\",{},{}],[\"L\",{},{}]]", a.x, a.y, b.x, b.y)
    }

    /// Canonical structural key; two specs share a key iff every field matches.
    #[must_use]
    pub fn key(&self) -> PathKey {
        let fields = [
            self.page_id.clone(),
            self.layer.as_str().to_owned(),
            self.polyline(),
            self.fill.clone(),
            self.stroke.clone(),
            self.width.to_string(),
            self.height.to_string(),
            self.left.to_string(),
            self.top.to_string(),
            self.rotation.to_string(),
        ];
        PathKey(fields.join("\u{1f}"))
    }
}

/// Canonical encoding of a [`PathSpec`], used for set membership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathKey(String);
