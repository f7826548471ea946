use super::rules::{boundary_class, diagonal_class, diagonal_required, Corner};
use super::{PathSpec, Segment, SegmentClass};
use crate::geometry::BoundingBox;
use crate::grid::{TileGrid, TileType};
use crate::math::Point2;
use crate::params::WallParams;

/// Derives the wall segments a tile grid requires.
///
/// Orthogonal segments run along tile edges where the tile type changes and
/// are merged along each grid line while the pair of types on either side
/// stays the same. Diagonal segments run from a tile's corner to its center.
pub struct SynthesizePaths<'a> {
    grid: &'a TileGrid,
    page_id: &'a str,
    params: &'a WallParams,
    focus: Option<BoundingBox>,
}

impl<'a> SynthesizePaths<'a> {
    /// Creates a new `SynthesizePaths` operation.
    #[must_use]
    pub fn new(grid: &'a TileGrid, page_id: &'a str, params: &'a WallParams) -> Self {
        Self {
            grid,
            page_id,
            params,
            focus: None,
        }
    }

    /// Keeps only segments that meet `area`, edges included.
    ///
    /// Runs are still merged over the whole grid, so a kept segment has the
    /// same extent it would have without the filter.
    #[must_use]
    pub fn near(mut self, area: BoundingBox) -> Self {
        self.focus = Some(area);
        self
    }

    /// Returns the required segments in page coordinates.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = diagonal_segments(self.grid);
        segments.extend(vertical_segments(self.grid));
        segments.extend(horizontal_segments(self.grid));
        if let Some(area) = &self.focus {
            segments.retain(|segment| area.intersects(&segment.bounding_box()));
        }
        segments
    }

    /// Returns the required segments as path specs for this page.
    #[must_use]
    pub fn execute(&self) -> Vec<PathSpec> {
        self.segments()
            .iter()
            .map(|segment| {
                PathSpec::from_segment(
                    self.page_id,
                    segment,
                    self.params.style(segment.class),
                    &self.params.fill,
                )
            })
            .collect()
    }
}

/// One tile-length piece of a grid line, with the tiles on either side.
struct Edge {
    pair: (TileType, TileType),
    start: Point2,
    end: Point2,
}

struct Run {
    pair: (TileType, TileType),
    class: SegmentClass,
    start: Point2,
    end: Point2,
}

#[allow(clippy::cast_precision_loss)]
fn diagonal_segments(grid: &TileGrid) -> Vec<Segment> {
    let half = grid.tile_size() / 2.0;
    let mut segments = Vec::new();

    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let cell = grid[(row, column)];
            let Some(class) = diagonal_class(cell) else {
                continue;
            };
            let corner = grid.corner(row, column);
            let center = Point2::new(corner.x + half, corner.y + half);

            for direction in Corner::ALL {
                let (dr, dc) = direction.offset();
                let (Some(r), Some(c)) = (row.checked_add_signed(dr), column.checked_add_signed(dc))
                else {
                    continue;
                };
                let (Some(vertical), Some(horizontal)) = (grid.get(r, column), grid.get(row, c))
                else {
                    continue;
                };
                if diagonal_required(cell, vertical, horizontal) {
                    let tip = Point2::new(
                        center.x + dc as f64 * half,
                        center.y + dr as f64 * half,
                    );
                    segments.push(Segment::new(tip, center, class));
                }
            }
        }
    }

    segments
}

/// Segments on the vertical lines between horizontally adjacent tiles.
fn vertical_segments(grid: &TileGrid) -> Vec<Segment> {
    let mut segments = Vec::new();
    for column in 1..grid.columns() {
        let edges = (0..grid.rows()).map(|row| Edge {
            pair: (grid[(row, column - 1)], grid[(row, column)]),
            start: grid.corner(row, column),
            end: grid.corner(row + 1, column),
        });
        merge_runs(edges, &mut segments);
    }
    segments
}

/// Segments on the horizontal lines between vertically adjacent tiles.
fn horizontal_segments(grid: &TileGrid) -> Vec<Segment> {
    let mut segments = Vec::new();
    for row in 1..grid.rows() {
        let edges = (0..grid.columns()).map(|column| Edge {
            pair: (grid[(row - 1, column)], grid[(row, column)]),
            start: grid.corner(row, column),
            end: grid.corner(row, column + 1),
        });
        merge_runs(edges, &mut segments);
    }
    segments
}

/// Merges consecutive edges of one grid line into runs.
///
/// A run continues while the tile pair is unchanged and is flushed as soon as
/// the pair changes or the boundary disappears.
fn merge_runs(edges: impl Iterator<Item = Edge>, out: &mut Vec<Segment>) {
    let mut run: Option<Run> = None;

    for edge in edges {
        let class = boundary_class(edge.pair.0, edge.pair.1);
        if let (Some(current), Some(_)) = (run.as_mut(), class) {
            if current.pair == edge.pair {
                current.end = edge.end;
                continue;
            }
        }

        if let Some(done) = run.take() {
            out.push(Segment::new(done.start, done.end, done.class));
        }
        run = class.map(|class| Run {
            pair: edge.pair,
            class,
            start: edge.start,
            end: edge.end,
        });
    }

    if let Some(done) = run {
        out.push(Segment::new(done.start, done.end, done.class));
    }
}
