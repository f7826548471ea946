use super::{TileGrid, TileType};
use crate::geometry::BoundingBox;
use crate::walls::WallSource;

/// Rasterizes wall sources into a [`TileGrid`] covering an area.
pub struct BuildTileGrid<'a> {
    area: BoundingBox,
    sources: &'a [WallSource],
    tile_size: f64,
}

impl<'a> BuildTileGrid<'a> {
    /// Creates a new `BuildTileGrid` operation.
    #[must_use]
    pub fn new(area: BoundingBox, sources: &'a [WallSource], tile_size: f64) -> Self {
        Self {
            area,
            sources,
            tile_size,
        }
    }

    /// Builds the grid from the sources alone.
    #[must_use]
    pub fn execute(&self) -> TileGrid {
        let mut grid = TileGrid::new(self.area, self.tile_size);
        for source in self.sources {
            grid.stamp(&source.bounding_box, source.kind.tile());
        }
        grid
    }

    /// Builds the grid without and with a subject footprint stamped on top.
    ///
    /// Returns `(without, with)`.
    #[must_use]
    pub fn execute_with_subject(
        &self,
        subject: &BoundingBox,
        tile: TileType,
    ) -> (TileGrid, TileGrid) {
        let without = self.execute();
        let mut with = without.clone();
        with.stamp(subject, tile);
        (without, with)
    }
}
