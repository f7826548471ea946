mod build;

pub use build::BuildTileGrid;

use std::fmt;
use std::ops::Index;

use crate::geometry::BoundingBox;
use crate::math::{tile_count, Point2};

/// State of one grid tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    #[default]
    Off,
    Static,
    Dynamic,
}

impl TileType {
    /// Single-digit code used in grid dumps.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Static => 1,
            Self::Dynamic => 2,
        }
    }

    #[must_use]
    pub fn is_off(self) -> bool {
        self == Self::Off
    }
}

/// Row-major grid of tile states covering a tile-aligned area.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    area: BoundingBox,
    tile_size: f64,
    rows: usize,
    columns: usize,
    tiles: Vec<TileType>,
}

impl TileGrid {
    /// Creates a grid of `Off` tiles covering `area`.
    #[must_use]
    pub fn new(area: BoundingBox, tile_size: f64) -> Self {
        let rows = tile_count(area.height, tile_size);
        let columns = tile_count(area.width, tile_size);
        Self {
            area,
            tile_size,
            rows,
            columns,
            tiles: vec![TileType::Off; rows * columns],
        }
    }

    #[must_use]
    pub fn area(&self) -> &BoundingBox {
        &self.area
    }

    #[must_use]
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the tile at (`row`, `column`), or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<TileType> {
        (row < self.rows && column < self.columns).then(|| self.tiles[row * self.columns + column])
    }

    /// Sets a single tile. Positions outside the grid are ignored.
    pub fn set(&mut self, row: usize, column: usize, tile: TileType) {
        if row < self.rows && column < self.columns {
            self.tiles[row * self.columns + column] = tile;
        }
    }

    /// Stamps `tile` over every cell covered by `footprint`, clipped to the grid.
    ///
    /// Later stamps overwrite earlier ones.
    pub fn stamp(&mut self, footprint: &BoundingBox, tile: TileType) {
        let t = self.tile_size;
        let first_row = tile_count(footprint.top - self.area.top, t);
        let first_column = tile_count(footprint.left - self.area.left, t);
        let row_count = tile_count(
            footprint.bottom().min(self.area.bottom()) - footprint.top.max(self.area.top),
            t,
        );
        let column_count = tile_count(
            footprint.right().min(self.area.right()) - footprint.left.max(self.area.left),
            t,
        );

        if row_count == 0 || column_count == 0 {
            return;
        }

        let last_row = (first_row + row_count).min(self.rows);
        let last_column = (first_column + column_count).min(self.columns);
        let first_column = first_column.min(last_column);
        for row in first_row..last_row {
            let start = row * self.columns;
            self.tiles[start + first_column..start + last_column].fill(tile);
        }
    }

    /// Page coordinates of the top-left corner of a cell.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn corner(&self, row: usize, column: usize) -> Point2 {
        Point2::new(
            self.area.left + column as f64 * self.tile_size,
            self.area.top + row as f64 * self.tile_size,
        )
    }
}

impl Index<(usize, usize)> for TileGrid {
    type Output = TileType;

    fn index(&self, (row, column): (usize, usize)) -> &TileType {
        assert!(column < self.columns, "column {column} out of range");
        &self.tiles[row * self.columns + column]
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for (i, row) in self.tiles.chunks(self.columns.max(1)).enumerate() {
            let cells: Vec<String> = row.iter().map(|t| t.code().to_string()).collect();
            let separator = if i + 1 < self.rows { "," } else { "" };
            writeln!(f, "[{}]{separator}", cells.join(", "))?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: f64 = 70.0;

    #[test]
    fn new_grid_is_off() {
        let grid = TileGrid::new(BoundingBox::new(-140.0, -140.0, 350.0, 280.0), TILE);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.columns(), 5);
        assert!((0..4usize).all(|r| (0..5usize).all(|c| grid[(r, c)].is_off())));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 5), None);
    }

    #[test]
    fn stamp_covers_footprint() {
        let mut grid = TileGrid::new(BoundingBox::new(0.0, 0.0, 280.0, 210.0), TILE);
        grid.stamp(&BoundingBox::new(70.0, 70.0, 140.0, 70.0), TileType::Static);

        for r in 0..3usize {
            for c in 0..4usize {
                let expected = if r == 1 && (c == 1 || c == 2) {
                    TileType::Static
                } else {
                    TileType::Off
                };
                assert_eq!(grid[(r, c)], expected, "({r}, {c})");
            }
        }
    }

    #[test]
    fn stamp_clips_to_grid() {
        let mut grid = TileGrid::new(BoundingBox::new(0.0, 0.0, 210.0, 210.0), TILE);
        // Hangs off the top-left and extends past the right edge.
        grid.stamp(&BoundingBox::new(-140.0, -70.0, 490.0, 140.0), TileType::Dynamic);

        assert!((0..3usize).all(|c| grid[(0, c)] == TileType::Dynamic));
        assert!((0..3usize).all(|c| grid[(1, c)].is_off()));
        assert!((0..3usize).all(|c| grid[(2, c)].is_off()));
    }

    #[test]
    fn stamp_outside_grid_is_ignored() {
        let mut grid = TileGrid::new(BoundingBox::new(0.0, 0.0, 140.0, 140.0), TILE);
        grid.stamp(&BoundingBox::new(280.0, 0.0, 70.0, 70.0), TileType::Static);
        grid.stamp(&BoundingBox::new(0.0, -140.0, 70.0, 70.0), TileType::Static);
        assert!((0..2usize).all(|r| (0..2usize).all(|c| grid[(r, c)].is_off())));
    }

    #[test]
    fn later_stamp_wins() {
        let mut grid = TileGrid::new(BoundingBox::new(0.0, 0.0, 140.0, 70.0), TILE);
        grid.stamp(&BoundingBox::new(0.0, 0.0, 140.0, 70.0), TileType::Static);
        grid.stamp(&BoundingBox::new(70.0, 0.0, 70.0, 70.0), TileType::Dynamic);
        assert_eq!(grid[(0, 0)], TileType::Static);
        assert_eq!(grid[(0, 1)], TileType::Dynamic);
    }

    #[test]
    fn corner_is_in_page_coordinates() {
        let grid = TileGrid::new(BoundingBox::new(-140.0, 70.0, 350.0, 350.0), TILE);
        assert_eq!(grid.corner(0, 0), Point2::new(-140.0, 70.0));
        assert_eq!(grid.corner(2, 3), Point2::new(70.0, 210.0));
    }

    #[test]
    fn display_dumps_codes() {
        let mut grid = TileGrid::new(BoundingBox::new(0.0, 0.0, 210.0, 140.0), TILE);
        grid.set(0, 1, TileType::Static);
        grid.set(1, 2, TileType::Dynamic);
        assert_eq!(grid.to_string(), "[\n[0, 1, 0],\n[0, 0, 2]\n]");
    }
}
