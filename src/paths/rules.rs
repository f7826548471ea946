//! Pure predicates deciding where wall segments are needed.

use super::SegmentClass;
use crate::grid::TileType;

/// Corners of a tile, each bordered by one vertical and one horizontal neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Row and column step toward this corner's neighbours.
    #[must_use]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::TopLeft => (-1, -1),
            Self::TopRight => (-1, 1),
            Self::BottomLeft => (1, -1),
            Self::BottomRight => (1, 1),
        }
    }
}

/// Class of the segment on the shared edge of two adjacent tiles, if one is needed.
///
/// Equal tiles never need a segment; the order of the arguments does not matter.
#[must_use]
pub fn boundary_class(a: TileType, b: TileType) -> Option<SegmentClass> {
    match (a, b) {
        (TileType::Static, TileType::Off) | (TileType::Off, TileType::Static) => {
            Some(SegmentClass::Static)
        }
        (TileType::Dynamic, TileType::Off) | (TileType::Off, TileType::Dynamic) => {
            Some(SegmentClass::Dynamic)
        }
        (TileType::Static, TileType::Dynamic) | (TileType::Dynamic, TileType::Static) => {
            Some(SegmentClass::Transition)
        }
        _ => None,
    }
}

/// Whether `cell` needs a half-diagonal toward the corner shared with
/// `vertical` (the neighbour above or below) and `horizontal` (left or right).
///
/// A static tile needs one when neither neighbour is static; a dynamic tile
/// only when both neighbours are open floor.
#[must_use]
pub fn diagonal_required(cell: TileType, vertical: TileType, horizontal: TileType) -> bool {
    match cell {
        TileType::Static => vertical != TileType::Static && horizontal != TileType::Static,
        TileType::Dynamic => vertical.is_off() && horizontal.is_off(),
        TileType::Off => false,
    }
}

/// Class of a diagonal drawn from a tile of the given type.
#[must_use]
pub fn diagonal_class(cell: TileType) -> Option<SegmentClass> {
    match cell {
        TileType::Static => Some(SegmentClass::Static),
        TileType::Dynamic => Some(SegmentClass::Dynamic),
        TileType::Off => None,
    }
}
