mod attribute;
mod scan;

pub use attribute::ResolveWallKind;
pub use scan::RegionScan;

use crate::geometry::BoundingBox;
use crate::grid::TileType;

/// Kinds of wall a token can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallKind {
    /// Permanent wall.
    Static,
    /// Wall that can be toggled at runtime.
    Dynamic,
}

impl WallKind {
    /// Parses an attribute value. Only the exact literals `static` and
    /// `dynamic` are recognised.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "static" => Some(Self::Static),
            "dynamic" => Some(Self::Dynamic),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Dynamic => "dynamic",
        }
    }

    /// Tile state stamped for this kind.
    #[must_use]
    pub fn tile(self) -> TileType {
        match self {
            Self::Static => TileType::Static,
            Self::Dynamic => TileType::Dynamic,
        }
    }
}

/// A token contributing a wall footprint to one computation.
#[derive(Debug, Clone, PartialEq)]
pub struct WallSource {
    pub token_id: String,
    pub bounding_box: BoundingBox,
    pub kind: WallKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognises_exact_literals() {
        assert_eq!(WallKind::parse("static"), Some(WallKind::Static));
        assert_eq!(WallKind::parse("dynamic"), Some(WallKind::Dynamic));
        assert_eq!(WallKind::parse("Static"), None);
        assert_eq!(WallKind::parse(" dynamic"), None);
        assert_eq!(WallKind::parse(""), None);
        assert_eq!(WallKind::parse("door"), None);
    }

    #[test]
    fn kinds_map_to_tiles() {
        assert_eq!(WallKind::Static.tile(), TileType::Static);
        assert_eq!(WallKind::Dynamic.tile(), TileType::Dynamic);
        assert_eq!(WallKind::parse(WallKind::Dynamic.as_str()), Some(WallKind::Dynamic));
    }
}
