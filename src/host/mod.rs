pub mod memory;

pub use memory::{MemoryMap, PathId};

use std::fmt;

use crate::error::HostError;
use crate::geometry::{BoundingBox, RawGeometry};
use crate::paths::PathSpec;

/// Drawing layers of a host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Background map layer.
    Map,
    /// Token and object layer.
    Objects,
    /// Dynamic-lighting layer; paths here block movement and sight.
    Walls,
    /// Layer visible only to the game master.
    GmLayer,
}

impl Layer {
    /// Returns the host's name for this layer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::Objects => "objects",
            Self::Walls => "walls",
            Self::GmLayer => "gmlayer",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token as currently stored by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: String,
    pub page_id: String,
    pub layer: Layer,
    pub geometry: RawGeometry,
    /// Id of the linked character, if any. The host uses an empty string for "none".
    pub represents: Option<String>,
}

impl Token {
    /// Returns the linked character id, treating an empty link as absent.
    #[must_use]
    pub fn character_id(&self) -> Option<&str> {
        linked(self.represents.as_deref())
    }

    /// Tile-aligned footprint of the token.
    #[must_use]
    pub fn bounding_box(&self, tile_size: f64) -> BoundingBox {
        BoundingBox::aligned(&self.geometry, tile_size)
    }

    /// Captures the fields a change notification reports as previous state.
    #[must_use]
    pub fn snapshot(&self) -> TokenSnapshot {
        TokenSnapshot {
            layer: self.layer,
            geometry: self.geometry,
            represents: self.represents.clone(),
        }
    }
}

/// State of a token before a change notification.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSnapshot {
    pub layer: Layer,
    pub geometry: RawGeometry,
    pub represents: Option<String>,
}

impl TokenSnapshot {
    /// Returns the previously linked character id, treating an empty link as absent.
    #[must_use]
    pub fn character_id(&self) -> Option<&str> {
        linked(self.represents.as_deref())
    }
}

fn linked(represents: Option<&str>) -> Option<&str> {
    represents.filter(|id| !id.is_empty())
}

/// Object-store capabilities the wall engine consumes from its host.
///
/// Reads never fail: a missing object is reported as absent. Writes may be
/// rejected by the host and surface as [`HostError`].
pub trait MapHost {
    /// Host handle of a persisted path object.
    type PathId: Copy + fmt::Debug;

    /// Returns the tokens on `page_id` that sit on one of `layers`.
    fn tokens(&self, page_id: &str, layers: &[Layer]) -> Vec<Token>;

    /// Reads the current value of attribute `name` on character `character_id`.
    fn attribute(&self, character_id: &str, name: &str) -> Option<String>;

    /// Returns every persisted path whose fields exactly match `spec`.
    fn find_paths(&self, spec: &PathSpec) -> Vec<Self::PathId>;

    /// Persists a new path object.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the object.
    fn create_path(&mut self, spec: &PathSpec) -> Result<Self::PathId, HostError>;

    /// Deletes a persisted path object.
    ///
    /// # Errors
    ///
    /// Returns an error if the path no longer exists or the host refuses.
    fn remove_path(&mut self, id: Self::PathId) -> Result<(), HostError>;
}
