use std::collections::{BTreeMap, HashMap};

use slotmap::SlotMap;

use super::{Layer, MapHost, Token};
use crate::error::HostError;
use crate::paths::PathSpec;

slotmap::new_key_type! {
    /// Unique identifier for a path in a [`MemoryMap`].
    pub struct PathId;
}

/// In-memory host that owns tokens, character attributes and paths.
///
/// Paths are referenced via typed IDs (generational indices), so a removed
/// path can never be confused with one created later.
#[derive(Debug, Default)]
pub struct MemoryMap {
    tokens: BTreeMap<String, Token>,
    attributes: HashMap<String, HashMap<String, String>>,
    paths: SlotMap<PathId, PathSpec>,
}

impl MemoryMap {
    /// Creates a new, empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Token operations ---

    /// Inserts or replaces a token, returning the one it replaced.
    pub fn insert_token(&mut self, token: Token) -> Option<Token> {
        self.tokens.insert(token.id.clone(), token)
    }

    /// Returns the token with the given id, if present.
    #[must_use]
    pub fn token(&self, id: &str) -> Option<&Token> {
        self.tokens.get(id)
    }

    /// Removes a token, returning it if it was present.
    pub fn remove_token(&mut self, id: &str) -> Option<Token> {
        self.tokens.remove(id)
    }

    // --- Attribute operations ---

    /// Sets attribute `name` on character `character_id`.
    pub fn set_attribute(&mut self, character_id: &str, name: &str, value: &str) {
        self.attributes
            .entry(character_id.to_owned())
            .or_default()
            .insert(name.to_owned(), value.to_owned());
    }

    // --- Path operations ---

    /// Iterates over all persisted paths.
    pub fn paths(&self) -> impl Iterator<Item = (PathId, &PathSpec)> {
        self.paths.iter()
    }

    /// Returns the number of persisted paths.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }
}

impl MapHost for MemoryMap {
    type PathId = PathId;

    fn tokens(&self, page_id: &str, layers: &[Layer]) -> Vec<Token> {
        self.tokens
            .values()
            .filter(|token| token.page_id == page_id && layers.contains(&token.layer))
            .cloned()
            .collect()
    }

    fn attribute(&self, character_id: &str, name: &str) -> Option<String> {
        self.attributes
            .get(character_id)
            .and_then(|fields| fields.get(name))
            .cloned()
    }

    fn find_paths(&self, spec: &PathSpec) -> Vec<PathId> {
        let key = spec.key();
        self.paths
            .iter()
            .filter(|(_, stored)| stored.key() == key)
            .map(|(id, _)| id)
            .collect()
    }

    fn create_path(&mut self, spec: &PathSpec) -> Result<PathId, HostError> {
        Ok(self.paths.insert(spec.clone()))
    }

    fn remove_path(&mut self, id: PathId) -> Result<(), HostError> {
        self.paths
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| HostError::PathNotFound(format!("{id:?}")))
    }
}
