use super::WallKind;
use crate::host::MapHost;

/// Resolves a token's wall kind from an attribute on its linked character.
///
/// A token with no linked character, a missing attribute, or any value other
/// than the two recognised literals all resolve to `None`.
pub struct ResolveWallKind<'a> {
    character_id: Option<&'a str>,
    attribute: &'a str,
}

impl<'a> ResolveWallKind<'a> {
    /// Creates a new `ResolveWallKind` query.
    #[must_use]
    pub fn new(character_id: Option<&'a str>, attribute: &'a str) -> Self {
        Self {
            character_id,
            attribute,
        }
    }

    /// Executes the query against the host.
    pub fn execute<H: MapHost>(&self, host: &H) -> Option<WallKind> {
        let character_id = self.character_id?;
        let value = host.attribute(character_id, self.attribute)?;
        WallKind::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryMap;

    fn host() -> MemoryMap {
        let mut map = MemoryMap::new();
        map.set_attribute("stone", "wall", "static");
        map.set_attribute("gate", "wall", "dynamic");
        map.set_attribute("odd", "wall", "sometimes");
        map.set_attribute("hero", "hp", "12");
        map
    }

    #[test]
    fn resolves_recognised_kinds() {
        let map = host();
        assert_eq!(
            ResolveWallKind::new(Some("stone"), "wall").execute(&map),
            Some(WallKind::Static)
        );
        assert_eq!(
            ResolveWallKind::new(Some("gate"), "wall").execute(&map),
            Some(WallKind::Dynamic)
        );
    }

    #[test]
    fn anything_else_is_not_a_wall() {
        let map = host();
        assert_eq!(ResolveWallKind::new(None, "wall").execute(&map), None);
        assert_eq!(ResolveWallKind::new(Some("odd"), "wall").execute(&map), None);
        assert_eq!(ResolveWallKind::new(Some("hero"), "wall").execute(&map), None);
        assert_eq!(ResolveWallKind::new(Some("ghost"), "wall").execute(&map), None);
    }

    #[test]
    fn attribute_name_is_configurable() {
        let mut map = host();
        map.set_attribute("stone", "barrier", "dynamic");
        assert_eq!(
            ResolveWallKind::new(Some("stone"), "barrier").execute(&map),
            Some(WallKind::Dynamic)
        );
    }
}
