use std::collections::HashSet;

use super::{PathKey, PathSpec};

/// Set of path identities used for before/after comparison.
#[derive(Debug, Clone, Default)]
pub struct PathsSet {
    keys: HashSet<PathKey>,
}

impl PathsSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path; returns `false` if an identical one was already present.
    pub fn insert(&mut self, path: &PathSpec) -> bool {
        self.keys.insert(path.key())
    }

    #[must_use]
    pub fn contains(&self, path: &PathSpec) -> bool {
        self.keys.contains(&path.key())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the paths of `paths` that are not in this set, in order.
    #[must_use]
    pub fn missing<'p>(&self, paths: &'p [PathSpec]) -> Vec<&'p PathSpec> {
        paths.iter().filter(|path| !self.contains(path)).collect()
    }
}

impl<'p> FromIterator<&'p PathSpec> for PathsSet {
    fn from_iter<I: IntoIterator<Item = &'p PathSpec>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(PathSpec::key).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Layer;
    use crate::math::Point2;
    use crate::params::SegmentStyle;
    use crate::paths::{Segment, SegmentClass};

    fn path(x: f64, stroke: &str) -> PathSpec {
        let segment = Segment::new(
            Point2::new(x, 0.0),
            Point2::new(x, 70.0),
            SegmentClass::Static,
        );
        let style = SegmentStyle::new(Layer::Walls, stroke);
        PathSpec::from_segment("p1", &segment, &style, "transparent")
    }

    #[test]
    fn identical_specs_collapse() {
        let mut set = PathsSet::new();
        assert!(set.insert(&path(0.0, "#FF0000")));
        assert!(!set.insert(&path(0.0, "#FF0000")));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&path(0.0, "#FF0000")));
    }

    #[test]
    fn any_field_difference_is_a_new_member() {
        let set: PathsSet = [path(0.0, "#FF0000")].iter().collect();
        assert!(!set.contains(&path(0.0, "#00FF00")));
        assert!(!set.contains(&path(70.0, "#FF0000")));
    }

    #[test]
    fn missing_keeps_order() {
        let set: PathsSet = [path(70.0, "#FF0000")].iter().collect();
        let paths = [path(0.0, "#FF0000"), path(70.0, "#FF0000"), path(140.0, "#FF0000")];
        let missing = set.missing(&paths);
        assert_eq!(missing, vec![&paths[0], &paths[2]]);
        assert!(PathsSet::new().is_empty());
    }
}
