use std::ops::AddAssign;

use tracing::debug;

use super::{PathSpec, PathsSet};
use crate::error::Result;
use crate::host::MapHost;

/// Outcome of applying a before/after diff to the host.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    /// Paths newly persisted.
    pub created: usize,
    /// Required paths that were already persisted and left alone.
    pub already_present: usize,
    /// Persisted paths deleted.
    pub removed: usize,
}

impl Reconciliation {
    /// Returns `true` if the host was not modified.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.created == 0 && self.removed == 0
    }
}

impl AddAssign for Reconciliation {
    fn add_assign(&mut self, other: Self) {
        self.created += other.created;
        self.already_present += other.already_present;
        self.removed += other.removed;
    }
}

/// Creates the paths only in `after` and removes the paths only in `before`.
pub struct Reconcile<'a> {
    before: &'a [PathSpec],
    after: &'a [PathSpec],
}

impl<'a> Reconcile<'a> {
    /// Creates a new `Reconcile` operation.
    #[must_use]
    pub fn new(before: &'a [PathSpec], after: &'a [PathSpec]) -> Self {
        Self { before, after }
    }

    /// Computes the diff without touching the host.
    ///
    /// Returns `(to_create, to_remove)`.
    #[must_use]
    pub fn plan(&self) -> (Vec<&'a PathSpec>, Vec<&'a PathSpec>) {
        let before: PathsSet = self.before.iter().collect();
        let after: PathsSet = self.after.iter().collect();
        (before.missing(self.after), after.missing(self.before))
    }

    /// Applies the diff to the host.
    ///
    /// Creation skips paths the host already holds; removal deletes every
    /// persisted path matching a removed spec.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects a write.
    pub fn execute<H: MapHost>(&self, host: &mut H) -> Result<Reconciliation> {
        let (to_create, to_remove) = self.plan();
        let mut outcome = Reconciliation::default();

        for spec in to_create {
            if host.find_paths(spec).is_empty() {
                host.create_path(spec)?;
                outcome.created += 1;
            } else {
                outcome.already_present += 1;
            }
        }

        for spec in to_remove {
            for id in host.find_paths(spec) {
                host.remove_path(id)?;
                outcome.removed += 1;
            }
        }

        debug!(
            created = outcome.created,
            already_present = outcome.already_present,
            removed = outcome.removed,
            "reconciled paths"
        );
        Ok(outcome)
    }
}
