//! Entry points bound to token lifecycle notifications.
//!
//! Each notification is handled to completion before returning: the wall
//! grids around the subject are rebuilt from live host state, and the paths
//! they require are diffed and applied.

use tracing::{debug, trace};

use crate::error::Result;
use crate::geometry::BoundingBox;
use crate::grid::BuildTileGrid;
use crate::host::{Layer, MapHost, Token, TokenSnapshot};
use crate::params::WallParams;
use crate::paths::{PathSpec, Reconcile, Reconciliation, SynthesizePaths};
use crate::walls::{RegionScan, ResolveWallKind, WallKind};

/// A token lifecycle notification delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenEvent {
    /// A token was placed on a page.
    Added(Token),
    /// A token was deleted.
    Removed(Token),
    /// A token was moved, resized, rotated, relinked or relayered.
    Changed {
        current: Token,
        previous: TokenSnapshot,
    },
}

/// Keeps a page's wall paths in sync with its wall-bearing tokens.
#[derive(Debug, Clone)]
pub struct WallEngine {
    params: WallParams,
}

/// The wall being inserted or removed, with everything the computation needs.
struct Subject<'a> {
    token_id: &'a str,
    page_id: &'a str,
    bounding_box: BoundingBox,
    kind: WallKind,
}

impl WallEngine {
    /// Creates an engine after validating its parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation.
    pub fn new(params: WallParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    #[must_use]
    pub fn params(&self) -> &WallParams {
        &self.params
    }

    /// Dispatches a notification to the matching handler.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects a path write.
    pub fn handle<H: MapHost>(&self, host: &mut H, event: &TokenEvent) -> Result<Reconciliation> {
        match event {
            TokenEvent::Added(token) => self.on_added(host, token),
            TokenEvent::Removed(token) => self.on_removed(host, token),
            TokenEvent::Changed { current, previous } => self.on_changed(host, current, previous),
        }
    }

    /// Draws the paths a newly placed wall token requires.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects a path write.
    pub fn on_added<H: MapHost>(&self, host: &mut H, token: &Token) -> Result<Reconciliation> {
        let Some(kind) = self.classify(host, token.layer, token.character_id()) else {
            return Ok(Reconciliation::default());
        };
        debug!(token = %token.id, kind = kind.as_str(), "wall added");
        let wall = subject(token, token.bounding_box(self.params.tile_size), kind);
        self.insert(host, &wall)
    }

    /// Erases the paths a deleted wall token no longer requires.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects a path write.
    pub fn on_removed<H: MapHost>(&self, host: &mut H, token: &Token) -> Result<Reconciliation> {
        let Some(kind) = self.classify(host, token.layer, token.character_id()) else {
            return Ok(Reconciliation::default());
        };
        debug!(token = %token.id, kind = kind.as_str(), "wall removed");
        let wall = subject(token, token.bounding_box(self.params.tile_size), kind);
        self.remove(host, &wall)
    }

    /// Updates paths after a token changed.
    ///
    /// The previous state is classified from the snapshot and the current
    /// state from the token. A wall that appears is inserted at its new
    /// footprint, one that disappears is removed from its old footprint, and
    /// a wall whose footprint, kind or link changed is removed then reinserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects a path write.
    pub fn on_changed<H: MapHost>(
        &self,
        host: &mut H,
        current: &Token,
        previous: &TokenSnapshot,
    ) -> Result<Reconciliation> {
        let tile_size = self.params.tile_size;
        let was = self.classify(host, previous.layer, previous.character_id());
        let is = self.classify(host, current.layer, current.character_id());
        let old_box = BoundingBox::aligned(&previous.geometry, tile_size);
        let new_box = current.bounding_box(tile_size);

        match (was, is) {
            (None, None) => Ok(Reconciliation::default()),
            (None, Some(kind)) => {
                debug!(token = %current.id, kind = kind.as_str(), "token became a wall");
                self.insert(host, &subject(current, new_box, kind))
            }
            (Some(kind), None) => {
                debug!(token = %current.id, kind = kind.as_str(), "token stopped being a wall");
                self.remove(host, &subject(current, old_box, kind))
            }
            (Some(old_kind), Some(new_kind)) => {
                let relinked = previous.character_id() != current.character_id();
                if old_kind == new_kind && old_box == new_box && !relinked {
                    return Ok(Reconciliation::default());
                }
                debug!(
                    token = %current.id,
                    from = %old_box,
                    to = %new_box,
                    "wall changed"
                );
                let mut outcome = self.remove(host, &subject(current, old_box, old_kind))?;
                outcome += self.insert(host, &subject(current, new_box, new_kind))?;
                Ok(outcome)
            }
        }
    }

    /// Wall kind of a token on `layer` linked to `character_id`, if it carries one.
    #[must_use]
    pub fn classify<H: MapHost>(
        &self,
        host: &H,
        layer: Layer,
        character_id: Option<&str>,
    ) -> Option<WallKind> {
        if !self.params.participates(layer) {
            return None;
        }
        ResolveWallKind::new(character_id, &self.params.wall_attribute).execute(host)
    }

    fn insert<H: MapHost>(&self, host: &mut H, subject: &Subject<'_>) -> Result<Reconciliation> {
        let (without, with) = self.path_lists(host, subject);
        Reconcile::new(&without, &with).execute(host)
    }

    fn remove<H: MapHost>(&self, host: &mut H, subject: &Subject<'_>) -> Result<Reconciliation> {
        let (without, with) = self.path_lists(host, subject);
        Reconcile::new(&with, &without).execute(host)
    }

    /// Paths required around the subject without and with its footprint.
    ///
    /// The grids cover every wall connected to the subject's window, so runs
    /// crossing the window keep their full length. Only paths that reach the
    /// window are returned.
    fn path_lists<H: MapHost>(
        &self,
        host: &H,
        subject: &Subject<'_>,
    ) -> (Vec<PathSpec>, Vec<PathSpec>) {
        let window = subject.bounding_box.expanded(self.params.margin());
        let (area, sources) = RegionScan::new(window, subject.page_id, subject.token_id)
            .execute_grown(host, &self.params);
        let (without, with) = BuildTileGrid::new(area, &sources, self.params.tile_size)
            .execute_with_subject(&subject.bounding_box, subject.kind.tile());
        trace!(
            neighbours = sources.len(),
            area = %without.area(),
            "grid without subject:\n{without}"
        );
        trace!("grid with subject:\n{with}");

        let without = SynthesizePaths::new(&without, subject.page_id, &self.params)
            .near(window)
            .execute();
        let with = SynthesizePaths::new(&with, subject.page_id, &self.params)
            .near(window)
            .execute();
        (without, with)
    }
}

fn subject<'t>(token: &'t Token, bounding_box: BoundingBox, kind: WallKind) -> Subject<'t> {
    Subject {
        token_id: &token.id,
        page_id: &token.page_id,
        bounding_box,
        kind,
    }
}
