use super::{ResolveWallKind, WallSource};
use crate::geometry::BoundingBox;
use crate::host::MapHost;
use crate::params::WallParams;

/// Collects the wall sources on a page whose footprint overlaps an area.
pub struct RegionScan<'a> {
    area: BoundingBox,
    page_id: &'a str,
    excluded_id: &'a str,
}

impl<'a> RegionScan<'a> {
    /// Creates a new `RegionScan`. The token `excluded_id` is never reported.
    #[must_use]
    pub fn new(area: BoundingBox, page_id: &'a str, excluded_id: &'a str) -> Self {
        Self {
            area,
            page_id,
            excluded_id,
        }
    }

    /// Executes the scan against the host.
    pub fn execute<H: MapHost>(&self, host: &H, params: &WallParams) -> Vec<WallSource> {
        host.tokens(self.page_id, &params.source_layers)
            .into_iter()
            .filter(|token| token.id != self.excluded_id)
            .filter_map(|token| {
                let kind = ResolveWallKind::new(token.character_id(), &params.wall_attribute)
                    .execute(host)?;
                let bounding_box = BoundingBox::aligned(&token.geometry, params.tile_size);
                self.area.overlaps(&bounding_box).then(|| WallSource {
                    token_id: token.id,
                    bounding_box,
                    kind,
                })
            })
            .collect()
    }

    /// Scans outward until every wall within one tile of a collected source
    /// has been collected too.
    ///
    /// Returns the grown area and the sources overlapping it. The area covers
    /// each source plus one tile of margin, so an edge run passing through
    /// the original area ends inside the grown one.
    pub fn execute_grown<H: MapHost>(
        &self,
        host: &H,
        params: &WallParams,
    ) -> (BoundingBox, Vec<WallSource>) {
        let mut area = self.area;
        let mut sources = self.execute(host, params);
        loop {
            area = sources.iter().fold(self.area, |grown, source| {
                grown.union(&source.bounding_box.expanded(params.tile_size))
            });
            let rescanned = Self::new(area, self.page_id, self.excluded_id).execute(host, params);
            if rescanned.len() == sources.len() {
                return (area, rescanned);
            }
            sources = rescanned;
        }
    }
}
