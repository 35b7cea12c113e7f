/// Tile storage keyed by tile id.
///
/// Owned and mutated exclusively by the render thread. The store holds
/// decoded tiles across frames so a tile panned back into view reuses
/// its prepared render target instead of redrawing it.

use rustc_hash::FxHashMap;

use crate::coverage::{CoverageView, TileId};
use crate::paint::TargetPool;
use super::tile::{Tile, TileDirty};

/// All live tiles, keyed by coordinates.
#[derive(Default)]
pub struct TileStore {
    tiles: FxHashMap<TileId, Tile>,
}

impl TileStore {
    pub fn new() -> Self {
        Self {
            tiles: FxHashMap::default(),
        }
    }

    /// Insert a tile, replacing any previous tile with the same id.
    pub fn insert(&mut self, tile: Tile) {
        self.tiles.insert(tile.id(), tile);
    }

    pub fn get(&self, id: &TileId) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn get_mut(&mut self, id: &TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id)
    }

    pub fn contains(&self, id: &TileId) -> bool {
        self.tiles.contains_key(id)
    }

    /// Remove a tile. The caller decides what happens to its render
    /// target; see `retain_visible` for the eager-release path.
    pub fn remove(&mut self, id: &TileId) -> Option<Tile> {
        self.tiles.remove(id)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Ids of all stored tiles, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &TileId> {
        self.tiles.keys()
    }

    /// Drop every tile not covered by the view, releasing their render
    /// targets through the pool immediately instead of waiting for
    /// capacity-pressure eviction.
    pub fn retain_visible(&mut self, view: &CoverageView, pool: &mut TargetPool) {
        let keep: rustc_hash::FxHashSet<TileId> = view.tile_ids().iter().copied().collect();
        self.tiles.retain(|id, tile| {
            if keep.contains(id) {
                return true;
            }
            if let Some(backref) = tile.target_ref() {
                pool.release(backref);
            }
            false
        });
    }

    /// Run the bidirectional border backfill between a tile and every
    /// neighbor present in the store.
    ///
    /// Both sides of each exchange receive texels, are flagged for
    /// re-upload, and have their derived data invalidated. Returns the
    /// number of neighbors exchanged with.
    pub fn backfill_neighbors(&mut self, id: &TileId) -> usize {
        let Some(mut tile) = self.tiles.remove(id) else {
            return 0;
        };
        if !tile.has_raster_data() {
            self.tiles.insert(*id, tile);
            return 0;
        }

        let mut exchanged = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let Some(neighbor_id) = id.neighbor(dx, dy) else {
                    continue;
                };
                let Some(neighbor) = self.tiles.get_mut(&neighbor_id) else {
                    continue;
                };
                let (Some(raster), Some(neighbor_raster)) =
                    (tile.raster_mut(), neighbor.raster_mut())
                else {
                    continue;
                };

                // Each side copies the other's edge into its own border
                if raster.backfill_border(neighbor_raster, dx, dy).is_err()
                    || neighbor_raster.backfill_border(raster, -dx, -dy).is_err()
                {
                    continue;
                }

                tile.mark_dirty(TileDirty::RASTER_UPLOAD | TileDirty::BORDER_BACKFILL);
                neighbor.mark_dirty(TileDirty::RASTER_UPLOAD | TileDirty::BORDER_BACKFILL);
                exchanged += 1;
            }
        }

        self.tiles.insert(*id, tile);
        exchanged
    }
}

#[cfg(test)]
#[path = "tile_store_tests.rs"]
mod tests;
