/// Per-tile state: decoded raster payload plus cached GPU-side handles.
///
/// A tile never owns its render target — it keeps a weak back-reference
/// into the target pool and re-validates it each frame. The source
/// texture (the uploaded raster) is tile-owned and cheap to re-create.

use std::sync::Arc;
use bitflags::bitflags;

use crate::coverage::TileId;
use crate::renderer::{RenderTarget, TargetRef, Texture};
use super::raster::RasterData;

bitflags! {
    /// Pending GPU-side work on a tile, cleared by the prepare pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TileDirty: u32 {
        /// Raster texels changed; the source texture must be re-uploaded
        const RASTER_UPLOAD = 1 << 0;
        /// A neighbor backfilled the border; derived data must be redrawn
        const BORDER_BACKFILL = 1 << 1;
    }
}

/// One tile of the map: identity, payload, and cached render state.
pub struct Tile {
    id: TileId,
    raster: Option<RasterData>,
    dirty: TileDirty,
    /// Uploaded raster texture, owned by the tile
    source_texture: Option<Arc<dyn Texture>>,
    /// Weak back-reference into the target pool
    target: Option<TargetRef>,
}

impl Tile {
    /// Create an empty tile awaiting its decoded payload.
    pub fn new(id: TileId) -> Self {
        Self {
            id,
            raster: None,
            dirty: TileDirty::empty(),
            source_texture: None,
            target: None,
        }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    /// Whether a decoded raster payload is present.
    pub fn has_raster_data(&self) -> bool {
        self.raster.is_some()
    }

    pub fn raster(&self) -> Option<&RasterData> {
        self.raster.as_ref()
    }

    pub fn raster_mut(&mut self) -> Option<&mut RasterData> {
        self.raster.as_mut()
    }

    /// Attach a freshly decoded payload; the source texture becomes stale.
    pub fn set_raster(&mut self, raster: RasterData) {
        self.raster = Some(raster);
        self.dirty |= TileDirty::RASTER_UPLOAD;
    }

    pub fn dirty(&self) -> TileDirty {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self, flags: TileDirty) {
        self.dirty |= flags;
    }

    pub(crate) fn clear_dirty(&mut self, flags: TileDirty) {
        self.dirty -= flags;
    }

    pub fn source_texture(&self) -> Option<Arc<dyn Texture>> {
        self.source_texture.clone()
    }

    pub(crate) fn set_source_texture(&mut self, texture: Arc<dyn Texture>) {
        self.source_texture = Some(texture);
    }

    /// The cached render target, if the pool still holds it.
    ///
    /// Upgrading the weak reference is the per-frame validation: an
    /// evicted target yields `None` and the tile is simply re-prepared.
    pub fn target(&self) -> Option<Arc<dyn RenderTarget>> {
        self.target.as_ref().and_then(|t| t.upgrade())
    }

    /// The raw back-reference, for early release through the pool.
    pub fn target_ref(&self) -> Option<&TargetRef> {
        self.target.as_ref()
    }

    pub(crate) fn set_target(&mut self, target: TargetRef) {
        self.target = Some(target);
    }
}

#[cfg(test)]
#[path = "tile_tests.rs"]
mod tests;
