/// Two-pass tile painter.
///
/// Derived per-tile data is rendered in two steps. The prepare step
/// (offscreen phase) draws each tile's derived data into a pooled render
/// target; the render step (translucent phase) samples that target for
/// the final composited draw. Splitting the passes keeps the expensive
/// derivation out of the composite loop and lets its result persist
/// across frames in the target pool.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;

use crate::coverage::{CoverageView, TileId};
use crate::engine_info;
use crate::error::Result;
use crate::renderer::{
    DepthMode, DrawCommands, Renderer, RenderTargetDesc, StencilMode, TextureDesc, TextureFormat,
    TileDraw, UniformSet, UniformValue,
};
use crate::tile::{TileDirty, TileStore};
use super::target_pool::TargetPool;

/// Log source for painter events
const SOURCE: &str = "tilemap::TilePainter";

/// Which per-frame pass is running.
///
/// The painter is invoked once per phase per frame and ignores phases
/// it has no work in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    /// Derived-data computation into offscreen targets
    Offscreen,
    /// Final composited draws to the default framebuffer
    Translucent,
}

/// Painter configuration.
#[derive(Debug, Clone, Copy)]
pub struct PainterConfig {
    /// Side length of tile render targets, in pixels
    pub tile_size: u32,
    /// Hard upper bound on pooled render targets, regardless of how
    /// many tiles become visible at once
    pub target_ceiling: usize,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            tile_size: 256,
            target_ceiling: 128,
        }
    }
}

/// Orchestrates the prepare and render passes over the visible tiles.
///
/// Exclusively owns the render target pool; nothing else may insert,
/// evict, or resize it. All work happens synchronously inside the
/// frame's render callback.
pub struct TilePainter {
    config: PainterConfig,
    pool: TargetPool,
}

impl TilePainter {
    pub fn new(config: PainterConfig) -> Self {
        engine_info!(
            SOURCE,
            "painter initialized: tile_size={}, target_ceiling={}",
            config.tile_size,
            config.target_ceiling
        );
        Self {
            pool: TargetPool::new(config.target_ceiling),
            config,
        }
    }

    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    /// The render target pool (the painter remains its only mutator).
    pub fn pool(&self) -> &TargetPool {
        &self.pool
    }

    /// Run one pass over the visible tiles.
    ///
    /// Offscreen: resize the pool to the visible-tile count, then prepare
    /// every tile whose derived data is missing or stale. Translucent:
    /// composite every prepared tile, higher zoom levels first, with a
    /// per-zoom stencil reference guarding seam overlap.
    pub fn draw(
        &mut self,
        phase: RenderPhase,
        renderer: &mut dyn Renderer,
        commands: &mut dyn DrawCommands,
        store: &mut TileStore,
        view: &CoverageView,
    ) -> Result<()> {
        match phase {
            RenderPhase::Offscreen => {
                self.pool.set_capacity(view.len());
                for id in view.tile_ids() {
                    self.prepare_tile(renderer, commands, store, *id)?;
                }
            }
            RenderPhase::Translucent => {
                let (stencil_modes, coords) = self.stencil_config_for_overlap(view);
                for id in &coords {
                    let stencil = stencil_modes
                        .get(&id.z)
                        .copied()
                        .unwrap_or(StencilMode::Disabled);
                    self.render_tile(commands, store, *id, stencil)?;
                }
            }
        }
        Ok(())
    }

    /// Drop tiles no longer covered by the view and release their render
    /// targets through the pool immediately.
    ///
    /// Optional between frames; tiles kept in the store reuse their
    /// prepared targets when they come back into view, at the cost of
    /// holding GPU memory until capacity pressure reclaims it.
    pub fn retain_visible(&mut self, store: &mut TileStore, view: &CoverageView) {
        store.retain_visible(view, &mut self.pool);
    }

    /// Stencil state for drawing tiles of mixed zoom levels.
    ///
    /// Returns the per-zoom stencil modes and the tiles sorted for
    /// drawing: higher zoom levels first (they win the overlap), ties
    /// broken by coordinates so the order is reproducible. With a single
    /// zoom level present no stencil guard is needed.
    pub fn stencil_config_for_overlap(
        &self,
        view: &CoverageView,
    ) -> (FxHashMap<u8, StencilMode>, Vec<TileId>) {
        let mut coords = view.tile_ids().to_vec();
        coords.sort_by(|a, b| b.z.cmp(&a.z).then_with(|| (a.x, a.y).cmp(&(b.x, b.y))));

        let mut modes = FxHashMap::default();
        if let (Some(first), Some(last)) = (coords.first(), coords.last()) {
            let max_z = first.z;
            let min_z = last.z;
            if max_z == min_z {
                modes.insert(max_z, StencilMode::Disabled);
            } else {
                for z in min_z..=max_z {
                    modes.insert(
                        z,
                        StencilMode::Overlap {
                            reference: (z - min_z + 1) as u32,
                        },
                    );
                }
            }
        }
        (modes, coords)
    }

    /// Prepare pass for one tile.
    ///
    /// Skips tiles without a decoded payload and tiles whose cached
    /// target is still valid with no pending border backfill. Otherwise
    /// uploads (or refreshes) the source texture, finds a target —
    /// the tile's own for a backfill redraw, a reclaimed orphan, or a
    /// freshly created one — and submits the derived-data draw into it.
    fn prepare_tile(
        &mut self,
        renderer: &mut dyn Renderer,
        commands: &mut dyn DrawCommands,
        store: &mut TileStore,
        id: TileId,
    ) -> Result<()> {
        let Some(tile) = store.get_mut(&id) else {
            return Ok(());
        };
        let border_dirty = tile.dirty().contains(TileDirty::BORDER_BACKFILL);
        let existing = tile.target();
        if existing.is_some() && !border_dirty {
            return Ok(());
        }
        let Some(raster) = tile.raster() else {
            // Payload not decoded yet: not ready this frame, not an error
            return Ok(());
        };
        let dim = raster.dim();
        let padded = raster.stride();
        let bytes = raster.as_bytes().to_vec();

        // Upload or refresh the source texture
        let needs_upload =
            tile.source_texture().is_none() || tile.dirty().contains(TileDirty::RASTER_UPLOAD);
        if needs_upload {
            match tile.source_texture() {
                Some(texture) if texture.width() == padded && texture.height() == padded => {
                    texture.upload(&bytes)?;
                }
                _ => {
                    let texture = renderer.create_texture(TextureDesc {
                        width: padded,
                        height: padded,
                        format: TextureFormat::R8G8B8A8_UNORM,
                        data: bytes,
                    })?;
                    tile.set_source_texture(texture);
                }
            }
        }

        let target = match existing {
            // Border backfill: redraw into the tile's own target
            Some(target) => target,
            None => {
                let target = match self.pool.acquire(self.config.tile_size) {
                    Some(target) => target,
                    None => {
                        renderer.create_render_target(RenderTargetDesc::tile(self.config.tile_size))?
                    }
                };
                let backref = self.pool.insert(Arc::clone(&target));
                tile.set_target(backref);
                target
            }
        };

        let mut uniforms = UniformSet::new();
        uniforms.set("u_dimension", UniformValue::Vec2([dim as f32, dim as f32]));
        uniforms.set("u_zoom", UniformValue::Float(id.z as f32));

        let source = tile.source_texture();
        commands.submit(&TileDraw {
            target: Some(&target),
            source: source.as_ref(),
            uniforms,
            stencil: StencilMode::disabled(),
            depth: DepthMode::Disabled,
        })?;

        // Border backfill invalidation is one-shot
        tile.clear_dirty(TileDirty::RASTER_UPLOAD | TileDirty::BORDER_BACKFILL);
        Ok(())
    }

    /// Render pass for one tile.
    ///
    /// A tile whose back-reference no longer upgrades has no derived
    /// data this frame and is skipped silently.
    fn render_tile(
        &mut self,
        commands: &mut dyn DrawCommands,
        store: &TileStore,
        id: TileId,
        stencil: StencilMode,
    ) -> Result<()> {
        let Some(tile) = store.get(&id) else {
            return Ok(());
        };
        let Some(target) = tile.target() else {
            return Ok(());
        };
        let color = target.color_attachment();

        let mut uniforms = UniformSet::new();
        uniforms.set("u_matrix", UniformValue::Mat4(tile_matrix(&id)));
        uniforms.set(
            "u_tile",
            UniformValue::Vec4([id.x as f32, id.y as f32, id.z as f32, 0.0]),
        );

        commands.submit(&TileDraw {
            target: None,
            source: Some(&color),
            uniforms,
            stencil,
            depth: DepthMode::ReadOnly,
        })
    }
}

/// Placement matrix mapping the unit tile quad into normalized map
/// space, column-major.
fn tile_matrix(id: &TileId) -> [f32; 16] {
    let scale = 1.0 / (1u32 << id.z) as f32;
    let matrix = Mat4::from_translation(Vec3::new(id.x as f32 * scale, id.y as f32 * scale, 0.0))
        * Mat4::from_scale(Vec3::new(scale, scale, 1.0));
    matrix.to_cols_array()
}

#[cfg(test)]
#[path = "painter_tests.rs"]
mod tests;
