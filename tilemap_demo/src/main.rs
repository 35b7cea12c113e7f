//! Tile map engine demo
//!
//! Simulates a camera zooming into a tiled map with the headless
//! backend: every frame re-derives visibility, decodes any newly
//! covered tiles, and runs both paint passes. Frame statistics show
//! the target pool reusing and reclaiming GPU-side resources.

use tile_map_engine::engine_info;
use tile_map_engine::glam::{DMat4, DVec2, DVec3};
use tile_map_engine::tilemap::Result;
use tile_map_engine::tilemap::camera::Frustum;
use tile_map_engine::tilemap::coverage::{
    Aabb, CoverageOptions, CoverageView, QuadtreeCuller, TileCuller,
};
use tile_map_engine::tilemap::paint::{PainterConfig, RenderPhase, TilePainter};
use tile_map_engine::tilemap::tile::{RasterData, Tile, TileStore};
use tile_map_engine_renderer_headless::{HeadlessDrawCommands, HeadlessRenderer};

const SOURCE: &str = "tilemap::Demo";

/// Map pixels per tile at every zoom level.
const TILE_SIZE: u32 = 256;

/// Interior texels per decoded demo tile.
const RASTER_DIM: u32 = 16;

/// Straight-down view over a point on the map, in map pixels.
fn down_frustum(center: DVec2, altitude: f64, world_size: f64, zoom: f64) -> Frustum {
    let fov_y = std::f64::consts::FRAC_PI_3;
    let proj = DMat4::perspective_rh_gl(fov_y, 1.0, 1.0, altitude * 10.0);
    let flip = DMat4::from_scale(DVec3::new(1.0, -1.0, 1.0));
    let drop = DMat4::from_translation(DVec3::new(0.0, 0.0, -altitude));
    let center_on = DMat4::from_translation(DVec3::new(-center.x, -center.y, 0.0));
    let vp = proj * flip * drop * center_on;
    Frustum::from_inv_proj_matrix(&vp.inverse(), world_size, zoom)
}

/// Stand-in for the worker that decodes tile payloads off-thread.
fn decode_covered_tiles(store: &mut TileStore, view: &CoverageView) -> Result<usize> {
    let mut decoded = 0;
    for id in view.tile_ids() {
        if store.contains(id) {
            continue;
        }
        let texels: Vec<u32> = (0..RASTER_DIM * RASTER_DIM)
            .map(|i| (id.x * 31 + id.y * 17 + i) | 0xff00_0000)
            .collect();
        let mut tile = Tile::new(*id);
        tile.set_raster(RasterData::new(RASTER_DIM, &texels)?);
        store.insert(tile);
        store.backfill_neighbors(id);
        decoded += 1;
    }
    Ok(decoded)
}

fn main() -> Result<()> {
    engine_info!(SOURCE, "starting tile map demo");

    let mut culler = QuadtreeCuller::new();
    let mut painter = TilePainter::new(PainterConfig {
        tile_size: TILE_SIZE,
        target_ceiling: 64,
    });
    let mut renderer = HeadlessRenderer::new();
    let mut commands = HeadlessDrawCommands::new();
    let mut store = TileStore::new();

    // Zoom from level 1 toward 5 over the same corner of the map
    for frame in 0..24 {
        let zoom = 1.0 + frame as f64 / 6.0;
        let depth = zoom.floor() as u8;
        let world_size = TILE_SIZE as f64 * 2f64.powf(zoom);
        let center = DVec2::new(world_size * 0.3, world_size * 0.3);

        let frustum = down_frustum(center, 400.0, world_size, zoom);
        let extent = (1u32 << depth) as f64;
        let root = Aabb::new(DVec3::ZERO, DVec3::new(extent, extent, 0.0));
        let view = culler.cull(
            &frustum,
            &root,
            &CoverageOptions { min_zoom: 0, max_zoom: depth },
        );

        let decoded = decode_covered_tiles(&mut store, &view)?;

        painter.draw(RenderPhase::Offscreen, &mut renderer, &mut commands, &mut store, &view)?;
        painter.draw(RenderPhase::Translucent, &mut renderer, &mut commands, &mut store, &view)?;
        painter.retain_visible(&mut store, &view);

        engine_info!(
            SOURCE,
            "frame {:2}: zoom {:.2}, {} visible, {} decoded, {} targets resident",
            frame,
            zoom,
            view.len(),
            decoded,
            painter.pool().resident_count()
        );
    }

    engine_info!(
        SOURCE,
        "done: {} targets and {} textures created, {} offscreen / {} composite draws",
        renderer.targets_created(),
        renderer.textures_created(),
        commands.offscreen_draws(),
        commands.composite_draws()
    );
    Ok(())
}
