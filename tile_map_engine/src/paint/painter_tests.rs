use crate::coverage::{CoverageView, TileId};
use crate::renderer::mock_renderer::{MockDrawCommands, MockRenderer};
use crate::renderer::{DepthMode, StencilMode};
use crate::tile::{RasterData, Tile, TileDirty, TileStore};
use super::*;

fn test_painter() -> TilePainter {
    TilePainter::new(PainterConfig {
        tile_size: 64,
        target_ceiling: 16,
    })
}

fn tile_with_raster(id: TileId) -> Tile {
    let mut tile = Tile::new(id);
    tile.set_raster(RasterData::new(8, &[0; 64]).unwrap());
    tile
}

fn view(ids: &[TileId]) -> CoverageView {
    CoverageView::new(ids.to_vec())
}

// ============================================================================
// Offscreen (prepare) pass
// ============================================================================

#[test]
fn test_prepare_creates_resources_and_draws_offscreen() {
    let mut painter = test_painter();
    let mut renderer = MockRenderer::new();
    let mut commands = MockDrawCommands::new();
    let mut store = TileStore::new();

    let ids = [TileId::new(1, 0, 0), TileId::new(1, 1, 0)];
    for id in ids {
        store.insert(tile_with_raster(id));
    }

    painter
        .draw(
            RenderPhase::Offscreen,
            &mut renderer,
            &mut commands,
            &mut store,
            &view(&ids),
        )
        .unwrap();

    assert_eq!(renderer.targets_created, 2);
    assert_eq!(renderer.textures_created, 2);
    assert_eq!(commands.submissions.len(), 2);
    for submission in &commands.submissions {
        assert!(submission.offscreen);
        assert!(submission.has_source);
        assert_eq!(submission.stencil, StencilMode::Disabled);
    }
    // Pool capacity tracks the visible-tile count
    assert_eq!(painter.pool().capacity(), 2);
    assert_eq!(painter.pool().resident_count(), 2);

    // Dirty flags are cleared, targets are cached on the tiles
    for id in ids {
        let tile = store.get(&id).unwrap();
        assert!(tile.dirty().is_empty());
        assert!(tile.target().is_some());
    }
}

#[test]
fn test_prepare_skips_undecoded_tiles() {
    let mut painter = test_painter();
    let mut renderer = MockRenderer::new();
    let mut commands = MockDrawCommands::new();
    let mut store = TileStore::new();

    let id = TileId::new(0, 0, 0);
    store.insert(Tile::new(id)); // payload not decoded yet

    painter
        .draw(
            RenderPhase::Offscreen,
            &mut renderer,
            &mut commands,
            &mut store,
            &view(&[id]),
        )
        .unwrap();

    assert_eq!(commands.submissions.len(), 0);
    assert_eq!(renderer.targets_created, 0);
}

#[test]
fn test_prepare_reuses_valid_targets() {
    let mut painter = test_painter();
    let mut renderer = MockRenderer::new();
    let mut commands = MockDrawCommands::new();
    let mut store = TileStore::new();

    let id = TileId::new(0, 0, 0);
    store.insert(tile_with_raster(id));
    let coverage = view(&[id]);

    for _ in 0..3 {
        painter
            .draw(
                RenderPhase::Offscreen,
                &mut renderer,
                &mut commands,
                &mut store,
                &coverage,
            )
            .unwrap();
    }

    // Derived data is cached: one draw, one target, one texture
    assert_eq!(commands.submissions.len(), 1);
    assert_eq!(renderer.targets_created, 1);
    assert_eq!(renderer.textures_created, 1);
}

#[test]
fn test_border_backfill_forces_redraw_into_same_target() {
    let mut painter = test_painter();
    let mut renderer = MockRenderer::new();
    let mut commands = MockDrawCommands::new();
    let mut store = TileStore::new();

    let id = TileId::new(0, 0, 0);
    store.insert(tile_with_raster(id));
    let coverage = view(&[id]);

    painter
        .draw(RenderPhase::Offscreen, &mut renderer, &mut commands, &mut store, &coverage)
        .unwrap();
    let first_target = store.get(&id).unwrap().target().unwrap();

    // A neighbor backfilled this tile's border
    store
        .get_mut(&id)
        .unwrap()
        .mark_dirty(TileDirty::RASTER_UPLOAD | TileDirty::BORDER_BACKFILL);

    painter
        .draw(RenderPhase::Offscreen, &mut renderer, &mut commands, &mut store, &coverage)
        .unwrap();

    // Redrawn, but into the tile's own target with the same texture
    assert_eq!(commands.submissions.len(), 2);
    assert_eq!(renderer.targets_created, 1);
    assert_eq!(renderer.textures_created, 1);
    let second_target = store.get(&id).unwrap().target().unwrap();
    assert!(std::sync::Arc::ptr_eq(&first_target, &second_target));
    assert!(store.get(&id).unwrap().dirty().is_empty());
}

#[test]
fn test_capacity_pressure_evicts_stale_targets() {
    let mut painter = test_painter();
    let mut renderer = MockRenderer::new();
    let mut commands = MockDrawCommands::new();
    let mut store = TileStore::new();

    let old_ids = [
        TileId::new(2, 0, 0),
        TileId::new(2, 1, 0),
        TileId::new(2, 2, 0),
    ];
    for id in old_ids {
        store.insert(tile_with_raster(id));
    }
    painter
        .draw(RenderPhase::Offscreen, &mut renderer, &mut commands, &mut store, &view(&old_ids))
        .unwrap();
    assert_eq!(painter.pool().resident_count(), 3);

    // Camera moved: a single new tile is visible
    let new_id = TileId::new(2, 3, 3);
    store.insert(tile_with_raster(new_id));
    painter
        .draw(RenderPhase::Offscreen, &mut renderer, &mut commands, &mut store, &view(&[new_id]))
        .unwrap();

    // Capacity 1: every stale target was reclaimed
    assert_eq!(painter.pool().capacity(), 1);
    assert_eq!(painter.pool().resident_count(), 1);
    assert!(store.get(&new_id).unwrap().target().is_some());
    for id in old_ids {
        assert!(
            store.get(&id).unwrap().target().is_none(),
            "stale tile {} should have lost its target",
            id
        );
    }
}

// ============================================================================
// Translucent (render) pass
// ============================================================================

#[test]
fn test_render_skips_unprepared_tiles_silently() {
    let mut painter = test_painter();
    let mut renderer = MockRenderer::new();
    let mut commands = MockDrawCommands::new();
    let mut store = TileStore::new();

    let id = TileId::new(0, 0, 0);
    store.insert(tile_with_raster(id)); // never prepared

    painter
        .draw(
            RenderPhase::Translucent,
            &mut renderer,
            &mut commands,
            &mut store,
            &view(&[id]),
        )
        .unwrap();

    assert_eq!(commands.submissions.len(), 0);
}

#[test]
fn test_two_phase_frame() {
    let mut painter = test_painter();
    let mut renderer = MockRenderer::new();
    let mut commands = MockDrawCommands::new();
    let mut store = TileStore::new();

    let ids = [TileId::new(1, 0, 0), TileId::new(1, 1, 1)];
    for id in ids {
        store.insert(tile_with_raster(id));
    }
    let coverage = view(&ids);

    for phase in [RenderPhase::Offscreen, RenderPhase::Translucent] {
        painter
            .draw(phase, &mut renderer, &mut commands, &mut store, &coverage)
            .unwrap();
    }

    assert_eq!(commands.submissions.len(), 4);
    let (prepare, render) = commands.submissions.split_at(2);
    for submission in prepare {
        assert!(submission.offscreen);
        assert_eq!(submission.depth, DepthMode::Disabled);
    }
    for submission in render {
        assert!(!submission.offscreen);
        assert!(submission.has_source);
        assert_eq!(submission.depth, DepthMode::ReadOnly);
        // Single zoom level: no stencil guard needed
        assert_eq!(submission.stencil, StencilMode::Disabled);
    }
}

#[test]
fn test_mixed_zoom_draws_use_stencil_guards() {
    let mut painter = test_painter();
    let mut renderer = MockRenderer::new();
    let mut commands = MockDrawCommands::new();
    let mut store = TileStore::new();

    let ids = [
        TileId::new(1, 0, 0),
        TileId::new(2, 2, 2),
        TileId::new(2, 3, 2),
    ];
    for id in ids {
        store.insert(tile_with_raster(id));
    }
    let coverage = view(&ids);

    painter
        .draw(RenderPhase::Offscreen, &mut renderer, &mut commands, &mut store, &coverage)
        .unwrap();
    commands.submissions.clear();
    painter
        .draw(RenderPhase::Translucent, &mut renderer, &mut commands, &mut store, &coverage)
        .unwrap();

    // Higher zoom drawn first with the higher stencil reference
    assert_eq!(commands.submissions.len(), 3);
    assert_eq!(
        commands.submissions[0].stencil,
        StencilMode::Overlap { reference: 2 }
    );
    assert_eq!(
        commands.submissions[1].stencil,
        StencilMode::Overlap { reference: 2 }
    );
    assert_eq!(
        commands.submissions[2].stencil,
        StencilMode::Overlap { reference: 1 }
    );
}

// ============================================================================
// Stencil configuration
// ============================================================================

#[test]
fn test_stencil_config_single_zoom_disabled() {
    let painter = test_painter();
    let coverage = view(&[TileId::new(3, 1, 1), TileId::new(3, 2, 1)]);

    let (modes, coords) = painter.stencil_config_for_overlap(&coverage);

    assert_eq!(modes.get(&3), Some(&StencilMode::Disabled));
    assert_eq!(coords.len(), 2);
}

#[test]
fn test_stencil_config_orders_high_zoom_first() {
    let painter = test_painter();
    let coverage = view(&[
        TileId::new(1, 0, 0),
        TileId::new(3, 4, 4),
        TileId::new(2, 1, 1),
    ]);

    let (modes, coords) = painter.stencil_config_for_overlap(&coverage);

    assert_eq!(
        coords,
        vec![TileId::new(3, 4, 4), TileId::new(2, 1, 1), TileId::new(1, 0, 0)]
    );
    assert_eq!(modes.get(&1), Some(&StencilMode::Overlap { reference: 1 }));
    assert_eq!(modes.get(&2), Some(&StencilMode::Overlap { reference: 2 }));
    assert_eq!(modes.get(&3), Some(&StencilMode::Overlap { reference: 3 }));
}
