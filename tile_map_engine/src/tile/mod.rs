//! Tile module — decoded tile data and per-tile GPU state.
//!
//! Tile payloads are decoded off the render thread by an external
//! collaborator; this module only holds the already-decoded, immutable
//! (within a frame) results plus the non-owning back-references into the
//! render target pool.

mod raster;
mod tile;
mod tile_store;

pub use raster::RasterData;
pub use tile::{Tile, TileDirty};
pub use tile_store::TileStore;
