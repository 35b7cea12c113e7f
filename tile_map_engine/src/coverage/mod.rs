//! Coverage module — spatial tile selection.
//!
//! Provides the axis-aligned bounding box primitive, tile coordinates,
//! and the quadtree traversal that selects the minimal set of tiles
//! covering the visible region each frame.

mod aabb;
mod culler;
mod tile_id;

pub use aabb::Aabb;
pub use culler::{CoverageOptions, CoverageView, QuadtreeCuller, TileCuller};
pub use tile_id::TileId;
