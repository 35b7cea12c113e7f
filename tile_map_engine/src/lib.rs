/*!
# Tile Map Engine

Core visibility-determination and GPU-resource-reuse subsystem for an
interactive tiled map renderer.

This crate provides the platform-agnostic core: frustum/AABB
intersection testing, implicit-quadtree tile coverage, a bounded
render-target pool with deterministic eviction, and the two-pass tile
painter that ties them together. Backend implementations (a headless
recording backend ships in this workspace) are plugged in through the
renderer traits.

## Architecture

- **Frustum / Aabb**: separating-axis visibility classification
- **QuadtreeCuller**: per-frame visible-tile selection
- **CircularBuffer / TargetPool**: bounded GPU render-target reuse
- **TilePainter**: prepare (offscreen) and render (translucent) passes
- **Renderer / DrawCommands**: collaborator traits implemented by backends
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod coverage;
pub mod paint;
pub mod renderer;
pub mod tile;
pub mod util;

// Main tilemap namespace module
pub mod tilemap {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{
            DefaultLogger, LogEntry, Logger, LogSeverity,
            emit, emit_detailed, reset_logger, set_logger,
        };
        // Note: engine_* macros are NOT re-exported here - they live at the crate root
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Coverage sub-module
    pub mod coverage {
        pub use crate::coverage::*;
    }

    // Paint sub-module
    pub mod paint {
        pub use crate::paint::*;
    }

    // Renderer collaborator traits
    pub mod renderer {
        pub use crate::renderer::*;
    }

    // Tile sub-module
    pub mod tile {
        pub use crate::tile::*;
    }

    // Utility containers
    pub mod util {
        pub use crate::util::*;
    }
}

// Re-export math library at crate root
pub use glam;
