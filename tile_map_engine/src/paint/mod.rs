//! Paint module — per-frame orchestration of the two tile passes.
//!
//! The painter owns the bounded render target pool and drives the
//! prepare (offscreen) and render (translucent) passes over the visible
//! tile set each frame.

mod painter;
mod target_pool;

pub use painter::{PainterConfig, RenderPhase, TilePainter};
pub use target_pool::TargetPool;
