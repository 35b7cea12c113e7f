/// Headless draw submission: counts and logs instead of drawing.

use tile_map_engine::engine_trace;
use tile_map_engine::tilemap::Result;
use tile_map_engine::tilemap::renderer::{DrawCommands, TileDraw};

/// Log source for submission events
const SOURCE: &str = "tilemap::HeadlessDrawCommands";

/// Draw recorder standing in for a GPU command stream.
#[derive(Default)]
pub struct HeadlessDrawCommands {
    offscreen_draws: usize,
    composite_draws: usize,
}

impl HeadlessDrawCommands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws submitted into an offscreen target (prepare pass).
    pub fn offscreen_draws(&self) -> usize {
        self.offscreen_draws
    }

    /// Draws submitted to the default framebuffer (render pass).
    pub fn composite_draws(&self) -> usize {
        self.composite_draws
    }
}

impl DrawCommands for HeadlessDrawCommands {
    fn submit(&mut self, draw: &TileDraw<'_>) -> Result<()> {
        match draw.target {
            Some(target) => {
                self.offscreen_draws += 1;
                engine_trace!(
                    SOURCE,
                    "offscreen draw into {}x{} target, {} uniforms",
                    target.width(),
                    target.height(),
                    draw.uniforms.len()
                );
            }
            None => {
                self.composite_draws += 1;
                engine_trace!(
                    SOURCE,
                    "composite draw ({:?}), {} uniforms",
                    draw.stencil,
                    draw.uniforms.len()
                );
            }
        }
        Ok(())
    }
}
