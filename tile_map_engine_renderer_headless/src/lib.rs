/*!
# Headless Renderer Backend

CPU-only implementation of the tile map engine's renderer traits.

No GPU, no window: resources are plain structs and draw submissions are
counted and logged. Useful for integration tests, benchmarks, and
running the engine in environments without a graphics device.
*/

mod headless_renderer;
mod headless_draw;

pub use headless_renderer::{HeadlessRenderer, HeadlessRenderTarget, HeadlessTexture};
pub use headless_draw::HeadlessDrawCommands;
