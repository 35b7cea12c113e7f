/// Renderer module - collaborator traits for GPU resources and draw submission
///
/// The engine core never talks to a GPU directly. Backends implement these
/// traits (a headless recording backend ships as a separate crate); the
/// painter drives them.

pub mod renderer;
pub mod render_target;
pub mod texture;
pub mod draw;

#[cfg(test)]
pub mod mock_renderer;

pub use renderer::*;
pub use render_target::*;
pub use texture::*;
pub use draw::*;
