/// Renderer trait - GPU resource factory interface

use std::sync::Arc;
use crate::error::Result;
use crate::renderer::{RenderTarget, RenderTargetDesc, Texture, TextureDesc};

/// Main renderer factory trait
///
/// The central interface for creating GPU resources. Implemented by
/// backend-specific renderers; the engine ships no GPU code of its own.
/// The render thread exclusively owns the renderer for the duration of
/// a frame.
pub trait Renderer {
    /// Create a texture
    ///
    /// # Arguments
    ///
    /// * `desc` - Texture descriptor
    ///
    /// # Returns
    ///
    /// A shared pointer to the created texture
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    /// Create an offscreen render target
    ///
    /// # Arguments
    ///
    /// * `desc` - Render target descriptor
    ///
    /// # Returns
    ///
    /// A shared pointer to the created render target
    fn create_render_target(&mut self, desc: RenderTargetDesc) -> Result<Arc<dyn RenderTarget>>;
}
