/// RenderTarget trait - offscreen surface written by the prepare pass

use std::sync::{Arc, Weak};
use crate::renderer::{Texture, TextureFormat};

/// Non-owning back-reference from a tile to its cached render target.
///
/// The target pool is the ownership authority: the reference dies the
/// instant the pool evicts the target, so holders must re-validate (by
/// upgrading) every frame before use.
pub type TargetRef = Weak<dyn RenderTarget>;

/// Render target creation descriptor.
#[derive(Debug, Clone, Copy)]
pub struct RenderTargetDesc {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
}

impl RenderTargetDesc {
    /// Square RGBA target, the shape every tile target uses.
    pub fn tile(dim: u32) -> Self {
        Self {
            width: dim,
            height: dim,
            format: TextureFormat::R8G8B8A8_UNORM,
        }
    }
}

/// Render target trait
///
/// Represents an offscreen surface the prepare pass draws derived tile
/// data into and the render pass samples from. The color attachment is
/// the texture bound as input during the render pass.
pub trait RenderTarget {
    /// Width of the render target in pixels
    fn width(&self) -> u32;

    /// Height of the render target in pixels
    fn height(&self) -> u32;

    /// Pixel format of the render target
    fn format(&self) -> TextureFormat;

    /// The color attachment, sampled by the render pass
    fn color_attachment(&self) -> Arc<dyn Texture>;
}
