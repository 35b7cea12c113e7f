/// Texture trait - sampled image resource

use crate::error::Result;

/// Pixel formats the engine can request.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    /// 8-bit RGBA, unsigned normalized
    R8G8B8A8_UNORM,
    /// Single-channel 32-bit float
    R32_FLOAT,
}

/// Texture creation descriptor.
///
/// `data` is the initial texel payload in row-major order, or empty for
/// an uninitialized texture (render target attachments).
#[derive(Debug, Clone)]
pub struct TextureDesc {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub data: Vec<u8>,
}

/// Sampled texture resource.
///
/// Created through the Renderer factory; shared by reference between the
/// prepare and render passes of a frame.
pub trait Texture {
    /// Width in texels
    fn width(&self) -> u32;

    /// Height in texels
    fn height(&self) -> u32;

    /// Pixel format
    fn format(&self) -> TextureFormat;

    /// Replace the texel payload (used when tile raster data changes,
    /// e.g. after a border backfill from a neighboring tile).
    fn upload(&self, data: &[u8]) -> Result<()>;
}
