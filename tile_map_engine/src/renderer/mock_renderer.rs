/// Mock renderer for unit tests (no GPU required)
///
/// Records created resources and submitted draws so painter tests can
/// assert the exact pass structure without a graphics backend.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::Result;
use crate::renderer::{
    DepthMode, DrawCommands, Renderer, RenderTarget, RenderTargetDesc, StencilMode, Texture,
    TextureDesc, TextureFormat, TileDraw,
};

// ============================================================================
// Mock Texture
// ============================================================================

#[derive(Debug)]
pub struct MockTexture {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub uploads: AtomicU32,
}

impl MockTexture {
    pub fn new(width: u32, height: u32, format: TextureFormat) -> Self {
        Self {
            width,
            height,
            format,
            uploads: AtomicU32::new(0),
        }
    }

    pub fn upload_count(&self) -> u32 {
        self.uploads.load(Ordering::Relaxed)
    }
}

impl Texture for MockTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> TextureFormat {
        self.format
    }

    fn upload(&self, _data: &[u8]) -> Result<()> {
        self.uploads.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

// ============================================================================
// Mock RenderTarget
// ============================================================================

pub struct MockRenderTarget {
    pub desc: RenderTargetDesc,
    pub color: Arc<MockTexture>,
}

impl MockRenderTarget {
    pub fn new(desc: RenderTargetDesc) -> Self {
        Self {
            color: Arc::new(MockTexture::new(desc.width, desc.height, desc.format)),
            desc,
        }
    }
}

impl RenderTarget for MockRenderTarget {
    fn width(&self) -> u32 {
        self.desc.width
    }

    fn height(&self) -> u32 {
        self.desc.height
    }

    fn format(&self) -> TextureFormat {
        self.desc.format
    }

    fn color_attachment(&self) -> Arc<dyn Texture> {
        self.color.clone() as Arc<dyn Texture>
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

#[derive(Default)]
pub struct MockRenderer {
    pub textures_created: usize,
    pub targets_created: usize,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for MockRenderer {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        self.textures_created += 1;
        Ok(Arc::new(MockTexture::new(desc.width, desc.height, desc.format)))
    }

    fn create_render_target(&mut self, desc: RenderTargetDesc) -> Result<Arc<dyn RenderTarget>> {
        self.targets_created += 1;
        Ok(Arc::new(MockRenderTarget::new(desc)))
    }
}

// ============================================================================
// Mock DrawCommands
// ============================================================================

/// One recorded submission, flattened for easy assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Draw went to an offscreen target (prepare pass) rather than the
    /// default framebuffer
    pub offscreen: bool,
    pub has_source: bool,
    pub stencil: StencilMode,
    pub depth: DepthMode,
    pub uniform_count: usize,
}

#[derive(Default)]
pub struct MockDrawCommands {
    pub submissions: Vec<Submission>,
}

impl MockDrawCommands {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawCommands for MockDrawCommands {
    fn submit(&mut self, draw: &TileDraw<'_>) -> Result<()> {
        self.submissions.push(Submission {
            offscreen: draw.target.is_some(),
            has_source: draw.source.is_some(),
            stencil: draw.stencil,
            depth: draw.depth,
            uniform_count: draw.uniforms.len(),
        });
        Ok(())
    }
}
