/// Headless implementations of the GPU resource traits.
///
/// Textures keep their byte payload in memory behind a mutex so uploads
/// are observable; render targets wrap a headless texture as their color
/// attachment.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use tile_map_engine::engine_debug;
use tile_map_engine::tilemap::Result;
use tile_map_engine::tilemap::renderer::{
    Renderer, RenderTarget, RenderTargetDesc, Texture, TextureDesc, TextureFormat,
};

/// Log source for backend events
const SOURCE: &str = "tilemap::HeadlessRenderer";

/// CPU-side texture: dimensions plus the last uploaded payload.
pub struct HeadlessTexture {
    width: u32,
    height: u32,
    format: TextureFormat,
    data: Mutex<Vec<u8>>,
    uploads: AtomicU32,
}

impl HeadlessTexture {
    fn new(desc: TextureDesc) -> Self {
        Self {
            width: desc.width,
            height: desc.height,
            format: desc.format,
            data: Mutex::new(desc.data),
            uploads: AtomicU32::new(0),
        }
    }

    /// Number of `upload` calls since creation.
    pub fn upload_count(&self) -> u32 {
        self.uploads.load(Ordering::Relaxed)
    }

    /// Copy of the current payload.
    pub fn data(&self) -> Vec<u8> {
        self.data.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

impl Texture for HeadlessTexture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> TextureFormat {
        self.format
    }

    fn upload(&self, data: &[u8]) -> Result<()> {
        if let Ok(mut lock) = self.data.lock() {
            lock.clear();
            lock.extend_from_slice(data);
        }
        self.uploads.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// CPU-side render target with a headless color attachment.
pub struct HeadlessRenderTarget {
    desc: RenderTargetDesc,
    color: Arc<HeadlessTexture>,
}

impl HeadlessRenderTarget {
    fn new(desc: RenderTargetDesc) -> Self {
        Self {
            color: Arc::new(HeadlessTexture::new(TextureDesc {
                width: desc.width,
                height: desc.height,
                format: desc.format,
                data: Vec::new(),
            })),
            desc,
        }
    }
}

impl RenderTarget for HeadlessRenderTarget {
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

/// Headless resource factory with creation counters.
#[derive(Default)]
pub struct HeadlessRenderer {
    textures_created: usize,
    targets_created: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn textures_created(&self) -> usize {
        self.textures_created
    }

    pub fn targets_created(&self) -> usize {
        self.targets_created
    }
}

impl Renderer for HeadlessRenderer {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        self.textures_created += 1;
        engine_debug!(
            SOURCE,
            "created {}x{} texture ({} total)",
            desc.width,
            desc.height,
            self.textures_created
        );
        Ok(Arc::new(HeadlessTexture::new(desc)))
    }

    fn create_render_target(&mut self, desc: RenderTargetDesc) -> Result<Arc<dyn RenderTarget>> {
        self.targets_created += 1;
        engine_debug!(
            SOURCE,
            "created {}x{} render target ({} total)",
            desc.width,
            desc.height,
            self.targets_created
        );
        Ok(Arc::new(HeadlessRenderTarget::new(desc)))
    }
}
