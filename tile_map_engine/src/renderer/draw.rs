/// Draw submission interface and fixed-function state.
///
/// The engine describes each draw as data (target, input texture,
/// uniforms, stencil/depth state); backends turn it into an actual GPU
/// draw call. Shader source and vertex data live entirely on the backend
/// side.

use std::sync::Arc;
use crate::error::Result;
use crate::renderer::{RenderTarget, Texture};

/// Stencil state for a draw.
///
/// Tiles at the same zoom level share a stencil reference so seams
/// between them never double-blend; tiles from different zoom levels get
/// distinct references, higher zooms drawn first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StencilMode {
    /// No stencil test
    Disabled,
    /// Overlap guard with a per-zoom reference value
    Overlap {
        reference: u32,
    },
}

impl StencilMode {
    pub fn disabled() -> Self {
        StencilMode::Disabled
    }
}

/// Depth state for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthMode {
    /// No depth test
    Disabled,
    /// Test against the depth buffer without writing it
    ReadOnly,
}

/// A single uniform value.
///
/// Matrices are column-major, matching the GPU-side layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Float(f32),
    UInt(u32),
    Vec2([f32; 2]),
    Vec4([f32; 4]),
    Mat4([f32; 16]),
}

/// Flat list of named uniform values for one draw.
#[derive(Debug, Clone, Default)]
pub struct UniformSet {
    values: Vec<(&'static str, UniformValue)>,
}

impl UniformSet {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append a named value.
    pub fn set(&mut self, name: &'static str, value: UniformValue) -> &mut Self {
        self.values.push((name, value));
        self
    }

    /// Look up a value by name (last write wins).
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values
            .iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, UniformValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One tile draw, fully described.
///
/// `target` selects the offscreen surface to draw into; `None` means the
/// default framebuffer. `source` is the texture sampled by the draw (the
/// tile raster during the prepare pass, the prepared color attachment
/// during the render pass).
pub struct TileDraw<'a> {
    pub target: Option<&'a Arc<dyn RenderTarget>>,
    pub source: Option<&'a Arc<dyn Texture>>,
    pub uniforms: UniformSet,
    pub stencil: StencilMode,
    pub depth: DepthMode,
}

/// Strategy for submitting tile draws.
///
/// Called within the frame's render callback. Submission never suspends
/// or blocks; a backend failure surfaces as an error the painter
/// propagates.
pub trait DrawCommands {
    /// Submit one draw.
    fn submit(&mut self, draw: &TileDraw<'_>) -> Result<()>;
}
