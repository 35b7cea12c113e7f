/// Decoded square raster payload of one tile, with a 1-texel border ring.
///
/// The border carries texels backfilled from neighboring tiles so the
/// derived-data draw can sample across tile seams without artifacts.
/// Texels are packed RGBA stored as `u32`; the GPU upload path views the
/// buffer as bytes.

use crate::engine_bail;
use crate::error::Result;

/// Width of the border ring around the interior, in texels.
const BORDER: i32 = 1;

/// Square RGBA raster with a backfillable border.
#[derive(Debug, Clone)]
pub struct RasterData {
    /// Interior dimension (texels per side, border excluded)
    dim: u32,
    /// Full row stride, `dim + 2 * BORDER`
    stride: u32,
    /// Packed RGBA texels, `stride * stride` entries, row-major
    texels: Vec<u32>,
}

impl RasterData {
    /// Build a raster from `dim * dim` packed RGBA texels.
    ///
    /// The border ring is initialized by replicating the nearest interior
    /// texel; neighbors overwrite it later through `backfill_border`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResource` when the buffer length does not match
    /// the dimension.
    pub fn new(dim: u32, interior: &[u32]) -> Result<Self> {
        if interior.len() != (dim * dim) as usize {
            engine_bail!(
                "tilemap::RasterData",
                "raster buffer has {} texels, expected {} for dim {}",
                interior.len(),
                dim * dim,
                dim
            );
        }
        if dim == 0 {
            engine_bail!("tilemap::RasterData", "raster dimension must be positive");
        }

        let stride = dim + 2 * BORDER as u32;
        let mut raster = Self {
            dim,
            stride,
            texels: vec![0; (stride * stride) as usize],
        };

        for y in 0..dim as i32 {
            for x in 0..dim as i32 {
                raster.set(x, y, interior[(y * dim as i32 + x) as usize]);
            }
        }

        // Replicate edges into the border until neighbors backfill it
        let d = dim as i32;
        for i in -1..=d {
            let cx = i.clamp(0, d - 1);
            raster.set(i, -1, raster.get(cx, 0));
            raster.set(i, d, raster.get(cx, d - 1));
            raster.set(-1, i, raster.get(0, cx));
            raster.set(d, i, raster.get(d - 1, cx));
        }

        Ok(raster)
    }

    /// Interior dimension in texels.
    pub fn dim(&self) -> u32 {
        self.dim
    }

    /// Full side length including the border ring.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(x >= -BORDER && x < self.dim as i32 + BORDER);
        debug_assert!(y >= -BORDER && y < self.dim as i32 + BORDER);
        ((y + BORDER) * self.stride as i32 + (x + BORDER)) as usize
    }

    /// Read one texel. Coordinates range over `-1..=dim` (border included).
    pub fn get(&self, x: i32, y: i32) -> u32 {
        self.texels[self.index(x, y)]
    }

    /// Write one texel. Coordinates range over `-1..=dim` (border included).
    pub fn set(&mut self, x: i32, y: i32, texel: u32) {
        let idx = self.index(x, y);
        self.texels[idx] = texel;
    }

    /// Copy the overlapping edge region from a neighboring tile's raster
    /// into this raster's border.
    ///
    /// `(dx, dy)` is the neighbor's offset in tile units, each in
    /// {-1, 0, 1}. Rasters must share the same dimension.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResource` on mismatched dimensions.
    pub fn backfill_border(&mut self, neighbor: &RasterData, dx: i32, dy: i32) -> Result<()> {
        if self.dim != neighbor.dim {
            engine_bail!(
                "tilemap::RasterData",
                "backfill dimension mismatch: {} vs {}",
                self.dim,
                neighbor.dim
            );
        }
        debug_assert!(dx.abs() <= 1 && dy.abs() <= 1);

        let d = self.dim as i32;
        let mut x_min = dx * d;
        let mut x_max = dx * d + d;
        let mut y_min = dy * d;
        let mut y_max = dy * d + d;

        if dx == -1 {
            x_min = x_max - 1;
        } else if dx == 1 {
            x_max = x_min + 1;
        }
        if dy == -1 {
            y_min = y_max - 1;
        } else if dy == 1 {
            y_max = y_min + 1;
        }

        x_min = x_min.max(-BORDER);
        x_max = x_max.min(d + BORDER);
        y_min = y_min.max(-BORDER);
        y_max = y_max.min(d + BORDER);

        // Shift into the neighbor's local coordinates
        let ox = -dx * d;
        let oy = -dy * d;

        for y in y_min..y_max {
            for x in x_min..x_max {
                self.set(x, y, neighbor.get(x + ox, y + oy));
            }
        }

        Ok(())
    }

    /// Byte view of the full bordered raster, row-major, for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }
}

#[cfg(test)]
#[path = "raster_tests.rs"]
mod tests;
