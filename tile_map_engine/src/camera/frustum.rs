/// Frustum — the camera view volume in tile-local space.
///
/// Stores both representations the visibility test needs:
/// - `points`: the 8 frustum corners (near rectangle then far rectangle),
///   XY in tile units at the covering zoom, Z in elevation units
/// - `planes`: 6 plane equations (A, B, C, D) where (A, B, C) is the
///   inward-pointing normal and a point P is inside the frustum iff
///   dot(plane, P_homogeneous) >= 0 for all planes
///
/// Rebuilt once per frame from the inverse projection-view matrix and
/// immutable afterwards. Never shared across frames.

use glam::{DMat4, DVec3, DVec4};

/// Result of a 3-way frustum/AABB classification.
///
/// Drives the quadtree coverage traversal:
/// - `Outside` → prune the node and all descendants
/// - `Inside` → accept the node without testing descendants
/// - `Intersecting` → subdivide, or accept at max depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intersection {
    /// AABB is entirely outside the frustum
    Outside = 0,
    /// AABB partially overlaps the frustum
    Intersecting = 1,
    /// AABB is entirely inside the frustum
    Inside = 2,
}

/// Frustum plane indices
pub const PLANE_NEAR: usize = 0;
pub const PLANE_FAR: usize = 1;
pub const PLANE_LEFT: usize = 2;
pub const PLANE_RIGHT: usize = 3;
pub const PLANE_BOTTOM: usize = 4;
pub const PLANE_TOP: usize = 5;

/// The 8 clip-space cube corners, near rectangle first.
const CLIP_SPACE_CORNERS: [DVec4; 8] = [
    DVec4::new(-1.0, 1.0, -1.0, 1.0),
    DVec4::new(1.0, 1.0, -1.0, 1.0),
    DVec4::new(1.0, -1.0, -1.0, 1.0),
    DVec4::new(-1.0, -1.0, -1.0, 1.0),
    DVec4::new(-1.0, 1.0, 1.0, 1.0),
    DVec4::new(1.0, 1.0, 1.0, 1.0),
    DVec4::new(1.0, -1.0, 1.0, 1.0),
    DVec4::new(-1.0, -1.0, 1.0, 1.0),
];

/// Corner-index triples defining each bounding plane, in the fixed order
/// [near, far, left, right, bottom, top]. The winding of each triple makes
/// the resulting normal point toward the frustum interior.
const PLANE_POINT_INDICES: [[usize; 3]; 6] = [
    [0, 1, 2], // near
    [6, 5, 4], // far
    [0, 3, 7], // left
    [2, 1, 5], // right
    [3, 2, 6], // bottom
    [0, 4, 5], // top
];

/// Camera view volume bounded by 6 planes, in tile-local coordinates.
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Frustum corners: near rectangle (0-3) then far rectangle (4-7)
    pub points: [DVec4; 8],
    /// Bounding planes: near, far, left, right, bottom, top
    pub planes: [DVec4; 6],
}

impl Frustum {
    /// Build a frustum from an inverse projection-view matrix.
    ///
    /// The corners of the clip-space cube are transformed to world space,
    /// perspective-divided, and rescaled so XY land in tile units at the
    /// given zoom: each transformed corner `v` is multiplied componentwise
    /// by `(s, s, 1/v.w, s)` with `s = (1/v.w) * 2^zoom / world_size`.
    ///
    /// # Arguments
    ///
    /// * `inv_proj` - Inverse of the projection*view matrix (column-major)
    /// * `world_size` - Map extent in pixels at the current zoom
    /// * `zoom` - Current zoom level (scale = 2^zoom)
    ///
    /// The caller must never pass a singular matrix: a degenerate input
    /// produces zero-length plane normals and an undefined geometric
    /// result (there is no error path here).
    pub fn from_inv_proj_matrix(inv_proj: &DMat4, world_size: f64, zoom: f64) -> Self {
        debug_assert!(world_size > 0.0, "world_size must be positive");
        debug_assert!(zoom >= 0.0, "zoom must be non-negative");

        let scale = 2f64.powf(zoom);

        // Transform frustum corner points from clip space to tile space
        let mut points = [DVec4::ZERO; 8];
        for (point, corner) in points.iter_mut().zip(CLIP_SPACE_CORNERS.iter()) {
            let v = *inv_proj * *corner;
            let s = 1.0 / v.w / world_size * scale;
            *point = v * DVec4::new(s, s, 1.0 / v.w, s);
        }

        let mut planes = [DVec4::ZERO; 6];
        for (plane, indices) in planes.iter_mut().zip(PLANE_POINT_INDICES.iter()) {
            let p0 = points[indices[0]].truncate();
            let p1 = points[indices[1]].truncate();
            let p2 = points[indices[2]].truncate();

            let a = p0 - p1;
            let b = p2 - p1;
            let n = a.cross(b).normalize();
            let d = -n.dot(p1);
            *plane = n.extend(d);
        }

        Self { points, planes }
    }

    /// Signed distance of a point from a plane, positive on the inside.
    pub(crate) fn plane_distance(plane: &DVec4, point: &DVec4) -> f64 {
        plane.dot(*point)
    }

    /// Test whether a single point lies inside all 6 planes.
    pub fn contains_point(&self, point: DVec3) -> bool {
        let p = point.extend(1.0);
        self.planes
            .iter()
            .all(|plane| Self::plane_distance(plane, &p) >= 0.0)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
