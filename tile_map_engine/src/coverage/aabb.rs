/// Axis-aligned bounding box in tile-local space.
///
/// AABBs are ephemeral: the coverage traversal constructs one per spatial
/// node, classifies it against the frustum, and discards it. Subdividing
/// produces new boxes, never mutates the parent.

use glam::{DVec2, DVec3, DVec4};
use crate::camera::{Frustum, Intersection};

/// Axis-aligned bounding box with a precomputed center.
///
/// `min <= max` per axis. The Z span carries the elevation range of the
/// node and is preserved unchanged by quadrant subdivision.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: DVec3,
    /// Maximum corner (x, y, z)
    pub max: DVec3,
    /// Midpoint, (min + max) / 2
    pub center: DVec3,
}

impl Aabb {
    /// Create a box from its two extreme corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self {
            min,
            max,
            center: (min + max) * 0.5,
        }
    }

    /// One of 4 equal-area XY subdivisions, full Z range preserved.
    ///
    /// Index encoding: even/odd selects the low/high X half, `< 2`/`>= 2`
    /// selects the low/high Y half.
    pub fn quadrant(&self, index: usize) -> Aabb {
        debug_assert!(index < 4, "quadrant index out of range: {}", index);
        let split = [index % 2 == 0, index < 2];
        let mut q_min = self.min;
        let mut q_max = self.max;
        for axis in 0..2 {
            q_min[axis] = if split[axis] { self.min[axis] } else { self.center[axis] };
            q_max[axis] = if split[axis] { self.center[axis] } else { self.max[axis] };
        }
        // Elevation span is never split
        Aabb::new(q_min, q_max)
    }

    /// Signed X distance from a point to the nearest point on the box.
    ///
    /// Zero when the point's X already lies within [min.x, max.x].
    pub fn distance_x(&self, point: &DVec2) -> f64 {
        let point_on_aabb = point.x.min(self.max.x).max(self.min.x);
        point_on_aabb - point.x
    }

    /// Signed Y distance from a point to the nearest point on the box.
    ///
    /// Zero when the point's Y already lies within [min.y, max.y].
    pub fn distance_y(&self, point: &DVec2) -> f64 {
        let point_on_aabb = point.y.min(self.max.y).max(self.min.y);
        point_on_aabb - point.y
    }

    /// The 8 corner points of the box in homogeneous coordinates.
    fn corner_points(&self) -> [DVec4; 8] {
        [
            DVec4::new(self.min.x, self.min.y, self.min.z, 1.0),
            DVec4::new(self.max.x, self.min.y, self.min.z, 1.0),
            DVec4::new(self.max.x, self.max.y, self.min.z, 1.0),
            DVec4::new(self.min.x, self.max.y, self.min.z, 1.0),
            DVec4::new(self.min.x, self.min.y, self.max.z, 1.0),
            DVec4::new(self.max.x, self.min.y, self.max.z, 1.0),
            DVec4::new(self.max.x, self.max.y, self.max.z, 1.0),
            DVec4::new(self.min.x, self.max.y, self.max.z, 1.0),
        ]
    }

    /// Classify this box against a frustum (3-way separating-axis test).
    ///
    /// Each frustum plane together with the 3 principal axes defines the
    /// candidate separating axes. The plane tests run first: they are
    /// cheap and reject the common far-outside case immediately. The axis
    /// test catches configurations where frustum corners straddle the box
    /// without any plane separating them.
    pub fn intersects(&self, frustum: &Frustum) -> Intersection {
        let aabb_points = self.corner_points();
        let mut fully_inside = true;

        for plane in &frustum.planes {
            let mut points_inside = 0;
            for point in &aabb_points {
                if plane.dot(*point) >= 0.0 {
                    points_inside += 1;
                }
            }

            // Box entirely on the outside of one plane
            if points_inside == 0 {
                return Intersection::Outside;
            }

            if points_inside != aabb_points.len() {
                fully_inside = false;
            }
        }

        if fully_inside {
            return Intersection::Inside;
        }

        for axis in 0..3 {
            let mut proj_min = f64::MAX;
            let mut proj_max = f64::MIN;

            for point in &frustum.points {
                let projected = point[axis] - self.min[axis];
                proj_min = proj_min.min(projected);
                proj_max = proj_max.max(projected);
            }

            // Projection intervals are disjoint on this axis
            if proj_max < 0.0 || proj_min > self.max[axis] - self.min[axis] {
                return Intersection::Outside;
            }
        }

        Intersection::Intersecting
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
