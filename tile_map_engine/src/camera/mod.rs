//! Camera module — view frustum for visibility determination.
//!
//! Provides passive data containers for the per-frame culling pipeline.
//! The engine does NOT own a camera — the caller drives the view and
//! hands the engine an inverse projection-view matrix each frame.

mod frustum;

pub use frustum::{
    Frustum, Intersection,
    PLANE_NEAR, PLANE_FAR, PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP,
};
