/// Bounded pool of tile render targets.
///
/// The pool is the single ownership authority for every live tile
/// render target: tiles hold weak back-references only. Targets are
/// registered newest-last in a ring; when the per-frame capacity (the
/// visible-tile count) forces an eviction, the oldest target is dropped,
/// which releases its GPU memory and silently invalidates the owning
/// tile's back-reference.

use std::sync::Arc;

use crate::engine_debug;
use crate::engine_warn;
use crate::renderer::{RenderTarget, TargetRef};
use crate::util::CircularBuffer;

/// Log source for pool events
const SOURCE: &str = "tilemap::TargetPool";

/// Bounded ring of live tile render targets.
pub struct TargetPool {
    /// All resident targets, oldest registered first
    resident: CircularBuffer<Arc<dyn RenderTarget>>,
    /// Hard upper bound on capacity, independent of visible-tile count
    ceiling: usize,
}

impl TargetPool {
    /// Create a pool whose capacity can never exceed `ceiling`.
    ///
    /// The ceiling guards against unbounded GPU memory growth when the
    /// visible-tile count spikes; the effective capacity is set each
    /// frame through `set_capacity`.
    pub fn new(ceiling: usize) -> Self {
        let resident = CircularBuffer::new(ceiling, |target: Arc<dyn RenderTarget>| {
            engine_debug!(
                SOURCE,
                "evicted {}x{} render target",
                target.width(),
                target.height()
            );
        });
        Self { resident, ceiling }
    }

    /// Set the capacity for this frame, clamped to the ceiling.
    ///
    /// Shrinking evicts surplus targets immediately, oldest-first; each
    /// eviction releases GPU memory and invalidates the tile holding the
    /// corresponding back-reference.
    pub fn set_capacity(&mut self, capacity: usize) {
        let clamped = capacity.min(self.ceiling);
        if clamped < capacity {
            engine_warn!(
                SOURCE,
                "capacity {} clamped to ceiling {}",
                capacity,
                self.ceiling
            );
        }
        self.resident.set_capacity(clamped);
    }

    /// Current capacity bound.
    pub fn capacity(&self) -> usize {
        self.resident.capacity()
    }

    /// Hard capacity ceiling.
    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Number of live targets owned by the pool.
    pub fn resident_count(&self) -> usize {
        self.resident.len()
    }

    /// Reclaim an orphaned target of the given dimension for reuse.
    ///
    /// A target is orphaned when no tile back-reference to it remains
    /// (its tile was dropped from the store). The newest matching orphan
    /// is removed from the ring and handed back; the caller re-registers
    /// it through `insert` for its new tile. `None` means the caller
    /// should create a fresh target instead.
    pub fn acquire(&mut self, dim: u32) -> Option<Arc<dyn RenderTarget>> {
        self.resident.take_newest(|target| {
            Arc::weak_count(target) == 0 && target.width() == dim && target.height() == dim
        })
    }

    /// Register a target as the newest resident.
    ///
    /// Evicts the oldest resident when the pool is at capacity. Returns
    /// the weak back-reference the owning tile keeps.
    pub fn insert(&mut self, target: Arc<dyn RenderTarget>) -> TargetRef {
        let backref = Arc::downgrade(&target);
        self.resident.push(target);
        backref
    }

    /// Explicit early release, distinct from eviction.
    ///
    /// Removes the referenced target from the ring and drops it without
    /// invoking the eviction callback. Returns whether a target was
    /// actually released (a dead back-reference is a no-op).
    pub fn release(&mut self, backref: &TargetRef) -> bool {
        let Some(target) = backref.upgrade() else {
            return false;
        };
        match self.resident.take_newest(|t| Arc::ptr_eq(t, &target)) {
            Some(removed) => {
                engine_debug!(
                    SOURCE,
                    "early release of {}x{} render target",
                    removed.width(),
                    removed.height()
                );
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "target_pool_tests.rs"]
mod tests;
