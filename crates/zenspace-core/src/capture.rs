//! Scoped pointer capture.
//!
//! A component that must keep receiving move/up events after the pointer
//! leaves its bounds acquires a [`CaptureGuard`] from the host's
//! [`PointerCapture`]. The host routes global pointer events only to holders
//! of a live guard. Dropping the guard releases the capture, so every exit
//! path (gesture end, image swap, component teardown mid-drag) deregisters.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

/// Identity of one capture acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaptureId(u64);

#[derive(Default)]
struct Registry {
    next_id: AtomicU64,
    active: Mutex<BTreeSet<CaptureId>>,
}

impl Registry {
    fn active(&self) -> MutexGuard<'_, BTreeSet<CaptureId>> {
        // A poisoned set is still a valid set of ids.
        self.active.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Host-side registry of live pointer captures. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct PointerCapture {
    registry: Arc<Registry>,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start routing global pointer events to the caller until the guard drops.
    pub fn acquire(&self) -> CaptureGuard {
        let id = CaptureId(self.registry.next_id.fetch_add(1, Ordering::Relaxed));
        self.registry.active().insert(id);
        debug!(?id, "Pointer capture acquired");
        CaptureGuard {
            id,
            registry: Arc::clone(&self.registry),
        }
    }

    /// Number of captures currently held.
    pub fn active_count(&self) -> usize {
        self.registry.active().len()
    }

    pub fn is_captured(&self) -> bool {
        self.active_count() > 0
    }

    /// Whether the capture with `id` is still live.
    pub fn holds(&self, id: CaptureId) -> bool {
        self.registry.active().contains(&id)
    }
}

/// Live capture. Released on drop.
pub struct CaptureGuard {
    id: CaptureId,
    registry: Arc<Registry>,
}

impl CaptureGuard {
    pub fn id(&self) -> CaptureId {
        self.id
    }
}

impl std::fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureGuard").field("id", &self.id).finish()
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.registry.active().remove(&self.id);
        debug!(id = ?self.id, "Pointer capture released");
    }
}
