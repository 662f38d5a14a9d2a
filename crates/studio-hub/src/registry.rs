//! Registered store tracking.

use std::collections::HashMap;

use tracing::{debug, info};

use studio_ipc::WindowId;

use crate::window::WindowRef;

/// Window-id → live handle map for store synchronization.
///
/// Owned by the hub loop and only ever touched there, so the map needs
/// no interior locking.
#[derive(Default)]
pub struct WindowRegistry {
    entries: HashMap<WindowId, WindowRef>,
}

impl WindowRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry for `id`. Idempotent: re-registration after a
    /// page reload is a no-op. Returns true if the entry was inserted.
    pub fn register(&mut self, id: WindowId, handle: WindowRef) -> bool {
        if self.entries.contains_key(&id) {
            debug!(%id, "store already registered");
            return false;
        }

        self.entries.insert(id, handle);
        info!(windows = ?self.list(), "registered stores");
        true
    }

    /// Remove the entry for a closed window. Driven by the hub's close
    /// observer, not by the public request surface.
    pub fn unregister(&mut self, id: WindowId) {
        if self.entries.remove(&id).is_some() {
            info!(windows = ?self.list(), "registered stores");
        }
    }

    /// Whether `id` currently has an entry.
    pub fn contains(&self, id: WindowId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Handle for `id`, if registered.
    pub fn get(&self, id: WindowId) -> Option<&WindowRef> {
        self.entries.get(&id)
    }

    /// Every entry except `excluded`, for mutation fan-out.
    pub fn others(&self, excluded: WindowId) -> impl Iterator<Item = (WindowId, &WindowRef)> {
        self.entries
            .iter()
            .filter(move |(id, _)| **id != excluded)
            .map(|(id, handle)| (*id, handle))
    }

    /// Registered window ids, sorted. Diagnostics only.
    pub fn list(&self) -> Vec<WindowId> {
        let mut ids: Vec<_> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
