//! Unique-id allocation for store entities.

use studio_ipc::UniqueId;

/// Monotonic process-wide id source.
///
/// Lives on the hub thread, so a plain counter suffices; ids are never
/// reused within a process lifetime.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    /// Create an allocator starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id.
    pub fn allocate(&mut self) -> UniqueId {
        self.next += 1;
        UniqueId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_are_distinct() {
        let mut ids = IdAllocator::new();

        let first = ids.allocate();
        let second = ids.allocate();
        assert_ne!(first, second);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut ids = IdAllocator::new();

        let mut previous = ids.allocate();
        for _ in 0..100 {
            let id = ids.allocate();
            assert!(id > previous);
            previous = id;
        }
    }
}
