use std::cell::Cell;

/// A counter that can be bumped through a shared reference.
///
/// Used for operations that only take `&self` on the cache (`peek`,
/// `peek_lru`, `recency_rank`). Makes the owning type `!Sync`, which matches
/// the single-threaded engine.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get() + 1);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.set(0);
    }
}
