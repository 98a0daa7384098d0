//! # Least Recently Used (LRU) Cache Engine
//!
//! Fixed-capacity key/value cache that, when full, discards the entry that
//! has gone longest without being read or written.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                      LruCache<K, V, O>                               │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>  (key index, owns nothing)             │   │
//!   │   │                                                              │   │
//!   │   │  ┌─────────┬──────────────────────────────────────────┐      │   │
//!   │   │  │   Key   │  SlotId                                  │      │   │
//!   │   │  ├─────────┼──────────────────────────────────────────┤      │   │
//!   │   │  │    7    │  ──────────────────────────────────────┐ │      │   │
//!   │   │  │    3    │  ────────────────────────────────┐     │ │      │   │
//!   │   │  │    9    │  ──────────────────────────┐     │     │ │      │   │
//!   │   │  └─────────┴────────────────────────────┼─────┼─────┼─┘      │   │
//!   │   └─────────────────────────────────────────┼─────┼─────┼────────┘   │
//!   │                                             │     │     │            │
//!   │   ┌─────────────────────────────────────────┼─────┼─────┼────────┐   │
//!   │   │  IntrusiveList<Entry<K, V>>  (recency, owns every entry)     │   │
//!   │   │                                         ▼     ▼     ▼        │   │
//!   │   │  head ──► ┌──────┐ ◄──► ┌──────┐ ◄──► ┌──────┐ ◄── tail      │   │
//!   │   │    (MRU)  │ k: 9 │      │ k: 3 │      │ k: 7 │   (LRU)       │   │
//!   │   │           │ v    │      │ v    │      │ v    │               │   │
//!   │   │           └──────┘      └──────┘      └──────┘               │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   │                                                                      │
//!   │   observer: O  (CacheObserver, NoopObserver by default)              │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries live in the `SlotArena` behind the recency list and are addressed
//! by `SlotId`. The index maps keys to those ids, so evicting an entry can
//! never leave a dangling reference behind: a stale id simply resolves to
//! nothing.
//!
//! ## Operations Flow
//!
//! ```text
//!   PUT new key (cache full, capacity = 3)
//!   ═══════════════════════════════════════════════════════════════════
//!     head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!
//!     put(D):  1. index miss
//!              2. len == capacity → pop tail [C], unindex C
//!              3. push [D] at head, index D
//!
//!     head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//!
//!   GET existing key
//!   ═══════════════════════════════════════════════════════════════════
//!     head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!
//!     get(B):  1. index hit → SlotId
//!              2. move_to_front(SlotId)
//!
//!     head ──► [B] ◄──► [A] ◄──► [C] ◄── tail
//!
//!   GET missing key
//!   ═══════════════════════════════════════════════════════════════════
//!     get(Z) → Err(KeyNotFound { key: Z }); nothing moves
//! ```
//!
//! ## Methods
//!
//! | Method               | Complexity | Description                               |
//! |----------------------|------------|-------------------------------------------|
//! | `new(capacity)`      | O(1)       | Create an empty cache                     |
//! | `initialize(cap)`    | O(n)       | Drop everything, adopt a new capacity     |
//! | `reset()`            | O(n)       | `initialize(0)`                           |
//! | `put(k, v)`          | O(1)*      | Insert or update, may evict LRU           |
//! | `get(&k)`            | O(1)*      | Promote and return, or `KeyNotFound`      |
//! | `peek(&k)`           | O(1)*      | Read without promotion                    |
//! | `contains(&k)`       | O(1)*      | Membership without promotion              |
//! | `touch(&k)`          | O(1)*      | Promote without reading                   |
//! | `remove(&k)`         | O(1)*      | Remove by key                             |
//! | `pop_lru()`          | O(1)       | Remove and return the tail                |
//! | `peek_lru()`         | O(1)       | Inspect the tail                          |
//! | `peek_mru()`         | O(1)       | Inspect the head                          |
//! | `recency_rank(&k)`   | O(n)       | Position in recency order (0 = MRU)       |
//! | `snapshot()`         | O(n) lazy  | Restartable MRU→LRU iterator              |
//! | `clear()`            | O(n)       | Drop entries, keep capacity               |
//! | `check_invariants()` | O(n)       | Verify index/list agreement               |
//!
//! `*` average, hash lookup.
//!
//! ## Capacity Zero
//!
//! A cache with capacity 0 admits nothing: `put` of a new key is rejected
//! (reported to the observer as `Rejected`) and the cache stays empty. This
//! is also the state after `reset()`.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache: LruCache<u32, String> = LruCache::new(2);
//! cache.put(0, "Marvin".to_string());
//! cache.put(1, "Ford".to_string());
//! cache.put(2, "Zaphod".to_string()); // evicts 0
//!
//! assert!(cache.get(&0).is_err());
//! assert_eq!(cache.get(&1).map(String::as_str), Ok("Ford")); // 1 is now MRU
//!
//! cache.put(3, "Trillian".to_string()); // evicts 2, not 1
//! let order: Vec<u32> = cache.keys().copied().collect();
//! assert_eq!(order, vec![3, 1]);
//!
//! cache.reset();
//! assert!(cache.get(&1).is_err());
//! ```
//!
//! ## Thread Safety
//!
//! `LruCache` is single-threaded: every mutating method takes `&mut self` and
//! there is no internal locking. It is `Send` when `K`, `V` and `O` are. With
//! the `metrics` feature enabled it is not `Sync`, because read-path counters
//! use `Cell`.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::RecencyIter;
use crate::ds::{IntrusiveList, SlotId};
use crate::error::{InvariantError, KeyNotFound};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsReset,
    MetricsSnapshotProvider,
};
use crate::observer::{CacheEvent, CacheObserver, NoopObserver};
#[cfg(feature = "tracing")]
use crate::observer::TracingObserver;
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// Upper bound on storage reserved up front; larger caches grow on demand.
const MAX_PREALLOC: usize = 1 << 16;

/// A live cache entry. Its position in the recency list is its recency.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity LRU cache.
///
/// See the [module documentation](self) for the data layout and operation
/// costs.
pub struct LruCache<K, V, O = NoopObserver> {
    index: FxHashMap<K, SlotId>,
    recency: IntrusiveList<Entry<K, V>>,
    capacity: usize,
    observer: O,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

/// [`LruCache`] that narrates through `tracing`.
#[cfg(feature = "tracing")]
pub type TracingLruCache<K, V> = LruCache<K, V, TracingObserver>;

impl<K, V> LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of 0 creates a cache that rejects every insert.
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let cache: LruCache<u32, String> = LruCache::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self::with_observer(capacity, NoopObserver)
    }
}

impl<K, V, O> LruCache<K, V, O>
where
    K: Copy + Eq + Hash,
    O: CacheObserver<K, V>,
{
    /// Creates an empty cache that reports every operation to `observer`.
    ///
    /// The observer receives `Initialized { capacity }` before this returns.
    pub fn with_observer(capacity: usize, mut observer: O) -> Self {
        let reserve = capacity.min(MAX_PREALLOC);

        #[cfg(feature = "metrics")]
        let mut metrics = LruMetrics::default();
        #[cfg(feature = "metrics")]
        metrics.record_initialize();

        observer.on_event(&CacheEvent::Initialized { capacity });
        LruCache {
            index: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            recency: IntrusiveList::with_capacity(reserve),
            capacity,
            observer,
            #[cfg(feature = "metrics")]
            metrics,
        }
    }

    /// Drops every entry and adopts `capacity`.
    ///
    /// Storage held for the previous contents is released. Metrics counters
    /// (feature `metrics`) survive re-initialization.
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(1);
    /// cache.put(1u32, "a");
    /// cache.initialize(8);
    /// assert!(cache.is_empty());
    /// assert_eq!(cache.capacity(), 8);
    /// ```
    pub fn initialize(&mut self, capacity: usize) {
        #[cfg(feature = "metrics")]
        self.metrics.record_initialize();

        let reserve = capacity.min(MAX_PREALLOC);
        self.recency.clear_shrink();
        self.recency.reserve(reserve);
        self.index = FxHashMap::with_capacity_and_hasher(reserve, Default::default());
        self.capacity = capacity;

        self.observer.on_event(&CacheEvent::Initialized { capacity });
        self.debug_validate();
    }

    /// Tears the cache down to empty with capacity 0.
    ///
    /// The cache stays usable; call [`initialize`](Self::initialize) to give
    /// it room again.
    #[inline]
    pub fn reset(&mut self) {
        self.initialize(0);
    }

    /// Inserts or updates `key`, leaving it at the MRU position.
    ///
    /// - Existing key: the value is replaced in place and the previous value
    ///   returned. No eviction happens.
    /// - New key, cache full: exactly one entry, the current LRU, is evicted
    ///   first.
    /// - New key, capacity 0: the insert is rejected and nothing is stored.
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(4);
    /// assert_eq!(cache.put(0u32, "Marvin"), None);
    /// cache.put(1, "Ford");
    /// assert_eq!(cache.put(0, "Another Marvin"), Some("Marvin"));
    /// assert_eq!(cache.len(), 2);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let previous = self
                .recency
                .get_mut(id)
                .map(|entry| std::mem::replace(&mut entry.value, value));
            self.recency.move_to_front(id);

            self.observer.on_event(&CacheEvent::Updated { key: &key });
            self.debug_validate();
            return previous;
        }

        if self.capacity == 0 {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_rejected();

            self.observer.on_event(&CacheEvent::Rejected { key: &key });
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.index.len() >= self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            self.evict_lru();
        }

        let id = self.recency.push_front(Entry { key, value });
        self.index.insert(key, id);

        self.observer.on_event(&CacheEvent::Inserted { key: &key });
        self.debug_validate();
        None
    }

    /// Returns the value for `key` and promotes it to MRU.
    ///
    /// A miss returns [`KeyNotFound`] and leaves the cache untouched.
    ///
    /// ```
    /// use lrukit::error::KeyNotFound;
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.put(1u32, "one");
    /// cache.put(2, "two");
    ///
    /// assert_eq!(cache.get(&1), Ok(&"one"));
    /// assert_eq!(cache.peek_mru(), Some((&1, &"one")));
    /// assert_eq!(cache.get(&3), Err(KeyNotFound::new(3)));
    /// ```
    pub fn get(&mut self, key: &K) -> Result<&V, KeyNotFound<K>> {
        let promoted = match self.index.get(key) {
            Some(&id) if self.recency.move_to_front(id) => Some(id),
            _ => None,
        };
        let Some(entry) = promoted.and_then(|id| self.recency.get(id)) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();

            self.observer.on_event(&CacheEvent::Miss { key });
            return Err(KeyNotFound::new(*key));
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.observer.on_event(&CacheEvent::Hit { key });
        self.debug_validate();
        Ok(&entry.value)
    }

    /// Returns the value for `key` without changing its recency.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();

        let &id = self.index.get(key)?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_found();

        self.recency.get(id).map(|entry| &entry.value)
    }

    /// Returns `true` if `key` has a live entry. Does not promote.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of live entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Promotes `key` to MRU without reading it. Returns `false` on a miss.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&id) = self.index.get(key) else {
            return false;
        };
        self.recency.move_to_front(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_touch_found();

        self.debug_validate();
        true
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let id = self.index.remove(key)?;
        let entry = self.recency.remove(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        self.observer.on_event(&CacheEvent::Removed { key: &entry.key });
        self.debug_validate();
        Some(entry.value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let entry = self.recency.pop_back()?;
        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        self.observer.on_event(&CacheEvent::Removed { key: &entry.key });
        self.debug_validate();
        Some((entry.key, entry.value))
    }

    /// The entry that would be evicted next.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_call();

        let entry = self.recency.back()?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_found();

        Some((&entry.key, &entry.value))
    }

    /// The most recently inserted or read entry.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.recency.front().map(|entry| (&entry.key, &entry.value))
    }

    /// Position of `key` in recency order, 0 being MRU. O(n).
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_recency_rank_call();

        let &target = self.index.get(key)?;
        for (rank, id) in self.recency.iter_ids().enumerate() {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_recency_rank_scan_step();

            if id == target {
                #[cfg(feature = "metrics")]
                (&self.metrics).record_recency_rank_found();
                return Some(rank);
            }
        }
        None
    }

    /// Lazy MRU→LRU view of the live entries.
    ///
    /// The iterator is `Clone`, yields exactly [`len`](Self::len) items and
    /// can be restarted by cloning it or calling `snapshot()` again. It is a
    /// diagnostic view: nothing about it is promoted or counted.
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(3);
    /// cache.put(1u32, 'a');
    /// cache.put(2, 'b');
    /// let _ = cache.get(&1);
    ///
    /// let snapshot = cache.snapshot();
    /// let pairs: Vec<_> = snapshot.clone().map(|(k, v)| (*k, *v)).collect();
    /// assert_eq!(pairs, vec![(1, 'a'), (2, 'b')]);
    /// assert_eq!(snapshot.count(), 2);
    /// ```
    pub fn snapshot(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.recency.iter(),
        }
    }

    /// Keys in MRU→LRU order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + Clone {
        self.snapshot().map(|(key, _)| key)
    }

    /// Drops every entry but keeps the capacity.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.recency.clear();
        self.index.clear();
        self.debug_validate();
    }

    /// The observer receiving this cache's events.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Verifies that the key index and the recency list agree.
    ///
    /// Checks that both hold the same number of entries, that the count does
    /// not exceed capacity, that the list links are consistent end to end and
    /// that every indexed key resolves to a live entry carrying that key.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.recency.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but recency list holds {} entries",
                self.index.len(),
                self.recency.len()
            )));
        }
        if self.recency.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "{} live entries exceed capacity {}",
                self.recency.len(),
                self.capacity
            )));
        }
        self.recency.validate_links()?;

        for (key, &id) in &self.index {
            match self.recency.get(id) {
                Some(entry) if entry.key == *key => {},
                Some(_) => {
                    return Err(InvariantError::new(format!(
                        "slot {} is indexed under a key it does not hold",
                        id.index()
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "index points at free slot {}",
                        id.index()
                    )));
                },
            }
        }
        Ok(())
    }

    fn evict_lru(&mut self) {
        let Some(entry) = self.recency.pop_back() else {
            return;
        };
        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();

        self.observer.on_event(&CacheEvent::Evicted {
            key: &entry.key,
            value: &entry.value,
        });
    }

    #[inline]
    fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        if let Err(err) = self.check_invariants() {
            panic!("LruCache invariant violated: {err}");
        }
    }
}

/// MRU→LRU iterator over `(&K, &V)`, returned by [`LruCache::snapshot`].
pub struct Iter<'a, K, V> {
    inner: RecencyIter<'a, Entry<K, V>>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K, V, O> IntoIterator for &'a LruCache<K, V, O>
where
    K: Copy + Eq + Hash,
    O: CacheObserver<K, V>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshot()
    }
}

impl<K, V, O> CoreCache<K, V> for LruCache<K, V, O>
where
    K: Copy + Eq + Hash,
    O: CacheObserver<K, V>,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.put(key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key).ok()
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }
}

impl<K, V, O> MutableCache<K, V> for LruCache<K, V, O>
where
    K: Copy + Eq + Hash,
    O: CacheObserver<K, V>,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }
}

impl<K, V, O> LruCacheTrait<K, V> for LruCache<K, V, O>
where
    K: Copy + Eq + Hash,
    O: CacheObserver<K, V>,
{
    #[inline]
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    #[inline]
    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    #[inline]
    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCache::recency_rank(self, key)
    }
}

#[cfg(feature = "metrics")]
impl<K, V, O> LruCache<K, V, O>
where
    K: Copy + Eq + Hash,
    O: CacheObserver<K, V>,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity)
    }
}

#[cfg(feature = "metrics")]
impl<K, V, O> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V, O>
where
    K: Copy + Eq + Hash,
    O: CacheObserver<K, V>,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<K, V, O> MetricsReset for LruCache<K, V, O> {
    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

impl<K, V, O> fmt::Debug for LruCache<K, V, O>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Entries<'a, K, V>(&'a IntrusiveList<Entry<K, V>>);

        impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entries<'_, K, V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entries(self.0.iter().map(|entry| (&entry.key, &entry.value)))
                    .finish()
            }
        }

        f.debug_struct("LruCache")
            .field("len", &self.recency.len())
            .field("capacity", &self.capacity)
            .field("entries", &Entries(&self.recency))
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Creates an LRU cache with a default capacity of 16.
    fn default() -> Self {
        Self::new(16)
    }
}

impl<K, V, O> Extend<(K, V)> for LruCache<K, V, O>
where
    K: Copy + Eq + Hash,
    O: CacheObserver<K, V>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}
