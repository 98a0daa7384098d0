//! Builder for [`LruCache`] instances.
//!
//! The builder is the checked entry point: it accepts capacities from
//! untrusted or signed sources and reports the ones that cannot be a cache
//! size as [`ConfigError`], and it lets the observer be chosen before the
//! cache exists so that the very first `Initialized` event is seen.
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::LruCacheBuilder;
//!
//! let mut cache = LruCacheBuilder::new(100).build::<u64, String>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Ok(&"hello".to_string()));
//! ```

use std::fmt;
use std::hash::Hash;

use crate::error::ConfigError;
#[cfg(feature = "tracing")]
use crate::observer::TracingObserver;
use crate::observer::{CacheObserver, NoopObserver};
use crate::policy::lru::LruCache;

/// Builder for creating [`LruCache`] instances.
#[derive(Debug, Clone)]
pub struct LruCacheBuilder<O = NoopObserver> {
    capacity: usize,
    observer: O,
}

impl LruCacheBuilder {
    /// Create a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            observer: NoopObserver,
        }
    }

    /// Create a builder from any integer capacity, rejecting values that are
    /// negative or do not fit in `usize`.
    ///
    /// ```rust
    /// use lrukit::builder::LruCacheBuilder;
    ///
    /// assert!(LruCacheBuilder::try_capacity(4i32).is_ok());
    /// assert!(LruCacheBuilder::try_capacity(0u8).is_ok());
    ///
    /// let err = LruCacheBuilder::try_capacity(-3i64).unwrap_err();
    /// assert_eq!(err.message(), "capacity must be a non-negative integer that fits in usize, got -3");
    /// ```
    pub fn try_capacity<T>(capacity: T) -> Result<Self, ConfigError>
    where
        T: TryInto<usize> + Copy + fmt::Display,
    {
        let capacity = capacity.try_into().map_err(|_| {
            ConfigError::new(format!(
                "capacity must be a non-negative integer that fits in usize, got {capacity}"
            ))
        })?;
        Ok(Self::new(capacity))
    }
}

impl<O> LruCacheBuilder<O> {
    /// Replace the capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Attach an observer that will receive every cache event.
    pub fn observer<P>(self, observer: P) -> LruCacheBuilder<P> {
        LruCacheBuilder {
            capacity: self.capacity,
            observer,
        }
    }

    /// Shorthand for `.observer(TracingObserver)`.
    #[cfg(feature = "tracing")]
    pub fn tracing(self) -> LruCacheBuilder<TracingObserver> {
        self.observer(TracingObserver)
    }

    /// Build the cache.
    ///
    /// # Type Parameters
    ///
    /// - `K`: Key type, must be `Copy + Eq + Hash`
    /// - `V`: Value type, unconstrained
    ///
    /// # Example
    ///
    /// ```rust
    /// use lrukit::builder::LruCacheBuilder;
    ///
    /// let cache = LruCacheBuilder::new(16).build::<u32, Vec<u8>>();
    /// assert_eq!(cache.capacity(), 16);
    /// ```
    pub fn build<K, V>(self) -> LruCache<K, V, O>
    where
        K: Copy + Eq + Hash,
        O: CacheObserver<K, V>,
    {
        LruCache::with_observer(self.capacity, self.observer)
    }
}
