//! Error types for the lrukit library.
//!
//! ## Key Components
//!
//! - [`KeyNotFound`]: Returned by [`LruCache::get`](crate::policy::lru::LruCache::get)
//!   when the requested key has no live entry. The only runtime cache error.
//! - [`ConfigError`]: Returned when cache configuration parameters are invalid
//!   (e.g. a negative capacity handed to the builder).
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::KeyNotFound;
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache: LruCache<u32, String> = LruCache::new(2);
//! cache.put(1, "one".to_string());
//!
//! assert_eq!(cache.get(&1).map(String::as_str), Ok("one"));
//! assert_eq!(cache.get(&9), Err(KeyNotFound::new(9)));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// KeyNotFound
// ---------------------------------------------------------------------------

/// Error returned by a promoting lookup when the key is not cached.
///
/// Carries the key that missed. A miss never mutates the cache, so the
/// caller can retry, fall back to a slower source, or `put` the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyNotFound<K> {
    key: K,
}

impl<K> KeyNotFound<K> {
    /// Creates a new `KeyNotFound` for `key`.
    #[inline]
    pub fn new(key: K) -> Self {
        Self { key }
    }

    /// Returns the key that was looked up.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Consumes the error and returns the key.
    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: fmt::Debug> fmt::Display for KeyNotFound<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key {:?} not found in cache", self.key)
    }
}

impl<K: fmt::Debug> std::error::Error for KeyNotFound<K> {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by `check_invariants` methods on cache types
/// (e.g. [`LruCache::check_invariants`](crate::policy::lru::LruCache::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible builder entry points such as
/// [`LruCacheBuilder::try_capacity`](crate::builder::LruCacheBuilder::try_capacity).
///
/// # Example
///
/// ```
/// use lrukit::builder::LruCacheBuilder;
///
/// let err = LruCacheBuilder::try_capacity(-1i64).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- KeyNotFound ------------------------------------------------------

    #[test]
    fn key_not_found_display_names_key() {
        let err = KeyNotFound::new(11u32);
        assert_eq!(err.to_string(), "key 11 not found in cache");
    }

    #[test]
    fn key_not_found_accessors() {
        let err = KeyNotFound::new(5u64);
        assert_eq!(*err.key(), 5);
        assert_eq!(err.into_key(), 5);
    }

    #[test]
    fn key_not_found_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<KeyNotFound<u32>>();
    }

    #[test]
    fn key_not_found_boxes_into_dyn_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(KeyNotFound::new(3u8));
        assert!(boxed.to_string().contains('3'));
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("index length mismatch");
        assert_eq!(err.to_string(), "index length mismatch");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be >= 0");
        assert_eq!(err.to_string(), "capacity must be >= 0");
    }

    #[test]
    fn config_debug_includes_message() {
        let err = ConfigError::new("bad capacity");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("bad capacity"));
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }
}
