//! lrukit: a fixed-capacity least-recently-used cache engine.
//!
//! The engine lives in [`policy::lru`]; [`builder`] is the checked way to
//! construct it, [`observer`] is how it reports what it does, and [`ds`]
//! holds the arena-backed recency list underneath.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache = LruCacheBuilder::new(2).build::<u32, &str>();
//! cache.put(1, "one");
//! cache.put(2, "two");
//! let _ = cache.get(&1);
//! cache.put(3, "three");
//!
//! assert!(cache.get(&2).is_err());
//! assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec![3, 1]);
//! ```

pub mod builder;
pub mod ds;
pub mod error;
pub mod observer;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;
