pub use crate::builder::LruCacheBuilder;
pub use crate::ds::{IntrusiveList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError, KeyNotFound};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "tracing")]
pub use crate::observer::TracingObserver;
pub use crate::observer::{CacheEvent, CacheObserver, NoopObserver};
#[cfg(feature = "tracing")]
pub use crate::policy::lru::TracingLruCache;
pub use crate::policy::lru::{Iter, LruCache};
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache};
