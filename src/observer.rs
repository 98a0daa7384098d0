//! Event hook for cache diagnostics.
//!
//! The cache engine performs no I/O. Anything that wants to narrate what the
//! cache is doing (logging, test recorders, debugging dumps) implements
//! [`CacheObserver`] and is handed every [`CacheEvent`] as it happens.
//!
//! ```text
//!   put(k, v) ──► [Evicted{tail}] ──► Inserted{k}        (new key, cache full)
//!   put(k, v) ──► Updated{k}                             (existing key)
//!   put(k, v) ──► Rejected{k}                            (capacity == 0)
//!   get(k)    ──► Hit{k} | Miss{k}
//!   initialize(n) / reset() ──► Initialized{capacity}
//! ```
//!
//! Observers see borrowed data and run inside the operation, after the
//! mutation that produced the event (except `Evicted`, which fires while the
//! evicted value is still borrowable, just before it is dropped).
//!
//! [`NoopObserver`] is the default and compiles away. [`TracingObserver`]
//! forwards to the `tracing` crate (feature `tracing`).

use std::fmt;

/// Something the cache did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEvent<'a, K, V> {
    /// The cache was emptied and given a (possibly new) capacity.
    Initialized { capacity: usize },
    /// A new key was admitted at the MRU position.
    Inserted { key: &'a K },
    /// An existing key had its value replaced and was promoted.
    Updated { key: &'a K },
    /// A lookup found the key and promoted it.
    Hit { key: &'a K },
    /// A lookup did not find the key.
    Miss { key: &'a K },
    /// The LRU entry was evicted to make room for a new key.
    Evicted { key: &'a K, value: &'a V },
    /// An entry was removed explicitly (`remove` / `pop_lru`).
    Removed { key: &'a K },
    /// A new key was refused because the cache has zero capacity.
    Rejected { key: &'a K },
}

impl<K, V> CacheEvent<'_, K, V> {
    /// Short, stable name for the event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CacheEvent::Initialized { .. } => "initialized",
            CacheEvent::Inserted { .. } => "inserted",
            CacheEvent::Updated { .. } => "updated",
            CacheEvent::Hit { .. } => "hit",
            CacheEvent::Miss { .. } => "miss",
            CacheEvent::Evicted { .. } => "evicted",
            CacheEvent::Removed { .. } => "removed",
            CacheEvent::Rejected { .. } => "rejected",
        }
    }

    /// The key the event is about, if any.
    pub fn key(&self) -> Option<&K> {
        match *self {
            CacheEvent::Initialized { .. } => None,
            CacheEvent::Inserted { key }
            | CacheEvent::Updated { key }
            | CacheEvent::Hit { key }
            | CacheEvent::Miss { key }
            | CacheEvent::Evicted { key, .. }
            | CacheEvent::Removed { key }
            | CacheEvent::Rejected { key } => Some(key),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Display for CacheEvent<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheEvent::Initialized { capacity } => write!(f, "initialized capacity={capacity}"),
            other => match other.key() {
                Some(key) => write!(f, "{} key={:?}", other.kind(), key),
                None => f.write_str(other.kind()),
            },
        }
    }
}

/// Receives every event the cache emits.
pub trait CacheObserver<K, V> {
    fn on_event(&mut self, event: &CacheEvent<'_, K, V>);
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopObserver;

impl<K, V> CacheObserver<K, V> for NoopObserver {
    #[inline(always)]
    fn on_event(&mut self, _event: &CacheEvent<'_, K, V>) {}
}

/// Observer that forwards events to `tracing`.
///
/// Hits, inserts, updates and removals go out at `TRACE`; initialization,
/// misses, evictions and rejections at `DEBUG`. Install a subscriber (for
/// example `tracing_subscriber::fmt`) to see them.
#[cfg(feature = "tracing")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl<K, V> CacheObserver<K, V> for TracingObserver
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn on_event(&mut self, event: &CacheEvent<'_, K, V>) {
        match event {
            CacheEvent::Initialized { capacity } => {
                tracing::debug!(capacity = *capacity, "cache initialized");
            },
            CacheEvent::Inserted { key } => tracing::trace!(key = ?key, "inserted entry"),
            CacheEvent::Updated { key } => tracing::trace!(key = ?key, "replaced entry"),
            CacheEvent::Hit { key } => tracing::trace!(key = ?key, "cache hit"),
            CacheEvent::Miss { key } => tracing::debug!(key = ?key, "cache miss"),
            CacheEvent::Evicted { key, value } => {
                tracing::debug!(key = ?key, value = ?value, "evicted least recently used entry");
            },
            CacheEvent::Removed { key } => tracing::trace!(key = ?key, "removed entry"),
            CacheEvent::Rejected { key } => {
                tracing::debug!(key = ?key, "insert rejected by zero-capacity cache");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_and_key() {
        let key = 7u32;
        let value = "seven";
        let evicted: CacheEvent<'_, u32, &str> = CacheEvent::Evicted {
            key: &key,
            value: &value,
        };
        assert_eq!(evicted.kind(), "evicted");
        assert_eq!(evicted.key(), Some(&7));

        let init: CacheEvent<'_, u32, &str> = CacheEvent::Initialized { capacity: 4 };
        assert_eq!(init.kind(), "initialized");
        assert_eq!(init.key(), None);
    }

    #[test]
    fn event_display() {
        let key = 3u64;
        let miss: CacheEvent<'_, u64, String> = CacheEvent::Miss { key: &key };
        assert_eq!(miss.to_string(), "miss key=3");
        let init: CacheEvent<'_, u64, String> = CacheEvent::Initialized { capacity: 2 };
        assert_eq!(init.to_string(), "initialized capacity=2");
    }

    #[derive(Default)]
    struct Transcript(Vec<String>);

    impl CacheObserver<u32, u32> for Transcript {
        fn on_event(&mut self, event: &CacheEvent<'_, u32, u32>) {
            self.0.push(event.to_string());
        }
    }

    #[test]
    fn custom_observer_receives_events() {
        let mut transcript = Transcript::default();
        let key = 1;
        transcript.on_event(&CacheEvent::Hit { key: &key });
        transcript.on_event(&CacheEvent::Initialized { capacity: 0 });
        assert_eq!(transcript.0, vec!["hit key=1", "initialized capacity=0"]);
    }

    #[test]
    fn noop_observer_accepts_everything() {
        let mut observer = NoopObserver;
        let key = 1u8;
        CacheObserver::<u8, ()>::on_event(&mut observer, &CacheEvent::Removed { key: &key });
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn tracing_observer_runs_without_subscriber() {
        let mut observer = TracingObserver;
        let key = 1u32;
        let value = String::from("x");
        observer.on_event(&CacheEvent::Evicted {
            key: &key,
            value: &value,
        });
        observer.on_event(&CacheEvent::Initialized { capacity: 1 } as &CacheEvent<'_, u32, String>);
    }

    #[cfg(feature = "tracing")]
    mod tracing_output {
        use super::*;
        use std::io;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct CapturedLog {
            buffer: Arc<Mutex<Vec<u8>>>,
        }

        impl CapturedLog {
            fn lines(&self) -> Vec<String> {
                let bytes = self.buffer.lock().unwrap().clone();
                String::from_utf8(bytes).unwrap().lines().map(str::to_owned).collect()
            }

            fn line_with(&self, message: &str) -> String {
                self.lines()
                    .into_iter()
                    .find(|line| line.contains(message))
                    .unwrap_or_else(|| panic!("no log line contains {message:?}"))
            }
        }

        impl io::Write for CapturedLog {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.buffer.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLog {
            type Writer = Self;

            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        fn capture(events: impl FnOnce(&mut TracingObserver)) -> CapturedLog {
            let log = CapturedLog::default();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(log.clone())
                .with_max_level(tracing::Level::TRACE)
                .with_ansi(false)
                .without_time()
                .finish();
            tracing::subscriber::with_default(subscriber, || events(&mut TracingObserver));
            log
        }

        #[test]
        fn eviction_logs_key_and_value_at_debug() {
            let key = 7u32;
            let value = String::from("seven");
            let log = capture(|observer| {
                observer.on_event(&CacheEvent::Evicted {
                    key: &key,
                    value: &value,
                });
            });

            let line = log.line_with("evicted least recently used entry");
            assert!(line.contains("DEBUG"), "{line}");
            assert!(line.contains("key=7"), "{line}");
            assert!(line.contains("value=\"seven\""), "{line}");
        }

        #[test]
        fn levels_follow_event_weight() {
            let key = 3u32;
            let log = capture(|observer| {
                observer.on_event(&CacheEvent::Initialized { capacity: 2 } as &CacheEvent<'_, u32, String>);
                observer.on_event(&CacheEvent::Miss { key: &key } as &CacheEvent<'_, u32, String>);
                observer.on_event(&CacheEvent::Hit { key: &key } as &CacheEvent<'_, u32, String>);
                observer.on_event(&CacheEvent::Rejected { key: &key } as &CacheEvent<'_, u32, String>);
            });

            let initialized = log.line_with("cache initialized");
            assert!(initialized.contains("DEBUG") && initialized.contains("capacity=2"));
            let miss = log.line_with("cache miss");
            assert!(miss.contains("DEBUG") && miss.contains("key=3"));
            let hit = log.line_with("cache hit");
            assert!(hit.contains("TRACE") && hit.contains("key=3"));
            assert!(log.line_with("insert rejected").contains("DEBUG"));
            assert_eq!(log.lines().len(), 4);
        }
    }
}
