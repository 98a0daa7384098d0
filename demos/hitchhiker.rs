//! Walks a small cache through fills, an overwrite, evictions, a hit, two
//! misses and two teardowns, narrating every step through `tracing`.
//!
//! ```text
//! cargo run --example hitchhiker
//! RUST_LOG=lrukit=debug,hitchhiker=info cargo run --example hitchhiker
//! ```

use std::fmt;

use lrukit::builder::LruCacheBuilder;
use lrukit::observer::TracingObserver;
use lrukit::policy::lru::LruCache;
use tracing_subscriber::EnvFilter;

type Cache = LruCache<u32, String, TracingObserver>;

/// Renders the cache as `[k => v, ...]` from MRU to LRU.
struct Dump<'a>(&'a Cache);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (key, value)) in self.0.snapshot().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key} => {value}")?;
        }
        f.write_str("]")
    }
}

fn add(cache: &mut Cache, key: u32, value: &str) {
    tracing::info!(key, "adding");
    if let Some(previous) = cache.put(key, value.to_string()) {
        tracing::info!(key, %previous, "replaced existing entry");
    }
    tracing::info!(state = %Dump(cache), "memory");
}

fn read(cache: &mut Cache, key: u32) {
    tracing::info!(key, "reading");
    match cache.get(&key) {
        Ok(value) => tracing::info!(key, %value, "read"),
        Err(err) => tracing::warn!(%err, "cache page fault"),
    }
    tracing::info!(state = %Dump(cache), "memory");
}

fn destruct(cache: &mut Cache) {
    tracing::info!("destructing cache");
    cache.reset();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lrukit=trace,hitchhiker=info")),
        )
        .init();

    let mut cache = LruCacheBuilder::new(4).tracing().build::<u32, String>();

    add(&mut cache, 0, "Marvin");
    add(&mut cache, 1, "Ford Prefect");
    add(&mut cache, 0, "Another Marvin");
    add(&mut cache, 10, "Lisbeth Salander");
    add(&mut cache, 3, "Mikael Blomkvist");
    add(&mut cache, 4, "Trician McMillian");
    add(&mut cache, 5, "Don't panic!");

    read(&mut cache, 3);
    read(&mut cache, 11);

    destruct(&mut cache);
    read(&mut cache, 5);

    cache.initialize(2);
    add(&mut cache, 0, "Marvin");
    add(&mut cache, 1, "Ford Prefect");
    add(&mut cache, 3, "Mikael Blomkvist");
    destruct(&mut cache);
}
