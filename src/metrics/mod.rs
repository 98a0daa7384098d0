//! Operation counters for the cache engine (feature `metrics`).
//!
//! Recording, snapshotting and exporting are separate concerns:
//!
//! ```text
//!   LruCache ──record_*──► LruMetrics ──snapshot──► LruMetricsSnapshot ──export──► sink
//!                          (metrics_impl)           (snapshot)              (exporter)
//! ```
//!
//! Counters are observational; they never influence eviction decisions.

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::LruMetrics;
pub use snapshot::LruMetricsSnapshot;
pub use traits::{MetricsExporter, MetricsReset, MetricsSnapshotProvider};
