//! Operation counters for [`OrderedMap`](crate::map::OrderedMap) (feature `metrics`).
//!
//! ```
//! use lrukit::map::LimitLruMap;
//! use lrukit::metrics::exporter::PrometheusTextExporter;
//! use lrukit::metrics::traits::MetricsExporter;
//!
//! let mut map = LimitLruMap::new(2);
//! map.set("a", 1);
//! map.get("a");
//! map.get("b");
//!
//! let snapshot = map.metrics_snapshot();
//! assert_eq!((snapshot.get_hits, snapshot.get_misses), (1, 1));
//!
//! let exporter = PrometheusTextExporter::new("lru", Vec::new());
//! exporter.export(&snapshot);
//! let text = String::from_utf8(exporter.into_inner()).unwrap();
//! assert!(text.contains("lru_get_hits_total 1"));
//! ```

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
