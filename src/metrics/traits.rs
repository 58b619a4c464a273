//! # Metrics Traits
//!
//! Recording, snapshotting and export are kept apart so the map only ever
//! bumps counters, and consumers decide what to do with them.
//!
//! ```text
//!   ┌──────────────────────────────┐   ┌──────────────────────────────┐
//!   │ CoreMetricsRecorder (&mut)   │   │ MetricsReadRecorder (&self)  │
//!   │ get/set/evict/delete/clear   │   │ find                         │
//!   └──────────────┬───────────────┘   └──────────────┬───────────────┘
//!                  └───────────────┬──────────────────┘
//!                                  ▼
//!                            MapMetrics
//!                                  │ snapshot(len, weight, capacity)
//!                                  ▼
//!   ┌──────────────────────────────┐   ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │   │ MetricsExporter<S>           │
//!   │ (tests, benches)             │   │ (Prometheus text)            │
//!   └──────────────────────────────┘   └──────────────────────────────┘
//! ```

/// Counters bumped by mutating map operations.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_insert_rejected(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_delete_call(&mut self);
    fn record_delete_found(&mut self);
    fn record_clear(&mut self);
    fn record_pop_oldest_call(&mut self);
    fn record_pop_oldest_found(&mut self);
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
}

/// Counters for `&self` lookups (uses interior mutability).
pub trait MetricsReadRecorder {
    fn record_find_call(&self);
    fn record_find_hit(&self);
}

/// Point-in-time copy of the counters, for tests and benches.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Publish a snapshot to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
