use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::MapMetricsSnapshot;
use crate::metrics::traits::{CoreMetricsRecorder, MetricsReadRecorder};

#[derive(Debug, Default, Clone)]
pub struct MapMetrics {
    pub get_hits: u64,
    pub get_misses: u64,
    pub find_calls: MetricsCell,
    pub find_hits: MetricsCell,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub insert_rejected: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub delete_calls: u64,
    pub delete_found: u64,
    pub clear_calls: u64,
    pub pop_oldest_calls: u64,
    pub pop_oldest_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
}

impl MapMetrics {
    pub fn snapshot(&self, map_len: usize, total_weight: usize, capacity: usize) -> MapMetricsSnapshot {
        MapMetricsSnapshot {
            get_calls: self.get_hits + self.get_misses,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            find_calls: self.find_calls.get(),
            find_hits: self.find_hits.get(),
            insert_calls: self.insert_calls,
            insert_updates: self.insert_updates,
            insert_new: self.insert_new,
            insert_rejected: self.insert_rejected,
            evict_calls: self.evict_calls,
            evicted_entries: self.evicted_entries,
            delete_calls: self.delete_calls,
            delete_found: self.delete_found,
            clear_calls: self.clear_calls,
            pop_oldest_calls: self.pop_oldest_calls,
            pop_oldest_found: self.pop_oldest_found,
            touch_calls: self.touch_calls,
            touch_found: self.touch_found,
            map_len,
            total_weight,
            capacity,
        }
    }
}

impl CoreMetricsRecorder for MapMetrics {
    fn record_get_hit(&mut self) {
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_misses += 1;
    }

    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_insert_rejected(&mut self) {
        self.insert_rejected += 1;
    }

    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_delete_call(&mut self) {
        self.delete_calls += 1;
    }

    fn record_delete_found(&mut self) {
        self.delete_found += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }

    fn record_pop_oldest_call(&mut self) {
        self.pop_oldest_calls += 1;
    }

    fn record_pop_oldest_found(&mut self) {
        self.pop_oldest_found += 1;
    }

    fn record_touch_call(&mut self) {
        self.touch_calls += 1;
    }

    fn record_touch_found(&mut self) {
        self.touch_found += 1;
    }
}

impl MetricsReadRecorder for &MapMetrics {
    fn record_find_call(&self) {
        self.find_calls.incr();
    }

    fn record_find_hit(&self) {
        self.find_hits.incr();
    }
}
