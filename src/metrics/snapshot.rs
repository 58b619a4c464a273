#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MapMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub find_calls: u64,
    pub find_hits: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub insert_rejected: u64, // heavier than the whole map

    pub evict_calls: u64,
    pub evicted_entries: u64,

    pub delete_calls: u64,
    pub delete_found: u64,
    pub clear_calls: u64,

    pub pop_oldest_calls: u64,
    pub pop_oldest_found: u64,
    pub touch_calls: u64,
    pub touch_found: u64,

    // gauges captured at snapshot time
    pub map_len: usize,
    pub total_weight: usize,
    pub capacity: usize,
}

impl MapMetricsSnapshot {
    /// Fraction of `get` calls that found their key, `0.0` before any call.
    pub fn hit_ratio(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_ratio_handles_zero_calls() {
        let snapshot = MapMetricsSnapshot::default();
        assert_eq!(snapshot.hit_ratio(), 0.0);

        let snapshot = MapMetricsSnapshot {
            get_calls: 4,
            get_hits: 3,
            get_misses: 1,
            ..Default::default()
        };
        assert!((snapshot.hit_ratio() - 0.75).abs() < f64::EPSILON);
    }
}
