use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::metrics::snapshot::MapMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for map metrics snapshots.
///
/// Writes the text exposition format, so the output can be served from a
/// scrape endpoint or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", suffix, value);
    }

    fn write_gauge(&self, suffix: &str, value: usize) {
        self.write_metric("gauge", suffix, value as u64);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<MapMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &MapMetricsSnapshot) {
        self.write_counter("get_calls_total", snapshot.get_calls);
        self.write_counter("get_hits_total", snapshot.get_hits);
        self.write_counter("get_misses_total", snapshot.get_misses);
        self.write_counter("find_calls_total", snapshot.find_calls);
        self.write_counter("find_hits_total", snapshot.find_hits);
        self.write_counter("insert_calls_total", snapshot.insert_calls);
        self.write_counter("insert_updates_total", snapshot.insert_updates);
        self.write_counter("insert_new_total", snapshot.insert_new);
        self.write_counter("insert_rejected_total", snapshot.insert_rejected);
        self.write_counter("evict_calls_total", snapshot.evict_calls);
        self.write_counter("evicted_entries_total", snapshot.evicted_entries);
        self.write_counter("delete_calls_total", snapshot.delete_calls);
        self.write_counter("delete_found_total", snapshot.delete_found);
        self.write_counter("clear_calls_total", snapshot.clear_calls);
        self.write_counter("pop_oldest_calls_total", snapshot.pop_oldest_calls);
        self.write_counter("pop_oldest_found_total", snapshot.pop_oldest_found);
        self.write_counter("touch_calls_total", snapshot.touch_calls);
        self.write_counter("touch_found_total", snapshot.touch_found);
        self.write_gauge("map_len", snapshot.map_len);
        self.write_gauge("total_weight", snapshot.total_weight);
        self.write_gauge("capacity", snapshot.capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_prefixed_counters_and_gauges() {
        let exporter = PrometheusTextExporter::new("sessions", Vec::new());
        let snapshot = MapMetricsSnapshot {
            get_calls: 3,
            get_hits: 2,
            get_misses: 1,
            map_len: 7,
            capacity: 10,
            ..Default::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE sessions_get_hits_total counter\nsessions_get_hits_total 2\n"));
        assert!(text.contains("# TYPE sessions_map_len gauge\nsessions_map_len 7\n"));
        assert!(text.contains("sessions_capacity 10"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&MapMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.starts_with("# TYPE get_calls_total counter\nget_calls_total 0\n"));
    }
}
