//! Minimal metrics registry for the server.
//!
//! Counter vectors with dynamic labels backed by `DashMap`. Labels are
//! flattened into sorted key vectors to keep deterministic ordering.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for an exact label set (0 when never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();
        self.map
            .get(&key)
            .map(|c| c.value().load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        for r in self.map.iter() {
            let key = r.key();
            let val = r.value().load(Ordering::Relaxed);
            let label_str = key
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

#[derive(Default)]
pub struct ServerMetrics {
    /// Requests served, labeled by path.
    pub http_requests: CounterVec,
    /// Samples handed to a request, labeled by metric stream.
    pub samples_served: CounterVec,
}

impl ServerMetrics {
    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.http_requests.render("synthmon_http_requests_total", &mut out);
        self.samples_served.render("synthmon_samples_served_total", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_per_label() {
        let m = ServerMetrics::default();
        m.http_requests.inc(&[("path", "/memory-usage")]);
        m.http_requests.inc(&[("path", "/memory-usage")]);
        m.http_requests.inc(&[("path", "/swap-info")]);
        assert_eq!(m.http_requests.get(&[("path", "/memory-usage")]), 2);
        assert_eq!(m.http_requests.get(&[("path", "/swap-info")]), 1);
        assert_eq!(m.http_requests.get(&[("path", "/page-faults")]), 0);
    }

    #[test]
    fn render_is_prometheus_text() {
        let m = ServerMetrics::default();
        m.http_requests.inc(&[("path", "/healthz")]);
        let out = m.render();
        assert!(out.contains("# TYPE synthmon_http_requests_total counter"));
        assert!(out.contains("synthmon_http_requests_total{path=\"/healthz\"} 1"));
    }
}
