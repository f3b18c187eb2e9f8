//! In-process metrics registry with Prometheus text exposition.
//!
//! Counters are keyed by their label values and kept behind a
//! `parking_lot::RwLock`; the registry is shared through an `Arc` in the
//! HTTP state and rendered on demand by the `/metrics` endpoint.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Content type of the text exposition format.
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Upper bounds (seconds) of the request duration histogram.
pub const DURATION_BUCKETS: [f64; 8] = [0.01, 0.05, 0.1, 0.3, 0.5, 1.0, 3.0, 5.0];

/// Labels identifying one HTTP request series.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestLabels {
    pub method: String,
    pub route: String,
    pub status: u16,
}

#[derive(Debug, Clone, Default)]
struct Histogram {
    buckets: [u64; DURATION_BUCKETS.len()],
    sum: f64,
    count: u64,
}

impl Histogram {
    fn observe(&mut self, seconds: f64) {
        for (bucket, bound) in self.buckets.iter_mut().zip(DURATION_BUCKETS) {
            if seconds <= bound {
                *bucket += 1;
            }
        }
        self.sum += seconds;
        self.count += 1;
    }
}

/// Shared metrics for the conversion service.
#[derive(Debug)]
pub struct Metrics {
    conversions: RwLock<BTreeMap<u16, u64>>,
    failures: AtomicU64,
    requests: RwLock<BTreeMap<RequestLabels, u64>>,
    durations: RwLock<BTreeMap<RequestLabels, Histogram>>,
    start_time: chrono::DateTime<chrono::Utc>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            conversions: RwLock::new(BTreeMap::new()),
            failures: AtomicU64::new(0),
            requests: RwLock::new(BTreeMap::new()),
            durations: RwLock::new(BTreeMap::new()),
            start_time: chrono::Utc::now(),
        }
    }

    /// Count a successful conversion, keyed by the validated value.
    pub fn record_conversion(&self, value: u16) {
        *self.conversions.write().entry(value).or_insert(0) += 1;
    }

    /// Count a rejected conversion.
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a finished HTTP request and observe its latency.
    pub fn record_request(&self, labels: RequestLabels, elapsed: Duration) {
        *self.requests.write().entry(labels.clone()).or_insert(0) += 1;
        self.durations
            .write()
            .entry(labels)
            .or_default()
            .observe(elapsed.as_secs_f64());
    }

    pub fn conversion_count(&self) -> u64 {
        self.conversions.read().values().sum()
    }

    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn request_count(&self, labels: &RequestLabels) -> u64 {
        self.requests.read().get(labels).copied().unwrap_or(0)
    }

    /// Number of distinct `roman_conversion_total` series.
    pub fn conversion_series(&self) -> usize {
        self.conversions.read().len()
    }

    /// Number of distinct `http_requests_total` series.
    pub fn request_series(&self) -> usize {
        self.requests.read().len()
    }

    pub fn start_time(&self) -> chrono::DateTime<chrono::Utc> {
        self.start_time
    }

    /// Render every series in the Prometheus text format.
    pub fn render(&self) -> String {
        let mut out = String::new();

        write_header(
            &mut out,
            "roman_conversion_total",
            "Total number of successful Roman numeral conversions",
            "counter",
        );
        for (value, count) in self.conversions.read().iter() {
            let _ = writeln!(out, "roman_conversion_total{{input=\"{value}\"}} {count}");
        }

        write_header(
            &mut out,
            "roman_conversion_failures_total",
            "Number of failed Roman numeral conversions",
            "counter",
        );
        let _ = writeln!(out, "roman_conversion_failures_total {}", self.failure_count());

        write_header(
            &mut out,
            "http_requests_total",
            "Total number of HTTP requests",
            "counter",
        );
        for (labels, count) in self.requests.read().iter() {
            let _ = writeln!(out, "http_requests_total{{{}}} {}", format_labels(labels), count);
        }

        write_header(
            &mut out,
            "http_request_duration_seconds",
            "Duration of HTTP requests in seconds",
            "histogram",
        );
        for (labels, histogram) in self.durations.read().iter() {
            let base = format_labels(labels);
            for (bound, count) in DURATION_BUCKETS.iter().zip(histogram.buckets) {
                let _ = writeln!(
                    out,
                    "http_request_duration_seconds_bucket{{{base},le=\"{bound}\"}} {count}"
                );
            }
            let _ = writeln!(
                out,
                "http_request_duration_seconds_bucket{{{base},le=\"+Inf\"}} {}",
                histogram.count
            );
            let _ = writeln!(out, "http_request_duration_seconds_sum{{{base}}} {}", histogram.sum);
            let _ = writeln!(
                out,
                "http_request_duration_seconds_count{{{base}}} {}",
                histogram.count
            );
        }

        write_header(
            &mut out,
            "process_start_time_seconds",
            "Start time of the process since unix epoch in seconds",
            "gauge",
        );
        let _ = writeln!(out, "process_start_time_seconds {}", self.start_time.timestamp());

        out
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

fn write_header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {name} {help}");
    let _ = writeln!(out, "# TYPE {name} {kind}");
}

fn format_labels(labels: &RequestLabels) -> String {
    format!(
        "method=\"{}\",route=\"{}\",status=\"{}\"",
        escape_label(&labels.method),
        escape_label(&labels.route),
        labels.status
    )
}

fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
