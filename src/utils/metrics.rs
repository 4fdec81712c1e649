//! Bridge Metrics
//!
//! Counters for delivery outcomes and lifecycle activity, a handful of gauges,
//! and a small histogram used by trace replay to track pacing lag. Everything
//! is behind `parking_lot` locks so the collector can be shared across display
//! entries through an `Arc`.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Metrics collector shared by every display entry
#[derive(Debug)]
pub struct MetricsCollector {
    counters: RwLock<BTreeMap<String, u64>>,
    gauges: RwLock<BTreeMap<String, i64>>,
    histograms: RwLock<BTreeMap<String, Histogram>>,
    start_time: Instant,
}

impl MetricsCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self {
            counters: RwLock::new(BTreeMap::new()),
            gauges: RwLock::new(BTreeMap::new()),
            histograms: RwLock::new(BTreeMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Increment a counter
    pub fn increment_counter(&self, name: &str, value: u64) {
        let mut counters = self.counters.write();
        *counters.entry(name.to_string()).or_insert(0) += value;
    }

    /// Shorthand for `increment_counter(name, 1)`
    pub fn incr(&self, name: &str) {
        self.increment_counter(name, 1);
    }

    /// Add a signed delta to a gauge
    pub fn adjust_gauge(&self, name: &str, delta: i64) {
        let mut gauges = self.gauges.write();
        *gauges.entry(name.to_string()).or_insert(0) += delta;
    }

    /// Record a histogram observation
    pub fn record_histogram(&self, name: &str, value: f64) {
        self.histograms
            .write()
            .entry(name.to_string())
            .or_default()
            .record(value);
    }

    /// Counter value, zero if never touched
    pub fn counter(&self, name: &str) -> u64 {
        self.counters.read().get(name).copied().unwrap_or(0)
    }

    /// Gauge value, zero if never touched
    pub fn gauge(&self, name: &str) -> i64 {
        self.gauges.read().get(name).copied().unwrap_or(0)
    }

    /// Histogram statistics, if anything was recorded
    pub fn histogram(&self, name: &str) -> Option<HistogramStats> {
        self.histograms.read().get(name).map(Histogram::stats)
    }

    /// Point-in-time copy of everything
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            uptime: self.start_time.elapsed(),
            counters: self.counters.read().clone(),
            gauges: self.gauges.read().clone(),
            histograms: self
                .histograms
                .read()
                .iter()
                .map(|(k, v)| (k.clone(), v.stats()))
                .collect(),
        }
    }

    /// Reset all metrics
    pub fn reset(&self) {
        self.counters.write().clear();
        self.gauges.write().clear();
        self.histograms.write().clear();
    }

    /// Export the snapshot as pretty JSON
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Running min/max/sum over recorded values
#[derive(Debug, Default)]
struct Histogram {
    count: u64,
    min: f64,
    max: f64,
    sum: f64,
}

impl Histogram {
    fn record(&mut self, value: f64) {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
        self.sum += value;
    }

    fn stats(&self) -> HistogramStats {
        HistogramStats {
            count: self.count,
            min: self.min,
            max: self.max,
            mean: if self.count == 0 {
                0.0
            } else {
                self.sum / self.count as f64
            },
        }
    }
}

/// Histogram statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HistogramStats {
    /// Number of observations
    pub count: u64,
    /// Smallest observation
    pub min: f64,
    /// Largest observation
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
}

/// Point-in-time snapshot of all collected metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Time since the collector was created
    pub uptime: Duration,
    /// Counter values
    pub counters: BTreeMap<String, u64>,
    /// Gauge values
    pub gauges: BTreeMap<String, i64>,
    /// Histogram statistics
    pub histograms: BTreeMap<String, HistogramStats>,
}

pub mod metric_names {
    //! Metric names used across the crate.

    /// Device events handed to the input backend
    pub const INPUT_FORWARDED: &str = "input.forwarded";
    /// Events dropped for a missing surface, inactive device or retired display
    pub const INPUT_DROPPED: &str = "input.dropped";
    /// Touch actions with no device-level meaning
    pub const INPUT_FILTERED: &str = "input.filtered";
    /// Keys and buttons with no device mapping
    pub const INPUT_UNMAPPED: &str = "input.unmapped";
    /// Sequencing violations (logged, processing continued)
    pub const CONTRACT_VIOLATIONS: &str = "contract.violations";
    /// Surface lifecycle state changes
    pub const SURFACE_TRANSITIONS: &str = "surface.transitions";
    /// Input device starts and reconfigures
    pub const DEVICE_STARTS: &str = "device.starts";
    /// Input device stops
    pub const DEVICE_STOPS: &str = "device.stops";
    /// Input devices currently running
    pub const DEVICES_ACTIVE: &str = "devices.active";
    /// How late each replayed step fired (milliseconds)
    pub const REPLAY_LAG_MS: &str = "replay.lag_ms";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter() {
        let metrics = MetricsCollector::new();

        metrics.incr(metric_names::INPUT_FORWARDED);
        assert_eq!(metrics.counter(metric_names::INPUT_FORWARDED), 1);

        metrics.increment_counter(metric_names::INPUT_FORWARDED, 5);
        assert_eq!(metrics.counter(metric_names::INPUT_FORWARDED), 6);
        assert_eq!(metrics.counter(metric_names::INPUT_DROPPED), 0);
    }

    #[test]
    fn test_gauge_adjust() {
        let metrics = MetricsCollector::new();

        metrics.adjust_gauge(metric_names::DEVICES_ACTIVE, 1);
        metrics.adjust_gauge(metric_names::DEVICES_ACTIVE, 1);
        metrics.adjust_gauge(metric_names::DEVICES_ACTIVE, -1);
        assert_eq!(metrics.gauge(metric_names::DEVICES_ACTIVE), 1);
    }

    #[test]
    fn test_histogram() {
        let metrics = MetricsCollector::new();
        assert!(metrics.histogram(metric_names::REPLAY_LAG_MS).is_none());

        for v in [2.0, 4.0, 6.0] {
            metrics.record_histogram(metric_names::REPLAY_LAG_MS, v);
        }

        let stats = metrics.histogram(metric_names::REPLAY_LAG_MS).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 6.0);
        assert_eq!(stats.mean, 4.0);
    }

    #[test]
    fn test_snapshot_and_reset() {
        let metrics = MetricsCollector::new();
        metrics.incr(metric_names::DEVICE_STARTS);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.counters.get(metric_names::DEVICE_STARTS), Some(&1));
        assert!(metrics.export_json().unwrap().contains("device.starts"));

        metrics.reset();
        assert_eq!(metrics.counter(metric_names::DEVICE_STARTS), 0);
    }
}
