//! Utility Functions
//!
//! Metrics collection and user-friendly error formatting.
//!
//! ## Metrics
//!
//! ```rust
//! use vdisplay_bridge::utils::{metric_names, MetricsCollector};
//!
//! let metrics = MetricsCollector::new();
//! metrics.incr(metric_names::INPUT_FORWARDED);
//! assert_eq!(metrics.counter(metric_names::INPUT_FORWARDED), 1);
//! ```
//!
//! ## Error Formatting
//!
//! [`format_user_error`] renders the binary's startup failures (config,
//! trace, log file) with a short list of things to check.

pub mod errors;
pub mod metrics;

pub use errors::{classify_error, format_user_error, ErrorKind};
pub use metrics::{metric_names, HistogramStats, MetricsCollector, MetricsSnapshot};
