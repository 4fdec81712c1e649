//! Host Event Traces
//!
//! A trace is a recorded sequence of host callbacks with millisecond offsets:
//!
//! ```json
//! { "steps": [
//!     { "at_ms": 0,  "event": { "type": "surface_created", "display": 0, "surface": 1 } },
//!     { "at_ms": 5,  "event": { "type": "surface_changed", "display": 0, "surface": 1,
//!                               "width": 1080, "height": 1920 } },
//!     { "at_ms": 40, "event": { "type": "input", "display": 0,
//!                               "event": { "kind": "key", "host_code": 29, "pressed": true } } }
//! ] }
//! ```
//!
//! Replay drives a [`DisplayBridge`] from a single task, the same way the host
//! delivers callbacks from a single dispatch thread.

use crate::bridge::DisplayBridge;
use crate::config::ReplayConfig;
use crate::display::Delivery;
use crate::input::host::HostEvent;
use crate::types::{DisplayId, SurfaceHandle};
use crate::utils::metrics::metric_names;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Recorded host callback sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Steps in delivery order
    pub steps: Vec<TraceStep>,
}

/// One recorded callback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Offset from the start of the trace
    pub at_ms: u64,
    /// Callback
    pub event: TraceEvent,
}

/// Host callback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Surface became available
    SurfaceCreated {
        /// Display
        display: DisplayId,
        /// Surface, absent when the host had no drawable
        #[serde(default)]
        surface: Option<SurfaceHandle>,
    },
    /// Surface resized or replaced
    SurfaceChanged {
        /// Display
        display: DisplayId,
        /// Surface, absent when the host had no drawable
        #[serde(default)]
        surface: Option<SurfaceHandle>,
        /// New width
        width: u32,
        /// New height
        height: u32,
    },
    /// Surface torn down
    SurfaceDestroyed {
        /// Display
        display: DisplayId,
        /// Surface, absent when the host had no drawable
        #[serde(default)]
        surface: Option<SurfaceHandle>,
    },
    /// Display torn down
    DisplayDestroyed {
        /// Display
        display: DisplayId,
    },
    /// Input listener callback
    Input {
        /// Display the listener is attached to
        display: DisplayId,
        /// Raw host event
        event: HostEvent,
    },
}

impl TraceEvent {
    /// Deliver the callback to the bridge
    ///
    /// Surface callbacks produce no outcomes.
    pub fn apply(&self, bridge: &DisplayBridge) -> Vec<Delivery> {
        match self {
            TraceEvent::SurfaceCreated { display, surface } => {
                bridge.on_surface_created(*display, *surface);
                Vec::new()
            }
            TraceEvent::SurfaceChanged {
                display,
                surface,
                width,
                height,
            } => {
                bridge.on_surface_changed(*display, *surface, *width, *height);
                Vec::new()
            }
            TraceEvent::SurfaceDestroyed { display, surface } => {
                bridge.on_surface_destroyed(*display, *surface);
                Vec::new()
            }
            TraceEvent::DisplayDestroyed { display } => {
                bridge.on_display_destroyed(*display);
                Vec::new()
            }
            TraceEvent::Input { display, event } => bridge.handle_host_event(*display, event),
        }
    }
}

impl Trace {
    /// Load a trace from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read trace file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid trace file: {}", path.display()))
    }

    /// Parse and validate a trace
    pub fn from_json(json: &str) -> Result<Self> {
        let trace: Trace = serde_json::from_str(json).context("Failed to parse trace")?;
        trace.validate()?;
        Ok(trace)
    }

    /// Check that step offsets never go backwards
    pub fn validate(&self) -> Result<()> {
        for (index, pair) in self.steps.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                anyhow::bail!(
                    "Step {} at {}ms precedes step {} at {}ms",
                    index + 1,
                    pair[1].at_ms,
                    index,
                    pair[0].at_ms
                );
            }
        }
        Ok(())
    }

    /// Offset of the last step
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.steps.last().map_or(0, |s| s.at_ms))
    }

    /// Wall-clock length of a paced replay at `speed`
    ///
    /// `None` when the last offset divided by `speed` does not fit a
    /// [`Duration`].
    pub fn scaled_duration(&self, speed: f64) -> Option<Duration> {
        scaled_offset(self.steps.last().map_or(0, |s| s.at_ms), speed)
    }
}

fn scaled_offset(at_ms: u64, speed: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(at_ms as f64 / 1000.0 / speed).ok()
}

/// Totals from one replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Steps applied
    pub steps: usize,
    /// Device events forwarded
    pub forwarded: usize,
    /// Events dropped (any reason)
    pub dropped: usize,
    /// Touch actions filtered
    pub filtered: usize,
}

impl ReplaySummary {
    fn tally(&mut self, outcomes: &[Delivery]) {
        for outcome in outcomes {
            match outcome {
                Delivery::Forwarded => self.forwarded += 1,
                Delivery::Dropped(_) => self.dropped += 1,
                Delivery::Filtered => self.filtered += 1,
            }
        }
    }
}

/// Replay a trace against a bridge
///
/// With `honor_timestamps` each step waits until its offset (divided by
/// `speed`) has elapsed since the replay began.
pub async fn replay(trace: &Trace, bridge: &DisplayBridge, config: &ReplayConfig) -> ReplaySummary {
    info!(
        "Replaying {} steps over {:?} (timing: {}, speed: {}x)",
        trace.steps.len(),
        trace.duration(),
        config.honor_timestamps,
        config.speed
    );

    let start = Instant::now();
    let mut summary = ReplaySummary::default();

    for step in &trace.steps {
        if config.honor_timestamps {
            let due = scaled_offset(step.at_ms, config.speed)
                .and_then(|offset| start.checked_add(offset));
            match due {
                Some(due) => {
                    tokio::time::sleep_until(due).await;

                    let lag = Instant::now().saturating_duration_since(due);
                    bridge
                        .metrics()
                        .record_histogram(metric_names::REPLAY_LAG_MS, lag.as_secs_f64() * 1000.0);
                }
                None => warn!(
                    "Step at {}ms is out of range at {}x, applying without delay",
                    step.at_ms, config.speed
                ),
            }
        }

        debug!("Step at {}ms: {:?}", step.at_ms, step.event);
        let outcomes = step.event.apply(bridge);
        summary.steps += 1;
        summary.tally(&outcomes);
    }

    info!(
        "Replay finished: {} forwarded, {} dropped, {} filtered",
        summary.forwarded, summary.dropped, summary.filtered
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::config::InputConfig;
    use std::sync::Arc;

    const SAMPLE: &str = r#"{
        "steps": [
            { "at_ms": 0, "event": { "type": "surface_created", "display": 0, "surface": 1 } },
            { "at_ms": 5, "event": { "type": "surface_changed", "display": 0, "surface": 1,
                                     "width": 1080, "height": 1920 } },
            { "at_ms": 10, "event": { "type": "input", "display": 0,
                                      "event": { "kind": "key", "host_code": 29, "pressed": true } } },
            { "at_ms": 10, "event": { "type": "input", "display": 0,
                                      "event": { "kind": "touch", "source": "touchscreen",
                                                 "action": "cancel",
                                                 "pointers": [ { "id": 0, "x": 1.0, "y": 1.0 } ] } } },
            { "at_ms": 20, "event": { "type": "input", "display": 5,
                                      "event": { "kind": "key", "host_code": 29, "pressed": false } } }
        ]
    }"#;

    #[test]
    fn test_parse_trace() {
        let trace = Trace::from_json(SAMPLE).unwrap();
        assert_eq!(trace.steps.len(), 5);
        assert_eq!(trace.duration(), Duration::from_millis(20));
        assert_eq!(
            trace.steps[0].event,
            TraceEvent::SurfaceCreated {
                display: 0,
                surface: Some(SurfaceHandle(1))
            }
        );
    }

    #[test]
    fn test_surface_is_optional() {
        let json = r#"{ "steps": [ { "at_ms": 0,
            "event": { "type": "surface_destroyed", "display": 2 } } ] }"#;
        let trace = Trace::from_json(json).unwrap();
        assert_eq!(
            trace.steps[0].event,
            TraceEvent::SurfaceDestroyed {
                display: 2,
                surface: None
            }
        );
    }

    #[test]
    fn test_rejects_decreasing_offsets() {
        let json = r#"{ "steps": [
            { "at_ms": 10, "event": { "type": "display_destroyed", "display": 1 } },
            { "at_ms": 5, "event": { "type": "display_destroyed", "display": 2 } }
        ] }"#;
        let err = Trace::from_json(json).unwrap_err();
        assert!(err.to_string().contains("precedes"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Trace::load(dir.path().join("trace.json")).is_err());
    }

    #[tokio::test]
    async fn test_replay_without_timing() {
        let trace = Trace::from_json(SAMPLE).unwrap();
        let backend = Arc::new(RecordingBackend::new());
        let bridge = DisplayBridge::new(InputConfig::default(), backend.clone(), backend.clone());
        let config = ReplayConfig {
            honor_timestamps: false,
            speed: 1.0,
        };

        let summary = replay(&trace, &bridge, &config).await;

        assert_eq!(
            summary,
            ReplaySummary {
                steps: 5,
                forwarded: 1,
                dropped: 1,
                filtered: 1,
            }
        );
        assert_eq!(backend.device_events().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_honors_offsets() {
        let trace = Trace::from_json(SAMPLE).unwrap();
        let backend = Arc::new(RecordingBackend::new());
        let bridge = DisplayBridge::new(InputConfig::default(), backend.clone(), backend);
        let config = ReplayConfig {
            honor_timestamps: true,
            speed: 2.0,
        };

        let started = Instant::now();
        replay(&trace, &bridge, &config).await;

        // 20ms of trace at 2x
        assert!(started.elapsed() >= Duration::from_millis(10));
        let lag = bridge.metrics().histogram(metric_names::REPLAY_LAG_MS).unwrap();
        assert_eq!(lag.count, 5);
    }

    #[test]
    fn test_summary_json() {
        let summary = ReplaySummary {
            steps: 5,
            forwarded: 1,
            dropped: 1,
            filtered: 1,
        };
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"steps":5,"forwarded":1,"dropped":1,"filtered":1}"#
        );
    }

    #[test]
    fn test_scaled_duration_overflow() {
        let json = format!(
            r#"{{ "steps": [ {{ "at_ms": {}, "event": {{ "type": "display_destroyed", "display": 1 }} }} ] }}"#,
            u64::MAX
        );
        let trace = Trace::from_json(&json).unwrap();

        assert_eq!(trace.scaled_duration(0.0001), None);
        assert!(trace.scaled_duration(1.0).is_some());

        let short = Trace::from_json(SAMPLE).unwrap();
        assert_eq!(short.scaled_duration(2.0), Some(Duration::from_millis(10)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_replay_out_of_range_offset_applies_step() {
        let json = format!(
            r#"{{ "steps": [
                {{ "at_ms": 0, "event": {{ "type": "display_destroyed", "display": 1 }} }},
                {{ "at_ms": {}, "event": {{ "type": "display_destroyed", "display": 2 }} }}
            ] }}"#,
            u64::MAX
        );
        let trace = Trace::from_json(&json).unwrap();
        let backend = Arc::new(RecordingBackend::new());
        let bridge = DisplayBridge::new(InputConfig::default(), backend.clone(), backend.clone());
        let config = ReplayConfig {
            honor_timestamps: true,
            speed: 0.0001,
        };

        let summary = replay(&trace, &bridge, &config).await;

        assert_eq!(summary.steps, 2);
        assert!(bridge.is_retired(2));
        let lag = bridge.metrics().histogram(metric_names::REPLAY_LAG_MS).unwrap();
        assert_eq!(lag.count, 1);
    }
}
