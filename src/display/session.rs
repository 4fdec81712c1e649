//! Input Device Session
//!
//! Owns the active flag and coordinate space of one display's virtual input
//! device and is the single gate through which encoded events reach the input
//! backend. While the device is stopped every event for the display is
//! dropped.
//!
//! The session trusts its caller's sequencing. `reconfigure` on a running
//! device is logged as a contract violation and carried out anyway.

use crate::backend::InputBackend;
use crate::error::{report, BridgeError};
use crate::input::event::DeviceEvent;
use crate::types::{DeviceSize, DisplayId};
use crate::utils::metrics::{metric_names, MetricsCollector};
use std::sync::Arc;
use tracing::debug;

/// Outcome of offering one encoded event to the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Handed to the input backend
    Forwarded,
    /// Not delivered; the reason is attached
    Dropped(BridgeError),
    /// Host action with no device-level meaning
    Filtered,
}

impl Delivery {
    /// Whether the event reached the backend
    pub fn is_forwarded(&self) -> bool {
        matches!(self, Delivery::Forwarded)
    }

    /// Drop reason, if dropped
    pub fn dropped_reason(&self) -> Option<&BridgeError> {
        match self {
            Delivery::Dropped(err) => Some(err),
            _ => None,
        }
    }
}

/// Virtual input device state for one display
pub struct InputDeviceSession {
    display: DisplayId,
    active: bool,
    size: Option<DeviceSize>,
    backend: Arc<dyn InputBackend>,
    metrics: Arc<MetricsCollector>,
}

impl InputDeviceSession {
    /// Create a stopped session
    pub fn new(
        display: DisplayId,
        backend: Arc<dyn InputBackend>,
        metrics: Arc<MetricsCollector>,
    ) -> Self {
        Self {
            display,
            active: false,
            size: None,
            backend,
            metrics,
        }
    }

    /// Start the device
    ///
    /// No-op if already active. Returns whether a start was issued.
    pub fn start(&mut self, size: DeviceSize) -> bool {
        if self.active {
            debug!(
                "Input device for display {} already active, start ignored",
                self.display
            );
            return false;
        }

        self.backend.start_device(self.display, size);
        self.mark_started(size);
        debug!("Input device for display {} started at {}", self.display, size);
        true
    }

    /// Stop the device
    ///
    /// No-op if not active. Returns whether a stop was issued.
    pub fn stop(&mut self) -> bool {
        if !self.active {
            return false;
        }

        self.backend.stop_device(self.display);
        self.active = false;
        self.metrics.incr(metric_names::DEVICE_STOPS);
        self.metrics.adjust_gauge(metric_names::DEVICES_ACTIVE, -1);
        debug!("Input device for display {} stopped", self.display);
        true
    }

    /// Bring the device back with a new coordinate space
    ///
    /// Expects a stopped device. A running device is reported as
    /// [`BridgeError::ReconfigureWhileActive`] and reconfigured regardless.
    pub fn reconfigure(&mut self, size: DeviceSize) -> Option<BridgeError> {
        let violation = if self.active {
            let err = BridgeError::ReconfigureWhileActive(self.display);
            report(&err);
            self.metrics.incr(metric_names::CONTRACT_VIOLATIONS);
            // Balance the gauge: mark_started adds one back
            self.metrics.adjust_gauge(metric_names::DEVICES_ACTIVE, -1);
            Some(err)
        } else {
            None
        };

        self.backend.reconfigure_device(self.display, size);
        self.mark_started(size);
        debug!(
            "Input device for display {} reconfigured to {}",
            self.display, size
        );
        violation
    }

    fn mark_started(&mut self, size: DeviceSize) {
        self.active = true;
        self.size = Some(size);
        self.metrics.incr(metric_names::DEVICE_STARTS);
        self.metrics.adjust_gauge(metric_names::DEVICES_ACTIVE, 1);
    }

    /// Offer an encoded event to the device
    pub fn deliver(&self, event: DeviceEvent) -> Delivery {
        if !self.active {
            return Delivery::Dropped(BridgeError::DeviceInactive(self.display));
        }

        self.backend.send_event(event);
        Delivery::Forwarded
    }

    /// Whether the device is running
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current coordinate space
    ///
    /// Kept after a stop so the last known geometry stays observable.
    pub fn size(&self) -> Option<DeviceSize> {
        self.size
    }

    /// Whether the device has ever been brought up
    pub fn has_started(&self) -> bool {
        self.size.is_some()
    }

    /// Display this session belongs to
    pub fn display(&self) -> DisplayId {
        self.display
    }
}

impl std::fmt::Debug for InputDeviceSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputDeviceSession")
            .field("display", &self.display)
            .field("active", &self.active)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
