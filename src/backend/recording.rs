//! Recording backend
//!
//! Captures every backend call in order. Used by the CLI's JSON output and by
//! the integration tests to assert exact call sequences.

use crate::backend::{InputBackend, RenderBackend};
use crate::input::event::DeviceEvent;
use crate::types::{DeviceSize, DisplayId, SurfaceHandle};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// One recorded backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum BackendCall {
    /// `RenderBackend::surface_created`
    SurfaceCreated {
        /// Display
        display: DisplayId,
        /// Surface
        surface: SurfaceHandle,
    },
    /// `RenderBackend::surface_changed`
    SurfaceChanged {
        /// Display
        display: DisplayId,
        /// Surface
        surface: SurfaceHandle,
    },
    /// `RenderBackend::surface_destroyed`
    SurfaceDestroyed {
        /// Display
        display: DisplayId,
        /// Surface
        surface: SurfaceHandle,
    },
    /// `RenderBackend::display_destroyed`
    DisplayDestroyed {
        /// Display
        display: DisplayId,
    },
    /// `InputBackend::start_device`
    StartDevice {
        /// Display
        display: DisplayId,
        /// Device coordinate space
        size: DeviceSize,
    },
    /// `InputBackend::stop_device`
    StopDevice {
        /// Display
        display: DisplayId,
    },
    /// `InputBackend::reconfigure_device`
    ReconfigureDevice {
        /// Display
        display: DisplayId,
        /// Device coordinate space
        size: DeviceSize,
    },
    /// `InputBackend::send_event`
    Event {
        /// Injected event
        event: DeviceEvent,
    },
}

impl BackendCall {
    /// Display the call targeted
    pub fn display(&self) -> DisplayId {
        match self {
            BackendCall::SurfaceCreated { display, .. }
            | BackendCall::SurfaceChanged { display, .. }
            | BackendCall::SurfaceDestroyed { display, .. }
            | BackendCall::DisplayDestroyed { display }
            | BackendCall::StartDevice { display, .. }
            | BackendCall::StopDevice { display }
            | BackendCall::ReconfigureDevice { display, .. } => *display,
            BackendCall::Event { event } => event.display(),
        }
    }
}

/// Backend that records calls in arrival order
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<BackendCall>>,
}

impl RecordingBackend {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: BackendCall) {
        self.calls.lock().push(call);
    }

    /// Copy of every call so far
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().clone()
    }

    /// Calls targeting one display
    pub fn calls_for(&self, display: DisplayId) -> Vec<BackendCall> {
        self.calls
            .lock()
            .iter()
            .filter(|c| c.display() == display)
            .copied()
            .collect()
    }

    /// Injected device events only
    pub fn device_events(&self) -> Vec<DeviceEvent> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                BackendCall::Event { event } => Some(*event),
                _ => None,
            })
            .collect()
    }

    /// Drain every call recorded so far
    pub fn take(&self) -> Vec<BackendCall> {
        std::mem::take(&mut *self.calls.lock())
    }

    /// Number of calls recorded
    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }
}

impl RenderBackend for RecordingBackend {
    fn surface_created(&self, display: DisplayId, surface: SurfaceHandle) {
        self.record(BackendCall::SurfaceCreated { display, surface });
    }

    fn surface_changed(&self, display: DisplayId, surface: SurfaceHandle) {
        self.record(BackendCall::SurfaceChanged { display, surface });
    }

    fn surface_destroyed(&self, display: DisplayId, surface: SurfaceHandle) {
        self.record(BackendCall::SurfaceDestroyed { display, surface });
    }

    fn display_destroyed(&self, display: DisplayId) {
        self.record(BackendCall::DisplayDestroyed { display });
    }
}

impl InputBackend for RecordingBackend {
    fn start_device(&self, display: DisplayId, size: DeviceSize) {
        self.record(BackendCall::StartDevice { display, size });
    }

    fn stop_device(&self, display: DisplayId) {
        self.record(BackendCall::StopDevice { display });
    }

    fn reconfigure_device(&self, display: DisplayId, size: DeviceSize) {
        self.record(BackendCall::ReconfigureDevice { display, size });
    }

    fn send_event(&self, event: DeviceEvent) {
        self.record(BackendCall::Event { event });
    }
}
