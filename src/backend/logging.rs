//! Logging backend
//!
//! Stands in for a real renderer and input driver when replaying traces.

use crate::backend::{InputBackend, RenderBackend};
use crate::input::event::DeviceEvent;
use crate::types::{DeviceSize, DisplayId, SurfaceHandle};
use tracing::{debug, info};

/// Backend that logs every call through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingBackend;

impl TracingBackend {
    /// Create a new logging backend
    pub fn new() -> Self {
        Self
    }
}

impl RenderBackend for TracingBackend {
    fn surface_created(&self, id: DisplayId, surface: SurfaceHandle) {
        info!(display = id, %surface, "render: surface created");
    }

    fn surface_changed(&self, id: DisplayId, surface: SurfaceHandle) {
        info!(display = id, %surface, "render: surface changed");
    }

    fn surface_destroyed(&self, id: DisplayId, surface: SurfaceHandle) {
        info!(display = id, %surface, "render: surface destroyed");
    }

    fn display_destroyed(&self, id: DisplayId) {
        info!(display = id, "render: display destroyed");
    }
}

impl InputBackend for TracingBackend {
    fn start_device(&self, id: DisplayId, size: DeviceSize) {
        info!(display = id, %size, "input: device started");
    }

    fn stop_device(&self, id: DisplayId) {
        info!(display = id, "input: device stopped");
    }

    fn reconfigure_device(&self, id: DisplayId, size: DeviceSize) {
        info!(display = id, %size, "input: device reconfigured");
    }

    fn send_event(&self, event: DeviceEvent) {
        debug!(display = event.display(), ?event, "input: event");
    }
}
