//! Display Surface Lifecycle
//!
//! Per-display state machine over host surface callbacks:
//!
//! ```text
//! Unbound ──created──> Created ──changed──> Reconfiguring ──> Active
//!                                              ^                 │
//!                                              └────changed──────┘
//! Created | Active ──destroyed──> Destroyed
//! ```
//!
//! `surface_changed` is strictly ordered: stop the input device, hand the new
//! surface to the renderer, then bring the device back with the new size. The
//! caller holds the display's lock across the whole call, so no encoded event
//! for this display can slip between the stop and the restart.
//!
//! A missing surface handle is a normal transient host state and makes every
//! handler a no-op.

use crate::backend::RenderBackend;
use crate::display::session::InputDeviceSession;
use crate::error::{report, BridgeError};
use crate::types::{DeviceSize, DisplayId, SurfaceHandle, PRIMARY_DISPLAY_ID};
use crate::utils::metrics::{metric_names, MetricsCollector};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Surface binding state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SurfaceState {
    /// No surface has been bound
    Unbound,
    /// Surface bound, dimensions not yet known
    Created,
    /// Device running with the given coordinate space
    Active {
        /// Current device size
        size: DeviceSize,
    },
    /// Between stop and restart inside `surface_changed`
    Reconfiguring,
    /// Surface gone; terminal for this binding
    Destroyed,
}

impl SurfaceState {
    /// Short name used in logs and errors
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceState::Unbound => "Unbound",
            SurfaceState::Created => "Created",
            SurfaceState::Active { .. } => "Active",
            SurfaceState::Reconfiguring => "Reconfiguring",
            SurfaceState::Destroyed => "Destroyed",
        }
    }

    /// Whether a surface is currently bound
    pub fn has_surface(&self) -> bool {
        matches!(
            self,
            SurfaceState::Created | SurfaceState::Active { .. } | SurfaceState::Reconfiguring
        )
    }
}

/// One applied transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State before the callback
    pub from: SurfaceState,
    /// State after the callback
    pub to: SurfaceState,
    /// The input device was stopped during the callback
    pub device_stopped: bool,
}

/// Surface state machine for one display
pub struct DisplaySurfaceLifecycle {
    display: DisplayId,
    state: SurfaceState,
    surface: Option<SurfaceHandle>,
    retired: bool,
    render: Arc<dyn RenderBackend>,
    metrics: Arc<MetricsCollector>,
}

impl DisplaySurfaceLifecycle {
    /// Create an unbound lifecycle
    pub fn new(
        display: DisplayId,
        render: Arc<dyn RenderBackend>,
        metrics: Arc<MetricsCollector>,
    ) -> Self {
        Self {
            display,
            state: SurfaceState::Unbound,
            surface: None,
            retired: false,
            render,
            metrics,
        }
    }

    /// Host reported a new drawable
    ///
    /// Notifies the renderer immediately. The input device waits for the first
    /// `surface_changed`, which carries the dimensions.
    pub fn on_surface_created(&mut self, surface: Option<SurfaceHandle>) -> Option<Transition> {
        let surface = self.accept("surface_created", surface)?;

        if self.state.has_surface() {
            // Host skipped a destroy; rebind to the new drawable
            self.violation("surface_created");
        }

        self.render.surface_created(self.display, surface);
        self.surface = Some(surface);
        Some(self.transition(self.state, SurfaceState::Created, false))
    }

    /// Host replaced or resized the drawable
    pub fn on_surface_changed(
        &mut self,
        session: &mut InputDeviceSession,
        surface: Option<SurfaceHandle>,
        size: DeviceSize,
    ) -> Option<Transition> {
        let surface = self.accept("surface_changed", surface)?;

        if self.state == SurfaceState::Destroyed {
            self.violation("surface_changed");
            return None;
        }

        let from = self.state;
        self.state = SurfaceState::Reconfiguring;

        let device_stopped = session.stop();
        self.render.surface_changed(self.display, surface);
        if session.has_started() {
            session.reconfigure(size);
        } else {
            session.start(size);
        }

        self.surface = Some(surface);
        Some(self.transition(from, SurfaceState::Active { size }, device_stopped))
    }

    /// Host tore down the drawable
    ///
    /// Renderer first, then the input device.
    pub fn on_surface_destroyed(
        &mut self,
        session: &mut InputDeviceSession,
        surface: Option<SurfaceHandle>,
    ) -> Option<Transition> {
        let surface = self.accept("surface_destroyed", surface)?;

        if !self.state.has_surface() {
            self.violation("surface_destroyed");
            return None;
        }

        self.render.surface_destroyed(self.display, surface);
        let device_stopped = session.stop();

        self.surface = None;
        Some(self.transition(self.state, SurfaceState::Destroyed, device_stopped))
    }

    /// Tear down the display itself
    ///
    /// The primary display is never torn down and gets no notification. Any
    /// other display stops its device, notifies the renderer once and is
    /// retired: every later callback for it is ignored.
    pub fn on_display_destroyed(&mut self, session: &mut InputDeviceSession) -> Option<Transition> {
        if self.display == PRIMARY_DISPLAY_ID {
            debug!("Ignoring display_destroyed for the primary display");
            return None;
        }
        if self.retired {
            report(&BridgeError::DisplayRetired(self.display));
            return None;
        }

        let device_stopped = session.stop();
        self.render.display_destroyed(self.display);
        self.retired = true;
        self.surface = None;

        info!("Display {} destroyed", self.display);
        Some(self.transition(self.state, SurfaceState::Destroyed, device_stopped))
    }

    fn accept(&self, event: &'static str, surface: Option<SurfaceHandle>) -> Option<SurfaceHandle> {
        if self.retired {
            report(&BridgeError::DisplayRetired(self.display));
            return None;
        }
        if surface.is_none() {
            trace!("{} for display {} without a surface, ignored", event, self.display);
        }
        surface
    }

    fn violation(&self, event: &'static str) {
        report(&BridgeError::UnexpectedSurfaceEvent {
            display: self.display,
            event,
            state: self.state.as_str(),
        });
        self.metrics.incr(metric_names::CONTRACT_VIOLATIONS);
    }

    fn transition(
        &mut self,
        from: SurfaceState,
        to: SurfaceState,
        device_stopped: bool,
    ) -> Transition {
        self.state = to;
        self.metrics.incr(metric_names::SURFACE_TRANSITIONS);
        debug!(
            "Display {} surface {} -> {}",
            self.display,
            from.as_str(),
            to.as_str()
        );
        Transition {
            from,
            to,
            device_stopped,
        }
    }

    /// Current state
    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Bound surface, if any
    pub fn surface(&self) -> Option<SurfaceHandle> {
        self.surface
    }

    /// Whether the display has been destroyed
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// Display this lifecycle belongs to
    pub fn display(&self) -> DisplayId {
        self.display
    }
}

impl std::fmt::Debug for DisplaySurfaceLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplaySurfaceLifecycle")
            .field("display", &self.display)
            .field("state", &self.state)
            .field("surface", &self.surface)
            .field("retired", &self.retired)
            .finish_non_exhaustive()
    }
}
