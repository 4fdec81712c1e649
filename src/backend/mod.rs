//! Backend Collaborators
//!
//! The bridge drives two external collaborators: the rendering/display backend
//! that owns surface binding, and the input backend that owns the guest-visible
//! virtual input device. Both are fire-and-forget from the bridge's point of
//! view: calls return immediately and have no failure path the bridge could act
//! on. Calls for one display are always issued under that display's lock, so
//! implementations see them in a strict per-display order.
//!
//! Two implementations ship with the crate:
//! - [`TracingBackend`] logs every call
//! - [`RecordingBackend`] captures every call as a serializable [`BackendCall`]

use crate::input::event::DeviceEvent;
use crate::types::{DeviceSize, DisplayId, SurfaceHandle};

pub mod logging;
pub mod recording;

pub use logging::TracingBackend;
pub use recording::{BackendCall, RecordingBackend};

/// Rendering/display backend
#[cfg_attr(test, mockall::automock)]
pub trait RenderBackend: Send + Sync {
    /// A drawable became available for the display
    fn surface_created(&self, display: DisplayId, surface: SurfaceHandle);

    /// The display's drawable was replaced or resized
    fn surface_changed(&self, display: DisplayId, surface: SurfaceHandle);

    /// The display's drawable is gone
    fn surface_destroyed(&self, display: DisplayId, surface: SurfaceHandle);

    /// The display itself is being torn down
    fn display_destroyed(&self, display: DisplayId);
}

/// Virtual input device backend
#[cfg_attr(test, mockall::automock)]
pub trait InputBackend: Send + Sync {
    /// Bring up the display's input device with the given coordinate space
    fn start_device(&self, display: DisplayId, size: DeviceSize);

    /// Tear down the display's input device
    fn stop_device(&self, display: DisplayId);

    /// Bring the device back up with a new coordinate space
    fn reconfigure_device(&self, display: DisplayId, size: DeviceSize);

    /// Inject a device-level event
    fn send_event(&self, event: DeviceEvent);
}
