//! Shared identifiers for displays, surfaces and device geometry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Virtual display identifier as handed out by the host.
pub type DisplayId = u64;

/// The primary display. It lives for the whole process: its surface may cycle
/// but the display itself is never torn down.
pub const PRIMARY_DISPLAY_ID: DisplayId = 0;

/// Opaque handle to a host-owned drawable.
///
/// The bridge never dereferences it; it only passes it through to the
/// rendering backend between `SurfaceCreated` and `SurfaceDestroyed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceHandle(pub u64);

impl SurfaceHandle {
    /// Raw host value
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{:x}", self.0)
    }
}

/// Input device coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceSize {
    /// Width in device units
    pub width: u32,
    /// Height in device units
    pub height: u32,
}

impl DeviceSize {
    /// Create a new size
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check whether a device coordinate lies inside this space
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

impl fmt::Display for DeviceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_size_contains() {
        let size = DeviceSize::new(1080, 2400);
        assert!(size.contains(0, 0));
        assert!(size.contains(1079, 2399));
        assert!(!size.contains(1080, 10));
        assert!(!size.contains(-1, 10));
    }

    #[test]
    fn test_surface_handle_serde_transparent() {
        let handle: SurfaceHandle = serde_json::from_str("42").unwrap();
        assert_eq!(handle, SurfaceHandle(42));
        assert_eq!(handle.to_string(), "surface#2a");
    }
}
