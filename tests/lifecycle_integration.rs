//! Surface lifecycle integration tests
//!
//! Drives the public bridge API with a recording backend and checks the exact
//! backend call sequence.

use std::sync::Arc;
use vdisplay_bridge::backend::{BackendCall, RecordingBackend};
use vdisplay_bridge::config::InputConfig;
use vdisplay_bridge::{DeviceSize, DisplayBridge, SurfaceHandle, SurfaceState};

fn setup() -> (DisplayBridge, Arc<RecordingBackend>) {
    let backend = Arc::new(RecordingBackend::new());
    let bridge = DisplayBridge::new(InputConfig::default(), backend.clone(), backend.clone());
    (bridge, backend)
}

#[test]
fn test_full_surface_cycle() {
    let (bridge, backend) = setup();
    let surface = SurfaceHandle(0x10);

    bridge.on_surface_created(0, Some(surface));
    bridge.on_surface_changed(0, Some(surface), 1080, 2400);
    bridge.on_surface_changed(0, Some(surface), 2400, 1080);
    bridge.on_surface_destroyed(0, Some(surface));

    assert_eq!(
        backend.calls(),
        vec![
            BackendCall::SurfaceCreated {
                display: 0,
                surface
            },
            BackendCall::SurfaceChanged {
                display: 0,
                surface
            },
            BackendCall::StartDevice {
                display: 0,
                size: DeviceSize::new(1080, 2400)
            },
            BackendCall::StopDevice { display: 0 },
            BackendCall::SurfaceChanged {
                display: 0,
                surface
            },
            BackendCall::ReconfigureDevice {
                display: 0,
                size: DeviceSize::new(2400, 1080)
            },
            BackendCall::SurfaceDestroyed {
                display: 0,
                surface
            },
            BackendCall::StopDevice { display: 0 },
        ]
    );
    assert_eq!(bridge.surface_state(0), Some(SurfaceState::Destroyed));
    assert!(!bridge.is_device_active(0));
}

#[test]
fn test_surface_comes_back_after_destroy() {
    let (bridge, backend) = setup();

    bridge.on_surface_created(0, Some(SurfaceHandle(1)));
    bridge.on_surface_changed(0, Some(SurfaceHandle(1)), 800, 600);
    bridge.on_surface_destroyed(0, Some(SurfaceHandle(1)));
    backend.take();

    // Activity resumed with a fresh drawable
    bridge.on_surface_created(0, Some(SurfaceHandle(2)));
    bridge.on_surface_changed(0, Some(SurfaceHandle(2)), 800, 600);

    assert_eq!(
        backend.take(),
        vec![
            BackendCall::SurfaceCreated {
                display: 0,
                surface: SurfaceHandle(2)
            },
            BackendCall::SurfaceChanged {
                display: 0,
                surface: SurfaceHandle(2)
            },
            BackendCall::ReconfigureDevice {
                display: 0,
                size: DeviceSize::new(800, 600)
            },
        ]
    );
    assert!(bridge.is_device_active(0));
}

#[test]
fn test_missing_surface_never_reaches_backend() {
    let (bridge, backend) = setup();

    bridge.on_surface_created(0, None);
    bridge.on_surface_changed(0, None, 100, 100);
    bridge.on_surface_destroyed(0, None);

    assert!(backend.is_empty());
    assert_eq!(bridge.surface_state(0), Some(SurfaceState::Unbound));
}

#[test]
fn test_displays_are_independent() {
    let (bridge, backend) = setup();

    bridge.on_surface_created(1, Some(SurfaceHandle(1)));
    bridge.on_surface_created(2, Some(SurfaceHandle(2)));
    bridge.on_surface_changed(1, Some(SurfaceHandle(1)), 640, 480);
    bridge.on_surface_changed(2, Some(SurfaceHandle(2)), 1280, 720);
    bridge.on_display_destroyed(1);

    assert!(!bridge.is_device_active(1));
    assert!(bridge.is_device_active(2));
    assert_eq!(bridge.device_size(2), Some(DeviceSize::new(1280, 720)));
    assert!(bridge.is_retired(1));
    assert!(!bridge.is_retired(2));
    assert_eq!(
        backend
            .calls_for(1)
            .iter()
            .filter(|c| matches!(c, BackendCall::DisplayDestroyed { .. }))
            .count(),
        1
    );
    assert_eq!(bridge.display_ids(), vec![1, 2]);
}

#[test]
fn test_primary_display_destroy_sends_nothing() {
    let (bridge, backend) = setup();

    bridge.on_display_destroyed(0);
    bridge.on_display_destroyed(0);

    assert!(backend.is_empty());
}

#[test]
fn test_secondary_display_destroy_forwards_once() {
    let (bridge, backend) = setup();

    // Never had a surface; the notification still goes out once
    bridge.on_display_destroyed(4);
    bridge.on_display_destroyed(4);

    assert_eq!(backend.calls(), vec![BackendCall::DisplayDestroyed { display: 4 }]);
}
