//! Input routing integration tests
//!
//! Host events in, device events out, through the public bridge API.

use std::sync::Arc;
use vdisplay_bridge::backend::RecordingBackend;
use vdisplay_bridge::config::InputConfig;
use vdisplay_bridge::input::host::buttons;
use vdisplay_bridge::input::keymap::{host, keycodes};
use vdisplay_bridge::input::{
    DeviceEvent, HostEvent, InputSource, MotionAction, MotionSample, PointerCoords, PointerSample,
    ScrollEvent, TouchPhase, TouchSample,
};
use vdisplay_bridge::utils::metric_names;
use vdisplay_bridge::{BridgeError, Delivery, DisplayBridge, DisplayId, SurfaceHandle};

fn active_bridge(displays: &[DisplayId]) -> (DisplayBridge, Arc<RecordingBackend>) {
    let backend = Arc::new(RecordingBackend::new());
    let bridge = DisplayBridge::new(InputConfig::default(), backend.clone(), backend.clone());
    for &display in displays {
        bridge.on_surface_created(display, Some(SurfaceHandle(display + 1)));
        bridge.on_surface_changed(display, Some(SurfaceHandle(display + 1)), 1080, 1920);
    }
    backend.take();
    (bridge, backend)
}

fn touch_sample(action: MotionAction, pointers: &[(i32, f32, f32)]) -> HostEvent {
    let sample = pointers.iter().fold(
        MotionSample::new(InputSource::Touchscreen, action),
        |sample, &(id, x, y)| sample.with_pointer(PointerCoords::new(id, x, y)),
    );
    HostEvent::Touch(sample)
}

fn touch_phases(backend: &RecordingBackend) -> Vec<(i32, TouchPhase)> {
    backend
        .device_events()
        .iter()
        .filter_map(|event| match event {
            DeviceEvent::Touch(sample) => Some((sample.slot, sample.phase)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_two_finger_gesture() {
    let (bridge, backend) = active_bridge(&[0]);

    bridge.handle_host_event(0, &touch_sample(MotionAction::Down, &[(0, 10.0, 10.0)]));
    bridge.handle_host_event(
        0,
        &touch_sample(MotionAction::PointerDown, &[(0, 10.0, 10.0), (1, 50.0, 50.0)]),
    );
    bridge.handle_host_event(
        0,
        &touch_sample(MotionAction::Move, &[(0, 12.0, 10.0), (1, 52.0, 50.0)]),
    );
    // Finger 0 lifts first; the sample still lists finger 1
    bridge.handle_host_event(
        0,
        &touch_sample(MotionAction::PointerUp, &[(0, 12.0, 10.0), (1, 52.0, 50.0)]),
    );
    bridge.handle_host_event(0, &touch_sample(MotionAction::Move, &[(1, 55.0, 50.0)]));
    bridge.handle_host_event(0, &touch_sample(MotionAction::Up, &[(1, 55.0, 50.0)]));

    assert_eq!(
        touch_phases(&backend),
        vec![
            (0, TouchPhase::Down),
            (0, TouchPhase::Move),
            (1, TouchPhase::Move),
            (1, TouchPhase::Move),
            (1, TouchPhase::Up),
        ]
    );
    assert_eq!(
        bridge
            .metrics()
            .counter(metric_names::CONTRACT_VIOLATIONS),
        0
    );
    assert!(bridge.active_touch_slots(0).is_empty());
}

#[test]
fn test_next_gesture_after_pointer_up_is_clean() {
    let (bridge, backend) = active_bridge(&[0]);

    let gesture = [
        (MotionAction::Down, vec![(0, 1.0, 1.0)]),
        (MotionAction::PointerDown, vec![(0, 1.0, 1.0), (1, 5.0, 5.0)]),
        (MotionAction::Move, vec![(0, 2.0, 2.0), (1, 6.0, 6.0)]),
        (MotionAction::PointerUp, vec![(0, 2.0, 2.0), (1, 6.0, 6.0)]),
        (MotionAction::Up, vec![(1, 6.0, 6.0)]),
    ];
    for (action, pointers) in &gesture {
        bridge.handle_host_event(0, &touch_sample(*action, pointers));
    }
    assert!(bridge.active_touch_slots(0).is_empty());

    let outcomes =
        bridge.handle_host_event(0, &touch_sample(MotionAction::Down, &[(0, 3.0, 3.0)]));

    assert_eq!(outcomes, vec![Delivery::Forwarded]);
    assert_eq!(bridge.active_touch_slots(0), vec![0]);
    assert_eq!(
        bridge
            .metrics()
            .counter(metric_names::CONTRACT_VIOLATIONS),
        0
    );
    assert_eq!(touch_phases(&backend).last(), Some(&(0, TouchPhase::Down)));
}

#[test]
fn test_touch_secondary_pointer_actions_filtered() {
    let (bridge, backend) = active_bridge(&[0]);

    let outcomes = bridge.handle_host_event(
        0,
        &touch_sample(MotionAction::PointerDown, &[(0, 1.0, 1.0), (1, 2.0, 2.0)]),
    );

    assert_eq!(outcomes, vec![Delivery::Filtered, Delivery::Filtered]);
    assert!(backend.device_events().is_empty());
}

#[test]
fn test_mouse_drag_on_touch_path() {
    let (bridge, backend) = active_bridge(&[0]);

    let press = MotionSample::new(InputSource::Mouse, MotionAction::ButtonPress)
        .with_button(buttons::BUTTON_PRIMARY)
        .with_pointer(PointerCoords::new(0, 100.9, 200.2));
    bridge.handle_host_event(0, &HostEvent::Touch(press));

    let events = backend.device_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], DeviceEvent::Button(b) if b.code == 0x110 && b.pressed));
    assert_eq!(
        events[1],
        DeviceEvent::PointerMotion(PointerSample {
            display: 0,
            x: 100,
            y: 200,
            pressure: 0,
        })
    );
}

#[test]
fn test_generic_motion_scroll_vertical_wins() {
    let (bridge, backend) = active_bridge(&[0]);

    let scroll = MotionSample::new(InputSource::Mouse, MotionAction::Scroll).with_scroll(-1.9, 4.0);
    let outcomes = bridge.handle_host_event(0, &HostEvent::GenericMotion(scroll));

    assert_eq!(outcomes, vec![Delivery::Forwarded]);
    assert_eq!(
        backend.device_events(),
        vec![DeviceEvent::Scroll(ScrollEvent {
            display: 0,
            amount: -1,
            vertical: true,
        })]
    );
}

#[test]
fn test_hover_without_pointers_dropped() {
    let (bridge, backend) = active_bridge(&[0]);

    let hover = MotionSample::new(InputSource::Mouse, MotionAction::HoverMove);
    let outcomes = bridge.handle_host_event(0, &HostEvent::Hover(hover));

    assert_eq!(
        outcomes,
        vec![Delivery::Dropped(BridgeError::EmptyPointerList(0))]
    );
    assert!(backend.is_empty());
}

#[test]
fn test_key_round() {
    let (bridge, backend) = active_bridge(&[0]);

    for pressed in [true, false] {
        bridge.handle_host_event(
            0,
            &HostEvent::Key {
                host_code: host::KEYCODE_A,
                pressed,
            },
        );
    }

    let codes: Vec<(u32, bool)> = backend
        .device_events()
        .iter()
        .filter_map(|event| match event {
            DeviceEvent::Key(key) => Some((key.code, key.pressed)),
            _ => None,
        })
        .collect();
    assert_eq!(codes, vec![(keycodes::KEY_A, true), (keycodes::KEY_A, false)]);
}

#[test]
fn test_input_follows_display() {
    let (bridge, backend) = active_bridge(&[0, 3]);

    bridge.touch(3, 0, MotionAction::Down, 1, 7, 8);

    assert_eq!(
        backend.device_events(),
        vec![DeviceEvent::Touch(TouchSample {
            display: 3,
            slot: 0,
            phase: TouchPhase::Down,
            pressure: 1,
            x: 7,
            y: 8,
        })]
    );
    assert_eq!(bridge.active_touch_slots(3), vec![0]);
    assert!(bridge.active_touch_slots(0).is_empty());
}

#[test]
fn test_input_dropped_during_surface_gap() {
    let (bridge, backend) = active_bridge(&[0]);

    bridge.on_surface_destroyed(0, Some(SurfaceHandle(1)));
    backend.take();

    assert_eq!(
        bridge.motion(0, 5, 5),
        Delivery::Dropped(BridgeError::NoSurface(0))
    );
    assert!(backend.is_empty());
    assert_eq!(bridge.metrics().counter(metric_names::INPUT_DROPPED), 1);
}

#[test]
fn test_forwarded_counter_tracks_backend() {
    let (bridge, backend) = active_bridge(&[0]);

    bridge.motion(0, 1, 1);
    bridge.button(0, buttons::BUTTON_TERTIARY, 1, 1, true);
    bridge.scroll(0, 2, false);
    bridge.key(0, host::KEYCODE_ENTER, true);

    assert_eq!(
        bridge.metrics().counter(metric_names::INPUT_FORWARDED),
        backend.device_events().len() as u64
    );
    assert_eq!(backend.device_events().len(), 4);
}
