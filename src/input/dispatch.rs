//! Host Event Routing
//!
//! One host listener object exposes touch, hover and generic-motion callbacks.
//! Here that becomes a single tagged [`HostEvent`] and a routing table that
//! turns each category into encoder commands.
//!
//! ```text
//! HostEvent::Hover ────────────> Motion
//! HostEvent::GenericMotion ────> Scroll | Button
//! HostEvent::Touch (mouse) ────> [GenericMotion rule] + [Hover rule]
//! HostEvent::Touch (other) ────> Touch per pointer
//! HostEvent::Key ──────────────> Key
//! ```
//!
//! Mouse streams arriving on the touch path are dual dispatched: the same
//! sample feeds both the button/scroll rule and the motion rule, so a drag
//! with a mouse produces a button event and a pointer-motion event.

use crate::error::BridgeError;
use crate::input::host::{HostEvent, MotionAction, MotionSample};
use crate::types::DisplayId;
use tracing::trace;

/// Encoder-level command derived from a host event
#[derive(Debug, Clone, PartialEq)]
pub enum InputCommand {
    /// Absolute pointer motion
    Motion {
        /// X truncated to device units
        x: i32,
        /// Y truncated to device units
        y: i32,
    },
    /// Pointer button transition
    Button {
        /// Host action button
        host_button: u32,
        /// X truncated to device units
        x: i32,
        /// Y truncated to device units
        y: i32,
        /// Pressed (true) or released (false)
        pressed: bool,
    },
    /// Two-axis scroll sample, resolved by the pointer encoder
    Scroll {
        /// Vertical axis value
        vscroll: f32,
        /// Horizontal axis value
        hscroll: f32,
    },
    /// Single touch contact update
    Touch {
        /// Pointer id
        slot: i32,
        /// Host action, filtered by the touch encoder
        action: MotionAction,
        /// Pressure truncated to int
        pressure: i32,
        /// X truncated to device units
        x: i32,
        /// Y truncated to device units
        y: i32,
    },
    /// Key transition
    Key {
        /// Host key code
        host_code: i32,
        /// Pressed (true) or released (false)
        pressed: bool,
    },
}

/// Result of routing one host event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Routed {
    /// Commands in delivery order
    pub commands: Vec<InputCommand>,
    /// Parts of the event that could not be routed
    pub dropped: Vec<BridgeError>,
}

impl Routed {
    fn push(&mut self, command: InputCommand) {
        self.commands.push(command);
    }
}

/// Route a host event into encoder commands
pub fn route(display_id: DisplayId, event: &HostEvent) -> Routed {
    let mut routed = Routed::default();

    match event {
        HostEvent::Hover(sample) => route_hover(display_id, sample, &mut routed),
        HostEvent::GenericMotion(sample) => route_generic_motion(display_id, sample, &mut routed),
        HostEvent::Touch(sample) if sample.source.is_mouse() => {
            route_generic_motion(display_id, sample, &mut routed);
            route_hover(display_id, sample, &mut routed);
        }
        HostEvent::Touch(sample) => route_touch(sample, &mut routed),
        HostEvent::Key { host_code, pressed } => routed.push(InputCommand::Key {
            host_code: *host_code,
            pressed: *pressed,
        }),
    }

    trace!(
        "Routed {} event for display {}: {} commands",
        event.category(),
        display_id,
        routed.commands.len()
    );

    routed
}

fn route_hover(display: DisplayId, sample: &MotionSample, routed: &mut Routed) {
    match sample.primary_position() {
        Some((x, y)) => routed.push(InputCommand::Motion { x, y }),
        None => routed.dropped.push(BridgeError::EmptyPointerList(display)),
    }
}

fn route_generic_motion(display: DisplayId, sample: &MotionSample, routed: &mut Routed) {
    match sample.action {
        MotionAction::Scroll => routed.push(InputCommand::Scroll {
            vscroll: sample.vscroll,
            hscroll: sample.hscroll,
        }),
        MotionAction::ButtonPress | MotionAction::ButtonRelease => {
            match sample.primary_position() {
                Some((x, y)) => routed.push(InputCommand::Button {
                    host_button: sample.action_button,
                    x,
                    y,
                    pressed: sample.action == MotionAction::ButtonPress,
                }),
                None => routed.dropped.push(BridgeError::EmptyPointerList(display)),
            }
        }
        _ => {}
    }
}

fn route_touch(sample: &MotionSample, routed: &mut Routed) {
    for pointer in &sample.pointers {
        routed.push(InputCommand::Touch {
            slot: pointer.id,
            action: sample.action,
            pressure: pointer.pressure as i32,
            x: pointer.x as i32,
            y: pointer.y as i32,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::host::{buttons, InputSource, PointerCoords};

    #[test]
    fn test_hover_routes_primary_pointer() {
        let sample = MotionSample::new(InputSource::Mouse, MotionAction::HoverMove)
            .with_pointer(PointerCoords::new(0, 12.7, 30.1));

        let routed = route(0, &HostEvent::Hover(sample));
        assert_eq!(routed.commands, vec![InputCommand::Motion { x: 12, y: 30 }]);
        assert!(routed.dropped.is_empty());
    }

    #[test]
    fn test_hover_without_pointer_dropped() {
        let sample = MotionSample::new(InputSource::Mouse, MotionAction::HoverMove);

        let routed = route(2, &HostEvent::Hover(sample));
        assert!(routed.commands.is_empty());
        assert_eq!(routed.dropped, vec![BridgeError::EmptyPointerList(2)]);
    }

    #[test]
    fn test_generic_motion_scroll() {
        let sample =
            MotionSample::new(InputSource::Mouse, MotionAction::Scroll).with_scroll(5.0, 3.0);

        let routed = route(0, &HostEvent::GenericMotion(sample));
        assert_eq!(
            routed.commands,
            vec![InputCommand::Scroll {
                vscroll: 5.0,
                hscroll: 3.0
            }]
        );
    }

    #[test]
    fn test_generic_motion_button_release() {
        let sample = MotionSample::new(InputSource::Mouse, MotionAction::ButtonRelease)
            .with_button(buttons::BUTTON_SECONDARY)
            .with_pointer(PointerCoords::new(0, 4.0, 9.0));

        let routed = route(0, &HostEvent::GenericMotion(sample));
        assert_eq!(
            routed.commands,
            vec![InputCommand::Button {
                host_button: buttons::BUTTON_SECONDARY,
                x: 4,
                y: 9,
                pressed: false,
            }]
        );
    }

    #[test]
    fn test_generic_motion_ignores_other_actions() {
        let sample = MotionSample::new(InputSource::Mouse, MotionAction::HoverMove)
            .with_pointer(PointerCoords::new(0, 1.0, 1.0));

        let routed = route(0, &HostEvent::GenericMotion(sample));
        assert!(routed.commands.is_empty());
        assert!(routed.dropped.is_empty());
    }

    #[test]
    fn test_mouse_on_touch_path_dual_dispatch() {
        let sample = MotionSample::new(InputSource::Mouse, MotionAction::ButtonPress)
            .with_button(buttons::BUTTON_PRIMARY)
            .with_pointer(PointerCoords::new(0, 10.0, 20.0));

        let routed = route(0, &HostEvent::Touch(sample));
        assert_eq!(
            routed.commands,
            vec![
                InputCommand::Button {
                    host_button: buttons::BUTTON_PRIMARY,
                    x: 10,
                    y: 20,
                    pressed: true,
                },
                InputCommand::Motion { x: 10, y: 20 },
            ]
        );
    }

    #[test]
    fn test_mouse_drag_on_touch_path_is_motion_only() {
        let sample = MotionSample::new(InputSource::Mouse, MotionAction::Move)
            .with_pointer(PointerCoords::new(0, 50.0, 60.0));

        let routed = route(0, &HostEvent::Touch(sample));
        assert_eq!(routed.commands, vec![InputCommand::Motion { x: 50, y: 60 }]);
    }

    #[test]
    fn test_touch_fans_out_per_pointer() {
        let mut p0 = PointerCoords::new(3, 100.4, 200.6);
        p0.pressure = 1.0;
        let mut p1 = PointerCoords::new(7, 300.0, 400.0);
        p1.pressure = 0.5;
        let sample = MotionSample::new(InputSource::Touchscreen, MotionAction::Move)
            .with_pointer(p0)
            .with_pointer(p1);

        let routed = route(0, &HostEvent::Touch(sample));
        assert_eq!(
            routed.commands,
            vec![
                InputCommand::Touch {
                    slot: 3,
                    action: MotionAction::Move,
                    pressure: 1,
                    x: 100,
                    y: 200,
                },
                InputCommand::Touch {
                    slot: 7,
                    action: MotionAction::Move,
                    pressure: 0,
                    x: 300,
                    y: 400,
                },
            ]
        );
    }

    #[test]
    fn test_key_passthrough() {
        let routed = route(
            1,
            &HostEvent::Key {
                host_code: 29,
                pressed: false,
            },
        );
        assert_eq!(
            routed.commands,
            vec![InputCommand::Key {
                host_code: 29,
                pressed: false
            }]
        );
    }
}
