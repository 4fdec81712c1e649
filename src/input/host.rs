//! Host Event Model
//!
//! Raw events as the host compositor delivers them: float coordinates, host
//! action numbering and host button bitmasks. Nothing here is device-level yet;
//! [`crate::input::dispatch`] turns these into encoder commands.

use serde::{Deserialize, Serialize};

/// Host button bitmask values
pub mod buttons {
    pub const BUTTON_PRIMARY: u32 = 1 << 0;
    pub const BUTTON_SECONDARY: u32 = 1 << 1;
    pub const BUTTON_TERTIARY: u32 = 1 << 2;
    pub const BUTTON_BACK: u32 = 1 << 3;
    pub const BUTTON_FORWARD: u32 = 1 << 4;
    pub const BUTTON_STYLUS_PRIMARY: u32 = 1 << 5;
    pub const BUTTON_STYLUS_SECONDARY: u32 = 1 << 6;
}

/// Device class that produced a motion event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    /// Direct touch panel
    Touchscreen,
    /// Mouse or other relative pointer
    Mouse,
    /// Stylus on a touch panel
    Stylus,
    /// Indirect touch surface
    Touchpad,
    /// Anything else
    Unknown,
}

impl InputSource {
    /// Whether the source is a pointer device rather than a touch-capable one
    pub fn is_mouse(self) -> bool {
        self == InputSource::Mouse
    }
}

/// Masked motion action in host numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionAction {
    /// First contact went down
    Down,
    /// Last contact lifted
    Up,
    /// Contacts moved
    Move,
    /// Gesture aborted
    Cancel,
    /// Contact left the window bounds
    Outside,
    /// Additional contact went down
    PointerDown,
    /// Non-final contact lifted
    PointerUp,
    /// Pointer moved without contact
    HoverMove,
    /// Scroll wheel or axis
    Scroll,
    /// Pointer entered the window
    HoverEnter,
    /// Pointer left the window
    HoverExit,
    /// Button pressed
    ButtonPress,
    /// Button released
    ButtonRelease,
}

impl MotionAction {
    /// Decode a host action value
    pub fn from_raw(raw: i32) -> Option<Self> {
        let action = match raw {
            0 => MotionAction::Down,
            1 => MotionAction::Up,
            2 => MotionAction::Move,
            3 => MotionAction::Cancel,
            4 => MotionAction::Outside,
            5 => MotionAction::PointerDown,
            6 => MotionAction::PointerUp,
            7 => MotionAction::HoverMove,
            8 => MotionAction::Scroll,
            9 => MotionAction::HoverEnter,
            10 => MotionAction::HoverExit,
            11 => MotionAction::ButtonPress,
            12 => MotionAction::ButtonRelease,
            _ => return None,
        };
        Some(action)
    }

    /// Host action value
    pub fn raw(self) -> i32 {
        match self {
            MotionAction::Down => 0,
            MotionAction::Up => 1,
            MotionAction::Move => 2,
            MotionAction::Cancel => 3,
            MotionAction::Outside => 4,
            MotionAction::PointerDown => 5,
            MotionAction::PointerUp => 6,
            MotionAction::HoverMove => 7,
            MotionAction::Scroll => 8,
            MotionAction::HoverEnter => 9,
            MotionAction::HoverExit => 10,
            MotionAction::ButtonPress => 11,
            MotionAction::ButtonRelease => 12,
        }
    }
}

/// One pointer of a motion event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerCoords {
    /// Pointer id, stable for the duration of the contact
    pub id: i32,
    /// X in surface pixels
    pub x: f32,
    /// Y in surface pixels
    pub y: f32,
    /// Normalized pressure (0.0 for non-touch)
    #[serde(default)]
    pub pressure: f32,
}

impl PointerCoords {
    /// Create pointer coordinates with zero pressure
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self {
            id,
            x,
            y,
            pressure: 0.0,
        }
    }
}

/// Host motion event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    /// Producing device class
    pub source: InputSource,
    /// Masked action
    pub action: MotionAction,
    /// Button that changed state for button press/release actions
    #[serde(default)]
    pub action_button: u32,
    /// Active pointers; index 0 is the primary pointer
    #[serde(default)]
    pub pointers: Vec<PointerCoords>,
    /// Vertical scroll axis value
    #[serde(default)]
    pub vscroll: f32,
    /// Horizontal scroll axis value
    #[serde(default)]
    pub hscroll: f32,
    /// Host event time in milliseconds
    #[serde(default)]
    pub event_time_ms: u64,
}

impl MotionSample {
    /// Create a sample with no pointers or axis values
    pub fn new(source: InputSource, action: MotionAction) -> Self {
        Self {
            source,
            action,
            action_button: 0,
            pointers: Vec::new(),
            vscroll: 0.0,
            hscroll: 0.0,
            event_time_ms: 0,
        }
    }

    /// Add a pointer
    pub fn with_pointer(mut self, pointer: PointerCoords) -> Self {
        self.pointers.push(pointer);
        self
    }

    /// Set the action button
    pub fn with_button(mut self, button: u32) -> Self {
        self.action_button = button;
        self
    }

    /// Set scroll axis values
    pub fn with_scroll(mut self, vscroll: f32, hscroll: f32) -> Self {
        self.vscroll = vscroll;
        self.hscroll = hscroll;
        self
    }

    /// Primary pointer position truncated to integers
    pub fn primary_position(&self) -> Option<(i32, i32)> {
        self.pointers.first().map(|p| (p.x as i32, p.y as i32))
    }
}

/// Event as delivered by one of the host listener capabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostEvent {
    /// Touch listener callback
    Touch(MotionSample),
    /// Hover listener callback
    Hover(MotionSample),
    /// Generic motion listener callback (scroll, buttons)
    GenericMotion(MotionSample),
    /// Key down/up callback
    Key {
        /// Host key code
        host_code: i32,
        /// Key pressed (true) or released (false)
        pressed: bool,
    },
}

impl HostEvent {
    /// Short category name for logging
    pub fn category(&self) -> &'static str {
        match self {
            HostEvent::Touch(_) => "touch",
            HostEvent::Hover(_) => "hover",
            HostEvent::GenericMotion(_) => "generic-motion",
            HostEvent::Key { .. } => "key",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_raw_values() {
        for raw in 0..=12 {
            let action = MotionAction::from_raw(raw).unwrap();
            assert_eq!(action.raw(), raw);
        }
        assert_eq!(MotionAction::from_raw(13), None);
        assert_eq!(MotionAction::from_raw(-1), None);
    }

    #[test]
    fn test_primary_position_truncates() {
        let sample = MotionSample::new(InputSource::Mouse, MotionAction::HoverMove)
            .with_pointer(PointerCoords::new(0, 10.9, 20.2))
            .with_pointer(PointerCoords::new(1, 99.0, 99.0));
        assert_eq!(sample.primary_position(), Some((10, 20)));

        let empty = MotionSample::new(InputSource::Mouse, MotionAction::HoverMove);
        assert_eq!(empty.primary_position(), None);
    }

    #[test]
    fn test_host_event_json_shape() {
        let json = r#"{"kind":"key","host_code":29,"pressed":true}"#;
        let event: HostEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            HostEvent::Key {
                host_code: 29,
                pressed: true
            }
        );

        let json = r#"{"kind":"hover","source":"mouse","action":"hover_move",
                       "pointers":[{"id":0,"x":4.5,"y":8.0}]}"#;
        let event: HostEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.category(), "hover");
    }
}
