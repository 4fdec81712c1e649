//! Device-Level Events
//!
//! The numeric convention the guest input driver consumes. Button codes are
//! evdev `BTN_*` values, key codes evdev `KEY_*` values, and touch phases keep
//! the host action numbering the guest side was written against.

use crate::types::DisplayId;
use serde::{Deserialize, Serialize};

/// evdev button codes
pub mod btn {
    pub const BTN_LEFT: u16 = 0x110;
    pub const BTN_RIGHT: u16 = 0x111;
    pub const BTN_MIDDLE: u16 = 0x112;
    pub const BTN_FORWARD: u16 = 0x115;
    pub const BTN_BACK: u16 = 0x116;
}

/// Touch contact phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    /// Contact began
    Down,
    /// Contact moved
    Move,
    /// Contact ended
    Up,
}

impl TouchPhase {
    /// Wire code expected by the guest driver
    pub fn code(self) -> i32 {
        match self {
            TouchPhase::Down => 0,
            TouchPhase::Up => 1,
            TouchPhase::Move => 2,
        }
    }
}

/// Absolute pointer position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Target display
    pub display: DisplayId,
    /// X in device units
    pub x: i32,
    /// Y in device units
    pub y: i32,
    /// Pressure (0 for non-touch)
    pub pressure: i32,
}

/// Single touch contact update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchSample {
    /// Target display
    pub display: DisplayId,
    /// Contact slot, stable until its `Up`
    pub slot: i32,
    /// Contact phase
    pub phase: TouchPhase,
    /// Pressure
    pub pressure: i32,
    /// X in device units
    pub x: i32,
    /// Y in device units
    pub y: i32,
}

/// Button press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonEvent {
    /// Target display
    pub display: DisplayId,
    /// evdev button code
    pub code: u16,
    /// X at the time of the press
    pub x: i32,
    /// Y at the time of the press
    pub y: i32,
    /// Button pressed (true) or released (false)
    pub pressed: bool,
}

/// Scroll along a single axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollEvent {
    /// Target display
    pub display: DisplayId,
    /// Signed tick count
    pub amount: i32,
    /// Vertical (true) or horizontal (false) axis
    pub vertical: bool,
}

/// Key press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Target display
    pub display: DisplayId,
    /// evdev key code
    pub code: u32,
    /// Key pressed (true) or released (false)
    pub pressed: bool,
}

/// Event encoded for the guest input driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceEvent {
    /// Absolute pointer motion
    PointerMotion(PointerSample),
    /// Pointer button
    Button(ButtonEvent),
    /// Scroll ticks
    Scroll(ScrollEvent),
    /// Multi-touch contact
    Touch(TouchSample),
    /// Keyboard key
    Key(KeyEvent),
}

impl DeviceEvent {
    /// Display the event is addressed to
    pub fn display(&self) -> DisplayId {
        match self {
            DeviceEvent::PointerMotion(e) => e.display,
            DeviceEvent::Button(e) => e.display,
            DeviceEvent::Scroll(e) => e.display,
            DeviceEvent::Touch(e) => e.display,
            DeviceEvent::Key(e) => e.display,
        }
    }
}
