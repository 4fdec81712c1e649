//! Pointer Event Encoding
//!
//! Stateless translation of hover motion, button and scroll samples into
//! device-level pointer events.

use crate::error::{BridgeError, Result};
use crate::input::event::{btn, ButtonEvent, DeviceEvent, PointerSample, ScrollEvent};
use crate::input::host::buttons;
use crate::types::DisplayId;
use tracing::trace;

/// Pointer buttons with a device mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button
    Primary,
    /// Secondary (right) button
    Secondary,
    /// Tertiary (middle) button
    Tertiary,
    /// Back side button
    Back,
    /// Forward side button
    Forward,
}

impl PointerButton {
    /// Convert to evdev button code
    pub fn to_device_code(self) -> u16 {
        match self {
            PointerButton::Primary => btn::BTN_LEFT,
            PointerButton::Secondary => btn::BTN_RIGHT,
            PointerButton::Tertiary => btn::BTN_MIDDLE,
            PointerButton::Back => btn::BTN_BACK,
            PointerButton::Forward => btn::BTN_FORWARD,
        }
    }

    /// Convert from a host action button
    ///
    /// Stylus buttons and combined masks have no mapping.
    pub fn from_host_button(button: u32) -> Option<Self> {
        match button {
            buttons::BUTTON_PRIMARY => Some(PointerButton::Primary),
            buttons::BUTTON_SECONDARY => Some(PointerButton::Secondary),
            buttons::BUTTON_TERTIARY => Some(PointerButton::Tertiary),
            buttons::BUTTON_BACK => Some(PointerButton::Back),
            buttons::BUTTON_FORWARD => Some(PointerButton::Forward),
            _ => None,
        }
    }
}

/// Pointer event encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerEventEncoder;

impl PointerEventEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self
    }

    /// Encode an absolute motion sample
    pub fn motion(&self, display_id: DisplayId, x: i32, y: i32) -> DeviceEvent {
        trace!("Pointer motion: display={} ({}, {})", display_id, x, y);

        DeviceEvent::PointerMotion(PointerSample {
            display: display_id,
            x,
            y,
            pressure: 0,
        })
    }

    /// Encode a button transition
    ///
    /// Host buttons outside the fixed table yield [`BridgeError::UnmappedButton`].
    pub fn button(
        &self,
        display_id: DisplayId,
        host_button: u32,
        x: i32,
        y: i32,
        pressed: bool,
    ) -> Result<DeviceEvent> {
        let button = PointerButton::from_host_button(host_button)
            .ok_or(BridgeError::UnmappedButton(host_button))?;

        trace!(
            "Pointer button: display={} {:?} pressed={} at ({}, {})",
            display_id,
            button,
            pressed,
            x,
            y
        );

        Ok(DeviceEvent::Button(ButtonEvent {
            display: display_id,
            code: button.to_device_code(),
            x,
            y,
            pressed,
        }))
    }

    /// Encode a single-axis scroll
    pub fn scroll(&self, display_id: DisplayId, amount: i32, vertical: bool) -> DeviceEvent {
        trace!(
            "Pointer scroll: display={} amount={} vertical={}",
            display_id,
            amount,
            vertical
        );

        DeviceEvent::Scroll(ScrollEvent {
            display: display_id,
            amount,
            vertical,
        })
    }

    /// Encode a two-axis scroll sample
    ///
    /// Both axis values are truncated toward zero first. The vertical axis wins
    /// whenever its truncated value is nonzero and the horizontal value is then
    /// discarded; horizontal is used only when vertical truncates to zero.
    /// Returns `None` when both truncate to zero.
    pub fn scroll_sample(&self, display: DisplayId, vscroll: f32, hscroll: f32) -> Option<DeviceEvent> {
        let vertical = vscroll as i32;
        let horizontal = hscroll as i32;

        if vertical != 0 {
            Some(self.scroll(display, vertical, true))
        } else if horizontal != 0 {
            Some(self.scroll(display, horizontal, false))
        } else {
            None
        }
    }
}
