//! Input Event Translation
//!
//! Normalizes heterogeneous host input into the device-level event protocol the
//! guest input driver understands.
//!
//! # Architecture
//!
//! ```text
//! Host listener callbacks
//!       ↓
//! ┌─────────────────────────┐
//! │  dispatch::route        │ ← HostEvent → InputCommand
//! └─────────────────────────┘
//!       ↓            ↓             ↓
//! ┌──────────┐ ┌───────────┐ ┌──────────────┐
//! │ KeyCode  │ │  Pointer  │ │    Touch     │
//! │ Mapper   │ │  Encoder  │ │   Encoder    │
//! └──────────┘ └───────────┘ └──────────────┘
//!       ↓            ↓             ↓
//!            DeviceEvent (evdev numbering)
//! ```
//!
//! The encoders know nothing about whether a device is running. Routing the
//! resulting [`DeviceEvent`] to the display's input device, or dropping it, is
//! the job of [`crate::display::InputDeviceSession`].
//!
//! # Example
//!
//! ```rust
//! use vdisplay_bridge::input::{PointerEventEncoder, DeviceEvent};
//!
//! let encoder = PointerEventEncoder::new();
//! let event = encoder.button(0, 1, 10, 20, true).unwrap();
//!
//! match event {
//!     DeviceEvent::Button(b) => assert_eq!(b.code, 0x110),
//!     _ => unreachable!(),
//! }
//! ```

pub mod dispatch;
pub mod event;
pub mod host;
pub mod keymap;
pub mod pointer;
pub mod touch;

pub use dispatch::{route, InputCommand, Routed};
pub use event::{
    ButtonEvent, DeviceEvent, KeyEvent, PointerSample, ScrollEvent, TouchPhase, TouchSample,
};
pub use host::{HostEvent, InputSource, MotionAction, MotionSample, PointerCoords};
pub use keymap::{keycodes, KeyCodeMapper, UNKNOWN_KEY};
pub use pointer::{PointerButton, PointerEventEncoder};
pub use touch::{EncodedTouch, TouchEventEncoder, DEFAULT_MAX_SLOTS};
