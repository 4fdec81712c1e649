//! # vdisplay-bridge
//!
//! Input translation and display surface lifecycle coordination for
//! guest displays hosted inside a container.
//!
//! The host compositor owns the drawables and delivers raw touch, hover,
//! generic-motion and key callbacks in its own numbering. The guest runs an
//! input driver that expects evdev-style codes on a virtual device bound to
//! each display's size. This crate sits between the two.
//!
//! # Architecture
//!
//! ```text
//! host callbacks
//!   ├─> surface created/changed/destroyed ─> DisplaySurfaceLifecycle
//!   │                                          ├─> RenderBackend
//!   │                                          └─> InputDeviceSession ─> InputBackend
//!   └─> touch/hover/generic-motion/key ─> dispatch::route
//!                                          ├─> KeyCodeMapper
//!                                          ├─> PointerEventEncoder
//!                                          └─> TouchEventEncoder
//!                                                 └─> InputDeviceSession (deliver or drop)
//! ```
//!
//! [`DisplayBridge`] ties it together with one lock per display, so a resize
//! never races input for the same display.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vdisplay_bridge::backend::RecordingBackend;
//! use vdisplay_bridge::config::InputConfig;
//! use vdisplay_bridge::{DisplayBridge, SurfaceHandle};
//!
//! let backend = Arc::new(RecordingBackend::new());
//! let bridge = DisplayBridge::new(InputConfig::default(), backend.clone(), backend.clone());
//!
//! bridge.on_surface_created(0, Some(SurfaceHandle(1)));
//! bridge.on_surface_changed(0, Some(SurfaceHandle(1)), 1080, 1920);
//!
//! assert!(bridge.button(0, 1, 10, 20, true).is_forwarded());
//! assert_eq!(backend.device_events().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Backend collaborator traits and stock implementations
pub mod backend;

/// Per-display coordinator
pub mod bridge;

/// Bridge configuration
pub mod config;

/// Container start/stop policy
pub mod controller;

/// Surface lifecycle and input device session
pub mod display;

/// Error taxonomy
pub mod error;

/// Host event model and device-level encoders
pub mod input;

/// Host event traces and replay
pub mod trace;

/// Shared identifiers
pub mod types;

/// Metrics and error formatting
pub mod utils;

pub use bridge::DisplayBridge;
pub use display::{Delivery, SurfaceState};
pub use error::{BridgeError, ErrorClass};
pub use types::{DeviceSize, DisplayId, SurfaceHandle, PRIMARY_DISPLAY_ID};
