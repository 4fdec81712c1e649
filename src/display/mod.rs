//! Display Surface and Input Device State
//!
//! Each display owns a [`DisplaySurfaceLifecycle`] and an
//! [`InputDeviceSession`]. The lifecycle decides when the device starts, stops
//! and changes size; the session decides whether an encoded event reaches the
//! input backend.

pub mod lifecycle;
pub mod session;

pub use lifecycle::{DisplaySurfaceLifecycle, SurfaceState, Transition};
pub use session::{Delivery, InputDeviceSession};
