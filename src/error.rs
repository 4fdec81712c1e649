//! Bridge Error Types
//!
//! Nothing in the core surfaces an error to its caller. Every failure falls into
//! one of three classes and is handled in place: the event is dropped, or the
//! violation is logged and processing continues. [`report`] is the single place
//! that decides how loud each class is.

use crate::input::event::TouchPhase;
use crate::types::DisplayId;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Bridge error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// No surface is bound for the display
    #[error("No surface bound for display {0}")]
    NoSurface(DisplayId),

    /// Input device is not running for the display
    #[error("Input device inactive for display {0}")]
    DeviceInactive(DisplayId),

    /// Display was destroyed and accepts no further events
    #[error("Display {0} has been retired")]
    DisplayRetired(DisplayId),

    /// Motion event carried no pointer coordinates
    #[error("Motion event for display {0} carried no pointers")]
    EmptyPointerList(DisplayId),

    /// Host key code without a device mapping
    #[error("Unmapped host key code: {0}")]
    UnmappedKey(i32),

    /// Host button without a device mapping
    #[error("Unmapped host button: 0x{0:02X}")]
    UnmappedButton(u32),

    /// Touch slot reported down while already down
    #[error("Touch slot {slot} on display {display} went down twice")]
    DuplicateSlotDown {
        /// Display the contact belongs to
        display: DisplayId,
        /// Offending slot
        slot: i32,
    },

    /// Touch slot moved or lifted without a preceding down
    #[error("Touch slot {slot} on display {display} got {phase:?} without Down")]
    SlotNotDown {
        /// Display the contact belongs to
        display: DisplayId,
        /// Offending slot
        slot: i32,
        /// Phase that arrived
        phase: TouchPhase,
    },

    /// Touch slot id outside the configured range
    #[error("Touch slot {slot} on display {display} exceeds max of {max}")]
    SlotOutOfRange {
        /// Display the contact belongs to
        display: DisplayId,
        /// Offending slot
        slot: i32,
        /// Configured slot count
        max: u32,
    },

    /// Reconfigure issued while the device was still running
    #[error("Reconfigure of display {0} while its input device is active")]
    ReconfigureWhileActive(DisplayId),

    /// Surface callback that makes no sense in the current state
    #[error("Unexpected {event} for display {display} in state {state}")]
    UnexpectedSurfaceEvent {
        /// Display the callback targeted
        display: DisplayId,
        /// Callback name
        event: &'static str,
        /// Lifecycle state at the time
        state: &'static str,
    },
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Surface or device missing; expected during startup/teardown races
    TransientMissingResource,
    /// Host code space exceeds device code space
    UnmappedCode,
    /// Caller broke the sequencing contract
    SequencingViolation,
}

/// Classify error for reporting
pub fn classify(error: &BridgeError) -> ErrorClass {
    match error {
        BridgeError::NoSurface(_)
        | BridgeError::DeviceInactive(_)
        | BridgeError::DisplayRetired(_)
        | BridgeError::EmptyPointerList(_) => ErrorClass::TransientMissingResource,

        BridgeError::UnmappedKey(_) | BridgeError::UnmappedButton(_) => ErrorClass::UnmappedCode,

        BridgeError::DuplicateSlotDown { .. }
        | BridgeError::SlotNotDown { .. }
        | BridgeError::SlotOutOfRange { .. }
        | BridgeError::ReconfigureWhileActive(_)
        | BridgeError::UnexpectedSurfaceEvent { .. } => ErrorClass::SequencingViolation,
    }
}

/// Log an error at the level its class warrants
pub fn report(error: &BridgeError) {
    match classify(error) {
        ErrorClass::TransientMissingResource => trace!("Dropped: {}", error),
        ErrorClass::UnmappedCode => debug!("Dropped: {}", error),
        ErrorClass::SequencingViolation => warn!("Contract violation: {}", error),
    }
}
