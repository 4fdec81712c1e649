//! Touch Event Encoding
//!
//! Per-slot translation of multi-touch samples. Only `Down`, `Move` and `Up`
//! reach the device; every other host action on the touch path is filtered.
//!
//! The encoder tracks which slots are currently down so it can flag contract
//! violations (a slot reused before its `Up`, a `Move` with no `Down`). Flagged
//! events are still encoded: the guest driver copes better with a slightly odd
//! stream than with a missing `Up`.
//!
//! Filtered actions still drive the bookkeeping. The host announces extra
//! fingers with `PointerDown` and lifts all but the last with `PointerUp`, and
//! every touch sample lists every pointer, so a `PointerUp` sample names the
//! lifted finger alongside the ones that stay down:
//!
//! ```text
//! PointerDown(slot)  slot is down
//! PointerUp(slot)    slot is lifting; a later Move/Up for it means it stayed
//! Up(slot)           gesture over, every lifting slot is gone
//! Cancel             gesture aborted, all slots cleared
//! ```

use crate::error::BridgeError;
use crate::input::event::{DeviceEvent, TouchPhase, TouchSample};
use crate::input::host::MotionAction;
use crate::types::DisplayId;
use std::collections::BTreeSet;
use tracing::trace;

/// Default number of concurrent slots
pub const DEFAULT_MAX_SLOTS: u32 = 10;

/// Map a host action to a device touch phase
///
/// `PointerDown`/`PointerUp`, cancel, hover and the rest carry no device-level
/// meaning on the touch path and return `None`.
pub fn phase_for(action: MotionAction) -> Option<TouchPhase> {
    match action {
        MotionAction::Down => Some(TouchPhase::Down),
        MotionAction::Move => Some(TouchPhase::Move),
        MotionAction::Up => Some(TouchPhase::Up),
        _ => None,
    }
}

/// Touch sample that survived filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTouch {
    /// Device-level event
    pub event: DeviceEvent,
    /// Sequencing violation detected while encoding, if any
    pub violation: Option<BridgeError>,
}

/// Touch event encoder for one display
#[derive(Debug, Clone)]
pub struct TouchEventEncoder {
    display: DisplayId,
    max_slots: u32,
    down: BTreeSet<i32>,
    lifting: BTreeSet<i32>,
}

impl TouchEventEncoder {
    /// Create a new encoder
    pub fn new(display: DisplayId, max_slots: u32) -> Self {
        Self {
            display,
            max_slots,
            down: BTreeSet::new(),
            lifting: BTreeSet::new(),
        }
    }

    /// Encode one contact update
    ///
    /// Returns `None` when the action is not a touch phase. Secondary pointer
    /// and cancel actions update slot tracking before being filtered.
    pub fn touch(
        &mut self,
        slot: i32,
        action: MotionAction,
        pressure: i32,
        x: i32,
        y: i32,
    ) -> Option<EncodedTouch> {
        let Some(phase) = phase_for(action) else {
            self.bookkeep(slot, action);
            trace!(
                "Touch filtered: display={} slot={} action={:?}",
                self.display,
                slot,
                action
            );
            return None;
        };

        let violation = self.track(slot, phase);

        Some(EncodedTouch {
            event: DeviceEvent::Touch(TouchSample {
                display: self.display,
                slot,
                phase,
                pressure,
                x,
                y,
            }),
            violation,
        })
    }

    fn bookkeep(&mut self, slot: i32, action: MotionAction) {
        match action {
            MotionAction::PointerDown => {
                self.lifting.remove(&slot);
                self.down.insert(slot);
            }
            MotionAction::PointerUp => {
                if self.down.remove(&slot) {
                    self.lifting.insert(slot);
                }
            }
            MotionAction::Cancel => self.reset(),
            _ => {}
        }
    }

    fn track(&mut self, slot: i32, phase: TouchPhase) -> Option<BridgeError> {
        // A slot listed in a PointerUp sample that keeps reporting never lifted
        let was_lifting = self.lifting.remove(&slot);

        let violation = if slot < 0 || slot as u32 >= self.max_slots {
            // Still tracked so the matching Up balances out
            match phase {
                TouchPhase::Down => {
                    self.down.insert(slot);
                }
                TouchPhase::Move => {
                    if was_lifting {
                        self.down.insert(slot);
                    }
                }
                TouchPhase::Up => {
                    self.down.remove(&slot);
                }
            }
            Some(BridgeError::SlotOutOfRange {
                display: self.display,
                slot,
                max: self.max_slots,
            })
        } else {
            match phase {
                TouchPhase::Down => {
                    if self.down.insert(slot) {
                        None
                    } else {
                        Some(BridgeError::DuplicateSlotDown {
                            display: self.display,
                            slot,
                        })
                    }
                }
                TouchPhase::Move => {
                    if was_lifting {
                        self.down.insert(slot);
                        None
                    } else if self.down.contains(&slot) {
                        None
                    } else {
                        Some(BridgeError::SlotNotDown {
                            display: self.display,
                            slot,
                            phase,
                        })
                    }
                }
                TouchPhase::Up => {
                    if self.down.remove(&slot) || was_lifting {
                        None
                    } else {
                        Some(BridgeError::SlotNotDown {
                            display: self.display,
                            slot,
                            phase,
                        })
                    }
                }
            }
        };

        if phase == TouchPhase::Up {
            self.lifting.clear();
        }
        violation
    }

    /// Slots currently down, ascending
    pub fn active_slots(&self) -> Vec<i32> {
        self.down.iter().copied().collect()
    }

    /// Forget every contact
    pub fn reset(&mut self) {
        if !self.down.is_empty() {
            trace!(
                "Clearing {} touch slots on display {}",
                self.down.len(),
                self.display
            );
        }
        self.down.clear();
        self.lifting.clear();
    }

    /// Configured slot count
    pub fn max_slots(&self) -> u32 {
        self.max_slots
    }
}
