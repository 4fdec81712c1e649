//! Display Bridge
//!
//! The entry point the host talks to. Holds one entry per display id, each
//! behind its own mutex:
//!
//! ```text
//! DisplayBridge
//!   ├─ KeyCodeMapper        (shared, immutable)
//!   ├─ PointerEventEncoder  (shared, stateless)
//!   └─ displays: DisplayId → Mutex<DisplayEntry>
//!                               ├─ DisplaySurfaceLifecycle
//!                               ├─ InputDeviceSession
//!                               └─ TouchEventEncoder
//! ```
//!
//! Surface callbacks and input for the same display take the same lock, so a
//! resize's stop → swap → restart runs with no input interleaved. Different
//! displays never contend.

use crate::backend::{InputBackend, RenderBackend};
use crate::config::InputConfig;
use crate::display::{Delivery, DisplaySurfaceLifecycle, InputDeviceSession, SurfaceState};
use crate::error::{classify, report, BridgeError, ErrorClass};
use crate::input::dispatch::{route, InputCommand};
use crate::input::event::{DeviceEvent, KeyEvent};
use crate::input::host::{HostEvent, MotionAction};
use crate::input::keymap::{KeyCodeMapper, UNKNOWN_KEY};
use crate::input::pointer::PointerEventEncoder;
use crate::input::touch::TouchEventEncoder;
use crate::types::{DeviceSize, DisplayId, SurfaceHandle};
use crate::utils::metrics::{metric_names, MetricsCollector};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Per-display state, guarded as one unit
#[derive(Debug)]
struct DisplayEntry {
    lifecycle: DisplaySurfaceLifecycle,
    session: InputDeviceSession,
    touch: TouchEventEncoder,
}

/// Input translation and surface lifecycle coordinator
pub struct DisplayBridge {
    config: InputConfig,
    render: Arc<dyn RenderBackend>,
    input: Arc<dyn InputBackend>,
    keymap: KeyCodeMapper,
    pointer: PointerEventEncoder,
    displays: RwLock<HashMap<DisplayId, Arc<Mutex<DisplayEntry>>>>,
    metrics: Arc<MetricsCollector>,
}

impl DisplayBridge {
    /// Create a bridge with no displays
    pub fn new(
        config: InputConfig,
        render: Arc<dyn RenderBackend>,
        input: Arc<dyn InputBackend>,
    ) -> Self {
        info!(
            "Display bridge ready: {} mapped keys, {} touch slots",
            KeyCodeMapper::new().mapped_key_count(),
            config.max_touch_slots
        );

        Self {
            config,
            render,
            input,
            keymap: KeyCodeMapper::new(),
            pointer: PointerEventEncoder::new(),
            displays: RwLock::new(HashMap::new()),
            metrics: Arc::new(MetricsCollector::new()),
        }
    }

    /// Shared metrics
    pub fn metrics(&self) -> &Arc<MetricsCollector> {
        &self.metrics
    }

    fn lookup(&self, display: DisplayId) -> Option<Arc<Mutex<DisplayEntry>>> {
        self.displays.read().get(&display).cloned()
    }

    fn entry(&self, display_id: DisplayId) -> Arc<Mutex<DisplayEntry>> {
        if let Some(entry) = self.lookup(display_id) {
            return entry;
        }

        self.displays
            .write()
            .entry(display_id)
            .or_insert_with(|| {
                debug!("Tracking display {}", display_id);
                Arc::new(Mutex::new(DisplayEntry {
                    lifecycle: DisplaySurfaceLifecycle::new(
                        display_id,
                        self.render.clone(),
                        self.metrics.clone(),
                    ),
                    session: InputDeviceSession::new(
                        display_id,
                        self.input.clone(),
                        self.metrics.clone(),
                    ),
                    touch: TouchEventEncoder::new(display_id, self.config.max_touch_slots),
                }))
            })
            .clone()
    }

    // === Surface lifecycle ===

    /// Host created a drawable for the display
    pub fn on_surface_created(&self, display: DisplayId, surface: Option<SurfaceHandle>) {
        let entry = self.entry(display);
        let mut entry = entry.lock();
        entry.lifecycle.on_surface_created(surface);
    }

    /// Host resized or replaced the display's drawable
    pub fn on_surface_changed(
        &self,
        display: DisplayId,
        surface: Option<SurfaceHandle>,
        width: u32,
        height: u32,
    ) {
        let entry = self.entry(display);
        let mut entry = entry.lock();
        let DisplayEntry {
            lifecycle,
            session,
            touch,
        } = &mut *entry;

        let transition =
            lifecycle.on_surface_changed(session, surface, DeviceSize::new(width, height));
        if transition.is_some_and(|t| t.device_stopped) {
            touch.reset();
        }
    }

    /// Host destroyed the display's drawable
    pub fn on_surface_destroyed(&self, display: DisplayId, surface: Option<SurfaceHandle>) {
        let entry = self.entry(display);
        let mut entry = entry.lock();
        let DisplayEntry {
            lifecycle,
            session,
            touch,
        } = &mut *entry;

        let transition = lifecycle.on_surface_destroyed(session, surface);
        if transition.is_some_and(|t| t.device_stopped) {
            touch.reset();
        }
    }

    /// Host is tearing the display down
    ///
    /// No-op for the primary display. Any other display is notified once and
    /// retired.
    pub fn on_display_destroyed(&self, display: DisplayId) {
        let entry = self.entry(display);
        let mut entry = entry.lock();
        let DisplayEntry {
            lifecycle,
            session,
            touch,
        } = &mut *entry;

        if lifecycle.on_display_destroyed(session).is_some() {
            touch.reset();
        }
    }

    // === Input ===

    /// Absolute pointer motion
    pub fn motion(&self, display: DisplayId, x: i32, y: i32) -> Delivery {
        self.dispatch(display, InputCommand::Motion { x, y })
    }

    /// Pointer button transition; unmapped host buttons are dropped
    pub fn button(
        &self,
        display: DisplayId,
        host_button: u32,
        x: i32,
        y: i32,
        pressed: bool,
    ) -> Delivery {
        self.dispatch(
            display,
            InputCommand::Button {
                host_button,
                x,
                y,
                pressed,
            },
        )
    }

    /// Single-axis scroll
    pub fn scroll(&self, display: DisplayId, amount: i32, vertical: bool) -> Delivery {
        let event = self.pointer.scroll(display, amount, vertical);
        self.with_entry(display, |entry| entry.session.deliver(event))
    }

    /// Two-axis scroll sample; vertical takes precedence
    pub fn scroll_sample(&self, display: DisplayId, vscroll: f32, hscroll: f32) -> Delivery {
        self.dispatch(display, InputCommand::Scroll { vscroll, hscroll })
    }

    /// Touch contact update for one slot
    pub fn touch(
        &self,
        display: DisplayId,
        slot: i32,
        action: MotionAction,
        pressure: i32,
        x: i32,
        y: i32,
    ) -> Delivery {
        self.dispatch(
            display,
            InputCommand::Touch {
                slot,
                action,
                pressure,
                x,
                y,
            },
        )
    }

    /// Key transition by host key code
    pub fn key(&self, display: DisplayId, host_code: i32, pressed: bool) -> Delivery {
        self.dispatch(display, InputCommand::Key { host_code, pressed })
    }

    /// Route a raw host event through the encoders
    ///
    /// All commands derived from one host event are applied under a single
    /// lock. Returns one outcome per routed command or routing failure.
    pub fn handle_host_event(&self, display: DisplayId, event: &HostEvent) -> Vec<Delivery> {
        let routed = route(display, event);

        let mut outcomes: Vec<Delivery> = routed
            .dropped
            .into_iter()
            .map(|err| self.account(Delivery::Dropped(err)))
            .collect();

        if routed.commands.is_empty() {
            return outcomes;
        }

        match self.admit(display) {
            Ok(entry) => {
                let mut entry = entry.lock();
                for command in routed.commands {
                    let outcome = match self.gate(&entry, display) {
                        Ok(()) => self.apply(&mut entry, display, command),
                        Err(err) => Delivery::Dropped(err),
                    };
                    outcomes.push(self.account(outcome));
                }
            }
            Err(err) => {
                for _ in routed.commands {
                    outcomes.push(self.account(Delivery::Dropped(err.clone())));
                }
            }
        }

        outcomes
    }

    fn dispatch(&self, display: DisplayId, command: InputCommand) -> Delivery {
        self.with_entry(display, |entry| self.apply(entry, display, command))
    }

    fn with_entry<F>(&self, display: DisplayId, f: F) -> Delivery
    where
        F: FnOnce(&mut DisplayEntry) -> Delivery,
    {
        let outcome = match self.admit(display) {
            Ok(entry) => {
                let mut entry = entry.lock();
                match self.gate(&entry, display) {
                    Ok(()) => f(&mut *entry),
                    Err(err) => Delivery::Dropped(err),
                }
            }
            Err(err) => Delivery::Dropped(err),
        };
        self.account(outcome)
    }

    fn admit(&self, display: DisplayId) -> Result<Arc<Mutex<DisplayEntry>>, BridgeError> {
        self.lookup(display).ok_or(BridgeError::NoSurface(display))
    }

    fn gate(&self, entry: &DisplayEntry, display: DisplayId) -> Result<(), BridgeError> {
        if entry.lifecycle.is_retired() {
            return Err(BridgeError::DisplayRetired(display));
        }
        if !entry.lifecycle.state().has_surface() {
            return Err(BridgeError::NoSurface(display));
        }
        if !entry.session.is_active() {
            return Err(BridgeError::DeviceInactive(display));
        }
        Ok(())
    }

    fn apply(&self, entry: &mut DisplayEntry, display: DisplayId, command: InputCommand) -> Delivery {
        let event = match command {
            InputCommand::Motion { x, y } => self.pointer.motion(display, x, y),
            InputCommand::Button {
                host_button,
                x,
                y,
                pressed,
            } => match self.pointer.button(display, host_button, x, y, pressed) {
                Ok(event) => event,
                Err(err) => return Delivery::Dropped(err),
            },
            InputCommand::Scroll { vscroll, hscroll } => {
                match self.pointer.scroll_sample(display, vscroll, hscroll) {
                    Some(event) => event,
                    None => return Delivery::Filtered,
                }
            }
            InputCommand::Touch {
                slot,
                action,
                pressure,
                x,
                y,
            } => match entry.touch.touch(slot, action, pressure, x, y) {
                Some(encoded) => {
                    if let Some(violation) = encoded.violation {
                        report(&violation);
                        self.metrics.incr(metric_names::CONTRACT_VIOLATIONS);
                    }
                    encoded.event
                }
                None => return Delivery::Filtered,
            },
            InputCommand::Key { host_code, pressed } => {
                match self.encode_key(display, host_code, pressed) {
                    Ok(event) => event,
                    Err(err) => return Delivery::Dropped(err),
                }
            }
        };

        entry.session.deliver(event)
    }

    fn encode_key(
        &self,
        display: DisplayId,
        host_code: i32,
        pressed: bool,
    ) -> Result<DeviceEvent, BridgeError> {
        let code = self.keymap.map(host_code);
        if code == UNKNOWN_KEY && !self.config.forward_unknown_keys {
            return Err(BridgeError::UnmappedKey(host_code));
        }

        Ok(DeviceEvent::Key(KeyEvent {
            display,
            code,
            pressed,
        }))
    }

    fn account(&self, outcome: Delivery) -> Delivery {
        match &outcome {
            Delivery::Forwarded => self.metrics.incr(metric_names::INPUT_FORWARDED),
            Delivery::Filtered => self.metrics.incr(metric_names::INPUT_FILTERED),
            Delivery::Dropped(err) => {
                report(err);
                match classify(err) {
                    ErrorClass::UnmappedCode => self.metrics.incr(metric_names::INPUT_UNMAPPED),
                    _ => self.metrics.incr(metric_names::INPUT_DROPPED),
                }
            }
        }
        outcome
    }

    // === Queries ===

    /// Whether the display's input device is running
    pub fn is_device_active(&self, display: DisplayId) -> bool {
        self.lookup(display)
            .is_some_and(|entry| entry.lock().session.is_active())
    }

    /// Last configured device size for the display
    pub fn device_size(&self, display: DisplayId) -> Option<DeviceSize> {
        self.lookup(display)
            .and_then(|entry| entry.lock().session.size())
    }

    /// Surface state for the display, if it has been seen
    pub fn surface_state(&self, display: DisplayId) -> Option<SurfaceState> {
        self.lookup(display)
            .map(|entry| entry.lock().lifecycle.state())
    }

    /// Whether the display has been destroyed
    pub fn is_retired(&self, display: DisplayId) -> bool {
        self.lookup(display)
            .is_some_and(|entry| entry.lock().lifecycle.is_retired())
    }

    /// Touch slots currently down on the display
    pub fn active_touch_slots(&self, display: DisplayId) -> Vec<i32> {
        self.lookup(display)
            .map(|entry| entry.lock().touch.active_slots())
            .unwrap_or_default()
    }

    /// Displays seen so far, ascending
    pub fn display_ids(&self) -> Vec<DisplayId> {
        let mut ids: Vec<DisplayId> = self.displays.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl std::fmt::Debug for DisplayBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayBridge")
            .field("config", &self.config)
            .field("displays", &self.display_ids())
            .finish_non_exhaustive()
    }
}
