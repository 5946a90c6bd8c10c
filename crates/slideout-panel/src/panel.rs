#![forbid(unsafe_code)]

//! The transition orchestrator.
//!
//! [`SlideOutPanel`] sequences the state machine, the offset geometry,
//! the listener registries, and the external host into coherent
//! operations. The canonical "set new display state" flow:
//!
//! 1. machine records `previous = current; current = new`,
//! 2. change listeners fire synchronously,
//! 3. the target offset is computed for the new state,
//! 4. an animation request is dispatched to the host,
//! 5. the host later hands the request's token back to
//!    [`finish_transition`](SlideOutPanel::finish_transition), firing
//!    the animation-finished listeners.
//!
//! # Invariants
//!
//! 1. Change notifications for a request always fire before that
//!    request's finished notification.
//! 2. `request_state`, `toggle`, and `set_gravity` are total and never
//!    fail; only anchor writes and mounting validate.
//! 3. Gravity switches and mounting are hard cuts: synchronous
//!    placement, no animation, no notifications.
//! 4. No operation blocks waiting for an animation to complete.
//!
//! # Failure Modes
//!
//! - Anchor outside `[0, 1]` at construction or on `request_anchor`:
//!   rejected with [`AnchorError`], prior value retained.
//! - Host with a child count other than one at mount: [`MountError`],
//!   rendering cannot proceed.

use slideout_core::{
    Anchor, AnchorError, DisplayState, Gravity, Motion, MountError, PanelState, offset_for,
};

use crate::host::{OffsetAnimation, PanelHost, TransitionToken};
use crate::listener::{ListenerKey, StateListeners};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Initial configuration for a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    pub gravity: Gravity,
    pub initial_state: DisplayState,
    pub anchor: f32,
    pub motion: Motion,
}

impl PanelConfig {
    /// Config sliding from `gravity`, initially hidden, anchor 0,
    /// default motion.
    #[must_use]
    pub fn new(gravity: Gravity) -> Self {
        Self {
            gravity,
            initial_state: DisplayState::Hidden,
            anchor: 0.0,
            motion: Motion::default(),
        }
    }

    /// Set the initial display state (builder pattern).
    #[must_use]
    pub const fn initial_state(mut self, state: DisplayState) -> Self {
        self.initial_state = state;
        self
    }

    /// Set the initial anchor fraction (builder pattern).
    ///
    /// Validated when the panel is constructed.
    #[must_use]
    pub const fn anchor(mut self, anchor: f32) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the transition motion (builder pattern).
    #[must_use]
    pub const fn motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new(Gravity::Bottom)
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Lifecycle save/restore payload: gravity int representation, state
/// ordinal, and anchor fraction.
///
/// The host persists this across process boundaries and replays it via
/// [`SlideOutPanel::restore`], which re-places the visual without
/// firing notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "state-persistence", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelSnapshot {
    pub gravity: i32,
    pub state: i32,
    pub anchor: f32,
}

// ---------------------------------------------------------------------------
// SlideOutPanel
// ---------------------------------------------------------------------------

/// A draggable slide-out panel's state/gravity/anchor engine.
///
/// Owns the state machine and both listener registries; drives an
/// external [`PanelHost`] that owns the visual.
#[derive(Debug)]
pub struct SlideOutPanel {
    gravity: Gravity,
    machine: PanelState,
    motion: Motion,
    change_listeners: StateListeners,
    finished_listeners: StateListeners,
}

impl SlideOutPanel {
    /// Create a panel from its initial configuration.
    ///
    /// Fails if the configured anchor is outside `[0, 1]` — there is no
    /// valid default to substitute for a bad initial anchor.
    pub fn new(config: PanelConfig) -> Result<Self, AnchorError> {
        let anchor = Anchor::new(config.anchor)?;
        Ok(Self {
            gravity: config.gravity,
            machine: PanelState::new(config.initial_state, anchor),
            motion: config.motion,
            change_listeners: StateListeners::new(),
            finished_listeners: StateListeners::new(),
        })
    }

    // -- orchestration ------------------------------------------------------

    /// First-layout placement.
    ///
    /// Validates that the host owns exactly one child visual, then
    /// places it at the configured state's offset synchronously. No
    /// animation, no notifications: the panel appears in its initial
    /// state without any transition ceremony.
    pub fn mount(&mut self, host: &mut impl PanelHost) -> Result<(), MountError> {
        let found = host.child_count();
        if found != 1 {
            return Err(MountError::InvalidChildCount { found });
        }
        self.place_immediate(host);
        Ok(())
    }

    /// Transition to a new display state.
    ///
    /// Fires change listeners synchronously, then dispatches the
    /// animated move to the host and returns immediately.
    pub fn request_state(&mut self, host: &mut impl PanelHost, new: DisplayState) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("panel_request_state", state = ?new).entered();

        let (previous, current) = self.machine.set_state(new);
        self.change_listeners.notify_all(previous, current);
        self.animate_to_current(host, previous, current);
    }

    /// Apply the toggle rule: hidden expands, anything showing hides.
    pub fn toggle(&mut self, host: &mut impl PanelHost) {
        self.request_state(host, self.machine.current().toggled());
    }

    /// Store a new anchor fraction.
    ///
    /// Rejects values outside `[0, 1]`, retaining the prior anchor.
    /// When `apply_changes` is true the panel also re-runs the animated
    /// placement for the *current* (unchanged) display state, so a
    /// caller can reposition an anchored panel without a state change.
    pub fn request_anchor(
        &mut self,
        host: &mut impl PanelHost,
        value: f32,
        apply_changes: bool,
    ) -> Result<(), AnchorError> {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("panel_request_anchor", anchor = value, apply_changes).entered();

        self.machine.set_anchor(value)?;
        if apply_changes {
            self.animate_to_current(host, self.machine.previous(), self.machine.current());
        }
        Ok(())
    }

    /// Switch the slide edge.
    ///
    /// A hard cut, not an animated transition: the old axis offset is
    /// reset to neutral and the visual is immediately placed at the new
    /// edge's offset for the current state. No notifications fire.
    pub fn set_gravity(&mut self, host: &mut impl PanelHost, new: Gravity) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("panel_set_gravity", gravity = ?new).entered();

        host.set_offset(self.gravity.axis(), 0.0);
        self.gravity = new;
        self.place_immediate(host);
    }

    /// Complete an animated transition.
    ///
    /// Called by the host exactly once per animation request, when the
    /// visual has settled. Fires the animation-finished listeners with
    /// the token's transition pair.
    pub fn finish_transition(&mut self, token: TransitionToken) {
        self.finished_listeners
            .notify_all(token.previous(), token.current());
    }

    // -- subscriptions ------------------------------------------------------

    /// Subscribe to synchronous state-change notifications.
    pub fn subscribe_change(
        &mut self,
        callback: impl FnMut(DisplayState, DisplayState) + 'static,
    ) -> ListenerKey {
        self.change_listeners.subscribe(callback)
    }

    /// Subscribe to state-change notifications under a caller key.
    pub fn subscribe_change_keyed(
        &mut self,
        key: ListenerKey,
        callback: impl FnMut(DisplayState, DisplayState) + 'static,
    ) {
        self.change_listeners.subscribe_keyed(key, callback);
    }

    /// Remove a state-change subscriber. No-op for absent keys.
    pub fn unsubscribe_change(&mut self, key: &ListenerKey) -> bool {
        self.change_listeners.unsubscribe(key)
    }

    /// Subscribe to animation-finished notifications.
    pub fn subscribe_animation_finished(
        &mut self,
        callback: impl FnMut(DisplayState, DisplayState) + 'static,
    ) -> ListenerKey {
        self.finished_listeners.subscribe(callback)
    }

    /// Subscribe to animation-finished notifications under a caller key.
    pub fn subscribe_animation_finished_keyed(
        &mut self,
        key: ListenerKey,
        callback: impl FnMut(DisplayState, DisplayState) + 'static,
    ) {
        self.finished_listeners.subscribe_keyed(key, callback);
    }

    /// Remove an animation-finished subscriber. No-op for absent keys.
    pub fn unsubscribe_animation_finished(&mut self, key: &ListenerKey) -> bool {
        self.finished_listeners.unsubscribe(key)
    }

    // -- accessors ----------------------------------------------------------

    /// Current display state.
    #[must_use]
    pub const fn current_state(&self) -> DisplayState {
        self.machine.current()
    }

    /// State before the last transition.
    #[must_use]
    pub const fn previous_state(&self) -> DisplayState {
        self.machine.previous()
    }

    /// Current anchor fraction.
    #[must_use]
    pub const fn anchor(&self) -> f32 {
        self.machine.anchor().value()
    }

    /// Current slide edge.
    #[must_use]
    pub const fn gravity(&self) -> Gravity {
        self.gravity
    }

    /// Motion used for animated transitions.
    #[must_use]
    pub const fn motion(&self) -> Motion {
        self.motion
    }

    /// Replace the motion used for animated transitions.
    pub fn set_motion(&mut self, motion: Motion) {
        self.motion = motion;
    }

    // -- persistence --------------------------------------------------------

    /// Capture the state the host must persist across lifecycle
    /// boundaries.
    #[must_use]
    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            gravity: self.gravity.to_int(),
            state: self.machine.current().ordinal(),
            anchor: self.anchor(),
        }
    }

    /// Replay a persisted snapshot.
    ///
    /// Decodes with the total-function fallbacks (unknown gravity →
    /// right, unknown state → expanded), validates the anchor, and
    /// re-places the visual synchronously. No notifications fire.
    pub fn restore(
        &mut self,
        host: &mut impl PanelHost,
        snapshot: PanelSnapshot,
    ) -> Result<(), AnchorError> {
        let anchor = Anchor::new(snapshot.anchor)?;
        self.gravity = Gravity::from_int(snapshot.gravity);
        self.machine = PanelState::new(DisplayState::from_ordinal(snapshot.state), anchor);
        self.place_immediate(host);
        Ok(())
    }

    // -- internals ----------------------------------------------------------

    /// Steps 3–4 of the transition flow: compute the target offset and
    /// dispatch the animated move with a fresh completion token.
    fn animate_to_current(
        &mut self,
        host: &mut impl PanelHost,
        previous: DisplayState,
        current: DisplayState,
    ) {
        let axis = self.gravity.axis();
        let extent = host.measure().extent_along(axis);
        let target = offset_for(self.gravity, current, self.machine.anchor(), extent);
        host.animate_offset(OffsetAnimation {
            axis,
            from: host.offset(axis),
            to: target,
            motion: self.motion,
            completion: TransitionToken::new(previous, current),
        });
    }

    /// Synchronous placement at the current state's offset.
    fn place_immediate(&self, host: &mut impl PanelHost) {
        let axis = self.gravity.axis();
        let extent = host.measure().extent_along(axis);
        let target =
            offset_for(self.gravity, self.machine.current(), self.machine.anchor(), extent);
        host.set_offset(axis, target);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
