#![forbid(unsafe_code)]

//! Display states and the panel state machine.
//!
//! A panel rests in one of three positions: hidden (fully off-screen),
//! anchored (partially visible), or expanded (fully visible).
//! [`PanelState`] tracks the current and previous position plus the
//! anchor fraction, and defines the transition rules.
//!
//! # Invariants
//!
//! 1. `previous` is always the state immediately before the last
//!    transition; right after construction, `previous == current`.
//! 2. The stored anchor is always inside `[0.0, 1.0]` — a rejected
//!    [`set_anchor`](PanelState::set_anchor) retains the prior value.
//! 3. `set_state` is total: every state can transition to every state,
//!    and there is no terminal state.
//! 4. `toggle` is asymmetric by design: anchored and expanded both
//!    collapse to hidden, only hidden expands. "If anything is showing,
//!    hide it; if hidden, show it fully."

use crate::error::AnchorError;

// ---------------------------------------------------------------------------
// DisplayState
// ---------------------------------------------------------------------------

/// The three resting positions of a panel.
///
/// Ordinals (0 = hidden, 1 = anchored, 2 = expanded) are stable and used
/// for serialized-state compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayState {
    /// Fully off-screen.
    Hidden = 0,
    /// Partially visible at the anchor fraction.
    Anchored = 1,
    /// Fully visible.
    Expanded = 2,
}

impl DisplayState {
    /// Stable ordinal for persistence.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// Decode a persisted ordinal.
    ///
    /// Total: unknown ordinals decode as [`DisplayState::Expanded`].
    #[inline]
    #[must_use]
    pub const fn from_ordinal(value: i32) -> Self {
        match value {
            0 => DisplayState::Hidden,
            1 => DisplayState::Anchored,
            _ => DisplayState::Expanded,
        }
    }

    /// The state a toggle moves to from `self`.
    ///
    /// Hidden expands; anchored and expanded both collapse to hidden.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            DisplayState::Hidden => DisplayState::Expanded,
            DisplayState::Anchored | DisplayState::Expanded => DisplayState::Hidden,
        }
    }
}

// ---------------------------------------------------------------------------
// Anchor
// ---------------------------------------------------------------------------

/// Fraction of the panel's extent kept visible when anchored.
///
/// Validated at construction: values outside `[0.0, 1.0]` (NaN included)
/// are rejected rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor(f32);

impl Anchor {
    /// Create a validated anchor.
    pub fn new(value: f32) -> Result<Self, AnchorError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AnchorError::OutOfRange { value })
        }
    }

    /// The anchor fraction.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl Default for Anchor {
    /// Zero: an anchored panel with the default anchor sits fully
    /// off-screen, matching a hidden one.
    fn default() -> Self {
        Self(0.0)
    }
}

// ---------------------------------------------------------------------------
// PanelState
// ---------------------------------------------------------------------------

/// Current/previous display state plus the anchor fraction.
///
/// Owned by one panel instance; mutated only through its validated
/// operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelState {
    current: DisplayState,
    previous: DisplayState,
    anchor: Anchor,
}

impl PanelState {
    /// Create a machine resting in `initial` with the given anchor.
    #[must_use]
    pub const fn new(initial: DisplayState, anchor: Anchor) -> Self {
        Self {
            current: initial,
            previous: initial,
            anchor,
        }
    }

    /// Transition to `new`, recording the outgoing state.
    ///
    /// Total over the three states. Returns the `(previous, current)`
    /// pair for notification payloads.
    pub fn set_state(&mut self, new: DisplayState) -> (DisplayState, DisplayState) {
        self.previous = self.current;
        self.current = new;
        (self.previous, self.current)
    }

    /// Apply the toggle rule: hidden expands, anything showing hides.
    pub fn toggle(&mut self) -> (DisplayState, DisplayState) {
        self.set_state(self.current.toggled())
    }

    /// Store a new anchor fraction.
    ///
    /// Rejects values outside `[0.0, 1.0]`; the prior anchor is retained
    /// on failure. Does not by itself trigger a transition.
    pub fn set_anchor(&mut self, value: f32) -> Result<(), AnchorError> {
        self.anchor = Anchor::new(value)?;
        Ok(())
    }

    /// Current display state.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> DisplayState {
        self.current
    }

    /// State immediately before the last transition.
    #[inline]
    #[must_use]
    pub const fn previous(&self) -> DisplayState {
        self.previous
    }

    /// Current anchor.
    #[inline]
    #[must_use]
    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
