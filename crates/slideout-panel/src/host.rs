#![forbid(unsafe_code)]

//! The seam between the panel engine and its rendering host.
//!
//! The engine computes target offsets; the host owns the visual and
//! plays transitions. Animated moves are fire-and-forget: the panel
//! hands the host an [`OffsetAnimation`] carrying a single-shot
//! [`TransitionToken`], and the host returns the token to
//! [`SlideOutPanel::finish_transition`](crate::SlideOutPanel::finish_transition)
//! exactly once when the visual transition ends. The token is
//! deliberately not `Clone`: "exactly once" is enforced by move
//! semantics. Dropping a token without finishing is allowed and means
//! the finished listeners for that transition never fire (a superseded
//! or cancelled animation).

use slideout_core::{Axis, DisplayState, Motion, Size};

/// Single-shot completion handle for one animated transition.
///
/// Carries the `(previous, current)` pair the finished listeners will
/// be invoked with.
#[derive(Debug, PartialEq, Eq)]
pub struct TransitionToken {
    previous: DisplayState,
    current: DisplayState,
}

impl TransitionToken {
    pub(crate) const fn new(previous: DisplayState, current: DisplayState) -> Self {
        Self { previous, current }
    }

    /// State before the transition this token belongs to.
    #[must_use]
    pub const fn previous(&self) -> DisplayState {
        self.previous
    }

    /// State after the transition this token belongs to.
    #[must_use]
    pub const fn current(&self) -> DisplayState {
        self.current
    }
}

/// A fire-and-forget request to animate the visual's offset.
#[derive(Debug)]
pub struct OffsetAnimation {
    /// Which translation axis to animate.
    pub axis: Axis,
    /// The visual's offset when the request was issued.
    pub from: f32,
    /// Target offset.
    pub to: f32,
    /// Duration and easing for the transition.
    pub motion: Motion,
    /// Hand back to `finish_transition` when the visual settles.
    pub completion: TransitionToken,
}

/// The rendering host a panel drives.
///
/// Implementations own the visual: they know its size, current
/// translation, and how to move it. All methods are called on the UI
/// thread and must not block.
pub trait PanelHost {
    /// Current container extent.
    fn measure(&self) -> Size;

    /// Number of child visuals the panel owns. Checked once at mount;
    /// must be exactly one.
    fn child_count(&self) -> usize;

    /// Current visual offset along an axis.
    fn offset(&self, axis: Axis) -> f32;

    /// Place the visual synchronously, without animation.
    fn set_offset(&mut self, axis: Axis, value: f32);

    /// Start an animated move. The host decides what happens to any
    /// in-flight animation on the same axis (supersede, cancel); the
    /// panel never serializes overlapping requests.
    fn animate_offset(&mut self, request: OffsetAnimation);
}
