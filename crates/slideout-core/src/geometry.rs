#![forbid(unsafe_code)]

//! Offset geometry: where a panel's visual sits for a given state.
//!
//! One shared formula, parameterized by the gravity's sign, covers all
//! four edges:
//!
//! - hidden → the full signed off-screen extent,
//! - expanded → `0.0`,
//! - anchored → `signed_extent * (1 - anchor)`.
//!
//! Anchored with anchor 0 coincides with hidden; anchor 1 coincides
//! with expanded; intermediate anchors interpolate linearly.

use crate::gravity::{Axis, Gravity};
use crate::state::{Anchor, DisplayState};

/// Container extent in host units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a size.
    #[inline]
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The extent along a translation axis.
    #[inline]
    #[must_use]
    pub const fn extent_along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Translation offset for a panel in `state`, given the container
/// extent along the gravity's axis.
///
/// Pure and total over the three states, anchors in `[0, 1]`, and
/// non-negative extents.
#[inline]
#[must_use]
pub fn offset_for(gravity: Gravity, state: DisplayState, anchor: Anchor, extent: f32) -> f32 {
    match state {
        DisplayState::Hidden => gravity.signed_extent(extent),
        DisplayState::Expanded => 0.0,
        DisplayState::Anchored => gravity.signed_extent(extent) * (1.0 - anchor.value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(value: f32) -> Anchor {
        Anchor::new(value).unwrap()
    }

    #[test]
    fn hidden_offsets_per_edge() {
        let a = Anchor::default();
        assert_eq!(
            offset_for(Gravity::Bottom, DisplayState::Hidden, a, 100.0),
            100.0
        );
        assert_eq!(
            offset_for(Gravity::Top, DisplayState::Hidden, a, 100.0),
            -100.0
        );
        assert_eq!(offset_for(Gravity::Left, DisplayState::Hidden, a, 50.0), -50.0);
        assert_eq!(offset_for(Gravity::Right, DisplayState::Hidden, a, 50.0), 50.0);
    }

    #[test]
    fn expanded_is_zero_for_all_edges() {
        for g in Gravity::ALL {
            assert_eq!(offset_for(g, DisplayState::Expanded, anchor(0.4), 123.0), 0.0);
        }
    }

    #[test]
    fn anchored_interpolates() {
        assert_eq!(
            offset_for(Gravity::Bottom, DisplayState::Anchored, anchor(0.3), 200.0),
            140.0
        );
        assert_eq!(
            offset_for(Gravity::Top, DisplayState::Anchored, anchor(0.3), 200.0),
            -140.0
        );
    }

    #[test]
    fn anchored_zero_matches_hidden() {
        for g in Gravity::ALL {
            assert_eq!(
                offset_for(g, DisplayState::Anchored, anchor(0.0), 80.0),
                offset_for(g, DisplayState::Hidden, anchor(0.0), 80.0)
            );
        }
    }

    #[test]
    fn anchored_one_matches_expanded() {
        for g in Gravity::ALL {
            assert_eq!(offset_for(g, DisplayState::Anchored, anchor(1.0), 80.0), 0.0);
        }
    }

    #[test]
    fn extent_along_axis() {
        let size = Size::new(30.0, 40.0);
        assert_eq!(size.extent_along(Axis::Horizontal), 30.0);
        assert_eq!(size.extent_along(Axis::Vertical), 40.0);
    }
}
