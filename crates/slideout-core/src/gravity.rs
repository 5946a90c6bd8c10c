#![forbid(unsafe_code)]

//! Slide directions and their axis/sign conventions.
//!
//! A panel slides in from one container edge. The edge determines both
//! the translation axis (horizontal for left/right, vertical for
//! top/bottom) and the sign of the off-screen offset: bottom and right
//! move content in the positive axis direction, top and left in the
//! negative one. The sign convention is load-bearing — it defines which
//! direction "off-screen" is for every edge.

/// Translation axis for a slide direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Translation along x (left/right gravities).
    Horizontal,
    /// Translation along y (top/bottom gravities).
    Vertical,
}

/// The container edge a panel slides out from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gravity {
    /// Slides down from the top edge; off-screen offsets are negative.
    Top,
    /// Slides up from the bottom edge; off-screen offsets are positive.
    Bottom,
    /// Slides in from the left edge; off-screen offsets are negative.
    Left,
    /// Slides in from the right edge; off-screen offsets are positive.
    Right,
}

impl Gravity {
    /// All gravities, in int-representation order.
    pub const ALL: [Gravity; 4] = [Gravity::Top, Gravity::Bottom, Gravity::Left, Gravity::Right];

    /// The translation axis this gravity moves the visual along.
    #[inline]
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Gravity::Top | Gravity::Bottom => Axis::Vertical,
            Gravity::Left | Gravity::Right => Axis::Horizontal,
        }
    }

    /// The fully off-screen offset for a container extent along this
    /// gravity's axis.
    ///
    /// Bottom/right are positive, top/left negative.
    #[inline]
    #[must_use]
    pub const fn signed_extent(self, extent: f32) -> f32 {
        match self {
            Gravity::Bottom | Gravity::Right => extent,
            Gravity::Top | Gravity::Left => -extent,
        }
    }

    /// Stable integer representation for persistence.
    #[inline]
    #[must_use]
    pub const fn to_int(self) -> i32 {
        match self {
            Gravity::Top => 0,
            Gravity::Bottom => 1,
            Gravity::Left => 2,
            Gravity::Right => 3,
        }
    }

    /// Decode a persisted integer representation.
    ///
    /// Total: unknown values decode as [`Gravity::Right`].
    #[inline]
    #[must_use]
    pub const fn from_int(value: i32) -> Self {
        match value {
            0 => Gravity::Top,
            1 => Gravity::Bottom,
            2 => Gravity::Left,
            _ => Gravity::Right,
        }
    }
}
