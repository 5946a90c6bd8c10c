#![forbid(unsafe_code)]

//! Motion descriptors for animation requests.
//!
//! The engine never plays animations; it hands the host a [`Motion`]
//! (duration + easing curve) alongside the target offset and the host
//! drives the actual transition.

use std::time::Duration;

/// Easing curve applied to a normalized time `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Accelerate from rest.
    EaseIn,
    /// Decelerate into the target.
    EaseOut,
    /// Accelerate then decelerate (fast-out-slow-in feel).
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map normalized time to eased progress.
    ///
    /// Input is clamped to `[0, 1]`; output stays in `[0, 1]` with
    /// `apply(0) == 0` and `apply(1) == 1` for every curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

/// Duration and easing for one offset transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub duration: Duration,
    pub easing: Easing,
}

impl Motion {
    /// Create a motion descriptor.
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }
}

impl Default for Motion {
    /// 700 ms with ease-in-out.
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(700),
            easing: Easing::EaseInOut,
        }
    }
}
