#![forbid(unsafe_code)]

//! Core: gravity conventions, display state, and offset geometry for
//! slide-out panels.
//!
//! # Role in the workspace
//! `slideout-core` is the pure engine. It knows nothing about rendering,
//! animation playback, or hosts; it maps `(gravity, state, anchor,
//! extent)` to a concrete translation offset and owns the small state
//! machine behind a panel's HIDDEN / ANCHORED / EXPANDED lifecycle.
//!
//! # Primary responsibilities
//! - **Gravity**: the four slide directions with their axis and sign
//!   conventions.
//! - **DisplayState / PanelState**: the three resting positions and the
//!   transition rules between them, including anchor validation.
//! - **Geometry**: the single shared offset formula for all four edges.
//! - **Motion**: duration + easing descriptors for animation requests.
//!
//! # How it fits in the system
//! The widget layer (`slideout-panel`) drives this engine and hands the
//! resulting offsets to an external rendering host. Everything here is
//! deterministic and side-effect free.

pub mod error;
pub mod geometry;
pub mod gravity;
pub mod motion;
pub mod state;

pub use error::{AnchorError, MountError};
pub use geometry::{Size, offset_for};
pub use gravity::{Axis, Gravity};
pub use motion::{Easing, Motion};
pub use state::{Anchor, DisplayState, PanelState};
