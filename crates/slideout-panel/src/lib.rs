#![forbid(unsafe_code)]

//! Slide-out panel widget: transition orchestration over a host-rendered
//! visual.
//!
//! # Role in the workspace
//! `slideout-panel` owns the widget-facing surface. It sequences the
//! `slideout-core` state machine and geometry into coherent operations
//! (set state, toggle, re-anchor, switch gravity), fans state changes
//! out to keyed listeners, and delegates the actual visual work to an
//! external [`PanelHost`].
//!
//! # Primary responsibilities
//! - **SlideOutPanel**: the transition orchestrator.
//! - **PanelHost**: the seam to the rendering host (measure, place,
//!   animate).
//! - **StateListeners**: keyed subscriber registries for "state changed"
//!   and "animation finished" notifications.
//! - **PanelSnapshot**: the lifecycle save/restore payload.
//!
//! # Threading
//! Single-threaded by design: every operation runs on the host's UI
//! thread and returns without blocking. A multi-threaded host must add
//! its own synchronization at the boundary.

pub mod host;
pub mod listener;
pub mod panel;

pub use host::{OffsetAnimation, PanelHost, TransitionToken};
pub use listener::{ListenerKey, StateListeners};
pub use panel::{PanelConfig, PanelSnapshot, SlideOutPanel};
