//! Integration tests for the panel orchestration flow.
//!
//! These exercise the public API end to end with a scripted host:
//! mount, state transitions, anchor repositioning, gravity switching,
//! and the save/restore round trip, checking the notification protocol
//! along the way.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use slideout_core::{Anchor, Axis, DisplayState, Gravity, Size, offset_for};
use slideout_panel::{OffsetAnimation, PanelConfig, PanelHost, PanelSnapshot, SlideOutPanel};

/// Scripted host: records placements, queues animation requests, and
/// settles them on demand.
struct SpyHost {
    size: Size,
    x: f32,
    y: f32,
    children: usize,
    placements: Vec<(Axis, f32)>,
    pending: Vec<OffsetAnimation>,
}

impl SpyHost {
    fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            x: 0.0,
            y: 0.0,
            children: 1,
            placements: Vec::new(),
            pending: Vec::new(),
        }
    }

    fn settle_all(&mut self, panel: &mut SlideOutPanel) {
        while !self.pending.is_empty() {
            let request = self.pending.remove(0);
            match request.axis {
                Axis::Horizontal => self.x = request.to,
                Axis::Vertical => self.y = request.to,
            }
            panel.finish_transition(request.completion);
        }
    }
}

impl PanelHost for SpyHost {
    fn measure(&self) -> Size {
        self.size
    }

    fn child_count(&self) -> usize {
        self.children
    }

    fn offset(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    fn set_offset(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.x = value,
            Axis::Vertical => self.y = value,
        }
        self.placements.push((axis, value));
    }

    fn animate_offset(&mut self, request: OffsetAnimation) {
        self.pending.push(request);
    }
}

#[test]
fn full_lifecycle_bottom_panel() {
    let mut panel = SlideOutPanel::new(PanelConfig::new(Gravity::Bottom).anchor(0.3)).unwrap();
    let mut host = SpyHost::new(400.0, 800.0);

    panel.mount(&mut host).unwrap();
    assert_eq!(host.y, 800.0, "mounted hidden off the bottom edge");

    panel.request_state(&mut host, DisplayState::Expanded);
    host.settle_all(&mut panel);
    assert_eq!(host.y, 0.0);

    panel.request_state(&mut host, DisplayState::Anchored);
    host.settle_all(&mut panel);
    assert_eq!(host.y, 800.0 * 0.7);

    panel.toggle(&mut host);
    host.settle_all(&mut panel);
    assert_eq!(panel.current_state(), DisplayState::Hidden);
    assert_eq!(host.y, 800.0);
}

#[test]
fn notification_protocol_across_transitions() {
    let mut panel = SlideOutPanel::new(PanelConfig::new(Gravity::Right)).unwrap();
    let mut host = SpyHost::new(320.0, 600.0);

    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    panel.subscribe_change(move |prev, cur| sink.borrow_mut().push(("change", prev, cur)));
    let sink = Rc::clone(&log);
    panel.subscribe_animation_finished(move |prev, cur| {
        sink.borrow_mut().push(("finished", prev, cur));
    });

    panel.request_state(&mut host, DisplayState::Expanded);
    host.settle_all(&mut panel);
    panel.request_state(&mut host, DisplayState::Hidden);
    host.settle_all(&mut panel);

    assert_eq!(
        log.borrow().as_slice(),
        &[
            ("change", DisplayState::Hidden, DisplayState::Expanded),
            ("finished", DisplayState::Hidden, DisplayState::Expanded),
            ("change", DisplayState::Expanded, DisplayState::Hidden),
            ("finished", DisplayState::Expanded, DisplayState::Hidden),
        ]
    );
}

#[test]
fn horizontal_edges_animate_the_x_axis() {
    for (gravity, expected) in [(Gravity::Left, -320.0), (Gravity::Right, 320.0)] {
        let mut panel = SlideOutPanel::new(
            PanelConfig::new(gravity).initial_state(DisplayState::Expanded),
        )
        .unwrap();
        let mut host = SpyHost::new(320.0, 600.0);
        panel.mount(&mut host).unwrap();

        panel.request_state(&mut host, DisplayState::Hidden);
        assert_eq!(host.pending.len(), 1);
        assert_eq!(host.pending[0].axis, Axis::Horizontal);
        assert_eq!(host.pending[0].to, expected);
    }
}

#[test]
fn gravity_switch_mid_flight_is_instantaneous() {
    let mut panel = SlideOutPanel::new(
        PanelConfig::new(Gravity::Bottom)
            .initial_state(DisplayState::Anchored)
            .anchor(0.5),
    )
    .unwrap();
    let mut host = SpyHost::new(200.0, 400.0);
    panel.mount(&mut host).unwrap();
    assert_eq!(host.y, 200.0);

    panel.set_gravity(&mut host, Gravity::Right);

    assert_eq!(host.y, 0.0, "old axis reset to neutral");
    assert_eq!(host.x, 100.0, "anchored offset on the new axis");
    assert!(host.pending.is_empty(), "no animation for a gravity switch");
}

#[test]
fn anchor_reposition_keeps_state() {
    let mut panel = SlideOutPanel::new(
        PanelConfig::new(Gravity::Top)
            .initial_state(DisplayState::Anchored)
            .anchor(0.2),
    )
    .unwrap();
    let mut host = SpyHost::new(300.0, 500.0);
    panel.mount(&mut host).unwrap();

    panel.request_anchor(&mut host, 0.8, true).unwrap();
    host.settle_all(&mut panel);

    assert_eq!(panel.current_state(), DisplayState::Anchored);
    // -height * (1 - 0.8), up to f32 rounding of the fraction.
    assert!((host.y - (-100.0)).abs() < 1e-3, "y = {}", host.y);
}

#[test]
fn save_restore_round_trip_replays_placement() {
    let mut panel = SlideOutPanel::new(PanelConfig::new(Gravity::Left).anchor(0.4)).unwrap();
    let mut host = SpyHost::new(250.0, 600.0);
    panel.mount(&mut host).unwrap();
    panel.request_state(&mut host, DisplayState::Anchored);
    host.settle_all(&mut panel);

    let saved = panel.snapshot();

    // A fresh widget after a lifecycle boundary.
    let mut revived = SlideOutPanel::new(PanelConfig::default()).unwrap();
    let mut fresh_host = SpyHost::new(250.0, 600.0);
    revived.restore(&mut fresh_host, saved).unwrap();

    assert_eq!(revived.gravity(), Gravity::Left);
    assert_eq!(revived.current_state(), DisplayState::Anchored);
    assert_eq!(revived.anchor(), 0.4);
    assert_eq!(fresh_host.x, host.x);
    assert!(fresh_host.pending.is_empty());
}

#[test]
fn snapshot_is_plain_data() {
    let snapshot = PanelSnapshot {
        gravity: 1,
        state: 2,
        anchor: 0.0,
    };
    let copy = snapshot;
    assert_eq!(copy, snapshot);
}

// ── Property tests ──────────────────────────────────────────────────────

fn gravity_strategy() -> impl Strategy<Value = Gravity> {
    prop_oneof![
        Just(Gravity::Top),
        Just(Gravity::Bottom),
        Just(Gravity::Left),
        Just(Gravity::Right),
    ]
}

fn state_strategy() -> impl Strategy<Value = DisplayState> {
    prop_oneof![
        Just(DisplayState::Hidden),
        Just(DisplayState::Anchored),
        Just(DisplayState::Expanded),
    ]
}

proptest! {
    /// After any request sequence, the last dispatched target matches
    /// the pure geometry for the panel's current state, and settling
    /// everything fires exactly one finished notification per request.
    #[test]
    fn request_sequences_stay_consistent(
        gravity in gravity_strategy(),
        anchor in 0.0f32..=1.0,
        states in prop::collection::vec(state_strategy(), 1..12),
    ) {
        let mut panel = SlideOutPanel::new(PanelConfig::new(gravity).anchor(anchor)).unwrap();
        let mut host = SpyHost::new(333.0, 777.0);

        let finished = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&finished);
        panel.subscribe_animation_finished(move |_, _| *sink.borrow_mut() += 1);

        for &state in &states {
            panel.request_state(&mut host, state);
        }

        let last = states[states.len() - 1];
        prop_assert_eq!(panel.current_state(), last);

        let extent = host.measure().extent_along(gravity.axis());
        let expected = offset_for(gravity, last, Anchor::new(anchor).unwrap(), extent);
        prop_assert_eq!(host.pending.last().unwrap().to, expected);

        host.settle_all(&mut panel);
        prop_assert_eq!(*finished.borrow(), states.len());
    }
}
