// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced hover controller.
//!
//! ## States
//!
//! `Idle → PendingShow → Shown → PendingHide → Idle`, with these shortcuts:
//!
//! - entering another node while a show is pending restarts the show timer
//!   for the new node;
//! - re-entering the shown node while its hide is pending cancels the hide
//!   and returns to `Shown`;
//! - leaving before a show timer fires cancels it, so the popover never appears.
//!
//! Show and hide are both delayed. This keeps the popover steady while the
//! pointer sweeps across adjacent nodes or crosses the gap between a node and
//! its popover.
//!
//! ## Time
//!
//! The controller owns its timers but not a clock. Callers pass a monotonic
//! `now` with every event and either call [`HoverController::poll`] (for frame
//! loops) or arm one host timer at [`HoverController::next_deadline`] and hand
//! its token back to [`HoverController::fire`]. At most one timer is live at a
//! time: a show and a hide timer never coexist.

use core::time::Duration;

use forkline_paths::{Node, NodeId, Topology};
use kurbo::Point;

use crate::anchor::{PlacementConfig, SurfaceMetrics, position_anchor};
use crate::popover::{PopoverCatalog, PopoverLayout};

/// Delays and placement tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverConfig {
    /// Delay between pointer entering a node and its popover appearing.
    pub show_delay: Duration,
    /// Delay between pointer leaving and the popover disappearing.
    pub hide_delay: Duration,
    /// Anchor placement tunables.
    pub placement: PlacementConfig,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            show_delay: Duration::from_millis(120),
            hide_delay: Duration::from_millis(120),
            placement: PlacementConfig::default(),
        }
    }
}

/// Identifies one armed timer. Tokens are never reused by a controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Which kind of timer a token belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires to show a popover.
    Show,
    /// Fires to hide the visible popover.
    Hide,
}

/// The outstanding timer, for hosts that drive real timers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PendingTimer {
    /// Token to pass back to [`HoverController::fire`].
    pub token: TimerToken,
    /// Kind of timer.
    pub kind: TimerKind,
    /// Instant the timer is due.
    pub deadline: Duration,
}

#[derive(Copy, Clone, Debug)]
struct Timer {
    token: TimerToken,
    deadline: Duration,
}

#[derive(Clone, Debug)]
enum Phase {
    Idle,
    PendingShow { node: NodeId, timer: Timer },
    Shown,
    PendingHide { timer: Timer },
}

/// Read-only view of the controller's state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverPhase<'a> {
    /// No popover and nothing pending.
    Idle,
    /// A show timer is running for this node.
    PendingShow(&'a NodeId),
    /// The popover for this node is up.
    Shown(&'a NodeId),
    /// The popover for this node is up and a hide timer is running.
    PendingHide(&'a NodeId),
}

/// What the renderer needs to draw a popover.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverSnapshot {
    /// The hovered node, as it was when the popover appeared.
    pub node: Node,
    /// Popover anchor.
    pub anchor: Point,
    /// Layout to draw, or `None` for no popover.
    pub layout: Option<PopoverLayout>,
    /// Popover width used for placement.
    pub width: f64,
}

/// A change the renderer should apply.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverChange {
    /// A popover appeared (or moved to another node).
    Shown(HoverSnapshot),
    /// The popover disappeared.
    Hidden,
}

/// Hover state machine with show and hide debounce.
#[derive(Clone, Debug)]
pub struct HoverController {
    config: HoverConfig,
    catalog: PopoverCatalog,
    phase: Phase,
    visible: Option<HoverSnapshot>,
    under_pointer: Option<NodeId>,
    next_token: u64,
    disposed: bool,
}

impl Default for HoverController {
    fn default() -> Self {
        Self::new(HoverConfig::default(), PopoverCatalog::default())
    }
}

impl HoverController {
    /// Create an idle controller.
    pub fn new(config: HoverConfig, catalog: PopoverCatalog) -> Self {
        Self {
            config,
            catalog,
            phase: Phase::Idle,
            visible: None,
            under_pointer: None,
            next_token: 0,
            disposed: false,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &HoverConfig {
        &self.config
    }

    /// Popover catalog.
    pub fn catalog(&self) -> &PopoverCatalog {
        &self.catalog
    }

    /// The visible popover, if any.
    pub fn hovered(&self) -> Option<&HoverSnapshot> {
        self.visible.as_ref()
    }

    /// Current phase.
    pub fn phase(&self) -> HoverPhase<'_> {
        match (&self.phase, &self.visible) {
            (Phase::PendingShow { node, .. }, _) => HoverPhase::PendingShow(node),
            (Phase::Shown, Some(v)) => HoverPhase::Shown(&v.node.id),
            (Phase::PendingHide { .. }, Some(v)) => HoverPhase::PendingHide(&v.node.id),
            _ => HoverPhase::Idle,
        }
    }

    /// The single outstanding timer, if any.
    pub fn pending_timer(&self) -> Option<PendingTimer> {
        match &self.phase {
            Phase::PendingShow { timer, .. } => Some(PendingTimer {
                token: timer.token,
                kind: TimerKind::Show,
                deadline: timer.deadline,
            }),
            Phase::PendingHide { timer } => Some(PendingTimer {
                token: timer.token,
                kind: TimerKind::Hide,
                deadline: timer.deadline,
            }),
            Phase::Idle | Phase::Shown => None,
        }
    }

    /// Instant the outstanding timer is due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending_timer().map(|t| t.deadline)
    }

    /// Pointer entered the hit region of node `id`.
    pub fn pointer_enter(&mut self, id: &str, now: Duration) {
        if self.disposed {
            tracing::trace!(node = id, "enter after dispose ignored");
            return;
        }

        // Back on the visible node: drop any pending hide or pending show elsewhere.
        if self.visible.as_ref().is_some_and(|v| v.node.id.as_str() == id) {
            if !matches!(self.phase, Phase::Shown) {
                tracing::trace!(node = id, "re-entered shown node");
            }
            self.phase = Phase::Shown;
            return;
        }

        if let Phase::PendingShow { node, .. } = &self.phase
            && node.as_str() == id
        {
            return;
        }

        let timer = self.arm(self.config.show_delay, now);
        tracing::trace!(node = id, deadline = ?timer.deadline, "show timer armed");
        self.phase = Phase::PendingShow {
            node: id.into(),
            timer,
        };
    }

    /// Pointer left whatever node it was over.
    pub fn pointer_leave(&mut self, now: Duration) {
        if self.disposed {
            tracing::trace!("leave after dispose ignored");
            return;
        }
        if self.visible.is_some() {
            let timer = self.arm(self.config.hide_delay, now);
            tracing::trace!(deadline = ?timer.deadline, "hide timer armed");
            self.phase = Phase::PendingHide { timer };
        } else {
            if matches!(self.phase, Phase::PendingShow { .. }) {
                tracing::trace!("show timer cancelled");
            }
            self.phase = Phase::Idle;
        }
    }

    /// Derive enter/leave from a pointer position by hit-testing `topology`.
    ///
    /// Use either this or [`pointer_enter`](Self::pointer_enter) /
    /// [`pointer_leave`](Self::pointer_leave), not both.
    pub fn pointer_move(&mut self, pt: Point, now: Duration, topology: &Topology) {
        if self.disposed {
            return;
        }
        let hit = topology.node_at(pt).map(|n| &n.id);
        if hit == self.under_pointer.as_ref() {
            return;
        }
        if self.under_pointer.is_some() {
            self.pointer_leave(now);
        }
        self.under_pointer = hit.cloned();
        if let Some(id) = hit {
            self.pointer_enter(id.as_str(), now);
        }
    }

    /// Fire the outstanding timer if it is due at `now`.
    pub fn poll(
        &mut self,
        now: Duration,
        topology: &Topology,
        surface: &impl SurfaceMetrics,
    ) -> Option<HoverChange> {
        let due = self.pending_timer().filter(|t| t.deadline <= now)?;
        self.fire(due.token, topology, surface)
    }

    /// Fire the timer identified by `token`.
    ///
    /// Stale tokens (cancelled or replaced timers) and calls after
    /// [`dispose`](Self::dispose) are ignored.
    pub fn fire(
        &mut self,
        token: TimerToken,
        topology: &Topology,
        surface: &impl SurfaceMetrics,
    ) -> Option<HoverChange> {
        if self.disposed || self.pending_timer().map(|t| t.token) != Some(token) {
            tracing::trace!(?token, "stale timer ignored");
            return None;
        }

        match core::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::PendingShow { node, .. } => self.show(&node, topology, surface),
            Phase::PendingHide { .. } => {
                self.visible = None;
                tracing::debug!("popover hidden");
                Some(HoverChange::Hidden)
            }
            // pending_timer() matched a token, so the phase had a timer.
            other @ (Phase::Idle | Phase::Shown) => {
                self.phase = other;
                None
            }
        }
    }

    /// Cancel every timer and drop the popover. Later calls are no-ops.
    pub fn dispose(&mut self) {
        self.phase = Phase::Idle;
        self.visible = None;
        self.under_pointer = None;
        self.disposed = true;
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn arm(&mut self, delay: Duration, now: Duration) -> Timer {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        Timer {
            token,
            deadline: now.saturating_add(delay),
        }
    }

    fn show(
        &mut self,
        id: &NodeId,
        topology: &Topology,
        surface: &impl SurfaceMetrics,
    ) -> Option<HoverChange> {
        let Some(node) = topology.node(id.as_str()) else {
            tracing::debug!(node = id.as_str(), "hovered node no longer in topology");
            return self.visible.take().map(|_| HoverChange::Hidden);
        };

        let width = self.catalog.width_for(node);
        let anchor = position_anchor(
            node.position,
            width,
            topology.radius(),
            surface.bounding_rect(),
            &self.config.placement,
        );
        let snapshot = HoverSnapshot {
            node: node.clone(),
            anchor,
            layout: self.catalog.layout_for(node),
            width,
        };
        tracing::debug!(
            node = id.as_str(),
            x = anchor.x,
            y = anchor.y,
            layout = ?snapshot.layout,
            "popover shown"
        );
        self.visible = Some(snapshot.clone());
        self.phase = Phase::Shown;
        Some(HoverChange::Shown(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use core::cell::Cell;
    use forkline_paths::{DisplayDescriptor, DisplayField, NodeKind, NodeStatus, TopologyConfig};
    use kurbo::Rect;

    const SURFACE: Rect = Rect::new(0.0, 0.0, 1200.0, 420.0);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn topology() -> Topology {
        Topology::new(TopologyConfig {
            nodes: vec![
                Node::new("user", "User", Point::new(150.0, 200.0), NodeKind::Subject),
                Node::new("hop", "Hop", Point::new(350.0, 200.0), NodeKind::Relay),
                Node::new("edge", "Edge", Point::new(980.0, 310.0), NodeKind::Leaf),
            ],
            ..TopologyConfig::default()
        })
        .unwrap()
    }

    fn controller() -> HoverController {
        let catalog = PopoverCatalog::default()
            .with_node("user", PopoverLayout::SubjectSummary, Some(320.0))
            .with_kind(NodeKind::Leaf, PopoverLayout::EndpointStatus, Some(320.0));
        HoverController::new(HoverConfig::default(), catalog)
    }

    fn shown(c: &mut HoverController, t: &Topology, id: &str) {
        c.pointer_enter(id, ms(0));
        assert!(matches!(
            c.poll(ms(120), t, &SURFACE),
            Some(HoverChange::Shown(_))
        ));
    }

    #[test]
    fn show_fires_after_delay() {
        let t = topology();
        let mut c = controller();
        c.pointer_enter("user", ms(0));
        assert_eq!(c.phase(), HoverPhase::PendingShow(&"user".into()));
        assert_eq!(c.poll(ms(119), &t, &SURFACE), None);
        let Some(HoverChange::Shown(snap)) = c.poll(ms(120), &t, &SURFACE) else {
            panic!("show timer should fire at its deadline");
        };
        assert_eq!(snap.node.id.as_str(), "user");
        assert_eq!(snap.layout, Some(PopoverLayout::SubjectSummary));
        // 150 clamps to 20 + 160; y = 200 - 80 = 120 is pushed to 250.
        assert_eq!(snap.anchor, Point::new(180.0, 250.0));
        assert_eq!(c.phase(), HoverPhase::Shown(&"user".into()));
        assert_eq!(c.next_deadline(), None);
    }

    // Quick pass over a node never shows its popover.
    #[test]
    fn leave_before_show_cancels() {
        let t = topology();
        let mut c = controller();
        c.pointer_enter("hop", ms(0));
        c.pointer_leave(ms(60));
        assert_eq!(c.phase(), HoverPhase::Idle);
        assert_eq!(c.next_deadline(), None);
        assert_eq!(c.poll(ms(500), &t, &SURFACE), None);
        assert!(c.hovered().is_none());
    }

    #[test]
    fn reentering_same_pending_node_keeps_timer() {
        let mut c = controller();
        c.pointer_enter("hop", ms(0));
        let first = c.pending_timer().unwrap();
        c.pointer_enter("hop", ms(50));
        assert_eq!(c.pending_timer(), Some(first));
    }

    #[test]
    fn entering_other_node_restarts_show() {
        let t = topology();
        let mut c = controller();
        c.pointer_enter("user", ms(0));
        let old = c.pending_timer().unwrap().token;
        c.pointer_enter("hop", ms(80));
        assert_eq!(c.phase(), HoverPhase::PendingShow(&"hop".into()));
        assert_eq!(c.next_deadline(), Some(ms(200)));
        assert_eq!(c.fire(old, &t, &SURFACE), None);
        assert_eq!(c.poll(ms(150), &t, &SURFACE), None);
        let Some(HoverChange::Shown(snap)) = c.poll(ms(200), &t, &SURFACE) else {
            panic!("replacement show timer should fire");
        };
        assert_eq!(snap.node.id.as_str(), "hop");
        // No catalog entry: hovered, but no layout.
        assert_eq!(snap.layout, None);
        assert_eq!(snap.width, crate::DEFAULT_POPOVER_WIDTH);
    }

    // enter(A), leave, enter(A) inside the hide window: no flicker, no new show.
    #[test]
    fn debounce_is_idempotent() {
        let t = topology();
        let mut c = controller();
        shown(&mut c, &t, "user");
        c.pointer_leave(ms(200));
        assert_eq!(c.phase(), HoverPhase::PendingHide(&"user".into()));
        c.pointer_enter("user", ms(260));
        assert_eq!(c.phase(), HoverPhase::Shown(&"user".into()));
        assert_eq!(c.pending_timer(), None);
        assert_eq!(c.poll(ms(10_000), &t, &SURFACE), None);
        assert_eq!(c.hovered().unwrap().node.id.as_str(), "user");
    }

    #[test]
    fn hide_fires_after_delay() {
        let t = topology();
        let mut c = controller();
        shown(&mut c, &t, "user");
        c.pointer_leave(ms(200));
        assert_eq!(c.poll(ms(319), &t, &SURFACE), None);
        assert_eq!(c.poll(ms(320), &t, &SURFACE), Some(HoverChange::Hidden));
        assert_eq!(c.phase(), HoverPhase::Idle);
        assert!(c.hovered().is_none());
    }

    // Moving from a shown node to a neighbour keeps the old popover until the new one is due.
    #[test]
    fn sweep_to_neighbour_swaps_popover() {
        let t = topology();
        let mut c = controller();
        shown(&mut c, &t, "user");
        c.pointer_leave(ms(200));
        c.pointer_enter("edge", ms(210));
        assert_eq!(c.phase(), HoverPhase::PendingShow(&"edge".into()));
        assert_eq!(c.hovered().unwrap().node.id.as_str(), "user");
        let Some(HoverChange::Shown(snap)) = c.poll(ms(330), &t, &SURFACE) else {
            panic!("neighbour popover should appear");
        };
        assert_eq!(snap.layout, Some(PopoverLayout::EndpointStatus));
        assert_eq!(c.hovered().unwrap().node.id.as_str(), "edge");
    }

    // Back on the shown node while a neighbour's show is pending.
    #[test]
    fn returning_to_shown_node_cancels_pending_show() {
        let t = topology();
        let mut c = controller();
        shown(&mut c, &t, "user");
        c.pointer_enter("hop", ms(200));
        c.pointer_enter("user", ms(250));
        assert_eq!(c.phase(), HoverPhase::Shown(&"user".into()));
        assert_eq!(c.poll(ms(1_000), &t, &SURFACE), None);
    }

    #[test]
    fn dispose_cancels_timers() {
        let t = topology();
        let mut c = controller();
        c.pointer_enter("user", ms(0));
        let token = c.pending_timer().unwrap().token;
        c.dispose();
        assert!(c.is_disposed());
        assert_eq!(c.fire(token, &t, &SURFACE), None);
        assert_eq!(c.poll(ms(1_000), &t, &SURFACE), None);
        c.pointer_enter("user", ms(1_000));
        assert_eq!(c.next_deadline(), None);
        assert!(c.hovered().is_none());
    }

    #[test]
    fn vanished_node_shows_nothing() {
        let mut t = topology();
        let mut c = controller();
        c.pointer_enter("hop", ms(0));
        t.replace(TopologyConfig::default()).unwrap();
        assert_eq!(c.poll(ms(120), &t, &SURFACE), None);
        assert_eq!(c.phase(), HoverPhase::Idle);
    }

    #[test]
    fn anchor_uses_surface_at_fire_time() {
        let t = topology();
        let mut c = controller();
        c.pointer_enter("edge", ms(0));
        let detached: Option<Rect> = None;
        let Some(HoverChange::Shown(snap)) = c.poll(ms(120), &t, &detached) else {
            panic!("show should fire without a surface");
        };
        // Unclamped default anchor.
        assert_eq!(snap.anchor, Point::new(980.0, 230.0));
    }

    #[test]
    fn pointer_move_drives_enter_and_leave() {
        let t = topology();
        let mut c = controller();
        c.pointer_move(Point::new(160.0, 210.0), ms(0), &t);
        assert_eq!(c.phase(), HoverPhase::PendingShow(&"user".into()));
        c.pointer_move(Point::new(165.0, 205.0), ms(10), &t);
        assert_eq!(c.next_deadline(), Some(ms(120)));
        assert!(c.poll(ms(120), &t, &SURFACE).is_some());
        c.pointer_move(Point::new(250.0, 200.0), ms(200), &t);
        assert_eq!(c.phase(), HoverPhase::PendingHide(&"user".into()));
        c.pointer_move(Point::new(350.0, 200.0), ms(210), &t);
        assert_eq!(c.phase(), HoverPhase::PendingShow(&"hop".into()));
    }

    #[test]
    fn anchor_reads_live_surface_when_shown() {
        let t = topology();
        let mut c = controller();
        let rect = Cell::new(SURFACE);
        let live = || Some(rect.get());
        c.pointer_enter("edge", ms(0));
        // Reflow between enter and the show deadline.
        rect.set(Rect::new(0.0, 0.0, 800.0, 420.0));
        let Some(HoverChange::Shown(snap)) = c.poll(ms(120), &t, &live) else {
            panic!("show should fire");
        };
        // 980 clamps to 800 - 20 - 160.
        assert_eq!(snap.anchor, Point::new(620.0, 230.0));
    }

    #[test]
    fn node_metadata_is_forwarded_unchanged() {
        let display: DisplayDescriptor = [
            DisplayField::TitleBar("Exit relay".into()),
            DisplayField::PillGroup {
                label: "Routes".into(),
                values: vec!["10.0.0.0/8".into(), "fd00::/8".into()],
            },
            DisplayField::Address("203.0.113.7".into()),
        ]
        .into_iter()
        .collect();
        let node = Node::new("exit", "Exit", Point::new(600.0, 300.0), NodeKind::Relay)
            .with_status(NodeStatus::Fault)
            .with_display(display.clone());
        let t = Topology::new(TopologyConfig {
            nodes: vec![node.clone()],
            ..TopologyConfig::default()
        })
        .unwrap();
        let mut c = controller();
        c.pointer_enter("exit", ms(0));
        let Some(HoverChange::Shown(snap)) = c.poll(ms(120), &t, &SURFACE) else {
            panic!("show should fire");
        };
        assert_eq!(snap.node.status, NodeStatus::Fault);
        assert_eq!(snap.node.display, display);
        assert_eq!(snap.node, node);
    }

    #[test]
    fn delays_come_from_config() {
        let config = HoverConfig {
            show_delay: ms(40),
            hide_delay: ms(300),
            ..HoverConfig::default()
        };
        let catalog = PopoverCatalog::new(280.0);
        let t = topology();
        let mut c = HoverController::new(config, catalog);
        assert_eq!(c.config().show_delay, ms(40));
        assert_eq!(c.catalog().default_width(), 280.0);
        c.pointer_enter("hop", ms(0));
        assert_eq!(c.next_deadline(), Some(ms(40)));
        let Some(HoverChange::Shown(snap)) = c.poll(ms(40), &t, &SURFACE) else {
            panic!("show should fire at the configured delay");
        };
        assert_eq!(snap.width, 280.0);
        c.pointer_leave(ms(50));
        assert_eq!(c.next_deadline(), Some(ms(350)));
    }

    #[test]
    fn pointer_move_after_dispose_is_ignored() {
        let t = topology();
        let mut c = controller();
        c.dispose();
        c.pointer_move(Point::new(150.0, 200.0), ms(0), &t);
        assert_eq!(c.under_pointer, None);
        assert_eq!(c.phase(), HoverPhase::Idle);
        assert_eq!(c.next_deadline(), None);
    }
}
