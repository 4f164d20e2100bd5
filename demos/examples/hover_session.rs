// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted pointer session over three nodes.
//!
//! Shows the show/hide debounce: a quick pass over a node never opens its
//! popover, and re-entering a node inside the hide window keeps it open.
//!
//! Run:
//! - `cargo run -p forkline_demos --example hover_session`

use core::time::Duration;

use forkline_hover::{HoverChange, HoverConfig, HoverController, PopoverCatalog, PopoverLayout};
use forkline_paths::{Node, NodeKind, Topology, TopologyConfig};
use kurbo::{Point, Rect};

enum Step {
    Enter(&'static str),
    Leave,
}

fn main() {
    let topology = Topology::new(TopologyConfig {
        nodes: vec![
            Node::new("user", "Operator", Point::new(150.0, 200.0), NodeKind::Subject),
            Node::new("server1", "Ingress", Point::new(350.0, 200.0), NodeKind::Relay),
            Node::new("endpoint1", "Endpoint", Point::new(980.0, 90.0), NodeKind::Leaf),
        ],
        ..TopologyConfig::default()
    })
    .unwrap();
    let surface = Rect::new(0.0, 0.0, 1200.0, 420.0);

    let catalog = PopoverCatalog::default()
        .with_node("user", PopoverLayout::SubjectSummary, Some(320.0))
        .with_node("server1", PopoverLayout::RelayRoutes, Some(400.0))
        .with_kind(NodeKind::Leaf, PopoverLayout::EndpointStatus, Some(320.0));
    let mut hover = HoverController::new(HoverConfig::default(), catalog);

    let script = [
        (0, Step::Enter("user")),
        (60, Step::Leave),
        (100, Step::Enter("server1")),
        (300, Step::Leave),
        (360, Step::Enter("server1")),
        (600, Step::Leave),
        (620, Step::Enter("endpoint1")),
    ];

    let mut at = 0_u64;
    for (t, step) in script {
        // Run every frame up to the next scripted event.
        while at < t {
            at += 10;
            report(at, hover.poll(Duration::from_millis(at), &topology, &surface));
        }
        let now = Duration::from_millis(t);
        match step {
            Step::Enter(id) => hover.pointer_enter(id, now),
            Step::Leave => hover.pointer_leave(now),
        }
        println!("{t:>5}ms  {:?}", hover.phase());
    }
    while hover.next_deadline().is_some() {
        at += 10;
        report(at, hover.poll(Duration::from_millis(at), &topology, &surface));
    }
    hover.dispose();
}

fn report(at: u64, change: Option<HoverChange>) {
    match change {
        Some(HoverChange::Shown(s)) => println!(
            "{at:>5}ms  show {} {:?} at ({}, {})",
            s.node.id, s.layout, s.anchor.x, s.anchor.y
        ),
        Some(HoverChange::Hidden) => println!("{at:>5}ms  hide"),
        None => {}
    }
}
