// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fork geometry for the reference five-node topology.
//!
//! Prints the SVG path data produced by both fork strategies, then moves the
//! upper endpoint and prints the recomputed paths.
//!
//! Run:
//! - `cargo run -p forkline_demos --example fork_paths`

use forkline_paths::{
    Connection, Diagram, ForkJunction, Node, NodeKind, NodeStatus, PathStrings, PathSynthesizer,
    ProportionalSplit, TopologyConfig,
};
use kurbo::Point;

fn config() -> TopologyConfig {
    TopologyConfig {
        nodes: vec![
            Node::new("user", "Operator", Point::new(150.0, 200.0), NodeKind::Subject),
            Node::new("server1", "Ingress", Point::new(350.0, 200.0), NodeKind::Relay),
            Node::new("server2", "Gateway", Point::new(550.0, 200.0), NodeKind::Relay),
            Node::new("endpoint1", "Endpoint 1", Point::new(980.0, 90.0), NodeKind::Leaf)
                .with_status(NodeStatus::Fault),
            Node::new("endpoint2", "Endpoint 2", Point::new(980.0, 310.0), NodeKind::Leaf)
                .with_status(NodeStatus::Fault),
        ],
        connections: vec![
            Connection::new("user", "server1"),
            Connection::new("server1", "server2"),
        ],
        fork: Some(ForkJunction::new("server2", "endpoint1", "endpoint2")),
        radius: 55.0,
    }
}

fn print(title: &str, svg: &PathStrings) {
    println!("== {title} ==");
    for (i, c) in svg.connections.iter().enumerate() {
        println!("  connection {i}: {c}");
    }
    println!("  trunk:    {}", svg.trunk);
    println!("  branch a: {}", svg.branch_a);
    println!("  branch b: {}", svg.branch_b);
}

fn main() {
    let mut diagram = Diagram::new(config(), PathSynthesizer::default()).unwrap();
    print("design-space affine", &diagram.svg());

    diagram.set_synthesizer(PathSynthesizer::new(ProportionalSplit::default()));
    print("proportional split", &diagram.svg());

    diagram.set_synthesizer(PathSynthesizer::default());
    diagram
        .set_position("endpoint1", Point::new(900.0, 60.0))
        .unwrap();
    let svg = diagram.svg();
    print("affine, endpoint1 moved", &svg);
    assert!(svg.branch_a.ends_with("845 60"));
}
