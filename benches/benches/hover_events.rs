// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use forkline_hover::HoverController;
use forkline_paths::{Node, NodeKind, Topology, TopologyConfig};
use kurbo::{Point, Rect};

fn row(n: usize) -> Topology {
    let nodes = (0..n)
        .map(|i| {
            Node::new(
                format!("n{i}"),
                "node",
                Point::new(100.0 + i as f64 * 150.0, 200.0),
                NodeKind::Relay,
            )
        })
        .collect();
    Topology::new(TopologyConfig {
        nodes,
        ..TopologyConfig::default()
    })
    .unwrap()
}

// Sweep the pointer across a row of nodes, polling every 8ms frame.
fn bench_sweep(c: &mut Criterion) {
    let topology = row(8);
    let surface = Rect::new(0.0, 0.0, 1400.0, 420.0);
    c.bench_function("sweep_8_nodes", |b| {
        b.iter(|| {
            let mut hover = HoverController::default();
            let mut shown = 0_u32;
            for step in 0..600_u64 {
                let now = Duration::from_millis(step * 8);
                let pt = Point::new(50.0 + step as f64 * 2.0, 200.0);
                hover.pointer_move(pt, now, &topology);
                if hover.poll(now, &topology, &surface).is_some() {
                    shown += 1;
                }
            }
            black_box(shown)
        });
    });
}

fn bench_enter_leave(c: &mut Criterion) {
    let topology = row(2);
    let surface = Rect::new(0.0, 0.0, 1400.0, 420.0);
    c.bench_function("enter_leave_cycle", |b| {
        let mut hover = HoverController::default();
        let mut t = 0_u64;
        b.iter(|| {
            hover.pointer_enter(black_box("n0"), Duration::from_millis(t));
            t += 200;
            black_box(hover.poll(Duration::from_millis(t), &topology, &surface));
            hover.pointer_leave(Duration::from_millis(t));
            t += 200;
            black_box(hover.poll(Duration::from_millis(t), &topology, &surface));
        });
    });
}

criterion_group!(benches, bench_sweep, bench_enter_leave);
criterion_main!(benches);
