// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use forkline_paths::{
    Connection, DesignSpaceAffine, ForkJunction, Node, NodeKind, PathSynthesizer, ProportionalSplit,
    Topology, TopologyConfig,
};
use kurbo::Point;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    /// Uniform in `[0, 1)`, from one xorshift64 step.
    fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        ((x >> 11) as f64) / ((1u64 << 53) as f64)
    }
}

/// A chain of `n` relays ending in a fork, with jittered positions.
fn chain(n: usize, seed: u64) -> TopologyConfig {
    let mut rng = Rng::new(seed);
    let mut nodes = Vec::with_capacity(n + 2);
    let mut connections = Vec::with_capacity(n);
    for i in 0..n {
        let x = 150.0 + i as f64 * 200.0;
        let y = 200.0 + (rng.next_f64() - 0.5) * 40.0;
        nodes.push(Node::new(format!("n{i}"), "relay", Point::new(x, y), NodeKind::Relay));
        if i > 0 {
            connections.push(Connection::new(format!("n{}", i - 1), format!("n{i}")));
        }
    }
    let tip_x = 150.0 + n as f64 * 200.0 + 230.0;
    nodes.push(Node::new("up", "upper", Point::new(tip_x, 90.0), NodeKind::Leaf));
    nodes.push(Node::new("down", "lower", Point::new(tip_x, 310.0), NodeKind::Leaf));
    TopologyConfig {
        nodes,
        connections,
        fork: Some(ForkJunction::new(format!("n{}", n - 1), "up", "down")),
        radius: 55.0,
    }
}

fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize");
    for &n in &[3_usize, 32, 256] {
        let topology = Topology::new(chain(n, 0x5eed)).unwrap();
        group.throughput(Throughput::Elements(n as u64));
        let affine = PathSynthesizer::new(DesignSpaceAffine::default());
        group.bench_function(format!("affine_n{n}"), |b| {
            b.iter(|| black_box(affine.synthesize(black_box(&topology))));
        });
        let proportional = PathSynthesizer::new(ProportionalSplit::default());
        group.bench_function(format!("proportional_n{n}"), |b| {
            b.iter(|| black_box(proportional.synthesize(black_box(&topology))));
        });
        group.bench_function(format!("affine_svg_n{n}"), |b| {
            b.iter(|| black_box(affine.synthesize(&topology).to_svg()));
        });
    }
    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let config = chain(256, 7);
    c.bench_function("validate_n256", |b| {
        b.iter(|| black_box(Topology::new(black_box(config.clone())).unwrap()));
    });
}

criterion_group!(benches, bench_synthesis, bench_validation);
criterion_main!(benches);
