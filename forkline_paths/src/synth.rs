// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path synthesis for a whole topology.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};

use crate::error::Result;
use crate::fork::{DesignSpaceAffine, ForkPaths, ForkStrategy};
use crate::svg::path_data;
use crate::topology::{Topology, TopologyConfig};
use crate::types::{Connection, NodeId};

/// Geometry of one plain connection.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionPath {
    /// Connection start.
    pub from: NodeId,
    /// Connection end.
    pub to: NodeId,
    /// Straight segment between the two node boundaries.
    pub path: BezPath,
}

/// All geometry for a topology, in connection order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagramPaths {
    /// One entry per plain connection.
    pub connections: Vec<ConnectionPath>,
    /// Fork trunk and branches; empty without a fork.
    pub fork: ForkPaths,
}

/// SVG path data for every path of a [`DiagramPaths`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathStrings {
    /// One string per plain connection, in connection order.
    pub connections: Vec<String>,
    /// Fork trunk; empty without a fork.
    pub trunk: String,
    /// Branch to the fork's first target; empty without a fork.
    pub branch_a: String,
    /// Branch to the fork's second target; empty without a fork.
    pub branch_b: String,
}

impl DiagramPaths {
    /// Serialize every path to SVG path data.
    pub fn to_svg(&self) -> PathStrings {
        PathStrings {
            connections: self
                .connections
                .iter()
                .map(|c| path_data(&c.path))
                .collect(),
            trunk: path_data(&self.fork.trunk),
            branch_a: path_data(&self.fork.branch_a),
            branch_b: path_data(&self.fork.branch_b),
        }
    }
}

/// Turns a [`Topology`] into paths with a chosen [`ForkStrategy`].
#[derive(Debug)]
pub struct PathSynthesizer {
    strategy: Box<dyn ForkStrategy>,
}

impl Default for PathSynthesizer {
    fn default() -> Self {
        Self::new(DesignSpaceAffine::default())
    }
}

impl PathSynthesizer {
    /// Create a synthesizer using `strategy` for the fork.
    pub fn new(strategy: impl ForkStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// The fork strategy in use.
    pub fn strategy(&self) -> &dyn ForkStrategy {
        &*self.strategy
    }

    /// Synthesize paths for a validated topology.
    pub fn synthesize(&self, topology: &Topology) -> DiagramPaths {
        let radius = topology.radius();
        let connections = topology
            .connections()
            .iter()
            .filter_map(|c| connection_path(topology, c, radius))
            .collect();

        let fork = topology
            .fork()
            .and_then(|f| {
                let source = topology.position(f.source.as_str())?;
                let a = topology.position(f.branch_a.as_str())?;
                let b = topology.position(f.branch_b.as_str())?;
                Some(self.strategy.fork_paths(source, a, b, radius))
            })
            .unwrap_or_default();

        tracing::debug!(
            nodes = topology.nodes().len(),
            connections = topology.connections().len(),
            fork = !fork.is_empty(),
            strategy = self.strategy().name(),
            "paths synthesized"
        );

        DiagramPaths { connections, fork }
    }

    /// Validate `config` and synthesize its paths in one step.
    pub fn synthesize_config(&self, config: TopologyConfig) -> Result<DiagramPaths> {
        let topology = Topology::new(config)?;
        Ok(self.synthesize(&topology))
    }
}

// A validated topology always resolves both ends; `None` is unreachable there.
fn connection_path(topology: &Topology, c: &Connection, radius: f64) -> Option<ConnectionPath> {
    let from = topology.position(c.from.as_str())?;
    let to = topology.position(c.to.as_str())?;
    let (start, end) = trim(from, to, radius);
    let mut path = BezPath::new();
    path.move_to(start);
    path.line_to(end);
    Some(ConnectionPath {
        from: c.from.clone(),
        to: c.to.clone(),
        path,
    })
}

/// Pull both ends of `from → to` in to the node boundaries.
///
/// Discs that touch or overlap keep the centre-to-centre segment.
fn trim(from: Point, to: Point, radius: f64) -> (Point, Point) {
    let d = to - from;
    let len = d.hypot();
    if len <= 2.0 * radius {
        return (from, to);
    }
    let offset = (d / len) * radius;
    (from + offset, to - offset)
}
