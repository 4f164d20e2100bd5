// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated topology: node lookup, edits from an external layout step, hit testing.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use kurbo::Point;

use crate::error::{ConfigurationError, Result};
use crate::types::{Connection, DEFAULT_RADIUS, ForkJunction, Node, NodeId};

/// Unvalidated topology as supplied by the presentation layer.
///
/// Turn it into a [`Topology`] with [`Topology::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct TopologyConfig {
    /// All nodes. Later nodes are drawn on top of earlier ones.
    pub nodes: Vec<Node>,
    /// Plain edges.
    pub connections: Vec<Connection>,
    /// Optional fork junction.
    pub fork: Option<ForkJunction>,
    /// Uniform node radius.
    pub radius: f64,
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
            fork: None,
            radius: DEFAULT_RADIUS,
        }
    }
}

/// A topology whose references all resolve.
///
/// Invariants upheld by every constructor and mutator:
/// - node ids are unique;
/// - every connection endpoint and fork id names a node;
/// - fork ids are pairwise distinct;
/// - the radius and every position are finite, and the radius is non-negative.
#[derive(Clone, Debug)]
pub struct Topology {
    nodes: Vec<Node>,
    index: BTreeMap<NodeId, usize>,
    connections: Vec<Connection>,
    fork: Option<ForkJunction>,
    radius: f64,
}

impl Topology {
    /// Validate a configuration.
    pub fn new(config: TopologyConfig) -> Result<Self> {
        let TopologyConfig {
            nodes,
            connections,
            fork,
            radius,
        } = config;

        check_radius(radius)?;

        let mut index = BTreeMap::new();
        for (i, node) in nodes.iter().enumerate() {
            check_position(&node.id, node.position)?;
            if index.insert(node.id.clone(), i).is_some() {
                return Err(ConfigurationError::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }

        for c in &connections {
            for end in [&c.from, &c.to] {
                if !index.contains_key(end) {
                    return Err(ConfigurationError::DanglingConnection {
                        from: c.from.clone(),
                        to: c.to.clone(),
                        missing: end.clone(),
                    });
                }
            }
        }

        if let Some(f) = &fork {
            for id in [&f.source, &f.branch_a, &f.branch_b] {
                if !index.contains_key(id) {
                    return Err(ConfigurationError::DanglingFork {
                        missing: id.clone(),
                    });
                }
            }
            if f.source == f.branch_a || f.source == f.branch_b || f.branch_a == f.branch_b {
                return Err(ConfigurationError::DegenerateFork {
                    origin: f.source.clone(),
                    branch_a: f.branch_a.clone(),
                    branch_b: f.branch_b.clone(),
                });
            }
        }

        tracing::debug!(
            nodes = nodes.len(),
            connections = connections.len(),
            fork = fork.is_some(),
            radius,
            "topology loaded"
        );

        Ok(Self {
            nodes,
            index,
            connections,
            fork,
            radius,
        })
    }

    /// Replace the whole configuration.
    ///
    /// On error `self` is left as it was.
    pub fn replace(&mut self, config: TopologyConfig) -> Result<()> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Centre of a node, if it exists.
    pub fn position(&self, id: &str) -> Option<Point> {
        self.node(id).map(|n| n.position)
    }

    /// All nodes in draw order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Plain connections.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The fork junction, if configured.
    pub fn fork(&self) -> Option<&ForkJunction> {
        self.fork.as_ref()
    }

    /// Uniform node radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Move a node. Used by an external layout step.
    pub fn set_position(&mut self, id: &str, position: Point) -> Result<()> {
        let Some(&i) = self.index.get(id) else {
            return Err(ConfigurationError::UnknownNode { id: id.into() });
        };
        check_position(&self.nodes[i].id, position)?;
        self.nodes[i].position = position;
        Ok(())
    }

    /// Change the uniform radius.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        check_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    /// The topmost node whose disc contains `pt`.
    ///
    /// Nodes later in draw order win when discs overlap.
    pub fn node_at(&self, pt: Point) -> Option<&Node> {
        self.nodes
            .iter()
            .rev()
            .find(|n| n.position.distance(pt) <= self.radius)
    }
}

fn check_radius(radius: f64) -> Result<()> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidRadius { radius })
    }
}

fn check_position(id: &NodeId, p: Point) -> Result<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidPosition { id: id.clone() })
    }
}
