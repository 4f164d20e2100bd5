// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors raised while loading or editing a topology.

use crate::types::NodeId;

/// A topology that cannot be rendered.
///
/// These are load-time faults: a [`Topology`](crate::Topology) is never built
/// from a configuration that produces one, and no geometry is synthesized.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// Two nodes share an id.
    #[error("duplicate node id: {id}")]
    DuplicateNode {
        /// The repeated id.
        id: NodeId,
    },
    /// A connection names a node that does not exist.
    #[error("connection {from} -> {to} references missing node {missing}")]
    DanglingConnection {
        /// Connection start.
        from: NodeId,
        /// Connection end.
        to: NodeId,
        /// Whichever endpoint failed to resolve.
        missing: NodeId,
    },
    /// The fork descriptor names a node that does not exist.
    #[error("fork references missing node {missing}")]
    DanglingFork {
        /// The unresolved id.
        missing: NodeId,
    },
    /// The fork's source and targets are not pairwise distinct.
    #[error("fork nodes must be distinct (source {origin}, branches {branch_a} and {branch_b})")]
    DegenerateFork {
        /// Fork source.
        origin: NodeId,
        /// First target.
        branch_a: NodeId,
        /// Second target.
        branch_b: NodeId,
    },
    /// The render radius is negative or not finite.
    #[error("render radius must be finite and non-negative, got {radius}")]
    InvalidRadius {
        /// Offending value.
        radius: f64,
    },
    /// A node position has a non-finite coordinate.
    #[error("node {id} has a non-finite position")]
    InvalidPosition {
        /// Node whose position was rejected.
        id: NodeId,
    },
    /// A position update names a node that does not exist.
    #[error("unknown node id: {id}")]
    UnknownNode {
        /// The unresolved id.
        id: NodeId,
    },
    /// A fork compression factor outside `(0, 1]`.
    #[error("fork compression must be in (0, 1], got {factor}")]
    InvalidCompression {
        /// Offending value.
        factor: f64,
    },
}

/// Result alias for topology operations.
pub type Result<T> = core::result::Result<T, ConfigurationError>;
