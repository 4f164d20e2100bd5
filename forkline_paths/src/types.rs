// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the topology: node identifiers, kinds, display data, and edges.

use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

use kurbo::Point;

/// Visual radius used for every node when none is configured.
pub const DEFAULT_RADIUS: f64 = 55.0;

/// Identifier for a node in a topology.
///
/// Ids are unique within a [`Topology`](crate::Topology) and stable for its lifetime.
/// They borrow as `str`, so lookups can be made with plain string slices.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(String);

impl NodeId {
    /// Create an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role of a node in the diagram.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    /// The originating party, usually drawn leftmost.
    Subject,
    /// An intermediate hop.
    #[default]
    Relay,
    /// A terminal endpoint.
    Leaf,
}

/// Health of a node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeStatus {
    /// Operating normally.
    #[default]
    Normal,
    /// Reported as faulty.
    Fault,
}

/// One display field carried for the presentation layer.
///
/// The engine never looks inside these; it clones and forwards them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayField {
    /// Header text shown at the top of a popover.
    TitleBar(String),
    /// A labelled group of short pill values (addresses, tags).
    PillGroup {
        /// Group caption.
        label: String,
        /// Values in display order.
        values: Vec<String>,
    },
    /// An emphasized string.
    Highlight(String),
    /// A monospace snippet.
    Code(String),
    /// A network address.
    Address(String),
    /// Free text.
    Text(String),
}

/// Ordered display data for a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayDescriptor {
    fields: Vec<DisplayField>,
}

impl DisplayDescriptor {
    /// Create an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder style.
    #[must_use]
    pub fn with(mut self, field: DisplayField) -> Self {
        self.fields.push(field);
        self
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> &[DisplayField] {
        &self.fields
    }

    /// Returns `true` if no fields are present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<DisplayField> for DisplayDescriptor {
    fn from_iter<I: IntoIterator<Item = DisplayField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A node of the topology.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Unique id.
    pub id: NodeId,
    /// Caption drawn under the node.
    pub label: String,
    /// Centre in canvas coordinates.
    pub position: Point,
    /// Role of the node.
    pub kind: NodeKind,
    /// Health of the node.
    pub status: NodeStatus,
    /// Opaque display data.
    pub display: DisplayDescriptor,
}

impl Node {
    /// Create a normal-status node with empty display data.
    pub fn new(
        id: impl Into<NodeId>,
        label: impl Into<String>,
        position: Point,
        kind: NodeKind,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position,
            kind,
            status: NodeStatus::Normal,
            display: DisplayDescriptor::default(),
        }
    }

    /// Set the status, builder style.
    #[must_use]
    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the display descriptor, builder style.
    #[must_use]
    pub fn with_display(mut self, display: DisplayDescriptor) -> Self {
        self.display = display;
        self
    }
}

/// A plain edge between two nodes. Undirected for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    /// One endpoint.
    pub from: NodeId,
    /// The other endpoint.
    pub to: NodeId,
}

impl Connection {
    /// Create a connection.
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A source fanning out to two targets through one trunk and two branches.
///
/// `branch_a` is conventionally the upper target and `branch_b` the lower one,
/// but the geometry works from actual positions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForkJunction {
    /// Node the trunk leaves from.
    pub source: NodeId,
    /// First target.
    pub branch_a: NodeId,
    /// Second target.
    pub branch_b: NodeId,
}

impl ForkJunction {
    /// Create a fork descriptor.
    pub fn new(
        source: impl Into<NodeId>,
        branch_a: impl Into<NodeId>,
        branch_b: impl Into<NodeId>,
    ) -> Self {
        Self {
            source: source.into(),
            branch_a: branch_a.into(),
            branch_b: branch_b.into(),
        }
    }
}
