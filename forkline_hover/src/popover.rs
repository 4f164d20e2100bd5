// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover layout selection.
//!
//! A [`PopoverCatalog`] is a lookup table from node id (then node kind) to a
//! [`PopoverLayout`] and a popover width. It picks which layout applies and
//! never produces content.

use alloc::collections::BTreeMap;

use forkline_paths::{Node, NodeId, NodeKind};

/// Popover width used when no entry sets one.
pub const DEFAULT_POPOVER_WIDTH: f64 = 360.0;

/// The closed set of popover layouts the renderer knows how to draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PopoverLayout {
    /// Title bar and address pills for the originating party.
    SubjectSummary,
    /// Inbound and outbound route pills for a relay.
    RelayRoutes,
    /// Route pills plus an alternate set and a highlight, for a branching relay.
    RelayAlternates,
    /// Address and status for a terminal endpoint.
    EndpointStatus,
}

/// One catalog row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PopoverEntry {
    /// Layout to draw.
    pub layout: PopoverLayout,
    /// Popover width; the catalog default applies when `None`.
    pub width: Option<f64>,
}

/// Lookup table from node identity to popover layout and width.
///
/// Resolution order: an entry for the node's id, then an entry for its kind.
/// A node matching neither has no popover (not a fault) and the default width.
#[derive(Clone, Debug)]
pub struct PopoverCatalog {
    by_id: BTreeMap<NodeId, PopoverEntry>,
    by_kind: BTreeMap<NodeKind, PopoverEntry>,
    default_width: f64,
}

impl Default for PopoverCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_POPOVER_WIDTH)
    }
}

impl PopoverCatalog {
    /// Create an empty catalog with the given fallback width.
    pub fn new(default_width: f64) -> Self {
        Self {
            by_id: BTreeMap::new(),
            by_kind: BTreeMap::new(),
            default_width,
        }
    }

    /// Register a layout for one node id.
    #[must_use]
    pub fn with_node(
        mut self,
        id: impl Into<NodeId>,
        layout: PopoverLayout,
        width: Option<f64>,
    ) -> Self {
        self.by_id.insert(id.into(), PopoverEntry { layout, width });
        self
    }

    /// Register a layout for every node of a kind without an id entry.
    #[must_use]
    pub fn with_kind(mut self, kind: NodeKind, layout: PopoverLayout, width: Option<f64>) -> Self {
        self.by_kind.insert(kind, PopoverEntry { layout, width });
        self
    }

    /// The entry that applies to `node`, if any.
    pub fn entry(&self, node: &Node) -> Option<&PopoverEntry> {
        self.by_id
            .get(node.id.as_str())
            .or_else(|| self.by_kind.get(&node.kind))
    }

    /// Layout for `node`, or `None` for no popover.
    pub fn layout_for(&self, node: &Node) -> Option<PopoverLayout> {
        self.entry(node).map(|e| e.layout)
    }

    /// Popover width for `node`.
    pub fn width_for(&self, node: &Node) -> f64 {
        self.entry(node)
            .and_then(|e| e.width)
            .unwrap_or(self.default_width)
    }

    /// Width used when no entry sets one.
    pub fn default_width(&self) -> f64 {
        self.default_width
    }
}
