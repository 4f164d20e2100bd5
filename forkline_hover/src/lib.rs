// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forkline Hover: debounced hover popovers for forkline diagrams.
//!
//! ## Overview
//!
//! The rendering layer reports pointer enter/leave per node (or raw pointer
//! positions). [`HoverController`] debounces these into at most one visible
//! popover, and computes its anchor with [`position_anchor`] at the moment the
//! popover appears. The surface rectangle is read from a [`SurfaceMetrics`]
//! source at that moment as well.
//!
//! - [`HoverController`]: the state machine, with show and hide delays.
//! - [`PopoverCatalog`]: lookup table picking a [`PopoverLayout`] and width per node.
//! - [`position_anchor`]: clamp and flip heuristics keeping popovers on the surface.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use forkline_hover::{HoverChange, HoverController};
//! use forkline_paths::{Node, NodeKind, Topology, TopologyConfig};
//! use kurbo::{Point, Rect};
//!
//! let topology = Topology::new(TopologyConfig {
//!     nodes: vec![Node::new("hop", "Hop", Point::new(600.0, 300.0), NodeKind::Relay)],
//!     ..TopologyConfig::default()
//! })
//! .unwrap();
//! let surface = Rect::new(0.0, 0.0, 1200.0, 420.0);
//!
//! let mut hover = HoverController::default();
//! hover.pointer_enter("hop", Duration::ZERO);
//! assert!(hover.poll(Duration::from_millis(100), &topology, &surface).is_none());
//!
//! let Some(HoverChange::Shown(snapshot)) =
//!     hover.poll(Duration::from_millis(120), &topology, &surface)
//! else {
//!     panic!("popover should be up after the show delay");
//! };
//! assert_eq!(snapshot.anchor, Point::new(600.0, 220.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod anchor;
mod controller;
mod popover;

pub use anchor::{PlacementConfig, SurfaceMetrics, position_anchor};
pub use controller::{
    HoverChange, HoverConfig, HoverController, HoverPhase, HoverSnapshot, PendingTimer, TimerKind,
    TimerToken,
};
pub use popover::{DEFAULT_POPOVER_WIDTH, PopoverCatalog, PopoverEntry, PopoverLayout};
