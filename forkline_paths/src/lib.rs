// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forkline Paths: deterministic vector geometry for small network diagrams.
//!
//! ## Overview
//!
//! A diagram is a handful of typed nodes, plain connections between them, and
//! at most one fork junction where a source fans out to two targets. This crate
//! validates such a topology and turns it into SVG path data (`M`, `L`, `Q`, `C`)
//! ready to hand to a vector-drawing primitive.
//!
//! - [`Topology`]: validated nodes, connections and fork. Built from a
//!   [`TopologyConfig`]; dangling or duplicate ids are a [`ConfigurationError`].
//! - [`PathSynthesizer`]: pure function from a topology to [`DiagramPaths`].
//! - [`ForkStrategy`]: how the fork's trunk and branches are shaped. See
//!   [`DesignSpaceAffine`] (the default) and [`ProportionalSplit`].
//! - [`Diagram`]: a topology plus its current paths, recomputed on every edit.
//!
//! Node display data ([`DisplayDescriptor`]) is carried but never interpreted.
//!
//! ## Example
//!
//! ```
//! use forkline_paths::{
//!     Connection, ForkJunction, Node, NodeKind, PathSynthesizer, TopologyConfig,
//! };
//! use kurbo::Point;
//!
//! let config = TopologyConfig {
//!     nodes: vec![
//!         Node::new("hop", "Hop", Point::new(350.0, 200.0), NodeKind::Relay),
//!         Node::new("s", "Gateway", Point::new(550.0, 200.0), NodeKind::Relay),
//!         Node::new("a", "Upper", Point::new(980.0, 90.0), NodeKind::Leaf),
//!         Node::new("b", "Lower", Point::new(980.0, 310.0), NodeKind::Leaf),
//!     ],
//!     connections: vec![Connection::new("hop", "s")],
//!     fork: Some(ForkJunction::new("s", "a", "b")),
//!     radius: 55.0,
//! };
//!
//! let svg = PathSynthesizer::default()
//!     .synthesize_config(config)
//!     .unwrap()
//!     .to_svg();
//! assert_eq!(svg.connections[0], "M 405 200 L 495 200");
//! assert!(svg.trunk.starts_with("M 605 200"));
//! assert!(svg.branch_a.ends_with("925 90"));
//! assert!(svg.branch_b.ends_with("925 310"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod diagram;
mod error;
pub mod fork;
mod svg;
mod synth;
mod topology;
mod types;

pub use diagram::Diagram;
pub use error::{ConfigurationError, Result};
pub use fork::{DesignSpaceAffine, ForkPaths, ForkStrategy, ProportionalSplit};
pub use svg::path_data;
pub use synth::{ConnectionPath, DiagramPaths, PathStrings, PathSynthesizer};
pub use topology::{Topology, TopologyConfig};
pub use types::{
    Connection, DEFAULT_RADIUS, DisplayDescriptor, DisplayField, ForkJunction, Node, NodeId,
    NodeKind, NodeStatus,
};
