// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fork geometry strategies.
//!
//! ## Overview
//!
//! A fork is drawn as three paths: a trunk leaving the source node, and two
//! branches arriving at the targets. How the curves are shaped is a
//! [`ForkStrategy`]:
//!
//! - [`DesignSpaceAffine`] (the default) maps one hand-authored reference fork
//!   onto the node positions with a single affine transform, so the curve
//!   proportions stay the same however far apart the nodes are.
//! - [`ProportionalSplit`] places the split point at a fixed fraction of the
//!   horizontal span and derives cubic control points from the remaining span.
//!
//! ## Edges
//!
//! Every endpoint that touches a node sits on the node boundary: it is pulled
//! back from the centre by the render radius, horizontally, towards the side
//! the targets are on. Targets left of the source mirror the shape.

use kurbo::{Affine, BezPath, Point};

use crate::error::{ConfigurationError, Result};

/// The three paths of a fork. All empty when no fork is configured.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForkPaths {
    /// Source edge to split point.
    pub trunk: BezPath,
    /// Split point to the edge of the first target.
    pub branch_a: BezPath,
    /// Split point to the edge of the second target.
    pub branch_b: BezPath,
}

impl ForkPaths {
    /// Returns `true` if none of the three paths has any element.
    pub fn is_empty(&self) -> bool {
        self.trunk.elements().is_empty()
            && self.branch_a.elements().is_empty()
            && self.branch_b.elements().is_empty()
    }
}

/// Shapes a fork from node centres.
///
/// Implementations must be pure: equal inputs give equal paths.
pub trait ForkStrategy: core::fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Build trunk and branches for `source` fanning out to `branch_a` and `branch_b`.
    fn fork_paths(
        &self,
        source: Point,
        branch_a: Point,
        branch_b: Point,
        radius: f64,
    ) -> ForkPaths;
}

/// `+1.0` if the targets lie to the right of the source (or level with it), `-1.0` otherwise.
fn side(source: Point, a: Point, b: Point) -> f64 {
    if (a.x + b.x) * 0.5 < source.x {
        -1.0
    } else {
        1.0
    }
}

/// Sign of the vertical offset from `from_y` to `to_y`, zero when level.
fn lift(from_y: f64, to_y: f64) -> f64 {
    if to_y < from_y {
        -1.0
    } else if to_y > from_y {
        1.0
    } else {
        0.0
    }
}

/// Split at a fixed fraction of the horizontal span, with a flat quadratic trunk
/// and cubic branches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProportionalSplit {
    /// Fraction of the source→`branch_a` horizontal distance where the trunk splits.
    pub split_fraction: f64,
    /// Horizontal position of the first branch control point, as a fraction of the remaining span.
    pub near_control: f64,
    /// Horizontal position of the second branch control point, as a fraction of the remaining span.
    pub far_control: f64,
    /// Vertical offset of the first control point from the trunk line.
    pub near_lift: f64,
    /// Vertical offset of the second control point from the target's centre line.
    pub far_lift: f64,
}

impl Default for ProportionalSplit {
    fn default() -> Self {
        Self {
            split_fraction: 0.45,
            near_control: 0.15,
            far_control: 0.55,
            near_lift: 20.0,
            far_lift: 30.0,
        }
    }
}

impl ProportionalSplit {
    fn branch(&self, split: Point, target: Point, end_x: f64) -> BezPath {
        let span = target.x - split.x;
        let v = lift(split.y, target.y);
        let c1 = Point::new(
            split.x + span * self.near_control,
            split.y + v * self.near_lift,
        );
        let c2 = Point::new(
            split.x + span * self.far_control,
            target.y + v * self.far_lift,
        );
        let mut path = BezPath::new();
        path.move_to(split);
        path.curve_to(c1, c2, Point::new(end_x, target.y));
        path
    }
}

impl ForkStrategy for ProportionalSplit {
    fn name(&self) -> &'static str {
        "proportional-split"
    }

    fn fork_paths(
        &self,
        source: Point,
        branch_a: Point,
        branch_b: Point,
        radius: f64,
    ) -> ForkPaths {
        let dir = side(source, branch_a, branch_b);
        let start = Point::new(source.x + dir * radius, source.y);
        let split = Point::new(
            source.x + (branch_a.x - source.x) * self.split_fraction,
            source.y,
        );

        let mut trunk = BezPath::new();
        trunk.move_to(start);
        trunk.quad_to(start.midpoint(split), split);

        ForkPaths {
            trunk,
            branch_a: self.branch(split, branch_a, branch_a.x - dir * radius),
            branch_b: self.branch(split, branch_b, branch_b.x - dir * radius),
        }
    }
}

/// Width of the reference fork's design space.
pub const REFERENCE_WIDTH: f64 = 208.0;
/// Height of the reference fork's design space.
pub const REFERENCE_HEIGHT: f64 = 110.0;

// Reference fork, in design space. The trunk runs along the midline and both
// branches leave the split tangent to it and arrive level with their tips.
const REF_TRUNK_START: Point = Point::new(0.0, 55.0);
const REF_TRUNK_CTRL: Point = Point::new(36.0, 55.0);
const REF_SPLIT: Point = Point::new(72.0, 55.0);
const REF_BRANCH_CTRL: Point = Point::new(110.0, 55.0);
const REF_TOP_CTRL: Point = Point::new(128.0, 5.0);
const REF_TOP_TIP: Point = Point::new(REFERENCE_WIDTH, 5.0);
const REF_BOTTOM_CTRL: Point = Point::new(128.0, 105.0);
const REF_BOTTOM_TIP: Point = Point::new(REFERENCE_WIDTH, 105.0);
const REF_MID_Y: f64 = REFERENCE_HEIGHT * 0.5;
const REF_TRUNK_SPAN: f64 = REFERENCE_WIDTH - REF_TRUNK_START.x;
const REF_TIP_SPREAD: f64 = REF_BOTTOM_TIP.y - REF_TOP_TIP.y;

/// Mapped points closer than this to an endpoint are snapped onto it instead of
/// getting a handle or tail.
const SNAP_EPSILON: f64 = 1e-6;

/// Maps a fixed reference fork onto the nodes with one affine transform.
///
/// Horizontal scale is the ratio of the available trunk span (source edge to the
/// nearer target edge) to the reference span, times [`compression`](Self::compression).
/// Vertical scale is the ratio of the targets' vertical separation to the
/// reference tip spread. The translation puts the reference tips on the nearer
/// target edge and the reference midline on the source's centre line.
///
/// A straight handle joins the source edge to the mapped trunk start. When a
/// mapped tip misses its target edge (targets not mirrored about the source, or
/// at different x), a straight tail joins them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesignSpaceAffine {
    compression: f64,
}

impl Default for DesignSpaceAffine {
    fn default() -> Self {
        Self { compression: 0.75 }
    }
}

impl DesignSpaceAffine {
    /// Use a custom compression factor in `(0, 1]`.
    ///
    /// Smaller values narrow the fork towards the targets and lengthen the
    /// handle, without moving any endpoint.
    pub fn with_compression(factor: f64) -> Result<Self> {
        if factor > 0.0 && factor <= 1.0 {
            Ok(Self {
                compression: factor,
            })
        } else {
            Err(ConfigurationError::InvalidCompression { factor })
        }
    }

    /// The horizontal compression factor.
    pub fn compression(&self) -> f64 {
        self.compression
    }

    /// Design space → canvas transform for a fork whose tips land on `tip_x`.
    fn mapping(
        &self,
        source: Point,
        dir: f64,
        span: f64,
        separation: f64,
        tip_x: f64,
    ) -> Affine {
        let sx = dir * (span / REF_TRUNK_SPAN) * self.compression;
        let sy = separation / REF_TIP_SPREAD;
        Affine::new([
            sx,
            0.0,
            0.0,
            sy,
            tip_x - sx * REF_TOP_TIP.x,
            source.y - sy * REF_MID_Y,
        ])
    }
}

fn branch_to(t: Affine, ctrl: Point, tip: Point, end: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(t * REF_SPLIT);
    let tip = t * tip;
    if (tip - end).hypot() <= SNAP_EPSILON {
        path.curve_to(t * REF_BRANCH_CTRL, t * ctrl, end);
    } else {
        path.curve_to(t * REF_BRANCH_CTRL, t * ctrl, tip);
        path.line_to(end);
    }
    path
}

impl ForkStrategy for DesignSpaceAffine {
    fn name(&self) -> &'static str {
        "design-space-affine"
    }

    fn fork_paths(
        &self,
        source: Point,
        branch_a: Point,
        branch_b: Point,
        radius: f64,
    ) -> ForkPaths {
        let dir = side(source, branch_a, branch_b);
        let start = Point::new(source.x + dir * radius, source.y);
        let end_a = Point::new(branch_a.x - dir * radius, branch_a.y);
        let end_b = Point::new(branch_b.x - dir * radius, branch_b.y);
        let nearer = if dir > 0.0 {
            end_a.x.min(end_b.x)
        } else {
            end_a.x.max(end_b.x)
        };
        let span = ((nearer - start.x) * dir).max(0.0);
        let separation = (end_b.y - end_a.y) * lift(end_a.y, end_b.y);
        let t = self.mapping(source, dir, span, separation, nearer);

        let mut trunk = BezPath::new();
        trunk.move_to(start);
        let trunk_start = t * REF_TRUNK_START;
        if (trunk_start - start).hypot() > SNAP_EPSILON {
            trunk.line_to(trunk_start);
        }
        trunk.quad_to(t * REF_TRUNK_CTRL, t * REF_SPLIT);

        // The upper target takes the top reference branch.
        let (ctrl_a, tip_a, ctrl_b, tip_b) = if branch_a.y <= branch_b.y {
            (REF_TOP_CTRL, REF_TOP_TIP, REF_BOTTOM_CTRL, REF_BOTTOM_TIP)
        } else {
            (REF_BOTTOM_CTRL, REF_BOTTOM_TIP, REF_TOP_CTRL, REF_TOP_TIP)
        };

        ForkPaths {
            trunk,
            branch_a: branch_to(t, ctrl_a, tip_a, end_a),
            branch_b: branch_to(t, ctrl_b, tip_b, end_b),
        }
    }
}
