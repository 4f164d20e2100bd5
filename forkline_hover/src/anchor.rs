// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover anchor placement.
//!
//! ## Overview
//!
//! [`position_anchor`] puts a popover centred above its node, then nudges it so
//! it stays on the drawing surface:
//!
//! 1. Clamp `x` so the popover keeps [`PlacementConfig::margin`] from both sides.
//! 2. Flip below the node when there is no room above.
//! 3. Correct for an approximate popover height overflowing the top or bottom.
//!
//! This is a best-effort heuristic. Popover height varies with content, so the
//! renderer settles exact layout at draw time.
//!
//! ## Degenerate surfaces
//!
//! A missing surface, a surface with no width, or one too narrow for the popover
//! and its margins does not fail: the default anchor above the node is returned
//! unclamped.

use kurbo::{Point, Rect};

/// Source of the drawing surface's bounding rectangle.
///
/// Queried on every placement and never cached, since layout can reflow between
/// hovers. Returns `None` when the surface is not laid out (for example detached).
pub trait SurfaceMetrics {
    /// Current bounding rectangle of the surface, in the nodes' coordinate space.
    fn bounding_rect(&self) -> Option<Rect>;
}

impl SurfaceMetrics for Rect {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl SurfaceMetrics for Option<Rect> {
    fn bounding_rect(&self) -> Option<Rect> {
        *self
    }
}

/// A live query, such as `|| container.bounding_rect()`.
impl<F: Fn() -> Option<Rect>> SurfaceMetrics for F {
    fn bounding_rect(&self) -> Option<Rect> {
        self()
    }
}

/// Tunables for [`position_anchor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementConfig {
    /// Minimum horizontal gap between popover and surface edge.
    pub margin: f64,
    /// Gap between node boundary and anchor when placed above.
    pub offset_above: f64,
    /// Gap between node boundary and anchor when flipped below.
    pub offset_below: f64,
    /// An anchor above this `y` has no room and flips below the node.
    pub flip_threshold: f64,
    /// Assumed popover height.
    pub approx_height: f64,
    /// How far past the top edge the popover may extend before it is pushed down.
    pub top_tolerance: f64,
    /// Gap kept below the assumed popover height when pushed down.
    pub top_padding: f64,
    /// Gap kept from the bottom edge.
    pub bottom_padding: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            margin: 20.0,
            offset_above: 25.0,
            offset_below: 24.0,
            flip_threshold: 10.0,
            approx_height: 240.0,
            top_tolerance: 40.0,
            top_padding: 10.0,
            bottom_padding: 20.0,
        }
    }
}

/// Compute the popover anchor for a node centred at `center`.
///
/// `width` is the popover width and `radius` the node radius. Horizontal
/// clamping uses `surface.x0..surface.x1`; vertical corrections use
/// `surface.height()` against node coordinates.
pub fn position_anchor(
    center: Point,
    width: f64,
    radius: f64,
    surface: Option<Rect>,
    config: &PlacementConfig,
) -> Point {
    let default = Point::new(center.x, center.y - (radius + config.offset_above));

    let Some(rect) = surface else {
        tracing::warn!("no surface rectangle; using default popover anchor");
        return default;
    };
    let half = width * 0.5;
    let min_x = rect.x0 + config.margin + half;
    let max_x = rect.x1 - config.margin - half;
    if !(rect.width() > 0.0 && width.is_finite() && min_x <= max_x) {
        tracing::warn!(
            surface_width = rect.width(),
            popover_width = width,
            "surface too small for popover; using default anchor"
        );
        return default;
    }

    let x = center.x.clamp(min_x, max_x);
    let mut y = default.y;

    if y < config.flip_threshold {
        y = center.y + radius + config.offset_below;
    }
    if y - config.approx_height < -config.top_tolerance {
        y = config.approx_height + config.top_padding;
    }
    let bottom_overflow = y + config.bottom_padding - rect.height();
    if bottom_overflow > 0.0 {
        y -= bottom_overflow + config.bottom_padding;
    }

    Point::new(x, y)
}
