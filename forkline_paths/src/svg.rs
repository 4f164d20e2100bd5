// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG path-data serialization.
//!
//! Kurbo's own `BezPath::to_svg` needs `std`; this writer only needs `alloc`
//! and prints a fixed, spaced layout (`M 1 2 Q 3 4 5 6`) so output compares
//! byte-for-byte across runs.

use alloc::string::String;
use core::fmt::Write;

use kurbo::{BezPath, PathEl, Point};

/// Serialize a path to SVG path data. An empty path yields an empty string.
pub fn path_data(path: &BezPath) -> String {
    let mut out = String::new();
    for el in path.elements() {
        if !out.is_empty() {
            out.push(' ');
        }
        match *el {
            PathEl::MoveTo(p) => push_cmd(&mut out, 'M', &[p]),
            PathEl::LineTo(p) => push_cmd(&mut out, 'L', &[p]),
            PathEl::QuadTo(p1, p2) => push_cmd(&mut out, 'Q', &[p1, p2]),
            PathEl::CurveTo(p1, p2, p3) => push_cmd(&mut out, 'C', &[p1, p2, p3]),
            PathEl::ClosePath => out.push('Z'),
        }
    }
    out
}

fn push_cmd(out: &mut String, cmd: char, pts: &[Point]) {
    out.push(cmd);
    for p in pts {
        // Writing into a String cannot fail.
        let _ = write!(out, " {} {}", clean(p.x), clean(p.y));
    }
}

/// Collapse `-0` so mirrored geometry does not print a sign.
fn clean(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}
