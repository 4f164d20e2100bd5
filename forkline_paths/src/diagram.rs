// Copyright 2025 the Forkline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A topology paired with its current geometry.

use kurbo::Point;

use crate::error::Result;
use crate::synth::{DiagramPaths, PathSynthesizer, PathStrings};
use crate::topology::{Topology, TopologyConfig};

/// Keeps [`DiagramPaths`] in step with a [`Topology`].
///
/// Geometry is recomputed by every mutator here and by nothing else; edits made
/// elsewhere are not observed.
#[derive(Debug)]
pub struct Diagram {
    topology: Topology,
    synthesizer: PathSynthesizer,
    paths: DiagramPaths,
}

impl Diagram {
    /// Validate `config` and synthesize its paths.
    pub fn new(config: TopologyConfig, synthesizer: PathSynthesizer) -> Result<Self> {
        let topology = Topology::new(config)?;
        let paths = synthesizer.synthesize(&topology);
        Ok(Self {
            topology,
            synthesizer,
            paths,
        })
    }

    /// The current topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Geometry for the current topology.
    pub fn paths(&self) -> &DiagramPaths {
        &self.paths
    }

    /// SVG path data for the current topology.
    pub fn svg(&self) -> PathStrings {
        self.paths.to_svg()
    }

    /// Replace the whole configuration. On error nothing changes.
    pub fn replace(&mut self, config: TopologyConfig) -> Result<()> {
        self.topology.replace(config)?;
        self.refresh();
        Ok(())
    }

    /// Move one node.
    pub fn set_position(&mut self, id: &str, position: Point) -> Result<()> {
        self.topology.set_position(id, position)?;
        self.refresh();
        Ok(())
    }

    /// Change the uniform radius.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.topology.set_radius(radius)?;
        self.refresh();
        Ok(())
    }

    /// Swap the synthesizer and recompute.
    pub fn set_synthesizer(&mut self, synthesizer: PathSynthesizer) {
        self.synthesizer = synthesizer;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.paths = self.synthesizer.synthesize(&self.topology);
    }
}
