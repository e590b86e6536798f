//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, run length and physical constants
//! - [`BodyConfig`]       – initial state for each explicitly listed body
//! - [`RingConfig`]       – optional generated ring of satellites around a central body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   h0: 0.0166667           # fixed step size (s)
//!   t_end: 60.0             # total simulation time (s)
//!   G: 6.674e-11            # optional, gravitational constant
//!   coincident_eps2: 1e-16  # optional, skip pairs closer than this (squared)
//!   mass_eps: 2.2e-16       # optional, mass cache tolerance
//!
//! bodies:
//!   - position: [ 40.0, 0.0, 0.0 ]
//!     velocity: [ 0.0, 0.0, 0.0 ]
//!     radius: 2.0
//!     density: 1.0
//!     solid: true
//!     color: [ 1.0, 0.5, 0.0 ]
//!
//! ring:
//!   count: 15
//!   altitude: 10.0
//!   ramp_speeds: true
//!   central:   { radius: 10.0, density: 1.0e10 }
//!   satellite: { radius: 1.0, density: 0.2387 }
//! ```
//!
//! [`crate::Scenario::build_scenario`] maps this into a registry and a
//! ready-to-step `Simulation`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Color, NVec3, WHITE};

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h0: f64, // time step size
    pub t_end: f64, // time end
    #[serde(default)]
    pub G: Option<f64>, // gravitational constant, SI value if omitted
    #[serde(default)]
    pub coincident_eps2: Option<f64>, // squared distance below which a pair is skipped
    #[serde(default)]
    pub mass_eps: Option<f64>, // tolerance when comparing radius/density against the mass cache
}

impl ParametersConfig {
    pub fn to_parameters(&self) -> Parameters {
        let defaults = Parameters::default();
        Parameters {
            h0: self.h0,
            t_end: self.t_end,
            G: self.G.unwrap_or(defaults.G),
            coincident_eps2: self.coincident_eps2.unwrap_or(defaults.coincident_eps2),
            mass_eps: self.mass_eps.unwrap_or(defaults.mass_eps),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub position: Vec<f64>, // initial position, 3 components
    #[serde(default)]
    pub velocity: Option<Vec<f64>>, // initial velocity, at rest if omitted
    pub radius: f64,
    pub density: f64,
    #[serde(default)]
    pub solid: bool, // solid bodies bounce off other solid bodies
    #[serde(default)]
    pub color: Option<Vec<f32>>, // RGB or RGBA, white if omitted
}

impl BodyConfig {
    pub fn position(&self) -> NVec3 {
        to_vec3(&self.position)
    }

    pub fn velocity(&self) -> NVec3 {
        self.velocity.as_deref().map(to_vec3).unwrap_or_else(NVec3::zeros)
    }

    pub fn color(&self) -> Color {
        match self.color.as_deref() {
            Some([r, g, b]) => [*r, *g, *b, 1.0],
            Some([r, g, b, a]) => [*r, *g, *b, *a],
            _ => WHITE,
        }
    }
}

/// Radius and density of a generated sphere
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct SphereConfig {
    pub radius: f64,
    pub density: f64,
}

/// A dense central body with `count` satellites spread evenly on a circle
#[derive(Deserialize, Debug, Clone)]
pub struct RingConfig {
    pub count: usize,
    pub altitude: f64, // orbit radius = central.radius + altitude
    #[serde(default)]
    pub ramp_speeds: bool, // satellite i gets i/count of circular speed
    pub central: SphereConfig,
    pub satellite: SphereConfig,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub ring: Option<RingConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).context("failed to parse scenario")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject scenarios the engine can't step sensibly
    pub fn validate(&self) -> Result<()> {
        let p = &self.parameters;
        ensure!(p.h0.is_finite() && p.h0 > 0.0, "h0 must be positive and finite, got {}", p.h0);
        ensure!(
            p.t_end.is_finite() && p.t_end >= 0.0,
            "t_end must be finite and not negative, got {}",
            p.t_end
        );
        ensure!(
            !self.bodies.is_empty() || self.ring.is_some(),
            "scenario has no bodies and no ring"
        );

        for (i, b) in self.bodies.iter().enumerate() {
            ensure!(b.position.len() == 3, "body {i}: position needs 3 components, got {}", b.position.len());
            if let Some(v) = &b.velocity {
                ensure!(v.len() == 3, "body {i}: velocity needs 3 components, got {}", v.len());
            }
            if let Some(c) = &b.color {
                ensure!(matches!(c.len(), 3 | 4), "body {i}: color needs 3 or 4 components, got {}", c.len());
            }
            ensure!(b.radius > 0.0, "body {i}: radius must be positive, got {}", b.radius);
        }

        if let Some(ring) = &self.ring {
            ensure!(ring.central.radius > 0.0, "ring: central radius must be positive");
            ensure!(ring.satellite.radius > 0.0, "ring: satellite radius must be positive");
            ensure!(ring.altitude >= 0.0, "ring: altitude must not be negative");
        }

        Ok(())
    }
}

fn to_vec3(v: &[f64]) -> NVec3 {
    let c = |i: usize| v.get(i).copied().unwrap_or(0.0);
    NVec3::new(c(0), c(1), c(2))
}
