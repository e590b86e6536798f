//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - the body registry populated at t = 0
//! - a `Simulation` carrying the parameters and an empty mass cache

use std::f64::consts::TAU;

use tracing::info;

use crate::configuration::config::{BodyConfig, RingConfig, ScenarioConfig};
use crate::simulation::diagnostics::{kinetic_energy, total_momentum};
use crate::simulation::engine::Simulation;
use crate::simulation::mass::sphere_volume;
use crate::simulation::registry::{BodyRegistry, Registry};
use crate::simulation::states::{Body, Color, NVec3, WHITE};

/// A registry of bodies plus the simulation that steps them
pub struct Scenario {
    pub registry: Registry,
    pub simulation: Simulation,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let parameters = cfg.parameters.to_parameters();
        let mut registry = Registry::new();

        if let Some(ring) = &cfg.ring {
            for body in ring_bodies(ring, parameters.G) {
                registry.spawn(body);
            }
        }

        // Explicit bodies go in after the ring
        for bc in &cfg.bodies {
            registry.spawn(body_from_config(bc));
        }

        let simulation = Simulation::new(parameters);

        let mut scenario = Self { registry, simulation };
        let kinetic = scenario.kinetic_energy();
        info!(
            bodies = scenario.registry.len(),
            h0 = scenario.simulation.parameters.h0,
            t_end = scenario.simulation.parameters.t_end,
            kinetic,
            "scenario built"
        );
        scenario
    }

    /// Number of fixed steps needed to reach `t_end`
    pub fn step_count(&self) -> u64 {
        let p = &self.simulation.parameters;
        (p.t_end / p.h0).ceil() as u64
    }

    pub fn total_momentum(&mut self) -> NVec3 {
        total_momentum(&self.registry, self.simulation.masses_mut())
    }

    pub fn kinetic_energy(&mut self) -> f64 {
        kinetic_energy(&self.registry, self.simulation.masses_mut())
    }

    /// Centre of every body in the registry, in id order
    pub fn positions(&self) -> Vec<NVec3> {
        self.registry
            .ids()
            .into_iter()
            .filter_map(|id| self.registry.get(id).map(|b| b.position))
            .collect()
    }
}

fn body_from_config(bc: &BodyConfig) -> Body {
    Body::new(bc.position(), bc.radius, bc.density)
        .with_velocity(bc.velocity())
        .solid(bc.solid)
        .with_color(bc.color())
}

/// Speed of a circular orbit of radius `r` around mass `m`
pub fn circular_speed(g: f64, m: f64, r: f64) -> f64 {
    (g * m / r).sqrt()
}

/// Central solid body at the origin followed by `count` solid satellites
/// evenly spaced on a circle in the XY plane, moving counter-clockwise.
pub fn ring_bodies(ring: &RingConfig, g: f64) -> Vec<Body> {
    let central_mass = sphere_volume(ring.central.radius) * ring.central.density;
    let orbit_radius = ring.central.radius + ring.altitude;
    let speed = circular_speed(g, central_mass, orbit_radius);

    let mut bodies = Vec::with_capacity(ring.count + 1);
    bodies.push(
        Body::new(NVec3::zeros(), ring.central.radius, ring.central.density)
            .solid(true)
            .with_color(WHITE),
    );

    for i in 0..ring.count {
        let fraction = i as f64 / ring.count as f64;
        let angle = TAU * fraction;
        let (sin, cos) = angle.sin_cos();

        let scale = if ring.ramp_speeds { fraction } else { 1.0 };

        bodies.push(
            Body::new(NVec3::new(cos, sin, 0.0) * orbit_radius, ring.satellite.radius, ring.satellite.density)
                .with_velocity(NVec3::new(-sin, cos, 0.0) * speed * scale)
                .solid(true)
                .with_color(hsv_to_rgb(angle.to_degrees() as f32, 1.0, 1.0)),
        );
    }

    bodies
}

/// HSV (hue in degrees, saturation and value in 0..=1) to opaque RGBA
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Color {
    let h = hue.rem_euclid(360.0) / 60.0;
    let sector = h.floor();
    let f = h - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let (r, g, b) = match sector as u32 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };
    [r, g, b, 1.0]
}
