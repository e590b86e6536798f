//! Core state types for the N-body simulation.
//!
//! Defines the 3D `Body` record and its opaque identifier `BodyId`.
//! Bodies live in a registry (see `registry.rs`); the simulation only
//! reads and mutates them in place by id.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// RGBA color, carried for whoever draws the bodies. Physics never reads it.
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

/// Opaque body identifier handed out by a registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: NVec3, // m
    pub velocity: NVec3, // m/s
    pub acceleration: NVec3, // m/s^2, accumulated during a step
    pub radius: f64, // m
    pub density: f64, // kg/m^3
    pub is_solid: bool, // solid pairs bounce instead of attracting while overlapping
    pub color: Color,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: NVec3::zeros(),
            velocity: NVec3::zeros(),
            acceleration: NVec3::zeros(),
            radius: 1.0,
            density: 1.0,
            is_solid: false,
            color: WHITE,
        }
    }
}

impl Body {
    /// Non-solid body at rest at `position`
    pub fn new(position: NVec3, radius: f64, density: f64) -> Self {
        Self {
            position,
            radius,
            density,
            ..Default::default()
        }
    }

    pub fn with_velocity(mut self, velocity: NVec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn solid(mut self, is_solid: bool) -> Self {
        self.is_solid = is_solid;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// True when position and velocity hold only finite values
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|c| c.is_finite()) && self.velocity.iter().all(|c| c.is_finite())
    }
}
