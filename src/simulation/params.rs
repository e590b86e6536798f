//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - step size and run length (`h0`, `t_end`),
//! - gravitational constant `G`,
//! - the coincidence guard on squared distance and the mass cache tolerance

/// Newton's gravitational constant in SI units
pub const G_SI: f64 = 6.674e-11;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // step size
    pub t_end: f64, // time end
    pub G: f64, // gravitational constant
    pub coincident_eps2: f64, // pairs closer than this (squared) are skipped
    pub mass_eps: f64, // radius/density tolerance for mass cache hits
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            h0: 1.0 / 60.0,
            t_end: 60.0,
            G: G_SI,
            coincident_eps2: f64::EPSILON,
            mass_eps: f64::EPSILON,
        }
    }
}
