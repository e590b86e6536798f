//! Conservation and sanity checks over a registry

use crate::simulation::mass::MassModel;
use crate::simulation::registry::BodyRegistry;
use crate::simulation::states::{BodyId, NVec3};

/// Sum of m * v over all bodies
pub fn total_momentum<R: BodyRegistry>(bodies: &R, masses: &mut MassModel) -> NVec3 {
    let mut p = NVec3::zeros();
    for id in bodies.ids() {
        if let Some(b) = bodies.get(id) {
            p += masses.mass(id, b) * b.velocity;
        }
    }
    p
}

/// Sum of 1/2 m |v|^2 over all bodies
pub fn kinetic_energy<R: BodyRegistry>(bodies: &R, masses: &mut MassModel) -> f64 {
    bodies
        .ids()
        .into_iter()
        .filter_map(|id| bodies.get(id).map(|b| 0.5 * masses.mass(id, b) * b.velocity.norm_squared()))
        .sum()
}

/// First body whose position or velocity went NaN or infinite
pub fn first_non_finite<R: BodyRegistry>(bodies: &R) -> Option<BodyId> {
    bodies
        .ids()
        .into_iter()
        .find(|&id| bodies.get(id).is_some_and(|b| !b.is_finite()))
}
