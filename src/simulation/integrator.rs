//! Time integrator for the N-body system
//!
//! Semi-implicit (symplectic) Euler over the accelerations left behind by
//! the force pass.

use tracing::debug_span;

use super::registry::BodyRegistry;
use super::states::NVec3;

/// Advance every body by `dt` and clear its acceleration.
///
/// v_n+1 = v_n + dt * a_n
/// x_n+1 = x_n + dt * v_n+1
pub fn semi_implicit_euler<R: BodyRegistry>(bodies: &mut R, dt: f64) {
    let _span = debug_span!("integrate", dt).entered();

    for id in bodies.ids() {
        let Some(b) = bodies.get_mut(id) else {
            continue;
        };

        // Kick with this step's acceleration, then drift with the new velocity
        b.velocity += dt * b.acceleration;
        b.position += dt * b.velocity;

        b.acceleration = NVec3::zeros();
    }
}
