//! Force & collision pass for the n-body engine
//!
//! Direct O(n²) sweep over ordered pairs: Newtonian gravity accumulated into
//! `Body::acceleration`, and elastic response for overlapping solid spheres.

use tracing::{debug, debug_span};

use crate::simulation::collision::{elastic_response, CollisionObserver, ContactSet};
use crate::simulation::mass::MassModel;
use crate::simulation::params::Parameters;
use crate::simulation::registry::BodyRegistry;
use crate::simulation::states::{Body, BodyId, NVec3};

/// Copies of two bodies and the geometry between them
struct PairState {
    body_a: Body,
    body_b: Body,
    displacement: NVec3, // points from a to b
    distance2: f64,
}

impl PairState {
    fn read<R: BodyRegistry>(bodies: &R, a: BodyId, b: BodyId) -> Option<Self> {
        let body_a = *bodies.get(a)?;
        let body_b = *bodies.get(b)?;
        let displacement = body_b.position - body_a.position;
        Some(Self {
            body_a,
            body_b,
            displacement,
            distance2: displacement.norm_squared(),
        })
    }

    fn overlapping(&self) -> bool {
        self.distance2.sqrt() < self.body_a.radius + self.body_b.radius
    }

    fn both_solid(&self) -> bool {
        self.body_a.is_solid && self.body_b.is_solid
    }
}

/// Run one force & collision pass over every body in `bodies`.
///
/// Accelerations are only added to, never cleared; the integrator zeroes
/// them. Velocities of colliding solid pairs change in place, so pairs
/// evaluated later in the same pass see the new values.
pub fn accumulate_forces<R, O>(
    bodies: &mut R,
    masses: &mut MassModel,
    params: &Parameters,
    observer: &mut O,
) -> ContactSet
where
    R: BodyRegistry,
    O: CollisionObserver + ?Sized,
{
    let ids = bodies.ids();
    let _span = debug_span!("force_pass", bodies = ids.len()).entered();
    let mut contacts = ContactSet::new();

    // Loop over each ordered pair (a, b) with a != b.
    // Each ordered pair only ever adds to a's acceleration, so the mirrored
    // visit (b, a) supplies b's share of the same interaction.
    for &a in &ids {
        for &b in &ids {
            if a == b {
                continue;
            }

            // Copies of both bodies as they are right now (Body is Copy).
            // Earlier pairs may already have changed their velocities.
            let Some(mut pair) = PairState::read(bodies, a, b) else {
                continue;
            };

            // Coincident centres: no direction to pull along, skip the pair
            if pair.distance2 < params.coincident_eps2 {
                continue;
            }

            let solid_contact = match contacts.resolved(a, b) {
                // Mirrored visit: the pair was settled when first met,
                // whatever the geometry is by now
                Some(solid) => solid,
                None if pair.overlapping() => {
                    debug!(a = %a, b = %b, distance = pair.distance2.sqrt(), "contact");
                    observer.on_collision(a, b, bodies);

                    // The observer may have changed either body
                    let Some(updated) = PairState::read(bodies, a, b) else {
                        continue;
                    };
                    pair = updated;

                    let solid = pair.overlapping() && pair.both_solid();
                    contacts.insert(a, b, solid);
                    if solid {
                        resolve_contact(bodies, masses, a, b, &pair);
                    }
                    solid
                }
                None => false,
            };

            // Solid contact replaces attraction for this pair
            if solid_contact || pair.distance2 < params.coincident_eps2 {
                continue;
            }

            // a_a += G * m_b / |d|^2 * d_hat
            let distance = pair.distance2.sqrt();
            let direction = pair.displacement / distance;
            let m_b = masses.mass(b, &pair.body_b);
            if let Some(target) = bodies.get_mut(a) {
                target.acceleration += params.G * m_b / pair.distance2 * direction;
            }
        }
    }

    contacts
}

/// Exchange velocities of a solid pair along their line of centres
fn resolve_contact<R: BodyRegistry>(
    bodies: &mut R,
    masses: &mut MassModel,
    a: BodyId,
    b: BodyId,
    pair: &PairState,
) {
    let m_a = masses.mass(a, &pair.body_a);
    let m_b = masses.mass(b, &pair.body_b);

    let (v_a, v_b) = elastic_response(
        pair.body_a.position,
        pair.body_a.velocity,
        m_a,
        pair.body_b.position,
        pair.body_b.velocity,
        m_b,
    );

    if let Some(body) = bodies.get_mut(a) {
        body.velocity = v_a;
    }
    if let Some(body) = bodies.get_mut(b) {
        body.velocity = v_b;
    }
}
