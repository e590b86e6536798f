//! Contact bookkeeping and elastic response between overlapping spheres

use std::collections::HashMap;

use crate::simulation::registry::BodyRegistry;
use crate::simulation::states::{BodyId, NVec3};

/// One overlapping pair, reported once per step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: BodyId, // body visited first
    pub b: BodyId,
    pub solid: bool, // both solid, velocities were exchanged
}

impl Contact {
    /// `(min, max)` of the two ids
    pub fn key(&self) -> (BodyId, BodyId) {
        pair_key(self.a, self.b)
    }

    pub fn involves(&self, id: BodyId) -> bool {
        self.a == id || self.b == id
    }
}

fn pair_key(a: BodyId, b: BodyId) -> (BodyId, BodyId) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Unordered pairs already resolved during the current force pass,
/// with the solid/not-solid decision taken for each
#[derive(Debug, Default, Clone)]
pub struct ContactSet {
    resolved: HashMap<(BodyId, BodyId), bool>,
    contacts: Vec<Contact>,
}

impl ContactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pair. Returns false if `(a, b)` or `(b, a)` was already in.
    pub fn insert(&mut self, a: BodyId, b: BodyId, solid: bool) -> bool {
        let key = pair_key(a, b);
        if self.resolved.contains_key(&key) {
            return false;
        }
        self.resolved.insert(key, solid);
        self.contacts.push(Contact { a, b, solid });
        true
    }

    /// `Some(solid)` if the pair was already resolved this pass, in either order
    pub fn resolved(&self, a: BodyId, b: BodyId) -> Option<bool> {
        self.resolved.get(&pair_key(a, b)).copied()
    }

    /// Contacts in the order they were found
    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }
}

/// Receives a notification for every overlapping pair, solid or not.
///
/// Runs in the middle of the force pass, before the pair is settled. Any
/// change made through `bodies` decides whether this pair bounces, feeds its
/// response and gravity, and is seen by every pair after it.
pub trait CollisionObserver {
    fn on_collision(&mut self, a: BodyId, b: BodyId, bodies: &mut dyn BodyRegistry);
}

impl<F> CollisionObserver for F
where
    F: FnMut(BodyId, BodyId),
{
    fn on_collision(&mut self, a: BodyId, b: BodyId, _bodies: &mut dyn BodyRegistry) {
        self(a, b)
    }
}

/// Observer that ignores every contact
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreContacts;

impl CollisionObserver for IgnoreContacts {
    fn on_collision(&mut self, _a: BodyId, _b: BodyId, _bodies: &mut dyn BodyRegistry) {}
}

/// Elastic two-sphere collision along the line of centres.
///
/// Returns the new velocities of `a` and `b`. Only the components along
/// `x_b - x_a` change, so tangential motion survives untouched. Coincident
/// centres leave both velocities as they were.
pub fn elastic_response(
    x_a: NVec3,
    v_a: NVec3,
    m_a: f64,
    x_b: NVec3,
    v_b: NVec3,
    m_b: f64,
) -> (NVec3, NVec3) {
    let d = x_b - x_a;
    let d2 = d.norm_squared();
    let m_sum = m_a + m_b;
    if d2 == 0.0 || m_sum == 0.0 {
        return (v_a, v_b);
    }

    // v_a' = v_a - 2 m_b / (m_a + m_b) * <v_a - v_b, -d> / |d|^2 * (-d)
    let v_a_new = v_a - (2.0 * m_b / m_sum) * ((v_a - v_b).dot(&-d) / d2) * -d;
    // v_b' = v_b - 2 m_a / (m_a + m_b) * <v_b - v_a, d> / |d|^2 * d
    let v_b_new = v_b - (2.0 * m_a / m_sum) * ((v_b - v_a).dot(&d) / d2) * d;

    (v_a_new, v_b_new)
}
