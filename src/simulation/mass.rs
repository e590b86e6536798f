//! Mass derived from sphere geometry, memoised per body.

use std::collections::HashMap;
use std::f64::consts::PI;

use tracing::trace;

use crate::simulation::states::{Body, BodyId};

pub fn sphere_volume(radius: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3)
}

/// Cached mass plus the inputs it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassCache {
    pub mass: f64,
    pub volume: f64,
    pub radius: f64,
    pub density: f64,
}

impl MassCache {
    fn compute(radius: f64, density: f64) -> Self {
        let volume = sphere_volume(radius);
        Self {
            mass: volume * density,
            volume,
            radius,
            density,
        }
    }

    fn matches(&self, body: &Body, eps: f64) -> bool {
        (self.radius - body.radius).abs() < eps && (self.density - body.density).abs() < eps
    }
}

/// Per-body mass cache owned by a `Simulation`.
///
/// An entry is reused only while the body's radius and density stay within
/// `eps` of the values it was computed from, so a stale entry for a reused id
/// is recomputed unless the new body happens to match it.
#[derive(Debug, Clone)]
pub struct MassModel {
    entries: HashMap<BodyId, MassCache>,
    eps: f64,
    recomputes: u64,
}

impl MassModel {
    pub fn new(eps: f64) -> Self {
        Self {
            entries: HashMap::new(),
            eps,
            recomputes: 0,
        }
    }

    /// Mass of `body`, stored under `id`
    pub fn mass(&mut self, id: BodyId, body: &Body) -> f64 {
        if let Some(cache) = self.entries.get(&id) {
            if cache.matches(body, self.eps) {
                return cache.mass;
            }
        }

        let cache = MassCache::compute(body.radius, body.density);
        trace!(body = %id, radius = body.radius, density = body.density, mass = cache.mass, "mass recomputed");
        self.recomputes += 1;
        self.entries.insert(id, cache);
        cache.mass
    }

    pub fn entry(&self, id: BodyId) -> Option<&MassCache> {
        self.entries.get(&id)
    }

    pub fn evict(&mut self, id: BodyId) -> Option<MassCache> {
        self.entries.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of cache misses so far
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}

impl Default for MassModel {
    fn default() -> Self {
        Self::new(f64::EPSILON)
    }
}
