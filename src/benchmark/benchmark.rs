use std::time::Instant;

use crate::simulation::collision::IgnoreContacts;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::registry::Registry;
use crate::simulation::states::{Body, NVec3};

/// Time the force pass alone and the full step for growing body counts.
/// The pass is O(n^2), so each doubling of N should cost roughly 4x.
pub fn bench_step() {
    // Different system sizes to test
    let ns = [25, 50, 100, 200, 400, 800];
    let steps = 20;

    for n in ns {
        let registry_template = make_registry(n);

        let parameters = Parameters {
            h0: 0.001,
            t_end: 1.0,
            G: 0.1,
            ..Default::default()
        };

        // Force pass only
        let mut registry = registry_template.clone();
        let mut sim = Simulation::new(parameters.clone());

        // Warm up, also fills the mass cache
        sim.apply_forces(&mut registry, &mut IgnoreContacts);

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.apply_forces(&mut registry, &mut IgnoreContacts);
        }
        let pass_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        // Full step: pass + integrator
        let mut registry = registry_template.clone();
        let mut sim = Simulation::new(parameters);
        sim.step(&mut registry);

        let mut contacts = 0;
        let t1 = Instant::now();
        for _ in 0..steps {
            contacts += sim.step(&mut registry).contacts.len();
        }
        let full_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {:5}, force pass = {:8.6} s, full step = {:8.6} s, contacts/step = {:6.1}",
            n,
            pass_per_step,
            full_per_step,
            contacts as f64 / steps as f64
        );
    }
}

/// Helper to build a registry of size `n`
fn make_registry(n: usize) -> Registry {
    let mut registry = Registry::new();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );
        registry.spawn(Body::new(x, 0.05, 1.0).solid(i % 2 == 0));
    }

    registry
}
