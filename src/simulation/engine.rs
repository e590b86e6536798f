//! Step driver
//!
//! `Simulation` owns the parameters and the mass cache and runs one step as
//! force & collision pass followed by the integrator. Bodies stay in the
//! caller's registry.

use tracing::debug_span;

use crate::simulation::collision::{CollisionObserver, Contact, IgnoreContacts};
use crate::simulation::forces::accumulate_forces;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::mass::MassModel;
use crate::simulation::params::Parameters;
use crate::simulation::registry::BodyRegistry;
use crate::simulation::states::BodyId;

/// What happened during one step
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    pub dt: f64,
    pub bodies: usize,
    pub contacts: Vec<Contact>, // in the order they were found
}

#[derive(Debug, Clone)]
pub struct Simulation {
    pub parameters: Parameters,
    masses: MassModel,
    t: f64,
    steps: u64,
}

impl Simulation {
    pub fn new(parameters: Parameters) -> Self {
        let masses = MassModel::new(parameters.mass_eps);
        Self {
            parameters,
            masses,
            t: 0.0,
            steps: 0,
        }
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn masses(&self) -> &MassModel {
        &self.masses
    }

    pub fn masses_mut(&mut self) -> &mut MassModel {
        &mut self.masses
    }

    /// Mass of body `id`, or `None` if the registry doesn't know it
    pub fn mass<R: BodyRegistry>(&mut self, bodies: &R, id: BodyId) -> Option<f64> {
        let body = bodies.get(id)?;
        Some(self.masses.mass(id, body))
    }

    /// Drop cached masses for bodies the registry destroyed
    pub fn forget_destroyed<R: BodyRegistry>(&mut self, bodies: &mut R) {
        for id in bodies.take_destroyed() {
            self.masses.evict(id);
        }
    }

    /// Force & collision pass only. Accelerations are left in the bodies.
    pub fn apply_forces<R, O>(&mut self, bodies: &mut R, observer: &mut O) -> Vec<Contact>
    where
        R: BodyRegistry,
        O: CollisionObserver + ?Sized,
    {
        accumulate_forces(bodies, &mut self.masses, &self.parameters, observer).into_contacts()
    }

    /// Integrator only
    pub fn advance<R: BodyRegistry>(&mut self, bodies: &mut R, dt: f64) {
        semi_implicit_euler(bodies, dt);
    }

    /// One step of `h0`
    pub fn step<R: BodyRegistry>(&mut self, bodies: &mut R) -> StepReport {
        let dt = self.parameters.h0;
        self.step_by(bodies, dt, &mut IgnoreContacts)
    }

    /// One step of `dt`, reporting contacts to `observer` as they are found
    pub fn step_by<R, O>(&mut self, bodies: &mut R, dt: f64, observer: &mut O) -> StepReport
    where
        R: BodyRegistry,
        O: CollisionObserver + ?Sized,
    {
        let _span = debug_span!("step", n = self.steps, t = self.t, dt).entered();
        self.forget_destroyed(bodies);

        let contacts = self.apply_forces(bodies, observer);
        self.advance(bodies, dt);

        self.t += dt;
        self.steps += 1;

        StepReport {
            dt,
            bodies: bodies.ids().len(),
            contacts,
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}
