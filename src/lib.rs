pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, Color, NVec3};
pub use simulation::params::{Parameters, G_SI};
pub use simulation::registry::{BodyRegistry, Registry};
pub use simulation::mass::{sphere_volume, MassCache, MassModel};
pub use simulation::collision::{elastic_response, CollisionObserver, Contact, ContactSet, IgnoreContacts};
pub use simulation::forces::accumulate_forces;
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::engine::{Simulation, StepReport};
pub use simulation::diagnostics::{first_non_finite, kinetic_energy, total_momentum};
pub use simulation::scenario::{circular_speed, Scenario};

pub use configuration::config::{BodyConfig, ParametersConfig, RingConfig, ScenarioConfig, SphereConfig};

pub use benchmark::benchmark::bench_step;
