pub mod states;
pub mod params;
pub mod registry;
pub mod mass;
pub mod collision;
pub mod forces;
pub mod integrator;
pub mod engine;
pub mod diagnostics;
pub mod scenario;
