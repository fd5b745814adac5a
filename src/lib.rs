pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::NewtonianGravity;
pub use simulation::collision::ContactResolver;
pub use simulation::integrator::{integrate_bodies, step};
pub use simulation::scenario::{Sandbox, Spawner, Material, DisplaySettings};

pub use configuration::config::{SandboxConfig, WindowConfig, PhysicsConfig, MaterialConfig};

pub use visualization::sandbox::run_sandbox;

pub use benchmark::benchmark::{bench_gravity, bench_step};
