//! Numerical and physical parameters for the sandbox
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant (`g`),
//! - per-frame velocity damping and the two restitution coefficients,
//! - interaction strengths (throw, thrust),
//! - simulation bounds (`width`, `height`)

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant, scaled for simulation feel
    pub damping: f64, // global velocity damping, applied every frame
    pub restitution: f64, // body-body restitution
    pub wall_restitution: f64, // boundary restitution
    pub throw_strength: f64, // drag velocity = pointer delta * throw_strength
    pub thrust: f64, // keyboard thrust, velocity change per second
    pub width: f64, // simulation bounds
    pub height: f64,
}
