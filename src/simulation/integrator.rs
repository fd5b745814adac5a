//! Per-frame step pipeline for the sandbox
//!
//! Advances the whole system by one frame in a fixed order:
//! gravity -> integration -> body-body collisions -> boundary clamp and
//! global damping. Gravity is applied to pre-integration velocities,
//! collisions are resolved on post-integration positions.

use super::states::System;
use super::engine::Engine;
use super::forces::NewtonianGravity;
use super::collision::ContactResolver;
use super::params::Parameters;

/// Integrate every body's position from its velocity over `dt` seconds.
/// Explicit Euler; calling twice with `dt/2` matches one call with `dt`
/// for constant velocities.
pub fn integrate_bodies(sys: &mut System, dt: f64) {
    for b in sys.bodies.iter_mut() {
        b.integrate(dt);
    }
}

/// Advance the system by one frame.
///
/// When `engine.paused` the entire pipeline is skipped and `sys.t` does not
/// advance. When gravity is disabled only the gravity pass is skipped; the
/// other passes always run. Negative `dt` is normalized to zero.
pub fn step(
    sys: &mut System,
    engine: &Engine,
    gravity: &NewtonianGravity,
    contacts: &ContactResolver,
    params: &Parameters,
    dt: f64,
) {
    if engine.paused {
        return;
    }
    let dt = dt.max(0.0);

    // Mutual gravity (pairwise)
    if engine.gravity_enabled {
        gravity.apply_all(sys, dt);
    }

    // Integrate motion
    integrate_bodies(sys, dt);

    // Body-body collisions
    contacts.resolve_all(sys);

    // Boundary collisions + damping
    for b in sys.bodies.iter_mut() {
        b.clamp_to_bounds(params.width, params.height, params.wall_restitution);
        b.v *= params.damping;
    }

    sys.t += dt;
}
