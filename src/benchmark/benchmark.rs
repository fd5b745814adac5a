use std::time::Instant;

use crate::simulation::collision::ContactResolver;
use crate::simulation::engine::Engine;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a deterministic System of size `n` inside the bounds
fn make_system(n: usize, params: &Parameters) -> System {
    let mut bodies = Vec::with_capacity(n);
    let center = NVec2::new(params.width * 0.5, params.height * 0.5);
    let spread = 0.45 * params.width.min(params.height);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = center + NVec2::new((i_f * 0.37).sin() * spread, (i_f * 0.13).cos() * spread);

        bodies.push(Body::new(
            x,
            NVec2::zeros(),
            10.0,
            2.0,
            [255, 255, 255],
            i as u64 + 1,
        ));
    }

    System { bodies, t: 0.0 }
}

fn bench_params() -> Parameters {
    Parameters {
        g: 300.0,
        damping: 0.98,
        restitution: 0.6,
        wall_restitution: 0.9,
        throw_strength: 50.0,
        thrust: 1200.0,
        width: 800.0,
        height: 800.0,
    }
}

/// Time a single pairwise gravity pass for a range of system sizes.
pub fn bench_gravity() {
    // Different system sizes to test
    let ns = [200, 400, 800, 1600, 3200];
    let dt = 1.0 / 60.0;

    let params = bench_params();
    let gravity = NewtonianGravity { g: params.g };

    for n in ns {
        let mut sys = make_system(n, &params);

        // Warm up
        gravity.apply_all(&mut sys, dt);

        let t0 = Instant::now();
        gravity.apply_all(&mut sys, dt);
        let elapsed = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity pass = {elapsed:8.6} s");
    }
}

/// Time the full per-frame pipeline (gravity, integration, collisions,
/// boundary + damping) for a range of system sizes.
pub fn bench_step() {
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 5;
    let dt = 1.0 / 60.0;

    let params = bench_params();
    let engine = Engine::default();
    let gravity = NewtonianGravity { g: params.g };
    let contacts = ContactResolver {
        restitution: params.restitution,
    };

    for n in ns {
        let mut sys = make_system(n, &params);

        // Warm-up
        step(&mut sys, &engine, &gravity, &contacts, &params, dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut sys, &engine, &gravity, &contacts, &params, dt);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, full step = {per_step:8.6} s");
    }
}
