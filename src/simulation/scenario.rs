//! Build the fully-initialized runtime sandbox from configuration
//!
//! Takes a `SandboxConfig` (YAML-facing) and produces the runtime bundle
//! (`Sandbox`) containing:
//! - runtime toggles (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the active force and contact solvers
//! - system state (`System`, empty at t = 0)
//! - the body spawner (`Spawner` with the material table and id counter)
//!
//! The sandbox is inserted into Bevy as a `Resource` and consumed by the
//! input, physics, and rendering systems.

use std::f64::consts::{PI, TAU};

use bevy::prelude::Resource;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::configuration::config::SandboxConfig;
use crate::simulation::collision::ContactResolver;
use crate::simulation::engine::Engine;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

// Preset system layout: one heavy central body plus four orbiters on
// circular orbits at increasing radii.
const PRESET_STAR_RADIUS: f64 = 45.0;
const PRESET_STAR_DENSITY: f64 = 3.5;
const PRESET_STAR_COLOR: [u8; 3] = [255, 255, 0];
const PRESET_ORBITERS: usize = 4;
const PRESET_BASE_ORBIT: f64 = 100.0;
const PRESET_ORBIT_SPACING: f64 = 70.0;
const PRESET_ORBITER_COLOR: [u8; 3] = [0, 0, 255];

// Spawn-time radius range for user-spawned bodies
const SPAWN_RADIUS_MIN: f64 = 8.0;
const SPAWN_RADIUS_MAX: f64 = 50.0;

/// A named material: density drives the spawn-time mass, color the render.
#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    pub density: f64,
    pub color: [u8; 3],
}

/// Creates bodies with material-derived mass and strictly increasing ids.
pub struct Spawner {
    materials: Vec<Material>,
    weights: WeightedIndex<f64>,
    next_id: u64,
}

impl Spawner {
    /// `weights[i]` is the relative selection weight of `materials[i]`.
    pub fn new(materials: Vec<Material>, weights: Vec<f64>) -> Self {
        assert!(!materials.is_empty(), "material table must not be empty");
        assert_eq!(
            materials.len(),
            weights.len(),
            "one weight per material required"
        );
        for m in &materials {
            assert!(m.density > 0.0, "material {} has non-positive density", m.name);
        }
        let weights =
            WeightedIndex::new(weights).expect("material weights must be positive and finite");
        Self {
            materials,
            weights,
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Spawn a body at rest at `at`: weighted-random material, radius
    /// uniform in [8, 50], mass = density * pi * radius^2. Returns the
    /// index of the new body.
    pub fn spawn_random(&mut self, sys: &mut System, at: NVec2) -> usize {
        let mut rng = rand::thread_rng();
        let material = self.materials[self.weights.sample(&mut rng)].clone();

        let radius = rng.gen_range(SPAWN_RADIUS_MIN..=SPAWN_RADIUS_MAX);
        let mass = material.density * PI * radius * radius;

        let id = self.next_id();
        sys.bodies
            .push(Body::new(at, NVec2::zeros(), mass, radius, material.color, id));
        sys.bodies.len() - 1
    }

    /// Spawn the preset system around `center`: a heavy central body plus
    /// orbiters placed at random angles with the exact tangential speed
    /// `sqrt(g * M / r)` for a circular orbit under the same gravity law
    /// the step pipeline applies.
    pub fn spawn_orbital_system(&mut self, sys: &mut System, center: NVec2, g: f64) {
        let mut rng = rand::thread_rng();

        let star_mass = PRESET_STAR_DENSITY * PI * PRESET_STAR_RADIUS * PRESET_STAR_RADIUS;
        let star_id = self.next_id();
        sys.bodies.push(Body::new(
            center,
            NVec2::zeros(),
            star_mass,
            PRESET_STAR_RADIUS,
            PRESET_STAR_COLOR,
            star_id,
        ));

        for i in 0..PRESET_ORBITERS {
            let r = PRESET_BASE_ORBIT + i as f64 * PRESET_ORBIT_SPACING;
            let angle = rng.gen_range(0.0..TAU);

            let position = center + NVec2::new(angle.cos(), angle.sin()) * r;

            // Tangential direction, perpendicular to the outward radial
            let speed = (g * star_mass / r).sqrt();
            let velocity = NVec2::new(-angle.sin(), angle.cos()) * speed;

            let radius = rng.gen_range(6.0..=12.0);
            let mass = PI * radius * radius;

            let id = self.next_id();
            sys.bodies.push(Body::new(
                position,
                velocity,
                mass,
                radius,
                PRESET_ORBITER_COLOR,
                id,
            ));
        }
    }
}

/// Window title and background, read by the viewer only.
#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub title: String,
    pub background: [u8; 3],
}

/// Bevy resource representing the fully-initialized sandbox session
///
/// This is the main runtime bundle constructed from a [`SandboxConfig`]:
/// it contains the runtime toggles, parameters, solvers, current system
/// state, and the spawner. Inserted as a `Resource` and read/mutated by
/// the input, physics, and rendering systems.
#[derive(Resource)]
pub struct Sandbox {
    pub engine: Engine,
    pub params: Parameters,
    pub gravity: NewtonianGravity,
    pub contacts: ContactResolver,
    pub system: System,
    pub spawner: Spawner,
    pub display: DisplaySettings,
}

impl Sandbox {
    pub fn build(cfg: SandboxConfig) -> Self {
        // Parameters (runtime) from PhysicsConfig + window bounds
        let p_cfg = cfg.physics;
        let params = Parameters {
            g: p_cfg.g,
            damping: p_cfg.damping,
            restitution: p_cfg.restitution,
            wall_restitution: p_cfg.wall_restitution,
            throw_strength: p_cfg.throw_strength,
            thrust: p_cfg.thrust,
            width: cfg.window.width,
            height: cfg.window.height,
        };

        // Solvers from parameters
        let gravity = NewtonianGravity { g: params.g };
        let contacts = ContactResolver {
            restitution: params.restitution,
        };

        // Materials: map MaterialConfig -> runtime Material + weight table
        let mut materials = Vec::with_capacity(cfg.materials.len());
        let mut weights = Vec::with_capacity(cfg.materials.len());
        for mc in &cfg.materials {
            materials.push(Material {
                name: mc.name.clone(),
                density: mc.density,
                color: mc.color,
            });
            weights.push(mc.weight);
        }
        let spawner = Spawner::new(materials, weights);

        let display = DisplaySettings {
            title: cfg.window.title,
            background: cfg.window.background,
        };

        Self {
            engine: Engine::default(),
            params,
            gravity,
            contacts,
            system: System::new(),
            spawner,
            display,
        }
    }
}
