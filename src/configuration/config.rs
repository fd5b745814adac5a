//! Configuration types for loading a sandbox session from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! sandbox configuration:
//!
//! - [`WindowConfig`]   – window size/title; the window doubles as the
//!   simulation bounds so cursor coordinates equal simulation coordinates
//! - [`PhysicsConfig`]  – physical constants and interaction strengths
//! - [`MaterialConfig`] – the weighted material table used when spawning
//! - [`SandboxConfig`]  – top-level wrapper used to load from YAML
//!
//! # YAML format
//! An example configuration matching these types:
//!
//! ```yaml
//! window:
//!   width: 800.0
//!   height: 800.0
//!   title: "gravbox"
//!   background: [14, 0, 53]
//!
//! physics:
//!   g: 300.0                # gravitational constant (simulation-scaled)
//!   damping: 0.98           # per-frame velocity damping
//!   restitution: 0.6        # body-body restitution
//!   wall_restitution: 0.9   # boundary restitution
//!   throw_strength: 50.0    # drag velocity per pixel of pointer delta
//!   thrust: 1200.0          # keyboard thrust (velocity change per second)
//!
//! materials:
//!   - name: rock
//!     density: 1.0          # mass = density * pi * radius^2
//!     weight: 250.0         # relative spawn probability
//!     color: [192, 192, 192]
//! ```
//!
//! The configuration is loaded once at process start and mapped into the
//! runtime `Sandbox` bundle; it is immutable thereafter.

use serde::Deserialize;

/// Window dimensions, title, and background color
/// Width/height also serve as the simulation bounds
#[derive(Deserialize, Debug)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub background: [u8; 3], // clear color
}

/// Physical constants and interaction strengths for a session
#[derive(Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
    pub g: f64,                // gravitational constant
    pub damping: f64,          // global per-frame velocity damping
    pub restitution: f64,      // body-body restitution
    pub wall_restitution: f64, // boundary restitution
    pub throw_strength: f64,   // drag-release velocity scale
    pub thrust: f64,           // keyboard thrust
}

/// One entry of the weighted material table
#[derive(Deserialize, Debug)]
pub struct MaterialConfig {
    pub name: String,
    pub density: f64,   // mass per unit area
    pub weight: f64,    // relative selection weight at spawn
    pub color: [u8; 3], // render color
}

/// Top-level sandbox configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct SandboxConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub materials: Vec<MaterialConfig>,
}
