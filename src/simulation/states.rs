//! Core state types for the sandbox.
//!
//! Defines the body/collection structs:
//! - `Body` using `NVec2` (position, velocity, mass, radius, color, id)
//! - `System` holding the list of bodies and the current simulation time `t`
//!
//! Simulation space is in pixels with the origin at the top-left and y
//! increasing downward; the boundary check and the renderer both rely on
//! this orientation.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // collision and rendering extent
    pub color: [u8; 3], // render color, assigned from the material at spawn
    pub id: u64, // spawn counter value, display/selection only
}

impl Body {
    /// Construct a body. Mass and radius must be strictly positive; both
    /// appear as divisors in the gravity and impulse math.
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64, color: [u8; 3], id: u64) -> Self {
        assert!(m > 0.0, "body mass must be positive, got {m}");
        assert!(radius > 0.0, "body radius must be positive, got {radius}");
        Self { x, v, m, radius, color, id }
    }

    /// Advance position from velocity over `dt` seconds (explicit Euler).
    /// `dt = 0` is a no-op.
    pub fn integrate(&mut self, dt: f64) {
        self.x += self.v * dt;
    }

    /// Reflect off the four walls of the `[0, width] x [0, height]` box.
    ///
    /// Each wall is checked independently: on violation the position is
    /// clamped to the wall and the corresponding velocity component is
    /// negated and scaled by `restitution`. A corner hit clamps both axes
    /// in the same call.
    pub fn clamp_to_bounds(&mut self, width: f64, height: f64, restitution: f64) {
        // Left wall
        if self.x.x - self.radius < 0.0 {
            self.x.x = self.radius;
            self.v.x *= -restitution;
        }

        // Right wall
        if self.x.x + self.radius > width {
            self.x.x = width - self.radius;
            self.v.x *= -restitution;
        }

        // Top wall
        if self.x.y - self.radius < 0.0 {
            self.x.y = self.radius;
            self.v.y *= -restitution;
        }

        // Bottom wall
        if self.x.y + self.radius > height {
            self.x.y = height - self.radius;
            self.v.y *= -restitution;
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, insertion order = spawn order
    pub t: f64, // time
}

impl System {
    pub fn new() -> Self {
        Self { bodies: Vec::new(), t: 0.0 }
    }

    /// Mutable references to bodies `i` and `j`. Requires `i < j`.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        let (left, right) = self.bodies.split_at_mut(j);
        (&mut left[i], &mut right[0])
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
