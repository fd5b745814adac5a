//! Pairwise Newtonian gravity with softening
//!
//! `NewtonianGravity` applies mutual attraction directly to the velocities
//! of both bodies in a pair, equal and opposite. Softening derived from the
//! smaller body's radius bounds the force at small separations.

use crate::simulation::states::{Body, System};

/// 2D Newtonian gravity, direct n^2 summation over unordered pairs
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Apply the mutual gravitational kick between `a` and `b` over `dt`.
    ///
    /// Exactly overlapping centers are skipped: the force direction is
    /// undefined there and neither velocity is touched.
    pub fn apply_pair(&self, a: &mut Body, b: &mut Body, dt: f64) {
        // r is the displacement vector from a to b.
        // a feels a pull along +r, b feels a pull along -r.
        let r = b.x - a.x;

        // Squared separation distance |r|^2 (no softening yet)
        let dist_sq = r.norm_squared();
        if dist_sq == 0.0 {
            return;
        }

        let distance = dist_sq.sqrt();

        // Per-pair softening from the smaller body's radius, added in
        // quadrature so the force stays bounded as distance -> 0
        let softening = 0.1 * a.radius.min(b.radius);
        let soft_sq = dist_sq + softening * softening;

        // F = G * m_a * m_b / |r_soft|^2
        let force = self.g * a.m * b.m / soft_sq;

        // Unit direction from the unsoftened distance
        let n = r / distance;

        // Velocity kicks, equal and opposite:
        // v_a += (F / m_a) * n * dt
        // v_b -= (F / m_b) * n * dt
        a.v += n * (force / a.m * dt);
        b.v -= n * (force / b.m * dt);
    }

    /// Apply gravity once per unordered pair (i < j). Each pair updates
    /// both members symmetrically, so iteration order does not affect the
    /// result.
    pub fn apply_all(&self, sys: &mut System, dt: f64) {
        let n = sys.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = sys.pair_mut(i, j);
                self.apply_pair(a, b, dt);
            }
        }
    }
}
