//! Circle-circle collision resolution
//!
//! `ContactResolver` detects overlap for a pair of bodies and, on overlap,
//! separates them positionally (mass-weighted) and exchanges an impulse
//! along the contact normal scaled by the restitution coefficient.
//!
//! This is a single resolution pass per pair per frame; dense overlapping
//! clusters converge over several frames rather than one.

use crate::simulation::states::{Body, NVec2, System};

/// Impulse-based contact resolution between circular bodies
pub struct ContactResolver {
    pub restitution: f64, // 0 = fully inelastic along the normal, 1 = elastic
}

impl ContactResolver {
    /// Detect and resolve overlap between `a` and `b`.
    ///
    /// No overlap and already-separating pairs are no-ops. Exactly
    /// coincident centers get a tiny substitute normal so resolution still
    /// proceeds.
    pub fn resolve_pair(&self, a: &mut Body, b: &mut Body) {
        let e = self.restitution.clamp(0.0, 1.0);

        let mut d = b.x - a.x;
        let mut distance = d.norm();

        // Degenerate normal when the centers coincide
        if distance == 0.0 {
            d = NVec2::new(1e-6, 0.0);
            distance = 1e-6;
        }

        let overlap = a.radius + b.radius - distance;
        if overlap <= 0.0 {
            return;
        }

        let n = d / distance;

        // Positional correction, mass-weighted so heavier bodies move less.
        // This removes the interpenetration in one pass.
        let total_mass = a.m + b.m;
        a.x -= n * (overlap * (b.m / total_mass));
        b.x += n * (overlap * (a.m / total_mass));

        // Relative velocity along the normal; positive means the pair is
        // already separating, and adding an impulse would inject energy
        let vn = (b.v - a.v).dot(&n);
        if vn > 0.0 {
            return;
        }

        // j = -(1 + e) * vn / (1/m_a + 1/m_b)
        let j = -(1.0 + e) * vn / (1.0 / a.m + 1.0 / b.m);
        let impulse = n * j;

        a.v -= impulse / a.m;
        b.v += impulse / b.m;
    }

    /// Resolve every unordered pair (i < j) once.
    pub fn resolve_all(&self, sys: &mut System) {
        let n = sys.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = sys.pair_mut(i, j);
                self.resolve_pair(a, b);
            }
        }
    }
}
