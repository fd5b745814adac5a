//! Runtime simulation toggles
//!
//! `Engine` is the explicit simulation context mutated by the input layer
//! and read by the step pipeline: `gravity_enabled` gates the gravity pass,
//! `paused` gates the whole pipeline.

#[derive(Debug, Clone)]
pub struct Engine {
    pub gravity_enabled: bool, // false = skip the pairwise gravity pass
    pub paused: bool, // true = skip the entire physics step
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            gravity_enabled: true,
            paused: false,
        }
    }
}
