//! Tuning constants for the fountain.
//!
//! All values are fixed at startup. [`FountainConfig`] bundles the ones the
//! particle pool needs so tests can shrink the capacity without touching the
//! constants themselves.
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | [`MAX_PARTICLES`] | 100 000 | pool capacity |
//! | [`EMIT_RATE`] | 2000 /s | particles spawned per simulated second |
//! | [`GRAVITY`] | 1.5 units/s² | downward acceleration |
//! | [`DECAY_RATE`] | 0.5 /s | life lost per second (2 s lifespan) |
//! | [`MAX_FRAME_DELTA`] | 0.1 s | per-frame delta cap applied by the driver |

use glam::Vec3;

/// Maximum number of particles the pool will ever hold.
pub const MAX_PARTICLES: usize = 100_000;

/// Particles spawned per second of simulated time.
pub const EMIT_RATE: f32 = 2000.0;

/// Downward acceleration applied to `velocity.y`.
pub const GRAVITY: f32 = 1.5;

/// Life lost per second.
pub const DECAY_RATE: f32 = 0.5;

/// Largest delta time the driver passes to a single step.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Where every particle is spawned (normalized device coordinates).
pub const EMITTER_ORIGIN: Vec3 = Vec3::new(-0.8, 0.8, 0.0);

/// Pool configuration.
///
/// ```ignore
/// let config = FountainConfig::default().with_max_particles(500);
/// let pool = ParticlePool::new(config, Spawner::seeded(7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FountainConfig {
    /// Pool capacity.
    pub max_particles: usize,
    /// Particles spawned per second.
    pub emit_rate: f32,
    /// Downward acceleration.
    pub gravity: f32,
    /// Life lost per second.
    pub decay_rate: f32,
}

impl FountainConfig {
    /// Set the pool capacity.
    pub fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = max_particles;
        self
    }

    /// Set the emission rate in particles per second.
    pub fn with_emit_rate(mut self, emit_rate: f32) -> Self {
        self.emit_rate = emit_rate;
        self
    }

    /// Set the downward acceleration.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the life decay rate per second.
    pub fn with_decay_rate(mut self, decay_rate: f32) -> Self {
        self.decay_rate = decay_rate;
        self
    }

    /// Nominal lifespan of a particle in seconds.
    pub fn lifespan(&self) -> f32 {
        1.0 / self.decay_rate
    }
}

impl Default for FountainConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            emit_rate: EMIT_RATE,
            gravity: GRAVITY,
            decay_rate: DECAY_RATE,
        }
    }
}
