//! Particle initialization.
//!
//! Every particle, new or recycled, goes through [`Spawner::initialize`]:
//!
//! - position at [`EMITTER_ORIGIN`]
//! - direction uniform in the cone `-90°..0°` (45° half-angle about -45°)
//! - speed uniform in `[0.5, 1.0)`
//! - red and green uniform in `[0.5, 1.0)`, blue and alpha 1.0
//! - life 1.0

use crate::config::EMITTER_ORIGIN;
use crate::particle::Particle;
use glam::{Vec3, Vec4};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::FRAC_PI_4;

/// Centre of the emission cone, in radians.
pub const CONE_CENTER: f32 = -FRAC_PI_4;

/// Half-angle of the emission cone, in radians.
pub const CONE_HALF_ANGLE: f32 = FRAC_PI_4;

/// Spawn speed range (half-open).
pub const SPEED_MIN: f32 = 0.5;
pub const SPEED_MAX: f32 = 1.0;

/// Red/green channel range (half-open).
pub const TINT_MIN: f32 = 0.5;
pub const TINT_MAX: f32 = 1.0;

/// Owns the random source and resets particles to spawn state.
///
/// Seed it explicitly with [`Spawner::seeded`] for reproducible runs:
///
/// ```ignore
/// let mut a = Spawner::seeded(42);
/// let mut b = Spawner::seeded(42);
/// assert_eq!(a.spawn(), b.spawn());
/// ```
#[derive(Clone, Debug)]
pub struct Spawner {
    rng: SmallRng,
}

impl Spawner {
    /// Deterministic spawner.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Spawner seeded from OS entropy, different every run.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Random f32 in `[min, max)`.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random angle inside the emission cone.
    #[inline]
    pub fn cone_angle(&mut self) -> f32 {
        self.random_range(CONE_CENTER - CONE_HALF_ANGLE, CONE_CENTER + CONE_HALF_ANGLE)
    }

    /// Reset `particle` to spawn state.
    ///
    /// Random draws happen in a fixed order (angle, speed, red, green) so a
    /// given seed always produces the same particle sequence.
    pub fn initialize(&mut self, particle: &mut Particle) {
        let angle = self.cone_angle();
        let speed = self.random_range(SPEED_MIN, SPEED_MAX);
        let red = self.random_range(TINT_MIN, TINT_MAX);
        let green = self.random_range(TINT_MIN, TINT_MAX);

        particle.position = EMITTER_ORIGIN;
        particle.velocity = Vec3::new(speed * angle.cos(), speed * angle.sin(), 0.0);
        particle.color = Vec4::new(red, green, 1.0, 1.0);
        particle.life = 1.0;
    }

    /// A freshly initialized particle.
    pub fn spawn(&mut self) -> Particle {
        let mut particle = Particle::default();
        self.initialize(&mut particle);
        particle
    }
}
