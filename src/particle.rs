//! The particle record simulated by the pool.

use glam::{Vec3, Vec4};

/// A simulated point-mass.
///
/// `color.w` (alpha) mirrors `life` while the particle is alive. `life`
/// starts at 1.0 and the particle is dead (recyclable) once it reaches 0.0
/// or below.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// World-space position.
    pub position: Vec3,
    /// Velocity in units per second.
    pub velocity: Vec3,
    /// RGBA color, channels nominally in `[0, 1]`.
    pub color: Vec4,
    /// Normalized remaining lifetime.
    pub life: f32,
}

impl Particle {
    /// Whether the particle should be simulated and drawn.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Current alpha channel.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.color.w
    }
}

impl Default for Particle {
    /// A dead particle at the origin. The pool never stores these as-is;
    /// every slot is run through the spawner before it is appended.
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            color: Vec4::ZERO,
            life: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        let p = Particle::default();
        assert!(!p.is_alive());
        assert_eq!(p.alpha(), 0.0);
    }

    #[test]
    fn test_zero_life_is_dead() {
        let p = Particle {
            life: 0.0,
            ..Particle::default()
        };
        assert!(!p.is_alive());

        let p = Particle {
            life: f32::MIN_POSITIVE,
            ..Particle::default()
        };
        assert!(p.is_alive());
    }
}
