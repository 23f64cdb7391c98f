//! The particle pool simulator.
//!
//! A fixed-capacity arena of [`Particle`]s. The pool grows by appending
//! until it reaches `max_particles` and never shrinks; dead particles are
//! reset in place by the [`Spawner`] rather than removed.
//!
//! # Per-step order
//!
//! 1. Emit `floor(emit_rate * dt)` new particles, capped by remaining room.
//! 2. Walk every slot (including the ones just emitted):
//!    - alive: Euler-integrate position, apply gravity, decay life, copy
//!      life into alpha
//!    - dead: respawn in place
//!
//! A particle whose life crosses zero during a step stays dead (with a
//! possibly negative alpha) until the next step respawns it.

use crate::config::FountainConfig;
use crate::particle::Particle;
use crate::spawn::Spawner;

/// Owns every particle in the fountain.
#[derive(Debug)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    config: FountainConfig,
    spawner: Spawner,
}

impl ParticlePool {
    /// Empty pool with storage reserved for `config.max_particles`.
    pub fn new(config: FountainConfig, spawner: Spawner) -> Self {
        log::debug!(
            "Reserving particle pool: {} slots ({} KiB)",
            config.max_particles,
            config.max_particles * std::mem::size_of::<Particle>() / 1024
        );
        Self {
            particles: Vec::with_capacity(config.max_particles),
            config,
            spawner,
        }
    }

    /// Advance the simulation by `delta_time` seconds.
    ///
    /// No clamping is done here; large deltas produce proportionally large
    /// jumps.
    pub fn step(&mut self, delta_time: f32) {
        let emitted = self.emit(delta_time);
        if emitted > 0 {
            log::trace!("Emitted {} particles ({} in pool)", emitted, self.particles.len());
        }

        let gravity = self.config.gravity;
        let decay = self.config.decay_rate;
        for p in &mut self.particles {
            if p.life > 0.0 {
                p.position += p.velocity * delta_time;
                p.velocity.y -= gravity * delta_time;
                p.life -= delta_time * decay;
                p.color.w = p.life;
            } else {
                self.spawner.initialize(p);
            }
        }
    }

    /// Append up to `floor(emit_rate * delta_time)` fresh particles.
    fn emit(&mut self, delta_time: f32) -> usize {
        // `as` saturates, so negative or NaN products emit nothing.
        let wanted = (self.config.emit_rate * delta_time) as usize;
        let room = self.config.max_particles.saturating_sub(self.particles.len());
        let count = wanted.min(room);

        for _ in 0..count {
            let particle = self.spawner.spawn();
            self.particles.push(particle);
        }
        count
    }

    /// Call `visit` for each alive particle, in storage order.
    pub fn for_each_alive<F>(&self, mut visit: F)
    where
        F: FnMut(&Particle),
    {
        for p in &self.particles {
            if p.is_alive() {
                visit(p);
            }
        }
    }

    /// Iterator over alive particles, in storage order.
    pub fn iter_alive(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter().filter(|p| p.is_alive())
    }

    /// Every slot, alive or dead.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mark slot `index` dead with life and alpha both at 0.0. The next
    /// `step` respawns it. Out-of-range indices are ignored.
    #[doc(hidden)]
    pub fn kill(&mut self, index: usize) {
        if let Some(p) = self.particles.get_mut(index) {
            p.life = 0.0;
            p.color.w = 0.0;
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Maximum number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.max_particles
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.particles.len() >= self.config.max_particles
    }

    /// Number of particles with `life > 0`.
    pub fn alive_count(&self) -> usize {
        self.iter_alive().count()
    }

    #[inline]
    pub fn config(&self) -> &FountainConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EMITTER_ORIGIN;

    fn pool() -> ParticlePool {
        ParticlePool::new(FountainConfig::default(), Spawner::seeded(0xF0))
    }

    #[test]
    fn test_new_pool_is_empty() {
        let pool = pool();
        assert!(pool.is_empty());
        assert_eq!(pool.capacity(), 100_000);
        assert_eq!(pool.alive_count(), 0);
    }

    #[test]
    fn test_emit_count_is_floored() {
        let mut pool = pool();
        // 2000 * 0.0016 = 3.2
        pool.step(0.0016);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_tiny_delta_emits_nothing() {
        let mut pool = pool();
        pool.step(0.0004);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_emission_stops_at_capacity() {
        let config = FountainConfig::default().with_max_particles(50);
        let mut pool = ParticlePool::new(config, Spawner::seeded(1));
        pool.step(1.0);
        assert_eq!(pool.len(), 50);
        assert!(pool.is_full());
        pool.step(1.0);
        assert_eq!(pool.len(), 50);
    }

    #[test]
    fn test_fresh_particles_are_integrated_in_spawn_step() {
        let mut pool = pool();
        let dt = 0.01;
        pool.step(dt);
        assert_eq!(pool.len(), 20);
        for p in pool.particles() {
            assert_eq!(p.life, 1.0 - dt * 0.5);
            assert_eq!(p.color.w, p.life);
            assert_ne!(p.position, EMITTER_ORIGIN);
        }
    }

    #[test]
    fn test_gravity_only_touches_vertical_velocity() {
        let mut pool = pool();
        pool.step(0.001);
        let before = pool.particles()[0];
        pool.step(0.0);
        pool.step(0.05);
        let after = pool.particles()[0];
        assert_eq!(after.velocity.x, before.velocity.x);
        assert!((after.velocity.y - (before.velocity.y - 1.5 * 0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_dead_particle_respawns_in_place() {
        let mut pool = pool();
        pool.step(0.001);
        let len = pool.len();
        pool.particles[0].life = -0.25;
        pool.particles[0].color.w = -0.25;

        pool.step(0.0);
        let p = pool.particles()[0];
        assert_eq!(pool.len(), len);
        assert_eq!(p.life, 1.0);
        assert_eq!(p.color.w, 1.0);
        assert_eq!(p.position, EMITTER_ORIGIN);
    }

    #[test]
    fn test_for_each_alive_skips_dead() {
        let mut pool = pool();
        pool.step(0.005);
        assert_eq!(pool.len(), 10);
        pool.kill(3);
        pool.particles[7].life = -1.0;
        pool.particles[7].color.w = -1.0;

        let mut visited = 0;
        pool.for_each_alive(|p| {
            assert!(p.life > 0.0);
            visited += 1;
        });
        assert_eq!(visited, 8);
        assert_eq!(pool.alive_count(), 8);
        assert_eq!(pool.iter_alive().count(), 8);
    }

    #[test]
    fn test_kill_keeps_alpha_in_step_with_life() {
        let mut pool = pool();
        pool.step(0.005);
        pool.kill(2);
        pool.kill(99);

        let p = pool.particles()[2];
        assert!(!p.is_alive());
        assert_eq!(p.life, 0.0);
        assert_eq!(p.color.w, p.life);
        assert_eq!(pool.len(), 10);
        assert_eq!(pool.alive_count(), 9);
    }

    #[test]
    fn test_custom_gravity_and_decay() {
        let config = FountainConfig::default()
            .with_gravity(4.0)
            .with_decay_rate(0.25);
        let mut pool = ParticlePool::new(config, Spawner::seeded(3));
        pool.step(0.001);
        let before = pool.particles()[0];

        pool.step(0.1);
        let after = pool.particles()[0];
        assert!((after.velocity.y - (before.velocity.y - 4.0 * 0.1)).abs() < 1e-6);
        assert!((after.life - (before.life - 0.25 * 0.1)).abs() < 1e-6);
        assert_eq!(after.color.w, after.life);
        assert!((pool.config().lifespan() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_for_each_alive_does_not_mutate() {
        let mut pool = pool();
        pool.step(0.01);
        let snapshot = pool.particles().to_vec();
        pool.for_each_alive(|_| {});
        assert_eq!(pool.particles(), snapshot.as_slice());
    }
}
