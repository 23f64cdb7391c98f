//! Integration tests for the particle pool.
//!
//! These drive `ParticlePool` through the public API only, with a seeded
//! spawner so every run sees the same particles.

use fountain::{FountainConfig, ParticlePool, Spawner, EMITTER_ORIGIN};
use std::f32::consts::FRAC_PI_2;

fn seeded_pool(seed: u64) -> ParticlePool {
    ParticlePool::new(FountainConfig::default(), Spawner::seeded(seed))
}

/// Deltas a real driver could produce, including clamped slow frames.
fn frame_deltas() -> Vec<f32> {
    let mut deltas = Vec::new();
    for i in 0..400 {
        deltas.push(match i % 7 {
            0 => 0.1,
            1 => 0.0005,
            2 => 0.033,
            3 => 0.0,
            _ => 0.016,
        });
    }
    deltas
}

// ============================================================================
// Capacity
// ============================================================================

#[test]
fn test_pool_never_exceeds_capacity() {
    let config = FountainConfig::default().with_max_particles(1_000);
    let mut pool = ParticlePool::new(config, Spawner::seeded(1));
    for dt in frame_deltas() {
        pool.step(dt);
        assert!(pool.len() <= 1_000);
    }
    assert!(pool.is_full());
}

#[test]
fn test_default_capacity_with_huge_delta() {
    let mut pool = seeded_pool(2);
    pool.step(1_000.0);
    assert_eq!(pool.len(), 100_000);
    pool.step(1_000.0);
    assert_eq!(pool.len(), 100_000);
}

#[test]
fn test_pool_never_shrinks() {
    let mut pool = seeded_pool(3);
    let mut last_len = 0;
    for dt in frame_deltas() {
        pool.step(dt);
        assert!(pool.len() >= last_len);
        last_len = pool.len();
    }
}

// ============================================================================
// Per-particle invariants
// ============================================================================

#[test]
fn test_alpha_mirrors_life_after_every_step() {
    let mut pool = seeded_pool(4);
    for dt in frame_deltas() {
        pool.step(dt);
        pool.for_each_alive(|p| assert_eq!(p.color.w, p.life));
    }
}

#[test]
fn test_life_decays_linearly_while_alive() {
    let mut pool = seeded_pool(5);
    pool.step(0.05);

    let dt = 0.016;
    let before = pool.particles().to_vec();
    pool.step(dt);
    let after = pool.particles();

    for (b, a) in before.iter().zip(after) {
        assert!(b.is_alive());
        let expected = b.life - 0.5 * dt;
        assert!((a.life - expected).abs() < 1e-6);
        assert!((a.position - (b.position + b.velocity * dt)).length() < 1e-6);
        assert!((a.velocity.y - (b.velocity.y - 1.5 * dt)).abs() < 1e-6);
    }
}

#[test]
fn test_dead_particles_respawn_at_emitter() {
    let mut pool = seeded_pool(6);
    pool.step(0.01);
    for i in (0..pool.len()).step_by(2) {
        pool.kill(i);
    }

    pool.step(0.0);
    for (i, p) in pool.particles().iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(p.life, 1.0);
            assert_eq!(p.color.w, 1.0);
            assert_eq!(p.position, EMITTER_ORIGIN);
        } else {
            assert!(p.life < 1.0);
        }
    }
}

#[test]
fn test_dying_particle_keeps_negative_alpha_until_next_step() {
    let mut pool = seeded_pool(7);
    // 0.9995 after the first step, 0.0045 after the second.
    pool.step(0.001);
    pool.step(1.99);
    assert!(pool.particles()[0].is_alive());

    pool.step(0.1);
    let p = pool.particles()[0];
    assert!(p.life < 0.0);
    assert_eq!(p.color.w, p.life);
    assert!(pool.iter_alive().all(|q| q.life > 0.0));
}

// ============================================================================
// Emission
// ============================================================================

#[test]
fn test_one_second_emits_two_thousand() {
    let mut pool = seeded_pool(8);
    pool.step(1.0);
    assert_eq!(pool.len(), 2_000);

    // All spawned this step and integrated once: life 1.0 - 0.5 * 1.0.
    for p in pool.particles() {
        assert_eq!(p.life, 0.5);
        assert_eq!(p.color.w, 0.5);
    }
}

#[test]
fn test_emission_limited_by_small_capacity() {
    let config = FountainConfig::default().with_max_particles(123);
    let mut pool = ParticlePool::new(config, Spawner::seeded(9));
    pool.step(1.0);
    assert_eq!(pool.len(), 123);
}

#[test]
fn test_spawned_velocity_range() {
    let mut spawner = Spawner::seeded(10);
    for _ in 0..5_000 {
        let p = spawner.spawn();
        let speed = (p.velocity.x * p.velocity.x + p.velocity.y * p.velocity.y).sqrt();
        assert!((0.5 - 1e-5..1.0 + 1e-5).contains(&speed));

        let angle = p.velocity.y.atan2(p.velocity.x);
        assert!(angle >= -FRAC_PI_2 - 1e-5);
        assert!(angle <= 1e-5);
    }
}

// ============================================================================
// Scenario
// ============================================================================

#[test]
fn test_short_frame_then_long_frame_then_respawn() {
    let mut pool = seeded_pool(11);

    // floor(2000 * 0.001) = 2
    pool.step(0.001);
    assert_eq!(pool.len(), 2);
    for p in pool.particles() {
        assert!(p.is_alive());
        assert!((p.life - 0.9995).abs() < 1e-6);
    }

    // 0.5 * 2.0 = 1.0 wipes out any remaining life; 4000 more are emitted
    // and die in the same step.
    pool.step(2.0);
    assert_eq!(pool.len(), 4_002);
    assert_eq!(pool.alive_count(), 0);
    assert!(pool.particles()[0].life <= 0.0);

    // Next step recycles every slot in place.
    pool.step(0.0);
    assert_eq!(pool.len(), 4_002);
    for p in pool.particles() {
        assert_eq!(p.life, 1.0);
        assert_eq!(p.color.w, 1.0);
        assert_eq!(p.position, EMITTER_ORIGIN);
    }
}

#[test]
fn test_same_seed_same_trajectory() {
    let mut a = seeded_pool(12);
    let mut b = seeded_pool(12);
    for dt in frame_deltas() {
        a.step(dt);
        b.step(dt);
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn test_recycled_slots_stay_in_rotation() {
    // Emission keeps appending while dead slots respawn in place, so the
    // pool grows every step and nearly all of it is alive at any moment.
    let mut pool = seeded_pool(13);
    for _ in 0..600 {
        pool.step(0.01);
    }
    assert_eq!(pool.len(), 12_000);
    let alive = pool.alive_count();
    assert!(alive * 100 >= pool.len() * 95, "alive {alive}");
}
