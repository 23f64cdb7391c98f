//! # Fountain
//!
//! A CPU-simulated 2D particle fountain rendered with wgpu.
//!
//! A single emitter at the top-left of the screen sprays particles down and
//! to the right. Particles fall under constant gravity, fade out over two
//! seconds and are recycled in place once dead.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fountain::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     Simulation::new().run()
//! }
//! ```
//!
//! ## Driving the pool yourself
//!
//! The simulation core has no dependency on the window. Step it with a delta
//! time and read back the alive particles:
//!
//! ```ignore
//! use fountain::prelude::*;
//!
//! let mut pool = ParticlePool::new(FountainConfig::default(), Spawner::seeded(42));
//! let mut clock = FrameClock::new(MAX_FRAME_DELTA);
//!
//! loop {
//!     pool.step(clock.update());
//!     pool.for_each_alive(|p| draw_point(p.position, p.color));
//! }
//! ```
//!
//! ## Constants
//!
//! | Name | Value |
//! |------|-------|
//! | [`MAX_PARTICLES`] | 100 000 |
//! | [`EMIT_RATE`] | 2000 particles/s |
//! | [`GRAVITY`] | 1.5 units/s² |
//! | [`DECAY_RATE`] | 0.5 /s |
//! | [`MAX_FRAME_DELTA`] | 0.1 s |

pub mod config;
mod error;
mod gpu;
mod particle;
pub mod pool;
mod simulation;
pub mod spawn;
pub mod time;

pub use config::{
    FountainConfig, DECAY_RATE, EMITTER_ORIGIN, EMIT_RATE, GRAVITY, MAX_FRAME_DELTA,
    MAX_PARTICLES,
};
pub use error::{GpuError, SimulationError};
pub use glam::{Vec3, Vec4};
pub use gpu::ParticleInstance;
pub use particle::Particle;
pub use pool::ParticlePool;
pub use simulation::Simulation;
pub use spawn::Spawner;
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use fountain::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{FountainConfig, MAX_FRAME_DELTA};
    pub use crate::error::SimulationError;
    pub use crate::particle::Particle;
    pub use crate::pool::ParticlePool;
    pub use crate::simulation::Simulation;
    pub use crate::spawn::Spawner;
    pub use crate::time::FrameClock;
    pub use crate::{Vec3, Vec4};
}
