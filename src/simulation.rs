//! Fountain builder and window runner.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::{FountainConfig, MAX_FRAME_DELTA};
use crate::error::SimulationError;
use crate::gpu::GpuState;
use crate::pool::ParticlePool;
use crate::spawn::Spawner;
use crate::time::FrameClock;

/// A particle fountain window.
///
/// Use method chaining to configure, then call `.run()` to start.
///
/// ```ignore
/// Simulation::new()
///     .with_seed(7)
///     .with_window_size(1024, 768)
///     .run()?;
/// ```
pub struct Simulation {
    config: FountainConfig,
    seed: Option<u64>,
    title: String,
    window_size: (u32, u32),
    point_size: f32,
    max_frame_delta: f32,
}

impl Simulation {
    /// Create a fountain with the default constants.
    pub fn new() -> Self {
        Self {
            config: FountainConfig::default(),
            seed: None,
            title: "Particle Fountain".to_string(),
            window_size: (800, 600),
            point_size: 5.0,
            max_frame_delta: MAX_FRAME_DELTA,
        }
    }

    /// Replace the pool configuration.
    pub fn with_config(mut self, config: FountainConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the spawner for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Set the drawn size of each particle in physical pixels.
    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }

    /// Set the largest delta time passed to a single step.
    pub fn with_max_frame_delta(mut self, max_frame_delta: f32) -> Self {
        self.max_frame_delta = max_frame_delta;
        self
    }

    /// Run the fountain. This blocks until the window is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        log::info!(
            "Starting fountain: {} max particles, {} particles/s, {:.1}s lifespan",
            self.config.max_particles,
            self.config.emit_rate,
            self.config.lifespan()
        );

        let spawner = match self.seed {
            Some(seed) => Spawner::seeded(seed),
            None => Spawner::from_entropy(),
        };

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App {
            window: None,
            gpu_state: None,
            pool: ParticlePool::new(self.config, spawner),
            clock: FrameClock::new(self.max_frame_delta),
            settings: self,
            error: None,
        };
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    pool: ParticlePool,
    clock: FrameClock,
    settings: Simulation,
    /// Setup failure raised inside a winit callback, returned from `run`.
    error: Option<SimulationError>,
}

impl App {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let (width, height) = self.settings.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.gpu_state = Some(pollster::block_on(GpuState::new(
            window.clone(),
            self.pool.capacity(),
            self.settings.point_size,
        ))?);

        // The first delta is measured from here, not from process start.
        self.clock.reset();
        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let delta_time = self.clock.update();
        if self.clock.raw_delta() > self.clock.max_delta() {
            log::trace!(
                "Slow frame: {:.3}s clamped to {:.3}s",
                self.clock.raw_delta(),
                delta_time
            );
        }
        self.pool.step(delta_time);

        if self.clock.fps_refreshed() {
            let alive = self.pool.alive_count();
            log::debug!("{:.1} FPS, {} alive / {} slots", self.clock.fps(), alive, self.pool.len());
            if let Some(window) = &self.window {
                window.set_title(&format!(
                    "{} - {:.0} FPS - {} particles",
                    self.settings.title,
                    self.clock.fps(),
                    alive
                ));
            }
        }

        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };
        match gpu_state.render(&self.pool) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                gpu_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!(
                    "Close requested after {} frames ({:.1}s)",
                    self.clock.frame(),
                    self.clock.elapsed()
                );
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
