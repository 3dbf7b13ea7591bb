//! Spark Render
//!
//! Drawing surfaces and the frame loop that plays particle bursts:
//! - `Canvas`: the 2D contract the loop draws through
//! - `PixelCanvas`: CPU RGBA target (headless, tests)
//! - `GpuCanvas`: wgpu instanced circles on a window surface
//! - `ParticleOverlay`: scheduled step/render loop with resize and teardown

pub mod canvas;
pub mod color;
pub mod error;
pub mod gpu;
pub mod overlay;
pub mod pixel;
pub mod scheduler;
pub mod window;

pub use wgpu;
pub use winit;

pub use canvas::{draw_particles, Canvas, SurfaceSize};
pub use color::Rgba;
pub use error::RenderError;
pub use gpu::GpuCanvas;
pub use overlay::{FrameReport, ParticleOverlay};
pub use pixel::PixelCanvas;
pub use scheduler::{FrameRequest, FrameScheduler, RunningLoop};
