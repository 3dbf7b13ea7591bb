//! The 2D drawing contract used by the frame loop

use glam::Vec2;
use spark_core::{ColorToken, ParticleStore};

use crate::error::RenderError;

/// Pixel dimensions of a drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for SurfaceSize {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

/// A drawable surface sized to the viewport.
///
/// Mirrors the handful of 2D context operations the burst needs: clear,
/// global alpha, filled circles. Drawing is immediate-mode; `present`
/// flushes whatever the backend batched for this frame.
pub trait Canvas {
    fn size(&self) -> SurfaceSize;

    /// Match the backing store to `size` pixels.
    fn resize(&mut self, size: SurfaceSize);

    /// Clear the whole surface to transparent.
    fn clear(&mut self);

    /// Opacity multiplier for subsequent draws, in `0.0..=1.0`.
    fn set_global_alpha(&mut self, alpha: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &ColorToken);

    fn present(&mut self) -> Result<(), RenderError>;
}

/// Draw every particle as a filled circle faded by its remaining life.
/// Returns the number of circles drawn.
pub fn draw_particles<C: Canvas + ?Sized>(canvas: &mut C, particles: &ParticleStore) -> usize {
    let mut drawn = 0;
    for particle in particles {
        if !particle.is_alive() {
            continue;
        }
        canvas.set_global_alpha(particle.opacity());
        canvas.fill_circle(particle.position, particle.size, &particle.color);
        drawn += 1;
    }
    drawn
}
