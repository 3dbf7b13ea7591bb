//! Particle model and per-tick physics

use glam::Vec2;

use crate::color::ColorToken;
use crate::consts::{DECAY_MIN, DECAY_SPREAD, FRICTION, GRAVITY, INITIAL_LIFE};

/// One burst fragment, in viewport pixel space.
///
/// Particles have no identity beyond their slot in the store. Only the
/// physics step mutates them after creation; `color` and `size` never change.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Center in viewport pixels
    pub position: Vec2,
    /// Pixels per frame
    pub velocity: Vec2,
    /// Remaining life in `(0, 1]` while alive, doubles as render opacity
    pub life: f32,
    pub color: ColorToken,
    /// Radius in pixels
    pub size: f32,
}

impl Particle {
    /// Launch a particle from `origin` at `angle` radians with `speed` px/frame.
    pub fn launch(origin: Vec2, angle: f32, speed: f32, size: f32, color: ColorToken) -> Self {
        Self {
            position: origin,
            velocity: Vec2::from_angle(angle) * speed,
            life: INITIAL_LIFE,
            color,
            size,
        }
    }

    /// Advance position and velocity by one frame.
    ///
    /// Order is fixed: move, damp, then add gravity so the current frame's
    /// gravity is not attenuated by damping.
    #[inline]
    pub fn integrate(&mut self) {
        self.position += self.velocity;
        self.velocity *= FRICTION;
        self.velocity.y += GRAVITY;
    }

    /// Subtract `amount` from life. `amount` is always positive.
    #[inline]
    pub fn decay(&mut self, amount: f32) {
        self.life -= amount;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Render alpha, which is the remaining life.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Per-tick life loss for a uniform sample `u` in `[0, 1)`.
#[inline]
pub fn decay_amount(u: f32) -> f32 {
    DECAY_MIN + u * DECAY_SPREAD
}
