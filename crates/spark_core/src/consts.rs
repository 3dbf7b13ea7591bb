//! Burst recipe and physics constants
//!
//! Tuned by eye for the completion effect. They are fixed design values,
//! not physical quantities.

use std::f32::consts::TAU;

/// Particles appended by a single burst
pub const BURST_PARTICLES: usize = 80;

/// Launch speed is `SPEED_MIN + U * SPEED_SPREAD` pixels per frame
pub const SPEED_MIN: f32 = 3.0;
pub const SPEED_SPREAD: f32 = 10.0;

/// Radius is `SIZE_MIN + U * SIZE_SPREAD` pixels
pub const SIZE_MIN: f32 = 1.5;
pub const SIZE_SPREAD: f32 = 4.0;

/// Launch angle is `U * ANGLE_SPREAD`
pub const ANGLE_SPREAD: f32 = TAU;

/// Multiplicative velocity damping applied every tick
pub const FRICTION: f32 = 0.92;

/// Downward acceleration added to `vy` after damping
pub const GRAVITY: f32 = 0.3;

/// Life lost per tick is `DECAY_MIN + U * DECAY_SPREAD`
pub const DECAY_MIN: f32 = 0.015;
pub const DECAY_SPREAD: f32 = 0.02;

/// Life of a freshly spawned particle
pub const INITIAL_LIFE: f32 = 1.0;

/// Fixed point of `vy = vy * FRICTION + GRAVITY`
pub const TERMINAL_VY: f32 = GRAVITY / (1.0 - FRICTION);
