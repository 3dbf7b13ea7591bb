//! Spark Core
//!
//! The particle burst engine behind task-completion feedback:
//! - Particle model and store
//! - Fixed-recipe burst spawner
//! - Per-frame physics step (integrate, damp, gravity, decay, cull)
//! - Tick counting

pub mod burst;
pub mod color;
pub mod consts;
pub mod handle;
pub mod particle;
pub mod simulation;
pub mod store;
pub mod time;

pub use glam;

pub use color::ColorToken;
pub use handle::{BurstHandle, SharedSimulation};
pub use particle::Particle;
pub use simulation::{Simulation, StepReport};
pub use store::ParticleStore;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
