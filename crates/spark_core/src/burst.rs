//! Fixed-recipe burst spawner

use glam::Vec2;
use rand::Rng;

use crate::color::ColorToken;
use crate::consts::{ANGLE_SPREAD, BURST_PARTICLES, SIZE_MIN, SIZE_SPREAD, SPEED_MIN, SPEED_SPREAD};
use crate::particle::Particle;
use crate::store::ParticleStore;

/// Append one burst of [`BURST_PARTICLES`] particles at `origin`.
///
/// Every particle gets a uniform random heading, speed in `[3, 13)` and
/// radius in `[1.5, 5.5)`. Existing particles are left untouched, so
/// back-to-back bursts stack.
pub fn spawn_burst<R>(store: &mut ParticleStore, rng: &mut R, origin: Vec2, color: &ColorToken)
where
    R: Rng + ?Sized,
{
    store.extend((0..BURST_PARTICLES).map(|_| {
        // gen_range keeps the upper bound exclusive after f32 rounding
        let angle = rng.gen_range(0.0..ANGLE_SPREAD);
        let speed = rng.gen_range(SPEED_MIN..SPEED_MIN + SPEED_SPREAD);
        let size = rng.gen_range(SIZE_MIN..SIZE_MIN + SIZE_SPREAD);
        Particle::launch(origin, angle, speed, size, color.clone())
    }));
}
