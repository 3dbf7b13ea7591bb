//! The burst simulation: particle store plus its random source

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::burst::spawn_burst;
use crate::color::ColorToken;
use crate::consts::BURST_PARTICLES;
use crate::particle::decay_amount;
use crate::store::ParticleStore;
use crate::time::TickClock;

/// Summary of one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Tick number just completed
    pub tick: u64,
    /// Particles still alive after the step
    pub live: usize,
    /// Particles removed by this step
    pub culled: usize,
}

/// Owns every live particle and the randomness used to spawn and decay them.
pub struct Simulation {
    store: ParticleStore,
    rng: Box<dyn RngCore>,
    clock: TickClock,
}

impl Simulation {
    /// Build a simulation drawing from `rng`.
    pub fn new(rng: impl RngCore + 'static) -> Self {
        Self {
            store: ParticleStore::with_capacity(BURST_PARTICLES * 4),
            rng: Box::new(rng),
            clock: TickClock::new(),
        }
    }

    /// Reproducible simulation: equal seeds give identical runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    /// Queue one burst at `(x, y)`. Never steps or renders.
    pub fn spawn_burst(&mut self, x: f32, y: f32, color: &ColorToken) {
        spawn_burst(&mut self.store, &mut *self.rng, Vec2::new(x, y), color);
        tracing::debug!(
            x,
            y,
            color = %color,
            live = self.store.len(),
            "burst spawned"
        );
    }

    /// Advance every particle by one frame and drop those whose life ran out.
    pub fn step(&mut self) -> StepReport {
        let rng = &mut *self.rng;
        let culled = self.store.update_retain(|p| {
            p.integrate();
            p.decay(decay_amount(rng.gen::<f32>()));
            p.is_alive()
        });
        let tick = self.clock.advance_tick();

        tracing::trace!(tick, live = self.store.len(), culled, "simulation step");

        StepReport {
            tick,
            live: self.store.len(),
            culled,
        }
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.store
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn tick_count(&self) -> u64 {
        self.clock.tick_count()
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("live", &self.store.len())
            .field("tick", &self.clock.tick_count())
            .finish_non_exhaustive()
    }
}
