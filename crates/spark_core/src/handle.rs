//! Burst capability handed to whatever needs to trigger the effect

use std::cell::RefCell;
use std::rc::Rc;

use crate::color::ColorToken;
use crate::simulation::Simulation;

/// Simulation shared between the frame loop and burst triggers.
///
/// Deliberately `!Send`: spawning and stepping happen on one thread.
pub type SharedSimulation = Rc<RefCell<Simulation>>;

/// The one inbound operation of the engine: `spawn(x, y, color)`.
///
/// Owned by the rendering side and cloned into callers (task list,
/// input handlers). Spawning only appends to the store; the running loop
/// picks new particles up on its next frame. Calling it before the loop
/// has started, or after it stopped, is fine.
#[derive(Clone)]
pub struct BurstHandle {
    simulation: SharedSimulation,
}

impl BurstHandle {
    pub fn new(simulation: SharedSimulation) -> Self {
        Self { simulation }
    }

    pub fn spawn(&self, x: f32, y: f32, color: impl Into<ColorToken>) {
        let color = color.into();
        self.simulation.borrow_mut().spawn_burst(x, y, &color);
    }

    /// Particles currently alive
    pub fn live(&self) -> usize {
        self.simulation.borrow().len()
    }
}

impl std::fmt::Debug for BurstHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BurstHandle")
            .field("live", &self.live())
            .finish()
    }
}
