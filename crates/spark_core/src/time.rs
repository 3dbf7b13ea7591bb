//! Frame-locked tick counting
//!
//! The burst physics advances by exactly one step per displayed frame; no
//! elapsed wall time is measured. The clock only counts completed ticks.

/// Simulation tick counter
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    tick_count: u64,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Record one completed tick and return its number (starting at 1).
    pub fn advance_tick(&mut self) -> u64 {
        self.tick_count += 1;
        self.tick_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ticks() {
        let mut clock = TickClock::new();
        assert_eq!(clock.advance_tick(), 1);
        assert_eq!(clock.advance_tick(), 2);
        assert_eq!(clock.tick_count(), 2);
    }
}
