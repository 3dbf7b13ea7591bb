//! Particle population bookkeeping

use super::ring_buffer::RingBuffer;

/// Running totals of bursts and particle turnover, plus a rolling window
/// of live counts per frame.
pub struct PopulationStats {
    bursts: u64,
    spawned: u64,
    culled: u64,
    peak_live: usize,
    live: RingBuffer<usize>,
}

impl PopulationStats {
    pub fn new(window: usize) -> Self {
        Self {
            bursts: 0,
            spawned: 0,
            culled: 0,
            peak_live: 0,
            live: RingBuffer::new(window),
        }
    }

    pub fn record_burst(&mut self, particles: usize) {
        self.bursts += 1;
        self.spawned += particles as u64;
    }

    pub fn record_frame(&mut self, live: usize, culled: usize) {
        self.culled += culled as u64;
        self.peak_live = self.peak_live.max(live);
        self.live.push(live);
    }

    pub fn bursts(&self) -> u64 {
        self.bursts
    }

    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    pub fn culled(&self) -> u64 {
        self.culled
    }

    /// Highest live count ever observed
    pub fn peak_live(&self) -> usize {
        self.peak_live
    }

    /// Mean live count over the recent window
    pub fn average_live(&self) -> f64 {
        self.live.average()
    }
}
