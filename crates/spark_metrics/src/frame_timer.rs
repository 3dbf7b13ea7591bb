//! Display cadence measurement
//!
//! The simulation itself never reads the clock; this only observes how
//! often the host actually delivers frames.

use std::time::{Duration, Instant};

use super::ring_buffer::RingBuffer;

pub struct FrameTimer {
    last_frame: Option<Instant>,
    intervals: RingBuffer<Duration>,
    frames: u64,
}

impl FrameTimer {
    pub fn new(window: usize) -> Self {
        Self {
            last_frame: None,
            intervals: RingBuffer::new(window),
            frames: 0,
        }
    }

    /// Call once per delivered frame.
    pub fn mark(&mut self) {
        self.mark_at(Instant::now());
    }

    fn mark_at(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            self.intervals.push(now.saturating_duration_since(last));
        }
        self.last_frame = Some(now);
        self.frames += 1;
    }

    pub fn fps(&self) -> f64 {
        let avg = self.intervals.average().as_secs_f64();
        if avg > 0.0 {
            1.0 / avg
        } else {
            0.0
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.intervals.average().as_secs_f64() * 1000.0
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
