//! Spark Metrics - frame pacing and particle population tracking
//!
//! Everything here compiles to no-op stubs unless the `metrics` feature is
//! enabled, so release overlays pay nothing for it.
//!
//! # Usage
//!
//! ```ignore
//! use spark_metrics::{FrameTimer, PopulationStats};
//!
//! let mut timer = FrameTimer::new(120);
//! let mut population = PopulationStats::new(120);
//! // once per displayed frame:
//! timer.mark();
//! population.record_frame(live, culled);
//! ```

#[cfg(feature = "metrics")]
mod frame_timer;
#[cfg(feature = "metrics")]
mod population;
#[cfg(feature = "metrics")]
mod ring_buffer;

#[cfg(feature = "metrics")]
pub use frame_timer::FrameTimer;
#[cfg(feature = "metrics")]
pub use population::PopulationStats;
#[cfg(feature = "metrics")]
pub use ring_buffer::RingBuffer;

// ============================================================================
// No-op stubs when metrics disabled
// ============================================================================

#[cfg(not(feature = "metrics"))]
pub struct FrameTimer;

#[cfg(not(feature = "metrics"))]
impl FrameTimer {
    pub fn new(_window: usize) -> Self { Self }
    pub fn mark(&mut self) {}
    pub fn fps(&self) -> f64 { 0.0 }
    pub fn interval_ms(&self) -> f64 { 0.0 }
    pub fn frames(&self) -> u64 { 0 }
}

#[cfg(not(feature = "metrics"))]
pub struct RingBuffer<T>(std::marker::PhantomData<T>);

#[cfg(not(feature = "metrics"))]
impl<T> RingBuffer<T> {
    pub fn new(_capacity: usize) -> Self { Self(std::marker::PhantomData) }
    pub fn push(&mut self, _value: T) {}
    pub fn len(&self) -> usize { 0 }
    pub fn is_empty(&self) -> bool { true }
}

#[cfg(not(feature = "metrics"))]
pub struct PopulationStats;

#[cfg(not(feature = "metrics"))]
impl PopulationStats {
    pub fn new(_window: usize) -> Self { Self }
    pub fn record_burst(&mut self, _particles: usize) {}
    pub fn record_frame(&mut self, _live: usize, _culled: usize) {}
    pub fn bursts(&self) -> u64 { 0 }
    pub fn spawned(&self) -> u64 { 0 }
    pub fn culled(&self) -> u64 { 0 }
    pub fn peak_live(&self) -> usize { 0 }
    pub fn average_live(&self) -> f64 { 0.0 }
}
