//! Spark Services Layer
//!
//! Settings loading and the burst color policy

pub mod error;
pub mod palette;
pub mod settings;

pub use error::SettingsError;
pub use palette::{BurstCue, BurstPalette, Urgency};
pub use settings::Settings;
