//! Settings management

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::palette::BurstPalette;

/// Overlay settings. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub palette: BurstPalette,
    pub simulation: SimulationSettings,
    pub metrics: MetricsSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub transparent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Fixed RNG seed for reproducible bursts; entropy when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSettings {
    /// How often frame and population stats are logged
    pub report_interval_secs: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Spark".to_string(),
            width: 1280,
            height: 720,
            transparent: true,
        }
    }
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            report_interval_secs: 2.0,
        }
    }
}

impl MetricsSettings {
    /// The reporting period, if `report_interval_secs` is a positive
    /// duration that fits in a [`Duration`].
    pub fn report_interval(&self) -> Option<Duration> {
        Duration::try_from_secs_f32(self.report_interval_secs)
            .ok()
            .filter(|interval| !interval.is_zero())
    }
}

impl Settings {
    /// Read and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&text)?;
        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn from_json_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(SettingsError::Invalid {
                field: "window",
                reason: format!(
                    "size must be non-zero, got {}x{}",
                    self.window.width, self.window.height
                ),
            });
        }
        if self.metrics.report_interval().is_none() {
            return Err(SettingsError::Invalid {
                field: "metrics.report_interval_secs",
                reason: format!(
                    "must be a positive, representable number of seconds, got {}",
                    self.metrics.report_interval_secs
                ),
            });
        }
        if let Some(field) = self.palette.blank_entries().first().copied() {
            return Err(SettingsError::Invalid {
                field,
                reason: "color must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let settings = Settings::from_json_str("{}").expect("valid");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.window.width, 1280);
        assert_eq!(settings.simulation.seed, None);
        assert_eq!(settings.metrics.report_interval_secs, 2.0);
    }

    #[test]
    fn partial_overrides() {
        let settings = Settings::from_json_str(
            r##"{
                "window": { "title": "Tasks", "transparent": false },
                "palette": { "overdue": "rgb(255, 0, 0)" },
                "simulation": { "seed": 42 }
            }"##,
        )
        .expect("valid");

        assert_eq!(settings.window.title, "Tasks");
        assert!(!settings.window.transparent);
        assert_eq!(settings.window.height, 720);
        assert_eq!(settings.palette.overdue, "rgb(255, 0, 0)");
        assert_eq!(settings.palette.daily, "#00f3ff");
        assert_eq!(settings.simulation.seed, Some(42));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Settings::from_json_str(r#"{ "window": { "width": 0 } }"#),
            Err(SettingsError::Invalid { field: "window", .. })
        ));
        assert!(matches!(
            Settings::from_json_str(r#"{ "metrics": { "report_interval_secs": -1 } }"#),
            Err(SettingsError::Invalid { field: "metrics.report_interval_secs", .. })
        ));
        assert!(matches!(
            Settings::from_json_str(r#"{ "metrics": { "report_interval_secs": 0 } }"#),
            Err(SettingsError::Invalid { field: "metrics.report_interval_secs", .. })
        ));
        assert!(matches!(
            Settings::from_json_str(r#"{ "palette": { "routine": "" } }"#),
            Err(SettingsError::Invalid { field: "palette.routine", .. })
        ));
        assert!(matches!(
            Settings::from_json_str("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn report_interval_must_fit_a_duration() {
        assert!(matches!(
            Settings::from_json_str(r#"{ "metrics": { "report_interval_secs": 1e30 } }"#),
            Err(SettingsError::Invalid { field: "metrics.report_interval_secs", .. })
        ));

        let settings =
            Settings::from_json_str(r#"{ "metrics": { "report_interval_secs": 0.5 } }"#)
                .expect("valid");
        assert_eq!(settings.metrics.report_interval(), Some(Duration::from_millis(500)));
        assert_eq!(
            MetricsSettings::default().report_interval(),
            Some(Duration::from_secs(2))
        );
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Settings::load("/definitely/not/here/spark.json").expect_err("missing");
        assert!(err.to_string().contains("/definitely/not/here/spark.json"));
    }

    #[test]
    fn round_trips_through_json() {
        let settings = Settings::default();
        let text = serde_json::to_string(&settings).expect("serialize");
        assert_eq!(Settings::from_json_str(&text).expect("valid"), settings);
    }
}
