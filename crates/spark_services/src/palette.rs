//! Which color a completion burst gets

use serde::{Deserialize, Serialize};
use spark_core::ColorToken;

/// How pressing a task's deadline is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[default]
    None,
    DueSoon,
    Overdue,
}

/// What the caller knows about the task being completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BurstCue {
    /// Recurring daily task rather than a one-off
    pub daily: bool,
    pub urgency: Urgency,
}

/// Burst colors per task category. Urgency wins over category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstPalette {
    pub routine: String,
    pub daily: String,
    pub due_soon: String,
    pub overdue: String,
}

impl Default for BurstPalette {
    fn default() -> Self {
        Self {
            routine: "#bc13fe".to_string(),
            daily: "#00f3ff".to_string(),
            due_soon: "#f59e0b".to_string(),
            overdue: "#ef4444".to_string(),
        }
    }
}

impl BurstPalette {
    pub fn color_for(&self, cue: BurstCue) -> ColorToken {
        let color = match cue.urgency {
            Urgency::Overdue => &self.overdue,
            Urgency::DueSoon => &self.due_soon,
            Urgency::None if cue.daily => &self.daily,
            Urgency::None => &self.routine,
        };
        ColorToken::new(color)
    }

    fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("palette.routine", &self.routine),
            ("palette.daily", &self.daily),
            ("palette.due_soon", &self.due_soon),
            ("palette.overdue", &self.overdue),
        ]
    }

    /// Names of palette entries left empty
    pub fn blank_entries(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, color)| color.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_colors() {
        let palette = BurstPalette::default();
        assert_eq!(palette.color_for(BurstCue::default()).as_str(), "#bc13fe");
        assert_eq!(
            palette
                .color_for(BurstCue { daily: true, urgency: Urgency::None })
                .as_str(),
            "#00f3ff"
        );
    }

    #[test]
    fn urgency_overrides_category() {
        let palette = BurstPalette::default();
        for daily in [false, true] {
            assert_eq!(
                palette
                    .color_for(BurstCue { daily, urgency: Urgency::Overdue })
                    .as_str(),
                "#ef4444"
            );
            assert_eq!(
                palette
                    .color_for(BurstCue { daily, urgency: Urgency::DueSoon })
                    .as_str(),
                "#f59e0b"
            );
        }
    }

    #[test]
    fn reports_blank_entries() {
        let palette = BurstPalette {
            daily: "  ".to_string(),
            ..BurstPalette::default()
        };
        assert_eq!(palette.blank_entries(), vec!["palette.daily"]);
        assert!(BurstPalette::default().blank_entries().is_empty());
    }
}
