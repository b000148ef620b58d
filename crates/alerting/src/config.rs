//! Hazard classification configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Hazard classifier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardConfig {
    /// Obstacle-class detections beyond this range are not announced (meters)
    pub obstacle_limit_m: f64,
    /// Pothole-class detections beyond this range are not announced (meters)
    pub pothole_limit_m: f64,
    /// Actuation window for Warning alerts (seconds)
    pub warning_actuation_s: u64,
    /// Actuation window for Caution alerts (seconds)
    pub caution_actuation_s: u64,
    /// Labels never announced as obstacles (stationary signage etc.)
    pub ignored_labels: Vec<String>,
    /// Real-world object heights by detector label (meters). Labels without
    /// an entry are skipped, not errors.
    pub known_heights_m: HashMap<String, f64>,
}

impl HazardConfig {
    /// Whether a label is excluded from obstacle announcements
    pub fn is_ignored(&self, label: &str) -> bool {
        self.ignored_labels.iter().any(|l| l == label)
    }

    /// Known height for a label, if the taxonomy covers it
    pub fn known_height(&self, label: &str) -> Option<f64> {
        self.known_heights_m.get(label).copied()
    }
}

impl Default for HazardConfig {
    fn default() -> Self {
        let known_heights_m = [
            ("person", 1.7),
            ("car", 1.5),
            ("motorcycle", 1.2),
            ("bicycle", 1.1),
            ("bus", 3.0),
            ("truck", 3.0),
            ("dog", 0.6),
            ("cat", 0.3),
            ("chair", 1.0),
            ("bottle", 0.25),
            ("traffic light", 2.5),
            ("bench", 1.0),
            ("handbag", 0.4),
            ("backpack", 0.5),
            ("helmet", 0.3),
            ("trolley", 0.8),
            ("pothole", 0.15),
        ]
        .into_iter()
        .map(|(label, height)| (label.to_string(), height))
        .collect();

        Self {
            obstacle_limit_m: 8.0,
            pothole_limit_m: 5.0,
            warning_actuation_s: 5,
            caution_actuation_s: 2,
            ignored_labels: vec!["traffic light".to_string()],
            known_heights_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy_covers_core_hazards() {
        let config = HazardConfig::default();
        for label in ["person", "car", "bus", "truck", "pothole"] {
            assert!(config.known_height(label).is_some(), "missing {}", label);
        }
    }

    #[test]
    fn test_traffic_light_is_ignored_by_default() {
        let config = HazardConfig::default();
        assert!(config.is_ignored("traffic light"));
        assert!(!config.is_ignored("car"));
    }

    #[test]
    fn test_unknown_label_has_no_height() {
        let config = HazardConfig::default();
        assert_eq!(config.known_height("skateboard"), None);
    }
}
