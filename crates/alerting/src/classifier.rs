//! Per-frame hazard classification

use crate::HazardConfig;
use detection::Detection;
use estimation::{estimate_distance, Bearing, CameraGeometry, Estimate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Label the pothole model reports for road-surface hazards
const POTHOLE_LABEL: &str = "pothole";

/// Spoken label for pothole announcements
const POTHOLE_SPOKEN: &str = "Pothole";

/// Message for frames with no surviving hazard
const ALL_CLEAR_MESSAGE: &str = "All clear ahead";

/// Ranked alert level. Road-surface hazards outrank moving obstacles,
/// so the order is total: Warning > Caution > Clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Clear,
    Caution,
    Warning,
}

/// The single alert decided for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub severity: Severity,
    /// Spoken message for the frame
    pub message: String,
    /// Haptic actuation window (seconds), 0 disables actuation
    pub actuation_seconds: u64,
}

/// Aggregates a frame's detections into one prioritized alert
pub struct HazardClassifier {
    config: HazardConfig,
    geometry: CameraGeometry,
}

impl HazardClassifier {
    pub fn new(config: HazardConfig, geometry: CameraGeometry) -> Self {
        Self { config, geometry }
    }

    /// Classify all detections of one frame into a single alert.
    ///
    /// Pothole-class survivors always dominate obstacle-class survivors
    /// regardless of relative distance. Duplicate labels at different
    /// positions are each listed.
    pub fn classify(&self, detections: &[Detection], width: u32, height: u32) -> Alert {
        let mut potholes: Vec<Estimate> = Vec::new();
        let mut obstacles: Vec<Estimate> = Vec::new();

        for det in detections {
            let Some(known_height) = self.config.known_height(&det.label) else {
                debug!("skipping detection with unknown height: {}", det.label);
                continue;
            };

            let Some(distance) = estimate_distance(
                known_height,
                det.bbox.height() as f64,
                height,
                &self.geometry,
            ) else {
                debug!("skipping degenerate box for {}", det.label);
                continue;
            };

            let bearing = Bearing::from_center_x(det.bbox.center_x() as f64, width);

            if det.label == POTHOLE_LABEL {
                if distance <= self.config.pothole_limit_m {
                    potholes.push(Estimate {
                        label: POTHOLE_SPOKEN.to_string(),
                        distance_m: Some(distance),
                        bearing,
                    });
                }
            } else if !self.config.is_ignored(&det.label)
                && distance <= self.config.obstacle_limit_m
            {
                obstacles.push(Estimate {
                    label: det.label.clone(),
                    distance_m: Some(distance),
                    bearing,
                });
            }
        }

        if !potholes.is_empty() {
            Alert {
                severity: Severity::Warning,
                message: format!("Warning! {}", join_phrases(&potholes)),
                actuation_seconds: self.config.warning_actuation_s,
            }
        } else if !obstacles.is_empty() {
            Alert {
                severity: Severity::Caution,
                message: format!("Caution! {}", join_phrases(&obstacles)),
                actuation_seconds: self.config.caution_actuation_s,
            }
        } else {
            Alert {
                severity: Severity::Clear,
                message: ALL_CLEAR_MESSAGE.to_string(),
                actuation_seconds: 0,
            }
        }
    }
}

fn join_phrases(estimates: &[Estimate]) -> String {
    estimates
        .iter()
        .filter_map(Estimate::phrase)
        .collect::<Vec<_>>()
        .join(", ")
}
