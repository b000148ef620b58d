//! Pinhole-camera distance estimation

use crate::Bearing;
use serde::{Deserialize, Serialize};

/// Camera optics used for monocular distance estimation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraGeometry {
    /// Lens focal length (mm)
    pub focal_length_mm: f64,
    /// Physical sensor height (mm)
    pub sensor_height_mm: f64,
}

impl Default for CameraGeometry {
    fn default() -> Self {
        Self {
            focal_length_mm: 3.6,
            sensor_height_mm: 2.76,
        }
    }
}

/// Physical estimate derived from one detection in one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimate {
    /// Detector label the estimate was derived from
    pub label: String,
    /// Estimated distance (meters), `None` when inestimable
    pub distance_m: Option<f64>,
    /// Coarse horizontal bearing
    pub bearing: Bearing,
}

impl Estimate {
    /// Spoken phrase for this estimate, e.g. "car 6.0 meters center".
    /// Inestimable entries have no spoken form.
    pub fn phrase(&self) -> Option<String> {
        let distance = self.distance_m?;
        Some(format!(
            "{} {} meters {}",
            self.label,
            spoken_distance(distance),
            self.bearing.as_str()
        ))
    }
}

/// Estimate object distance from its bounding-box height.
///
/// `distance = (known_height * focal_length * image_height) /
/// (bbox_height * sensor_height)`, rounded to 2 decimal places.
///
/// Returns `None` for degenerate boxes (`bbox_height_px <= 0`) instead of
/// dividing by zero or producing NaN.
pub fn estimate_distance(
    known_height_m: f64,
    bbox_height_px: f64,
    image_height_px: u32,
    geometry: &CameraGeometry,
) -> Option<f64> {
    if bbox_height_px <= 0.0 || !bbox_height_px.is_finite() {
        return None;
    }

    let distance = (known_height_m * geometry.focal_length_mm * image_height_px as f64)
        / (bbox_height_px * geometry.sensor_height_mm);

    Some((distance * 100.0).round() / 100.0)
}

/// Format a distance the way it is spoken: integral values keep one
/// decimal ("3.0"), fractional values print as rounded ("10.64").
pub fn spoken_distance(distance_m: f64) -> String {
    if distance_m.fract() == 0.0 {
        format!("{:.1}", distance_m)
    } else {
        format!("{}", distance_m)
    }
}
