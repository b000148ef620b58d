//! Detector adapter trait and mock backend

use crate::{DetectError, Detection};
use async_trait::async_trait;
use camera_frame::CameraFrame;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Detector backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Path to a detection model, when a real backend is available
    pub model_path: Option<String>,
    /// Minimum confidence for a detection to be reported
    pub confidence_threshold: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            confidence_threshold: 0.25,
        }
    }
}

/// Adapter boundary for the object-detection model.
///
/// Backends must be deterministic for a given frame within a run so frame
/// processing stays reproducible under test.
#[async_trait]
pub trait ObjectDetector: Send + Sync {
    /// Run detection over a decoded frame
    async fn detect(&self, frame: &CameraFrame) -> Result<Vec<Detection>, DetectError>;
}

/// Mock detector replaying a fixed set of detections (no model required)
pub struct MockDetector {
    detections: Vec<Detection>,
    confidence_threshold: f32,
}

impl MockDetector {
    /// Create a mock that reports the given detections on every frame
    pub fn with_detections(detections: Vec<Detection>) -> Self {
        info!("creating mock detector with {} detections", detections.len());
        Self {
            detections,
            confidence_threshold: 0.0,
        }
    }

    /// Create a mock that sees an empty scene
    pub fn empty() -> Self {
        Self::with_detections(Vec::new())
    }

    /// Apply a confidence floor to the replayed detections
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }
}

#[async_trait]
impl ObjectDetector for MockDetector {
    async fn detect(&self, frame: &CameraFrame) -> Result<Vec<Detection>, DetectError> {
        let detections: Vec<Detection> = self
            .detections
            .iter()
            .filter(|d| d.confidence >= self.confidence_threshold)
            .cloned()
            .collect();
        debug!(
            "mock detect on frame {}: {} detections",
            frame.sequence,
            detections.len()
        );
        Ok(detections)
    }
}

/// Build the detector backend selected by configuration.
///
/// A configured model path is a hard startup requirement: failing to honor
/// it must abort loudly rather than silently degrade to the mock.
pub fn detector_from_config(
    config: &DetectorConfig,
) -> Result<Arc<dyn ObjectDetector>, DetectError> {
    match &config.model_path {
        Some(path) => Err(DetectError::ModelLoad(format!(
            "no model backend compiled in for {}",
            path
        ))),
        None => {
            warn!("no detector model configured, using mock detector");
            Ok(Arc::new(
                MockDetector::empty().with_confidence_threshold(config.confidence_threshold),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoundingBox;

    fn frame() -> CameraFrame {
        CameraFrame::new(vec![0; 8 * 8 * 3], 8, 8, 1)
    }

    fn detection(label: &str, confidence: f32) -> Detection {
        Detection::new(
            label,
            confidence,
            BoundingBox {
                x1: 0.0,
                y1: 0.0,
                x2: 10.0,
                y2: 10.0,
            },
        )
    }

    #[tokio::test]
    async fn test_mock_replays_detections() {
        let mock = MockDetector::with_detections(vec![detection("person", 0.9)]);
        let out = mock.detect(&frame()).await.unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "person");
    }

    #[tokio::test]
    async fn test_mock_is_deterministic_across_frames() {
        let mock = MockDetector::with_detections(vec![detection("car", 0.8)]);
        let first = mock.detect(&frame()).await.unwrap();
        let second = mock.detect(&frame()).await.unwrap();
        assert_eq!(first.len(), second.len());
        assert_eq!(first[0].label, second[0].label);
    }

    #[tokio::test]
    async fn test_confidence_threshold_filters() {
        let mock = MockDetector::with_detections(vec![
            detection("person", 0.9),
            detection("dog", 0.1),
        ])
        .with_confidence_threshold(0.5);
        let out = mock.detect(&frame()).await.unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].label, "person");
    }

    #[test]
    fn test_configured_model_path_fails_loudly() {
        let config = DetectorConfig {
            model_path: Some("models/yolo.onnx".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            detector_from_config(&config),
            Err(DetectError::ModelLoad(_))
        ));
    }

    #[test]
    fn test_default_config_yields_mock() {
        let detector = detector_from_config(&DetectorConfig::default());
        assert!(detector.is_ok());
    }
}
