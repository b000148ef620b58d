//! Per-frame processing pipeline

use alerting::HazardClassifier;
use camera_frame::CameraFrame;
use detection::{Detection, ObjectDetector};
use dispatch::AlertDispatcher;
use std::sync::Arc;
use tracing::{debug, warn};

/// Detection, classification, and dispatch for one decoded frame.
///
/// Stateless across frames by design: every frame is classified on its
/// own, so sessions share one pipeline freely.
pub struct FramePipeline {
    detector: Arc<dyn ObjectDetector>,
    classifier: HazardClassifier,
    dispatcher: AlertDispatcher,
}

impl FramePipeline {
    pub fn new(
        detector: Arc<dyn ObjectDetector>,
        classifier: HazardClassifier,
        dispatcher: AlertDispatcher,
    ) -> Self {
        Self {
            detector,
            classifier,
            dispatcher,
        }
    }

    /// Process one frame and return the audio reply bytes.
    ///
    /// A detection fault degrades to an empty scene (Clear alert) rather
    /// than aborting the session; a speech fault yields an empty reply.
    pub async fn process_frame(&self, frame: &CameraFrame) -> Vec<u8> {
        let detections: Vec<Detection> = match self.detector.detect(frame).await {
            Ok(detections) => detections,
            Err(e) => {
                warn!(
                    "detection failed on frame {}, treating as empty scene: {}",
                    frame.sequence, e
                );
                Vec::new()
            }
        };

        let alert = self
            .classifier
            .classify(&detections, frame.width, frame.height);
        debug!(
            "frame {}: {:?} ({} detections)",
            frame.sequence,
            alert.severity,
            detections.len()
        );

        self.dispatcher.dispatch(&alert).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alerting::HazardConfig;
    use async_trait::async_trait;
    use detection::{BoundingBox, DetectError, MockDetector};
    use dispatch::shared_speech;
    use estimation::CameraGeometry;
    use haptics::{HapticClient, HapticsConfig};
    use speech::MockSynthesizer;

    struct FailingDetector;

    #[async_trait]
    impl ObjectDetector for FailingDetector {
        async fn detect(&self, _frame: &CameraFrame) -> Result<Vec<Detection>, DetectError> {
            Err(DetectError::Inference("model exploded".to_string()))
        }
    }

    fn pipeline_with(detector: Arc<dyn ObjectDetector>) -> FramePipeline {
        let haptics = HapticClient::new(HapticsConfig {
            on_url: "http://127.0.0.1:1/motor/on".to_string(),
            off_url: "http://127.0.0.1:1/motor/off".to_string(),
            request_timeout_s: 1,
        })
        .unwrap();
        FramePipeline::new(
            detector,
            HazardClassifier::new(HazardConfig::default(), CameraGeometry::default()),
            AlertDispatcher::new(shared_speech(MockSynthesizer::new()), haptics),
        )
    }

    fn frame() -> CameraFrame {
        CameraFrame::new(vec![0; 640 * 480 * 3], 640, 480, 1)
    }

    #[tokio::test]
    async fn test_empty_scene_speaks_all_clear() {
        let pipeline = pipeline_with(Arc::new(MockDetector::empty()));
        let audio = pipeline.process_frame(&frame()).await;
        assert_eq!(audio, b"All clear ahead");
    }

    #[tokio::test]
    async fn test_detection_fault_degrades_to_clear() {
        let pipeline = pipeline_with(Arc::new(FailingDetector));
        let audio = pipeline.process_frame(&frame()).await;
        assert_eq!(audio, b"All clear ahead");
    }

    #[tokio::test]
    async fn test_near_hazard_is_announced() {
        let detector = MockDetector::with_detections(vec![Detection::new(
            "person",
            0.9,
            BoundingBox {
                x1: 300.0,
                y1: 100.0,
                x2: 340.0,
                y2: 300.0,
            },
        )]);
        let pipeline = pipeline_with(Arc::new(detector));
        let audio = pipeline.process_frame(&frame()).await;
        let spoken = String::from_utf8(audio).unwrap();
        assert!(spoken.starts_with("Caution! person 5.32 meters center"));
    }
}
