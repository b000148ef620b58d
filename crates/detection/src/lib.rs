//! Object Detection Boundary
//!
//! Data model for per-frame detections and the adapter trait the pipeline
//! consumes. The detection model itself is an external collaborator; this
//! crate only fixes its interface and ships a mock backend for running
//! without model hardware.

mod detector;
mod model;

pub use detector::{detector_from_config, DetectorConfig, MockDetector, ObjectDetector};
pub use model::{BoundingBox, Detection};

use thiserror::Error;

/// Detection errors
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("model loading failed: {0}")]
    ModelLoad(String),

    #[error("inference failed: {0}")]
    Inference(String),
}
