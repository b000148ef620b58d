//! Detection data model

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BoundingBox {
    /// Box height in pixels
    pub fn height(&self) -> f32 {
        (self.y2 - self.y1).abs()
    }

    /// Horizontal center of the box
    pub fn center_x(&self) -> f32 {
        (self.x1 + self.x2) / 2.0
    }
}

/// One labeled detection produced for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Label from the detector's vocabulary
    pub label: String,
    /// Detection confidence (0.0 to 1.0)
    pub confidence: f32,
    /// Bounding box in the frame's pixel space
    pub bbox: BoundingBox,
}

impl Detection {
    /// Convenience constructor used by backends and tests
    pub fn new(label: &str, confidence: f32, bbox: BoundingBox) -> Self {
        Self {
            label: label.to_string(),
            confidence,
            bbox,
        }
    }
}
