//! Coarse horizontal bearing within the frame

use serde::{Deserialize, Serialize};

/// Horizontal position of a detection, as spoken to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bearing {
    Left,
    Center,
    Right,
}

impl Bearing {
    /// Classify a bounding-box horizontal center into one of three equal
    /// thirds of the frame. The boundary `x == width/3` is center.
    pub fn from_center_x(center_x: f64, frame_width: u32) -> Self {
        let third = frame_width as f64 / 3.0;
        if center_x < third {
            Bearing::Left
        } else if center_x < 2.0 * third {
            Bearing::Center
        } else {
            Bearing::Right
        }
    }

    /// Spoken form of the bearing
    pub fn as_str(&self) -> &'static str {
        match self {
            Bearing::Left => "left",
            Bearing::Center => "center",
            Bearing::Right => "right",
        }
    }
}
