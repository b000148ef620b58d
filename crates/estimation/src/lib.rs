//! Distance and Bearing Estimation
//!
//! Pure geometric conversion from pixel-space bounding boxes to physical
//! distance and coarse horizontal bearing. No I/O, deterministic.

mod bearing;
mod distance;

pub use bearing::Bearing;
pub use distance::{estimate_distance, spoken_distance, CameraGeometry, Estimate};
