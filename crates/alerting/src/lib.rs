//! Alerting System
//!
//! Turns a frame's detections into exactly one prioritized spoken alert
//! plus a haptic actuation window.

mod classifier;
mod config;

pub use classifier::{Alert, HazardClassifier, Severity};
pub use config::HazardConfig;
