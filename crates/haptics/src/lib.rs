//! Haptic Actuator Client
//!
//! Drives a remote vibration motor over HTTP on/off endpoints. Every call
//! is best-effort with a bounded timeout; actuation faults are logged and
//! never surface to the frame pipeline.

mod client;

pub use client::{HapticClient, HapticsConfig, HapticsError};
