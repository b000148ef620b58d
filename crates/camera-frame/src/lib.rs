//! Camera Frame Handling
//!
//! Provides the decoded RGB frame type shared across the pipeline and
//! decoding of inbound encoded image payloads.

mod frame;

pub use frame::{decode_frame, CameraFrame, DecodeError};
