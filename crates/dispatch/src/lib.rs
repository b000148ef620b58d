//! Alert Dispatcher
//!
//! Delivers one alert: haptic actuation fires as a detached task before
//! the dispatcher blocks on speech, and speech is serialized process-wide
//! through a single mutex so sessions never talk over each other.

mod dispatcher;

pub use dispatcher::{shared_speech, AlertDispatcher, SharedSpeech};
