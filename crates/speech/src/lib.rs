//! Speech Synthesis Boundary
//!
//! The pipeline consumes text-to-speech strictly through the
//! [`SpeechSynthesizer`] trait. The engine is an external collaborator;
//! this crate ships an espeak-ng subprocess backend and a mock for tests.

mod espeak;
mod synthesizer;

pub use espeak::EspeakSynthesizer;
pub use synthesizer::{MockSynthesizer, SpeechConfig, SpeechSynthesizer};

use thiserror::Error;

/// Speech synthesis errors
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("speech backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("synthesis failed: {0}")]
    Synthesis(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
