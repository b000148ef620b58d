//! Synthesizer trait, configuration, and mock backend

use crate::SpeechError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Speech output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Speaking rate in words per minute
    pub rate_wpm: u32,
    /// Output volume, 0.0 to 1.0
    pub volume: f32,
    /// Optional engine voice name
    pub voice: Option<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            rate_wpm: 160,
            volume: 1.0,
            voice: None,
        }
    }
}

/// Adapter boundary for the text-to-speech engine.
///
/// Implementations must be repeatedly callable without leaking OS
/// resources. Callers serialize access themselves; the trait makes no
/// concurrency promise of its own.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize an utterance into audio bytes (WAV)
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError>;
}

/// Mock synthesizer returning the utterance's UTF-8 bytes as stand-in
/// audio, with optional latency and injected failure
pub struct MockSynthesizer {
    delay: Duration,
    fail: bool,
}

impl MockSynthesizer {
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
            fail: false,
        }
    }

    /// Add artificial synthesis latency
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Make every synthesis call fail
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Default for MockSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(SpeechError::Synthesis("mock failure".to_string()));
        }
        debug!("mock synthesis of {} chars", text.len());
        Ok(text.as_bytes().to_vec())
    }
}
