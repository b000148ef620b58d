//! Alert delivery implementation

use alerting::Alert;
use haptics::HapticClient;
use speech::SpeechSynthesizer;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// The process-wide speech resource. At most one in-flight utterance at
/// any instant across all sessions.
pub type SharedSpeech = Arc<Mutex<Box<dyn SpeechSynthesizer>>>;

/// Wrap a synthesizer as the shared speech resource
pub fn shared_speech<S: SpeechSynthesizer + 'static>(synthesizer: S) -> SharedSpeech {
    Arc::new(Mutex::new(Box::new(synthesizer)))
}

/// Delivers alerts to the speaker and the motor
#[derive(Clone)]
pub struct AlertDispatcher {
    speech: SharedSpeech,
    haptics: HapticClient,
}

impl AlertDispatcher {
    pub fn new(speech: SharedSpeech, haptics: HapticClient) -> Self {
        Self { speech, haptics }
    }

    /// Deliver one alert and return the synthesized audio bytes.
    ///
    /// Actuation is spawned detached before the speech lock is taken, so
    /// motor latency is never serialized behind audio generation. The task
    /// outlives the frame; there is no cancellation and no backpressure.
    /// A synthesis fault is logged and yields empty audio, never an error.
    pub async fn dispatch(&self, alert: &Alert) -> Vec<u8> {
        if alert.actuation_seconds > 0 {
            let motor = self.haptics.clone();
            let window = Duration::from_secs(alert.actuation_seconds);
            tokio::spawn(async move {
                motor.pulse(window).await;
            });
            debug!("actuation dispatched for {:?}", window);
        }

        // Lock scope covers exactly the utterance; the guard drops on
        // every path including synthesis failure
        let synthesizer = self.speech.lock().await;
        match synthesizer.synthesize(&alert.message).await {
            Ok(audio) => audio,
            Err(e) => {
                warn!("speech synthesis failed: {}", e);
                Vec::new()
            }
        }
    }
}
