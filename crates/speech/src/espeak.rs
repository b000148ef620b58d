//! espeak-ng subprocess backend

use crate::{SpeechConfig, SpeechError, SpeechSynthesizer};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

const ESPEAK_BIN: &str = "espeak-ng";

/// Synthesizer backed by the espeak-ng command-line engine.
///
/// Each utterance spawns one short-lived process and captures its WAV
/// output from stdout, so no engine state leaks across calls.
pub struct EspeakSynthesizer {
    config: SpeechConfig,
}

impl EspeakSynthesizer {
    /// Probe the engine and build the synthesizer. A missing engine is a
    /// startup fault and aborts loudly.
    pub async fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        let probe = Command::new(ESPEAK_BIN)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                SpeechError::BackendUnavailable(format!("{} not runnable: {}", ESPEAK_BIN, e))
            })?;

        if !probe.success() {
            return Err(SpeechError::BackendUnavailable(format!(
                "{} probe exited with {}",
                ESPEAK_BIN, probe
            )));
        }

        info!(
            "speech backend ready: {} at {} wpm",
            ESPEAK_BIN, config.rate_wpm
        );
        Ok(Self { config })
    }

    // espeak amplitude range is 0..=200 with 100 as nominal full volume
    fn amplitude(&self) -> u32 {
        (self.config.volume.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

#[async_trait]
impl SpeechSynthesizer for EspeakSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let mut cmd = Command::new(ESPEAK_BIN);
        cmd.arg("--stdout")
            .arg("-s")
            .arg(self.config.rate_wpm.to_string())
            .arg("-a")
            .arg(self.amplitude().to_string());
        if let Some(voice) = &self.config.voice {
            cmd.arg("-v").arg(voice);
        }
        cmd.arg(text).stdin(Stdio::null()).stderr(Stdio::piped());

        let output = cmd.output().await?;
        if !output.status.success() {
            return Err(SpeechError::Synthesis(format!(
                "{} exited with {}: {}",
                ESPEAK_BIN,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        debug!("synthesized {} bytes of audio", output.stdout.len());
        Ok(output.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amplitude_mapping() {
        let synth = EspeakSynthesizer {
            config: SpeechConfig {
                volume: 1.0,
                ..Default::default()
            },
        };
        assert_eq!(synth.amplitude(), 100);

        let quiet = EspeakSynthesizer {
            config: SpeechConfig {
                volume: 0.5,
                ..Default::default()
            },
        };
        assert_eq!(quiet.amplitude(), 50);

        let clamped = EspeakSynthesizer {
            config: SpeechConfig {
                volume: 4.0,
                ..Default::default()
            },
        };
        assert_eq!(clamped.amplitude(), 100);
    }
}
