//! Motor endpoint client

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Haptics errors (construction only; commands are best-effort)
#[derive(Error, Debug)]
pub enum HapticsError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Motor endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HapticsConfig {
    /// Endpoint that switches the motor on
    pub on_url: String,
    /// Endpoint that switches the motor off
    pub off_url: String,
    /// Per-request timeout (seconds)
    pub request_timeout_s: u64,
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self {
            on_url: "http://192.168.112.2/motor/on".to_string(),
            off_url: "http://192.168.112.2/motor/off".to_string(),
            request_timeout_s: 3,
        }
    }
}

/// Client for the vibration motor controller
#[derive(Clone)]
pub struct HapticClient {
    http: reqwest::Client,
    config: HapticsConfig,
}

impl HapticClient {
    pub fn new(config: HapticsConfig) -> Result<Self, HapticsError> {
        info!(
            "creating haptic client for {} (timeout {}s)",
            config.on_url, config.request_timeout_s
        );
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_s))
            .build()?;
        Ok(Self { http, config })
    }

    async fn send_command(&self, url: &str) -> Result<(), reqwest::Error> {
        self.http.get(url).send().await?.error_for_status()?;
        Ok(())
    }

    /// Switch the motor on. Failures are logged, never returned.
    pub async fn on(&self) {
        if let Err(e) = self.send_command(&self.config.on_url).await {
            warn!("motor on command failed: {}", e);
        }
    }

    /// Switch the motor off. Failures are logged, never returned.
    pub async fn off(&self) {
        if let Err(e) = self.send_command(&self.config.off_url).await {
            warn!("motor off command failed: {}", e);
        }
    }

    /// Run one actuation window: on, hold, off.
    ///
    /// The two commands are independently best-effort; a failed on command
    /// never skips the off attempt. Overlapping windows from different
    /// frames are intentionally uncoordinated.
    pub async fn pulse(&self, window: Duration) {
        debug!("motor on for {:?}", window);
        self.on().await;
        sleep(window).await;
        self.off().await;
    }
}
