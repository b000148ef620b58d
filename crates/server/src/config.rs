//! Server configuration
//!
//! Defaults mirror the deployed constants; a TOML file and SIGHTLINE_*
//! environment variables can override any field.

use alerting::HazardConfig;
use detection::DetectorConfig;
use estimation::CameraGeometry;
use haptics::HapticsConfig;
use serde::{Deserialize, Serialize};
use speech::SpeechConfig;
use std::path::Path;

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address for the streaming socket
    pub listen_addr: String,
    /// Detector backend settings
    pub detector: DetectorConfig,
    /// Camera optics for distance estimation
    pub geometry: CameraGeometry,
    /// Hazard classification thresholds and taxonomy
    pub hazard: HazardConfig,
    /// Speech output settings
    pub speech: SpeechConfig,
    /// Vibration motor endpoints
    pub haptics: HapticsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            detector: DetectorConfig::default(),
            geometry: CameraGeometry::default(),
            hazard: HazardConfig::default(),
            speech: SpeechConfig::default(),
            haptics: HapticsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration: defaults, then an optional TOML file, then
    /// environment overrides (`SIGHTLINE_LISTEN_ADDR` etc.)
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&ServerConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SIGHTLINE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
