//! Sightline Hazard-Alert Server - Main Entry Point

use alerting::HazardClassifier;
use detection::detector_from_config;
use dispatch::{shared_speech, AlertDispatcher};
use haptics::HapticClient;
use server::{init_logging, run_server, FramePipeline, ServerConfig};
use speech::EspeakSynthesizer;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!("=== Sightline Hazard Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ServerConfig::load(config_path.as_deref())?;

    // Startup faults abort loudly; nothing after this point is fatal
    let detector = detector_from_config(&config.detector)?;
    let synthesizer = EspeakSynthesizer::new(config.speech.clone()).await?;
    let haptics = HapticClient::new(config.haptics.clone())?;

    let classifier = HazardClassifier::new(config.hazard.clone(), config.geometry.clone());
    let dispatcher = AlertDispatcher::new(shared_speech(synthesizer), haptics);
    let pipeline = Arc::new(FramePipeline::new(detector, classifier, dispatcher));

    run_server(&config.listen_addr, pipeline).await?;

    Ok(())
}
