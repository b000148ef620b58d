//! Hazard-Alert Streaming Server
//!
//! Accepts persistent client connections, runs the per-frame pipeline
//! (decode, detect, classify, dispatch), and streams spoken-audio replies
//! back over the same length-prefixed protocol.

mod config;
mod pipeline;
mod session;
mod wire;

pub use config::ServerConfig;
pub use pipeline::FramePipeline;
pub use session::StreamSession;
pub use wire::{read_message, write_message, WireError, MAX_MESSAGE_BYTES};

use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Accept connections forever, spawning one independent session per
/// client. Acceptance never blocks already-running sessions.
pub async fn serve(listener: TcpListener, pipeline: Arc<FramePipeline>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                info!("client connected from {}", peer);
                let session = StreamSession::new(stream, peer.to_string(), Arc::clone(&pipeline));
                tokio::spawn(session.run());
            }
            Err(e) => {
                // Transient accept failures must not take down live sessions
                warn!("failed to accept connection: {}", e);
            }
        }
    }
}

/// Bind the listen address and serve
pub async fn run_server(addr: &str, pipeline: Arc<FramePipeline>) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr).await.map_err(|source| ServerError::Bind {
        addr: addr.to_string(),
        source,
    })?;
    info!("listening on {}", addr);
    serve(listener, pipeline).await;
    Ok(())
}
