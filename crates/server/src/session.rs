//! Per-connection stream session

use crate::pipeline::FramePipeline;
use crate::wire::{read_message, write_message, WireError};
use camera_frame::decode_frame;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, error, info, warn};

/// Session processing state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    AwaitingFrame,
    Decoding,
    Processing,
    Encoding,
    Closed,
}

/// One client's streaming connection.
///
/// Frames alternate strictly with replies: receive, process, respond,
/// repeat. The session holds no cross-frame state beyond the sequence
/// counter; each frame is classified independently.
pub struct StreamSession<S> {
    stream: S,
    peer: String,
    pipeline: Arc<FramePipeline>,
    state: SessionState,
    sequence: u64,
}

impl<S> StreamSession<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    pub fn new(stream: S, peer: String, pipeline: Arc<FramePipeline>) -> Self {
        Self {
            stream,
            peer,
            pipeline,
            state: SessionState::AwaitingFrame,
            sequence: 0,
        }
    }

    /// Drive the session until the peer disconnects or the transport
    /// faults. Decode faults skip the frame; only transport faults close
    /// the session.
    pub async fn run(mut self) {
        info!("session started for {}", self.peer);

        while self.state != SessionState::Closed {
            self.state = SessionState::AwaitingFrame;
            let payload = match read_message(&mut self.stream).await {
                Ok(Some(payload)) => payload,
                Ok(None) => {
                    info!("{} disconnected", self.peer);
                    self.state = SessionState::Closed;
                    continue;
                }
                Err(WireError::Truncated) => {
                    warn!("{} aborted a frame mid-message", self.peer);
                    self.state = SessionState::Closed;
                    continue;
                }
                Err(e) => {
                    error!("transport fault for {}: {}", self.peer, e);
                    self.state = SessionState::Closed;
                    continue;
                }
            };
            self.sequence += 1;

            self.state = SessionState::Decoding;
            let frame = match decode_frame(&payload, self.sequence) {
                Ok(frame) => frame,
                Err(e) => {
                    // Skip the frame, keep the session open for the next one
                    warn!(
                        "undecodable frame {} from {}: {}",
                        self.sequence, self.peer, e
                    );
                    continue;
                }
            };

            self.state = SessionState::Processing;
            let audio = self.pipeline.process_frame(&frame).await;

            self.state = SessionState::Encoding;
            if let Err(e) = write_message(&mut self.stream, &audio).await {
                error!("failed to write reply to {}: {}", self.peer, e);
                self.state = SessionState::Closed;
                continue;
            }
            debug!(
                "frame {} answered with {} audio bytes",
                self.sequence,
                audio.len()
            );
        }

        info!("session closed for {} after {} frames", self.peer, self.sequence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire;
    use alerting::{HazardClassifier, HazardConfig};
    use detection::MockDetector;
    use dispatch::{shared_speech, AlertDispatcher};
    use estimation::CameraGeometry;
    use haptics::{HapticClient, HapticsConfig};
    use speech::MockSynthesizer;
    use std::io::Cursor;
    use tokio::io::AsyncWriteExt;

    fn test_pipeline() -> Arc<FramePipeline> {
        let haptics = HapticClient::new(HapticsConfig {
            on_url: "http://127.0.0.1:1/motor/on".to_string(),
            off_url: "http://127.0.0.1:1/motor/off".to_string(),
            request_timeout_s: 1,
        })
        .unwrap();
        Arc::new(FramePipeline::new(
            Arc::new(MockDetector::empty()),
            HazardClassifier::new(HazardConfig::default(), CameraGeometry::default()),
            AlertDispatcher::new(shared_speech(MockSynthesizer::new()), haptics),
        ))
    }

    fn test_jpeg() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(32, 24, image::Rgb([10, 20, 30]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Jpeg)
            .unwrap();
        buf
    }

    #[tokio::test]
    async fn test_frame_gets_audio_reply() {
        let (mut client, server_io) = tokio::io::duplex(256 * 1024);
        let session = StreamSession::new(server_io, "test".to_string(), test_pipeline());
        let task = tokio::spawn(session.run());

        wire::write_message(&mut client, &test_jpeg()).await.unwrap();
        let reply = wire::read_message(&mut client).await.unwrap().unwrap();
        assert_eq!(reply, b"All clear ahead");

        drop(client);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_replies_arrive_in_frame_order() {
        let (mut client, server_io) = tokio::io::duplex(256 * 1024);
        let session = StreamSession::new(server_io, "test".to_string(), test_pipeline());
        let task = tokio::spawn(session.run());

        for _ in 0..3 {
            wire::write_message(&mut client, &test_jpeg()).await.unwrap();
            let reply = wire::read_message(&mut client).await.unwrap().unwrap();
            assert_eq!(reply, b"All clear ahead");
        }

        drop(client);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_undecodable_frame_is_skipped_not_fatal() {
        let (mut client, server_io) = tokio::io::duplex(256 * 1024);
        let session = StreamSession::new(server_io, "test".to_string(), test_pipeline());
        let task = tokio::spawn(session.run());

        // Garbage payload: no reply, session stays open
        wire::write_message(&mut client, b"not an image").await.unwrap();
        // The next valid frame is still answered
        wire::write_message(&mut client, &test_jpeg()).await.unwrap();
        let reply = wire::read_message(&mut client).await.unwrap().unwrap();
        assert_eq!(reply, b"All clear ahead");

        drop(client);
        task.await.unwrap();
    }

    #[tokio::test]
    async fn test_truncated_frame_terminates_session() {
        let (mut client, server_io) = tokio::io::duplex(64 * 1024);
        let session = StreamSession::new(server_io, "test".to_string(), test_pipeline());
        let task = tokio::spawn(session.run());

        // Declare 100 bytes, send 10, then close the connection
        client.write_u32(100).await.unwrap();
        client.write_all(&[0u8; 10]).await.unwrap();
        drop(client);

        // The session must terminate rather than hang waiting for bytes
        tokio::time::timeout(std::time::Duration::from_secs(1), task)
            .await
            .expect("session must close on a truncated frame")
            .unwrap();
    }

    #[tokio::test]
    async fn test_clean_disconnect_ends_session() {
        let (client, server_io) = tokio::io::duplex(1024);
        let session = StreamSession::new(server_io, "test".to_string(), test_pipeline());
        let task = tokio::spawn(session.run());

        drop(client);
        tokio::time::timeout(std::time::Duration::from_secs(1), task)
            .await
            .unwrap()
            .unwrap();
    }
}
