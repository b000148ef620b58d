//! Frame type and payload decoding

use thiserror::Error;
use tracing::debug;

/// Frame decoding errors
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("empty frame payload")]
    EmptyPayload,

    #[error("payload is not a decodable image: {0}")]
    Malformed(#[from] image::ImageError),
}

/// Decoded RGB camera frame
#[derive(Debug, Clone)]
pub struct CameraFrame {
    /// RGB pixel data (width * height * 3)
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Sequence number within the session
    pub sequence: u64,
}

impl CameraFrame {
    /// Create a new frame from raw RGB data
    pub fn new(data: Vec<u8>, width: u32, height: u32, sequence: u64) -> Self {
        Self {
            data,
            width,
            height,
            sequence,
        }
    }

    /// Get pixel at (x, y)
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 3) as usize;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }
}

/// Decode an encoded image payload (JPEG or PNG) into an RGB frame.
///
/// The format is sniffed from the payload bytes, matching what camera
/// clients actually send over the wire.
pub fn decode_frame(payload: &[u8], sequence: u64) -> Result<CameraFrame, DecodeError> {
    if payload.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }

    let img = image::load_from_memory(payload)?;
    let rgb = img.to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());
    debug!("decoded frame {}: {}x{}", sequence, width, height);

    Ok(CameraFrame {
        data: rgb.into_raw(),
        width,
        height,
        sequence,
    })
}
