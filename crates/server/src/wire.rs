//! Wire framing
//!
//! Every message in both directions is `u32 length (big-endian)` followed
//! by exactly that many payload bytes. Inbound payloads are encoded
//! images, outbound payloads are encoded audio; the protocol is typed by
//! direction only.

use std::io::ErrorKind;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Upper bound on a declared message length. A camera frame or audio
/// reply is far below this; anything larger is a corrupt or hostile peer.
pub const MAX_MESSAGE_BYTES: u32 = 64 * 1024 * 1024;

/// Wire protocol errors
#[derive(Error, Debug)]
pub enum WireError {
    #[error("peer closed the connection mid-message")]
    Truncated,

    #[error("declared message length {0} exceeds the {MAX_MESSAGE_BYTES} byte limit")]
    Oversized(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read one length-prefixed message.
///
/// Returns `Ok(None)` when the peer closed the connection cleanly before a
/// new message began. A connection closed after the length prefix but
/// before the full payload is a [`WireError::Truncated`] fault.
pub async fn read_message<R>(reader: &mut R) -> Result<Option<Vec<u8>>, WireError>
where
    R: AsyncRead + Unpin,
{
    let length = match reader.read_u32().await {
        Ok(length) => length,
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(WireError::Io(e)),
    };

    if length > MAX_MESSAGE_BYTES {
        return Err(WireError::Oversized(length));
    }

    let mut payload = vec![0u8; length as usize];
    match reader.read_exact(&mut payload).await {
        Ok(_) => Ok(Some(payload)),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(WireError::Truncated),
        Err(e) => Err(WireError::Io(e)),
    }
}

/// Write one length-prefixed message and flush it
pub async fn write_message<W>(writer: &mut W, payload: &[u8]) -> Result<(), WireError>
where
    W: AsyncWrite + Unpin,
{
    writer.write_u32(payload.len() as u32).await?;
    writer.write_all(payload).await?;
    writer.flush().await?;
    Ok(())
}
