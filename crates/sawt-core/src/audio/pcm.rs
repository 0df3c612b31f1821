//! Base64 PCM payload decoding.

use base64::Engine;
use tracing::debug;

use crate::error::{Error, Result};

/// Decode a base64 payload into signed 16-bit little-endian mono samples.
///
/// Accepts an optional `data:` URI prefix and ignores embedded whitespace.
/// Fails if the base64 is malformed or the byte length is odd.
pub fn decode_base64_pcm(data: &str) -> Result<Vec<i16>> {
    let payload = if data.starts_with("data:") {
        data.split_once(',').map(|(_, b64)| b64).unwrap_or(data)
    } else {
        data
    };

    let normalized: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(normalized.as_bytes())
        .map_err(|e| Error::Decode(format!("Base64 decode error: {}", e)))?;

    if bytes.len() % 2 != 0 {
        return Err(Error::Decode(format!(
            "Odd payload length {}: cannot form whole 16-bit samples",
            bytes.len()
        )));
    }

    let samples: Vec<i16> = bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    debug!("Decoded {} PCM samples from {} bytes", samples.len(), bytes.len());

    Ok(samples)
}
