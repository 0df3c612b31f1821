//! RIFF/WAVE container encoding, used for quick voice previews.

use crate::audio::{AudioContainer, SAMPLE_RATE};

const NUM_CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const HEADER_LEN: usize = 44;

/// Wrap samples in a canonical 44-byte RIFF/WAVE header followed by the raw
/// little-endian sample bytes. A zero-length buffer yields a valid header
/// with a zero-length data chunk.
pub fn encode_wav(samples: &[i16]) -> AudioContainer {
    let data_len = (samples.len() * 2) as u32;
    let byte_rate = SAMPLE_RATE * (NUM_CHANNELS * BITS_PER_SAMPLE / 8) as u32;
    let block_align = NUM_CHANNELS * BITS_PER_SAMPLE / 8;

    let mut bytes = Vec::with_capacity(HEADER_LEN + samples.len() * 2);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk length
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM sample format
    bytes.extend_from_slice(&NUM_CHANNELS.to_le_bytes());
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    AudioContainer::new(bytes, "audio/wav")
}
