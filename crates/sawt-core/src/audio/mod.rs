//! Audio transform pipeline: PCM decode, duration extension, container encoders.

mod extend;
mod mp3;
mod pcm;
mod wav;

pub use extend::extend_to_duration;
#[cfg(feature = "lame")]
pub use mp3::LameMp3Encoder;
pub use mp3::{encode_mp3, encode_mp3_with, Mp3EncoderBackend, MP3_BITRATE_KBPS, MP3_BLOCK_SAMPLES};
pub use pcm::decode_base64_pcm;
pub use wav::encode_wav;

/// Fixed output sample rate for all synthesized audio, in Hz.
pub const SAMPLE_RATE: u32 = 24_000;

/// An encoded audio artifact: immutable bytes plus a MIME tag.
///
/// Produced once by an encoder and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AudioContainer {
    bytes: Vec<u8>,
    mime: &'static str,
}

impl AudioContainer {
    pub(crate) fn new(bytes: Vec<u8>, mime: &'static str) -> Self {
        Self { bytes, mime }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
