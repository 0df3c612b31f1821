//! Block-based MP3 encoding through a stateful lossy encoder.

use tracing::debug;

use crate::audio::AudioContainer;
use crate::error::Result;

/// Samples fed to the lossy encoder per block (the MP3 frame granularity).
pub const MP3_BLOCK_SAMPLES: usize = 1152;
/// Fixed target bitrate for the downloadable artifact, in kbps.
pub const MP3_BITRATE_KBPS: u32 = 128;

/// The lossy encoding engine behind MP3 export.
///
/// Implementations are stateful across calls: the buffer must arrive in one
/// monotonic left-to-right pass, with `flush` called exactly once at the end.
pub trait Mp3EncoderBackend {
    fn encode_buffer(&mut self, samples: &[i16]) -> Result<Vec<u8>>;
    fn flush(&mut self) -> Result<Vec<u8>>;
}

/// Encode samples to an MP3 container with a fresh LAME engine.
#[cfg(feature = "lame")]
pub fn encode_mp3(samples: &[i16]) -> Result<AudioContainer> {
    let mut backend = LameMp3Encoder::new()?;
    encode_mp3_with(&mut backend, samples)
}

/// Without the `lame` feature there is no engine to encode with.
#[cfg(not(feature = "lame"))]
pub fn encode_mp3(_samples: &[i16]) -> Result<AudioContainer> {
    Err(crate::error::Error::EncoderUnavailable(
        "built without the `lame` feature".to_string(),
    ))
}

/// Drive a backend over the whole buffer in 1152-sample blocks, collecting
/// non-empty chunks in emission order, then flush once and append the tail.
pub fn encode_mp3_with(
    backend: &mut dyn Mp3EncoderBackend,
    samples: &[i16],
) -> Result<AudioContainer> {
    let mut bytes = Vec::new();
    for block in samples.chunks(MP3_BLOCK_SAMPLES) {
        let chunk = backend.encode_buffer(block)?;
        if !chunk.is_empty() {
            bytes.extend_from_slice(&chunk);
        }
    }

    let tail = backend.flush()?;
    if !tail.is_empty() {
        bytes.extend_from_slice(&tail);
    }

    debug!(
        "Encoded {} samples into {} MP3 bytes",
        samples.len(),
        bytes.len()
    );

    Ok(AudioContainer::new(bytes, "audio/mp3"))
}

#[cfg(feature = "lame")]
pub use lame_backend::LameMp3Encoder;

#[cfg(feature = "lame")]
mod lame_backend {
    use mp3lame_encoder::{Builder, FlushNoGap, MonoPcm};

    use super::{Mp3EncoderBackend, MP3_BLOCK_SAMPLES};
    use crate::audio::SAMPLE_RATE;
    use crate::error::{Error, Result};

    /// LAME engine fixed at mono, 24 kHz, 128 kbps. One instance per encode
    /// pass; no state is shared across calls.
    pub struct LameMp3Encoder {
        encoder: mp3lame_encoder::Encoder,
    }

    impl LameMp3Encoder {
        pub fn new() -> Result<Self> {
            let mut builder = Builder::new().ok_or_else(|| {
                Error::EncoderUnavailable("failed to allocate a LAME context".to_string())
            })?;
            builder
                .set_num_channels(1)
                .map_err(|e| Error::EncoderUnavailable(format!("channel setup: {:?}", e)))?;
            builder
                .set_sample_rate(SAMPLE_RATE)
                .map_err(|e| Error::EncoderUnavailable(format!("sample rate setup: {:?}", e)))?;
            builder
                .set_brate(mp3lame_encoder::Birtate::Kbps128)
                .map_err(|e| Error::EncoderUnavailable(format!("bitrate setup: {:?}", e)))?;
            builder
                .set_quality(mp3lame_encoder::Quality::Best)
                .map_err(|e| Error::EncoderUnavailable(format!("quality setup: {:?}", e)))?;
            let encoder = builder
                .build()
                .map_err(|e| Error::EncoderUnavailable(format!("LAME init failed: {:?}", e)))?;
            Ok(Self { encoder })
        }
    }

    impl Mp3EncoderBackend for LameMp3Encoder {
        fn encode_buffer(&mut self, samples: &[i16]) -> Result<Vec<u8>> {
            let mut out = Vec::new();
            out.reserve(mp3lame_encoder::max_required_buffer_size(samples.len()));
            let written = self
                .encoder
                .encode(MonoPcm(samples), out.spare_capacity_mut())
                .map_err(|e| Error::Encode(format!("{:?}", e)))?;
            // Safety: `encode` initialized exactly `written` bytes of spare capacity.
            unsafe { out.set_len(written) };
            Ok(out)
        }

        fn flush(&mut self) -> Result<Vec<u8>> {
            let mut out = Vec::new();
            out.reserve(mp3lame_encoder::max_required_buffer_size(MP3_BLOCK_SAMPLES));
            let written = self
                .encoder
                .flush::<FlushNoGap>(out.spare_capacity_mut())
                .map_err(|e| Error::Encode(format!("{:?}", e)))?;
            // Safety: `flush` initialized exactly `written` bytes of spare capacity.
            unsafe { out.set_len(written) };
            Ok(out)
        }
    }
}
