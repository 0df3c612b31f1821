//! Generation orchestrator: validate, synthesize, decode, extend, encode.

use std::sync::Arc;

use tracing::{debug, info};

use crate::audio::{
    decode_base64_pcm, encode_mp3, encode_wav, extend_to_duration, AudioContainer,
};
use crate::catalog::Voice;
use crate::error::{Error, Result};
use crate::script::{sanitize_script, validate_script};
use crate::synthesis::{ScriptEnhancer, SpeechSynthesizer, SynthesisRequest};

/// Sequences the audio pipeline around the external collaborators.
///
/// Each call is one logical async operation with a single suspension point,
/// the synthesis call; decode, extension, and encoding run synchronously once
/// the response arrives. Failures are terminal: nothing is retried and no
/// partial container is returned. Callers keep at most one generation and one
/// preview in flight per user action.
pub struct Studio {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    enhancer: Arc<dyn ScriptEnhancer>,
}

impl Studio {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, enhancer: Arc<dyn ScriptEnhancer>) -> Self {
        Self {
            synthesizer,
            enhancer,
        }
    }

    /// Produce the downloadable MP3 for a synthesis request.
    pub async fn generate(&self, request: SynthesisRequest) -> Result<AudioContainer> {
        if let Some(message) = validate_script(&request.text) {
            return Err(Error::InvalidScript(message));
        }
        let script = sanitize_script(&request.text);

        let payload = self
            .synthesizer
            .synthesize(&script, &request.voice_id)
            .await?;
        let mut samples = decode_base64_pcm(&payload)?;
        info!(
            "Synthesized {} samples for voice '{}'",
            samples.len(),
            request.voice_id
        );

        match request.target_minutes {
            Some(minutes) if minutes.is_finite() && minutes > 0.0 => {
                samples = extend_to_duration(&samples, minutes)?;
            }
            Some(minutes) => {
                debug!("Ignoring non-positive target duration {}", minutes);
            }
            None => {}
        }

        encode_mp3(&samples)
    }

    /// Quick WAV preview of a catalog voice. Previews are never extended.
    pub async fn preview(&self, voice: &Voice) -> Result<AudioContainer> {
        let line = sanitize_script(&voice.preview_line());
        let payload = self.synthesizer.synthesize(&line, voice.id).await?;
        let samples = decode_base64_pcm(&payload)?;
        Ok(encode_wav(&samples))
    }

    /// Rewrite a raw script through the enhancement collaborator.
    pub async fn enhance(&self, text: &str) -> Result<String> {
        self.enhancer.enhance(text).await
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use base64::Engine;

    use super::*;
    use crate::catalog::find_voice;
    use crate::error::SynthesisError;
    use crate::SAMPLE_RATE;

    fn pcm_base64(samples: &[i16]) -> String {
        let mut bytes = Vec::with_capacity(samples.len() * 2);
        for sample in samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        base64::engine::general_purpose::STANDARD.encode(bytes)
    }

    /// Replays a fixed PCM payload and records what it was asked to speak.
    struct FixedSynthesizer {
        payload: String,
        calls: AtomicUsize,
        last_text: Mutex<String>,
    }

    impl FixedSynthesizer {
        fn with_samples(samples: &[i16]) -> Self {
            Self {
                payload: pcm_base64(samples),
                calls: AtomicUsize::new(0),
                last_text: Mutex::new(String::new()),
            }
        }
    }

    #[async_trait]
    impl SpeechSynthesizer for FixedSynthesizer {
        async fn synthesize(
            &self,
            text: &str,
            _voice_id: &str,
        ) -> std::result::Result<String, SynthesisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_text.lock().expect("lock") = text.to_string();
            Ok(self.payload.clone())
        }
    }

    struct FailingSynthesizer(fn() -> SynthesisError);

    #[async_trait]
    impl SpeechSynthesizer for FailingSynthesizer {
        async fn synthesize(
            &self,
            _text: &str,
            _voice_id: &str,
        ) -> std::result::Result<String, SynthesisError> {
            Err((self.0)())
        }
    }

    struct EchoEnhancer;

    #[async_trait]
    impl ScriptEnhancer for EchoEnhancer {
        async fn enhance(&self, text: &str) -> Result<String> {
            Ok(format!("{} Yak!", text))
        }
    }

    fn studio_with(synthesizer: Arc<dyn SpeechSynthesizer>) -> Studio {
        Studio::new(synthesizer, Arc::new(EchoEnhancer))
    }

    #[tokio::test]
    async fn invalid_script_fails_before_any_synthesis_call() {
        let synthesizer = Arc::new(FixedSynthesizer::with_samples(&[0; 16]));
        let studio = studio_with(synthesizer.clone());

        let err = studio
            .generate(SynthesisRequest::new("Hello", "Puck"))
            .await
            .expect_err("unpunctuated script should fail");
        assert!(matches!(err, Error::InvalidScript(_)));
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn sanitized_text_is_what_gets_synthesized() {
        let synthesizer = Arc::new(FixedSynthesizer::with_samples(&[5; 256]));
        let studio = studio_with(synthesizer.clone());

        // The encode step needs the lame feature; the assertion here only
        // cares about what reached the synthesizer.
        let _ = studio
            .generate(SynthesisRequest::new("[laughs]  Salam!", "Puck"))
            .await;
        assert_eq!(*synthesizer.last_text.lock().expect("lock"), "Salam!");
        assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 1);
    }

    #[cfg(feature = "lame")]
    #[tokio::test]
    async fn two_second_clip_with_six_second_target_yields_an_mp3() {
        let samples: Vec<i16> = (0..48_000).map(|i| (i % 255) as i16).collect();
        let synthesizer = Arc::new(FixedSynthesizer::with_samples(&samples));
        let studio = studio_with(synthesizer);

        let plain = studio
            .generate(SynthesisRequest::new("Salam, kif dayer?", "Charon"))
            .await
            .expect("generate should succeed");

        let request = SynthesisRequest::new("Salam, kif dayer?", "Charon").with_target_minutes(0.1);
        let container = studio.generate(request).await.expect("generate should succeed");
        assert_eq!(container.mime(), "audio/mp3");
        assert!(!container.is_empty());

        // The 2.0s clip loops to 144_000 samples (6.0s); at a constant
        // bitrate the extended stream must carry roughly three times the
        // bytes of the unextended one.
        assert!(
            container.len() > plain.len() * 2,
            "extended {} bytes vs plain {}",
            container.len(),
            plain.len()
        );
    }

    #[cfg(feature = "lame")]
    #[tokio::test]
    async fn invalid_supplied_duration_is_skipped_not_fatal() {
        let synthesizer = Arc::new(FixedSynthesizer::with_samples(&[9; 2_048]));
        let studio = studio_with(synthesizer);

        let request = SynthesisRequest::new("Salam.", "Puck").with_target_minutes(f64::NAN);
        let container = studio.generate(request).await.expect("generate should succeed");
        assert_eq!(container.mime(), "audio/mp3");
    }

    #[tokio::test]
    async fn preview_wraps_the_decoded_samples_in_a_wav_container() {
        let samples: Vec<i16> = (0..1_024).map(|i| (i as i16).wrapping_mul(31)).collect();
        let synthesizer = Arc::new(FixedSynthesizer::with_samples(&samples));
        let studio = studio_with(synthesizer.clone());

        let voice = find_voice("Kore").expect("Kore should exist");
        let container = studio.preview(voice).await.expect("preview should succeed");
        assert_eq!(container.mime(), "audio/wav");
        assert_eq!(
            *synthesizer.last_text.lock().expect("lock"),
            "Salam, ana smiti Khadija."
        );

        let mut reader =
            hound::WavReader::new(Cursor::new(container.bytes().to_vec())).expect("parse wav");
        assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
        assert_eq!(reader.spec().channels, 1);
        let decoded: Vec<i16> = reader.samples::<i16>().map(|s| s.expect("sample")).collect();
        assert_eq!(decoded, samples);
    }

    #[tokio::test]
    async fn synthesis_failures_surface_with_their_category_message() {
        let studio = studio_with(Arc::new(FailingSynthesizer(|| SynthesisError::QuotaExceeded)));
        let err = studio
            .generate(SynthesisRequest::new("Salam.", "Puck"))
            .await
            .expect_err("quota failure should propagate");
        assert!(err.to_string().contains("Quota exceeded (429)"));

        let studio = studio_with(Arc::new(FailingSynthesizer(|| {
            SynthesisError::TextInsteadOfAudio("cannot comply".to_string())
        })));
        let err = studio
            .generate(SynthesisRequest::new("Salam.", "Puck"))
            .await
            .expect_err("text response should propagate");
        assert!(err.to_string().contains("cannot comply"));
    }

    #[tokio::test]
    async fn malformed_payload_from_the_service_is_a_decode_error() {
        struct GarbageSynthesizer;

        #[async_trait]
        impl SpeechSynthesizer for GarbageSynthesizer {
            async fn synthesize(
                &self,
                _text: &str,
                _voice_id: &str,
            ) -> std::result::Result<String, SynthesisError> {
                Ok("!!not base64!!".to_string())
            }
        }

        let studio = studio_with(Arc::new(GarbageSynthesizer));
        let err = studio
            .generate(SynthesisRequest::new("Salam.", "Puck"))
            .await
            .expect_err("garbage payload should fail");
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn enhance_delegates_to_the_enhancer() {
        let studio = studio_with(Arc::new(FixedSynthesizer::with_samples(&[0; 4])));
        let enhanced = studio.enhance("Salam.").await.expect("enhance should succeed");
        assert_eq!(enhanced, "Salam. Yak!");
    }
}
