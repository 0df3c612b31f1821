//! Capability interfaces for the external synthesis and enhancement services.

use async_trait::async_trait;

use crate::error::{Result, SynthesisError};

/// One generate action: sanitized script text, target voice, and an optional
/// loop-out duration. Built per call, consumed once.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    pub target_minutes: Option<f64>,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_id: voice_id.into(),
            target_minutes: None,
        }
    }

    pub fn with_target_minutes(mut self, minutes: f64) -> Self {
        self.target_minutes = Some(minutes);
        self
    }
}

/// Text-to-speech collaborator. On success the implementation returns the
/// inline base64 audio payload; every failure is already categorized into a
/// [`SynthesisError`] status class.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
    ) -> std::result::Result<String, SynthesisError>;
}

/// Script-rewriting collaborator behind the enhance action.
#[async_trait]
pub trait ScriptEnhancer: Send + Sync {
    async fn enhance(&self, text: &str) -> Result<String>;
}
