//! Gemini Generative Language API client for synthesis and enhancement.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result, SynthesisError};
use crate::synthesis::{ScriptEnhancer, SpeechSynthesizer};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
const TEXT_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 300;

const ENHANCE_PROMPT: &str = r#"You are an expert Moroccan Darija scriptwriter and voice coach.
Rewrite the following text to make it sound incredibly realistic, emotional, and human for a Text-to-Speech engine.

Rules:
1. Keep the language in Moroccan Darija (Arabic or Latin script, matching the input).
2. Add natural filler words where appropriate (e.g., "ze3ma", "yak", "euh", "ra").
3. CRITICAL: Do NOT use brackets [] or parentheses () for directions. The system removes them.
4. INSTEAD, write the sounds phonetically:
   - For laughter, write "Hahaha!" or "Hehehe".
   - For breaths/sighs, write "Ah..." or "Ouff...".
   - For hesitation, use "Hmm..." or "...".
5. Use punctuation (..., !, ?, ?!) aggressively to control pacing and intonation.
6. Make the text convey specific emotions (excitement, sarcasm, warmth) through word choice and punctuation.

Input Text: "{input}"

Output only the enhanced text, nothing else."#;

/// HTTP client implementing both collaborator capabilities against the
/// Generative Language API. One instance may serve many sequential calls.
#[derive(Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Synthesis(SynthesisError::InvalidApiKey));
        }

        let http = reqwest::Client::builder()
            .user_agent(format!("sawt/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                Error::Synthesis(SynthesisError::Other(format!(
                    "failed to initialize HTTP client: {}",
                    e
                )))
            })?;

        Ok(Self { http, api_key })
    }

    async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> std::result::Result<GenerateContentResponse, SynthesisError> {
        let url = format!("{}/{}:generateContent", API_BASE, model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| SynthesisError::Other(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(map_status(status, message));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| SynthesisError::Other(format!("unreadable response: {}", e)))
    }
}

/// Categorize an upstream failure. The HTTP status class is the structured
/// signal; message inspection is only the fallback for auth failures that
/// arrive with an unexpected status.
fn map_status(status: reqwest::StatusCode, message: String) -> SynthesisError {
    debug!("Synthesis API error {}: {}", status, message);
    match status.as_u16() {
        400 => SynthesisError::InvalidArgument,
        429 => SynthesisError::QuotaExceeded,
        401 | 403 => SynthesisError::InvalidApiKey,
        _ if message.contains("API key") => SynthesisError::InvalidApiKey,
        _ if message.is_empty() => SynthesisError::Other(status.to_string()),
        _ => SynthesisError::Other(message),
    }
}

#[async_trait]
impl SpeechSynthesizer for GeminiClient {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
    ) -> std::result::Result<String, SynthesisError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(text.to_string()),
                    inline_data: None,
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: vec!["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: voice_id.to_string(),
                        },
                    },
                },
            }),
        };

        let response = self.generate_content(TTS_MODEL, &body).await?;
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| SynthesisError::Other("no candidates returned".to_string()))?;

        let finish_reason = candidate
            .finish_reason
            .unwrap_or_else(|| "Unknown".to_string());
        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();

        // Audio part first, then a text part (refusal or explanation), then
        // the generic no-audio fallback.
        if let Some(data) = parts
            .iter()
            .find_map(|p| p.inline_data.as_ref().map(|d| d.data.clone()))
        {
            return Ok(data);
        }
        if let Some(text) = parts.into_iter().find_map(|p| p.text) {
            return Err(SynthesisError::TextInsteadOfAudio(text));
        }
        Err(SynthesisError::NoAudio(finish_reason))
    }
}

#[async_trait]
impl ScriptEnhancer for GeminiClient {
    async fn enhance(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::Enhancement(
                "there is no text to enhance".to_string(),
            ));
        }

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(ENHANCE_PROMPT.replace("{input}", text)),
                    inline_data: None,
                }],
            }],
            generation_config: None,
        };

        let response = self
            .generate_content(TEXT_MODEL, &body)
            .await
            .map_err(|e| Error::Enhancement(format!("check your API key or try again ({})", e)))?;

        let enhanced = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| Error::Enhancement("the service returned no text".to_string()))?;

        Ok(enhanced.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<&'static str>,
    speech_config: SpeechConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig {
    voice_config: VoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig {
    prebuilt_voice_config: PrebuiltVoiceConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig {
    voice_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}
