//! Sawt core: audio transformation pipeline and generation orchestration for
//! a Moroccan Darija voice studio.
//!
//! Audio flows one way: base64 payload -> PCM samples -> (optionally looped)
//! PCM samples -> container bytes. The synthesis and enhancement services sit
//! behind capability traits so any transport or mock satisfies the contract.

pub mod audio;
pub mod catalog;
pub mod error;
pub mod gemini;
pub mod script;
pub mod studio;
pub mod synthesis;

pub use audio::{AudioContainer, SAMPLE_RATE};
pub use catalog::{find_voice, Voice, VoiceGender, VOICES};
pub use error::{Error, Result, SynthesisError};
pub use gemini::GeminiClient;
pub use script::{sanitize_script, validate_script};
pub use studio::Studio;
pub use synthesis::{ScriptEnhancer, SpeechSynthesizer, SynthesisRequest};
