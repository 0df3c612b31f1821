use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure surface of the synthesis collaborator, one variant per status
/// class. The Display strings are the one-line messages shown to users.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Invalid argument (400): check the script for disallowed characters or stage directions")]
    InvalidArgument,
    #[error("Quota exceeded (429): the service is busy, please try again later")]
    QuotaExceeded,
    #[error("Invalid API key: check your settings")]
    InvalidApiKey,
    #[error("Synthesis returned text instead of audio: \"{0}\"")]
    TextInsteadOfAudio(String),
    #[error("No audio content returned (finish reason: {0})")]
    NoAudio(String),
    #[error("Synthesis request failed: {0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or odd-length audio payload.
    #[error("Audio decode error: {0}")]
    Decode(String),
    /// Extension target is not a positive finite number of minutes.
    #[error("Invalid target duration: {0}")]
    InvalidDuration(String),
    /// Extension input has no samples to repeat.
    #[error("Empty sample buffer: {0}")]
    EmptyBuffer(String),
    /// The lossy encoding engine is missing or failed to initialize.
    #[error("MP3 encoder unavailable: {0}")]
    EncoderUnavailable(String),
    /// The lossy encoding engine rejected a block or the terminal flush.
    #[error("MP3 encode error: {0}")]
    Encode(String),
    /// Script failed the sanitization rules.
    #[error("{0}")]
    InvalidScript(String),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    #[error("Could not enhance script: {0}")]
    Enhancement(String),
}
