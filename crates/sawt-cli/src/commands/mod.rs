pub mod enhance;
pub mod generate;
pub mod key;
pub mod preview;
pub mod voices;

use std::io::Read;

use crate::error::{CliError, Result};

/// Read command text, treating "-" as stdin.
pub fn read_text(text: String) -> Result<String> {
    if text == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(text)
    }
}

/// Resolve a voice id against the catalog, falling back to the configured
/// default and then the first catalog entry.
pub fn resolve_voice(
    requested: Option<String>,
    configured: Option<String>,
) -> Result<&'static sawt_core::Voice> {
    let voice_id = requested
        .or(configured)
        .unwrap_or_else(|| sawt_core::VOICES[0].id.to_string());
    sawt_core::find_voice(&voice_id)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown voice '{}'", voice_id)))
}
