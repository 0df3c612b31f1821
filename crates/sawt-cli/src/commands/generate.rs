use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use sawt_core::{GeminiClient, Studio, SynthesisRequest};

use crate::commands::{read_text, resolve_voice};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::style::{spinner, Theme};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Script text, or "-" to read from stdin
    pub text: String,

    /// Voice identifier (see `sawt voices`)
    #[arg(short, long)]
    pub voice: Option<String>,

    /// Loop the audio out to this many minutes
    #[arg(short, long)]
    pub duration: Option<f64>,

    /// Output file path (defaults to sawt_<timestamp>.mp3)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub async fn execute(args: GenerateArgs, theme: &Theme) -> Result<()> {
    let text = read_text(args.text)?;
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput("Script cannot be empty".to_string()));
    }

    let config = Config::load(None)?;
    let api_key = config.api_key.clone().ok_or(CliError::MissingApiKey)?;
    let voice = resolve_voice(args.voice, config.defaults.voice)?;

    theme.step(1, 2, &format!("Generating speech with '{}'...", voice.name));

    let client = Arc::new(GeminiClient::new(api_key)?);
    let studio = Studio::new(client.clone(), client);

    let mut request = SynthesisRequest::new(text, voice.id);
    if let Some(minutes) = args.duration {
        request = request.with_target_minutes(minutes);
    }

    let pb = spinner("Waiting for synthesis...");
    let result = studio.generate(request).await;
    pb.finish_and_clear();
    let container = result?;

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("sawt_{}.mp3", chrono::Utc::now().timestamp())));
    std::fs::write(&output_path, container.bytes())?;

    theme.step(
        2,
        2,
        &format!("Encoded {} bytes ({})", container.len(), container.mime()),
    );
    theme.success(&format!("Audio saved to: {}", output_path.display()));

    Ok(())
}
