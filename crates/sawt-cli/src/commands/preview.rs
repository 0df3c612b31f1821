use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use sawt_core::{GeminiClient, Studio};

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::style::{spinner, Theme};

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Voice identifier (see `sawt voices`)
    pub voice: String,

    /// Output file path (defaults to sawt_preview_<voice>.wav)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub async fn execute(args: PreviewArgs, theme: &Theme) -> Result<()> {
    let voice = sawt_core::find_voice(&args.voice)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown voice '{}'", args.voice)))?;

    let config = Config::load(None)?;
    let api_key = config.api_key.ok_or(CliError::MissingApiKey)?;

    let client = Arc::new(GeminiClient::new(api_key)?);
    let studio = Studio::new(client.clone(), client);

    // One preview at a time; the spinner spans the whole in-flight call.
    let pb = spinner(&format!("Previewing '{}'...", voice.name));
    let result = studio.preview(voice).await;
    pb.finish_and_clear();
    let container = result?;

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("sawt_preview_{}.wav", voice.id.to_lowercase())));
    std::fs::write(&output_path, container.bytes())?;

    theme.success(&format!("Preview saved to: {}", output_path.display()));
    theme.info("Play it with your system audio player.");

    Ok(())
}
