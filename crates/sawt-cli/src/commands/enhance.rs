use std::sync::Arc;

use clap::Args;
use sawt_core::{GeminiClient, Studio};

use crate::commands::read_text;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::style::{spinner, Theme};

#[derive(Debug, Args)]
pub struct EnhanceArgs {
    /// Script text, or "-" to read from stdin
    pub text: String,
}

pub async fn execute(args: EnhanceArgs, theme: &Theme) -> Result<()> {
    let text = read_text(args.text)?;
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput(
            "Enter some text to enhance".to_string(),
        ));
    }

    let config = Config::load(None)?;
    let api_key = config.api_key.ok_or(CliError::MissingApiKey)?;

    let client = Arc::new(GeminiClient::new(api_key)?);
    let studio = Studio::new(client.clone(), client);

    let pb = spinner("Enhancing script...");
    let result = studio.enhance(&text).await;
    pb.finish_and_clear();
    let enhanced = result?;

    theme.success("Enhanced script:");
    println!();
    println!("{}", enhanced);

    Ok(())
}
