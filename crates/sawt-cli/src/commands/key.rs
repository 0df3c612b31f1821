use clap::{Args, Subcommand};

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::style::Theme;

#[derive(Debug, Args)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub action: KeyAction,
}

#[derive(Debug, Subcommand)]
pub enum KeyAction {
    /// Store the API key used for synthesis and enhancement calls
    Set { key: String },
    /// Show whether a key is stored (masked)
    Show,
    /// Remove the stored key
    Clear,
}

pub fn execute(args: KeyArgs, theme: &Theme) -> Result<()> {
    let mut config = Config::load(None)?;

    match args.action {
        KeyAction::Set { key } => {
            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::InvalidInput("API key cannot be empty".to_string()));
            }
            config.api_key = Some(key.to_string());
            config.save(None)?;
            theme.success("API key saved.");
        }
        KeyAction::Show => match &config.api_key {
            Some(key) => theme.info(&format!("API key configured ({})", mask(key))),
            None => theme.warning("No API key stored."),
        },
        KeyAction::Clear => {
            config.api_key = None;
            config.save(None)?;
            theme.success("API key removed.");
        }
    }

    Ok(())
}

fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}
