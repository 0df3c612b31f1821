use console::style;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    /// Generation pipeline or collaborator failure
    Core(sawt_core::Error),
    /// No API key stored yet
    MissingApiKey,
    /// Invalid input
    InvalidInput(String),
    /// Configuration error
    Config(String),
    /// I/O error
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Core(e) => {
                write!(f, "{}", e)
            }
            CliError::MissingApiKey => {
                write!(
                    f,
                    "No API key configured. Run {} first.",
                    style("sawt key set <KEY>").cyan()
                )
            }
            CliError::InvalidInput(msg) => {
                write!(f, "Invalid input: {}", msg)
            }
            CliError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            CliError::Io(e) => {
                write!(f, "I/O error: {}", e)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Core(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sawt_core::Error> for CliError {
    fn from(e: sawt_core::Error) -> Self {
        CliError::Core(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<anyhow::Error> for CliError {
    fn from(e: anyhow::Error) -> Self {
        CliError::Config(e.to_string())
    }
}
