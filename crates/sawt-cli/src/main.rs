//! Sawt CLI - Moroccan Darija voice studio in the terminal.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod style;

use style::Theme;

#[derive(Debug, Parser)]
#[command(
    name = "sawt",
    about = "Generate Moroccan Darija speech from a text script",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a downloadable MP3 from a script
    Generate(commands::generate::GenerateArgs),
    /// Synthesize a short WAV preview of a voice
    Preview(commands::preview::PreviewArgs),
    /// List the prebuilt Darija voices
    Voices(commands::voices::VoicesArgs),
    /// Rewrite a script for a more natural delivery
    Enhance(commands::enhance::EnhanceArgs),
    /// Manage the stored API key
    Key(commands::key::KeyArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sawt=warn,sawt_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let theme = if cli.no_color {
        Theme::no_color()
    } else {
        Theme::default()
    };

    let result = match cli.command {
        Command::Generate(args) => commands::generate::execute(args, &theme).await,
        Command::Preview(args) => commands::preview::execute(args, &theme).await,
        Command::Voices(args) => commands::voices::execute(args),
        Command::Enhance(args) => commands::enhance::execute(args, &theme).await,
        Command::Key(args) => commands::key::execute(args, &theme),
    };

    if let Err(e) = result {
        theme.error(&e.to_string());
        std::process::exit(1);
    }
}
