use clap::Args;
use comfy_table::{Cell, Color, Table};
use console::style;
use sawt_core::{VoiceGender, VOICES};

use crate::error::{CliError, Result};

#[derive(Debug, Args)]
pub struct VoicesArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: VoicesArgs) -> Result<()> {
    if args.json {
        let rendered = serde_json::to_string_pretty(VOICES)
            .map_err(|e| CliError::InvalidInput(format!("serialization failed: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Voice", "Name", "Gender", "Style", "Description"]);
    for voice in VOICES {
        table.add_row(vec![
            Cell::new(voice.id).fg(Color::Cyan),
            Cell::new(voice.name),
            gender_cell(voice.gender),
            Cell::new(voice.style),
            Cell::new(voice.description),
        ]);
    }

    println!("{}", table);
    println!();
    println!(
        "{}: Use {} to hear a sample",
        style("Tip").yellow().bold(),
        style("sawt preview <voice>").cyan()
    );

    Ok(())
}

fn gender_cell(gender: VoiceGender) -> Cell {
    match gender {
        VoiceGender::Male => Cell::new("Male").fg(Color::Blue),
        VoiceGender::Female => Cell::new("Female").fg(Color::Magenta),
    }
}
