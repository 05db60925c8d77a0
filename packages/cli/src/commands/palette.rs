use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use montage_editor::palette::PALETTE;
use serde_json::json;

#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// Print only the entry labels
    #[arg(long)]
    pub labels: bool,
}

pub fn palette(args: PaletteArgs, config: &Config) -> Result<()> {
    if args.labels {
        for entry in &PALETTE {
            println!("  {} {}", "•".cyan(), entry.label);
        }
        return Ok(());
    }

    let entries: Vec<_> = PALETTE
        .iter()
        .map(|entry| {
            json!({
                "label": entry.label,
                "component": entry.component(),
            })
        })
        .collect();

    println!("{}", config.to_json(&entries)?);
    Ok(())
}
