use super::load_act;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use montage_editor::{ScriptDocument, TargetInfo};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TargetsArgs {
    /// Act document (JSON)
    pub path: PathBuf,

    /// Print targets as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn targets(args: TargetsArgs, config: &Config) -> Result<()> {
    let mut document = ScriptDocument::new(load_act(&args.path)?)?;
    document.set_read_only(config.read_only);

    let targets = document.targets();

    if args.json {
        println!("{}", config.to_json(&targets)?);
        return Ok(());
    }

    println!(
        "{} {} drop targets in {}",
        "🎯".bright_blue(),
        targets.len(),
        args.path.display()
    );
    for target in &targets {
        println!("  {}", describe(target));
    }

    Ok(())
}

fn describe(target: &TargetInfo) -> String {
    let index = format!("[{:>3}]", target.index).dimmed();
    let category = format!("{:<17}", target.category.to_string()).cyan();

    let state = if target.full {
        "occupied".green()
    } else {
        target.label.yellow()
    };

    if target.enabled {
        format!("{} {} {}", index, category, state)
    } else {
        format!("{} {} {} {}", index, category, state, "(read-only)".dimmed())
    }
}
