use super::load_act;
use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use montage_editor::ScriptDocument;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Act documents (JSON) to check
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Build the editable tree for each document and make sure deriving it back
/// yields the same act
pub fn check(args: CheckArgs, _config: &Config) -> Result<()> {
    let mut failures = 0;

    for path in &args.paths {
        match check_file(path) {
            Ok(targets) => {
                println!(
                    "  {} {} ({} drop targets)",
                    "✓".green(),
                    path.display(),
                    targets
                );
            }
            Err(e) => {
                failures += 1;
                eprintln!("  {} {} - {}", "✗".red(), path.display(), e.to_string().red());
            }
        }
    }

    println!();
    if failures > 0 {
        bail!("{} of {} documents failed", failures, args.paths.len());
    }

    println!("{} Checked {} documents", "✅".green(), args.paths.len());
    Ok(())
}

fn check_file(path: &Path) -> Result<usize> {
    let act = load_act(path)?;
    let mut document = ScriptDocument::new(act.clone())?;

    if document.to_model() != act {
        bail!("document does not survive the editor round trip");
    }

    let targets = document.targets().len();
    info!(path = %path.display(), scenes = act.scenes.len(), targets, "Checked document");
    Ok(targets)
}
