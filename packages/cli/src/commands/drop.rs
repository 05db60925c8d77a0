use super::load_act;
use crate::config::Config;
use anyhow::{anyhow, bail, Context, Result};
use clap::Args;
use colored::Colorize;
use montage_editor::{palette, DragController, DragOutcome, DragSource, ScriptDocument};
use montage_language::LanguageComponent;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct DropArgs {
    /// Act document (JSON)
    pub path: PathBuf,

    /// Index of the drop target, as listed by `montage targets`
    #[arg(short, long)]
    pub target: usize,

    /// Component to drop, as JSON
    #[arg(short, long, conflicts_with = "palette", required_unless_present = "palette")]
    pub component: Option<String>,

    /// Palette entry to drop, by label
    #[arg(short, long)]
    pub palette: Option<String>,

    /// Write the result back to the document instead of printing it
    #[arg(short, long)]
    pub write: bool,
}

/// Component given on the command line
struct Given(LanguageComponent);

impl DragSource for Given {
    fn snapshot(&self) -> LanguageComponent {
        self.0.clone()
    }
}

pub fn drop_component(args: DropArgs, config: &Config) -> Result<()> {
    let mut document = ScriptDocument::new(load_act(&args.path)?)?;
    document.set_read_only(config.read_only);

    let mut drag = DragController::new();
    match (&args.component, &args.palette) {
        (Some(json), _) => {
            let component = LanguageComponent::from_json(json).context("Invalid component")?;
            drag.start(&Given(component))?;
        }
        (None, Some(label)) => {
            let entry = palette::find(label)
                .ok_or_else(|| anyhow!("No palette entry named {:?}", label))?;
            drag.start(entry)?;
        }
        (None, None) => bail!("Nothing to drop: pass --component or --palette"),
    }

    if let Some(payload) = drag.payload().cloned() {
        let highlighted = document.highlight_for(&payload)?;
        debug!(highlighted, "Targets accepting the payload");
    }

    match document.drop_at(&mut drag, args.target)? {
        DragOutcome::Dropped => {
            info!(index = args.target, version = document.version(), "Dropped component");
        }
        DragOutcome::Cancelled(reason) => {
            bail!("Drop on target {} was cancelled ({:?})", args.target, reason);
        }
    }

    let output = config.to_json(&document.to_model())?;
    if args.write {
        std::fs::write(&args.path, output + "\n")
            .with_context(|| format!("Cannot write {}", args.path.display()))?;
        println!("{} Updated {}", "✓".green(), args.path.display());
    } else {
        println!("{}", output);
    }

    Ok(())
}
