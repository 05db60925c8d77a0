pub mod check;
pub mod drop;
pub mod palette;
pub mod targets;

pub use check::{check, CheckArgs};
pub use drop::{drop_component, DropArgs};
pub use palette::{palette, PaletteArgs};
pub use targets::{targets, TargetsArgs};

use anyhow::{Context, Result};
use montage_language::Act;
use std::path::Path;

/// Read and parse an act document
pub fn load_act(path: &Path) -> Result<Act> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;

    Act::from_json(&source).with_context(|| format!("{} is not an act document", path.display()))
}
