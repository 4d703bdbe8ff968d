//! Snapshot command - Save the current cursor scheme as the default

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use cursor_changer::config::Settings;
use cursor_changer::cursor::{snapshot, CurrentUserRegistry};

/// Execute the snapshot command
///
/// Without `force`, an existing snapshot is kept so the scheme saved before
/// the first replacement is never lost.
pub fn execute(force: bool, settings: Settings) -> Result<()> {
    let path = &settings.snapshot_path;

    if path.exists() && !force {
        println!("Snapshot already exists: {}", path.display());
        println!("Run with --force to overwrite it with the current scheme.");
        return Ok(());
    }

    let registry = CurrentUserRegistry::open(&settings.cursor_subkey)?;
    let list = snapshot::take(&registry, path)
        .with_context(|| format!("Failed to save snapshot: {}", path.display()))?;

    println!(
        "{} {} ({} entries)",
        "Saved:".green(),
        path.display(),
        list.len()
    );

    Ok(())
}
