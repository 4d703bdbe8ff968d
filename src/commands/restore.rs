//! Restore command - Put the snapshotted cursor scheme back

use anyhow::{bail, Context, Result};
use owo_colors::OwoColorize;

use super::utils;
use cursor_changer::config::Settings;
use cursor_changer::cursor::CursorEntryList;

/// Execute the restore command
pub fn execute(dry_run: bool, settings: Settings) -> Result<()> {
    let snapshot_path = settings.snapshot_path.clone();

    if !snapshot_path.exists() {
        bail!(
            "No default cursor snapshot found at: {}",
            snapshot_path.display()
        );
    }

    let list = CursorEntryList::read(&snapshot_path)
        .with_context(|| format!("Failed to read: {}", snapshot_path.display()))?;

    println!("Restoring from snapshot: {}", snapshot_path.display());
    println!();

    for entry in list.iter() {
        let path = if entry.path.is_empty() {
            "(default)"
        } else {
            entry.path.as_str()
        };
        println!("  {} = {}", entry.name, path.dimmed());
    }
    println!();

    if dry_run {
        println!("{}", "(DRY-RUN) No changes made.".blue());
        return Ok(());
    }

    let mut changer = utils::open_changer(None, settings)?;
    if !changer.restore_default_cursors() {
        bail!("Failed to restore the default cursors (run with -v for details)");
    }

    println!(
        "{} {} cursor(s)",
        "Restored".green(),
        list.len().to_string().green()
    );

    Ok(())
}
