//! Apply command - Replace system cursors with a cursor file

use anyhow::{bail, Result};
use clap::ValueEnum;
use owo_colors::OwoColorize;

use super::utils;
use cursor_changer::config::Settings;
use cursor_changer::cursor::{CurrentUserRegistry, CursorRegistry, SystemCursor};

/// Which cursors to replace
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SlotSet {
    /// Every system cursor
    All,
    /// Normal select, text select and link select
    Common,
    /// Link select (hand) only
    Link,
}

impl SlotSet {
    pub fn slots(self) -> &'static [SystemCursor] {
        match self {
            Self::All => &SystemCursor::ALL,
            Self::Common => &SystemCursor::COMMON,
            Self::Link => &SystemCursor::LINK,
        }
    }
}

/// Execute the apply command
pub fn execute(cursor_file: &str, set: SlotSet, dry_run: bool, settings: Settings) -> Result<()> {
    let cursor_path = utils::resolve_cursor_file(cursor_file)?;

    println!("Cursor file: {}", cursor_path.display());
    println!();

    if dry_run {
        let registry = CurrentUserRegistry::open(&settings.cursor_subkey)?;
        for slot in set.slots() {
            let current = registry.get_value(slot.name())?.unwrap_or_default();
            println!(
                "  {} {}: {} -> {}",
                "Would set".yellow(),
                slot,
                if current.is_empty() { "(default)" } else { current.as_str() },
                cursor_path.display()
            );
        }
        println!("\n{}", "(DRY-RUN) No changes made.".blue());
        return Ok(());
    }

    let mut changer = utils::open_changer(Some(cursor_path), settings)?;
    match changer.snapshot_path() {
        Some(path) => println!("Default cursors saved at: {}", path.display().dimmed()),
        None => println!(
            "{} could not save the default cursors; restore will not be available",
            "Warning:".yellow()
        ),
    }

    let ok = match set {
        SlotSet::All => changer.replace_all_cursors(),
        SlotSet::Common => changer.replace_common_cursors(),
        SlotSet::Link => changer.replace_link_select_cursor(),
    };

    if !ok {
        bail!("Failed to replace one or more cursors (run with -v for details)");
    }

    for slot in set.slots() {
        println!("{} {}", "Replaced:".green(), slot);
    }

    Ok(())
}
