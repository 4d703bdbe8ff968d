//! List command - Show the cursor scheme

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::fs;
use std::time::SystemTime;

use cursor_changer::config::Settings;
use cursor_changer::cursor::{snapshot, CurrentUserRegistry, CursorEntryList};

/// Execute the list command and return formatted output
///
/// Lists the live registry scheme, or the saved snapshot with `from_snapshot`.
pub fn execute(from_snapshot: bool, settings: Settings) -> Result<String> {
    if from_snapshot {
        let path = &settings.snapshot_path;
        let list = CursorEntryList::read(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        let saved = fs::metadata(path).and_then(|m| m.modified()).ok();

        let mut output = format_table(&list);
        output.push_str(&format!(
            "\n\n{} entries in {} (saved {})",
            list.len(),
            path.display(),
            format_time(saved)
        ));
        return Ok(output);
    }

    let registry = CurrentUserRegistry::open(&settings.cursor_subkey)?;
    let list = snapshot::capture(&registry).context("Failed to read the cursor scheme")?;

    let mut output = format_table(&list);
    output.push_str(&format!("\n\n{} entries in HKCU\\{}", list.len(), settings.cursor_subkey));
    Ok(output)
}

/// Render entries as a table
pub fn format_table(list: &CursorEntryList) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new("Name"), Cell::new("ID"), Cell::new("Path")]);

    for entry in list.iter() {
        let id = if entry.id == 0 {
            "-".to_string()
        } else {
            entry.id.to_string()
        };
        let path = if entry.path.is_empty() {
            "(default)"
        } else {
            entry.path.as_str()
        };
        table.add_row(vec![Cell::new(&entry.name), Cell::new(id), Cell::new(path)]);
    }

    table.to_string()
}

fn format_time(time: Option<SystemTime>) -> String {
    time.map(|t| {
        let dt: chrono::DateTime<chrono::Local> = t.into();
        dt.format("%Y-%m-%d %H:%M").to_string()
    })
    .unwrap_or_else(|| "-".to_string())
}
