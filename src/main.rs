//! cursor-changer: replace Windows system cursors and restore the originals

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;

use cursor_changer::config::Settings;

mod commands;

use commands::apply::SlotSet;

#[derive(Parser)]
#[command(name = "cursor-changer")]
#[command(about = "Replace Windows system cursors live", long_about = None)]
#[command(version)]
struct Cli {
    /// Snapshot file to use instead of %APPDATA%\WinCursorChanger\defaultCursors\defaultCursors.json
    #[arg(long, global = true)]
    snapshot_file: Option<PathBuf>,

    /// Log registry and cursor calls
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace system cursors with a cursor file (.cur or .ani)
    Apply {
        /// Cursor file; bare names are also looked up in %SystemRoot%\Cursors
        cursor_file: String,

        /// Which cursors to replace
        #[arg(long, short, value_enum, default_value = "all")]
        set: SlotSet,

        /// Show what would be done without making changes
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Restore the cursors saved before the first replacement
    Restore {
        /// Show what would be done without making changes
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Save the current cursor scheme as the default to restore
    Snapshot {
        /// Overwrite an existing snapshot
        #[arg(long)]
        force: bool,
    },

    /// Show the current cursor scheme
    List {
        /// Show the saved snapshot instead of the registry
        #[arg(long)]
        snapshot: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let settings = match cli.snapshot_file {
        Some(path) => Settings::with_snapshot_path(path),
        None => Settings::load()?,
    };

    match cli.command {
        Commands::Apply {
            cursor_file,
            set,
            dry_run,
        } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            commands::apply::execute(&cursor_file, set, dry_run, settings)?;
        }

        Commands::Restore { dry_run } => {
            if dry_run {
                println!("{}", "(DRY-RUN MODE - no changes will be made)".blue());
            }
            commands::restore::execute(dry_run, settings)?;
        }

        Commands::Snapshot { force } => {
            commands::snapshot::execute(force, settings)?;
        }

        Commands::List { snapshot } => {
            let output = commands::list::execute(snapshot, settings)?;
            println!("{}", output);
        }
    }

    Ok(())
}
