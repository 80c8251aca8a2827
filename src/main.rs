//! Textpad - A small full-screen terminal text editor.
//!
//! # Usage
//!
//! ```bash
//! textpad notes.txt
//! textpad --debug --right-margin 4 notes.txt
//! textpad --exit-pause-ms 0 --save
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use textpad::app::App;
use textpad::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use textpad::perf;

/// A small full-screen terminal text editor
#[derive(Parser, Debug)]
#[command(name = "textpad", version, about, long_about = None)]
struct Cli {
    /// File to edit; created on save if it does not exist
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Show cursor and window metrics in the status line
    #[arg(long)]
    debug: bool,

    /// Columns of the previous page kept visible after a horizontal jump
    #[arg(long, value_name = "N")]
    left_margin: Option<usize>,

    /// Columns reserved at the right edge of each horizontal page
    #[arg(long, value_name = "N")]
    right_margin: Option<usize>,

    /// How long the exit message stays up, in milliseconds
    #[arg(long, value_name = "N")]
    exit_pause_ms: Option<u64>,

    /// Write timestamped debug events to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
        tracing::info!(path = %global_path.display(), "saved default flags");
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let debug_log_path = effective
        .debug_log
        .clone()
        .or_else(|| std::env::var_os("TEXTPAD_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(debug_log_path.as_deref()) {
        eprintln!(
            "[warn] Failed to initialize debug log {}: {}",
            debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    let Some(file) = cli.file else {
        // Only flag bookkeeping was asked for.
        if cli.save || cli.clear {
            return Ok(());
        }
        anyhow::bail!("No file given - usage: textpad [OPTIONS] FILE");
    };

    let content = if file.exists() {
        fs::read_to_string(&file).with_context(|| format!("Failed to read {}", file.display()))?
    } else {
        String::new()
    };
    let file_name = file.display().to_string();

    // Run the application
    let mut app = App::new(effective.session_config(content, Some(file_name)));
    let outcome = app.run().context("Application error")?;

    if outcome.save {
        fs::write(&file, outcome.lines.join("\n"))
            .with_context(|| format!("Failed to write {}", file.display()))?;
        tracing::info!(path = %file.display(), lines = outcome.lines.len(), "saved");
    }
    Ok(())
}
