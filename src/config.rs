use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::app::{DEFAULT_EXIT_PAUSE, DEFAULT_LEFT_MARGIN, DEFAULT_RIGHT_MARGIN, SessionConfig};

/// Flags that may come from the command line or an rc file.
///
/// Unset options fall back to the built-in defaults when a
/// [`SessionConfig`] is built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub debug: bool,
    pub left_margin: Option<usize>,
    pub right_margin: Option<usize>,
    pub exit_pause_ms: Option<u64>,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; booleans are OR-ed and options in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            debug: self.debug || other.debug,
            left_margin: other.left_margin.or(self.left_margin),
            right_margin: other.right_margin.or(self.right_margin),
            exit_pause_ms: other.exit_pause_ms.or(self.exit_pause_ms),
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }

    /// Build the session configuration for the given initial text.
    pub fn session_config(&self, content: String, file_name: Option<String>) -> SessionConfig {
        let mut config = SessionConfig::new(content)
            .with_debug(self.debug)
            .with_margins(
                self.left_margin.unwrap_or(DEFAULT_LEFT_MARGIN),
                self.right_margin.unwrap_or(DEFAULT_RIGHT_MARGIN),
            )
            .with_exit_pause(
                self.exit_pause_ms
                    .map_or(DEFAULT_EXIT_PAUSE, Duration::from_millis),
            );
        if let Some(name) = file_name {
            config = config.with_file_name(name);
        }
        config
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("textpad").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("textpad")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("textpad").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("textpad").join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".textpadrc")
}

/// Read flags from an rc file; a missing file yields no flags.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Write flags to an rc file, creating its directory if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# textpad defaults (saved with --save)".to_string()];
    if flags.debug {
        lines.push("--debug".to_string());
    }
    if let Some(n) = flags.left_margin {
        lines.push(format!("--left-margin {n}"));
    }
    if let Some(n) = flags.right_margin {
        lines.push(format!("--right-margin {n}"));
    }
    if let Some(ms) = flags.exit_pause_ms {
        lines.push(format!("--exit-pause-ms {ms}"));
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove an rc file if it exists.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the known flags out of a token list.
///
/// Unknown tokens (the program name, the file argument, `--save`) are
/// skipped, as are numeric flags whose value does not parse.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value)),
            _ => (token, None),
        };
        let takes_value = matches!(
            name,
            "--left-margin" | "--right-margin" | "--exit-pause-ms" | "--debug-log"
        );
        let value = if !takes_value || inline_value.is_some() {
            inline_value
        } else if let Some(next) = tokens.get(i + 1) {
            i += 1;
            Some(next.as_str())
        } else {
            None
        };

        match (name, value) {
            ("--debug", None) => flags.debug = true,
            ("--left-margin", Some(v)) => flags.left_margin = v.parse().ok(),
            ("--right-margin", Some(v)) => flags.right_margin = v.parse().ok(),
            ("--exit-pause-ms", Some(v)) => flags.exit_pause_ms = v.parse().ok(),
            ("--debug-log", Some(v)) => flags.debug_log = Some(PathBuf::from(v)),
            _ => {}
        }
        i += 1;
    }
    flags
}
