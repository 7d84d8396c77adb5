//! Configuration loaded from `~/.config/frameshot/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

/// Top-level configuration.
///
/// Missing sections fall back to defaults thanks to `#[serde(default)]`,
/// so an empty or absent file is fully valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Browser content-area inset settings.
    pub chrome: ChromeConfig,
    /// File logging settings.
    pub log: LogConfig,
}

/// Settings for the browser content-area inset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Process-name substrings treated as browsers (matched against the
    /// lowercased executable name).
    pub browsers: Vec<String>,
    /// Top inset in device-independent pixels at 96 DPI.
    pub inset: i32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            browsers: vec!["chrome".into(), "msedge".into()],
            inset: 80,
        }
    }
}

/// Returns the config directory: `~/.config/frameshot/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("frameshot"))
}

/// Returns the config file path: `~/.config/frameshot/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    let config: Config =
        toml::from_str(&content).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(config)
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults; other errors are reported
/// on stderr (stdout is reserved for JSON output) before defaulting.
pub fn load() -> Config {
    match try_load() {
        Ok(config) => config,
        Err(e) if is_file_not_found(&e) => Config::default(),
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Generates the default `config.toml` contents with explanatory comments.
///
/// Used by `frameshot init` to create a starter file users can edit.
pub fn generate_default() -> String {
    r##"# Frameshot configuration
# Location: ~/.config/frameshot/config.toml

[chrome]
# Executable-name substrings treated as browsers. Matching windows get
# their tab strip and toolbar excluded from clientBounds.
browsers = ["chrome", "msedge"]
# Height of that chrome in device-independent pixels (at 96 DPI).
inset = 80

[log]
# Enable file logging to ~/.config/frameshot/logs/frameshot.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in megabytes before rotation.
max_file_mb = 10
"##
    .to_string()
}

/// Returns true if the error message indicates a missing file.
fn is_file_not_found(e: &str) -> bool {
    e.contains("cannot find the path") || e.contains("The system cannot find")
        || e.contains("No such file")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();

        assert_eq!(config.chrome.inset, 80);
        assert_eq!(config.chrome.browsers, vec!["chrome", "msedge"]);
        assert!(!config.log.enabled);
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let config: Config = toml::from_str("").expect("empty config should parse");
        assert_eq!(config.chrome.inset, 80);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[chrome]\ninset = 100\n").expect("should parse");

        assert_eq!(config.chrome.inset, 100);
        // Unspecified fields still default.
        assert_eq!(config.chrome.browsers, vec!["chrome", "msedge"]);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn generated_template_round_trips() {
        let config: Config =
            toml::from_str(&generate_default()).expect("template should be valid TOML");
        assert_eq!(config.chrome.inset, 80);
    }
}
