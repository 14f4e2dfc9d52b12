// Configuration module for pbcopy
// This module handles loading and parsing configuration from ~/.config/pbcopy/config.toml

mod types;

pub use types::{ClipboardConfig, Config, ModePreference, NvimConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/pbcopy/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config {:?}: {}", config_path, e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            log::debug!("Config parsed successfully: {:?}", config);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config {:?}: {}", config_path, e)),
        },
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/pbcopy/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("pbcopy")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_path_ends_with_pbcopy() {
        let path = get_config_path();
        assert!(path.ends_with(Path::new("pbcopy").join("config.toml")));
    }

    #[test]
    fn test_missing_file_returns_defaults_silently() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(&dir.path().join("config.toml"));

        assert!(result.warning.is_none());
        assert_eq!(result.config.clipboard.mode, ModePreference::Auto);
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let file = write_config("[clipboard]\nmode = \"screen\"\nselection = \"c\"\n\n[nvim]\nredirect = false\n");
        let result = load_config_from(file.path());

        assert!(result.warning.is_none());
        assert_eq!(result.config.clipboard.mode, ModePreference::Screen);
        assert_eq!(result.config.clipboard.selection, "c");
        assert!(!result.config.nvim.redirect);
    }

    #[test]
    fn test_malformed_file_warns_and_uses_defaults() {
        let file = write_config("[clipboard\nmode = \"tmux\"");
        let result = load_config_from(file.path());

        let warning = result.warning.expect("warning for malformed config");
        assert!(warning.contains("Invalid config"));
        assert_eq!(result.config.clipboard.mode, ModePreference::Auto);
    }

    #[test]
    fn test_directory_instead_of_file_warns() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(dir.path());

        assert!(result.warning.unwrap().contains("Failed to read config"));
        assert!(result.config.nvim.redirect);
    }
}
