// Configuration type definitions

use serde::Deserialize;

use crate::clipboard::EncodingMode;

/// Which OSC 52 wire form to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModePreference {
    /// Detect from TMUX / TERM
    #[default]
    Auto,
    Direct,
    Tmux,
    Screen,
}

impl ModePreference {
    /// The forced mode, or `None` when detection should run
    pub fn forced(self) -> Option<EncodingMode> {
        match self {
            ModePreference::Auto => None,
            ModePreference::Direct => Some(EncodingMode::Direct),
            ModePreference::Tmux => Some(EncodingMode::MultiplexerWrapped),
            ModePreference::Screen => Some(EncodingMode::ChunkedWindowManager),
        }
    }
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub mode: ModePreference,
    /// OSC 52 selection parameter ("" lets the terminal pick)
    #[serde(default)]
    pub selection: String,
}

/// Neovim configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct NvimConfig {
    #[serde(default = "default_redirect")]
    pub redirect: bool,
}

fn default_redirect() -> bool {
    true
}

impl Default for NvimConfig {
    fn default() -> Self {
        NvimConfig { redirect: true }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub nvim: NvimConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
