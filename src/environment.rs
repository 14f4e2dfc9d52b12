//! Terminal environment detection
//!
//! Reads the handful of environment variables that decide how the OSC 52
//! sequence must be framed, once, into an [`Environment`] snapshot.

mod process;

pub use process::{ProcessTable, PsProcessTable};

use std::ffi::OsString;

use crate::clipboard::EncodingMode;

/// tmux flag for control mode (iTerm2 integration), where tmux forwards
/// raw control sequences to a native window
pub const TMUX_CONTROL_MODE_FLAG: &str = "-CC";

/// `TERM` prefix used by GNU screen
pub const SCREEN_TERM_PREFIX: &str = "screen";

/// Snapshot of the environment variables pbcopy consults
///
/// Empty values are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// `TMUX`: "socket_path,server_pid,session"
    pub tmux: Option<String>,
    /// `TERM`
    pub term: Option<String>,
    /// `NVIM`, falling back to `NVIM_LISTEN_ADDRESS`
    pub nvim_address: Option<String>,
}

impl Environment {
    /// Capture the current process environment
    pub fn from_env() -> Self {
        Self::from_os_lookup(|key| std::env::var_os(key))
    }

    /// Build a snapshot from raw OS values; non-UTF-8 bytes are replaced
    /// with U+FFFD rather than treated as unset
    pub fn from_os_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        Self::from_lookup(|key| lookup(key).map(|value| value.to_string_lossy().into_owned()))
    }

    /// Build a snapshot from any variable lookup (used for fixtures)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Environment {
            tmux: get("TMUX"),
            term: get("TERM"),
            nvim_address: get("NVIM").or_else(|| get("NVIM_LISTEN_ADDRESS")),
        }
    }

    /// tmux server pid, the second comma-separated field of `TMUX`
    pub fn tmux_pid(&self) -> Option<&str> {
        self.tmux.as_deref()?.split(',').nth(1)
    }
}

/// Pick the OSC 52 wire form for this environment
///
/// Inside tmux the server's command line is looked up; a failed lookup is
/// treated as "not in control mode" and the passthrough form is used.
pub fn classify(env: &Environment, processes: &dyn ProcessTable) -> EncodingMode {
    if env.tmux.is_some() {
        if let Some(pid) = env.tmux_pid() {
            match processes.command_line(pid) {
                Ok(command) if is_control_mode(&command) => {
                    log::debug!("tmux server {} runs in control mode", pid);
                    return EncodingMode::Direct;
                }
                Ok(_) => {}
                Err(e) => log::debug!("Ignoring tmux server lookup failure: {}", e),
            }
        }
        return EncodingMode::MultiplexerWrapped;
    }

    match env.term.as_deref() {
        Some(term) if term.starts_with(SCREEN_TERM_PREFIX) => EncodingMode::ChunkedWindowManager,
        _ => EncodingMode::Direct,
    }
}

/// True when a space-separated token equals `-CC` exactly
fn is_control_mode(command: &str) -> bool {
    command
        .trim_end_matches(['\n', '\r'])
        .split(' ')
        .any(|arg| arg == TMUX_CONTROL_MODE_FLAG)
}

#[cfg(test)]
#[path = "environment_tests.rs"]
mod environment_tests;
