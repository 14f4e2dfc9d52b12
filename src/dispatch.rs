//! The copy pipeline: read, trim, resolve output, classify, encode, write

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use crate::clipboard::{self, EncodingMode};
use crate::config::Config;
use crate::environment::{self, Environment, ProcessTable};
use crate::error::PbcopyError;
use crate::input;
use crate::nvim;

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Payload was empty after trimming; nothing was written
    Empty,
    /// Sequence of `bytes` length was written using `mode`
    Copied { mode: EncodingMode, bytes: usize },
}

/// Copy the contents of `source` (or `stdin`) to the terminal clipboard
///
/// The sequence goes to `stdout` unless a Neovim address is present in
/// `env` and redirection is enabled, in which case it goes to the terminal
/// device behind that Neovim's stdin.
pub fn run<R, W>(
    source: Option<&Path>,
    stdin: R,
    mut stdout: W,
    env: &Environment,
    config: &Config,
    processes: &dyn ProcessTable,
) -> Result<Outcome, PbcopyError>
where
    R: Read,
    W: Write,
{
    let data = input::read_source(source, stdin)?;
    let payload = input::trim_trailing_newlines(&data);
    if payload.is_empty() {
        log::debug!("Empty payload, nothing to copy");
        return Ok(Outcome::Empty);
    }

    let mut device = open_nvim_tty(env, config)?;
    let out: &mut dyn Write = match device.as_mut() {
        Some(file) => file,
        None => &mut stdout,
    };

    let mode = match config.clipboard.mode.forced() {
        Some(mode) => mode,
        None => environment::classify(env, processes),
    };
    log::debug!("Encoding {} bytes as {:?}", payload.len(), mode);

    let sequence = clipboard::encode_with_selection(payload, mode, &config.clipboard.selection);
    out.write_all(sequence.as_bytes())
        .and_then(|()| out.flush())
        .map_err(PbcopyError::OutputWrite)?;

    Ok(Outcome::Copied {
        mode,
        bytes: sequence.len(),
    })
}

/// Open the terminal device hosting the Neovim named in `env`, if any
fn open_nvim_tty(env: &Environment, config: &Config) -> Result<Option<File>, PbcopyError> {
    let address = match env.nvim_address.as_deref() {
        Some(address) if config.nvim.redirect => address,
        _ => return Ok(None),
    };

    let tty = nvim::discover_tty(address)?;
    let file = OpenOptions::new()
        .write(true)
        .open(&tty)
        .map_err(|e| PbcopyError::remote(address, format!("cannot open {:?}: {}", tty, e)))?;

    log::debug!("Writing to Neovim's terminal {:?}", tty);
    Ok(Some(file))
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod dispatch_tests;
