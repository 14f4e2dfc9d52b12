//! Neovim remote-control client
//!
//! Just enough msgpack-rpc to ask a running Neovim which terminal device its
//! own stdin is attached to, so that the clipboard sequence reaches the
//! terminal hosting the editor rather than an embedded `:terminal`.

mod rpc;

use std::path::PathBuf;

pub use rpc::{Address, RpcClient, Stream};

use crate::error::PbcopyError;

/// Vimscript evaluated inside Neovim to resolve its controlling terminal
pub const TTY_EXPRESSION: &str = "system('readlink -f /proc/'.getpid().'/fd/0')";

/// Ask the Neovim listening on `address` for the device behind its stdin
pub fn discover_tty(address: &str) -> Result<PathBuf, PbcopyError> {
    let mut client = RpcClient::connect(address)?;
    let output = client.eval(TTY_EXPRESSION)?;

    let tty = output.trim();
    if tty.is_empty() {
        return Err(PbcopyError::remote(address, "empty tty path"));
    }

    log::debug!("Neovim at {} reports tty {}", address, tty);
    Ok(PathBuf::from(tty))
}
