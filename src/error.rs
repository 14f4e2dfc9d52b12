use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PbcopyError {
    #[error("failed to read input")]
    InputRead(#[source] io::Error),

    #[error("process query failed: {0}")]
    ProcessQuery(String),

    #[error("cannot reach Neovim at {address}: {reason}")]
    RemoteDiscovery { address: String, reason: String },

    #[error("failed to write clipboard sequence")]
    OutputWrite(#[source] io::Error),
}

impl PbcopyError {
    pub(crate) fn remote(address: &str, reason: impl ToString) -> Self {
        PbcopyError::RemoteDiscovery {
            address: address.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_cause_is_reported_once() {
        let error = PbcopyError::InputRead(io::Error::new(io::ErrorKind::NotFound, "gone"));

        assert_eq!(error.to_string(), "failed to read input");
        assert_eq!(error.source().map(|e| e.to_string()).as_deref(), Some("gone"));
    }

    #[test]
    fn test_output_write_message_omits_cause() {
        let error = PbcopyError::OutputWrite(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));

        assert!(!error.to_string().contains("closed"));
        assert!(error.source().is_some());
    }
}
