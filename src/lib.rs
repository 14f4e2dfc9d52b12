//! pbcopy library - copy to the terminal clipboard over OSC 52
//!
//! This library exposes the core functionality of pbcopy for testing purposes.

pub mod clipboard;
pub mod config;
pub mod dispatch;
pub mod environment;
pub mod error;
pub mod input;
pub mod nvim;

// Re-export commonly used types for convenience
pub use clipboard::{EncodingMode, encode};
pub use config::Config;
pub use dispatch::{Outcome, run};
pub use environment::{Environment, classify};
pub use error::PbcopyError;
