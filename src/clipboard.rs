//! Clipboard module for pbcopy
//!
//! Builds OSC 52 "set clipboard" sequences in one of three wire forms:
//! - Direct (the terminal understands OSC 52 itself)
//! - tmux passthrough (DCS envelope with doubled escapes)
//! - GNU screen chunking (76 byte DCS pieces)

mod backend;
mod osc52;

pub use backend::{EncodingMode, encode, encode_with_selection};
pub use osc52::SCREEN_CHUNK_SIZE;
