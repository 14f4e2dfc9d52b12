use base64::{Engine as _, engine::general_purpose::STANDARD_NO_PAD};

use super::osc52;

/// Wire form of the OSC 52 sequence, chosen once per invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    /// Terminal receives OSC 52 as-is
    Direct,
    /// tmux passthrough envelope
    MultiplexerWrapped,
    /// screen, with the payload split into DCS pieces
    ChunkedWindowManager,
}

/// Encode `payload` as an OSC 52 set-clipboard sequence with an empty
/// selection parameter
pub fn encode(payload: &[u8], mode: EncodingMode) -> String {
    encode_with_selection(payload, mode, "")
}

/// Encode `payload` (base64, standard alphabet, no padding) for `mode`
pub fn encode_with_selection(payload: &[u8], mode: EncodingMode, selection: &str) -> String {
    let b64 = STANDARD_NO_PAD.encode(payload);
    match mode {
        EncodingMode::Direct => osc52::direct(&b64, selection),
        EncodingMode::MultiplexerWrapped => osc52::tmux(&b64, selection),
        EncodingMode::ChunkedWindowManager => osc52::screen(&b64, selection),
    }
}
