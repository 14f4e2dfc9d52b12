//! OSC 52 sequence framing
//!
//! Each function takes an already base64-encoded payload and wraps it for
//! the terminal (or multiplexer) that will receive it.

/// Maximum base64 characters per DCS piece when running under screen
pub const SCREEN_CHUNK_SIZE: usize = 76;

/// Plain OSC 52, terminated by ST
///
/// Format: \x1b]52;{selection};{base64}\x1b\\
pub fn direct(b64: &str, selection: &str) -> String {
    format!("\x1b]52;{};{}\x1b\\", selection, b64)
}

/// OSC 52 inside tmux's DCS passthrough envelope
///
/// Format: \x1bPtmux;\x1b\x1b]52;{selection};{base64}\x1b\x1b\\\\\x1b\\
///
/// Every ESC inside the envelope is doubled. tmux parses this literally,
/// so the byte layout must not change.
pub fn tmux(b64: &str, selection: &str) -> String {
    format!(
        "\x1bPtmux;\x1b\x1b]52;{};{}\x1b\x1b\\\\\x1b\\",
        selection, b64
    )
}

/// OSC 52 split across screen DCS strings of at most [`SCREEN_CHUNK_SIZE`]
///
/// The first piece opens with `\x1bP\x1b]52;{selection};`, each following
/// piece closes the previous DCS and opens a new one with `\x1b\\\x1bP`,
/// and the whole thing ends with `\x07\x1b\\`. An empty payload still
/// produces the opening piece.
pub fn screen(b64: &str, selection: &str) -> String {
    let pieces = b64.len().div_ceil(SCREEN_CHUNK_SIZE).max(1);
    let mut out = String::with_capacity(b64.len() + pieces * 4 + selection.len() + 10);

    let mut begin = 0;
    loop {
        let end = (begin + SCREEN_CHUNK_SIZE).min(b64.len());
        if begin == 0 {
            out.push_str("\x1bP\x1b]52;");
            out.push_str(selection);
            out.push(';');
        } else {
            out.push_str("\x1b\\\x1bP");
        }
        // base64 is ASCII, so byte offsets are char boundaries
        out.push_str(&b64[begin..end]);
        if end == b64.len() {
            break;
        }
        begin = end;
    }

    out.push_str("\x07\x1b\\");
    out
}
