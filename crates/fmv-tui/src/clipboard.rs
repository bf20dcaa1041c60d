//! Terminal clipboard — writes an OSC 52 escape sequence so the hosting
//! terminal (local or over SSH) places the text on the system clipboard.
//!
//! Terminals that do not support OSC 52 silently ignore the sequence, which
//! matches the "failures are not surfaced" contract of copying.

use crossterm::{clipboard::CopyToClipboard, execute};
use fmv_core::clipboard::Clipboard;
use std::io::{self, Write};

/// OSC 52 clipboard over any writer, `stdout` by default.
pub struct TerminalClipboard<W: Write = io::Stdout> {
    out: W,
}

impl TerminalClipboard {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for TerminalClipboard<W> {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        execute!(self.out, CopyToClipboard::to_clipboard_from(text))?;
        Ok(())
    }
}
