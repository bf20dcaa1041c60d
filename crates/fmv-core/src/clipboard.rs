//! Clipboard export.
//!
//! Verses are exported as `text — reference` blocks separated by a blank
//! line. Writing is best-effort: [`copy_verses`] logs a failed write and
//! carries on.

use crate::types::Verse;

/// A sink that places text on the system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Format verses for the clipboard.
pub fn format_verses(verses: &[Verse]) -> String {
    verses
        .iter()
        .map(Verse::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format and write `verses` to `clipboard`, ignoring write failures.
///
/// Returns whether the write succeeded so callers can show a status hint.
pub fn copy_verses(clipboard: &mut dyn Clipboard, verses: &[Verse]) -> bool {
    let text = format_verses(verses);
    match clipboard.write_text(&text) {
        Ok(()) => {
            tracing::debug!(verses = verses.len(), bytes = text.len(), "copied to clipboard");
            true
        }
        Err(err) => {
            tracing::debug!(error = %err, "clipboard write failed");
            false
        }
    }
}

/// In-memory clipboard, handy for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
