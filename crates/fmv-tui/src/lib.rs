//! fmv TUI — ratatui application shell.

pub mod app;
pub mod clipboard;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use fmv_core::config::Config;
use fmv_corpus::{spawn_load, FullBible};
use std::path::PathBuf;

/// Options taken from the command line that override the config file.
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    pub bible_path: Option<PathBuf>,
}

/// Start the interactive shell.
///
/// The full-Bible dataset is loaded on a background task; the shell is usable
/// immediately and the header flips to "available" once the load lands.
pub fn run(opts: RunOptions) -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|err| {
        tracing::debug!(error = %err, "config load failed, using defaults");
        Config::defaults()
    });
    let theme = theme::Theme::load_default();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let bible = FullBible::unavailable();
    let path = opts.bible_path.unwrap_or_else(|| config.corpus.bible_path.clone());
    {
        let _guard = runtime.enter();
        spawn_load(path, bible.clone());
    }

    let clipboard = Box::new(clipboard::TerminalClipboard::stdout());
    let result = App::new(config, theme, bible, clipboard).run();
    runtime.shutdown_background();
    result
}
