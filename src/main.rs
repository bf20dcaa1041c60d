use clap::{Parser, Subcommand};
use fmv::headless::{self, AskOptions};
use std::{io, path::PathBuf};

#[derive(Parser)]
#[command(name = "fmv", about = "Find Me a Verse — encouragement for how you feel")]
struct Cli {
    /// Write debug logs to /tmp/fmv-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    /// Path to the full-Bible JSON dataset (overrides config).
    #[arg(long, global = true)]
    bible: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Cmd>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print verses for a feeling and exit.
    Ask {
        /// How you feel, e.g. `fmv ask stressed about exams`.
        #[arg(required = true)]
        feeling: Vec<String>,
        /// Verses to draw (defaults to `[ui] sample_count`).
        #[arg(long, short = 'n')]
        count: Option<usize>,
        #[arg(long)]
        json: bool,
        /// Also place the verses on the clipboard (OSC 52).
        #[arg(long)]
        copy: bool,
    },
    /// Search the full-Bible dataset for verses containing a phrase.
    Search {
        query: String,
        /// Maximum results (defaults to `[corpus] max_results`).
        #[arg(long)]
        max: Option<usize>,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/fmv-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("fmv debug log started — tail -f /tmp/fmv-debug.log");
    }

    let Some(command) = cli.command else {
        return fmv_tui::run(fmv_tui::RunOptions { bible_path: cli.bible });
    };

    let config = fmv_core::config::Config::load().unwrap_or_else(|err| {
        tracing::debug!(error = %err, "config load failed, using defaults");
        fmv_core::config::Config::defaults()
    });
    let mut stdout = io::stdout().lock();

    match command {
        Cmd::Ask { feeling, count, json, copy } => {
            let opts = AskOptions {
                count: count.unwrap_or(config.ui.sample_count),
                json,
                copy,
            };
            headless::ask(&feeling.join(" "), &opts, &mut stdout)
        }
        Cmd::Search { query, max, json } => {
            let path = cli.bible.unwrap_or(config.corpus.bible_path);
            let max = max.unwrap_or(config.corpus.max_results);
            tokio::runtime::Runtime::new()?
                .block_on(headless::search(&path, &query, max, json, &mut stdout))
        }
    }
}
