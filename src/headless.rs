//! Headless one-shot commands: `fmv ask` and `fmv search`.
//!
//! Both write to any [`Write`] so the harnesses can capture output without
//! spawning a process. Text output is meant for people; `--json` output is a
//! single JSON document per invocation.

use anyhow::Context;
use fmv_core::{clipboard::copy_verses, Catalog, Presentation, Presenter, Surface, Verse};
use fmv_corpus::{load_records, search as bulk_search, FullBible};
use serde::Serialize;
use std::{
    io::{self, Write},
    path::Path,
};

/// Options for [`ask`].
#[derive(Debug, Clone)]
pub struct AskOptions {
    pub count: usize,
    pub json: bool,
    pub copy: bool,
}

#[derive(Serialize)]
struct AskOutput<'a> {
    key: &'a str,
    title: &'a str,
    tier: fmv_core::MatchTier,
    verses: &'a [Verse],
    image: &'a str,
}

#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    results: &'a [Verse],
}

/// Resolve `feeling` through the presenter and print what it shows.
pub fn ask(feeling: &str, opts: &AskOptions, out: &mut impl Write) -> anyhow::Result<()> {
    let mut presenter = Presenter::new(Catalog::builtin()).with_sample_count(opts.count);
    let mut shown: Option<Presentation> = None;
    let matched = presenter.submit(feeling, &mut shown as &mut dyn Surface);

    let Some(presentation) = shown else {
        anyhow::bail!("presenter did not produce a presentation");
    };

    if opts.json {
        let doc = AskOutput {
            key: presentation.key,
            title: &presentation.title,
            tier: matched.tier,
            verses: &presentation.verses,
            image: presentation.image,
        };
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)?;
    } else {
        write_presentation(&presentation, out)?;
    }

    if opts.copy {
        // OSC 52 goes to stderr so piped stdout stays clean.
        let mut clip = fmv_tui::clipboard::TerminalClipboard::new(io::stderr());
        copy_verses(&mut clip, &presentation.verses);
    }
    Ok(())
}

fn write_presentation(p: &Presentation, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", p.title)?;
    writeln!(out)?;
    for verse in &p.verses {
        writeln!(out, "{verse}")?;
        writeln!(out)?;
    }
    if !p.verses.is_empty() {
        writeln!(out, "{}", p.references())?;
    }
    Ok(())
}

/// Load the dataset at `path` and print up to `max` verses containing `query`.
pub async fn search(
    path: &Path,
    query: &str,
    max: usize,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let records = load_records(path)
        .await
        .with_context(|| format!("bible dataset unavailable: {}", path.display()))?;
    tracing::debug!(records = records.len(), "dataset loaded for search");

    let bible = FullBible::from_records(records);
    let results = bulk_search(&bible, query, max);

    if json {
        serde_json::to_writer_pretty(&mut *out, &SearchOutput { query, results: &results })?;
        writeln!(out)?;
        return Ok(());
    }

    if results.is_empty() {
        writeln!(out, "no verses contain {query:?}")?;
    }
    for verse in &results {
        writeln!(out, "{verse}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(json: bool) -> AskOptions {
        AskOptions { count: 3, json, copy: false }
    }

    #[test]
    fn ask_prints_title_and_references() {
        let mut out = Vec::new();
        ask("I feel worried", &opts(false), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Anxious\n"));
        assert!(text.contains("Philippians 4:6"));
        assert!(text.contains(" | "));
    }

    #[test]
    fn ask_json_reports_tier() {
        let mut out = Vec::new();
        ask("xyzzy", &opts(true), &mut out).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["key"], "seeking");
        assert_eq!(doc["tier"], "fallback");
        assert_eq!(doc["verses"].as_array().unwrap().len(), 2);
        assert!(doc["verses"][0]["ref"].is_string());
    }
}
