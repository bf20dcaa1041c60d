//! Configuration types for fmv.
//!
//! [`Config::load`] reads `~/.config/fmv/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
sample_count    = 3
show_references = true
show_image_hint = true

[corpus]
bible_path  = "bible_kjv.json"
max_results = 3

[keybindings]
query_focus = "/"
another     = "n"
copy        = "y"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/fmv/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Verses drawn per presentation.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    /// Show the ` | `-joined reference line under the verses.
    #[serde(default = "default_true")]
    pub show_references: bool,
    #[serde(default = "default_true")]
    pub show_image_hint: bool,
}

fn default_sample_count() -> usize { 3 }
fn default_true() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
            show_references: true,
            show_image_hint: true,
        }
    }
}

/// `[corpus]` section — the optional full-Bible dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    #[serde(default = "default_bible_path")]
    pub bible_path: PathBuf,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_bible_path() -> PathBuf { PathBuf::from("bible_kjv.json") }
fn default_max_results() -> usize { 3 }

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            bible_path: default_bible_path(),
            max_results: default_max_results(),
        }
    }
}

/// `[keybindings]` section of `config.toml`. Each value is a single key.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_query_focus")]
    pub query_focus: String,
    #[serde(default = "default_another")]
    pub another: String,
    #[serde(default = "default_copy")]
    pub copy: String,
}

fn default_query_focus() -> String { "/".to_string() }
fn default_another() -> String { "n".to_string() }
fn default_copy() -> String { "y".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            query_focus: default_query_focus(),
            another: default_another(),
            copy: default_copy(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/fmv/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load `path` layered on top of the built-in defaults. A missing file
    /// yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("fmv")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
