//! Background loader for the full-Bible dataset.
//!
//! [`spawn_load`] is fire-and-forget: it reads and parses the file on the
//! tokio runtime and publishes the records into a [`FullBible`] handle. Any
//! failure is logged at debug level and otherwise ignored; there is no retry.

use crate::{BibleRecord, FullBible};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinHandle;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a JSON array of verse records: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset parse task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Read and parse a dataset file.
///
/// Parsing runs on the blocking pool since a full Bible is tens of
/// megabytes of JSON.
pub async fn load_records(path: &Path) -> Result<Vec<BibleRecord>, LoadError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let owned = path.to_path_buf();
    tokio::task::spawn_blocking(move || {
        serde_json::from_slice::<Vec<BibleRecord>>(&bytes)
            .map_err(|source| LoadError::Parse { path: owned, source })
    })
    .await?
}

/// Load `path` in the background and publish into `bible` on success.
///
/// Must be called from within a tokio runtime. The returned handle may be
/// dropped; awaiting it only tells you the attempt has finished, not whether
/// it succeeded (check [`FullBible::is_available`]).
pub fn spawn_load(path: impl Into<PathBuf>, bible: FullBible) -> JoinHandle<()> {
    let path = path.into();
    tokio::spawn(async move {
        match load_records(&path).await {
            Ok(records) => {
                let count = records.len();
                if bible.publish(records) {
                    tracing::info!(path = %path.display(), verses = count, "full bible loaded");
                } else {
                    tracing::debug!(path = %path.display(), "full bible already loaded; ignoring");
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "full bible unavailable");
            }
        }
    })
}
