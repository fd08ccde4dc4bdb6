/// Record sources, abstracting over the on-disk player files and mock implementations
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::types::{Dataset, RawRecord};

/// Name of the manifest file listing a dataset's records
pub const MANIFEST_FILE: &str = "players_config.json";

/// Why a single record (or a listing) could not be produced
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("record '{0}' not found")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{id}': {source}")]
    Parse {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    players: Vec<String>,
}

/// Trait for record providers, implemented by the directory source and the mock source
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Explicit listing of a dataset's record identifiers
    async fn manifest(&self, dataset: Dataset) -> Result<Vec<String>, SourceError>;

    /// Keep the candidates that actually exist
    async fn probe(&self, dataset: Dataset, candidates: &[String]) -> Result<Vec<String>, SourceError>;

    /// Retrieve and parse one record
    async fn fetch_record(&self, dataset: Dataset, id: &str) -> Result<RawRecord, SourceError>;
}

/// Parse record bytes into the raw shape the normalizer relies on
pub fn parse_record(id: &str, bytes: &[u8]) -> Result<RawRecord, SourceError> {
    serde_json::from_slice(bytes).map_err(|source| SourceError::Parse {
        id: id.to_string(),
        source,
    })
}

/// Parse a manifest body into its ordered identifier list
pub fn parse_manifest(bytes: &[u8]) -> Result<Vec<String>, serde_json::Error> {
    let manifest: Manifest = serde_json::from_slice(bytes)?;
    Ok(manifest.players)
}

/// Work out which records exist for a dataset
///
/// Prefers the manifest, falls back to probing the known candidates, and
/// finally to the fixed list when probing itself errors. Never fails.
pub async fn discover_records(source: &dyn RecordSource, dataset: Dataset) -> Vec<String> {
    match source.manifest(dataset).await {
        Ok(ids) => {
            debug!("SOURCE: {} manifest lists {} records", dataset.name(), ids.len());
            return ids;
        }
        Err(e) => info!("SOURCE: {} manifest unavailable ({}), probing", dataset.name(), e),
    }

    let candidates = dataset.probe_candidates();
    if candidates.is_empty() {
        return Vec::new();
    }

    match source.probe(dataset, &candidates).await {
        Ok(found) => {
            debug!("SOURCE: {} probe found {} records", dataset.name(), found.len());
            found
        }
        Err(e) => {
            warn!("SOURCE: {} probe failed ({}), using fixed list", dataset.name(), e);
            dataset.fallback_records()
        }
    }
}

/// Reads player records from JSON files on disk
///
/// Each dataset lives in its own directory, optionally with a
/// `players_config.json` manifest alongside the record files.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    regular_dir: PathBuf,
    tournament_dir: PathBuf,
}

impl DirectorySource {
    pub fn new(regular_dir: impl Into<PathBuf>, tournament_dir: impl Into<PathBuf>) -> Self {
        Self {
            regular_dir: regular_dir.into(),
            tournament_dir: tournament_dir.into(),
        }
    }

    pub fn dir(&self, dataset: Dataset) -> &Path {
        match dataset {
            Dataset::Regular => &self.regular_dir,
            Dataset::Tournament => &self.tournament_dir,
        }
    }

    async fn read(path: PathBuf) -> Result<Vec<u8>, SourceError> {
        tokio::fs::read(&path)
            .await
            .map_err(|source| SourceError::Io { path, source })
    }
}

#[async_trait]
impl RecordSource for DirectorySource {
    async fn manifest(&self, dataset: Dataset) -> Result<Vec<String>, SourceError> {
        let path = self.dir(dataset).join(MANIFEST_FILE);
        let bytes = Self::read(path).await?;
        parse_manifest(&bytes).map_err(|source| SourceError::Parse {
            id: MANIFEST_FILE.to_string(),
            source,
        })
    }

    async fn probe(&self, dataset: Dataset, candidates: &[String]) -> Result<Vec<String>, SourceError> {
        let dir = self.dir(dataset);
        tokio::fs::metadata(dir).await.map_err(|source| SourceError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut found = Vec::new();
        for candidate in candidates {
            if tokio::fs::metadata(dir.join(candidate)).await.is_ok() {
                found.push(candidate.clone());
            }
        }
        Ok(found)
    }

    async fn fetch_record(&self, dataset: Dataset, id: &str) -> Result<RawRecord, SourceError> {
        let bytes = Self::read(self.dir(dataset).join(id)).await?;
        parse_record(id, &bytes)
    }
}
