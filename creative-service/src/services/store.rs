//! File-backed persistence for the two brand documents.
//!
//! The DNA document and the exemplar list each live in a single JSON file
//! at a configured path. Writes replace the whole file; there is no
//! locking, so concurrent writers race and the last one wins.

use crate::config::StorageConfig;
use crate::models::{BrandDna, Exemplar};
use serde::Serialize;
use serde_json::Value;
use service_core::error::AppError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

/// Store for the brand DNA document and the exemplar list.
#[derive(Debug, Clone)]
pub struct BrandStore {
    dna_path: PathBuf,
    exemplars_path: PathBuf,
}

impl BrandStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            dna_path: PathBuf::from(&config.dna_path),
            exemplars_path: PathBuf::from(&config.exemplars_path),
        }
    }

    /// Load the DNA document typed for generation. A missing file is an
    /// error: the service cannot generate without a style profile.
    pub async fn load_dna(&self) -> Result<BrandDna, StoreError> {
        read_json(&self.dna_path).await
    }

    /// Load the DNA document verbatim, without imposing the generation
    /// shape. Serves the retrieval endpoint.
    pub async fn load_dna_document(&self) -> Result<Value, StoreError> {
        read_json(&self.dna_path).await
    }

    /// Replace the DNA document wholesale. Last writer wins.
    pub async fn save_dna(&self, dna: &Value) -> Result<(), StoreError> {
        write_json(&self.dna_path, dna).await
    }

    /// Load the exemplar list. A file that does not exist yet reads as an
    /// empty list.
    pub async fn load_exemplars(&self) -> Result<Vec<Exemplar>, StoreError> {
        match fs::read(&self.exemplars_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: display(&self.exemplars_path),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(StoreError::Read {
                path: display(&self.exemplars_path),
                source,
            }),
        }
    }

    /// Append one exemplar and rewrite the list. Read-modify-write without
    /// locking; acceptable at this service's scale.
    pub async fn append_exemplar(&self, text: String) -> Result<Exemplar, StoreError> {
        let mut exemplars = self.load_exemplars().await?;
        let exemplar = Exemplar::new(text);
        exemplars.push(exemplar.clone());
        write_json(&self.exemplars_path, &exemplars).await?;
        Ok(exemplar)
    }

    /// The store is healthy when the DNA document is present and parses.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.load_dna().await.map(|_| ())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let bytes = fs::read(path).await.map_err(|source| StoreError::Read {
        path: display(path),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
        path: display(path),
        source,
    })
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let body = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Parse {
        path: display(path),
        source,
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Write {
                    path: display(path),
                    source,
                })?;
        }
    }

    fs::write(path, body).await.map_err(|source| StoreError::Write {
        path: display(path),
        source,
    })
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
