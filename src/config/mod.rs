use crate::error::{Error, Result};
use crate::search::engine::MAX_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub corpus: CorpusConfig,
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub default_limit: usize,
    pub popular_limit: usize,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let corpus_path = std::env::var("CORPUS_PATH")
            .unwrap_or_else(|_| "./data/corpus.json".to_string())
            .into();

        let default_limit = std::env::var("DEFAULT_LIMIT")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid DEFAULT_LIMIT value".to_string()))?;

        let popular_limit = std::env::var("POPULAR_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid POPULAR_LIMIT value".to_string()))?;

        Ok(Settings {
            corpus: CorpusConfig { path: corpus_path },
            pagination: PaginationConfig {
                default_limit,
                popular_limit,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.pagination.default_limit == 0 || self.pagination.default_limit > MAX_LIMIT {
            return Err(Error::Config(format!(
                "Default limit must be between 1 and {MAX_LIMIT}"
            )));
        }

        if self.pagination.popular_limit == 0 {
            return Err(Error::Config("Popular limit must be non-zero".to_string()));
        }

        Ok(())
    }
}
