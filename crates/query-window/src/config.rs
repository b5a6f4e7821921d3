use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::schema::SchemaConfig;
use crate::domain::types::{IngesterWindowRequest, LookbackRequest};
use crate::error::{Error, Result};
use crate::resolver::{QueryWindowResolver, ResolvedQueryWindow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryWindowConfig {
    pub max_chunk_age_seconds: u64,
    pub index_resync_interval_seconds: u64,
    pub max_look_back: LookbackRequest,
    pub query_ingesters_within: IngesterWindowRequest,
    pub schema: SchemaConfig,
}

impl Default for QueryWindowConfig {
    fn default() -> Self {
        Self {
            max_chunk_age_seconds: 2 * 60 * 60,
            index_resync_interval_seconds: 5 * 60,
            max_look_back: LookbackRequest::UseDefault,
            query_ingesters_within: IngesterWindowRequest::from_secs(3 * 60 * 60),
            schema: SchemaConfig::default(),
        }
    }
}

impl QueryWindowConfig {
    pub fn max_chunk_age(&self) -> Duration {
        Duration::from_secs(self.max_chunk_age_seconds)
    }

    pub fn index_resync_interval(&self) -> Duration {
        Duration::from_secs(self.index_resync_interval_seconds)
    }

    pub fn validate(&self) -> Result<()> {
        self.schema.validate()
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| Error::Serialization(format!("json: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("read config {}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(format!("json: {e}")))
    }

    /// Validates and resolves both bounds for every schema period.
    pub fn resolve(&self) -> Result<ResolvedQueryWindow> {
        self.validate()?;
        QueryWindowResolver::from_config(self).resolve(&self.schema)
    }
}
