//! Detector configuration
//!
//! The defaults reproduce the fixed catalog, a threshold of two signals and
//! five candidates per extracted field. A JSON document may override any
//! subset of these.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogConfig, SignalCatalog};
use crate::classifier::DEFAULT_THRESHOLD;
use crate::error::{DetectError, Result};
use crate::extracted::DEFAULT_CANDIDATE_LIMIT;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Minimum matched signals for a booking
    pub threshold: usize,

    /// Maximum candidates kept per extracted field
    pub max_candidates: usize,

    /// Signal catalog
    pub catalog: CatalogConfig,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_candidates: DEFAULT_CANDIDATE_LIMIT,
            catalog: CatalogConfig::default(),
        }
    }
}

impl DetectorConfig {
    /// Parse a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DetectError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that make the detector meaningless, including catalog
    /// patterns that do not compile
    pub fn validate(&self) -> Result<()> {
        self.compile_catalog().map(drop)
    }

    /// Check the threshold and compile the catalog
    pub fn compile_catalog(&self) -> Result<SignalCatalog> {
        if self.threshold == 0 {
            return Err(DetectError::InvalidConfig(
                "threshold must be at least 1".into(),
            ));
        }
        SignalCatalog::from_config(&self.catalog)
    }
}
