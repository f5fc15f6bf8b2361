use crate::error::{GraphError, Result};
use crate::search::SearchBounds;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_MAX_STEPS: usize = 3;
pub const DEFAULT_MAX_PATHS: usize = 5;
pub const DEFAULT_WIDE_AREA_THRESHOLD_DEGREES: f64 = 10.0;

/// Tunables for path suggestion.
///
/// ```toml
/// max_steps = 3
/// max_paths = 5
/// wide_area_threshold_degrees = 10.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Longest chain the advisor will suggest
    pub max_steps: usize,

    /// Candidate chains collected before the search stops
    pub max_paths: usize,

    /// Latitude or longitude span (degrees) above which an area is "wide"
    pub wide_area_threshold_degrees: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            max_paths: DEFAULT_MAX_PATHS,
            wide_area_threshold_degrees: DEFAULT_WIDE_AREA_THRESHOLD_DEGREES,
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let cfg: SearchConfig =
            toml::from_str(raw).map_err(|e| GraphError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GraphError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(GraphError::Config("max_steps must be at least 1".to_string()));
        }
        if self.max_paths == 0 {
            return Err(GraphError::Config("max_paths must be at least 1".to_string()));
        }
        if !self.wide_area_threshold_degrees.is_finite() || self.wide_area_threshold_degrees <= 0.0 {
            return Err(GraphError::Config(format!(
                "wide_area_threshold_degrees must be a positive number (got {})",
                self.wide_area_threshold_degrees
            )));
        }
        Ok(())
    }

    pub fn bounds(&self) -> SearchBounds {
        SearchBounds::new(self.max_steps, self.max_paths)
    }
}
