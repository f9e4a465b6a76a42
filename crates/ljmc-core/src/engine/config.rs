use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

fn default_tail_correction() -> bool {
    true
}

/// Parameters of one energy-evaluation run.
///
/// The cutoff's positivity is enforced where it becomes binding, at evaluator
/// construction; this layer only checks that the parameter is present.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EnergyConfig {
    pub cutoff: f64,
    #[serde(default = "default_tail_correction")]
    pub tail_correction: bool,
}

impl EnergyConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

#[derive(Default)]
pub struct EnergyConfigBuilder {
    cutoff: Option<f64>,
    tail_correction: Option<bool>,
}

impl EnergyConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    pub fn tail_correction(mut self, enabled: bool) -> Self {
        self.tail_correction = Some(enabled);
        self
    }

    pub fn build(self) -> Result<EnergyConfig, ConfigError> {
        Ok(EnergyConfig {
            cutoff: self
                .cutoff
                .ok_or(ConfigError::MissingParameter("cutoff"))?,
            tail_correction: self.tail_correction.unwrap_or(true),
        })
    }
}
