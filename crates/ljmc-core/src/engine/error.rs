use super::config::ConfigError;
use crate::core::forcefield::energy::EnergyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Energy evaluation failed: {source}")]
    Energy {
        #[from]
        source: EnergyError,
    },
}
