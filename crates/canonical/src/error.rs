use thiserror::Error;

/// Errors raised by segment configuration validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("segment config must enable at least one of byggnr, system, komponent, typekode")]
    NoSegmentsEnabled,
}
