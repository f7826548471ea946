use thiserror::Error;

/// Top-level error type for the wall engine.
#[derive(Debug, Error)]
pub enum WallError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Errors raised while validating [`crate::params::WallParams`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tile size must be positive, got {0}")]
    NonPositiveTileSize(f64),

    #[error("expansion margin must be at least one tile")]
    ZeroExpansion,

    #[error("wall attribute name is empty")]
    EmptyAttributeName,

    #[error("invalid color: {0}")]
    InvalidColor(String),
}

/// Errors reported by a [`crate::host::MapHost`] when writing paths.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("host rejected the request: {0}")]
    Rejected(String),
}

/// Convenience type alias for results using [`WallError`].
pub type Result<T> = std::result::Result<T, WallError>;
