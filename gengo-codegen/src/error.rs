use thiserror::Error;

/// Result type for gengo-codegen operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Interchange JSON could not be decoded. Malformed type kinds surface
    /// here as the inner `serde_json` error.
    #[error("invalid interchange JSON: {0}")]
    Interchange(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
