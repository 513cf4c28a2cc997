use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    #[error("invalid rgb color: {0}")]
    InvalidRgb(String),

    #[error("unrecognized color format: {0}")]
    Unrecognized(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config write error: {0}")]
    WriteError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TintError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}
