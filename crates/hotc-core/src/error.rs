use thiserror::Error;

/// Reasons a CSS colour string could not be read as RGB.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("empty colour string")]
    Empty,
    #[error("unsupported colour notation: {0}")]
    Unsupported(String),
    #[error("malformed hex colour: {0}")]
    BadHex(String),
    #[error("malformed rgb() colour: {0}")]
    BadRgb(String),
}

/// Failures while decoding CMS content or behavior configuration.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown parallax preset: {0}")]
    UnknownPreset(String),
}
