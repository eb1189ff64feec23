use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScalingError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("invalid sample domain: {0}")]
    InvalidDomain(String),

    #[error("invalid figure layout: {0}")]
    InvalidLayout(String),

    #[error("invalid curve: {0}")]
    InvalidCurve(String),

    #[error("invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    #[error("root search failed: {0}")]
    RootSearch(String),

    #[error("rendering failed: {0}")]
    Render(String),
}

impl ScalingError {
    pub fn render<E: std::fmt::Display>(error: E) -> ScalingError {
        ScalingError::Render(error.to_string())
    }
}
