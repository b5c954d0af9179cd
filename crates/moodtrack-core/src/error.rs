//! Error taxonomy shared by the mood crates

/// Errors surfaced by classification, estimation and configuration.
#[derive(Debug, thiserror::Error)]
pub enum MoodError {
    /// Blank text was submitted for classification.
    #[error("input text is empty")]
    InvalidInput,
    /// The sentiment estimator failed or could not be reached.
    #[error("sentiment estimator unavailable: {0}")]
    EstimatorUnavailable(String),
    /// A mood name did not match any known label.
    #[error("unknown mood: {0}")]
    UnknownMood(String),
    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
