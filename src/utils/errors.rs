use thiserror::Error;

/// Errors that can occur while building a research response or loading configuration
#[derive(Error, Debug)]
pub enum ResearchError {
    /// Catch-all for any fault raised while a result source builds its records
    #[error("{0}")]
    InternalFault(String),

    #[error("Failed to read config file {path}: {reason}")]
    ConfigIo { path: String, reason: String },

    #[error("Failed to parse config file {path}: {reason}")]
    ConfigParse { path: String, reason: String },
}

impl ResearchError {
    /// Build an internal fault from anything printable
    pub fn internal(reason: impl std::fmt::Display) -> Self {
        ResearchError::InternalFault(reason.to_string())
    }
}

/// Implement From<serde_json::Error> for ResearchError
impl From<serde_json::Error> for ResearchError {
    fn from(err: serde_json::Error) -> Self {
        ResearchError::InternalFault(err.to_string())
    }
}
