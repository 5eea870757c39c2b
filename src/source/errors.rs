use thiserror::Error;

/// Failures of a record source. A failed fetch never changes controller state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered with `success: false`.
    #[error("{0}")]
    Rejected(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Invalid endpoint url: {0}")]
    InvalidUrl(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

impl SourceError {
    /// Text shown to the operator when loading `noun` failed.
    pub fn user_message(&self, noun: &str) -> String {
        match self {
            SourceError::Rejected(reason) => format!("Failed to load {noun}: {reason}"),
            _ => "Database connection error.".to_string(),
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err.to_string())
    }
}

#[cfg(feature = "console")]
impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Decode(err.to_string())
        } else {
            SourceError::Transport(err.to_string())
        }
    }
}
