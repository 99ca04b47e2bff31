use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GistError {
    #[error("invalid gist id '{0}': expected letters, digits, '-' or '_'")]
    InvalidId(String),
    #[error("invalid gist api url '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
    #[error("gist request timed out after {}s", .0.as_secs_f32())]
    Timeout(Duration),
    #[error("gist request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("gist service returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed gist response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("gist has no files")]
    NoFiles,
    #[error("gist file '{0}' has no content")]
    MissingContent(String),
}

impl GistError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
